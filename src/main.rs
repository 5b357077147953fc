//! VendorHub CLI
//!
//! Terminal console for the VendorHub backend:
//! - Sign in and out
//! - Manage vendors and contracts
//! - Read and add vendor performance reviews
//! - Show analytics

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use vendorhub::api::ReqwestTransport;
use vendorhub::config::LoggingConfig;
use vendorhub::logging::init_logging;
use vendorhub::pages::{
    login, logout, register, AnalyticsPage, ContractManagementPage, LoginForm, Page,
    ReviewForm, Route, SignupForm, StatusTab, VendorManagementPage, VendorProfilesPage,
};
use vendorhub::render::{filter_contracts, filter_vendors, format_rating, top_vendor_rows};
use vendorhub::session::FileStore;
use vendorhub::state::{LoadPhase, NoticeKind};
use vendorhub::{ApiClient, Config, Console, ConsoleContext, SessionStore};

#[derive(Parser)]
#[command(name = "vendorhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Vendor and contract management console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Password confirmation (defaults to --password)
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Show the signed-in user
    Whoami,

    /// Vendor management
    Vendors {
        #[command(subcommand)]
        action: VendorCommand,
    },

    /// Vendor profiles and performance reviews
    Profiles {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Contract management
    Contracts {
        #[command(subcommand)]
        action: ContractCommand,
    },

    /// Summary, charts, and top vendors
    Analytics,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum VendorCommand {
    /// List vendors
    List {
        /// Server-side category filter
        #[arg(short, long)]
        category: Option<String>,
        /// Name search
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create a vendor
    Create(VendorArgs),
    /// Update a vendor; omitted fields keep their value
    Update {
        id: i64,
        #[command(flatten)]
        fields: VendorArgs,
    },
    /// Delete a vendor
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct VendorArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub business_id: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// List vendor profiles
    List {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a vendor's performance reviews
    Reviews { vendor_id: i64 },
    /// Add a performance review
    Review {
        vendor_id: i64,
        /// 1 to 5
        #[arg(short, long)]
        rating: String,
        #[arg(short, long, default_value = "")]
        comments: String,
        /// YYYY-MM-DD (default: today)
        #[arg(short, long, default_value = "")]
        date: String,
    },
    /// Top performing vendors
    Top,
}

#[derive(Subcommand)]
pub enum ContractCommand {
    /// List contracts
    List {
        /// all, active, expiring, expired
        #[arg(short = 't', long, default_value = "all")]
        status: String,
        /// Title or description search
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create a contract
    Create(ContractArgs),
    /// Update a contract; omitted fields keep their value
    Update {
        id: i64,
        #[command(flatten)]
        fields: ContractArgs,
    },
    /// Renew a contract from its end date
    Renew {
        id: i64,
        /// New end date (YYYY-MM-DD)
        #[arg(long)]
        end_date: String,
    },
    /// Delete a contract
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct ContractArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub vendor_id: Option<String>,
    /// active, expiring, expired
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub value: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_default();
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(
        &LoggingConfig {
            level: if cli.verbose { "debug" } else { "warn" }.to_string(),
            format: config.logging.format.clone(),
        },
        "",
    );

    if let Commands::Config { output } = &cli.command {
        let content = vendorhub::generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let session = Rc::new(SessionStore::new(Rc::new(FileStore::new(
        config.session_path(),
    ))));
    let transport = Rc::new(
        ReqwestTransport::new(config.request_timeout()).context("Failed to build HTTP client")?,
    );
    let api = ApiClient::new(config.api.base_url.clone(), transport, session);
    let ctx = ConsoleContext::new(api);
    let console = Console::new(ctx.clone());
    console.start(&command_route(&cli.command).href());

    let json = cli.format == "json";
    run(&ctx, cli.command, json).await?;

    if flush_notices(&ctx) {
        std::process::exit(1);
    }
    Ok(())
}

fn command_route(command: &Commands) -> Route {
    match command {
        Commands::Vendors { .. } => Route::new(Page::VendorManagement),
        Commands::Profiles { .. } => Route::new(Page::VendorProfiles),
        Commands::Contracts { .. } => Route::new(Page::ContractManagement),
        Commands::Analytics => Route::new(Page::Analytics),
        _ => Route::home(),
    }
}

async fn run(ctx: &ConsoleContext, command: Commands, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password } => {
            let form = LoginForm { email, password };
            if let Ok(user) = login(ctx, &form).await {
                println!("Logged in as {} <{}>", user.username, user.email);
            }
        }

        Commands::Logout => {
            if !logout(ctx) {
                println!("Not logged in.");
            } else {
                println!("Logged out.");
            }
        }

        Commands::Register {
            username,
            email,
            password,
            confirm,
        } => {
            let form = SignupForm {
                username,
                email,
                confirm_password: confirm.unwrap_or_else(|| password.clone()),
                password,
            };
            let _ = register(ctx, &form).await;
        }

        Commands::Whoami => match ctx.session.current_user() {
            Some(user) if json => print_json(&user)?,
            Some(user) => {
                println!("{} <{}>", user.username, user.email);
                if let Some(role) = user.role {
                    println!("Role: {}", role);
                }
            }
            None => println!("Not logged in."),
        },

        Commands::Vendors { action } => run_vendors(ctx, action, json).await?,
        Commands::Profiles { action } => run_profiles(ctx, action, json).await?,
        Commands::Contracts { action } => run_contracts(ctx, action, json).await?,

        Commands::Analytics => {
            let page = AnalyticsPage::new(ctx.clone());
            page.activate().await;

            let Some(data) = page.data.with(|d| d.data().cloned()) else {
                return Ok(());
            };
            if json {
                return print_json(&data);
            }

            for tile in data.tiles() {
                println!("{:<22} {}", tile.label, tile.value);
            }
            for chart in data.charts() {
                println!();
                println!("{}", chart.title);
                println!("{}", "-".repeat(50));
                for (i, (label, value)) in chart.points().enumerate() {
                    let bar = "#".repeat((chart.share(i) / 5.0).round() as usize);
                    println!("{:<20} {:<20} {}", label, bar, value);
                }
            }

            println!();
            println!("Top Performing Vendors");
            print_top_vendors(&data.top_rows());
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

async fn run_vendors(
    ctx: &ConsoleContext,
    action: VendorCommand,
    json: bool,
) -> anyhow::Result<()> {
    let page = VendorManagementPage::new(ctx.clone());

    match action {
        VendorCommand::List { category, search } => {
            page.search.set(search.unwrap_or_default());
            page.set_category(category.unwrap_or_default()).await;
            if page.vendors.with(|v| v.phase) != LoadPhase::Rendered {
                return Ok(());
            }

            if json {
                let search = page.search.get();
                let vendors = page.vendors.with(|v| {
                    v.data()
                        .map(|list| filter_vendors(list, &search).into_iter().cloned().collect())
                        .unwrap_or_else(Vec::new)
                });
                return print_json(&vendors);
            }

            let rows = page.rows();
            if rows.is_empty() {
                println!("No vendors found.");
                return Ok(());
            }
            println!(
                "{:<6} {:<28} {:<18} {:<28} {}",
                "ID", "Name", "Category", "Email", "Phone"
            );
            println!("{}", "-".repeat(96));
            for row in rows {
                println!(
                    "{:<6} {:<28} {:<18} {:<28} {}",
                    row.id, row.name, row.category, row.email, row.phone
                );
            }
        }

        VendorCommand::Create(fields) => {
            page.update_form(|input| fields.apply(input));
            if let Ok(vendor) = page.submit_form().await {
                println!("Vendor #{} created.", vendor.id);
            }
        }

        VendorCommand::Update { id, fields } => {
            if page.begin_edit(id).await.is_ok() {
                page.update_form(|input| fields.apply(input));
                let _ = page.submit_form().await;
            }
        }

        VendorCommand::Delete { id, yes } => {
            if yes || confirm("Are you sure you want to delete this vendor?")? {
                let _ = page.delete(id).await;
            }
        }
    }

    Ok(())
}

impl VendorArgs {
    fn apply(self, input: &mut vendorhub::models::VendorInput) {
        let fields = [
            (self.name, &mut input.name),
            (self.business_id, &mut input.business_id),
            (self.phone, &mut input.phone),
            (self.email, &mut input.email),
            (self.address, &mut input.address),
            (self.category, &mut input.category),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

async fn run_profiles(
    ctx: &ConsoleContext,
    action: ProfileCommand,
    json: bool,
) -> anyhow::Result<()> {
    let page = VendorProfilesPage::new(ctx.clone());

    match action {
        ProfileCommand::List { category, search } => {
            page.search.set(search.unwrap_or_default());
            page.set_category(category.unwrap_or_default()).await;

            let cards = page.cards();
            if json {
                let ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
                let vendors: Vec<_> = page.vendors.with(|v| {
                    v.data()
                        .map(|list| list.iter().filter(|v| ids.contains(&v.id)).cloned().collect())
                        .unwrap_or_default()
                });
                return print_json(&vendors);
            }
            for card in cards {
                println!("[{}] {} ({})", card.initials, card.name, card.category);
                println!("     {} | {} | {}", card.email, card.phone, card.address);
                println!("     {}", card.contract_info);
            }
        }

        ProfileCommand::Reviews { vendor_id } => {
            page.view(vendor_id).await;
            let Some(reviews) = page.reviews.with(|r| r.data().cloned()) else {
                return Ok(());
            };
            if json {
                return print_json(&reviews);
            }
            if reviews.is_empty() {
                println!("No reviews yet.");
            }
            for review in reviews {
                println!(
                    "{:<12} {:<5} {}",
                    review.date.as_deref().unwrap_or("-"),
                    format_rating(Some(review.rating)),
                    review.comments.as_deref().unwrap_or("")
                );
            }
        }

        ProfileCommand::Review {
            vendor_id,
            rating,
            comments,
            date,
        } => {
            page.selected.set(Some(vendor_id));
            page.review_form.set(ReviewForm {
                rating,
                comments,
                date,
            });
            let _ = page.submit_review().await;
        }

        ProfileCommand::Top => match ctx.api.top_performing_vendors().await {
            Ok(top) if json => print_json(&top)?,
            Ok(top) => print_top_vendors(&top_vendor_rows(&top)),
            Err(e) => ctx.report(&e),
        },
    }

    Ok(())
}

async fn run_contracts(
    ctx: &ConsoleContext,
    action: ContractCommand,
    json: bool,
) -> anyhow::Result<()> {
    let page = ContractManagementPage::new(ctx.clone());

    match action {
        ContractCommand::List { status, search } => {
            let tab = StatusTab::parse(&status)
                .with_context(|| format!("Unknown status tab: {}", status))?;
            page.search.set(search.unwrap_or_default());
            page.set_tab(tab).await;
            if page.contracts.with(|c| c.phase) != LoadPhase::Rendered {
                return Ok(());
            }

            if json {
                let search = page.search.get();
                let contracts: Vec<_> = page.contracts.with(|c| {
                    c.data()
                        .map(|list| filter_contracts(list, &search).into_iter().cloned().collect())
                        .unwrap_or_default()
                });
                return print_json(&contracts);
            }

            let cards = page.cards();
            if cards.is_empty() {
                println!("No contracts found.");
                return Ok(());
            }
            println!(
                "{:<6} {:<26} {:<10} {:<22} {:<12} {:<12} {}",
                "ID", "Title", "Status", "Vendor", "Start", "End", "Value"
            );
            println!("{}", "-".repeat(104));
            for card in cards {
                println!(
                    "{:<6} {:<26} {:<10} {:<22} {:<12} {:<12} {}",
                    card.id,
                    card.title,
                    card.status_label,
                    card.vendor,
                    card.start_date,
                    card.end_date,
                    card.value
                );
            }
        }

        ContractCommand::Create(fields) => {
            page.form.update(|form| fields.apply(form));
            if let Ok(contract) = page.submit_form().await {
                println!("Contract #{} created.", contract.id);
            }
        }

        ContractCommand::Update { id, fields } => {
            page.load().await;
            if page.edit(id) {
                page.form.update(|form| fields.apply(form));
                let _ = page.submit_form().await;
            } else if page.contracts.with(|c| c.phase) == LoadPhase::Rendered {
                ctx.notices.error(format!("Contract {} not found", id));
            }
        }

        ContractCommand::Renew { id, end_date } => {
            page.load().await;
            if page.renew(id) {
                page.form.update(|form| form.end_date = end_date);
                let _ = page.submit_form().await;
            } else if page.contracts.with(|c| c.phase) == LoadPhase::Rendered {
                ctx.notices.error(format!("Contract {} not found", id));
            }
        }

        ContractCommand::Delete { id, yes } => {
            if yes || confirm("Are you sure you want to delete this contract?")? {
                let _ = page.delete(id).await;
            }
        }
    }

    Ok(())
}

impl ContractArgs {
    fn apply(self, form: &mut vendorhub::pages::ContractForm) {
        let fields = [
            (self.title, &mut form.title),
            (self.description, &mut form.description),
            (self.vendor_id, &mut form.vendor_id),
            (self.status, &mut form.status),
            (self.start_date, &mut form.start_date),
            (self.end_date, &mut form.end_date),
            (self.value, &mut form.value),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

fn print_top_vendors(rows: &[vendorhub::render::TopVendorRow]) {
    if rows.is_empty() {
        println!("No rated vendors yet.");
        return;
    }
    println!(
        "{:<28} {:<18} {:<14} {:<8} {}",
        "Vendor", "Category", "Total Value", "Rating", "Status"
    );
    println!("{}", "-".repeat(80));
    for row in rows {
        println!(
            "{:<28} {:<18} {:<14} {:<8} {}",
            row.name, row.category, row.total_value, row.rating, row.status
        );
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Ask a yes/no question on stdin
fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Print pending notices. Returns true if any was an error.
fn flush_notices(ctx: &ConsoleContext) -> bool {
    let mut failed = false;
    for notice in ctx.notices.drain() {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.message),
            NoticeKind::Error => {
                failed = true;
                eprintln!("Error: {}", notice.message);
            }
        }
    }
    failed
}
