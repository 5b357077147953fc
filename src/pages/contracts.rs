//! Contract management page.
//!
//! Status tabs re-query the server; the title/description search is applied
//! to whatever came back. The vendor directory is fetched alongside the
//! contracts so cards can show vendor names.

use std::collections::HashMap;

use futures_util::future::join;

use super::vendors::FormMode;
use crate::api::{ApiError, ApiResult};
use crate::context::ConsoleContext;
use crate::models::{Contract, ContractInput, ContractStatus, EntityId};
use crate::render::{contract_cards, ContractCard};
use crate::state::{Loadable, Observable, RequestTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    #[default]
    All,
    Active,
    Expiring,
    Expired,
}

impl StatusTab {
    pub const ALL: [StatusTab; 4] = [
        StatusTab::All,
        StatusTab::Active,
        StatusTab::Expiring,
        StatusTab::Expired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::All => "All",
            StatusTab::Active => "Active",
            StatusTab::Expiring => "Expiring",
            StatusTab::Expired => "Expired",
        }
    }

    /// The `status` query value; `None` for the All tab
    pub fn filter(&self) -> Option<&'static str> {
        match self {
            StatusTab::All => None,
            StatusTab::Active => Some("active"),
            StatusTab::Expiring => Some("expiring"),
            StatusTab::Expired => Some("expired"),
        }
    }

    pub fn parse(raw: &str) -> Option<StatusTab> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Raw contract form fields
#[derive(Debug, Clone, PartialEq)]
pub struct ContractForm {
    pub title: String,
    pub description: String,
    pub vendor_id: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub value: String,
    pub mode: FormMode,
}

impl Default for ContractForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            vendor_id: String::new(),
            status: ContractStatus::Active.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            value: String::new(),
            mode: FormMode::Create,
        }
    }
}

impl ContractForm {
    pub fn editing(contract: &Contract) -> Self {
        Self {
            title: contract.title.clone(),
            description: contract.description.clone().unwrap_or_default(),
            vendor_id: contract.vendor_id.to_string(),
            status: contract.status.to_string(),
            start_date: contract.start_date.clone().unwrap_or_default(),
            end_date: contract.end_date.clone().unwrap_or_default(),
            value: contract.value.map(|v| v.to_string()).unwrap_or_default(),
            mode: FormMode::Update(contract.id),
        }
    }

    /// Same contract, starting where the old term ended
    pub fn renewing(contract: &Contract) -> Self {
        Self {
            status: ContractStatus::Active.to_string(),
            start_date: contract.end_date.clone().unwrap_or_default(),
            end_date: String::new(),
            ..Self::editing(contract)
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Contract",
            FormMode::Update(_) => "Update Contract",
        }
    }

    pub fn to_input(&self) -> ApiResult<ContractInput> {
        let invalid = |msg: &str| ApiError::Validation(msg.to_string());

        let title = self.title.trim();
        if title.is_empty() {
            return Err(invalid("Contract title is required"));
        }

        let vendor_id: EntityId = self
            .vendor_id
            .trim()
            .parse()
            .map_err(|_| invalid("Please select a vendor"))?;

        let start = parse_date(&self.start_date).map_err(|_| invalid("Invalid start date"))?;
        let end = parse_date(&self.end_date).map_err(|_| invalid("Invalid end date"))?;
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(invalid("End date must be after the start date"));
            }
        }

        let value = match self.value.trim() {
            "" => None,
            raw => {
                let value: f64 = raw
                    .trim_start_matches('$')
                    .replace(',', "")
                    .parse()
                    .map_err(|_| invalid("Contract value must be a number"))?;
                if value < 0.0 {
                    return Err(invalid("Contract value cannot be negative"));
                }
                Some(value)
            }
        };

        Ok(ContractInput {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            vendor_id,
            status: ContractStatus::from(self.status.trim().to_lowercase()),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            value,
        })
    }
}

fn parse_date(raw: &str) -> Result<Option<chrono::NaiveDate>, chrono::ParseError> {
    match raw.trim() {
        "" => Ok(None),
        raw => chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(Some),
    }
}

pub struct ContractManagementPage {
    ctx: ConsoleContext,
    pub contracts: Observable<Loadable<Vec<Contract>>>,
    pub vendor_names: Observable<HashMap<EntityId, String>>,
    pub tab: Observable<StatusTab>,
    pub search: Observable<String>,
    pub form: Observable<ContractForm>,
    tracker: RequestTracker,
}

impl ContractManagementPage {
    pub fn new(ctx: ConsoleContext) -> Self {
        Self {
            ctx,
            contracts: Observable::default(),
            vendor_names: Observable::default(),
            tab: Observable::default(),
            search: Observable::default(),
            form: Observable::default(),
            tracker: RequestTracker::new(),
        }
    }

    pub async fn activate(&self) {
        self.load().await;
    }

    /// Fetch contracts for the current tab and the vendor directory in
    /// parallel. A failed directory fetch only costs the vendor names.
    pub async fn load(&self) {
        let ticket = self.tracker.issue();
        self.contracts.update(|c| c.begin());

        let tab = self.tab.get();
        let (contracts, vendors) = join(
            self.ctx.api.list_contracts(tab.filter()),
            self.ctx.api.list_vendors(None),
        )
        .await;

        if !self.tracker.is_current(ticket) {
            tracing::debug!(generation = ticket.generation(), "Discarding stale contracts");
            return;
        }

        match vendors {
            Ok(vendors) => self
                .vendor_names
                .set(vendors.into_iter().map(|v| (v.id, v.name)).collect()),
            Err(e) => tracing::warn!(error = %e, "Vendor directory unavailable"),
        }

        match contracts {
            Ok(contracts) => self.contracts.update(|c| c.succeed(contracts)),
            Err(e) => {
                self.contracts.update(|c| c.fail(e.to_string()));
                self.ctx.report_load("contracts", &e);
            }
        }
    }

    pub async fn set_tab(&self, tab: StatusTab) {
        self.tab.set(tab);
        self.load().await;
    }

    pub async fn set_search(&self, term: impl Into<String>) {
        self.search.set(term.into());
        self.load().await;
    }

    pub fn cards(&self) -> Vec<ContractCard> {
        let search = self.search.get();
        self.vendor_names.with(|names| {
            self.contracts.with(|c| {
                c.data()
                    .map(|list| contract_cards(list, &search, names))
                    .unwrap_or_default()
            })
        })
    }

    fn find(&self, id: EntityId) -> Option<Contract> {
        self.contracts
            .with(|c| c.data().and_then(|list| list.iter().find(|c| c.id == id).cloned()))
    }

    pub fn new_contract(&self) {
        self.form.set(ContractForm::default());
    }

    pub fn edit(&self, id: EntityId) -> bool {
        match self.find(id) {
            Some(contract) => {
                self.form.set(ContractForm::editing(&contract));
                true
            }
            None => false,
        }
    }

    pub fn renew(&self, id: EntityId) -> bool {
        match self.find(id) {
            Some(contract) => {
                self.form.set(ContractForm::renewing(&contract));
                true
            }
            None => false,
        }
    }

    pub async fn submit_form(&self) -> ApiResult<Contract> {
        let form = self.form.get();
        let input = match form.to_input() {
            Ok(input) => input,
            Err(e) => {
                self.ctx.report(&e);
                return Err(e);
            }
        };

        let result = match form.mode {
            FormMode::Create => self.ctx.api.create_contract(&input).await,
            FormMode::Update(id) => self.ctx.api.update_contract(id, &input).await,
        };

        match result {
            Ok(contract) => {
                let message = match form.mode {
                    FormMode::Create => "Contract created successfully!",
                    FormMode::Update(_) => "Contract updated successfully!",
                };
                tracing::info!(contract_id = contract.id, "{}", message);
                self.ctx.notices.success(message);
                self.form.set(ContractForm::default());
                self.load().await;
                Ok(contract)
            }
            Err(e) => {
                self.ctx.report(&e);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: EntityId) -> ApiResult<()> {
        match self.ctx.api.delete_contract(id).await {
            Ok(_) => {
                tracing::info!(contract_id = id, "Contract deleted");
                self.ctx.notices.success("Contract deleted successfully!");
                self.load().await;
                Ok(())
            }
            Err(e) => {
                self.ctx.report(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::context::testing::context;

    const CONTRACTS: &str = r#"[
        {"id": 1, "title": "Cleaning", "description": "Office cleaning", "vendor_id": 1,
         "status": "active", "start_date": "2026-01-01", "end_date": "2026-12-31", "value": 12000},
        {"id": 2, "title": "Laptops", "description": "Hardware refresh", "vendor_id": 9,
         "status": "expiring", "value": null}
    ]"#;
    const VENDORS: &str = r#"[{"id": 1, "name": "Acme"}]"#;

    #[tokio::test]
    async fn test_loads_contracts_with_vendor_names() {
        let (transport, ctx) = context(true);
        let page = ContractManagementPage::new(ctx);

        transport.respond_to("/contracts", 200, CONTRACTS);
        transport.respond_to("/vendors", 200, VENDORS);
        page.activate().await;

        let cards = page.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].vendor, "Acme");
        assert_eq!(cards[0].value, "$12,000");
        assert_eq!(cards[1].vendor, "Vendor #9");
        assert_eq!(cards[1].value, "N/A");
    }

    #[tokio::test]
    async fn test_tab_requests_status_and_search_is_local() {
        let (transport, ctx) = context(true);
        let page = ContractManagementPage::new(ctx);

        transport.respond_to("/contracts", 200, CONTRACTS);
        transport.respond_to("/vendors", 200, VENDORS);
        page.set_tab(StatusTab::Expiring).await;
        assert!(transport.urls().iter().any(|u| u.ends_with("/contracts?status=expiring")));

        transport.respond_to("/contracts", 200, CONTRACTS);
        transport.respond_to("/vendors", 200, VENDORS);
        page.set_search("hardware").await;

        let cards = page.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Laptops");
    }

    #[tokio::test]
    async fn test_directory_failure_keeps_contracts() {
        let (transport, ctx) = context(true);
        let page = ContractManagementPage::new(ctx.clone());

        transport.respond_to("/contracts", 200, CONTRACTS);
        transport.respond_to("/vendors", 500, "");
        page.load().await;

        assert_eq!(page.cards()[0].vendor, "Vendor #1");
        assert!(ctx.notices.current().is_empty());
    }

    #[tokio::test]
    async fn test_renew_prefills_update() {
        let (transport, ctx) = context(true);
        let page = ContractManagementPage::new(ctx);

        transport.respond_to("/contracts", 200, CONTRACTS);
        transport.respond_to("/vendors", 200, VENDORS);
        page.load().await;

        assert!(page.renew(1));
        let form = page.form.get();
        assert_eq!(form.mode, FormMode::Update(1));
        assert_eq!(form.start_date, "2026-12-31");
        assert_eq!(form.end_date, "");
        assert_eq!(form.status, "active");
        assert!(!page.renew(42));
    }

    #[tokio::test]
    async fn test_create_contract() {
        let (transport, ctx) = context(true);
        let page = ContractManagementPage::new(ctx);

        page.form.set(ContractForm {
            title: "Catering".to_string(),
            vendor_id: "1".to_string(),
            start_date: "2026-01-01".to_string(),
            end_date: "2026-06-30".to_string(),
            value: "$4,500".to_string(),
            ..Default::default()
        });
        transport.respond_to(
            "/contracts",
            201,
            r#"{"id": 3, "title": "Catering", "vendor_id": 1, "status": "active", "value": 4500}"#,
        );
        transport.respond_to("/contracts", 200, CONTRACTS);
        transport.respond_to("/vendors", 200, VENDORS);

        let contract = page.submit_form().await.unwrap();
        assert_eq!(contract.id, 3);

        let post = &transport.requests()[0];
        let body: serde_json::Value = serde_json::from_str(post.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["value"], 4500.0);
        assert_eq!(body["status"], "active");
        assert_eq!(page.form.get(), ContractForm::default());
    }

    #[test]
    fn test_form_validation() {
        let form = ContractForm {
            title: "X".to_string(),
            vendor_id: "1".to_string(),
            start_date: "2026-05-01".to_string(),
            end_date: "2026-04-01".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.to_input().unwrap_err().to_string(),
            "End date must be after the start date"
        );

        let form = ContractForm {
            title: "X".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_input().unwrap_err().to_string(), "Please select a vendor");
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!(StatusTab::parse("expired"), Some(StatusTab::Expired));
        assert_eq!(StatusTab::parse(" ALL "), Some(StatusTab::All));
        assert_eq!(StatusTab::parse("pending"), None);
    }
}
