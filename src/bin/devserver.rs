//! VendorHub Dev Server
//!
//! Run with: cargo run --bin vendorhub-devserver
//!
//! Serves the VendorHub REST API from memory, seeded with a demo account
//! (`demo@vendorhub.local` / `demo123`), three vendors, three contracts,
//! and a few reviews. Nothing is persisted across restarts.
//!
//! # Configuration
//!
//! Reads the same config file as the console. Environment variables:
//! - `VENDORHUB_DEVSERVER_HOST`: Host to bind to (default: 127.0.0.1)
//! - `VENDORHUB_DEVSERVER_PORT`: Port to listen on (default: 5000)
//! - `VENDORHUB_LOG_LEVEL`, `VENDORHUB_LOG_FORMAT`
//! - `RUST_LOG`: Full filter override

use vendorhub::devserver::{serve, DevState};
use vendorhub::logging::init_logging;
use vendorhub::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    init_logging(&config.logging, "tower_http=debug");

    tracing::info!(
        "Starting VendorHub dev server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = DevState::seeded();
    serve(state, &config.devserver).await?;

    tracing::info!("VendorHub dev server stopped");
    Ok(())
}
