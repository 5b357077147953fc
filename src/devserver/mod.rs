//! Development Backend
//!
//! An in-memory stand-in for the VendorHub REST API, built with Axum. It
//! serves every endpoint the console calls, under `/api`, so the console can
//! be run and tested without the production backend.
//!
//! Sign in with `demo@vendorhub.local` / `demo123`, or register a new
//! account. Tokens live until the process exits.

pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use error::{ServerError, ServerResult};
pub use state::DevState;
pub use store::{DevStore, DEMO_EMAIL, DEMO_PASSWORD};

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::DevServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: DevState) -> Router {
    let api_routes = Router::new()
        // Auth routes
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        // Vendor routes
        .route(
            "/vendors",
            get(routes::vendors::list_vendors).post(routes::vendors::create_vendor),
        )
        .route(
            "/vendors/:id",
            put(routes::vendors::update_vendor).delete(routes::vendors::delete_vendor),
        )
        // Contract routes
        .route(
            "/contracts",
            get(routes::contracts::list_contracts).post(routes::contracts::create_contract),
        )
        .route(
            "/contracts/:id",
            put(routes::contracts::update_contract).delete(routes::contracts::delete_contract),
        )
        // Analytics routes
        .route("/analytics/summary", get(routes::analytics::summary))
        .route(
            "/analytics/vendors-by-category",
            get(routes::analytics::vendors_by_category),
        )
        .route(
            "/analytics/spending-by-vendor",
            get(routes::analytics::spending_by_vendor),
        )
        .route("/analytics/contract-status", get(routes::analytics::contract_status))
        .route(
            "/analytics/vendor-performance",
            get(routes::analytics::vendor_performance),
        )
        // Profile routes
        .route("/profiles/top-performing", get(routes::profiles::top_performing))
        .route(
            "/profiles/:vendor_id/performance",
            get(routes::profiles::list_reviews).post(routes::profiles::add_review),
        );

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dev server
pub async fn serve(state: DevState, config: &DevServerConfig) -> Result<(), ServerError> {
    let router = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("VendorHub dev server listening on http://{}/api", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Dev server shut down");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
