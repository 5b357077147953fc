//! Analytics Routes
//!
//! Read-only aggregates over the in-memory data.

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use super::authorize;
use crate::devserver::error::ServerResult;
use crate::devserver::state::DevState;
use crate::models::{AnalyticsSummary, CategoryCount, MonthlyRating, StatusCount, VendorSpending};

/// GET /api/analytics/summary
pub async fn summary(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
) -> ServerResult<Json<AnalyticsSummary>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.summary()))
}

/// GET /api/analytics/vendors-by-category
pub async fn vendors_by_category(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<CategoryCount>>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.vendors_by_category()))
}

/// GET /api/analytics/spending-by-vendor
pub async fn spending_by_vendor(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<VendorSpending>>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.spending_by_vendor()))
}

/// GET /api/analytics/contract-status
pub async fn contract_status(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<StatusCount>>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.contract_status()))
}

/// GET /api/analytics/vendor-performance
pub async fn vendor_performance(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<MonthlyRating>>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.vendor_performance()))
}
