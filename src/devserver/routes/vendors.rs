//! Vendor Routes
//!
//! - GET /api/vendors[?category=] - List vendors
//! - POST /api/vendors - Create a vendor
//! - PUT /api/vendors/:id - Update a vendor
//! - DELETE /api/vendors/:id - Delete a vendor and its contracts

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use super::{authorize, ListFilter};
use crate::devserver::error::ServerResult;
use crate::devserver::state::DevState;
use crate::models::{EntityId, MessageResponse, Vendor, VendorInput};

/// GET /api/vendors
pub async fn list_vendors(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Query(filter): Query<ListFilter>,
) -> ServerResult<Json<Vec<Vendor>>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.list_vendors(filter.category())))
}

/// POST /api/vendors
pub async fn create_vendor(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Json(input): Json<VendorInput>,
) -> ServerResult<(StatusCode, Json<Vendor>)> {
    authorize(&state, &headers).await?;
    let vendor = state.store.write().await.create_vendor(input)?;
    tracing::info!(vendor_id = vendor.id, "Vendor created");
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// PUT /api/vendors/:id
pub async fn update_vendor(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
    Json(input): Json<VendorInput>,
) -> ServerResult<Json<Vendor>> {
    authorize(&state, &headers).await?;
    let vendor = state.store.write().await.update_vendor(id, input)?;
    Ok(Json(vendor))
}

/// DELETE /api/vendors/:id
pub async fn delete_vendor(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> ServerResult<Json<MessageResponse>> {
    authorize(&state, &headers).await?;
    state.store.write().await.delete_vendor(id)?;
    tracing::info!(vendor_id = id, "Vendor deleted");
    Ok(Json(MessageResponse {
        message: "Vendor deleted successfully".to_string(),
    }))
}
