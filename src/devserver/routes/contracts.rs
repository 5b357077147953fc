//! Contract Routes
//!
//! - GET /api/contracts[?status=] - List contracts
//! - POST /api/contracts - Create a contract
//! - PUT /api/contracts/:id - Update a contract
//! - DELETE /api/contracts/:id - Delete a contract

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use super::{authorize, ListFilter};
use crate::devserver::error::ServerResult;
use crate::devserver::state::DevState;
use crate::models::{Contract, ContractInput, EntityId, MessageResponse};

/// GET /api/contracts
pub async fn list_contracts(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Query(filter): Query<ListFilter>,
) -> ServerResult<Json<Vec<Contract>>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.list_contracts(filter.status())))
}

/// POST /api/contracts
pub async fn create_contract(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Json(input): Json<ContractInput>,
) -> ServerResult<(StatusCode, Json<Contract>)> {
    authorize(&state, &headers).await?;
    let contract = state.store.write().await.create_contract(input)?;
    tracing::info!(contract_id = contract.id, "Contract created");
    Ok((StatusCode::CREATED, Json(contract)))
}

/// PUT /api/contracts/:id
pub async fn update_contract(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
    Json(input): Json<ContractInput>,
) -> ServerResult<Json<Contract>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.write().await.update_contract(id, input)?))
}

/// DELETE /api/contracts/:id
pub async fn delete_contract(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> ServerResult<Json<MessageResponse>> {
    authorize(&state, &headers).await?;
    state.store.write().await.delete_contract(id)?;
    Ok(Json(MessageResponse {
        message: "Contract deleted successfully".to_string(),
    }))
}
