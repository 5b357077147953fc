//! Auth Routes
//!
//! - POST /api/auth/register - Create an account
//! - POST /api/auth/login - Exchange credentials for a bearer token

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::devserver::error::ServerResult;
use crate::devserver::state::DevState;
use crate::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

/// POST /api/auth/register
pub async fn register(
    State(state): State<Arc<DevState>>,
    Json(req): Json<RegisterRequest>,
) -> ServerResult<(StatusCode, Json<MessageResponse>)> {
    let user = state
        .store
        .write()
        .await
        .register(&req.username, &req.email, &req.password)?;

    tracing::info!(user_id = user.id, username = %user.username, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<DevState>>,
    Json(req): Json<LoginRequest>,
) -> ServerResult<Json<LoginResponse>> {
    let (access_token, user) = state.store.write().await.login(&req.email, &req.password)?;

    tracing::info!(user_id = user.id, "Token issued");

    Ok(Json(LoginResponse { access_token, user }))
}
