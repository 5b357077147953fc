//! Dev Server Routes
//!
//! Route handlers organized by resource.

pub mod analytics;
pub mod auth;
pub mod contracts;
pub mod health;
pub mod profiles;
pub mod vendors;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use serde::Deserialize;

use super::error::{ServerError, ServerResult};
use super::state::DevState;
use crate::models::EntityId;

/// Resolve the bearer token to a user id, or answer 401
pub async fn authorize(state: &DevState, headers: &HeaderMap) -> ServerResult<EntityId> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ServerError::Unauthorized)?;

    state.store.read().await.user_for_token(token.trim())
}

/// `?category=` / `?status=` query; blank counts as absent
#[derive(Debug, Default, Deserialize)]
pub struct ListFilter {
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ListFilter {
    pub fn category(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    pub fn status(&self) -> Option<&str> {
        non_blank(&self.status)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
