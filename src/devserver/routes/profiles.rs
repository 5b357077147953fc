//! Profile Routes
//!
//! - GET /api/profiles/top-performing - Best-rated vendors
//! - GET /api/profiles/:vendor_id/performance - Reviews of one vendor
//! - POST /api/profiles/:vendor_id/performance - Add a review

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use super::authorize;
use crate::devserver::error::ServerResult;
use crate::devserver::state::DevState;
use crate::models::{EntityId, Review, ReviewInput, TopVendor};

/// GET /api/profiles/top-performing
pub async fn top_performing(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<TopVendor>>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.top_performing()))
}

/// GET /api/profiles/:vendor_id/performance
pub async fn list_reviews(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Path(vendor_id): Path<EntityId>,
) -> ServerResult<Json<Vec<Review>>> {
    authorize(&state, &headers).await?;
    Ok(Json(state.store.read().await.reviews_for(vendor_id)?))
}

/// POST /api/profiles/:vendor_id/performance
pub async fn add_review(
    State(state): State<Arc<DevState>>,
    headers: HeaderMap,
    Path(vendor_id): Path<EntityId>,
    Json(input): Json<ReviewInput>,
) -> ServerResult<(StatusCode, Json<Review>)> {
    authorize(&state, &headers).await?;
    let review = state.store.write().await.add_review(vendor_id, input)?;
    tracing::info!(vendor_id, rating = review.rating, "Review added");
    Ok((StatusCode::CREATED, Json(review)))
}
