//! Vendor performance reviews.

use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub vendor_id: EntityId,
    pub rating: f64,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Body of `POST /profiles/{vendorId}/performance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub rating: f64,
    pub comments: String,
    pub date: String,
}
