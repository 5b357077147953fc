//! Vendor records.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A vendor as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub business_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body of `POST /vendors` and `PUT /vendors/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorInput {
    pub name: String,
    #[serde(default)]
    pub business_id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub category: String,
}

impl From<&Vendor> for VendorInput {
    fn from(vendor: &Vendor) -> Self {
        Self {
            name: vendor.name.clone(),
            business_id: vendor.business_id.clone().unwrap_or_default(),
            phone: vendor.phone.clone().unwrap_or_default(),
            email: vendor.email.clone().unwrap_or_default(),
            address: vendor.address.clone().unwrap_or_default(),
            category: vendor.category.clone().unwrap_or_default(),
        }
    }
}
