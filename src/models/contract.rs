//! Contract records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

/// Contract lifecycle status.
///
/// The backend may grow statuses the console does not know about, so
/// anything unrecognised is kept verbatim in [`ContractStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContractStatus {
    Active,
    Expiring,
    Expired,
    Other(String),
}

impl ContractStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ContractStatus::Active => "active",
            ContractStatus::Expiring => "expiring",
            ContractStatus::Expired => "expired",
            ContractStatus::Other(s) => s,
        }
    }
}

impl From<String> for ContractStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "active" => ContractStatus::Active,
            "expiring" => ContractStatus::Expiring,
            "expired" => ContractStatus::Expired,
            _ => ContractStatus::Other(s),
        }
    }
}

impl From<ContractStatus> for String {
    fn from(status: ContractStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contract as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub vendor_id: EntityId,
    pub status: ContractStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "super::de::money")]
    pub value: Option<f64>,
}

/// Body of `POST /contracts` and `PUT /contracts/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub vendor_id: EntityId,
    pub status: ContractStatus,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, deserialize_with = "super::de::money")]
    pub value: Option<f64>,
}

impl From<&Contract> for ContractInput {
    fn from(contract: &Contract) -> Self {
        Self {
            title: contract.title.clone(),
            description: contract.description.clone().unwrap_or_default(),
            vendor_id: contract.vendor_id,
            status: contract.status.clone(),
            start_date: contract.start_date.clone().unwrap_or_default(),
            end_date: contract.end_date.clone().unwrap_or_default(),
            value: contract.value,
        }
    }
}
