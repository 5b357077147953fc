//! Read-only aggregates computed by the backend.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// `GET /analytics/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub active_vendors: u64,
    #[serde(default, deserialize_with = "super::de::money")]
    pub total_contract_value: Option<f64>,
    #[serde(default)]
    pub expiring_soon: u64,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// `GET /analytics/vendors-by-category`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(default)]
    pub category: Option<String>,
    pub count: u64,
}

/// `GET /analytics/spending-by-vendor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSpending {
    pub vendor: String,
    #[serde(default, deserialize_with = "super::de::money_or_zero")]
    pub total: f64,
}

/// `GET /analytics/contract-status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

/// `GET /analytics/vendor-performance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRating {
    pub month: String,
    pub average_rating: f64,
}

/// `GET /profiles/top-performing`: a vendor joined with its aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopVendor {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "super::de::money")]
    pub total_contract_value: Option<f64>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_fields_accept_strings() {
        let summary: AnalyticsSummary = serde_json::from_str(
            r#"{"active_vendors": 3, "total_contract_value": "45250.50", "expiring_soon": 1}"#,
        )
        .unwrap();
        assert_eq!(summary.total_contract_value, Some(45250.5));

        let spending: Vec<VendorSpending> = serde_json::from_str(
            r#"[{"vendor": "Acme", "total": "1200.00"}, {"vendor": "Boda", "total": 300}]"#,
        )
        .unwrap();
        assert_eq!(spending[0].total, 1200.0);
        assert_eq!(spending[1].total, 300.0);

        let top: TopVendor = serde_json::from_str(
            r#"{"name": "Acme", "total_contract_value": "9000", "average_rating": 4.5}"#,
        )
        .unwrap();
        assert_eq!(top.total_contract_value, Some(9000.0));
    }
}
