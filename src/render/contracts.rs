//! Contract cards.
//!
//! The status filter is applied by the server; the title/description search
//! is re-applied here.

use std::collections::HashMap;

use super::format::{capitalize, format_money};
use crate::models::{Contract, ContractStatus, EntityId};

#[derive(Debug, Clone, PartialEq)]
pub struct ContractCard {
    pub id: EntityId,
    pub title: String,
    pub status: ContractStatus,
    pub status_label: String,
    /// Extra card class for highlighted states ("expiring", "expired")
    pub highlight: Option<&'static str>,
    pub vendor: String,
    pub start_date: String,
    pub end_date: String,
    pub value: String,
}

pub fn filter_contracts<'a>(contracts: &'a [Contract], search: &str) -> Vec<&'a Contract> {
    let term = search.trim().to_lowercase();
    contracts
        .iter()
        .filter(|c| {
            term.is_empty()
                || c.title.to_lowercase().contains(&term)
                || c.description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&term))
                    .unwrap_or(false)
        })
        .collect()
}

/// Build cards, resolving `vendor_id` through `vendor_names` when possible
pub fn contract_cards(
    contracts: &[Contract],
    search: &str,
    vendor_names: &HashMap<EntityId, String>,
) -> Vec<ContractCard> {
    filter_contracts(contracts, search)
        .into_iter()
        .map(|c| ContractCard {
            id: c.id,
            title: c.title.clone(),
            status: c.status.clone(),
            status_label: capitalize(c.status.as_str()),
            highlight: match c.status {
                ContractStatus::Expiring => Some("expiring"),
                ContractStatus::Expired => Some("expired"),
                _ => None,
            },
            vendor: vendor_names
                .get(&c.vendor_id)
                .cloned()
                .unwrap_or_else(|| format!("Vendor #{}", c.vendor_id)),
            start_date: c.start_date.clone().unwrap_or_else(|| "N/A".to_string()),
            end_date: c.end_date.clone().unwrap_or_else(|| "N/A".to_string()),
            value: c.value.map(format_money).unwrap_or_else(|| "N/A".to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(id: EntityId, title: &str, description: Option<&str>, status: &str) -> Contract {
        Contract {
            id,
            title: title.to_string(),
            description: description.map(str::to_string),
            vendor_id: 10,
            status: ContractStatus::from(status.to_string()),
            start_date: Some("2026-01-01".to_string()),
            end_date: None,
            value: Some(25000.0),
        }
    }

    #[test]
    fn test_search_title_and_description() {
        let contracts = vec![
            contract(1, "Cleaning", Some("Weekly office cleaning"), "active"),
            contract(2, "Laptops", Some("Hardware refresh"), "expiring"),
        ];

        assert_eq!(filter_contracts(&contracts, "clean").len(), 1);
        assert_eq!(filter_contracts(&contracts, "HARDWARE")[0].id, 2);
        assert_eq!(filter_contracts(&contracts, "").len(), 2);
    }

    #[test]
    fn test_card_fields() {
        let contracts = vec![contract(2, "Laptops", None, "expiring")];
        let mut names = HashMap::new();
        names.insert(10, "Acme".to_string());

        let card = &contract_cards(&contracts, "", &names)[0];
        assert_eq!(card.status_label, "Expiring");
        assert_eq!(card.highlight, Some("expiring"));
        assert_eq!(card.vendor, "Acme");
        assert_eq!(card.end_date, "N/A");
        assert_eq!(card.value, "$25,000");
    }

    #[test]
    fn test_unresolved_vendor_falls_back_to_id() {
        let contracts = vec![contract(1, "Cleaning", None, "active")];
        let card = &contract_cards(&contracts, "", &HashMap::new())[0];
        assert_eq!(card.vendor, "Vendor #10");
        assert_eq!(card.highlight, None);
    }
}
