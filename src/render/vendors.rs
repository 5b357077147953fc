//! Vendor list rows and profile cards.
//!
//! The category filter is applied by the server; only the name search is
//! re-applied here.

use super::format::{avatar_color, initials};
use crate::models::{EntityId, Vendor};

/// One row of the vendor management list
#[derive(Debug, Clone, PartialEq)]
pub struct VendorRow {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub email: String,
    pub phone: String,
}

/// One card of the vendor profiles grid
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub id: EntityId,
    pub name: String,
    pub initials: String,
    pub avatar_color: &'static str,
    pub category: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contract_info: String,
}

/// Case-insensitive name substring match; an empty term keeps everything
pub fn filter_vendors<'a>(vendors: &'a [Vendor], search: &str) -> Vec<&'a Vendor> {
    let term = search.trim().to_lowercase();
    vendors
        .iter()
        .filter(|v| term.is_empty() || v.name.to_lowercase().contains(&term))
        .collect()
}

pub fn vendor_rows(vendors: &[Vendor], search: &str) -> Vec<VendorRow> {
    filter_vendors(vendors, search)
        .into_iter()
        .map(|v| VendorRow {
            id: v.id,
            name: v.name.clone(),
            category: or_placeholder(&v.category, "No category"),
            email: or_placeholder(&v.email, "No email"),
            phone: or_placeholder(&v.phone, "No phone"),
        })
        .collect()
}

pub fn profile_cards(vendors: &[Vendor], search: &str) -> Vec<ProfileCard> {
    filter_vendors(vendors, search)
        .into_iter()
        .map(|v| ProfileCard {
            id: v.id,
            name: v.name.clone(),
            initials: initials(&v.name),
            avatar_color: avatar_color(v.id),
            category: or_placeholder(&v.category, "No category"),
            email: or_placeholder(&v.email, "No email"),
            phone: or_placeholder(&v.phone, "No phone"),
            address: or_placeholder(&v.address, "No address"),
            contract_info: "No contract info".to_string(),
        })
        .collect()
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: EntityId, name: &str, category: Option<&str>) -> Vendor {
        Vendor {
            id,
            name: name.to_string(),
            business_id: None,
            phone: None,
            email: None,
            address: None,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_search_matches_name_substring() {
        let vendors = vec![vendor(1, "Acme", None), vendor(2, "Boda", None)];
        let rows = vendor_rows(&vendors, "ac");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Acme");
    }

    #[test]
    fn test_empty_search_keeps_all() {
        let vendors = vec![vendor(1, "Acme", None), vendor(2, "Boda", None)];
        assert_eq!(vendor_rows(&vendors, "").len(), 2);
        assert_eq!(vendor_rows(&vendors, "   ").len(), 2);
    }

    #[test]
    fn test_category_is_not_refiltered() {
        // The server already applied category=IT; a stray row of another
        // category is still shown.
        let vendors = vec![vendor(1, "Acme", Some("IT")), vendor(2, "Boda", Some("Food"))];
        let rows = vendor_rows(&vendors, "");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].category, "Food");
    }

    #[test]
    fn test_placeholders() {
        let rows = vendor_rows(&[vendor(1, "Acme", Some(" "))], "");
        assert_eq!(rows[0].category, "No category");
        assert_eq!(rows[0].email, "No email");
        assert_eq!(rows[0].phone, "No phone");
    }

    #[test]
    fn test_profile_cards() {
        let mut v = vendor(2, "Boda Logistics", Some("Transport"));
        v.address = Some("1 Dock Rd".to_string());
        let cards = profile_cards(&[v], "logi");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].initials, "BL");
        assert_eq!(cards[0].address, "1 Dock Rd");
        assert_eq!(cards[0].avatar_color, avatar_color(2));
    }
}
