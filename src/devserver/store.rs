//! In-memory data behind the development backend.
//!
//! Seeded with a demo account and a handful of vendors, contracts, and
//! reviews. Nothing is persisted.

use std::collections::{BTreeMap, HashMap};

use super::error::{ServerError, ServerResult};
use crate::models::{
    AnalyticsSummary, CategoryCount, Contract, ContractInput, ContractStatus, EntityId,
    MonthlyRating, Review, ReviewInput, StatusCount, TopVendor, User, Vendor, VendorInput,
    VendorSpending,
};

pub const DEMO_EMAIL: &str = "demo@vendorhub.local";
pub const DEMO_PASSWORD: &str = "demo123";

/// How many vendors `/profiles/top-performing` returns
const TOP_VENDOR_LIMIT: usize = 5;

struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
pub struct DevStore {
    accounts: Vec<Account>,
    tokens: HashMap<String, EntityId>,
    vendors: BTreeMap<EntityId, Vendor>,
    contracts: BTreeMap<EntityId, Contract>,
    reviews: Vec<Review>,
    ids: IdSequences,
}

/// One id sequence per table; ids are never reused
#[derive(Default)]
struct IdSequences {
    user: EntityId,
    vendor: EntityId,
    contract: EntityId,
    review: EntityId,
}

fn next(seq: &mut EntityId) -> EntityId {
    *seq += 1;
    *seq
}

impl DevStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo account plus sample records
    pub fn seeded() -> Self {
        let mut store = Self::new();
        // Seeding goes through the same paths as requests; none can fail on
        // an empty store.
        let _ = store.register("demo", DEMO_EMAIL, DEMO_PASSWORD);

        let vendors = [
            ("Acme Office Supplies", "Office Supplies", "orders@acme.example"),
            ("Boda Logistics", "Logistics", "hello@boda.example"),
            ("Cirrus IT Services", "IT", "support@cirrus.example"),
        ];
        for (name, category, email) in vendors {
            let _ = store.create_vendor(VendorInput {
                name: name.to_string(),
                category: category.to_string(),
                email: email.to_string(),
                ..Default::default()
            });
        }

        let contracts = [
            ("Stationery supply", 1, ContractStatus::Active, "2026-01-01", "2026-12-31", 12000.0),
            ("Courier services", 2, ContractStatus::Expiring, "2025-11-01", "2026-10-31", 8400.0),
            ("Helpdesk support", 3, ContractStatus::Expired, "2024-01-01", "2024-12-31", 30000.0),
        ];
        for (title, vendor_id, status, start, end, value) in contracts {
            let _ = store.create_contract(ContractInput {
                title: title.to_string(),
                description: format!("{} agreement", title),
                vendor_id,
                status,
                start_date: start.to_string(),
                end_date: end.to_string(),
                value: Some(value),
            });
        }

        let reviews = [(1, 4.5, "2026-01-15"), (1, 4.0, "2026-02-15"), (2, 3.5, "2026-02-20")];
        for (vendor_id, rating, date) in reviews {
            let _ = store.add_review(
                vendor_id,
                ReviewInput {
                    rating,
                    comments: "Seeded review".to_string(),
                    date: date.to_string(),
                },
            );
        }

        store
    }

    // ============ Auth ============

    pub fn register(&mut self, username: &str, email: &str, password: &str) -> ServerResult<User> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(ServerError::Validation(
                "Username, email, and password are required".to_string(),
            ));
        }
        if self
            .accounts
            .iter()
            .any(|a| a.user.email.eq_ignore_ascii_case(email.trim()))
        {
            return Err(ServerError::Conflict("Email already registered".to_string()));
        }

        let user = User {
            id: next(&mut self.ids.user),
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            role: Some("user".to_string()),
        };
        self.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        Ok(user)
    }

    /// Check credentials and issue a fresh opaque token
    pub fn login(&mut self, email: &str, password: &str) -> ServerResult<(String, User)> {
        let user = self
            .accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
            .map(|a| a.user.clone())
            .ok_or(ServerError::InvalidCredentials)?;

        let token = uuid::Uuid::new_v4().to_string();
        self.tokens.insert(token.clone(), user.id);
        Ok((token, user))
    }

    pub fn user_for_token(&self, token: &str) -> ServerResult<EntityId> {
        self.tokens
            .get(token)
            .copied()
            .ok_or(ServerError::Unauthorized)
    }

    pub fn revoke_token(&mut self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }

    // ============ Vendors ============

    pub fn list_vendors(&self, category: Option<&str>) -> Vec<Vendor> {
        self.vendors
            .values()
            .filter(|v| match category {
                Some(wanted) => v.category.as_deref() == Some(wanted),
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn create_vendor(&mut self, input: VendorInput) -> ServerResult<Vendor> {
        validate_vendor(&input)?;
        let vendor = vendor_from_input(next(&mut self.ids.vendor), input);
        self.vendors.insert(vendor.id, vendor.clone());
        Ok(vendor)
    }

    pub fn update_vendor(&mut self, id: EntityId, input: VendorInput) -> ServerResult<Vendor> {
        validate_vendor(&input)?;
        if !self.vendors.contains_key(&id) {
            return Err(vendor_not_found(id));
        }
        let vendor = vendor_from_input(id, input);
        self.vendors.insert(id, vendor.clone());
        Ok(vendor)
    }

    /// Removing a vendor removes its contracts and reviews too
    pub fn delete_vendor(&mut self, id: EntityId) -> ServerResult<()> {
        self.vendors.remove(&id).ok_or_else(|| vendor_not_found(id))?;
        self.contracts.retain(|_, c| c.vendor_id != id);
        self.reviews.retain(|r| r.vendor_id != id);
        Ok(())
    }

    // ============ Contracts ============

    pub fn list_contracts(&self, status: Option<&str>) -> Vec<Contract> {
        self.contracts
            .values()
            .filter(|c| match status {
                Some(wanted) => c.status.as_str() == wanted,
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn create_contract(&mut self, input: ContractInput) -> ServerResult<Contract> {
        self.validate_contract(&input)?;
        let contract = contract_from_input(next(&mut self.ids.contract), input);
        self.contracts.insert(contract.id, contract.clone());
        Ok(contract)
    }

    pub fn update_contract(&mut self, id: EntityId, input: ContractInput) -> ServerResult<Contract> {
        self.validate_contract(&input)?;
        if !self.contracts.contains_key(&id) {
            return Err(ServerError::NotFound(format!("Contract {} not found", id)));
        }
        let contract = contract_from_input(id, input);
        self.contracts.insert(id, contract.clone());
        Ok(contract)
    }

    pub fn delete_contract(&mut self, id: EntityId) -> ServerResult<()> {
        self.contracts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ServerError::NotFound(format!("Contract {} not found", id)))
    }

    fn validate_contract(&self, input: &ContractInput) -> ServerResult<()> {
        if input.title.trim().is_empty() {
            return Err(ServerError::Validation("Contract title is required".to_string()));
        }
        if !self.vendors.contains_key(&input.vendor_id) {
            return Err(ServerError::Validation(format!(
                "Vendor {} does not exist",
                input.vendor_id
            )));
        }
        Ok(())
    }

    // ============ Reviews ============

    pub fn reviews_for(&self, vendor_id: EntityId) -> ServerResult<Vec<Review>> {
        if !self.vendors.contains_key(&vendor_id) {
            return Err(vendor_not_found(vendor_id));
        }
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    pub fn add_review(&mut self, vendor_id: EntityId, input: ReviewInput) -> ServerResult<Review> {
        if !self.vendors.contains_key(&vendor_id) {
            return Err(vendor_not_found(vendor_id));
        }
        if !(1.0..=5.0).contains(&input.rating) {
            return Err(ServerError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        let review = Review {
            id: Some(next(&mut self.ids.review)),
            vendor_id,
            rating: input.rating,
            comments: non_empty(input.comments),
            date: non_empty(input.date),
        };
        self.reviews.push(review.clone());
        Ok(review)
    }

    // ============ Analytics ============

    pub fn summary(&self) -> AnalyticsSummary {
        AnalyticsSummary {
            active_vendors: self.vendors.len() as u64,
            total_contract_value: Some(self.contracts.values().filter_map(|c| c.value).sum()),
            expiring_soon: self
                .contracts
                .values()
                .filter(|c| c.status == ContractStatus::Expiring)
                .count() as u64,
            average_rating: mean(self.reviews.iter().map(|r| r.rating)),
        }
    }

    pub fn vendors_by_category(&self) -> Vec<CategoryCount> {
        let mut counts: BTreeMap<Option<String>, u64> = BTreeMap::new();
        for vendor in self.vendors.values() {
            *counts.entry(vendor.category.clone()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect()
    }

    pub fn spending_by_vendor(&self) -> Vec<VendorSpending> {
        let mut totals: BTreeMap<EntityId, f64> = BTreeMap::new();
        for contract in self.contracts.values() {
            *totals.entry(contract.vendor_id).or_default() += contract.value.unwrap_or(0.0);
        }
        totals
            .into_iter()
            .filter_map(|(id, total)| {
                self.vendors.get(&id).map(|v| VendorSpending {
                    vendor: v.name.clone(),
                    total,
                })
            })
            .collect()
    }

    pub fn contract_status(&self) -> Vec<StatusCount> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for contract in self.contracts.values() {
            *counts.entry(contract.status.to_string()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect()
    }

    /// Average rating per `YYYY-MM`, oldest month first
    pub fn vendor_performance(&self) -> Vec<MonthlyRating> {
        let mut months: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for review in &self.reviews {
            if let Some(month) = review.date.as_deref().and_then(|d| d.get(..7)) {
                months.entry(month.to_string()).or_default().push(review.rating);
            }
        }
        months
            .into_iter()
            .filter_map(|(month, ratings)| {
                mean(ratings.into_iter()).map(|average_rating| MonthlyRating {
                    month,
                    average_rating,
                })
            })
            .collect()
    }

    /// Reviewed vendors by average rating, best first
    pub fn top_performing(&self) -> Vec<TopVendor> {
        let mut top: Vec<TopVendor> = self
            .vendors
            .values()
            .filter_map(|v| {
                let average_rating =
                    mean(self.reviews.iter().filter(|r| r.vendor_id == v.id).map(|r| r.rating))?;
                let total: f64 = self
                    .contracts
                    .values()
                    .filter(|c| c.vendor_id == v.id)
                    .filter_map(|c| c.value)
                    .sum();
                Some(TopVendor {
                    id: Some(v.id),
                    name: v.name.clone(),
                    category: v.category.clone(),
                    total_contract_value: Some(total),
                    average_rating: Some(average_rating),
                })
            })
            .collect();

        top.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        top.truncate(TOP_VENDOR_LIMIT);
        top
    }
}

fn validate_vendor(input: &VendorInput) -> ServerResult<()> {
    if input.name.trim().is_empty() {
        return Err(ServerError::Validation("Vendor name is required".to_string()));
    }
    Ok(())
}

fn vendor_not_found(id: EntityId) -> ServerError {
    ServerError::NotFound(format!("Vendor {} not found", id))
}

fn vendor_from_input(id: EntityId, input: VendorInput) -> Vendor {
    Vendor {
        id,
        name: input.name.trim().to_string(),
        business_id: non_empty(input.business_id),
        phone: non_empty(input.phone),
        email: non_empty(input.email),
        address: non_empty(input.address),
        category: non_empty(input.category),
    }
}

fn contract_from_input(id: EntityId, input: ContractInput) -> Contract {
    Contract {
        id,
        title: input.title.trim().to_string(),
        description: non_empty(input.description),
        vendor_id: input.vendor_id,
        status: input.status,
        start_date: non_empty(input.start_date),
        end_date: non_empty(input.end_date),
        value: input.value,
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_login() {
        let mut store = DevStore::seeded();
        let (token, user) = store.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();

        assert_eq!(user.username, "demo");
        assert_eq!(store.user_for_token(&token).unwrap(), user.id);
        assert!(matches!(
            store.login(DEMO_EMAIL, "wrong"),
            Err(ServerError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let store = DevStore::seeded();
        let it = store.list_vendors(Some("IT"));
        assert_eq!(it.len(), 1);
        assert_eq!(it[0].name, "Cirrus IT Services");
        assert_eq!(store.list_vendors(None).len(), 3);
    }

    #[test]
    fn test_delete_vendor_cascades() {
        let mut store = DevStore::seeded();
        let acme = store.list_vendors(Some("Office Supplies"))[0].id;

        store.delete_vendor(acme).unwrap();
        assert!(store.list_contracts(None).iter().all(|c| c.vendor_id != acme));
        assert!(store.reviews_for(acme).is_err());
    }

    #[test]
    fn test_analytics() {
        let store = DevStore::seeded();

        let summary = store.summary();
        assert_eq!(summary.active_vendors, 3);
        assert_eq!(summary.total_contract_value, Some(50400.0));
        assert_eq!(summary.expiring_soon, 1);
        assert_eq!(summary.average_rating, Some(4.0));

        let months = store.vendor_performance();
        assert_eq!(months[0].month, "2026-01");
        assert_eq!(months[1].average_rating, 3.75);

        let top = store.top_performing();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Acme Office Supplies");
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut store = DevStore::seeded();
        assert!(matches!(
            store.register("other", DEMO_EMAIL, "pw"),
            Err(ServerError::Conflict(_))
        ));
    }
}
