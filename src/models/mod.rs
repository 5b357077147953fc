//! Data Transfer Objects
//!
//! Wire types exchanged with the VendorHub REST API. These are transient
//! copies: nothing here is cached across page loads.

pub mod analytics;
pub mod auth;
pub mod contract;
pub mod de;
pub mod review;
pub mod vendor;

pub use analytics::{
    AnalyticsSummary, CategoryCount, MonthlyRating, StatusCount, TopVendor, VendorSpending,
};
pub use auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, User};
pub use contract::{Contract, ContractInput, ContractStatus};
pub use review::{Review, ReviewInput};
pub use vendor::{Vendor, VendorInput};

/// Backend entity identifier
pub type EntityId = i64;
