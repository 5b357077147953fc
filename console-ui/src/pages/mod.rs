//! Pages
//!
//! One view per console page. Each takes the controller built by the app's
//! page host and renders its observable state.

pub mod analytics;
pub mod contracts;
pub mod home;
pub mod profiles;
pub mod vendors;

pub use analytics::AnalyticsView;
pub use contracts::ContractsView;
pub use home::HomeView;
pub use profiles::ProfilesView;
pub use vendors::VendorsView;
