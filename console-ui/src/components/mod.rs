//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod auth_modal;
pub mod chart;
pub mod form;
pub mod loading;
pub mod nav;
pub mod toast;

pub use auth_modal::AuthModal;
pub use chart::BarChart;
pub use form::{bound_input, confirm};
pub use loading::{ListSkeleton, Loading};
pub use nav::Nav;
pub use toast::Toast;
