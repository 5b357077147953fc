//! Page Controllers
//!
//! One controller per page. A controller owns the page's observable state,
//! issues its fetches, and handles the page's user actions. Front ends bind
//! to the observables once and re-render when they change.

pub mod analytics;
pub mod auth;
pub mod contracts;
pub mod home;
pub mod profiles;
pub mod vendors;

use std::fmt;

use crate::models::EntityId;

pub use analytics::{AnalyticsData, AnalyticsPage};
pub use auth::{login, logout, register, LoginForm, SignupForm};
pub use contracts::{ContractForm, ContractManagementPage, StatusTab};
pub use home::{Carousel, Slide, SLIDES, SLIDE_INTERVAL};
pub use profiles::{ReviewForm, VendorProfilesPage};
pub use vendors::{FormMode, VendorForm, VendorManagementPage};

/// The five console pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    VendorManagement,
    VendorProfiles,
    ContractManagement,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::VendorManagement,
        Page::VendorProfiles,
        Page::ContractManagement,
        Page::Analytics,
    ];

    /// Resolve a location path. Accepts both the route paths and the legacy
    /// `*.html` document names; anything unknown is the home page.
    pub fn from_path(path: &str) -> Page {
        let name = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
            .trim_end_matches(".html");

        match name {
            "vendors" | "vendor-management" => Page::VendorManagement,
            "profiles" | "vendor-profiles" => Page::VendorProfiles,
            "contracts" | "contract-management" => Page::ContractManagement,
            "analytics" => Page::Analytics,
            _ => Page::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::VendorManagement => "/vendors",
            Page::VendorProfiles => "/profiles",
            Page::ContractManagement => "/contracts",
            Page::Analytics => "/analytics",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::VendorManagement => "Vendor Management",
            Page::VendorProfiles => "Vendor Profiles",
            Page::ContractManagement => "Contract Management",
            Page::Analytics => "Analytics",
        }
    }

    /// Pages whose data requires a signed-in user
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Home)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A page plus its activation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Route {
    pub page: Page,
    /// `edit=<id>`: open the vendor form on this vendor
    pub edit: Option<EntityId>,
}

impl Route {
    pub fn new(page: Page) -> Self {
        Self { page, edit: None }
    }

    pub fn home() -> Self {
        Self::new(Page::Home)
    }

    pub fn edit_vendor(id: EntityId) -> Self {
        Self {
            page: Page::VendorManagement,
            edit: Some(id),
        }
    }

    /// Parse a location such as `/vendors?edit=3` or
    /// `vendor-management.html#edit=3`
    pub fn parse(location: &str) -> Self {
        let (rest, fragment) = split_once_or(location, '#');
        let (path, query) = split_once_or(rest, '?');

        let edit = [query, fragment]
            .into_iter()
            .flat_map(|params| params.split('&'))
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "edit")
            .and_then(|(_, value)| value.parse().ok());

        Self {
            page: Page::from_path(path),
            edit,
        }
    }

    pub fn href(&self) -> String {
        match self.edit {
            Some(id) => format!("{}?edit={}", self.page.path(), id),
            None => self.page.path().to_string(),
        }
    }
}

fn split_once_or(s: &str, sep: char) -> (&str, &str) {
    s.split_once(sep).unwrap_or((s, ""))
}
