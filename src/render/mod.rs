//! Render Functions
//!
//! Pure mappings from fetched collections (plus the current search term) to
//! display-ready fragments. Front ends turn these into markup or terminal
//! tables; nothing in here touches the network or shared state.

pub mod analytics;
pub mod contracts;
pub mod format;
pub mod vendors;

pub use analytics::{
    category_chart, performance_chart, spending_chart, status_chart, summary_tiles,
    top_vendor_rows, ChartSeries, MetricTile, TopVendorRow,
};
pub use contracts::{contract_cards, filter_contracts, ContractCard};
pub use format::{avatar_color, capitalize, format_money, format_rating, initials};
pub use vendors::{filter_vendors, profile_cards, vendor_rows, ProfileCard, VendorRow};
