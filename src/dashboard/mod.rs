//! Dashboard module
//!
//! Provides the page showing a month's transactions, sales statistics and a
//! price range chart, with a month selector for switching between months.

mod aggregation;
mod cards;
mod charts;
mod handlers;
mod tables;

pub use aggregation::{MonthlySummary, PriceHistogram, PriceRange, SaleStatistics};
pub use handlers::get_dashboard_page;
