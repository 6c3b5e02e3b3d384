//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page, filtered by the `month` query parameter.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The route for querying the transactions in a month as JSON.
pub const TRANSACTIONS_API: &str = "/transactions";
