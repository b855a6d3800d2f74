//! Server API paths consumed by the console.

pub(crate) const ALERTS: &str = "/api/alerts";
pub(crate) const ALERT_SUMMARY: &str = "/api/alerts/summary";
pub(crate) const ANALYZE: &str = "/api/analyze";
pub(crate) const WATCHLIST: &str = "/api/watchlist";
pub(crate) const RULES: &str = "/api/rules";
pub(crate) const REPORTS: &str = "/api/reports";
