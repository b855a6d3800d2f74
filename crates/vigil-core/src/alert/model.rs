//! Alert domain models.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Triage status of a trading alert.
///
/// Transitions are unconstrained (any status is reachable from any other),
/// but every transition must be persisted server-side before the local view
/// reflects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum AlertStatus {
    Normal,
    Review,
    Flagged,
}

/// A trading alert raised by the detection rules.
///
/// Mutable only through the triage status-change operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub client_id: String,
    /// Client identity number.
    pub pan: String,
    pub symbol: String,
    pub volume: u64,
    pub value: f64,
    pub status: AlertStatus,
}

/// Aggregate counters over the alert and watchlist collections.
///
/// Served as a single JSON object; defaults to all zeros so a failed fetch
/// degrades to an empty summary rather than stale numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total_alerts: u64,
    pub flagged: u64,
    pub in_review: u64,
    pub high_risk_clients: u64,
}
