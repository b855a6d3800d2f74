//! Watchlist domain models.

use serde::{Deserialize, Serialize};

/// A client flagged for heightened monitoring.
///
/// Immutable once created; there is no update path in this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: i64,
    pub client_id: String,
    pub reason: String,
    pub added_by: String,
    /// ISO-8601 timestamp as issued by the server.
    pub added_on: String,
}

/// The create payload for a watchlist entry. The server fills in
/// `added_by` and `added_on` from the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistRequest {
    pub client_id: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_server_shape() {
        let json = r#"{
            "id": 1,
            "client_id": "CL-0815",
            "reason": "Previous history of wash trading.",
            "added_by": "System",
            "added_on": "2025-08-20T10:00:00"
        }"#;
        let entry: WatchlistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.client_id, "CL-0815");
        assert_eq!(entry.added_by, "System");
    }
}
