//! Compliance report listing model.

use serde::{Deserialize, Serialize};

/// A generated compliance report available for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub name: String,
    /// ISO-8601 timestamp as issued by the server.
    pub generated_on: String,
}
