//! Trading alert domain models.

pub mod model;

pub use model::{Alert, AlertStatus, AlertSummary};
