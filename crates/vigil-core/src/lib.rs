pub mod alert;
pub mod error;
pub mod gateway;
pub mod report;
pub mod rule;
pub mod session;
pub mod ui;
pub mod watchlist;

// Re-export common error type
pub use error::{Result, VigilError};
pub use gateway::ApiGateway;
pub use session::Session;
