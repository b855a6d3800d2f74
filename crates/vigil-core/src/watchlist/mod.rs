//! Client watchlist domain models.

pub mod model;

pub use model::{WatchlistEntry, WatchlistRequest};
