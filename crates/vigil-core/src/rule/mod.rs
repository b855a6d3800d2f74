//! Detection rule domain models.

pub mod model;

pub use model::{Rule, RuleDraft};
