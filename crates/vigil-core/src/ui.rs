//! Contracts for the UI collaborators the core drives but never renders.
//!
//! The toast widget, router, and confirm dialog live outside this core; the
//! controllers only call into them through these traits.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Receives user-facing success/failure messages. Fire-and-forget; the core
/// never consumes a return value.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// The console screens navigation can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Dashboard,
    RuleEngine,
    Watchlist,
    Reports,
    Settings,
}

/// Signals the routing layer to move to a screen. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate(&self, screen: Screen);
}

/// Asks the user to confirm a destructive, irreversible action before the
/// core issues it.
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}
