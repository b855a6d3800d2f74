pub mod console;
mod endpoints;
pub mod rules;
pub mod triage;

#[cfg(test)]
mod test_support;

pub use console::{Console, DashboardScreen, ReportsScreen, RuleEngineScreen, WatchlistScreen};
pub use rules::RuleAdminController;
pub use triage::{AlertTriageController, TriageState};
