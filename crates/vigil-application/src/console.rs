//! The console composition root.
//!
//! Owns the one session store per process and wires each screen's pollers
//! and controller on mount. Screens are mounted only once the session has
//! been restored and holds a credential; mounting earlier redirects to the
//! login screen instead of issuing doomed fetches.

use crate::endpoints;
use crate::rules::RuleAdminController;
use crate::triage::AlertTriageController;
use std::sync::Arc;
use vigil_core::alert::{Alert, AlertSummary};
use vigil_core::report::Report;
use vigil_core::rule::Rule;
use vigil_core::ui::{ConfirmationPrompt, Navigator, NotificationSink, Screen};
use vigil_core::watchlist::WatchlistEntry;
use vigil_core::{ApiGateway, Result, VigilError};
use vigil_client::{ResourcePoller, SessionStore};

/// The live surveillance dashboard: the alert table, the aggregate
/// counters, and the triage workflow.
pub struct DashboardScreen {
    pub alerts: Arc<ResourcePoller<Vec<Alert>>>,
    pub summary: Arc<ResourcePoller<AlertSummary>>,
    pub triage: AlertTriageController,
}

impl std::fmt::Debug for DashboardScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardScreen").finish_non_exhaustive()
    }
}

/// Rule engine management.
pub struct RuleEngineScreen {
    pub rules: Arc<ResourcePoller<Vec<Rule>>>,
    pub admin: RuleAdminController,
}

/// Clients under special monitoring.
pub struct WatchlistScreen {
    pub entries: Arc<ResourcePoller<Vec<WatchlistEntry>>>,
}

/// Generated compliance reports.
pub struct ReportsScreen {
    pub reports: Arc<ResourcePoller<Vec<Report>>>,
}

impl std::fmt::Debug for ReportsScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportsScreen").finish_non_exhaustive()
    }
}

/// Composition root for the operator console.
///
/// Each `mount_*` call builds fresh pollers bound to the shared session
/// store and performs their single initial refresh - the explicit
/// equivalent of a screen mounting in the original console.
pub struct Console {
    store: Arc<SessionStore>,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    prompt: Arc<dyn ConfirmationPrompt>,
}

impl Console {
    pub fn new(
        store: Arc<SessionStore>,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
        prompt: Arc<dyn ConfirmationPrompt>,
    ) -> Self {
        Self {
            store,
            notifier,
            navigator,
            prompt,
        }
    }

    /// The shared session store, for the login/logout surface.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Protected-route gate: yields the gateway when the session is ready,
    /// otherwise redirects to the login screen.
    async fn gate(&self) -> Result<Arc<dyn ApiGateway>> {
        if self.store.is_ready().await {
            Ok(self.store.clone() as Arc<dyn ApiGateway>)
        } else {
            self.navigator.navigate(Screen::Login);
            Err(VigilError::NotAuthenticated)
        }
    }

    pub async fn mount_dashboard(&self) -> Result<DashboardScreen> {
        let gateway = self.gate().await?;
        let alerts = ResourcePoller::attach(gateway.clone(), endpoints::ALERTS).await;
        let summary = ResourcePoller::attach(gateway.clone(), endpoints::ALERT_SUMMARY).await;
        let triage = AlertTriageController::new(
            gateway,
            self.notifier.clone(),
            self.navigator.clone(),
            alerts.clone(),
            summary.clone(),
        );
        Ok(DashboardScreen {
            alerts,
            summary,
            triage,
        })
    }

    pub async fn mount_rules(&self) -> Result<RuleEngineScreen> {
        let gateway = self.gate().await?;
        let rules = ResourcePoller::attach(gateway.clone(), endpoints::RULES).await;
        let admin = RuleAdminController::new(
            gateway,
            self.notifier.clone(),
            self.prompt.clone(),
            rules.clone(),
        );
        Ok(RuleEngineScreen { rules, admin })
    }

    pub async fn mount_watchlist(&self) -> Result<WatchlistScreen> {
        let gateway = self.gate().await?;
        let entries = ResourcePoller::attach(gateway, endpoints::WATCHLIST).await;
        Ok(WatchlistScreen { entries })
    }

    pub async fn mount_reports(&self) -> Result<ReportsScreen> {
        let gateway = self.gate().await?;
        let reports = ResourcePoller::attach(gateway, endpoints::REPORTS).await;
        Ok(ReportsScreen { reports })
    }
}
