//! Alert triage orchestration.
//!
//! Drives the analyst workflow over one alert: status mutation, the AI
//! advisory sub-flow, and watchlist promotion. The view reflects only
//! server-confirmed state; there are no optimistic updates.

use crate::endpoints;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;
use vigil_core::alert::{Alert, AlertStatus, AlertSummary};
use vigil_core::ui::{Navigator, NotificationSink, Screen, Severity};
use vigil_core::watchlist::WatchlistRequest;
use vigil_core::{ApiGateway, Result, VigilError};
use vigil_client::ResourcePoller;

/// Advisory shown when the analysis endpoint fails; the flow never
/// dead-ends in `AnalysisPending`.
pub const ANALYSIS_FAILURE_NOTICE: &str =
    "Failed to get AI analysis. Please ensure the analysis service is running.";

/// Suggested justification when the advisory yields no usable first line.
const DEFAULT_WATCHLIST_REASON: &str = "AI Recommended Review";

/// Response body of the analysis endpoint.
#[derive(Deserialize)]
struct AnalysisResponse {
    advice: String,
}

/// The ephemeral analysis sub-flow state.
///
/// `AnalysisReady` doubles as the open watchlist prompt: promotion and
/// dismissal both leave it.
#[derive(Debug, Clone, PartialEq)]
pub enum TriageState {
    Idle,
    AnalysisPending {
        alert: Alert,
    },
    AnalysisReady {
        alert: Alert,
        advisory: String,
        /// Heuristic pre-fill for the watchlist justification, taken from
        /// the advisory's first non-empty line. A convenience default,
        /// never structured data.
        suggested_reason: String,
    },
}

/// Orchestrates status mutation, AI-analysis requests, and watchlist
/// promotion on top of the session gateway and the dashboard pollers.
pub struct AlertTriageController {
    gateway: Arc<dyn ApiGateway>,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    alerts: Arc<ResourcePoller<Vec<Alert>>>,
    summary: Arc<ResourcePoller<AlertSummary>>,
    state: RwLock<TriageState>,
}

impl AlertTriageController {
    pub fn new(
        gateway: Arc<dyn ApiGateway>,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
        alerts: Arc<ResourcePoller<Vec<Alert>>>,
        summary: Arc<ResourcePoller<AlertSummary>>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            navigator,
            alerts,
            summary,
            state: RwLock::new(TriageState::Idle),
        }
    }

    /// Returns a snapshot of the analysis sub-flow state.
    pub async fn state(&self) -> TriageState {
        self.state.read().await.clone()
    }

    /// Persists a status transition server-side, then refreshes the alert
    /// collection and the aggregate summary so totals stay consistent.
    ///
    /// The refreshes are issued only after the mutation's success response;
    /// they may complete in either order. On failure nothing local changes.
    pub async fn change_status(&self, alert_id: i64, new_status: AlertStatus) -> Result<()> {
        let path = format!("{}/{alert_id}", endpoints::ALERTS);
        match self.gateway.put_json(&path, json!({ "status": new_status })).await {
            Ok(_) => {
                self.notifier.notify(
                    &format!("Alert #{alert_id} status updated successfully"),
                    Severity::Info,
                );
                self.alerts.refresh().await;
                self.summary.refresh().await;
                Ok(())
            }
            Err(err) => {
                warn!("Status update for alert {} failed: {}", alert_id, err);
                self.notifier.notify("Failed to update status", Severity::Error);
                Err(err)
            }
        }
    }

    /// Sends the full alert record to the analysis endpoint.
    ///
    /// The state moves to `AnalysisPending` immediately and always lands in
    /// `AnalysisReady` - holding the advisory on success, or the fixed
    /// failure notice otherwise. A response arriving after the prompt was
    /// dismissed simply overwrites the transient state (last write wins).
    pub async fn request_analysis(&self, alert: Alert) {
        *self.state.write().await = TriageState::AnalysisPending {
            alert: alert.clone(),
        };

        let outcome = match serde_json::to_value(&alert) {
            Ok(payload) => match self.gateway.post_json(endpoints::ANALYZE, payload).await {
                Ok(value) => {
                    serde_json::from_value::<AnalysisResponse>(value).map_err(VigilError::from)
                }
                Err(err) => Err(err),
            },
            Err(err) => Err(err.into()),
        };

        let (advisory, suggested_reason) = match outcome {
            Ok(response) => {
                let suggested = suggest_reason(&response.advice);
                (response.advice, suggested)
            }
            Err(err) => {
                warn!("Analysis request for alert {} failed: {}", alert.id, err);
                (
                    ANALYSIS_FAILURE_NOTICE.to_string(),
                    DEFAULT_WATCHLIST_REASON.to_string(),
                )
            }
        };

        *self.state.write().await = TriageState::AnalysisReady {
            alert,
            advisory,
            suggested_reason,
        };
    }

    /// Escalates the alert's client to the watchlist.
    ///
    /// An empty reason fails validation before any network I/O and leaves
    /// the prompt open. On success the prompt closes and navigation moves
    /// to the watchlist screen; on failure the prompt stays open so the
    /// analyst can retry without re-entering data.
    pub async fn promote_to_watchlist(&self, alert: &Alert, reason: &str) -> Result<()> {
        let reason = reason.trim();
        if reason.is_empty() {
            self.notifier.notify(
                "Please provide a reason for the watchlist.",
                Severity::Warning,
            );
            return Err(VigilError::validation("watchlist reason must not be empty"));
        }

        let request = WatchlistRequest {
            client_id: alert.client_id.clone(),
            reason: reason.to_string(),
        };
        let payload = serde_json::to_value(&request)?;

        match self.gateway.post_json(endpoints::WATCHLIST, payload).await {
            Ok(_) => {
                self.notifier.notify(
                    &format!(
                        "Client {} added to watchlist successfully!",
                        alert.client_id
                    ),
                    Severity::Success,
                );
                *self.state.write().await = TriageState::Idle;
                self.navigator.navigate(Screen::Watchlist);
                Ok(())
            }
            Err(err) => {
                warn!("Watchlist promotion for {} failed: {}", alert.client_id, err);
                self.notifier
                    .notify("Failed to add client to watchlist", Severity::Error);
                Err(err)
            }
        }
    }

    /// Closes the prompt and discards the in-flight advisory text.
    ///
    /// Does not cancel a still-outstanding analysis request.
    pub async fn dismiss(&self) {
        *self.state.write().await = TriageState::Idle;
    }
}

fn suggest_reason(advice: &str) -> String {
    advice
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_WATCHLIST_REASON.to_string())
}
