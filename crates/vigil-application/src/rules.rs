//! Detection rule administration.
//!
//! CRUD orchestration over the rule collection; structurally a simpler
//! sibling of the triage controller with no analysis sub-flow.

use crate::endpoints;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;
use vigil_core::rule::{Rule, RuleDraft};
use vigil_core::ui::{ConfirmationPrompt, NotificationSink, Severity};
use vigil_core::{ApiGateway, Result};
use vigil_client::ResourcePoller;

const DELETE_CONFIRMATION: &str = "Are you sure?";

/// Orchestrates rule create/update/toggle/delete and keeps the edit-form
/// state so a failed save leaves entered values intact.
pub struct RuleAdminController {
    gateway: Arc<dyn ApiGateway>,
    notifier: Arc<dyn NotificationSink>,
    prompt: Arc<dyn ConfirmationPrompt>,
    rules: Arc<ResourcePoller<Vec<Rule>>>,
    editor: RwLock<Option<RuleDraft>>,
}

impl RuleAdminController {
    pub fn new(
        gateway: Arc<dyn ApiGateway>,
        notifier: Arc<dyn NotificationSink>,
        prompt: Arc<dyn ConfirmationPrompt>,
        rules: Arc<ResourcePoller<Vec<Rule>>>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            prompt,
            rules,
            editor: RwLock::new(None),
        }
    }

    /// Opens the edit form: blank for a new rule, pre-filled for an
    /// existing one.
    pub async fn open_editor(&self, existing: Option<&Rule>) {
        let draft = match existing {
            Some(rule) => RuleDraft::from_rule(rule),
            None => RuleDraft::new(),
        };
        *self.editor.write().await = Some(draft);
    }

    /// Closes the edit form, discarding entered values.
    pub async fn close_editor(&self) {
        *self.editor.write().await = None;
    }

    /// Returns the current edit-form state, if open.
    pub async fn editor(&self) -> Option<RuleDraft> {
        self.editor.read().await.clone()
    }

    /// Persists the draft: update when it carries an identity, create
    /// otherwise.
    ///
    /// On success the form closes and the rule collection refreshes; on
    /// failure the form stays open with the entered values intact.
    pub async fn save(&self, draft: RuleDraft) -> Result<()> {
        *self.editor.write().await = Some(draft.clone());

        let body = serde_json::to_value(&draft)?;
        let is_update = draft.id.is_some();
        let outcome = match draft.id {
            Some(id) => {
                self.gateway
                    .put_json(&format!("{}/{id}", endpoints::RULES), body)
                    .await
            }
            None => self.gateway.post_json(endpoints::RULES, body).await,
        };

        match outcome {
            Ok(_) => {
                let message = if is_update { "Rule updated" } else { "New rule created" };
                self.notifier.notify(message, Severity::Success);
                *self.editor.write().await = None;
                self.rules.refresh().await;
                Ok(())
            }
            Err(err) => {
                warn!("Rule save failed: {}", err);
                self.notifier.notify("Failed to save rule", Severity::Error);
                Err(err)
            }
        }
    }

    /// Inverts `is_active` with full-replace semantics: the entire rule
    /// record is sent with every other field preserved unchanged.
    pub async fn toggle_active(&self, rule: &Rule) -> Result<()> {
        let mut updated = rule.clone();
        updated.is_active = !updated.is_active;
        let body = serde_json::to_value(&updated)?;

        match self
            .gateway
            .put_json(&format!("{}/{}", endpoints::RULES, rule.id), body)
            .await
        {
            Ok(_) => {
                self.notifier.notify("Rule status changed", Severity::Info);
                self.rules.refresh().await;
                Ok(())
            }
            Err(err) => {
                warn!("Rule toggle for {} failed: {}", rule.id, err);
                self.notifier
                    .notify("Failed to toggle status", Severity::Error);
                Err(err)
            }
        }
    }

    /// Deletes a rule after an explicit user confirmation.
    ///
    /// Declining the confirmation is a no-op with zero network traffic.
    pub async fn remove(&self, rule_id: i64) -> Result<()> {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return Ok(());
        }

        match self
            .gateway
            .delete(&format!("{}/{rule_id}", endpoints::RULES))
            .await
        {
            Ok(_) => {
                self.notifier.notify("Rule deleted", Severity::Warning);
                self.rules.refresh().await;
                Ok(())
            }
            Err(err) => {
                warn!("Rule delete for {} failed: {}", rule_id, err);
                self.notifier
                    .notify("Failed to delete rule", Severity::Error);
                Err(err)
            }
        }
    }
}
