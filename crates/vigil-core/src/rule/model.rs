//! Rule domain models.

use serde::{Deserialize, Serialize};

/// A detection rule as held by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub rule_type: String,
    pub threshold: f64,
    pub is_active: bool,
}

/// The editor-side rule record.
///
/// Presence of `id` selects update semantics on save; absence selects
/// create semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub rule_type: String,
    pub threshold: f64,
    pub is_active: bool,
}

impl RuleDraft {
    /// A blank draft for a new rule. Active by default, matching the
    /// server-side default.
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    /// A draft pre-filled from an existing rule, for editing.
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            id: Some(rule.id),
            name: rule.name.clone(),
            description: rule.description.clone(),
            rule_type: rule.rule_type.clone(),
            threshold: rule.threshold,
            is_active: rule.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_no_identity() {
        let draft = RuleDraft::new();
        assert!(draft.id.is_none());
        assert!(draft.is_active);
    }

    #[test]
    fn test_draft_from_rule_keeps_identity() {
        let rule = Rule {
            id: 3,
            name: "High Value Transaction".to_string(),
            description: "Flags trades exceeding a specific value.".to_string(),
            rule_type: "Trade Value".to_string(),
            threshold: 2_500_000.0,
            is_active: true,
        };
        let draft = RuleDraft::from_rule(&rule);
        assert_eq!(draft.id, Some(3));
        assert_eq!(draft.name, rule.name);
        assert_eq!(draft.threshold, rule.threshold);
    }

    #[test]
    fn test_draft_without_id_serializes_without_id() {
        let draft = RuleDraft {
            name: "Large Trade".to_string(),
            ..RuleDraft::new()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Large Trade");
    }
}
