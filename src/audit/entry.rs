//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// Kind of write that was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What kind of record was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Budget,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Budget => write!(f, "Budget"),
        }
    }
}

/// One line of the audit log
///
/// `before` is present for updates and deletes, `after` for creates and
/// updates. Both are the JSON form of the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    /// Profile that made the change
    pub user: UserId,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Short label such as a transaction description or budget month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn blank(
        operation: Operation,
        user: &UserId,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            user: user.clone(),
            entity_type,
            entity_id,
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(
        user: &UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::blank(Operation::Create, user, entity_type, entity_id.into(), entity_name)
        }
    }

    pub fn update<T: Serialize>(
        user: &UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::blank(Operation::Update, user, entity_type, entity_id.into(), entity_name)
        }
    }

    pub fn delete<T: Serialize>(
        user: &UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::blank(Operation::Delete, user, entity_type, entity_id.into(), entity_name)
        }
    }

    /// Format the entry for `expense log`
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {} by {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            self.user
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> UserId {
        UserId::parse("alice").unwrap()
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_has_only_after() {
        let entry = AuditEntry::create(
            &alice(),
            EntityType::Transaction,
            "txn-1234",
            Some("Coffee".into()),
            &json!({"description": "Coffee", "amount": -450}),
        );
        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_delete_has_only_before() {
        let entry = AuditEntry::delete(
            &alice(),
            EntityType::Transaction,
            "txn-1234",
            None,
            &json!({"description": "Coffee"}),
        );
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_roundtrip_keeps_user() {
        let entry = AuditEntry::update(
            &alice(),
            EntityType::Budget,
            "2025-05",
            None,
            &json!({"food": 100}),
            &json!({"food": 200}),
            Some("food: 100 -> 200".into()),
        );
        let line = serde_json::to_string(&entry).unwrap();
        let parsed: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.user, alice());
        assert_eq!(parsed.entity_type, EntityType::Budget);
        assert_eq!(parsed.diff_summary.as_deref(), Some("food: 100 -> 200"));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            &alice(),
            EntityType::Transaction,
            "txn-1234",
            Some("Rent".into()),
            &json!({"amount": -100000}),
            &json!({"amount": -120000}),
            Some("amount: -100000 -> -120000".into()),
        );
        let text = entry.format_human_readable();
        assert!(text.contains("UPDATE Transaction txn-1234 by alice (Rent)"));
        assert!(text.contains("Changes: amount: -100000 -> -120000"));
    }
}
