//! Diff generation for audit logging
//!
//! Compares the JSON form of a record before and after a write. Nested
//! objects (like the per-category budget map) are walked so a single
//! changed limit shows up as `budgets.food: 100 -> 250`.

use serde_json::Value;

const MAX_STRING_LEN: usize = 50;

/// Describe changed fields, or `None` when nothing differs
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = collect_changes(before, after, "");
    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, prefix: &str) -> Vec<String> {
    let mut changes = Vec::new();

    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            for (key, before_val) in before_obj {
                let field = join_path(prefix, key);
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => {
                        changes.extend(collect_changes(before_val, after_val, &field));
                    }
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", field, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!(
                        "{}: (added) -> {}",
                        join_path(prefix, key),
                        format_value(after_val)
                    ));
                }
            }
        }
        _ if before != after => {
            changes.push(format!(
                "{}: {} -> {}",
                prefix,
                format_value(before),
                format_value(after)
            ));
        }
        _ => {}
    }

    changes
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_STRING_LEN => {
            let truncated: String = s.chars().take(MAX_STRING_LEN - 3).collect();
            format!("\"{}...\"", truncated)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unchanged_fields_are_skipped() {
        let before = json!({"description": "Rent", "amount": -100000});
        let after = json!({"description": "Rent", "amount": -120000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: -100000 -> -120000");
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"category": "food"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_nested_budget_change() {
        let before = json!({"month": "2025-05", "budgets": {"food": 10000, "transport": 0}});
        let after = json!({"month": "2025-05", "budgets": {"food": 25000, "transport": 0}});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "budgets.food: 10000 -> 25000");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"budgets": {"food": 100}});
        let after = json!({"budgets": {"housing": 200}});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("budgets.food: 100 -> (removed)"));
        assert!(diff.contains("budgets.housing: (added) -> 200"));
    }

    #[test]
    fn test_long_strings_truncated() {
        let long = "x".repeat(80);
        let diff = generate_diff(&json!({"description": "short"}), &json!({"description": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }
}
