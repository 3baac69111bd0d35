//! Domain Entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row, as a JSON object
///
/// Incidents, posts, and volunteers have no fixed shape here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// `user_id` column as an integer
    ///
    /// Accepts JSON numbers and numeric strings (bigint columns may be
    /// serialized as strings by PostgREST).
    pub fn user_id(&self) -> Option<i64> {
        match self.get("user_id")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id() {
        assert_eq!(Record::new(json!({"user_id": 42})).user_id(), Some(42));
        assert_eq!(Record::new(json!({"user_id": "42"})).user_id(), Some(42));
        assert_eq!(Record::new(json!({"user_id": null})).user_id(), None);
        assert_eq!(Record::new(json!({"id": 1})).user_id(), None);
    }

    #[test]
    fn test_serializes_transparently() {
        let record = Record::new(json!({"id": 1, "title": "Flood"}));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": 1, "title": "Flood"})
        );
    }
}
