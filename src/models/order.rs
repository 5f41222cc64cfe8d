//! Completed order records
//!
//! An [`OrderRecord`] is built exactly once per completed conversation and is
//! immutable afterwards. Its field order mirrors the question spec, which is
//! also the column order of the persisted spreadsheet row.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::state::questionnaire::QuestionSpec;

/// Length of the short order identifier
const ORDER_ID_LEN: usize = 8;

/// The finished representation of one completed conversation
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    /// Short opaque identifier, unique for any realistic order volume
    pub order_id: String,
    /// (field, value) pairs in question spec order
    pub fields: Vec<(String, String)>,
    /// When the final answer arrived
    pub submitted_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Assemble a record from collected answers.
    ///
    /// Answers are ordered by the question spec; a field missing from the
    /// answers map becomes an empty string rather than an error.
    pub fn build(answers: &HashMap<String, String>, questions: &QuestionSpec) -> Self {
        let fields = questions
            .iter()
            .map(|q| {
                let value = answers.get(&q.field).cloned().unwrap_or_default();
                (q.field.clone(), value)
            })
            .collect();

        Self {
            order_id: generate_order_id(),
            fields,
            submitted_at: Utc::now(),
        }
    }

    /// Render the spreadsheet row: order id first, then values in field order
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(self.fields.len() + 1);
        row.push(self.order_id.clone());
        row.extend(self.fields.iter().map(|(_, value)| value.clone()));
        row
    }

    /// Look up a value by field name
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }
}

/// Generate a short opaque order id.
///
/// First eight hex characters of a UUIDv4; collisions are negligible for the
/// expected order volume.
fn generate_order_id() -> String {
    Uuid::new_v4().simple().to_string()[..ORDER_ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::questionnaire::Question;

    fn spec() -> QuestionSpec {
        QuestionSpec::new(vec![
            Question::new("order", "What?"),
            Question::new("name", "Who?"),
            Question::new("phone", "Number?"),
        ])
        .unwrap()
    }

    #[test]
    fn test_fields_follow_spec_order() {
        let mut answers = HashMap::new();
        answers.insert("phone".to_string(), "555-0101".to_string());
        answers.insert("order".to_string(), "pizza".to_string());
        answers.insert("name".to_string(), "Sam".to_string());

        let record = OrderRecord::build(&answers, &spec());
        let names: Vec<&str> = record.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["order", "name", "phone"]);
    }

    #[test]
    fn test_missing_field_becomes_empty_string() {
        let mut answers = HashMap::new();
        answers.insert("order".to_string(), "pizza".to_string());

        let record = OrderRecord::build(&answers, &spec());
        assert_eq!(record.get("order"), Some("pizza"));
        assert_eq!(record.get("name"), Some(""));
        assert_eq!(record.get("phone"), Some(""));
    }

    #[test]
    fn test_order_id_shape() {
        let record = OrderRecord::build(&HashMap::new(), &spec());
        assert_eq!(record.order_id.len(), 8);
        assert!(record.order_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_order_ids_differ() {
        let a = OrderRecord::build(&HashMap::new(), &spec());
        let b = OrderRecord::build(&HashMap::new(), &spec());
        assert_ne!(a.order_id, b.order_id);
    }

    #[test]
    fn test_row_prefixed_with_order_id() {
        let mut answers = HashMap::new();
        answers.insert("order".to_string(), "pizza".to_string());
        answers.insert("name".to_string(), "Sam".to_string());

        let record = OrderRecord::build(&answers, &spec());
        let row = record.to_row();
        assert_eq!(row.len(), 4);
        assert_eq!(row[0], record.order_id);
        assert_eq!(row[1], "pizza");
        assert_eq!(row[2], "Sam");
        assert_eq!(row[3], "");
    }
}
