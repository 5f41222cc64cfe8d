//! Order questionnaire definition
//!
//! The question sequence is fixed at startup and never mutated. Its order is
//! significant twice over: it is the order prompts are shown in, and it is the
//! column order of the persisted row.

use crate::utils::errors::{OrderDeskError, Result};

/// One named question/answer slot in the order form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Field name, used as the answer key and the output column
    pub field: String,
    /// Prompt text sent to the user
    pub prompt: String,
}

impl Question {
    pub fn new(field: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prompt: prompt.into(),
        }
    }
}

/// Ordered, immutable sequence of questions
#[derive(Debug, Clone)]
pub struct QuestionSpec {
    questions: Vec<Question>,
}

impl QuestionSpec {
    /// Create a question spec, rejecting empty or duplicated field lists
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(OrderDeskError::Config(
                "Question spec must contain at least one question".to_string(),
            ));
        }

        for (i, question) in questions.iter().enumerate() {
            if questions[..i].iter().any(|q| q.field == question.field) {
                return Err(OrderDeskError::Config(format!(
                    "Duplicate question field: {}",
                    question.field
                )));
            }
        }

        Ok(Self { questions })
    }

    /// The standard six-question order form
    pub fn default_order_form() -> Self {
        // Constructed from literals, cannot fail validation
        Self {
            questions: vec![
                Question::new("order", "👋 Hello! What would you like to order?"),
                Question::new("name", "👤 Your name?"),
                Question::new("phone", "📞 Your phone number?"),
                Question::new("email", "📧 Your email?"),
                Question::new("address", "📍 Delivery address or pickup?"),
                Question::new("comment", "💬 Any comments for the order?"),
            ],
        }
    }

    /// Number of questions in the form
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the question at a position, if any
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Iterate questions in prompt/column order
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Check whether a field name belongs to this spec
    pub fn contains_field(&self, field: &str) -> bool {
        self.questions.iter().any(|q| q.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_fields_in_order() {
        let spec = QuestionSpec::default_order_form();
        let fields: Vec<&str> = spec.iter().map(|q| q.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["order", "name", "phone", "email", "address", "comment"]
        );
    }

    #[test]
    fn test_first_prompt_is_greeting() {
        let spec = QuestionSpec::default_order_form();
        assert_eq!(
            spec.get(0).unwrap().prompt,
            "👋 Hello! What would you like to order?"
        );
    }

    #[test]
    fn test_empty_spec_rejected() {
        assert!(QuestionSpec::new(vec![]).is_err());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = QuestionSpec::new(vec![
            Question::new("name", "Who?"),
            Question::new("name", "Who again?"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_contains_field() {
        let spec = QuestionSpec::default_order_form();
        assert!(spec.contains_field("phone"));
        assert!(!spec.contains_field("password"));
    }
}
