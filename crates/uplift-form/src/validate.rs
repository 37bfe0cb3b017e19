use serde_json::Value;
use thiserror::Error;

use crate::answers::AnswerSet;
use crate::schema::{AnswerType, QuestionSchema};

/// User-facing validation failure for one questionnaire entry. `Display`
/// output is the exact message shown to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid question: '{0}'")]
    InvalidQuestion(String),
    #[error("Need to answer '{0}'")]
    Unanswered(String),
    #[error("Parsing error: type '{actual}' for '{question}' doesn't match expected '{expected}'!")]
    TypeMismatch {
        question: String,
        actual: &'static str,
        expected: &'static str,
    },
    #[error("Missing response for {0}")]
    MissingResponse(String),
}

/// Validate a submitted answer set against the questionnaire schema.
///
/// An empty set is always valid: it clears the form. Otherwise each entry is
/// checked in the set's iteration order, and each question must be known,
/// answered, and of the declared type. Missing-response errors for questions
/// the set omits are reported in schema order, and only when no other error
/// fired.
pub fn validate(schema: &QuestionSchema, answers: &AnswerSet) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if answers.is_empty() {
        return errors;
    }

    let mut validated = Vec::new();
    for (question, answer) in answers.iter() {
        let Some(expected) = schema.expected_type(question) else {
            errors.push(ValidationError::InvalidQuestion(question.to_string()));
            continue;
        };

        if unanswered(expected, answer) {
            errors.push(ValidationError::Unanswered(question.to_string()));
            continue;
        }

        if !expected.matches(answer) {
            errors.push(ValidationError::TypeMismatch {
                question: question.to_string(),
                actual: json_type_name(answer),
                expected: expected.label(),
            });
            continue;
        }

        validated.push(question);
    }

    if errors.is_empty() {
        for spec in schema.iter() {
            if !validated.contains(&spec.text.as_str()) {
                errors.push(ValidationError::MissingResponse(spec.text.clone()));
            }
        }
    }

    errors
}

// An entry counts as unanswered before its type is checked: a blank text
// answer and a null boolean both mean the question was left open.
fn unanswered(expected: AnswerType, answer: &Value) -> bool {
    match expected {
        AnswerType::Text => {
            answer.is_null() || answer.as_str().is_some_and(|text| text.is_empty())
        }
        AnswerType::Boolean => answer.is_null(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
