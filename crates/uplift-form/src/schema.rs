use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::answers::AnswerSet;

/// Expected answer type for a questionnaire question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    Text,
    Boolean,
}

impl AnswerType {
    /// JSON type label used in schemas and validation messages.
    pub fn label(self) -> &'static str {
        match self {
            AnswerType::Text => "string",
            AnswerType::Boolean => "boolean",
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            AnswerType::Text => value.is_string(),
            AnswerType::Boolean => value.is_boolean(),
        }
    }

    /// Blank value used to pre-fill an unanswered question.
    pub fn blank_value(self) -> Value {
        match self {
            AnswerType::Text => Value::String(String::new()),
            AnswerType::Boolean => Value::Bool(false),
        }
    }
}

/// A single question and its declared answer type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionSpec {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: AnswerType,
}

/// Ordered list of required questions. Order is significant: missing-response
/// errors and default payloads enumerate questions in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct QuestionSchema {
    questions: Vec<QuestionSpec>,
}

impl QuestionSchema {
    pub fn new(questions: Vec<QuestionSpec>) -> Self {
        Self { questions }
    }

    /// The fixed questionnaire attached to uplift requests.
    pub fn uplift_request() -> Self {
        fn question(text: &str, kind: AnswerType) -> QuestionSpec {
            QuestionSpec {
                text: text.to_string(),
                kind,
            }
        }

        Self::new(vec![
            question("User impact if declined", AnswerType::Text),
            question("Code covered by automated testing", AnswerType::Boolean),
            question("Fix verified in Nightly", AnswerType::Boolean),
            question("Needs manual QE test", AnswerType::Boolean),
            question("Steps to reproduce for manual QE testing", AnswerType::Text),
            question("Risk associated with taking this patch", AnswerType::Text),
            question("Explanation of risk level", AnswerType::Text),
            question("String changes made/needed", AnswerType::Text),
            question("Is Android affected?", AnswerType::Boolean),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionSpec> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, question: &str) -> bool {
        self.expected_type(question).is_some()
    }

    pub fn expected_type(&self, question: &str) -> Option<AnswerType> {
        self.questions
            .iter()
            .find(|spec| spec.text == question)
            .map(|spec| spec.kind)
    }

    /// Fresh answer set with every question set to its blank value. This is
    /// the payload the host pre-fills into an untouched form.
    pub fn default_answers(&self) -> AnswerSet {
        self.questions
            .iter()
            .map(|spec| (spec.text.clone(), spec.kind.blank_value()))
            .collect()
    }
}
