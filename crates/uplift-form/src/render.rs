use serde_json::Value;
use thiserror::Error;

use crate::answers::AnswerSet;

/// An answer value that is neither text nor boolean reached the renderer.
/// Validation upstream rules this out, so hitting it is a contract breach
/// and propagates instead of being recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot render answer for '{question}': expected text or boolean, found {found}")]
pub struct RenderError {
    pub question: String,
    pub found: &'static str,
}

/// Render an answer set as remarkup, one bullet line per entry in the set's
/// own iteration order. Booleans read as `yes`/`no`; text is verbatim. An
/// empty set renders as the empty string.
pub fn render_remarkup(answers: &AnswerSet) -> Result<String, RenderError> {
    let mut lines = Vec::new();
    for (question, answer) in answers.iter() {
        let readable = value_as_answer(question, answer)?;
        // A bullet point with the question text in bold.
        lines.push(format!("- **{}** {}", question, readable));
    }
    Ok(lines.join("\n"))
}

fn value_as_answer(question: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::Bool(true) => Ok("yes".to_string()),
        Value::Bool(false) => Ok("no".to_string()),
        Value::String(text) => Ok(text.clone()),
        Value::Null => Err(render_error(question, "null")),
        Value::Number(_) => Err(render_error(question, "number")),
        Value::Array(_) => Err(render_error(question, "array")),
        Value::Object(_) => Err(render_error(question, "object")),
    }
}

fn render_error(question: &str, found: &'static str) -> RenderError {
    RenderError {
        question: question.to_string(),
        found,
    }
}
