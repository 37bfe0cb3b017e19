use serde_json::{Map, Value, json};

use crate::schema::QuestionSchema;

/// JSON Schema for a fully-answered submission: one property per question
/// with its declared type, every question required, no extra keys.
pub fn generate(schema: &QuestionSchema) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for question in schema.iter() {
        properties.insert(
            question.text.clone(),
            json!({ "type": question.kind.label() }),
        );
        required.push(Value::String(question.text.clone()));
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}
