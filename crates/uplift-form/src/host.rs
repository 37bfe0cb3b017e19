use serde_json::{Map, Value, json};

use crate::answers::AnswerSet;
use crate::schema::QuestionSchema;

/// Storage key for the questionnaire field on a revision.
pub const FIELD_KEY: &str = "differential:uplift-request";

/// Key under which the field is exposed over the Conduit API.
pub const CONDUIT_FIELD_KEY: &str = "uplift.request";

/// Project tag that must be attached to a repository for the questionnaire
/// to be offered on its revisions.
pub const UPLIFT_TAG: &str = "uplift";

/// Questions the hosting application answers about the revision being
/// viewed. The core never performs these lookups itself; the host wires them
/// to its own project/repository and bug-tracker queries.
pub trait HostCallbacks {
    /// Is the uplift tag set on the repository this revision belongs to?
    fn uplift_tag_set(&self) -> bool;

    /// Does the revision reference a bug number?
    fn has_bug_number(&self) -> bool;
}

/// The questionnaire is offered only on tagged repositories for revisions
/// that carry a bug number.
pub fn field_active(host: &dyn HostCallbacks) -> bool {
    host.uplift_tag_set() && host.has_bug_number()
}

/// Control payload for the host's "Request Uplift" comment action. An empty
/// stored value marks the control as initial and serves the schema's blank
/// answers so the form opens pre-filled.
pub fn comment_action_control(schema: &QuestionSchema, stored: &AnswerSet) -> Value {
    let initial = stored.is_empty();
    let questions = if initial {
        answers_value(&schema.default_answers())
    } else {
        answers_value(stored)
    };

    json!({
        "id": "uplift-form",
        "initial": initial,
        "questions": questions,
    })
}

fn answers_value(answers: &AnswerSet) -> Value {
    serde_json::to_value(answers).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Activity-feed title for an edit to the questionnaire field.
pub fn transaction_title(author: &str) -> String {
    format!("{} updated the uplift request field.", author)
}

/// Feed variant naming the revision as well. Downstream automation watches
/// these entries to drive the uplift workflow, so the wording is load-bearing.
pub fn feed_transaction_title(author: &str, object: &str) -> String {
    format!("{} updated the uplift request field for {}.", author, object)
}
