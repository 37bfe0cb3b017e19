use serde_json::{Value, json};

use uplift_form::{
    AnswerSet, HostCallbacks, QuestionSchema, answers_schema, comment_action_control,
    decode_value, feed_transaction_title, field_active, transaction_title,
};

struct StubHost {
    tagged: bool,
    bug: bool,
}

impl HostCallbacks for StubHost {
    fn uplift_tag_set(&self) -> bool {
        self.tagged
    }

    fn has_bug_number(&self) -> bool {
        self.bug
    }
}

#[test]
fn field_requires_both_tag_and_bug_number() {
    assert!(field_active(&StubHost { tagged: true, bug: true }));
    assert!(!field_active(&StubHost { tagged: true, bug: false }));
    assert!(!field_active(&StubHost { tagged: false, bug: true }));
    assert!(!field_active(&StubHost { tagged: false, bug: false }));
}

#[test]
fn untouched_form_gets_initial_blank_answers() {
    let schema = QuestionSchema::uplift_request();
    let control = comment_action_control(&schema, &AnswerSet::new());

    assert_eq!(control["id"], "uplift-form");
    assert_eq!(control["initial"], true);

    let questions = control["questions"].as_object().expect("questions object");
    assert_eq!(questions.len(), schema.len());
    assert_eq!(questions["User impact if declined"], "");
    assert_eq!(questions["Is Android affected?"], false);
}

#[test]
fn stored_answers_are_echoed_into_the_control() {
    let schema = QuestionSchema::uplift_request();
    let stored = decode_value(&json!({
        "User impact if declined": "crashes on startup for all users",
        "Is Android affected?": true,
    }));
    let control = comment_action_control(&schema, &stored);

    assert_eq!(control["initial"], false);
    assert_eq!(
        control["questions"]["User impact if declined"],
        "crashes on startup for all users"
    );
    assert_eq!(control["questions"]["Is Android affected?"], true);
}

#[test]
fn feed_titles_use_the_expected_wording() {
    assert_eq!(
        transaction_title("@alice"),
        "@alice updated the uplift request field."
    );
    assert_eq!(
        feed_transaction_title("@alice", "D12345"),
        "@alice updated the uplift request field for D12345."
    );
}

#[test]
fn answers_schema_covers_every_question() {
    let schema = QuestionSchema::uplift_request();
    let json_schema = answers_schema(&schema);

    let properties = json_schema["properties"].as_object().expect("properties");
    assert_eq!(properties.len(), schema.len());
    assert_eq!(properties["User impact if declined"]["type"], "string");
    assert_eq!(properties["Is Android affected?"]["type"], "boolean");

    let required = json_schema["required"].as_array().expect("required");
    assert_eq!(required.len(), schema.len());
    assert_eq!(
        required
            .iter()
            .map(|value| value.as_str().unwrap_or_default())
            .collect::<Vec<_>>(),
        schema.iter().map(|spec| spec.text.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(json_schema["additionalProperties"], Value::Bool(false));
}
