use serde_json::json;

use uplift_form::{AnswerSet, decode_value, render_remarkup};

#[test]
fn boolean_answers_read_as_yes_and_no() {
    let answers = decode_value(&json!({ "Is Android affected?": false }));
    let remarkup = render_remarkup(&answers).expect("render");
    assert_eq!(remarkup, "- **Is Android affected?** no");

    let answers = decode_value(&json!({ "Fix verified in Nightly": true }));
    let remarkup = render_remarkup(&answers).expect("render");
    assert_eq!(remarkup, "- **Fix verified in Nightly** yes");
}

#[test]
fn text_answers_render_verbatim() {
    let answers = decode_value(&json!({
        "User impact if declined": "crashes on startup for all users",
    }));
    let remarkup = render_remarkup(&answers).expect("render");
    assert_eq!(
        remarkup,
        "- **User impact if declined** crashes on startup for all users"
    );
}

#[test]
fn lines_follow_the_answer_sets_own_order() {
    // "Is Android affected?" comes last in the schema but first here; the
    // renderer must keep the set's order, not the schema's.
    let answers = decode_value(&json!({
        "Is Android affected?": true,
        "User impact if declined": "tab spinner never resolves",
    }));

    let remarkup = render_remarkup(&answers).expect("render");
    assert_eq!(
        remarkup,
        "- **Is Android affected?** yes\n- **User impact if declined** tab spinner never resolves"
    );
}

#[test]
fn empty_set_renders_as_empty_string() {
    let remarkup = render_remarkup(&AnswerSet::new()).expect("render");
    assert_eq!(remarkup, "");
}

#[test]
fn unrepresentable_answer_is_a_hard_error() {
    let answers = decode_value(&json!({ "Risk associated with taking this patch": 3 }));
    let error = render_remarkup(&answers).expect_err("number answers cannot render");
    assert_eq!(error.found, "number");
    assert_eq!(error.question, "Risk associated with taking this patch");
    assert_eq!(
        error.to_string(),
        "cannot render answer for 'Risk associated with taking this patch': expected text or boolean, found number"
    );
}
