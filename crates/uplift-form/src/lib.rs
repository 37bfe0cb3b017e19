#![allow(missing_docs)]

pub mod answers;
pub mod answers_schema;
pub mod codec;
pub mod host;
pub mod render;
pub mod schema;
pub mod validate;

pub use answers::AnswerSet;
pub use answers_schema::generate as answers_schema;
pub use codec::{CodecError, decode, decode_strict, decode_value, encode};
pub use host::{
    CONDUIT_FIELD_KEY, FIELD_KEY, HostCallbacks, UPLIFT_TAG, comment_action_control, field_active,
    feed_transaction_title, transaction_title,
};
pub use render::{RenderError, render_remarkup};
pub use schema::{AnswerType, QuestionSchema, QuestionSpec};
pub use validate::{ValidationError, validate};
