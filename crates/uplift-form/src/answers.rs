use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// One submitted or stored questionnaire instance: an ordered mapping from
/// question text to a raw JSON answer value.
///
/// Iteration order is the order entries were inserted (for a decoded payload,
/// the order they appeared in the JSON document). Rendering walks this order;
/// validation does not depend on it. An answer set is built once per
/// submission or load and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    entries: Vec<(String, Value)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, question: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(text, _)| text == question)
            .map(|(_, value)| value)
    }

    /// Insert an answer, replacing an existing answer for the same question
    /// in place so the original position is kept.
    pub fn insert(&mut self, question: String, answer: Value) {
        match self.entries.iter_mut().find(|(text, _)| *text == question) {
            Some((_, value)) => *value = answer,
            None => self.entries.push((question, answer)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(question, answer)| (question.as_str(), answer))
    }
}

impl FromIterator<(String, Value)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (question, answer) in iter {
            set.insert(question, answer);
        }
        set
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (question, answer) in &self.entries {
            map.serialize_entry(question, answer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AnswerSetVisitor;

        impl<'de> Visitor<'de> for AnswerSetVisitor {
            type Value = AnswerSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a question to answer map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = AnswerSet::new();
                while let Some((question, answer)) = access.next_entry::<String, Value>()? {
                    set.insert(question, answer);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(AnswerSetVisitor)
    }
}
