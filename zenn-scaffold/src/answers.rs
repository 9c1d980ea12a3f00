//! The resolved answer record.
//!
//! Built empty, filled one field at a time in declaration order, then read
//! by the generator. Insertion order is preserved so the record iterates
//! the way the questionnaire was presented.

use indexmap::IndexMap;
use serde::Serialize;

/// One accepted value: free text or a selected choice as `Text`, a toggle
/// as `Toggle`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Toggle(bool),
}

impl Answer {
    /// The text value, for `Text` answers.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(value) => Some(value),
            Answer::Toggle(_) => None,
        }
    }

    /// The boolean value, for `Toggle` answers.
    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            Answer::Text(_) => None,
            Answer::Toggle(value) => Some(*value),
        }
    }
}

/// Mapping from field name to accepted value for one completed run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    values: IndexMap<String, Answer>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field's accepted value. Recording the same name again
    /// replaces the earlier value in place.
    pub fn record(&mut self, name: impl Into<String>, answer: Answer) {
        self.values.insert(name.into(), answer);
    }

    /// Look up an answer by field name.
    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.values.get(name)
    }

    /// Look up a text answer by field name.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Answer::as_text)
    }

    /// Look up a toggle answer by field name.
    pub fn toggle(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Answer::as_toggle)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate answers in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.values.iter().map(|(name, answer)| (name.as_str(), answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AnswerRecord {
        let mut record = AnswerRecord::new();
        record.record("slug", Answer::Text("my-article-2024".into()));
        record.record("type", Answer::Text("tech".into()));
        record.record("publication_name", Answer::Toggle(true));
        record
    }

    #[test]
    fn record_and_lookup() {
        let record = sample_record();
        assert_eq!(record.len(), 3);
        assert_eq!(record.text("slug"), Some("my-article-2024"));
        assert_eq!(record.toggle("publication_name"), Some(true));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn typed_lookups_do_not_cross() {
        let record = sample_record();
        assert_eq!(record.toggle("slug"), None);
        assert_eq!(record.text("publication_name"), None);
    }

    #[test]
    fn iteration_preserves_recording_order() {
        let record = sample_record();
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["slug", "type", "publication_name"]);
    }

    #[test]
    fn re_recording_replaces_in_place() {
        let mut record = sample_record();
        record.record("slug", Answer::Text("revised-slug-01".into()));
        assert_eq!(record.len(), 3);
        assert_eq!(record.text("slug"), Some("revised-slug-01"));
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["slug", "type", "publication_name"]);
    }

    #[test]
    fn serializes_as_a_flat_json_object() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "slug": "my-article-2024",
                "type": "tech",
                "publication_name": true
            })
        );
    }
}
