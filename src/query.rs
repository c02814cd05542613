//! Structured search filters for the Radar `problems/find` endpoint.
//!
//! Keywords are embedded verbatim between `%` wildcards. Characters with
//! LIKE meaning (`%`, `_`) inside the keyword are not escaped.

use crate::constants;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A find filter as serialized in the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FindQuery {
    KeyValue(KeyValue),
    /// Every field term must match
    All(Vec<FieldTerm>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: Predicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Predicate {
    Like(String),
}

/// One conjunction member, serialized as `{"<field>": <predicate>}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTerm {
    pub field: String,
    pub predicate: Predicate,
}

impl FieldTerm {
    #[must_use]
    pub fn title_like(word: &str) -> Self {
        Self {
            field: constants::TITLE_FIELD.to_string(),
            predicate: Predicate::Like(like_pattern(word)),
        }
    }
}

impl Serialize for FieldTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.predicate)?;
        map.end()
    }
}

/// Wraps the keyword in `%` wildcards without escaping it.
#[must_use]
pub fn like_pattern(keyword: &str) -> String {
    format!("%{keyword}%")
}

impl FindQuery {
    /// Matches records whose title contains `keyword`.
    #[must_use]
    pub fn title_like(keyword: &str) -> Self {
        Self::KeyValue(KeyValue {
            key: constants::TITLE_FIELD.to_string(),
            value: Predicate::Like(like_pattern(keyword)),
        })
    }

    /// Matches records whose title contains every whitespace-separated word.
    ///
    /// A keyword with zero or one word degrades to [`FindQuery::title_like`].
    #[must_use]
    pub fn title_contains_all_words(keyword: &str) -> Self {
        let words: Vec<&str> = keyword.split_whitespace().collect();
        match words.as_slice() {
            [] => Self::title_like(keyword),
            [word] => Self::title_like(word),
            _ => Self::All(words.into_iter().map(FieldTerm::title_like).collect()),
        }
    }

    /// Builds the query for a keyword, honoring the `--all-words` switch.
    #[must_use]
    pub fn for_keyword(keyword: &str, all_words: bool) -> Self {
        if all_words {
            Self::title_contains_all_words(keyword)
        } else {
            Self::title_like(keyword)
        }
    }
}

/// The projection header value for a list of fields.
#[must_use]
pub fn fields_header_value(fields: &[&str]) -> String {
    fields.join(",")
}
