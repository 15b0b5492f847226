//! Serialized catalog format.
//!
//! Every field is optional at the serde level so that a missing field is
//! reported as a [`crate::Error::MalformedCatalog`] naming the record, rather
//! than as an opaque deserializer message.

use serde::{Deserialize, Serialize};

/// One record as it appears in a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSource {
    /// Optional slug. Derived from `title` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub trigger_phrases: Option<Vec<String>>,

    #[serde(default)]
    pub technique: Option<String>,

    #[serde(default)]
    pub snippets: Option<Vec<String>>,
}

impl PatternSource {
    #[must_use]
    pub fn new(title: impl Into<String>, technique: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            trigger_phrases: Some(Vec::new()),
            technique: Some(technique.into()),
            snippets: Some(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn phrase(mut self, phrase: impl Into<String>) -> Self {
        self.trigger_phrases
            .get_or_insert_with(Vec::new)
            .push(phrase.into());
        self
    }

    #[must_use]
    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippets.get_or_insert_with(Vec::new).push(snippet.into());
        self
    }
}

/// Accepted top-level shapes: a bare array, or an object with `patterns`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogDocument {
    List(Vec<PatternSource>),
    Wrapped { patterns: Vec<PatternSource> },
}

impl CatalogDocument {
    pub(crate) fn into_records(self) -> Vec<PatternSource> {
        match self {
            Self::List(records) | Self::Wrapped { patterns: records } => records,
        }
    }
}
