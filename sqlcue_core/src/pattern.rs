//! Pattern records: one cataloged SQL technique each.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based position of a record in its catalog.
///
/// Ids are assigned at load time in source order, so ordering by id is
/// ordering by catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(pub usize);

impl PatternId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A validated catalog entry.
///
/// Fields are private so a record can only come out of [`crate::Catalog`]
/// loading, which guarantees a non-empty title, at least one trigger phrase
/// and at least one snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecord {
    id: PatternId,
    slug: String,
    title: String,
    trigger_phrases: Vec<String>,
    technique: String,
    snippets: Vec<String>,
}

impl PatternRecord {
    pub(crate) const fn new(
        id: PatternId,
        slug: String,
        title: String,
        trigger_phrases: Vec<String>,
        technique: String,
        snippets: Vec<String>,
    ) -> Self {
        Self {
            id,
            slug,
            title,
            trigger_phrases,
            technique,
            snippets,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PatternId {
        self.id
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn trigger_phrases(&self) -> &[String] {
        &self.trigger_phrases
    }

    #[must_use]
    pub fn technique(&self) -> &str {
        &self.technique
    }

    #[must_use]
    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    /// The first snippet. Always present for a loaded record.
    #[must_use]
    pub fn primary_snippet(&self) -> &str {
        self.snippets.first().map_or("", String::as_str)
    }
}
