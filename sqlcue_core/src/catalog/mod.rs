//! The pattern catalog.
//!
//! A [`Catalog`] is built once from a list of [`PatternSource`] records and is
//! read-only afterwards. It exposes no mutation, so it can be shared across
//! threads behind an `Arc` without locking.

mod builtin;
mod source;

pub use builtin::BUILTIN_CATALOG_JSON;
pub use source::PatternSource;

use crate::error::{Error, Result};
use crate::pattern::{PatternId, PatternRecord};
use crate::util;
use serde::{Deserialize, Serialize};
use source::CatalogDocument;
use std::collections::HashSet;
use tracing::debug;

/// Upper bounds enforced while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLimits {
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

const fn default_max_records() -> usize {
    10_000
}

impl Default for CatalogLimits {
    fn default() -> Self {
        Self {
            max_records: default_max_records(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<PatternRecord>,
}

impl Catalog {
    /// Load the catalog embedded in this crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON, CatalogLimits::default())
    }

    /// Parse a JSON catalog: either an array of records or `{"patterns": [...]}`.
    pub fn from_json(json: &str, limits: CatalogLimits) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| Error::MalformedCatalog {
                record: None,
                reason: e.to_string(),
            })?;
        Self::from_records(document.into_records(), limits)
    }

    /// Validate source records and assign ids in source order.
    pub fn from_records(sources: Vec<PatternSource>, limits: CatalogLimits) -> Result<Self> {
        if sources.len() > limits.max_records {
            return Err(Error::invalid_argument(format!(
                "catalog has {} records, limit is {}",
                sources.len(),
                limits.max_records
            )));
        }

        let mut seen = HashSet::with_capacity(sources.len());
        let mut records = Vec::with_capacity(sources.len());

        for (index, source) in sources.into_iter().enumerate() {
            let record = validate(index, source)?;
            if !seen.insert(record.slug().to_string()) {
                return Err(Error::malformed(
                    index,
                    format!("duplicate id '{}'", record.slug()),
                ));
            }
            records.push(record);
        }

        debug!("Loaded catalog with {} patterns", records.len());
        Ok(Self { records })
    }

    /// Records in catalog order. Each call starts a fresh iteration.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &PatternRecord> + Clone + '_ {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, id: PatternId) -> Option<&PatternRecord> {
        self.records.get(id.index())
    }

    /// Look a record up by slug, or by numeric position.
    pub fn find(&self, key: &str) -> Result<&PatternRecord> {
        let key = key.trim();
        let by_slug = self.records.iter().find(|r| r.slug() == key);
        let by_position = || {
            key.parse::<usize>()
                .ok()
                .and_then(|i| self.get(PatternId(i)))
        };

        by_slug
            .or_else(by_position)
            .ok_or_else(|| Error::PatternNotFound(key.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Content digest of the catalog snapshot.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        util::fingerprint(self.records.iter().flat_map(|r| {
            [r.slug(), r.title(), r.technique()]
                .into_iter()
                .chain(r.trigger_phrases().iter().map(String::as_str))
                .chain(r.snippets().iter().map(String::as_str))
        }))
    }
}

fn validate(index: usize, source: PatternSource) -> Result<PatternRecord> {
    let title = source
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::malformed(index, "missing title"))?;

    let trigger_phrases = non_blank_list(index, source.trigger_phrases, "triggerPhrases")?;
    let snippets = non_blank_list(index, source.snippets, "snippets")?;

    let technique = source
        .technique
        .ok_or_else(|| Error::malformed(index, format!("'{title}' is missing technique")))?
        .trim()
        .to_string();

    let slug = match source.id {
        Some(id) => explicit_slug(index, &title, &id)?,
        None => derived_slug(index, &title),
    };

    Ok(PatternRecord::new(
        PatternId(index),
        slug,
        title,
        trigger_phrases,
        technique,
        snippets,
    ))
}

/// An explicit id must be usable as-is by [`Catalog::find`].
fn explicit_slug(index: usize, title: &str, id: &str) -> Result<String> {
    let slug = id.trim();
    if slug.is_empty() {
        return Err(Error::malformed(index, format!("'{title}' has an empty id")));
    }
    if is_numeric(slug) {
        return Err(Error::malformed(
            index,
            format!("id '{slug}' is numeric and would shadow a position"),
        ));
    }
    Ok(slug.to_string())
}

/// Slug from the title, or `pattern-<index>` when the title has no usable
/// characters or is only digits.
fn derived_slug(index: usize, title: &str) -> String {
    let slug = util::slugify(title);
    if slug.is_empty() || is_numeric(&slug) {
        format!("pattern-{index}")
    } else {
        slug
    }
}

fn is_numeric(slug: &str) -> bool {
    slug.chars().all(|c| c.is_ascii_digit())
}

fn non_blank_list(index: usize, list: Option<Vec<String>>, field: &str) -> Result<Vec<String>> {
    let list = list.ok_or_else(|| Error::malformed(index, format!("missing {field}")))?;
    if list.is_empty() {
        return Err(Error::malformed(index, format!("{field} is empty")));
    }
    if let Some(pos) = list.iter().position(|s| s.trim().is_empty()) {
        return Err(Error::malformed(
            index,
            format!("{field}[{pos}] is blank"),
        ));
    }
    Ok(list)
}
