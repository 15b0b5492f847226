//! Ranking catalog patterns against a free-text question.

use crate::config::{MatcherConfig, validate_threshold, validate_top_k};
use crate::normalize::{Normalizer, Terms};
use crate::scoring;
use rayon::prelude::*;
use serde::Serialize;
use sqlcue_core::{Catalog, Error, PatternId, PatternRecord, Result};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'a> {
    pub record: &'a PatternRecord,
    pub score: f64,
    /// The trigger phrase that produced `score`.
    pub phrase: &'a str,
    /// Content tokens the question and `phrase` have in common.
    pub shared: Vec<String>,
}

/// Normalized trigger phrases of one record, computed once.
#[derive(Debug)]
struct IndexedPattern {
    id: PatternId,
    phrases: Vec<Terms>,
}

/// Scores questions against an immutable catalog snapshot.
///
/// Holds no mutable state; a single instance can serve any number of
/// threads at once.
#[derive(Debug)]
pub struct PhraseMatcher {
    catalog: Arc<Catalog>,
    config: MatcherConfig,
    normalizer: Normalizer,
    index: Vec<IndexedPattern>,
}

impl PhraseMatcher {
    pub fn new(catalog: Arc<Catalog>, config: MatcherConfig) -> Result<Self> {
        config.validate()?;

        let normalizer = Normalizer::new(config.stopwords.iter().cloned(), config.fold_plurals);
        let index = catalog
            .all()
            .map(|record| IndexedPattern {
                id: record.id(),
                phrases: record
                    .trigger_phrases()
                    .iter()
                    .map(|p| normalizer.terms(p))
                    .collect(),
            })
            .collect();

        Ok(Self {
            catalog,
            config,
            normalizer,
            index,
        })
    }

    pub fn with_defaults(catalog: Arc<Catalog>) -> Result<Self> {
        Self::new(catalog, MatcherConfig::default())
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Best `top_k` records scoring above the configured threshold.
    pub fn match_question(&self, question: &str, top_k: usize) -> Result<Vec<Match<'_>>> {
        self.match_with_threshold(question, top_k, self.config.threshold)
    }

    /// Best `top_k` records scoring strictly above `threshold`, by descending
    /// score, ties in catalog order. An empty result means nothing matched.
    ///
    /// The question is checked before `top_k` and `threshold`.
    pub fn match_with_threshold(
        &self,
        question: &str,
        top_k: usize,
        threshold: f64,
    ) -> Result<Vec<Match<'_>>> {
        self.check_question(question)?;
        validate_top_k(top_k)?;
        validate_threshold(threshold)?;

        let mut matches = self.score_all(question)?;
        matches.retain(|m| m.score > threshold);
        matches.truncate(top_k);

        debug!(
            "Question {:?}: {} match(es) above {threshold}",
            question,
            matches.len()
        );
        Ok(matches)
    }

    /// Every record with its score, ranked. Includes zero scores.
    pub fn score_all(&self, question: &str) -> Result<Vec<Match<'_>>> {
        let question = self.check_question(question)?;
        let terms = self.normalizer.terms(question);

        let mut scored: Vec<(PatternId, f64, usize)> = self
            .index
            .par_iter()
            .map(|pattern| {
                let (phrase_idx, score) = best_phrase(&terms, pattern, self.config.bigram_weight);
                (pattern.id, score, phrase_idx)
            })
            .collect();

        scored.sort_by(|a, b| rank_order((a.0, a.1), (b.0, b.1)));

        Ok(scored
            .into_iter()
            .filter_map(|(id, score, phrase_idx)| {
                let record = self.catalog.get(id)?;
                let phrase = record.trigger_phrases().get(phrase_idx)?;
                let shared = self
                    .index
                    .get(id.index())
                    .and_then(|p| p.phrases.get(phrase_idx))
                    .map(|phrase_terms| scoring::shared_tokens(&terms, phrase_terms))
                    .unwrap_or_default();
                Some(Match {
                    record,
                    score,
                    phrase,
                    shared,
                })
            })
            .collect())
    }

    fn check_question<'q>(&self, question: &'q str) -> Result<&'q str> {
        let trimmed = question.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyQuery);
        }
        let chars = trimmed.chars().count();
        if chars > self.config.max_question_chars {
            return Err(Error::invalid_argument(format!(
                "question has {chars} chars, limit is {}",
                self.config.max_question_chars
            )));
        }
        Ok(trimmed)
    }
}

/// Highest-scoring phrase of a record; the earliest phrase wins a tie.
fn best_phrase(question: &Terms, pattern: &IndexedPattern, bigram_weight: f64) -> (usize, f64) {
    pattern
        .phrases
        .iter()
        .enumerate()
        .map(|(i, phrase)| (i, scoring::phrase_similarity(question, phrase, bigram_weight)))
        .fold((0, 0.0), |best, candidate| {
            if candidate.1 > best.1 { candidate } else { best }
        })
}

/// Descending score, then ascending id.
fn rank_order(a: (PatternId, f64), b: (PatternId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
