use crate::normalize::default_stopwords;
use serde::{Deserialize, Serialize};
use sqlcue_core::{Error, Result};

/// Tuning knobs for [`crate::PhraseMatcher`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Results returned when the caller does not ask for a specific count.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Only records scoring strictly above this value are returned.
    /// Must be within [0, 1): a perfect match scores exactly 1.0.
    #[serde(default)]
    pub threshold: f64,

    /// Questions longer than this (in chars) are rejected.
    #[serde(default = "default_max_question_chars")]
    pub max_question_chars: usize,

    /// Share of the score taken by adjacent-token-pair overlap (0.0-1.0).
    #[serde(default = "default_bigram_weight")]
    pub bigram_weight: f64,

    /// Fold simple English plurals (`salaries` -> `salary`).
    #[serde(default = "default_fold_plurals")]
    pub fold_plurals: bool,

    /// Tokens ignored when comparing a question with a phrase.
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
}

const fn default_top_k() -> usize {
    1
}

const fn default_max_question_chars() -> usize {
    1024
}

const fn default_bigram_weight() -> f64 {
    0.25
}

const fn default_fold_plurals() -> bool {
    true
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            threshold: 0.0,
            max_question_chars: default_max_question_chars(),
            bigram_weight: default_bigram_weight(),
            fold_plurals: default_fold_plurals(),
            stopwords: default_stopwords(),
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<()> {
        validate_top_k(self.top_k)?;
        validate_threshold(self.threshold)?;
        if self.max_question_chars == 0 {
            return Err(Error::invalid_argument("max_question_chars must be >= 1"));
        }
        if !(0.0..=1.0).contains(&self.bigram_weight) {
            return Err(Error::invalid_argument(format!(
                "bigram_weight must be within [0, 1], got {}",
                self.bigram_weight
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_top_k(top_k: usize) -> Result<()> {
    if top_k == 0 {
        return Err(Error::invalid_argument("top_k must be >= 1"));
    }
    Ok(())
}

/// Scores live in [0, 1] and must beat the threshold, so 1.0 would
/// exclude everything.
pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..1.0).contains(&threshold) {
        return Err(Error::invalid_argument(format!(
            "threshold must be within [0, 1), got {threshold}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(MatcherConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_nan_threshold() {
        assert!(validate_threshold(f64::NAN).is_err());
        assert!(validate_threshold(-0.1).is_err());
        assert!(validate_threshold(1.5).is_err());
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(0.999).is_ok());
    }

    #[test]
    fn rejects_threshold_of_one() {
        assert!(matches!(
            validate_threshold(1.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_bad_bigram_weight() {
        let config = MatcherConfig {
            bigram_weight: 2.0,
            ..MatcherConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_fields_take_defaults() {
        let config: MatcherConfig =
            serde_json::from_str(r#"{"top_k": 3}"#).expect("partial JSON should deserialize");
        assert_eq!(config.top_k, 3);
        assert!((config.bigram_weight - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.stopwords, default_stopwords());
    }
}
