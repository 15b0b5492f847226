//! Text normalization shared by questions and trigger phrases.
//!
//! Both sides go through the same pipeline so that scores only reflect the
//! words people actually typed:
//! - lowercase, and treat every non-alphanumeric char as a separator
//! - drop stopwords (unless that would leave nothing)
//! - fold simple English plurals

use once_cell::sync::Lazy;
use std::collections::HashSet;

static DEFAULT_STOPWORDS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        // Question and request words
        "what", "which", "who", "whom", "whose", "how", "when", "where", "why", "give", "show",
        "get", "find", "list", "tell", "need", "want", "please", "can", "could", "would",
        "should", "will", "let",
        // Pronouns
        "i", "me", "my", "we", "us", "our", "you", "your", "it", "its", "they", "them", "their",
        "this", "that", "these", "those",
        // Articles, prepositions, conjunctions
        "a", "an", "the", "of", "in", "on", "at", "to", "for", "per", "each", "every", "by",
        "with", "from", "into", "and", "or", "but", "as", "than", "then", "so", "if",
        // Auxiliaries
        "is", "are", "was", "were", "be", "been", "do", "does", "did", "have", "has", "had",
        "am", "there",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
});

/// Default English stopwords.
#[must_use]
pub fn default_stopwords() -> Vec<String> {
    DEFAULT_STOPWORDS.clone()
}

/// Normalized view of one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Terms {
    /// Distinct content tokens.
    pub tokens: HashSet<String>,
    /// Distinct pairs of adjacent content tokens.
    pub bigrams: HashSet<(String, String)>,
}

impl Terms {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: HashSet<String>,
    fold_plurals: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().cloned(), true)
    }
}

impl Normalizer {
    #[must_use]
    pub fn new(stopwords: impl IntoIterator<Item = String>, fold_plurals: bool) -> Self {
        Self {
            stopwords: stopwords.into_iter().map(|s| s.to_lowercase()).collect(),
            fold_plurals,
        }
    }

    /// Lowercase and split on anything that is not a letter or digit.
    #[must_use]
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Content tokens in order, stopwords removed and plurals folded.
    ///
    /// Falls back to every token when the text is made only of stopwords,
    /// so "what is this" still has something to compare.
    #[must_use]
    pub fn content_tokens(&self, text: &str) -> Vec<String> {
        let tokens = Self::tokenize(text);
        let content: Vec<&String> = tokens
            .iter()
            .filter(|t| !self.stopwords.contains(t.as_str()))
            .collect();

        let kept: Vec<&String> = if content.is_empty() {
            tokens.iter().collect()
        } else {
            content
        };

        kept.into_iter()
            .map(|t| {
                if self.fold_plurals {
                    fold_plural(t)
                } else {
                    t.clone()
                }
            })
            .collect()
    }

    #[must_use]
    pub fn terms(&self, text: &str) -> Terms {
        let tokens = self.content_tokens(text);
        let bigrams = tokens
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect();

        Terms {
            tokens: tokens.into_iter().collect(),
            bigrams,
        }
    }
}

/// `salaries` -> `salary`, `orders` -> `order`; short words and `-ss` stay.
#[must_use]
pub fn fold_plural(token: &str) -> String {
    if token.chars().count() <= 3 || !token.chars().all(char::is_alphabetic) {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if token.ends_with("ss") {
        return token.to_string();
    }
    token
        .strip_suffix('s')
        .map_or_else(|| token.to_string(), ToString::to_string)
}
