//! Lexical similarity measures.

use crate::normalize::Terms;
use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard similarity: `|A ∩ B| / |A ∪ B|`.
///
/// Returns 0.0 if either set is empty.
#[must_use]
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

/// Blend token overlap with adjacent-pair overlap.
///
/// Formula: `token_sim * (1 - w) + bigram_sim * w`
///
/// Shared pairs reward phrasings that keep words in the same order
/// ("running total" over "total ... running").
#[must_use]
pub fn blended_similarity(token_sim: f64, bigram_sim: f64, bigram_weight: f64) -> f64 {
    token_sim.mul_add(1.0 - bigram_weight, bigram_sim * bigram_weight)
}

/// Similarity of a question to one trigger phrase, in [0, 1].
///
/// The pair term only applies when both sides have at least two content
/// tokens; otherwise the plain token overlap is the score.
#[must_use]
pub fn phrase_similarity(question: &Terms, phrase: &Terms, bigram_weight: f64) -> f64 {
    let token_sim = jaccard(&question.tokens, &phrase.tokens);
    if question.bigrams.is_empty() || phrase.bigrams.is_empty() {
        return token_sim;
    }

    let bigram_sim = jaccard(&question.bigrams, &phrase.bigrams);
    blended_similarity(token_sim, bigram_sim, bigram_weight)
}

/// Tokens present in both, sorted.
#[must_use]
pub fn shared_tokens(question: &Terms, phrase: &Terms) -> Vec<String> {
    let mut shared: Vec<String> = question
        .tokens
        .intersection(&phrase.tokens)
        .cloned()
        .collect();
    shared.sort();
    shared
}
