//! Integration tests for question matching.
//!
//! These exercise the public API end to end: load a catalog, build a matcher,
//! and check ranking, determinism, thresholds and error reporting.

use sqlcue_core::{Catalog, CatalogLimits, Error, PatternId, PatternSource};
use sqlcue_matcher::{MatcherConfig, PhraseMatcher};
use std::sync::Arc;

fn fixture_catalog() -> Catalog {
    let sources = vec![
        PatternSource::new("Find Duplicates", "GROUP BY ... HAVING COUNT(*) > 1")
            .phrase("find duplicate emails")
            .snippet("SELECT email FROM users GROUP BY email HAVING COUNT(*) > 1;"),
        PatternSource::new("Top N per Group", "ROW_NUMBER() / DISTINCT ON")
            .phrase("top 3 salaries per department")
            .snippet("SELECT * FROM ranked WHERE rn <= 3;"),
        PatternSource::new("Running Total", "SUM() OVER (ORDER BY ...)")
            .phrase("running total of sales")
            .phrase("cumulative sum")
            .snippet("SELECT SUM(amount) OVER (ORDER BY day) FROM sales;"),
        // Same phrase as the previous record, so the two always tie.
        PatternSource::new("Cumulative Sum", "SUM() OVER (ORDER BY ...)")
            .phrase("running total of sales")
            .snippet("SELECT SUM(amount) OVER (ORDER BY day) FROM sales;"),
    ];
    Catalog::from_records(sources, CatalogLimits::default())
        .unwrap_or_else(|e| panic!("fixture catalog should load: {e}"))
}

fn fixture_matcher() -> PhraseMatcher {
    PhraseMatcher::with_defaults(Arc::new(fixture_catalog()))
        .unwrap_or_else(|e| panic!("default config should be valid: {e}"))
}

fn builtin_matcher() -> PhraseMatcher {
    let catalog = Catalog::builtin().unwrap_or_else(|e| panic!("builtin catalog: {e}"));
    PhraseMatcher::with_defaults(Arc::new(catalog))
        .unwrap_or_else(|e| panic!("default config should be valid: {e}"))
}

#[test]
fn test_top_earners_question_finds_top_n_per_group() {
    let matcher = fixture_matcher();

    let results = matcher
        .match_question("give me the top 3 earners in each department", 1)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.title(), "Top N per Group");
    assert!(results[0].score > 0.0);
}

#[test]
fn test_results_bounded_and_sorted() {
    let matcher = fixture_matcher();

    for top_k in 1..=6 {
        let results = matcher
            .match_question("running total of duplicate salaries", top_k)
            .unwrap_or_else(|e| panic!("match should succeed: {e}"));

        assert!(results.len() <= top_k);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score, "scores must not increase");
            if (pair[0].score - pair[1].score).abs() < f64::EPSILON {
                assert!(pair[0].record.id() < pair[1].record.id());
            }
        }
    }
}

#[test]
fn test_ties_resolve_in_catalog_order() {
    let matcher = fixture_matcher();

    let results = matcher
        .match_question("running total of sales", 2)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].record.id(), PatternId(2));
    assert_eq!(results[1].record.id(), PatternId(3));
    assert!((results[0].score - results[1].score).abs() < f64::EPSILON);
}

#[test]
fn test_repeated_calls_are_identical() {
    let matcher = builtin_matcher();
    let question = "delete duplicate rows but keep one";

    let first = matcher
        .match_question(question, 5)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));
    let second = matcher
        .match_question(question, 5)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));

    assert_eq!(first, second);
}

#[test]
fn test_zero_overlap_scores_zero() {
    let matcher = fixture_matcher();

    let scored = matcher
        .score_all("zebra quantum banana")
        .unwrap_or_else(|e| panic!("scoring should succeed: {e}"));
    assert_eq!(scored.len(), 4);
    assert!(scored.iter().all(|m| m.score == 0.0));

    let results = matcher
        .match_with_threshold("zebra quantum banana", 3, 0.1)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));
    assert!(results.is_empty());
}

#[test]
fn test_zero_scores_excluded_at_default_threshold() {
    let matcher = fixture_matcher();

    let results = matcher
        .match_question("zebra quantum banana", 3)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));
    assert!(results.is_empty());
}

#[test]
fn test_threshold_filters_weak_matches() {
    let matcher = fixture_matcher();

    let loose = matcher
        .match_with_threshold("top salaries and duplicate emails", 4, 0.0)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));
    let strict = matcher
        .match_with_threshold("top salaries and duplicate emails", 4, 0.99)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));

    assert!(loose.len() >= 2);
    assert!(strict.is_empty());
}

#[test]
fn test_empty_question_rejected() {
    let matcher = fixture_matcher();

    assert_eq!(matcher.match_question("", 1), Err(Error::EmptyQuery));
    assert_eq!(matcher.match_question("   \t\n", 1), Err(Error::EmptyQuery));
}

#[test]
fn test_empty_question_reported_before_top_k() {
    let matcher = fixture_matcher();

    assert_eq!(matcher.match_question("", 0), Err(Error::EmptyQuery));
    assert_eq!(
        matcher.match_with_threshold("  ", 0, -1.0),
        Err(Error::EmptyQuery)
    );
}

#[test]
fn test_exact_phrase_passes_highest_threshold() {
    let matcher = fixture_matcher();

    let results = matcher
        .match_with_threshold("find duplicate emails", 1, 0.999)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.title(), "Find Duplicates");

    assert!(matches!(
        matcher.match_with_threshold("find duplicate emails", 1, 1.0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_zero_top_k_rejected() {
    let matcher = fixture_matcher();

    assert!(matches!(
        matcher.match_question("top 3 salaries per department", 0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_invalid_threshold_rejected() {
    let matcher = fixture_matcher();

    for threshold in [-0.5, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            matcher.match_with_threshold("top salaries", 1, threshold),
            Err(Error::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_configured_threshold_applies() {
    let config = MatcherConfig {
        threshold: 0.99,
        ..MatcherConfig::default()
    };
    let matcher = PhraseMatcher::new(Arc::new(fixture_catalog()), config)
        .unwrap_or_else(|e| panic!("config should be valid: {e}"));

    let results = matcher
        .match_question("top earners by department", 1)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"));
    assert!(results.is_empty());
}

#[test]
fn test_builtin_catalog_routes_common_questions() {
    let matcher = builtin_matcher();

    let cases = [
        ("give me the top 3 earners in each department", "top-n-per-group"),
        ("second highest salary in the company", "nth-highest-value"),
        ("customers who never placed an order", "anti-join"),
        ("how do I turn rows into columns", "pivot"),
        ("walk the org chart under a manager", "recursive-hierarchy"),
        ("delete duplicate rows but keep one", "delete-duplicates"),
        ("running total of revenue by day", "running-total"),
        ("what is the median salary", "median-and-percentiles"),
        ("page 3 of the results", "offset-pagination"),
    ];

    for (question, expected) in cases {
        let results = matcher
            .match_question(question, 1)
            .unwrap_or_else(|e| panic!("match should succeed for {question:?}: {e}"));
        assert_eq!(
            results.first().map(|m| m.record.slug()),
            Some(expected),
            "wrong pattern for {question:?}"
        );
    }
}

#[test]
fn test_matcher_shared_across_threads() {
    let matcher = Arc::new(builtin_matcher());
    let expected = matcher
        .match_question("find duplicate emails", 3)
        .unwrap_or_else(|e| panic!("match should succeed: {e}"))
        .iter()
        .map(|m| m.record.id())
        .collect::<Vec<_>>();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || {
                matcher
                    .match_question("find duplicate emails", 3)
                    .map(|results| results.iter().map(|m| m.record.id()).collect::<Vec<_>>())
            })
        })
        .collect();

    for handle in handles {
        let ids = handle
            .join()
            .unwrap_or_else(|_| panic!("worker thread panicked"))
            .unwrap_or_else(|e| panic!("match should succeed: {e}"));
        assert_eq!(ids, expected);
    }
}
