//! Text and JSON rendering of catalog records and match results.

use serde::Serialize;
use sqlcue_core::PatternRecord;
use sqlcue_matcher::Match;

pub const NO_MATCH: &str = "No matching pattern.";

/// Column header matching [`record_summary_line`].
pub const LIST_HEADER: &str = " id  slug                       title                      technique";

/// One result as exposed to JSON consumers.
#[derive(Debug, Serialize)]
struct MatchView<'a> {
    title: &'a str,
    technique: &'a str,
    snippet: &'a str,
    score: f64,
}

pub fn matches_json(matches: &[Match<'_>]) -> anyhow::Result<String> {
    let views: Vec<MatchView<'_>> = matches
        .iter()
        .map(|m| MatchView {
            title: m.record.title(),
            technique: m.record.technique(),
            snippet: m.record.primary_snippet(),
            score: m.score,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

#[must_use]
pub fn matches_text(matches: &[Match<'_>], explain: bool) -> String {
    if matches.is_empty() {
        return NO_MATCH.to_string();
    }

    matches
        .iter()
        .enumerate()
        .map(|(rank, m)| {
            let mut lines = vec![
                format!(
                    "{}. {} [{}]  score {:.3}",
                    rank + 1,
                    m.record.title(),
                    m.record.slug(),
                    m.score
                ),
                format!("   Technique: {}", m.record.technique()),
            ];
            if explain {
                lines.push(format!("   Matched phrase: \"{}\"", m.phrase));
                lines.push(format!("   Shared words: {}", m.shared.join(", ")));
            }
            lines.push(String::new());
            lines.extend(snippet_lines(m.record.primary_snippet()));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[must_use]
pub fn record_summary_line(record: &PatternRecord) -> String {
    format!(
        "{:>3}  {:<26} {:<26} {}",
        record.id(),
        record.slug(),
        record.title(),
        record.technique()
    )
}

#[must_use]
pub fn record_detail(record: &PatternRecord) -> String {
    let mut lines = vec![
        format!("{} [{}] (#{})", record.title(), record.slug(), record.id()),
        format!("Technique: {}", record.technique()),
        "Trigger phrases:".to_string(),
    ];
    lines.extend(record.trigger_phrases().iter().map(|p| format!("  - {p}")));
    for (i, snippet) in record.snippets().iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("Snippet {}:", i + 1));
        lines.extend(snippet_lines(snippet));
    }
    lines.join("\n")
}

fn snippet_lines(snippet: &str) -> impl Iterator<Item = String> + '_ {
    snippet.lines().map(|line| format!("    {line}"))
}
