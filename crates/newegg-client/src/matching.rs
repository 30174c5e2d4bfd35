//! Fuzzy name matching over catalog entities.
//!
//! Scoring is Sørensen–Dice bigram similarity over lowercased text, with an
//! optional bias from topical groupings: a query that shares a grouping
//! bucket with a candidate outscores candidates with no bucket affinity.
//! Groupings never exclude a candidate outright.

use regex::Regex;

/// Minimum combined score for a candidate to count as a match at all.
/// Kept above [`GROUPING_BONUS`] so a bucket hit alone can never promote a
/// textually unrelated candidate.
const MATCH_THRESHOLD: f64 = 0.35;

/// Added to a candidate's score when it shares at least one grouping bucket
/// with the query.
const GROUPING_BONUS: f64 = 0.2;

/// An entity exposing a text field usable for fuzzy comparison.
pub trait MatchText {
    fn match_text(&self) -> &str;
}

/// Returns the candidate whose [`MatchText::match_text`] best matches `name`,
/// or `None` when `name` is absent or no candidate clears the similarity
/// threshold.
///
/// An absent `name` short-circuits before any candidate is scanned; this is
/// a caller convenience, not a matching decision. Exact score ties keep the
/// first-encountered candidate, so the result is deterministic for a fixed
/// candidate ordering.
pub fn resolve<'a, T: MatchText>(
    name: Option<&str>,
    candidates: &'a [T],
    groupings: &[Regex],
) -> Option<&'a T> {
    let query = name?.to_lowercase();
    let query_buckets = buckets(&query, groupings);

    let mut best: Option<(&'a T, f64)> = None;
    for candidate in candidates {
        let text = candidate.match_text().to_lowercase();
        let mut score = strsim::sorensen_dice(&query, &text);
        if shares_bucket(&query_buckets, &buckets(&text, groupings)) {
            score += GROUPING_BONUS;
        }
        if score < MATCH_THRESHOLD {
            continue;
        }
        // Strict comparison: ties keep the earlier candidate.
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Indices of the grouping patterns that match `text`.
fn buckets(text: &str, groupings: &[Regex]) -> Vec<usize> {
    groupings
        .iter()
        .enumerate()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(index, _)| index)
        .collect()
}

fn shares_bucket(a: &[usize], b: &[usize]) -> bool {
    a.iter().any(|index| b.contains(index))
}
