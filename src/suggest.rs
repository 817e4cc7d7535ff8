//! Nearest-name suggestions for unknown icon lookups
//!
//! Candidates are ranked by Jaro-Winkler similarity, which weights shared
//! prefixes; icon slugs in one family ("ellipsis-horizontal",
//! "ellipsis-vertical") stay above the threshold for a typo in the suffix.

use std::cmp::Ordering;

use strsim::jaro_winkler;

/// Suggestions are a usability aid, not a search result page
const MAX_SUGGESTIONS: usize = 2;

/// Candidates scoring below this are not close enough to mention
const MIN_SIMILARITY: f64 = 0.75;

/// Rank `candidates` by similarity to `requested`, best match first
///
/// Returns at most [`MAX_SUGGESTIONS`] names, ties broken lexicographically.
/// Empty or unusual input yields an empty list rather than an error.
pub fn nearest<'a, I>(requested: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| (jaro_winkler(requested, candidate), candidate))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });
    scored.truncate(MAX_SUGGESTIONS);

    scored
        .into_iter()
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
