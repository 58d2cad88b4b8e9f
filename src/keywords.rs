//! Keyword Extraction
//!
//! Normalizes a free-text utterance into content keywords: lowercase,
//! punctuation deleted in place (so "bubble-sort" fuses to "bubblesort"),
//! whitespace-tokenized, with short tokens and common function words
//! removed. Downstream rules only test membership, so the result is treated
//! as a set (duplicates are harmless and retained).

/// Function words carrying no topical signal: articles, auxiliaries,
/// conjunctions, modals.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "can", "may", "might", "must",
];

/// Tokens this short are noise even when they survive the stop-word filter.
const MIN_TOKEN_LEN: usize = 3;

/// Extracts content keywords from an utterance.
///
/// Total over all inputs: empty or punctuation-only text yields an empty
/// set, never an error.
pub fn extract_keywords(utterance: &str) -> Vec<String> {
    utterance
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .filter(|word| word.len() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(word))
        .map(|word| word.to_string())
        .collect()
}

/// Membership test used by the classification rule tables.
pub fn contains_keyword(keywords: &[String], keyword: &str) -> bool {
    keywords.iter().any(|k| k == keyword)
}
