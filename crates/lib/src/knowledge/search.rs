//! # Search Logic
//!
//! Free-text relevance search over the knowledge store. Every entry is scored as a
//! weighted sum of four signals whose ordinal priority is fixed:
//!
//! 1.  **Title**: the query and the title contain one another as whole words, plus a
//!     smaller bonus for each query token that appears in the title.
//! 2.  **Keywords**: each query token found in the entry's keywords.
//! 3.  **Content**: query tokens found in the body, capped so long entries gain nothing.
//! 4.  **Category**: a small bonus for terminology and FAQ entries that already matched.
//!
//! Results are sorted by descending score with a stable sort, so entries with equal scores
//! keep their load order and identical inputs always produce identical output.

use crate::{
    knowledge::store::KnowledgeBase,
    types::{KnowledgeEntry, SearchResult},
};
use std::collections::HashSet;
use tracing::debug;

const TITLE_PHRASE_WEIGHT: f64 = 10.0;
const KEYWORD_WEIGHT: f64 = 5.0;
const TITLE_TOKEN_WEIGHT: f64 = 3.0;
const CONTENT_WEIGHT: f64 = 1.0;
const CONTENT_HIT_CAP: usize = 3;
const STRONG_CATEGORY_BONUS: f64 = 0.5;

/// Words that carry no meaning on their own in a support question.
const STOP_WORDS: &[&str] = &[
    "a", "about", "am", "an", "and", "are", "at", "be", "by", "can", "could", "do", "does",
    "for", "how", "i", "if", "in", "is", "it", "me", "my", "of", "on", "or", "should", "tell",
    "that", "the", "this", "to", "was", "what", "when", "where", "which", "who", "why", "will",
    "with", "would", "you", "your",
];

/// Lowercases, trims and collapses internal whitespace.
pub fn normalize_query(query: &str) -> String {
    query
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits text into lowercase alphanumeric words.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Lowercase words joined by single spaces, punctuation removed.
fn phrase(text: &str) -> String {
    words(text).collect::<Vec<_>>().join(" ")
}

/// Extracts the distinct, meaningful tokens of a query in order of first appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    words(text)
        .filter(|w| w.chars().count() >= 2 && !STOP_WORDS.contains(&w.as_str()))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Whole-word containment of `needle` inside `haystack`, both already phrase-normalized.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && format!(" {haystack} ").contains(&format!(" {needle} "))
}

fn score_entry(entry: &KnowledgeEntry, query_phrase: &str, tokens: &[String]) -> f64 {
    let title_phrase = phrase(&entry.title);
    let title_words: HashSet<String> = words(&entry.title).collect();
    let keyword_words: Vec<HashSet<String>> =
        entry.keywords.iter().map(|k| words(k).collect()).collect();
    let content_words: HashSet<String> = words(&entry.content).collect();

    let mut score = 0.0;

    if contains_phrase(query_phrase, &title_phrase) || contains_phrase(&title_phrase, query_phrase)
    {
        score += TITLE_PHRASE_WEIGHT;
    }

    for token in tokens {
        if keyword_words.iter().any(|kw| kw.contains(token)) {
            score += KEYWORD_WEIGHT;
        }
        if title_words.contains(token) {
            score += TITLE_TOKEN_WEIGHT;
        }
    }

    let content_hits = tokens
        .iter()
        .filter(|token| content_words.contains(*token))
        .count()
        .min(CONTENT_HIT_CAP);
    score += content_hits as f64 * CONTENT_WEIGHT;

    if score > 0.0 && entry.category.is_strong() {
        score += STRONG_CATEGORY_BONUS;
    }

    score
}

/// Returns at most `limit` entries relevant to `query`, best first.
pub fn search<'a>(kb: &'a KnowledgeBase, query: &str, limit: usize) -> Vec<SearchResult<'a>> {
    let normalized = normalize_query(query);
    let tokens = tokenize(&normalized);
    if limit == 0 || tokens.is_empty() {
        return Vec::new();
    }
    let query_phrase = phrase(&normalized);

    let mut results: Vec<SearchResult<'a>> = kb
        .entries()
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, &query_phrase, &tokens);
            (score > 0.0).then_some(SearchResult { entry, score })
        })
        .collect();

    // `sort_by` is stable: equal scores keep load order.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);

    debug!(
        query = %normalized,
        hits = results.len(),
        "Knowledge search completed."
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_query("  What   IS\ta SIN?  "), "what is a sin?");
    }

    #[test]
    fn tokenize_drops_stop_words_and_duplicates() {
        assert_eq!(
            tokenize("What is a caseworker? A CASEWORKER!"),
            vec!["caseworker".to_string()]
        );
        assert!(tokenize("?!... ").is_empty());
    }

    #[test]
    fn phrase_containment_is_whole_word() {
        assert!(contains_phrase("what is a caseworker", "caseworker"));
        assert!(!contains_phrase("caseworkers", "caseworker"));
        assert!(!contains_phrase("anything", ""));
    }

    #[test]
    fn unicode_is_folded() {
        assert_eq!(tokenize("ÉLIGIBILITÉ"), vec!["éligibilité".to_string()]);
    }
}
