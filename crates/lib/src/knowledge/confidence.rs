//! # Confidence Classifier
//!
//! Decides, before any model call, how well a query is grounded in the knowledge base.

use crate::{
    constants::CONTEXT_SEARCH_LIMIT,
    knowledge::{search::search, store::KnowledgeBase},
    types::{Confidence, SearchResult},
};
use tracing::debug;

/// Classifies a query by running a search with the standard context limit.
pub fn classify(kb: &KnowledgeBase, query: &str) -> Confidence {
    let results = search(kb, query, CONTEXT_SEARCH_LIMIT);
    let confidence = classify_results(&results);
    debug!(%confidence, hits = results.len(), "Classified query.");
    confidence
}

/// The tier ladder, evaluated top to bottom:
/// no hits is `Unknown`; a strong hit with at least two hits is `High`;
/// a strong hit or at least two hits is `Medium`; a single weak hit is `Low`.
pub fn classify_results(results: &[SearchResult<'_>]) -> Confidence {
    if results.is_empty() {
        return Confidence::Unknown;
    }
    let has_strong = results.iter().any(|r| r.entry.category.is_strong());
    let several = results.len() >= 2;

    if has_strong && several {
        Confidence::High
    } else if has_strong || several {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
