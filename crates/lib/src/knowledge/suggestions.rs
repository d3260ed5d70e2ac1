//! # Suggestion Generator
//!
//! Produces up to three distinct follow-up questions from, in order: the related entries of
//! the best search hits, a page heuristic, and a fixed general pool.

use crate::{
    constants::{CONTEXT_SEARCH_LIMIT, MAX_SUGGESTIONS},
    knowledge::{search::search, store::KnowledgeBase},
    prompts::support::{
        GENERAL_SUGGESTIONS, RELATED_ENTRY_SUGGESTION_TEMPLATE, SAVE_PROGRESS_SUGGESTION,
    },
};

struct Suggestions(Vec<String>);

impl Suggestions {
    fn is_full(&self) -> bool {
        self.0.len() >= MAX_SUGGESTIONS
    }

    /// Adds a suggestion unless it is already present or the list is full.
    fn push(&mut self, suggestion: String) {
        if !self.is_full() && !self.0.contains(&suggestion) {
            self.0.push(suggestion);
        }
    }
}

pub fn related_entry_suggestion(title: &str) -> String {
    RELATED_ENTRY_SUGGESTION_TEMPLATE.replace("{title}", &title.to_lowercase())
}

/// Returns at most three unique follow-up questions for `query` on `page_path`.
pub fn suggest(kb: &KnowledgeBase, query: &str, page_path: &str) -> Vec<String> {
    let mut suggestions = Suggestions(Vec::with_capacity(MAX_SUGGESTIONS));

    'results: for result in search(kb, query, CONTEXT_SEARCH_LIMIT) {
        for related in result
            .entry
            .related_entries
            .iter()
            .filter_map(|id| kb.get(id))
        {
            if suggestions.is_full() {
                break 'results;
            }
            suggestions.push(related_entry_suggestion(&related.title));
        }
    }

    if page_path.contains("form") {
        suggestions.push(SAVE_PROGRESS_SUGGESTION.to_string());
    }

    for general in GENERAL_SUGGESTIONS {
        if suggestions.is_full() {
            break;
        }
        suggestions.push(general.to_string());
    }

    suggestions.0
}
