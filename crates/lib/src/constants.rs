//! # Shared Constants
//!
//! Limits and defaults shared between the library and the server. Keeping them here
//! avoids magic numbers drifting apart between the assembler, the classifier and the API.

/// Language assumed when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Page path assumed when a request does not name one.
pub const DEFAULT_PAGE_PATH: &str = "/";

/// Number of knowledge hits used for grounding, classification and suggestions.
pub const CONTEXT_SEARCH_LIMIT: usize = 3;

/// Number of most recent conversation turns carried into a prompt.
pub const HISTORY_WINDOW: usize = 6;

/// Upper bound on follow-up suggestions returned with a reply.
pub const MAX_SUGGESTIONS: usize = 3;

/// Default and maximum `limit` for the direct knowledge search endpoint.
pub const DEFAULT_KNOWLEDGE_SEARCH_LIMIT: usize = 5;
pub const MAX_KNOWLEDGE_SEARCH_LIMIT: usize = 20;

/// Generation defaults favour short, deterministic answers.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
