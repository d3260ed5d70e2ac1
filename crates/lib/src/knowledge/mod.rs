//! # Knowledge Base
//!
//! The in-memory knowledge store and everything that reads from it: free-text search,
//! confidence classification and follow-up suggestions.

pub mod confidence;
pub mod search;
pub mod store;
pub mod suggestions;

pub use confidence::classify;
pub use search::{normalize_query, search, tokenize};
pub use store::KnowledgeBase;
pub use suggestions::suggest;
