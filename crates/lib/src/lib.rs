//! # Form Assistance Core
//!
//! The retrieval and prompt-construction core of a form-filling support chatbot. A curated
//! knowledge base of terminology, FAQ, page-context and validation entries is searched for
//! every question; the results decide how confident the assistant can be, ground the prompt
//! sent to a generative model, and seed follow-up suggestions.
//!
//! The crate also carries the HTTP clients for supported model providers and the form field
//! validators used by the server.

pub mod assistant;
pub mod constants;
pub mod errors;
pub mod knowledge;
pub mod prompts;
pub mod providers;
pub mod types;
pub mod validation;

pub use assistant::{SupportAssistant, SupportAssistantBuilder};
pub use errors::{KnowledgeError, PromptError};
pub use knowledge::KnowledgeBase;
pub use types::{
    Category, ChatMessage, ChatRole, Confidence, KnowledgeEntry, SearchResult, SupportChatRequest,
    SupportChatResponse,
};
