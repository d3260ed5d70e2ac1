//! # Core Types
//!
//! Knowledge entries, search results and the support-chat request/response shapes.
//! The chat types are the wire format of the `/support-chat` endpoint, so their field
//! names serialize in camelCase.

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_PAGE_PATH};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of knowledge an entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Terminology,
    Faq,
    PageContext,
    ValidationRule,
    Guide,
}

impl Category {
    /// Terminology and FAQ hits count as strong matches for confidence classification.
    pub fn is_strong(self) -> bool {
        matches!(self, Category::Terminology | Category::Faq)
    }

    /// A short label used when rendering snippets into a prompt.
    pub fn label(self) -> &'static str {
        match self {
            Category::Terminology => "Terminology",
            Category::Faq => "FAQ",
            Category::PageContext => "Page Context",
            Category::ValidationRule => "Validation Rule",
            Category::Guide => "Guide",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One unit of the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Ids of other entries, used only to derive follow-up suggestions.
    #[serde(default)]
    pub related_entries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_context: Option<Vec<String>>,
}

/// A knowledge entry scored against one query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    pub entry: &'a KnowledgeEntry,
    pub score: f64,
}

/// How well a query is grounded in the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Unknown,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn display_name(self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Assistant => "Assistant",
        }
    }
}

/// A single prior turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: None,
        }
    }
}

fn default_page_path() -> String {
    DEFAULT_PAGE_PATH.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// An inbound chat request from the form UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
    #[serde(default = "default_page_path")]
    pub page_path: String,
    #[serde(default)]
    pub knowledge_context: Option<String>,
    #[serde(default)]
    pub additional_context: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl SupportChatRequest {
    /// Creates a request with defaults for everything but the message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            conversation_history: Vec::new(),
            page_path: default_page_path(),
            knowledge_context: None,
            additional_context: None,
            language: default_language(),
        }
    }
}

/// The reply returned for every chat request, including fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportChatResponse {
    pub message: String,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_used: Option<Vec<String>>,
    pub confidence: Confidence,
}
