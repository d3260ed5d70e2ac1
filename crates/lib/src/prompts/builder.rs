//! # Prompt Assembly
//!
//! Builds the single prompt string sent to the model for one support-chat request. The
//! sections always appear in the same order and optional sections are left out entirely
//! when they have nothing to say:
//!
//! 1.  The fixed persona (`SUPPORT_SYSTEM_PROMPT`).
//! 2.  A reply-language directive, for any language other than English.
//! 3.  The page the user is on, followed by knowledge attached to that page.
//! 4.  The best knowledge-base matches for the message.
//! 5.  Knowledge and context supplied by the caller.
//! 6.  The most recent conversation turns (`HISTORY_WINDOW`).
//! 7.  The user's message and the assistant turn marker.
//!
//! Assembly is pure: the same store and request always produce the same prompt.

use crate::{
    constants::{CONTEXT_SEARCH_LIMIT, DEFAULT_LANGUAGE, HISTORY_WINDOW},
    knowledge::{search::search, store::KnowledgeBase},
    prompts::support::{
        ASSISTANT_TURN_MARKER, LANGUAGE_DIRECTIVE_TEMPLATE, LOW_CONFIDENCE_NOTE,
        PAGE_LOCATION_TEMPLATE, SUPPORT_SYSTEM_PROMPT,
    },
    types::{ChatMessage, ChatRole, Confidence, KnowledgeEntry, SupportChatRequest},
};

/// Maps a language code to the name used in the directive. Unknown codes pass through.
pub fn language_name(code: &str) -> String {
    let primary = code
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let name = match primary.as_str() {
        "en" => "English",
        "fr" => "French",
        "es" => "Spanish",
        "de" => "German",
        "pt" => "Portuguese",
        "it" => "Italian",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ko" => "Korean",
        "ar" => "Arabic",
        "pa" => "Punjabi",
        "hi" => "Hindi",
        "ur" => "Urdu",
        "tl" => "Tagalog",
        "vi" => "Vietnamese",
        "uk" => "Ukrainian",
        "ru" => "Russian",
        "fa" => "Persian",
        "so" => "Somali",
        "iu" => "Inuktitut",
        _ => return code.to_string(),
    };
    name.to_string()
}

fn is_default_language(code: &str) -> bool {
    let code = code.trim();
    code.is_empty()
        || code.eq_ignore_ascii_case(DEFAULT_LANGUAGE)
        || code
            .split(['-', '_'])
            .next()
            .is_some_and(|primary| primary.eq_ignore_ascii_case(DEFAULT_LANGUAGE))
}

fn render_entry(entry: &KnowledgeEntry) -> String {
    format!(
        "[{}] {}: {}",
        entry.category.label(),
        entry.title,
        entry.content.trim()
    )
}

fn render_turn(turn: &ChatMessage) -> String {
    format!("{}: {}", turn.role.display_name(), turn.content.trim())
}

/// Builds the prompt for `request`.
pub fn build_prompt(kb: &KnowledgeBase, request: &SupportChatRequest) -> String {
    assemble(kb, request, false)
}

/// Builds the prompt for `request`, adding a caution when grounding is weak.
pub fn build_prompt_for_confidence(
    kb: &KnowledgeBase,
    request: &SupportChatRequest,
    confidence: Confidence,
) -> String {
    assemble(kb, request, confidence == Confidence::Low)
}

fn assemble(kb: &KnowledgeBase, request: &SupportChatRequest, low_confidence: bool) -> String {
    let mut sections: Vec<String> = vec![SUPPORT_SYSTEM_PROMPT.to_string()];

    if !is_default_language(&request.language) {
        sections.push(
            LANGUAGE_DIRECTIVE_TEMPLATE.replace("{language}", &language_name(request.language.trim())),
        );
    }

    let page_path = request.page_path.trim();
    if !page_path.is_empty() {
        let mut page = PAGE_LOCATION_TEMPLATE.replace("{page_path}", page_path);
        let page_entries = kb.entries_for_page(page_path);
        if !page_entries.is_empty() {
            page.push_str("\n\n# Page context");
            for entry in page_entries {
                page.push('\n');
                page.push_str(&render_entry(entry));
            }
        }
        sections.push(page);
    }

    let matches = search(kb, &request.message, CONTEXT_SEARCH_LIMIT);
    if !matches.is_empty() {
        let mut knowledge = String::from("# Knowledge");
        if low_confidence {
            knowledge.push('\n');
            knowledge.push_str(LOW_CONFIDENCE_NOTE);
        }
        for result in &matches {
            knowledge.push('\n');
            knowledge.push_str(&render_entry(result.entry));
        }
        sections.push(knowledge);
    }

    if let Some(provided) = non_blank(request.knowledge_context.as_deref()) {
        sections.push(format!("# Provided knowledge\n{provided}"));
    }
    if let Some(additional) = non_blank(request.additional_context.as_deref()) {
        sections.push(format!("# Additional context\n{additional}"));
    }

    let window_start = request
        .conversation_history
        .len()
        .saturating_sub(HISTORY_WINDOW);
    let history: Vec<String> = request.conversation_history[window_start..]
        .iter()
        .filter(|turn| !turn.content.trim().is_empty())
        .map(render_turn)
        .collect();
    if !history.is_empty() {
        sections.push(format!("# Conversation\n{}", history.join("\n")));
    }

    sections.push(format!(
        "{}: {}\n{ASSISTANT_TURN_MARKER}",
        ChatRole::User.display_name(),
        request.message.trim()
    ));

    sections.join("\n\n")
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
