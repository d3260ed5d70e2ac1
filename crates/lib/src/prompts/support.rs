//! # Support Assistant Prompts
//!
//! The fixed persona and the canned replies used by the support assistant. None of these
//! are generated; they are returned verbatim when the knowledge base cannot ground an
//! answer or when the model call fails.

/// The persona and behaviour rules placed at the top of every prompt.
pub const SUPPORT_SYSTEM_PROMPT: &str = r#"You are a friendly support assistant that helps people fill out government benefit forms.
- Use plain language at a grade 6 reading level. Keep answers short: two to four sentences or a brief list.
- Base your answer on the # Knowledge section when it is present. Do not invent rules, dates, amounts or phone numbers.
- If you are not sure, say so and suggest contacting a caseworker.
- Never ask for or repeat a full Social Insurance Number, bank account number or password.
- Do not give legal or financial advice. Explain what a form field means and what to enter."#;

/// Added to the prompt when only one weak knowledge entry matched.
pub const LOW_CONFIDENCE_NOTE: &str =
    "The knowledge below may only partly answer the question. Say clearly if it does not.";

/// The marker after which the model writes its reply.
pub const ASSISTANT_TURN_MARKER: &str = "Assistant:";

/// Returned when no knowledge entry matches the question.
pub const UNKNOWN_RESPONSE: &str = "I'm not sure about that one, and I don't want to guess. \
Try rephrasing your question, or ask about a specific field on the form. \
For questions about your own file, your caseworker can help.";

/// Returned when the model call fails or times out.
pub const APOLOGY_RESPONSE: &str = "Sorry, I'm having trouble answering right now. \
Your answers on the form are not affected. Please try again in a moment.";

/// Offered when a form page is open.
pub const SAVE_PROGRESS_SUGGESTION: &str = "How do I save my progress?";

/// General-purpose follow-ups, in priority order.
pub const GENERAL_SUGGESTIONS: &[&str] = &[
    "What documents do I need?",
    "How long does processing take?",
    "How do I contact my caseworker?",
    "What is household income?",
    SAVE_PROGRESS_SUGGESTION,
];

/// The fixed follow-ups attached to an apology.
pub const ERROR_SUGGESTIONS: &[&str] = &[
    "What documents do I need?",
    "How do I contact my caseworker?",
];

/// Template for turning a related entry's title into a question.
///
/// Placeholders: `{title}`
pub const RELATED_ENTRY_SUGGESTION_TEMPLATE: &str = "Tell me about {title}";

/// Template for the reply-language directive.
///
/// Placeholders: `{language}`
pub const LANGUAGE_DIRECTIVE_TEMPLATE: &str =
    "Respond in {language}. Keep form field names exactly as they appear on the form.";

/// Template for the page-location line.
///
/// Placeholders: `{page_path}`
pub const PAGE_LOCATION_TEMPLATE: &str = "The user is currently on page: {page_path}";
