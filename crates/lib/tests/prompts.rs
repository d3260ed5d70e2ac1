//! # Prompt Assembly Tests
//!
//! Section order, optional sections and the history window of `build_prompt`.

mod common;

use common::fixture_knowledge_base;
use formaid::{
    prompts::{
        build_prompt, build_prompt_for_confidence, language_name,
        support::{LOW_CONFIDENCE_NOTE, SUPPORT_SYSTEM_PROMPT},
    },
    ChatMessage, Confidence, KnowledgeBase, SupportChatRequest,
};

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in prompt:\n{haystack}"))
}

#[test]
fn test_sections_appear_in_order() {
    let kb = fixture_knowledge_base();
    let mut request = SupportChatRequest::new("What is a caseworker?");
    request.language = "fr".to_string();
    request.page_path = "/forms/benefits".to_string();
    request.knowledge_context = Some("Field 4 asks for the caseworker's name.".to_string());
    request.additional_context = Some("The user already uploaded a lease.".to_string());
    request.conversation_history = vec![
        ChatMessage::user("Hi"),
        ChatMessage::assistant("Hello! How can I help?"),
    ];

    let prompt = build_prompt(&kb, &request);

    let persona = position(&prompt, SUPPORT_SYSTEM_PROMPT);
    let language = position(&prompt, "Respond in French.");
    let page = position(&prompt, "The user is currently on page: /forms/benefits");
    let page_context = position(&prompt, "[Page Context] Application form:");
    let knowledge = position(&prompt, "# Knowledge\n[Terminology] Caseworker:");
    let provided = position(&prompt, "# Provided knowledge\nField 4");
    let additional = position(&prompt, "# Additional context\nThe user already");
    let history = position(&prompt, "# Conversation\nUser: Hi\nAssistant: Hello! How can I help?");
    let message = position(&prompt, "User: What is a caseworker?\nAssistant:");

    assert_eq!(persona, 0);
    assert!(persona < language);
    assert!(language < page);
    assert!(page < page_context);
    assert!(page_context < knowledge);
    assert!(knowledge < provided);
    assert!(provided < additional);
    assert!(additional < history);
    assert!(history < message);
    assert!(prompt.ends_with("Assistant:"));
}

#[test]
fn test_optional_sections_are_omitted() {
    let kb = fixture_knowledge_base();
    let request = SupportChatRequest::new("asdlkjasdlkj nonsense");

    let prompt = build_prompt(&kb, &request);

    assert!(!prompt.contains("Respond in"));
    assert!(!prompt.contains("# Knowledge"));
    assert!(!prompt.contains("# Page context"));
    assert!(!prompt.contains("# Provided knowledge"));
    assert!(!prompt.contains("# Additional context"));
    assert!(!prompt.contains("# Conversation"));
    assert!(prompt.contains("The user is currently on page: /"));
    assert!(prompt.ends_with("User: asdlkjasdlkj nonsense\nAssistant:"));
}

#[test]
fn test_blank_caller_context_is_ignored() {
    let kb = fixture_knowledge_base();
    let mut request = SupportChatRequest::new("caseworker");
    request.knowledge_context = Some("   ".to_string());
    request.additional_context = Some(String::new());

    let prompt = build_prompt(&kb, &request);
    assert!(!prompt.contains("# Provided knowledge"));
    assert!(!prompt.contains("# Additional context"));
}

#[test]
fn test_history_window_keeps_last_six_turns() {
    let kb = fixture_knowledge_base();
    let mut request = SupportChatRequest::new("caseworker");
    request.conversation_history = (1..=10)
        .map(|i| {
            if i % 2 == 1 {
                ChatMessage::user(format!("turn-{i:02} question"))
            } else {
                ChatMessage::assistant(format!("turn-{i:02} answer"))
            }
        })
        .collect();

    let prompt = build_prompt(&kb, &request);

    for i in 1..=4 {
        assert!(!prompt.contains(&format!("turn-{i:02}")), "turn {i} should be dropped");
    }
    for i in 5..=10 {
        assert!(prompt.contains(&format!("turn-{i:02}")), "turn {i} should be kept");
    }
    assert!(position(&prompt, "turn-05") < position(&prompt, "turn-10"));
}

#[test]
fn test_english_variants_get_no_directive() {
    let kb = fixture_knowledge_base();
    for language in ["en", "EN", "en-CA", ""] {
        let mut request = SupportChatRequest::new("caseworker");
        request.language = language.to_string();
        assert!(!build_prompt(&kb, &request).contains("Respond in"));
    }
}

#[test]
fn test_language_names() {
    assert_eq!(language_name("fr"), "French");
    assert_eq!(language_name("fr-CA"), "French");
    assert_eq!(language_name("pa"), "Punjabi");
    assert_eq!(language_name("xx-custom"), "xx-custom");
}

#[test]
fn test_low_confidence_adds_caution() {
    let kb = fixture_knowledge_base();
    let request = SupportChatRequest::new("scan");

    let low = build_prompt_for_confidence(&kb, &request, Confidence::Low);
    let high = build_prompt_for_confidence(&kb, &request, Confidence::High);
    assert!(low.contains(LOW_CONFIDENCE_NOTE));
    assert!(!high.contains(LOW_CONFIDENCE_NOTE));
    assert_eq!(high, build_prompt(&kb, &request));
}

#[test]
fn test_assembly_is_pure() {
    let kb = fixture_knowledge_base();
    let mut request = SupportChatRequest::new("What is a caseworker?");
    request.conversation_history = vec![ChatMessage::user("earlier")];
    assert_eq!(build_prompt(&kb, &request), build_prompt(&kb, &request));

    let empty = KnowledgeBase::default();
    assert!(!build_prompt(&empty, &request).contains("# Knowledge"));
}
