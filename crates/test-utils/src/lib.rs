use formaid::{
    errors::PromptError,
    providers::ai::{AiProvider, GenerationOptions},
    Category, KnowledgeBase, KnowledgeEntry,
};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// --- Mock AI Provider ---

#[derive(Clone, Debug)]
enum MockBehaviour {
    Reply(String),
    Fail(String),
    Stall(Duration),
}

/// An in-process AI provider that records every prompt it receives.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    behaviour: Arc<Mutex<MockBehaviour>>,
    calls: Arc<Mutex<Vec<(String, GenerationOptions)>>>,
}

impl MockAiProvider {
    /// A provider that always answers with `response`.
    pub fn replying(response: &str) -> Self {
        Self::with_behaviour(MockBehaviour::Reply(response.to_string()))
    }

    /// A provider whose every call fails with an API error.
    pub fn failing(message: &str) -> Self {
        Self::with_behaviour(MockBehaviour::Fail(message.to_string()))
    }

    /// A provider that sleeps for `delay` before answering.
    pub fn stalling(delay: Duration) -> Self {
        Self::with_behaviour(MockBehaviour::Stall(delay))
    }

    fn with_behaviour(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour: Arc::new(Mutex::new(behaviour)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(prompt, _)| prompt.clone())
            .collect()
    }

    /// Retrieves the recorded generation options for assertion.
    pub fn options(&self) -> Vec<GenerationOptions> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, options)| *options)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, PromptError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), *options));

        let behaviour = self.behaviour.lock().unwrap().clone();
        match behaviour {
            MockBehaviour::Reply(response) => Ok(response),
            MockBehaviour::Fail(message) => Err(PromptError::AiApi(message)),
            MockBehaviour::Stall(delay) => {
                tokio::time::sleep(delay).await;
                Ok("This answer arrived too late.".to_string())
            }
        }
    }
}

// --- Knowledge Fixtures ---

/// Builds an entry with no page context.
pub fn entry(
    id: &str,
    category: Category,
    title: &str,
    content: &str,
    keywords: &[&str],
    related: &[&str],
) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.to_string(),
        category,
        title: title.to_string(),
        content: content.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        related_entries: related.iter().map(|r| r.to_string()).collect(),
        page_context: None,
    }
}

/// A small, fixed corpus used across the test suites.
///
/// `guide-upload` links to `missing-entry`, which does not exist.
pub fn fixture_entries() -> Vec<KnowledgeEntry> {
    let mut page_forms = entry(
        "page-forms",
        Category::PageContext,
        "Application form",
        "The application form is split into sections. Required fields have an asterisk.",
        &["form", "section", "asterisk"],
        &[],
    );
    page_forms.page_context = Some(vec!["/forms".to_string()]);

    vec![
        entry(
            "term-caseworker",
            Category::Terminology,
            "Caseworker",
            "A caseworker is the government employee who reviews your application.",
            &["caseworker", "case worker"],
            &["faq-contact", "faq-processing"],
        ),
        entry(
            "faq-contact",
            Category::Faq,
            "Contacting your caseworker",
            "Your caseworker's phone number is printed on your confirmation letter.",
            &["contact", "caseworker", "phone"],
            &["term-caseworker"],
        ),
        entry(
            "faq-processing",
            Category::Faq,
            "Processing time",
            "Most applications are processed within 4 to 6 weeks.",
            &["processing", "wait", "weeks"],
            &["faq-contact"],
        ),
        entry(
            "guide-upload",
            Category::Guide,
            "Uploading documents",
            "Take a clear photo of each page or scan it as a PDF.",
            &["upload", "documents", "scan"],
            &["missing-entry", "faq-processing"],
        ),
        page_forms,
        entry(
            "rule-postal",
            Category::ValidationRule,
            "Postal code format",
            "Postal codes follow the pattern A1A 1A1.",
            &["postal", "code"],
            &[],
        ),
    ]
}

pub fn fixture_knowledge_base() -> KnowledgeBase {
    KnowledgeBase::from_entries(fixture_entries()).expect("fixture corpus is valid")
}
