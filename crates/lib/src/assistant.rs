//! # Support Assistant
//!
//! Sequences classification, prompt assembly, the model call and suggestions into one reply.
//!
//! There are three outcomes, and every one of them is a well-formed `SupportChatResponse`:
//!
//! 1.  **Unknown**: nothing in the knowledge base matches. A canned reply is returned and the
//!     model is never called.
//! 2.  **Grounded**: the prompt is built, the model is called once under a timeout, and the
//!     reply is returned with the ids of the entries that grounded it.
//! 3.  **Failure**: the model call errors or times out. The error is logged and a fixed
//!     apology is returned instead.

use crate::{
    constants::{CONTEXT_SEARCH_LIMIT, DEFAULT_TIMEOUT_SECS},
    errors::PromptError,
    knowledge::{classify, search, suggest, KnowledgeBase},
    prompts::{
        build_prompt_for_confidence,
        support::{APOLOGY_RESPONSE, ERROR_SUGGESTIONS, UNKNOWN_RESPONSE},
    },
    providers::ai::{AiProvider, GenerationOptions},
    types::{Confidence, SupportChatRequest, SupportChatResponse},
};
use std::{sync::Arc, time::Duration};
use tracing::{error, info, warn};

/// Answers support-chat requests against a fixed knowledge base.
#[derive(Clone, Debug)]
pub struct SupportAssistant {
    knowledge_base: Arc<KnowledgeBase>,
    ai_provider: Box<dyn AiProvider>,
    generation_options: GenerationOptions,
    timeout: Duration,
}

/// A builder for creating `SupportAssistant` instances.
#[derive(Default)]
pub struct SupportAssistantBuilder {
    knowledge_base: Option<Arc<KnowledgeBase>>,
    ai_provider: Option<Box<dyn AiProvider>>,
    generation_options: GenerationOptions,
    timeout: Option<Duration>,
}

impl SupportAssistantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn knowledge_base(mut self, knowledge_base: Arc<KnowledgeBase>) -> Self {
        self.knowledge_base = Some(knowledge_base);
        self
    }

    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    pub fn generation_options(mut self, options: GenerationOptions) -> Self {
        self.generation_options = options;
        self
    }

    /// Sets the upper bound on a single model call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the assistant. A provider is required; the knowledge base defaults to empty.
    pub fn build(self) -> Result<SupportAssistant, PromptError> {
        let ai_provider = self.ai_provider.ok_or_else(|| {
            PromptError::MissingAiProvider("no AI provider was given to the assistant".to_string())
        })?;
        Ok(SupportAssistant {
            knowledge_base: self.knowledge_base.unwrap_or_default(),
            ai_provider,
            generation_options: self.generation_options,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

impl SupportAssistant {
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Produces the reply for one request. Never fails.
    pub async fn respond(&self, request: &SupportChatRequest) -> SupportChatResponse {
        let confidence = classify(&self.knowledge_base, &request.message);
        info!(%confidence, page_path = %request.page_path, "Handling support chat request.");

        if confidence == Confidence::Unknown {
            return SupportChatResponse {
                message: UNKNOWN_RESPONSE.to_string(),
                suggestions: suggest(&self.knowledge_base, &request.message, &request.page_path),
                knowledge_used: None,
                confidence: Confidence::Unknown,
            };
        }

        match self.grounded_reply(request, confidence).await {
            Ok(response) => response,
            Err(e) => {
                error!("Support chat generation failed: {e}");
                Self::apology()
            }
        }
    }

    async fn grounded_reply(
        &self,
        request: &SupportChatRequest,
        confidence: Confidence,
    ) -> Result<SupportChatResponse, PromptError> {
        let prompt = build_prompt_for_confidence(&self.knowledge_base, request, confidence);

        let generation = self.ai_provider.generate(&prompt, &self.generation_options);
        let message = match tokio::time::timeout(self.timeout, generation).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(timeout = ?self.timeout, "AI provider timed out.");
                return Err(PromptError::Timeout(self.timeout.as_secs()));
            }
        };

        let knowledge_used = search(&self.knowledge_base, &request.message, CONTEXT_SEARCH_LIMIT)
            .into_iter()
            .map(|result| result.entry.id.clone())
            .collect();

        Ok(SupportChatResponse {
            message,
            suggestions: suggest(&self.knowledge_base, &request.message, &request.page_path),
            knowledge_used: Some(knowledge_used),
            confidence,
        })
    }

    /// The reply used whenever the grounded path fails.
    pub fn apology() -> SupportChatResponse {
        SupportChatResponse {
            message: APOLOGY_RESPONSE.to_string(),
            suggestions: ERROR_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            knowledge_used: None,
            confidence: Confidence::Unknown,
        }
    }
}
