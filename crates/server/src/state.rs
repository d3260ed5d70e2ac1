//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The knowledge base and the model provider are
//! created exactly once here; a failure in either aborts startup.

use crate::config::AppConfig;
use formaid::{
    providers::factory::create_provider, KnowledgeBase, SupportAssistant, SupportAssistantBuilder,
};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The read-only knowledge base, shared with the assistant.
    pub knowledge_base: Arc<KnowledgeBase>,
    pub assistant: Arc<SupportAssistant>,
}

/// Loads the configured corpus, or the built-in one when no path is set.
pub fn load_knowledge_base(config: &AppConfig) -> anyhow::Result<KnowledgeBase> {
    let knowledge_base = match &config.knowledge_base_path {
        Some(path) => {
            info!(path = %path, "Loading knowledge base from file.");
            KnowledgeBase::from_yaml_file(path)?
        }
        None => {
            info!("Loading built-in knowledge base.");
            KnowledgeBase::builtin()?
        }
    };
    Ok(knowledge_base)
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let knowledge_base = Arc::new(load_knowledge_base(&config)?);

    let ai_provider = create_provider(&config.provider)?;
    info!(
        provider = %config.provider.provider,
        model = %config.provider.model_name,
        "Initialized AI provider."
    );

    let assistant = SupportAssistantBuilder::new()
        .knowledge_base(knowledge_base.clone())
        .ai_provider(ai_provider)
        .generation_options(config.generation.options())
        .timeout(config.generation.timeout())
        .build()?;

    Ok(AppState {
        knowledge_base,
        assistant: Arc::new(assistant),
    })
}
