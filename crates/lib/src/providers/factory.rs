//! # AI Provider Factory
//!
//! Builds a provider instance from configuration. The server calls this once at startup and
//! hands the result to the assistant; nothing in the library constructs a client lazily.

use crate::{
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Configuration for one AI provider instance.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The type of provider (`gemini` or `local`).
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key, which can be null for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model_name: String,
}

// The key never reaches logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// Creates the provider described by `config`.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let api_url = config
        .api_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(String::from);

    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key = api_key.ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "api_key is required for the gemini provider. Please set AI_API_KEY."
                        .to_string(),
                )
            })?;
            let api_url = api_url
                .map(String::from)
                .unwrap_or_else(|| GeminiProvider::endpoint_for_model(&config.model_name));
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        "local" => {
            let api_url = api_url.map(String::from).ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "api_url is required for the local provider. Please set LOCAL_AI_API_URL."
                        .to_string(),
                )
            })?;
            info!("Configuring local AI provider with URL: {}", api_url);
            Box::new(LocalAiProvider::new(
                api_url,
                api_key,
                Some(config.model_name.clone()).filter(|m| !m.is_empty()),
            )?)
        }
        other => {
            return Err(PromptError::MissingAiProvider(format!(
                "unsupported provider type '{other}'"
            )))
        }
    };

    Ok(provider)
}
