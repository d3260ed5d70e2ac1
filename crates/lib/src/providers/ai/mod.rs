pub mod gemini;
pub mod local;

use crate::{
    constants::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE},
    errors::PromptError,
};
use async_trait::async_trait;
use dyn_clone::DynClone;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Sampling limits for a single completion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// A trait for interacting with a generative text provider.
///
/// Implementations make exactly one request per call; retries belong to the transport.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Completes `prompt` and returns the generated text.
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);
