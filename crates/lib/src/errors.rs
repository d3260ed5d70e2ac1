use thiserror::Error;

/// Errors raised while talking to a generative model provider.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider returned an empty completion")]
    EmptyResponse,
    #[error("AI provider did not respond within {0} seconds")]
    Timeout(u64),
    #[error("AI provider is not configured: {0}")]
    MissingAiProvider(String),
}

/// Errors raised while loading the knowledge base.
///
/// All of these are fatal at startup: a store that fails to load must never serve traffic.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Duplicate knowledge entry id: '{0}'")]
    DuplicateId(String),
    #[error("Knowledge entry at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Knowledge entry '{0}' has an empty title")]
    EmptyTitle(String),
    #[error("Failed to parse knowledge base YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to read knowledge base file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
