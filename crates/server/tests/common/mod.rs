//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port. The model provider is a `local`
//! provider pointed at an `httpmock::MockServer`, so tests control every completion and
//! can count how often the model was called.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use formaid_server::{
    config, router,
    state::{build_app_state, AppState},
};
use httpmock::{Method::POST, Mock, MockServer};
use reqwest::Client;
use serde_json::json;
use std::{fs, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with the built-in knowledge base.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_knowledge(None).await
    }

    /// Spawns the server, loading `corpus` as the knowledge base when given.
    pub async fn spawn_with_knowledge(corpus: Option<&str>) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let config_dir = tempdir()?;

        let knowledge_line = match corpus {
            Some(yaml) => {
                let corpus_path = config_dir.path().join("knowledge.yml");
                fs::write(&corpus_path, yaml)?;
                format!("knowledge_base_path: \"{}\"", corpus_path.display())
            }
            None => String::new(),
        };

        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
{knowledge_line}
provider:
  provider: "local"
  api_url: "{}"
  api_key: null
  model_name: "mock-chat-model"
generation:
  max_output_tokens: 200
  temperature: 0.1
  timeout_secs: 5
"#,
            mock_server.url(CHAT_COMPLETIONS_PATH)
        );
        fs::write(&config_path, config_content)?;

        let config = config::get_config(config_path.to_str())?;
        let app_state = build_app_state(config).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let state_for_server = app_state.clone();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(state_for_server);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Mocks the chat completion endpoint to answer with `content`.
    pub fn mock_completion(&self, content: &str) -> Mock<'_> {
        self.mock_server.mock(|when, then| {
            when.method(POST).path(CHAT_COMPLETIONS_PATH);
            then.status(200).json_body(json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            }));
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
