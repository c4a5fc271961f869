pub mod openai;

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion response carried no message content")]
    EmptyResponse,
}

pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

/// One-shot chat completion: a system instruction plus a user message in,
/// the assistant's text out. Object-safe so callers can hold a `Box<dyn _>`.
pub trait CompletionBackend: Send + Sync {
    fn complete<'a>(&'a self, system: &'a str, user: &'a str) -> CompletionFuture<'a>;
}

/// Factory: create the backend from config.
pub fn create_backend(config: &Config) -> Box<dyn CompletionBackend> {
    Box::new(
        openai::OpenAiBackend::new(config.api_key.clone(), config.model.clone())
            .with_base_url(config.base_url.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[tokio::test]
    async fn create_backend_uses_config_endpoint_and_model() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-factory")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o-mini"
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#)
            .create_async()
            .await;

        let mut config = Config::new(
            PathBuf::from("/home/u"),
            "sk-factory".to_string(),
            Path::new("/app"),
        );
        config.base_url = server.url();

        let backend = create_backend(&config);
        let text = backend.complete("sys", "").await.unwrap();
        assert_eq!(text, "ok");
        mock.assert_async().await;
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = BackendError::Api {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "bad key".to_string(),
        };
        assert_eq!(err.to_string(), "API error 401 Unauthorized: bad key");
    }
}
