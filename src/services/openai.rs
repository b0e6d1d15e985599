// src/services/openai.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppError;
use crate::services::chat::{ChatClient, ChatClientBuilder};

/// Default target: the OpenAI cloud API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    // An absent inbound message goes out as `null`; what the provider
    // makes of that is the provider's business.
    content: Option<&'a str>,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiReplyMessage,
}

#[derive(Deserialize)]
struct ApiReplyMessage {
    content: Option<String>,
}

/// Connection settings for an OpenAI-compatible chat completions endpoint.
///
/// Implements [`ChatClientBuilder`]: `build` validates the settings and
/// produces the one client the service keeps.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl OpenAiConfig {
    /// Read settings from the environment:
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `OPENAI_API_KEY`  | `""` (build fails)       |
    /// | `OPENAI_MODEL`    | `gpt-4o-mini`            |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com` |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl ChatClientBuilder for OpenAiConfig {
    fn build(&self) -> Result<Box<dyn ChatClient>, AppError> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }
        Ok(Box::new(OpenAiClient::new(self.clone())))
    }
}

/// HTTP client for the OpenAI chat completions API (and compatible
/// endpoints). One POST per [`ChatClient::complete`] call; no retry.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let url = format!("{}{COMPLETIONS_PATH}", config.base_url.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            config,
            url,
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, message: Option<&str>) -> Result<String, AppError> {
        let request = ApiRequest {
            model: &self.config.model,
            messages: vec![ApiMessage {
                role: "user",
                content: message,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("openai: request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("openai: API returned {status}: {body}");
            return Err(anyhow::anyhow!("openai: API returned {status}").into());
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("openai: failed to parse response: {e}"))?;

        Ok(api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}
