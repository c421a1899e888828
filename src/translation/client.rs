use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::future::Future;
use thiserror::Error;

use crate::config::ProjectConfig;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.2;

/// Fixed seed so repeated runs produce the same translation where the provider supports it.
pub const SEED: u64 = 1;

/// One chat-completion call: the system prompt plus the file content.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub system_prompt: String,
    pub source_text: String,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to connect to API endpoint {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("API response contained no choices")]
    NoChoices,
}

/// Anything that can turn a [`TranslationRequest`] into translated text.
pub trait ChatModel: Send + Sync {
    fn complete(
        &self,
        request: &TranslationRequest,
    ) -> impl Future<Output = Result<String, RequestError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    seed: u64,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible chat-completion endpoints.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model,
        }
    }

    /// Builds a client from the project configuration, applying the request timeout.
    pub fn from_config(config: &ProjectConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

impl ChatModel for TranslationClient {
    async fn complete(&self, request: &TranslationRequest) -> Result<String, RequestError> {
        let url = self.url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&request.system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.source_text),
                },
            ],
            temperature: TEMPERATURE,
            seed: SEED,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|source| RequestError::Connect {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status { status, body });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(RequestError::Decode)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(RequestError::NoChoices)
    }
}
