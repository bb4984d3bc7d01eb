//! Inference client — the single point of entry for hosted model calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the inference endpoint
//! directly. All model interactions go through [`InferenceClient`].
//!
//! A failed call is never fatal to a request: each generation pipeline
//! catches the error and degrades to its heuristic fallback. There is no
//! retry loop — a single failure triggers the fallback immediately.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ModelRequest<'a> {
    messages: Vec<ModelMessage<'a>>,
    #[serde(rename = "inferenceConfig")]
    inference_config: InferenceConfig,
}

#[derive(Debug, Serialize)]
struct ModelMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
struct ContentPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InferenceConfig {
    max_tokens: u32,
    temperature: f32,
}

/// Raw response envelope from the hosted model.
///
/// Every level is optional: the endpoint is not trusted to return the
/// expected shape, and a missing field is a decode failure (fallback
/// trigger), not a crash. [`ModelResponse::text`] is the decode step.
#[derive(Debug, Default, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    output: Option<ModelOutput>,
}

#[derive(Debug, Deserialize)]
struct ModelOutput {
    #[serde(default)]
    message: Option<OutputMessage>,
}

#[derive(Debug, Deserialize)]
struct OutputMessage {
    #[serde(default)]
    content: Vec<OutputBlock>,
}

#[derive(Debug, Deserialize)]
struct OutputBlock {
    #[serde(default)]
    text: Option<String>,
}

impl ModelResponse {
    /// Extracts the generated text from the nested envelope, or `None` when
    /// the response does not carry the expected output/message/content shape.
    pub fn text(&self) -> Option<&str> {
        self.output
            .as_ref()?
            .message
            .as_ref()?
            .content
            .iter()
            .find_map(|block| block.text.as_deref())
    }
}

/// Contract for a hosted text-generation model.
///
/// `max_tokens` and `temperature` are per-call because each pipeline uses
/// its own budget (captions are longer than score verdicts).
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ModelResponse, InferenceError>;
}

/// Production client for a hosted inference endpoint speaking the Nova-style
/// message format. One attempt per call; no client-side timeout override
/// (the HTTP client's default applies).
pub struct HostedModelClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model_id: String,
}

impl HostedModelClient {
    pub fn new(endpoint: String, api_key: String, model_id: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model_id,
        }
    }
}

#[async_trait]
impl InferenceClient for HostedModelClient {
    async fn invoke(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ModelResponse, InferenceError> {
        let url = format!(
            "{}/model/{}/invoke",
            self.endpoint.trim_end_matches('/'),
            self.model_id
        );

        let request_body = ModelRequest {
            messages: vec![ModelMessage {
                role: "user",
                content: vec![ContentPart { text: prompt }],
            }],
            inference_config: InferenceConfig {
                max_tokens,
                temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ModelResponse = response.json().await?;
        debug!("inference call succeeded (max_tokens={max_tokens})");

        Ok(envelope)
    }
}
