//! OpenAI-compatible chat-completions client
//!
//! Speaks the `POST {base_url}/chat/completions` wire format with bearer
//! authentication. The handle is constructed once per run and holds the
//! credential, endpoint, and model identifier for every request.

use crate::LlmError;
use async_trait::async_trait;
use insights_domain::{ChatClient, ChatMessage, ChatRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Chat-completions API client
pub struct OpenAiClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiClient {
    /// Create a new client.
    ///
    /// # Parameters
    ///
    /// - `base_url`: service base URL (e.g., "https://api.openai.com/v1")
    /// - `api_key`: bearer credential
    /// - `model`: model identifier used for every request
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        let endpoint = if base_url.ends_with("/chat/completions") {
            base_url
        } else {
            format!("{}/chat/completions", base_url.trim_end_matches('/'))
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            endpoint,
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    /// Issue one completion request and return the first choice's content.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, responds with a
    /// non-success status, returns an undecodable body, or returns no choices.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            response_format: request
                .json_response
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api { status, message });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    type Error = LlmError;

    async fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        OpenAiClient::complete(self, request).await
    }
}
