//! PromptQL Insights LLM Layer
//!
//! Implementations of the `ChatClient` trait from `insights-domain`.
//!
//! # Providers
//!
//! - `MockClient`: deterministic mock for testing
//! - `OpenAiClient`: OpenAI-compatible chat-completions API integration
//!
//! # Examples
//!
//! ```
//! use insights_llm::MockClient;
//! use insights_domain::{ChatClient, ChatRequest};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let client = MockClient::new("Hello from LLM!");
//! let request = ChatRequest::new("system", "prompt", 0.3);
//! let result = client.complete(&request).await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use insights_domain::{ChatClient, ChatRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiClient;

/// Errors that can occur during chat-completion operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Service responded with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if readable
        message: String,
    },

    /// Response body could not be decoded or held no choices
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock chat client for deterministic testing
///
/// Returns pre-configured responses keyed by the request's user-message
/// content, without making any network calls. Tracks how many completions
/// were issued so tests can assert call counts.
///
/// # Examples
///
/// ```
/// use insights_llm::MockClient;
/// use insights_domain::{ChatClient, ChatRequest};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut client = MockClient::new("fallback");
/// client.respond_to("prompt1", "response1");
///
/// let hit = ChatRequest::new("sys", "prompt1", 0.3);
/// assert_eq!(client.complete(&hit).await.unwrap(), "response1");
///
/// let miss = ChatRequest::new("sys", "anything else", 0.3);
/// assert_eq!(client.complete(&miss).await.unwrap(), "fallback");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockClient {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Result<String, String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockClient {
    /// Create a mock returning a fixed response for unmatched prompts.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Register a response for a specific user-message content.
    pub fn respond_to(&mut self, user_content: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user_content.into(), Ok(response.into()));
    }

    /// Register an error for a specific user-message content.
    pub fn fail_on(&mut self, user_content: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user_content.into(), Err(message.into()));
    }

    /// Number of completions issued so far.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl ChatClient for MockClient {
    type Error = LlmError;

    async fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        match responses.get(request.user_content()) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(LlmError::Other(message.clone())),
            None => Ok(self.default_response.clone()),
        }
    }
}
