//! Chat-completion request types
//!
//! A request is an ordered list of role-tagged messages plus sampling
//! parameters. The wire encoding (model identifier, endpoint path, auth)
//! belongs to the client implementation, not to these types.

use serde::{Deserialize, Serialize};

/// Role tag for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instruction framing the assistant's behavior
    System,
    /// The actual task or question
    User,
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role tag
    pub role: MessageRole,
    /// Message body
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// One chat-completion request: messages, temperature, and whether the
/// response body must be a single JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Ordered messages, system instruction first
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Require a JSON-object response body
    pub json_response: bool,
}

impl ChatRequest {
    /// Create a request with one system and one user message.
    pub fn new(system: impl Into<String>, user: impl Into<String>, temperature: f32) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature,
            json_response: false,
        }
    }

    /// Require the response body to be a single JSON object.
    pub fn expect_json(mut self) -> Self {
        self.json_response = true;
        self
    }

    /// Content of the last user message, or empty if there is none.
    pub fn user_content(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}
