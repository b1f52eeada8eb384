//! Error types for the engine

use thiserror::Error;

/// Errors that can occur while processing a single email
#[derive(Error, Debug)]
pub enum EngineError {
    /// Chat-completion service error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Response was valid JSON but not the required object shape
    #[error("Invalid insight format: {0}")]
    InvalidFormat(String),

    /// Response could not be parsed as JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::JsonParse(e.to_string())
    }
}
