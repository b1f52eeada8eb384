//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Implementations live in other crates.

use crate::chat::ChatRequest;
use async_trait::async_trait;

/// Trait for the chat-completion service boundary
///
/// Implemented by the infrastructure layer (`insights-llm`). The single
/// configured client handle is constructed once per run and injected into
/// the analyzer, so tests can substitute a deterministic implementation.
#[async_trait]
pub trait ChatClient {
    /// Error type for completion operations
    type Error;

    /// Issue one completion request and return the content of the first
    /// response choice.
    async fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error>;
}
