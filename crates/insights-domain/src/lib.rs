//! PromptQL Insights Domain Layer
//!
//! This crate contains the core data model shared by all other layers:
//! the records produced for each analyzed email, the caller-supplied role
//! context, and the chat-completion request types and trait interface that
//! infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **ResultRecord**: one entry per analyzed email, either success-shaped
//!   (role plus insight bundle) or error-shaped (email plus message)
//! - **InsightBundle**: the three model-generated JSON structures for one
//!   (email, role) pair
//! - **RoleContext**: known email → role mapping that bypasses inference
//! - **ChatClient**: the trait boundary to the chat-completion service;
//!   implementations live in `insights-llm`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod context;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use chat::{ChatMessage, ChatRequest, MessageRole};
pub use context::{RoleContext, RoleContextError};
pub use record::{InsightBundle, ResultRecord};
pub use traits::ChatClient;
