//! PromptQL Insights Engine
//!
//! Turns a list of email addresses into per-email insight records using a
//! chat-completion service.
//!
//! # Overview
//!
//! For each email the engine resolves a professional role (from a
//! caller-supplied context, or by one inference request) and then issues
//! three completion requests for role-specific PromptQL material: use cases,
//! example queries, and visualization ideas. Failures are isolated per email;
//! a partially failed batch is a valid terminal state.
//!
//! # Architecture
//!
//! ```text
//! Emails → Analyzer → resolver → generator → ResultRecords
//!                        ↓            ↓
//!                     ChatClient (injected)
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use insights_engine::Analyzer;
//! use insights_llm::MockClient;
//!
//! # async fn example() {
//! let client = MockClient::new(r#"{"use_cases": []}"#);
//! let analyzer = Analyzer::new(client);
//!
//! let emails = vec!["a@x.com".to_string()];
//! let records = analyzer.analyze(&emails, None).await;
//! assert_eq!(records.len(), 1);
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod error;
mod generator;
mod parser;
pub mod prompt;
mod resolver;


pub use analyzer::Analyzer;
pub use error::EngineError;
pub use generator::generate_insights;
pub use resolver::resolve_role;
