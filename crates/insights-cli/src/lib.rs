//! PromptQL Insights CLI library.
//!
//! This library provides the command surface for the analyzer: argument
//! parsing, environment settings loading, role-context file loading, and
//! report rendering/writing.

pub mod cli;
pub mod context;
pub mod error;
pub mod report;
pub mod settings;

pub use cli::{Cli, OutputFormat};
pub use error::{CliError, Result};
pub use settings::Settings;
