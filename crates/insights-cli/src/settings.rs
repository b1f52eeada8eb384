//! Environment settings for the chat-completion service.

use crate::error::{CliError, Result};
use tracing::{debug, warn};

const API_KEY_VAR: &str = "OPENAI_API_KEY";
const API_URL_VAR: &str = "OPENAI_API_URL";
const MODEL_VAR: &str = "OPENAI_MODEL";

/// The three required settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bearer credential
    pub api_key: String,
    /// Service base URL
    pub base_url: String,
    /// Model identifier used for every request
    pub model: String,
}

impl Settings {
    /// Load settings from a local `.env` file (if present) and the process
    /// environment. A missing `.env` file is a warning, not an error.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded settings from {}", path.display()),
            Err(_) => warn!(".env file not found, using system environment variables"),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings through an arbitrary lookup, reporting all missing
    /// names in one error. An empty value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = read(API_KEY_VAR);
        let base_url = read(API_URL_VAR);
        let model = read(MODEL_VAR);

        match (api_key, base_url, model) {
            (Some(api_key), Some(base_url), Some(model)) => Ok(Self {
                api_key,
                base_url,
                model,
            }),
            (api_key, base_url, model) => {
                let mut missing = Vec::new();
                if api_key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                if base_url.is_none() {
                    missing.push(API_URL_VAR);
                }
                if model.is_none() {
                    missing.push(MODEL_VAR);
                }
                Err(CliError::Config(format!(
                    "Missing required environment variables: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}
