//! Configuration
//!
//! Settings loaded from the environment (and an optional `.env` file).
//! Missing credentials are a startup-time fatal condition; everything
//! downstream receives capability handles built from these settings.

use thiserror::Error;

use crate::pipeline::DEFAULT_MAX_CHARS;

/// Errors from loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}

/// Process-wide settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// OpenAI API key (required)
    pub openai_api_key: String,
    /// SerpAPI key for news search (required)
    pub serpapi_key: String,
    /// Completion model name
    pub model: String,
    /// Override the OpenAI-compatible endpoint
    pub base_url: Option<String>,
    /// Character budget for document truncation
    pub max_chars: usize,
    /// News-search locale (hl/gl)
    pub locale: String,
}

impl Settings {
    /// Load settings from the process environment, reading `.env` first
    /// if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::Missing(name.to_string()))
        };

        let max_chars = match lookup("LEXSIGHT_MAX_CHARS") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                name: "LEXSIGHT_MAX_CHARS".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_MAX_CHARS,
        };

        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            serpapi_key: required("SERPAPI_KEY")?,
            model: lookup("LEXSIGHT_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            base_url: lookup("OPENAI_BASE_URL"),
            max_chars,
            locale: lookup("LEXSIGHT_LOCALE").unwrap_or_else(|| "fr".to_string()),
        })
    }
}
