//! Chat Model Trait
//!
//! Defines the common interface for chat-completion providers. The whole
//! workflow is synchronous request/response: one call in, one complete
//! message out. No streaming.

use async_trait::async_trait;

use super::types::{ChatResponse, LlmError, LlmResult, Message, ProviderConfig, ToolDefinition};

/// Trait that all chat-completion providers implement.
///
/// Components receive a `ChatModel` handle through their constructors
/// (dependency injection), never through a global, so each one can be
/// exercised against a stub in tests.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Send the conversation and get a complete response.
    ///
    /// # Arguments
    /// * `messages` - Conversation history, system turns included
    /// * `tools` - Tools the model may elect to call (may be empty)
    ///
    /// The response carries either a plain-text reply or one-or-more tool
    /// invocation requests (or both).
    async fn complete(
        &self,
        messages: Vec<Message>,
        tools: Vec<ToolDefinition>,
    ) -> LlmResult<ChatResponse>;

    /// Check if the provider is reachable and the API key is valid.
    async fn health_check(&self) -> LlmResult<()>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
