//! Shared LLM Types
//!
//! Message, tool-call, and response types exchanged with chat-completion
//! providers, plus the `LlmError` taxonomy.
//!
//! A conversation is an append-only ordered sequence of `Message` values.
//! Messages are immutable once created; the dispatch graph only ever appends.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    /// A tool-result turn answering an assistant tool call.
    Tool,
}

/// A content block within a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    /// Plain text content
    Text { text: String },
    /// A tool invocation requested by the assistant
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    /// The textual result of a tool invocation
    ToolResult {
        tool_use_id: String,
        tool_name: String,
        content: String,
    },
}

/// A single turn in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: Vec<MessageContent>,
}

impl Message {
    /// Create a system message.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: vec![MessageContent::Text { text: text.into() }],
        }
    }

    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: vec![MessageContent::Text { text: text.into() }],
        }
    }

    /// Create an assistant message with optional text and tool calls.
    pub fn assistant(text: Option<String>, tool_calls: Vec<ToolCall>) -> Self {
        let mut content = Vec::new();
        if let Some(text) = text {
            content.push(MessageContent::Text { text });
        }
        for call in tool_calls {
            content.push(MessageContent::ToolUse {
                id: call.id,
                name: call.name,
                input: call.arguments,
            });
        }
        Self {
            role: MessageRole::Assistant,
            content,
        }
    }

    /// Create a tool-result message answering the given call id.
    pub fn tool_result(
        tool_name: impl Into<String>,
        tool_use_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            role: MessageRole::Tool,
            content: vec![MessageContent::ToolResult {
                tool_use_id: tool_use_id.into(),
                tool_name: tool_name.into(),
                content: content.into(),
            }],
        }
    }

    /// Concatenated text blocks of this message.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match c {
                MessageContent::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Tool invocation requests carried by this message, in order.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|c| match c {
                MessageContent::ToolUse { id, name, input } => Some(ToolCall {
                    id: id.clone(),
                    name: name.clone(),
                    arguments: input.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Whether this message carries one or more tool invocation requests.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|c| matches!(c, MessageContent::ToolUse { .. }))
    }
}

/// A tool invocation request emitted by the decision step.
///
/// Ids are assigned by the provider and are unique within one decision
/// step; they pair requests with their tool-result turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: Value,
}

/// A tool declaration sent to the provider.
///
/// The description is advisory steering for the model's tool selection;
/// nothing in it is enforced by code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    ToolUse,
    MaxTokens,
    Other,
}

impl From<&str> for StopReason {
    fn from(s: &str) -> Self {
        match s {
            "stop" | "end_turn" => StopReason::EndTurn,
            "tool_calls" | "tool_use" => StopReason::ToolUse,
            "length" | "max_tokens" => StopReason::MaxTokens,
            _ => StopReason::Other,
        }
    }
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageStats {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// A complete (non-streaming) chat response.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Text reply, if any
    pub content: Option<String>,
    /// Tool invocation requests, if any
    pub tool_calls: Vec<ToolCall>,
    pub stop_reason: StopReason,
    pub usage: UsageStats,
    pub model: String,
}

impl ChatResponse {
    /// Convert this response into the assistant message to append to the
    /// conversation.
    pub fn into_message(self) -> Message {
        Message::assistant(self.content, self.tool_calls)
    }
}

/// Provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Override the default API endpoint (OpenAI-compatible servers).
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: None,
            temperature: 0.1,
            max_tokens: 4096,
        }
    }
}

/// Errors from chat-completion providers.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    #[error("Server error ({status:?}): {message}")]
    ServerError { message: String, status: Option<u16> },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.text(), "Hello");
        assert!(!msg.has_tool_calls());
    }

    #[test]
    fn test_assistant_message_with_tool_calls() {
        let call = ToolCall {
            id: "call_1".to_string(),
            name: "summarize_law".to_string(),
            arguments: serde_json::json!({"law_text": "Article 1"}),
        };
        let msg = Message::assistant(None, vec![call.clone()]);
        assert!(msg.has_tool_calls());
        assert_eq!(msg.tool_calls(), vec![call]);
        assert_eq!(msg.text(), "");
    }

    #[test]
    fn test_tool_result_message() {
        let msg = Message::tool_result("summarize_law", "call_1", "A summary.");
        assert_eq!(msg.role, MessageRole::Tool);
        assert!(!msg.has_tool_calls());
        match &msg.content[0] {
            MessageContent::ToolResult {
                tool_use_id,
                tool_name,
                content,
            } => {
                assert_eq!(tool_use_id, "call_1");
                assert_eq!(tool_name, "summarize_law");
                assert_eq!(content, "A summary.");
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_stop_reason_from_str() {
        assert_eq!(StopReason::from("stop"), StopReason::EndTurn);
        assert_eq!(StopReason::from("tool_calls"), StopReason::ToolUse);
        assert_eq!(StopReason::from("length"), StopReason::MaxTokens);
        assert_eq!(StopReason::from("weird"), StopReason::Other);
    }

    #[test]
    fn test_response_into_message() {
        let response = ChatResponse {
            content: Some("Thinking about it.".to_string()),
            tool_calls: vec![ToolCall {
                id: "c1".to_string(),
                name: "tone_analysis".to_string(),
                arguments: serde_json::json!({"law_text": "..."}),
            }],
            stop_reason: StopReason::ToolUse,
            usage: UsageStats::default(),
            model: "gpt-4o-mini".to_string(),
        };
        let msg = response.into_message();
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.text(), "Thinking about it.");
        assert_eq!(msg.tool_calls().len(), 1);
    }
}
