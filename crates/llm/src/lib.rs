//! Lexsight LLM
//!
//! Chat-completion abstraction for the Lexsight workspace:
//!
//! - `types` - message, tool-call, and response types
//! - `provider` - the `ChatModel` trait all providers implement
//! - `openai` - OpenAI-compatible provider over reqwest
//! - `http_client` - shared HTTP client factory

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAiProvider;
pub use provider::ChatModel;
pub use types::*;
