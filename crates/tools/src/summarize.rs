//! Law Summarization Tool
//!
//! Produces a plain-language synopsis of a law text with one templated
//! completion call. The model's reply is returned verbatim.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use lexsight_core::{CoreError, CoreResult, Tool};
use lexsight_llm::{ChatModel, Message};

const SYSTEM_PROMPT: &str = "You are a legal assistant specialising in French legislation.";

/// Summarization tool. Contract: `invoke({law_text}) -> summary`.
pub struct SummarizeTool {
    model: Arc<dyn ChatModel>,
}

impl SummarizeTool {
    pub const NAME: &'static str = "summarize_law";

    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Tool for SummarizeTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Produce a clear, understandable summary of a law text."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "law_text": {
                    "type": "string",
                    "description": "Raw text of the law to summarize"
                }
            },
            "required": ["law_text"]
        })
    }

    async fn invoke(&self, args: Value) -> CoreResult<String> {
        let law_text = args
            .get("law_text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| CoreError::validation("law_text argument is required"))?;

        let messages = vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(format!(
                "Here is a law text:\n{}\n\nWrite a clear, concise summary that an \
                 ordinary citizen can understand. Simplify the legal jargon where \
                 helpful, in a pedagogical way.\n\nSummary:",
                law_text
            )),
        ];

        let response = self
            .model
            .complete(messages, vec![])
            .await
            .map_err(|e| CoreError::internal(format!("summarization completion failed: {}", e)))?;

        response
            .content
            .ok_or_else(|| CoreError::parse("model returned no summary text"))
    }
}
