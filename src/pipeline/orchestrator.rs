//! Request Orchestrator
//!
//! Assembles the seed messages for a user request, runs the dispatch graph
//! to completion, and renders the tool results into a Markdown report.

use std::sync::Arc;

use lexsight_core::ToolRegistry;
use lexsight_llm::{ChatModel, Message, MessageContent};

use super::graph::{DispatchGraph, DispatchState, PipelineError};

/// Report returned when the decision step selected no tool.
pub const NO_RESPONSE_SENTINEL: &str = "No response generated.";

/// Default character budget for the document text.
pub const DEFAULT_MAX_CHARS: usize = 5000;

/// System policy for the decision step. The "one single tool" rule is
/// advisory: nothing downstream enforces it structurally.
const SYSTEM_PROMPT: &str = "\
Legal assistant. Two tools are available:
- summarize_law(law_text): summarizes the law
- tone_analysis(law_text): analyzes press coverage

STRICT RULE: you must choose ONE single tool per request.
- If a summary is requested: use ONLY summarize_law
- If press analysis is requested: use ONLY tone_analysis
- If both are requested: pick the one that seems most relevant

You may NOT call both tools at the same time.";

/// Truncate to the first `max_chars` characters. Character-count
/// truncation, not token-aware; may split mid-word or mid-sentence.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Runs one user request through the dispatch graph.
pub struct Orchestrator {
    graph: DispatchGraph,
    max_chars: usize,
}

impl Orchestrator {
    pub fn new(model: Arc<dyn ChatModel>, registry: Arc<ToolRegistry>, max_chars: usize) -> Self {
        Self {
            graph: DispatchGraph::new(model, registry),
            max_chars,
        }
    }

    /// Run the assistant for one request and return the Markdown report.
    ///
    /// The document text is truncated to the configured character budget,
    /// paired with the user request in the seed messages, and the graph is
    /// run synchronously to completion. Completion failures and unknown
    /// tool names propagate as `PipelineError`.
    pub async fn run(
        &self,
        document_text: &str,
        user_request: &str,
    ) -> Result<String, PipelineError> {
        let truncated = truncate_chars(document_text, self.max_chars);
        tracing::info!(
            chars = truncated.chars().count(),
            "running assistant request"
        );

        let full_query = format!("{}\n\nLaw text:\n{}", user_request, truncated);
        let seed = vec![Message::system(SYSTEM_PROMPT), Message::user(full_query)];

        let state = self.graph.run(DispatchState::new(seed)).await?;
        Ok(render_report(&state))
    }
}

/// Render every tool-result message as a Markdown section, in sequence
/// order, or the sentinel when no tool produced output.
fn render_report(state: &DispatchState) -> String {
    let sections: Vec<String> = state
        .messages()
        .iter()
        .flat_map(|message| message.content.iter())
        .filter_map(|content| match content {
            MessageContent::ToolResult {
                tool_name, content, ..
            } => Some(format!("## {}\n\n{}\n\n---\n", tool_name, content)),
            _ => None,
        })
        .collect();

    if sections.is_empty() {
        NO_RESPONSE_SENTINEL.to_string()
    } else {
        sections.join("\n")
    }
}
