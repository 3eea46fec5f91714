//! Dispatch Graph
//!
//! The acyclic two-step workflow at the center of the assistant: a decision
//! step that asks the model to select at most one tool, a routing predicate
//! over the last message, and a tool-execution step. After execution the
//! graph always terminates; there is deliberately no second decision step
//! to synthesize tool outputs.
//!
//! The one-tool policy lives in the system prompt only. When the model
//! violates it and requests several tools, every request is executed in
//! listed order. That gap is documented, tested behavior.

use std::sync::Arc;

use thiserror::Error;

use lexsight_core::ToolRegistry;
use lexsight_llm::{ChatModel, LlmError, Message, ToolDefinition};

/// Errors that abort a dispatch run. These propagate to the caller; they
/// are distinct from tool-internal failures, which become tool-result text.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The completion capability failed during the decision step.
    #[error("Decision step failed: {0}")]
    Completion(#[from] LlmError),

    /// The decision step requested a tool that is not registered. This is
    /// a registry/prompt mismatch, treated as a contract violation.
    #[error("Unknown tool requested by the decision step: {0}")]
    UnknownTool(String),
}

/// The per-request state threaded through the graph: the ordered,
/// append-only message sequence. Created fresh for each orchestration
/// call and dropped when it returns.
#[derive(Debug, Clone)]
pub struct DispatchState {
    messages: Vec<Message>,
}

impl DispatchState {
    /// Create a state seeded with the initial messages.
    pub fn new(seed: Vec<Message>) -> Self {
        Self { messages: seed }
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The full message sequence, in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Routing predicate: true iff the most recent message carries one or more
/// tool invocation requests. Pure; inspects only the last message.
pub fn has_pending_tool_calls(state: &DispatchState) -> bool {
    state.last().map(Message::has_tool_calls).unwrap_or(false)
}

/// The decide → (conditional) execute workflow.
pub struct DispatchGraph {
    model: Arc<dyn ChatModel>,
    registry: Arc<ToolRegistry>,
}

impl DispatchGraph {
    pub fn new(model: Arc<dyn ChatModel>, registry: Arc<ToolRegistry>) -> Self {
        Self { model, registry }
    }

    /// Tool declarations for the decision call, in registration order.
    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.parameters_schema(),
            })
            .collect()
    }

    /// Decision step: one completion call with the declared tools. The
    /// returned assistant message is appended; no tool is executed here.
    /// Provider errors propagate uncaught at this layer.
    async fn decide(&self, state: &mut DispatchState) -> Result<(), PipelineError> {
        tracing::debug!(messages = state.messages().len(), "decision step");
        let response = self
            .model
            .complete(state.messages().to_vec(), self.tool_definitions())
            .await?;
        state.push(response.into_message());
        Ok(())
    }

    /// Tool execution step: run every requested call in listed order,
    /// appending one tool-result message per call. An unregistered name
    /// fails fast; a tool's own error becomes explanatory result text so
    /// one failing tool never aborts the dispatch.
    async fn execute_tools(&self, state: &mut DispatchState) -> Result<(), PipelineError> {
        let calls = state.last().map(Message::tool_calls).unwrap_or_default();

        for call in calls {
            let tool = self
                .registry
                .resolve(&call.name)
                .map_err(|_| PipelineError::UnknownTool(call.name.clone()))?;

            tracing::debug!(tool = %call.name, call_id = %call.id, "executing tool");
            let content = match tool.invoke(call.arguments).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(tool = %call.name, error = %e, "tool execution failed");
                    format!("Tool '{}' failed: {}", call.name, e)
                }
            };

            state.push(Message::tool_result(call.name, call.id, content));
        }

        Ok(())
    }

    /// Run the graph to completion: decide, then execute if the decision
    /// requested tools, then terminate. The topology is acyclic, so every
    /// run makes at most one decision call and one batch execution.
    pub async fn run(&self, mut state: DispatchState) -> Result<DispatchState, PipelineError> {
        self.decide(&mut state).await?;
        if has_pending_tool_calls(&state) {
            self.execute_tools(&mut state).await?;
        }
        Ok(state)
    }
}
