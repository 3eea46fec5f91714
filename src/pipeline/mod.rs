//! Dispatch pipeline: the decision graph and the request orchestrator.

pub mod graph;
pub mod orchestrator;

pub use graph::{has_pending_tool_calls, DispatchGraph, DispatchState, PipelineError};
pub use orchestrator::{truncate_chars, Orchestrator, DEFAULT_MAX_CHARS, NO_RESPONSE_SENTINEL};
