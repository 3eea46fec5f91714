//! Lexsight
//!
//! A small legal-document assistant: extract text from a PDF, route a
//! natural-language request to exactly one of two tools (a law summarizer
//! or a media-tone analyzer) with a single-step LLM decision, and render
//! the tool output as a Markdown report.
//!
//! The crate is a library invoked by a presentation shell (the bundled CLI
//! binary is one such shell); it opens no ports of its own.
//!
//! ## Module Organization
//!
//! - `config` - settings loaded from the environment
//! - `reader` - PDF text extraction
//! - `pipeline` - the dispatch graph and the request orchestrator

pub mod config;
pub mod pipeline;
pub mod reader;

use std::sync::Arc;

use lexsight_core::ToolRegistry;
use lexsight_llm::{ChatModel, OpenAiProvider, ProviderConfig};
use lexsight_tools::{NewsSearch, SerpApiNews, SummarizeTool, ToneTool};

pub use config::{ConfigError, Settings};
pub use pipeline::{Orchestrator, PipelineError, NO_RESPONSE_SENTINEL};
pub use reader::{read_pdf_bytes, read_pdf_file, ReaderError};

/// Wire up the production capabilities and tool registry from settings.
///
/// One completion client is built and shared by the decision step and both
/// tools; all handles are injected through constructors, so tests can
/// assemble the same pipeline from stubs instead.
pub fn build_orchestrator(settings: &Settings) -> Orchestrator {
    let model: Arc<dyn ChatModel> = Arc::new(OpenAiProvider::new(ProviderConfig {
        api_key: Some(settings.openai_api_key.clone()),
        model: settings.model.clone(),
        base_url: settings.base_url.clone(),
        ..Default::default()
    }));
    let search: Arc<dyn NewsSearch> = Arc::new(SerpApiNews::new(settings.serpapi_key.clone()));

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SummarizeTool::new(model.clone())));
    registry.register(Arc::new(
        ToneTool::new(model.clone(), search).with_locale(settings.locale.clone()),
    ));

    Orchestrator::new(model, Arc::new(registry), settings.max_chars)
}
