//! End-to-end pipeline tests against stub capabilities.
//!
//! Assembles the orchestrator exactly as production does, but with a
//! scripted chat model and in-memory tools, and checks the report-level
//! contract: sentinel on no tool, one section per tool result, fail-fast
//! on unknown tools.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use lexsight::pipeline::PipelineError;
use lexsight::{Orchestrator, NO_RESPONSE_SENTINEL};
use lexsight_core::{CoreResult, Tool, ToolRegistry};
use lexsight_llm::{
    ChatModel, ChatResponse, LlmResult, Message, ProviderConfig, StopReason, ToolCall,
    ToolDefinition, UsageStats,
};

/// Stub model returning one scripted decision; records the request it saw.
struct StubModel {
    response: Mutex<Option<ChatResponse>>,
    seen_messages: Mutex<Vec<Message>>,
    seen_tools: Mutex<Vec<ToolDefinition>>,
    config: ProviderConfig,
}

impl StubModel {
    fn deciding(content: Option<&str>, tool_calls: Vec<ToolCall>) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Some(ChatResponse {
                content: content.map(String::from),
                tool_calls,
                stop_reason: StopReason::EndTurn,
                usage: UsageStats::default(),
                model: "stub-model".to_string(),
            })),
            seen_messages: Mutex::new(Vec::new()),
            seen_tools: Mutex::new(Vec::new()),
            config: ProviderConfig::default(),
        })
    }
}

#[async_trait]
impl ChatModel for StubModel {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn complete(
        &self,
        messages: Vec<Message>,
        tools: Vec<ToolDefinition>,
    ) -> LlmResult<ChatResponse> {
        *self.seen_messages.lock().unwrap() = messages;
        *self.seen_tools.lock().unwrap() = tools;
        Ok(self
            .response
            .lock()
            .unwrap()
            .take()
            .expect("decision step called more than once"))
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Tool returning a fixed reply.
struct FixedTool {
    tool_name: &'static str,
    reply: &'static str,
}

#[async_trait]
impl Tool for FixedTool {
    fn name(&self) -> &str {
        self.tool_name
    }

    fn description(&self) -> &str {
        "Returns a fixed reply"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": { "law_text": { "type": "string" } },
            "required": ["law_text"]
        })
    }

    async fn invoke(&self, _args: Value) -> CoreResult<String> {
        Ok(self.reply.to_string())
    }
}

fn registry() -> Arc<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(FixedTool {
        tool_name: "summarize_law",
        reply: "A plain-language summary.",
    }));
    registry.register(Arc::new(FixedTool {
        tool_name: "tone_analysis",
        reply: "The coverage is favorable.",
    }));
    Arc::new(registry)
}

fn call(id: &str, name: &str) -> ToolCall {
    ToolCall {
        id: id.to_string(),
        name: name.to_string(),
        arguments: serde_json::json!({"law_text": "Article 1"}),
    }
}

#[tokio::test]
async fn no_tool_selected_yields_sentinel() {
    let model = StubModel::deciding(Some("I need more context."), vec![]);
    let orchestrator = Orchestrator::new(model.clone(), registry(), 5000);

    let report = orchestrator.run("Article 1: ...", "Summarize").await.unwrap();
    assert_eq!(report, NO_RESPONSE_SENTINEL);
}

#[tokio::test]
async fn single_tool_call_yields_single_section() {
    let model = StubModel::deciding(None, vec![call("c1", "summarize_law")]);
    let orchestrator = Orchestrator::new(model.clone(), registry(), 5000);

    let report = orchestrator.run("Article 1: ...", "Summarize").await.unwrap();
    assert_eq!(
        report,
        "## summarize_law\n\nA plain-language summary.\n\n---\n"
    );
    assert_eq!(report.matches("## ").count(), 1);
}

#[tokio::test]
async fn unknown_tool_fails_with_distinct_error() {
    let model = StubModel::deciding(None, vec![call("c1", "ghost_tool")]);
    let orchestrator = Orchestrator::new(model.clone(), registry(), 5000);

    let err = orchestrator.run("Article 1", "Summarize").await.unwrap_err();
    assert!(matches!(err, PipelineError::UnknownTool(name) if name == "ghost_tool"));
}

#[tokio::test]
async fn adversarial_double_call_executes_both() {
    // Advisory policy only: a decision stub violating the one-tool rule
    // still gets both tools executed, in request order.
    let model = StubModel::deciding(
        None,
        vec![call("c1", "summarize_law"), call("c2", "tone_analysis")],
    );
    let orchestrator = Orchestrator::new(model.clone(), registry(), 5000);

    let report = orchestrator.run("Article 1", "Do both").await.unwrap();
    let first = report.find("## summarize_law").unwrap();
    let second = report.find("## tone_analysis").unwrap();
    assert!(first < second);
    assert_eq!(report.matches("## ").count(), 2);
}

#[tokio::test]
async fn document_text_is_truncated_in_seed_message() {
    let model = StubModel::deciding(Some("ok"), vec![]);
    let orchestrator = Orchestrator::new(model.clone(), registry(), 100);

    let long_text = "x".repeat(500);
    orchestrator.run(&long_text, "Summarize").await.unwrap();

    let seen = model.seen_messages.lock().unwrap();
    let user_text = seen[1].text();
    // The seed carries exactly the first 100 chars of the document
    assert!(user_text.contains(&"x".repeat(100)));
    assert!(!user_text.contains(&"x".repeat(101)));
}

#[tokio::test]
async fn decision_step_sees_registered_tools_in_order() {
    let model = StubModel::deciding(Some("ok"), vec![]);
    let orchestrator = Orchestrator::new(model.clone(), registry(), 5000);

    orchestrator.run("Article 1", "Summarize").await.unwrap();

    let seen = model.seen_tools.lock().unwrap();
    let names: Vec<&str> = seen.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["summarize_law", "tone_analysis"]);
}
