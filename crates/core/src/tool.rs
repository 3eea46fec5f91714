//! Tool Trait and Registry
//!
//! Defines the unified `Tool` trait interface and the `ToolRegistry` used by
//! the dispatch graph for name-based lookup and execution. The registry is
//! built once at process start and read-only afterwards, so it is shared
//! without locking.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Unified tool interface.
///
/// Each tool provides identity (name, description, parameters schema) and
/// execution logic. The description is the only steering signal the decision
/// model sees; it is advisory, not enforced by code.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name of this tool (e.g. "summarize_law").
    fn name(&self) -> &str;

    /// Human-readable description of what this tool does.
    fn description(&self) -> &str;

    /// JSON schema describing the tool's input parameters.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    ///
    /// Returns the tool's textual result. Errors here are converted to
    /// explanatory text by the execution step, never propagated past it.
    async fn invoke(&self, args: Value) -> CoreResult<String>;
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}

/// Registry of available tools.
///
/// Provides O(1) lookup by name and ordered iteration matching registration
/// order. No two registered tools share a name; `register` replacing an
/// existing entry is a startup-time programming error, not a runtime path.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    /// Insertion order for deterministic iteration
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a tool. If a tool with the same name already exists, it is replaced.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if !self.tools.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.tools.insert(name, tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Resolve a tool by name, failing with `CoreError::UnknownTool` if absent.
    pub fn resolve(&self, name: &str) -> CoreResult<Arc<dyn Tool>> {
        self.tools
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::unknown_tool(name))
    }

    /// Get all registered tool names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Iterate tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Arc<dyn Tool>> + '_ {
        self.order.iter().filter_map(|name| self.tools.get(name).cloned())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple mock tool for testing the registry
    struct MockTool {
        tool_name: String,
        tool_description: String,
    }

    impl MockTool {
        fn new(name: &str, description: &str) -> Self {
            Self {
                tool_name: name.to_string(),
                tool_description: description.to_string(),
            }
        }
    }

    #[async_trait]
    impl Tool for MockTool {
        fn name(&self) -> &str {
            &self.tool_name
        }

        fn description(&self) -> &str {
            &self.tool_description
        }

        fn parameters_schema(&self) -> Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "law_text": { "type": "string" }
                },
                "required": ["law_text"]
            })
        }

        async fn invoke(&self, _args: Value) -> CoreResult<String> {
            Ok(format!("{} executed", self.tool_name))
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("summarize_law", "Summarize a law")));

        assert_eq!(registry.len(), 1);
        let retrieved = registry.get("summarize_law");
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name(), "summarize_law");
    }

    #[test]
    fn test_registry_resolve_known() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("tone_analysis", "Analyze press tone")));

        let tool = registry.resolve("tone_analysis").unwrap();
        assert_eq!(tool.description(), "Analyze press tone");
    }

    #[test]
    fn test_registry_resolve_unknown_fails_fast() {
        let registry = ToolRegistry::new();
        let err = registry.resolve("nonexistent").unwrap_err();
        assert!(matches!(err, CoreError::UnknownTool(name) if name == "nonexistent"));
    }

    #[test]
    fn test_registry_register_replaces_existing() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("summarize_law", "Old description")));
        registry.register(Arc::new(MockTool::new("summarize_law", "New description")));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("summarize_law").unwrap().description(),
            "New description"
        );
    }

    #[test]
    fn test_registry_names_preserves_insertion_order() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("summarize_law", "a")));
        registry.register(Arc::new(MockTool::new("tone_analysis", "b")));

        assert_eq!(registry.names(), vec!["summarize_law", "tone_analysis"]);
    }

    #[test]
    fn test_registry_iter_order_matches_names() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("c", "third")));
        registry.register(Arc::new(MockTool::new("a", "first")));
        registry.register(Arc::new(MockTool::new("b", "second")));

        let iterated: Vec<String> = registry.iter().map(|t| t.name().to_string()).collect();
        assert_eq!(iterated, registry.names());
    }

    #[tokio::test]
    async fn test_tool_invoke() {
        let tool = MockTool::new("summarize_law", "Summarize a law");
        let result = tool.invoke(Value::Null).await.unwrap();
        assert_eq!(result, "summarize_law executed");
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ToolRegistry>();
        assert_send_sync::<Arc<dyn Tool>>();
    }
}
