//! Local tools the model can invoke.
//!
//! Each tool implements [`Tool`]; the [`ToolRegistry`] owns the fixed set,
//! exports their schemas for the request's `tools` array, and dispatches
//! calls by name.

mod fs;
mod terminal;

pub use fs::{ReadFile, WriteFile};
pub use terminal::RunCommand;

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm::ToolSchema;

/// A local tool the model can invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as exposed to the model.
    fn name(&self) -> &str;

    /// One-line description for the tool schema.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's arguments.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: Value, workspace: &Path) -> anyhow::Result<String>;
}

/// The fixed set of local tools.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Registry with the built-in tool set: `read_file`, `write_file`,
    /// `run_command`.
    pub fn new() -> Self {
        Self {
            tools: vec![
                Box::new(ReadFile),
                Box::new(WriteFile),
                Box::new(RunCommand),
            ],
        }
    }

    /// Tool schemas for the completion request.
    pub fn get_tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .iter()
            .map(|t| ToolSchema::function(t.name(), t.description(), t.parameters_schema()))
            .collect()
    }

    /// Execute a tool by name.
    ///
    /// An unknown name is an error like any other tool failure; the loop
    /// reports it back to the model as result text.
    pub async fn execute(&self, name: &str, args: Value, workspace: &Path) -> anyhow::Result<String> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", name))?;

        tool.execute(args, workspace).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
