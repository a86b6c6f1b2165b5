//! Core agent loop implementation.

use std::sync::Arc;

use crate::config::Config;
use crate::llm::{ChatMessage, LlmClient, OpenRouterClient, ToolCall, Usage};
use crate::tools::ToolRegistry;

/// The agent: a sequential conversation loop over one LLM client and the
/// local tool set.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
}

/// Result of a completed task.
#[derive(Debug)]
pub struct TaskOutcome {
    /// The model's final textual answer.
    pub response: String,

    /// Completion calls made before the model answered.
    pub iterations: usize,

    /// Token usage summed over all calls.
    pub usage: Usage,
}

impl Agent {
    /// Create a new agent with the given configuration.
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(OpenRouterClient::with_base_url(
            config.api_key.clone(),
            config.base_url.clone(),
        ));
        Self {
            config,
            llm,
            tools: ToolRegistry::new(),
        }
    }

    /// Create an agent over a caller-supplied client.
    pub fn with_client(config: Config, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            config,
            llm,
            tools: ToolRegistry::new(),
        }
    }

    /// Run a task to completion and return the final response.
    ///
    /// The conversation starts with the prompt as its only message. Each
    /// iteration sends the running history; tool calls in the reply are
    /// executed locally and appended as tool results. A reply without tool
    /// calls is the final answer.
    pub async fn run_task(&self, prompt: &str, model: &str) -> anyhow::Result<TaskOutcome> {
        let mut messages = vec![ChatMessage::user(prompt)];
        let tool_schemas = self.tools.get_tool_schemas();
        let mut usage = Usage::default();

        for iteration in 0..self.config.max_iterations {
            tracing::debug!("Agent iteration {}", iteration + 1);

            let response = self
                .llm
                .chat_completion(model, &messages, Some(&tool_schemas))
                .await?;
            usage += response.usage;

            if let Some(tool_calls) = &response.tool_calls {
                if !tool_calls.is_empty() {
                    messages.push(ChatMessage::assistant(
                        response.content.clone(),
                        Some(tool_calls.clone()),
                    ));

                    for tool_call in tool_calls {
                        tracing::info!(
                            "Calling tool: {} with args: {}",
                            tool_call.function.name,
                            truncate_for_log(&tool_call.function.arguments, 500)
                        );

                        // Tool failures are fed back as result text; the
                        // model decides what to do with them.
                        let result_str = match self.execute_tool_call(tool_call).await {
                            Ok(output) => output,
                            Err(e) => format!("Error: {}", e),
                        };

                        tracing::debug!("Tool result: {}", truncate_for_log(&result_str, 1000));

                        messages.push(ChatMessage::tool_result(tool_call.id.clone(), result_str));
                    }

                    continue;
                }
            }

            // No tool calls - this is the final response
            if let Some(content) = response.content {
                return Ok(TaskOutcome {
                    response: content,
                    iterations: iteration + 1,
                    usage,
                });
            }

            return Err(anyhow::anyhow!("LLM returned empty response"));
        }

        Err(anyhow::anyhow!(
            "Max iterations ({}) reached without completion",
            self.config.max_iterations
        ))
    }

    /// Execute a single tool call.
    async fn execute_tool_call(&self, tool_call: &ToolCall) -> anyhow::Result<String> {
        let args: serde_json::Value = serde_json::from_str(&tool_call.function.arguments)
            .unwrap_or_else(|e| {
                tracing::warn!(
                    "Malformed arguments for {}: {}",
                    tool_call.function.name,
                    e
                );
                serde_json::Value::Null
            });

        self.tools
            .execute(&tool_call.function.name, args, &self.config.workspace_path)
            .await
    }
}

/// Truncate a string for logging purposes.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... [truncated]", &s[..cut])
}
