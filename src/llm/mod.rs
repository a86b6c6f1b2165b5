//! LLM client abstraction and the OpenRouter implementation.
//!
//! The agent loop talks to the [`LlmClient`] trait so tests can substitute
//! a scripted client for the real endpoint.

mod openrouter;
pub mod types;

pub use openrouter::OpenRouterClient;
pub use types::{
    ChatMessage, ChatResponse, FunctionCall, FunctionSchema, Role, ToolCall, ToolSchema, Usage,
};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the chat-completion client.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no choices in response")]
    NoChoices,
}

/// A chat-completion backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the running message history and return the assistant's reply.
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[ToolSchema]>,
    ) -> Result<ChatResponse, LlmError>;
}
