//! # tinyagent
//!
//! A minimal command-line agent: one prompt in, a tool-calling loop against
//! the OpenRouter chat-completions API, one final answer out.
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Build the conversation with the user prompt
//! 2. Call the LLM with the running message history and the fixed tool schemas
//! 3. Execute any requested tool calls locally and feed results back
//! 4. Repeat until the model answers without tool calls
//!
//! ## Example
//!
//! ```rust,ignore
//! use tinyagent::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(config);
//! let outcome = agent
//!     .run_task("Summarize README.md", "anthropic/claude-haiku-4.5")
//!     .await?;
//! println!("{}", outcome.response);
//! ```

pub mod agent;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;
