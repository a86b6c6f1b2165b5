//! Agent module - the core loop.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Build the conversation with the user prompt
//! 2. Call the LLM with the available tools
//! 3. If the LLM requests tool calls, execute them and feed results back
//! 4. Repeat until the LLM produces a final response or the iteration
//!    bound is reached

mod agent_loop;

pub use agent_loop::{Agent, TaskOutcome};
