//! Configuration management for tinyagent.
//!
//! Configuration can be set via environment variables:
//! - `OPENROUTER_API_KEY` - Required. Your OpenRouter API key.
//! - `OPENROUTER_BASE_URL` - Optional. API base URL. Defaults to `https://openrouter.ai/api/v1`.
//! - `DEFAULT_MODEL` - Optional. The default LLM model to use. Defaults to `anthropic/claude-haiku-4.5`.
//! - `WORKSPACE_PATH` - Optional. The workspace directory for tool execution. Defaults to current directory.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `50`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter API key
    pub api_key: String,

    /// Base URL of the chat-completion API
    pub base_url: String,

    /// Default LLM model identifier (OpenRouter format)
    pub default_model: String,

    /// Workspace directory for file operations and commands
    pub workspace_path: PathBuf,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENROUTER_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let base_url = std::env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string());

        let default_model = std::env::var("DEFAULT_MODEL")
            .unwrap_or_else(|_| "anthropic/claude-haiku-4.5".to_string());

        let workspace_path = std::env::var("WORKSPACE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "50".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            api_key,
            base_url,
            default_model,
            workspace_path,
            max_iterations,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, default_model: String, workspace_path: PathBuf) -> Self {
        Self {
            api_key,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            default_model,
            workspace_path,
            max_iterations: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so everything touching them
    // lives in a single test to avoid races with parallel execution.
    #[test]
    fn from_env_round_trip() {
        std::env::remove_var("OPENROUTER_API_KEY");
        std::env::remove_var("OPENROUTER_BASE_URL");
        std::env::remove_var("DEFAULT_MODEL");
        std::env::remove_var("MAX_ITERATIONS");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "OPENROUTER_API_KEY"));

        std::env::set_var("OPENROUTER_API_KEY", "sk-test");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.default_model, "anthropic/claude-haiku-4.5");
        assert_eq!(config.max_iterations, 50);

        std::env::set_var("OPENROUTER_BASE_URL", "http://localhost:8080/v1");
        std::env::set_var("DEFAULT_MODEL", "openai/gpt-5-mini");
        std::env::set_var("MAX_ITERATIONS", "7");
        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.default_model, "openai/gpt-5-mini");
        assert_eq!(config.max_iterations, 7);

        std::env::set_var("MAX_ITERATIONS", "not-a-number");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v, _) if v == "MAX_ITERATIONS"));

        std::env::remove_var("OPENROUTER_API_KEY");
        std::env::remove_var("OPENROUTER_BASE_URL");
        std::env::remove_var("DEFAULT_MODEL");
        std::env::remove_var("MAX_ITERATIONS");
    }

    #[test]
    fn new_uses_defaults() {
        let config = Config::new(
            "key".to_string(),
            "anthropic/claude-haiku-4.5".to_string(),
            PathBuf::from("/tmp"),
        );
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
    }
}
