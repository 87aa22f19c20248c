//! Configuration management for brandwatch.
//!
//! Configuration can be set via environment variables:
//! - `AZURE_OPENAI_ENDPOINT` - Required. Base URL of the Azure OpenAI resource.
//! - `AZURE_OPENAI_API_KEY` - Required. API key for the LLM provider.
//! - `AZURE_OPENAI_API_VERSION` - Optional. Defaults to `2024-08-01-preview`.
//! - `DEFAULT_MODEL` - Optional. Deployment/model identifier. Defaults to `gpt-4o`.
//! - `SERPER_API_KEY` - Optional. Serper search API key. Its absence is an
//!   error at first search, not at startup.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `8`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Service configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the LLM provider (Azure OpenAI resource endpoint)
    pub llm_endpoint: String,

    /// API key for the LLM provider
    pub llm_api_key: String,

    /// API version query parameter for the LLM provider
    pub llm_api_version: String,

    /// Default model/deployment identifier
    pub default_model: String,

    /// Serper search API key; checked at first search, not at startup
    pub serper_api_key: Option<String>,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `AZURE_OPENAI_ENDPOINT` or
    /// `AZURE_OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let llm_endpoint = std::env::var("AZURE_OPENAI_ENDPOINT")
            .map_err(|_| ConfigError::MissingEnvVar("AZURE_OPENAI_ENDPOINT".to_string()))?;

        let llm_api_key = std::env::var("AZURE_OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("AZURE_OPENAI_API_KEY".to_string()))?;

        let llm_api_version = std::env::var("AZURE_OPENAI_API_VERSION")
            .unwrap_or_else(|_| "2024-08-01-preview".to_string());

        let default_model =
            std::env::var("DEFAULT_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

        let serper_api_key = std::env::var("SERPER_API_KEY").ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            llm_endpoint,
            llm_api_key,
            llm_api_version,
            default_model,
            serper_api_key,
            host,
            port,
            max_iterations,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(llm_endpoint: String, llm_api_key: String) -> Self {
        Self {
            llm_endpoint,
            llm_api_key,
            llm_api_version: "2024-08-01-preview".to_string(),
            default_model: "gpt-4o".to_string(),
            serper_api_key: None,
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_iterations: 8,
        }
    }
}
