//! Serper web search: client and agent tool.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use super::Tool;

/// Serper search endpoint.
pub const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";

/// Maximum number of results returned per search.
const MAX_RESULTS: usize = 10;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Serper API key not configured (set SERPER_API_KEY)")]
    MissingApiKey,

    #[error("Serper request failed with status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Serper request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One normalized search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Client for the Serper search API.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl SearchClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, SERPER_ENDPOINT.to_string())
    }

    /// Client against a custom endpoint (used in tests).
    pub fn with_endpoint(api_key: Option<String>, endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Search for latest articles and influencer mentions.
    ///
    /// Returns at most 10 results in the provider's relevance order. Missing
    /// fields in a hit are replaced with fixed placeholders.
    ///
    /// # Errors
    ///
    /// `SearchError::MissingApiKey` if no API key is configured, and
    /// `SearchError::UpstreamStatus` carrying the provider's response body on
    /// a non-success status.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-API-KEY", api_key)
            .json(&json!({ "q": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Serper request failed");
            return Err(SearchError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;
        let organic = data
            .get("organic")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let results = organic
            .iter()
            .take(MAX_RESULTS)
            .map(|hit| SearchResult {
                title: hit
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown Article")
                    .to_string(),
                url: hit
                    .get("link")
                    .and_then(Value::as_str)
                    .unwrap_or("#")
                    .to_string(),
                snippet: hit
                    .get("snippet")
                    .and_then(Value::as_str)
                    .unwrap_or("No Description")
                    .to_string(),
            })
            .collect();

        Ok(results)
    }
}

/// Web search as an agent capability.
pub struct SearchTool {
    client: SearchClient,
}

impl SearchTool {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Search the web for the latest articles and influencer mentions matching a query. Returns up to 10 results with title, url, and snippet."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;

        let results = self.client.search(query).await?;
        Ok(serde_json::to_string(&results)?)
    }
}
