//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::agent::Influencer;

/// Request to analyze a brand or person.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandQuery {
    /// Brand or person name; free text, must be non-empty
    pub brand_name: String,
}

/// Response body for a completed brand analysis.
#[derive(Debug, Clone, Serialize)]
pub struct BrandAnalysisResponse {
    /// Brand name echoed from the request
    pub brand_name: String,

    /// Article records as produced by the agent, passed through unchanged
    pub top_articles: Vec<serde_json::Value>,

    /// Influencers ranked by the agent
    pub influencers: Vec<Influencer>,
}

/// Error body; `detail` carries the human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
