//! The structured report the agent must produce.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::llm::ResponseFormat;

/// One ranked influencer, synthesized by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Influencer {
    pub name: String,
    pub platform: String,
    pub profile_link: String,
    pub engagement_score: f64,
}

/// The output contract the agent fills in.
///
/// `top_articles` stays loosely typed: the agent's article records are passed
/// through to the API response unchanged, without re-validation. The same
/// applies to `engagement_score` values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandAnalysis {
    pub top_articles: Vec<serde_json::Value>,
    pub influencers: Vec<Influencer>,
}

impl BrandAnalysis {
    /// The `response_format` constraint describing this report.
    pub fn response_format() -> ResponseFormat {
        ResponseFormat::json_schema(
            "brand_analysis",
            json!({
                "type": "object",
                "properties": {
                    "top_articles": {
                        "type": "array",
                        "description": "Most relevant recent articles about the brand",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": {"type": "string"},
                                "url": {"type": "string"},
                                "snippet": {"type": "string"}
                            },
                            "required": ["title", "url", "snippet"]
                        }
                    },
                    "influencers": {
                        "type": "array",
                        "description": "Influencers talking about the brand, ranked by engagement",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string"},
                                "platform": {"type": "string"},
                                "profile_link": {"type": "string"},
                                "engagement_score": {"type": "number"}
                            },
                            "required": ["name", "platform", "profile_link", "engagement_score"]
                        }
                    }
                },
                "required": ["top_articles", "influencers"]
            }),
        )
    }
}
