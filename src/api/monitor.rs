//! Brand monitoring endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::agent::build_task_description;

use super::types::{BrandAnalysisResponse, BrandQuery, ErrorBody};
use super::AppState;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("brand_name must not be empty")]
    EmptyBrandName,

    #[error("Failed to fetch brand data.")]
    AnalysisUnavailable,

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EmptyBrandName => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AnalysisUnavailable | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// POST /monitor-brand/ - Find latest articles and relevant influencers for a
/// brand or person.
pub async fn monitor_brand(
    State(state): State<Arc<AppState>>,
    Json(input): Json<BrandQuery>,
) -> Result<Json<BrandAnalysisResponse>, ApiError> {
    if input.brand_name.trim().is_empty() {
        return Err(ApiError::EmptyBrandName);
    }

    tracing::info!(brand = %input.brand_name, "Starting brand analysis");

    let task = build_task_description(&input.brand_name);
    let report = state.agent.analyze_brand(&task).await.map_err(|e| {
        tracing::error!(brand = %input.brand_name, "Brand analysis failed: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    let Some(report) = report else {
        tracing::error!(brand = %input.brand_name, "Agent produced no report");
        return Err(ApiError::AnalysisUnavailable);
    };

    Ok(Json(BrandAnalysisResponse {
        brand_name: input.brand_name,
        top_articles: report.top_articles,
        influencers: report.influencers,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::config::Config;
    use crate::llm::{
        AssistantMessage, ChatMessage, LlmClient, LlmError, ResponseFormat, ToolDefinition,
    };
    use crate::tools::ToolRegistry;
    use async_trait::async_trait;

    /// LLM stub that always returns the same final message.
    struct FixedLlm {
        content: Option<String>,
    }

    #[async_trait]
    impl LlmClient for FixedLlm {
        async fn chat_completion(
            &self,
            _model: &str,
            _messages: &[ChatMessage],
            _tools: Option<&[ToolDefinition]>,
            _response_format: Option<&ResponseFormat>,
        ) -> Result<AssistantMessage, LlmError> {
            Ok(AssistantMessage {
                content: self.content.clone(),
                tool_calls: None,
            })
        }
    }

    fn state_with_llm(content: Option<&str>) -> Arc<AppState> {
        let config = Config::new("https://llm.example".to_string(), "key".to_string());
        let agent = Agent::with_client(
            config.clone(),
            Arc::new(FixedLlm {
                content: content.map(String::from),
            }),
            ToolRegistry::new(),
        );
        Arc::new(AppState { config, agent })
    }

    async fn response_detail(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        body.detail
    }

    #[tokio::test]
    async fn test_monitor_brand_echoes_name() {
        let state = state_with_llm(Some(
            r#"{
                "top_articles": [
                    {"title": "a", "url": "https://news.example/a", "snippet": "s1"},
                    {"title": "b", "url": "https://news.example/b", "snippet": "s2"},
                    {"title": "c", "url": "https://news.example/c", "snippet": "s3"}
                ],
                "influencers": [
                    {"name": "Jane", "platform": "X", "profile_link": "https://x.example/jane", "engagement_score": 91.0},
                    {"name": "Ada", "platform": "YouTube", "profile_link": "https://yt.example/ada", "engagement_score": 77.3}
                ]
            }"#,
        ));

        let Json(response) = monitor_brand(
            State(state),
            Json(BrandQuery {
                brand_name: "Acme Corp".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.brand_name, "Acme Corp");
        assert_eq!(response.top_articles.len(), 3);
        assert_eq!(response.top_articles[0]["title"], "a");
        assert_eq!(response.influencers.len(), 2);
        assert_eq!(response.influencers[1].engagement_score, 77.3);
    }

    #[tokio::test]
    async fn test_monitor_brand_empty_name_rejected() {
        let state = state_with_llm(None);

        let err = monitor_brand(
            State(state),
            Json(BrandQuery {
                brand_name: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_monitor_brand_no_report_is_500_with_fixed_detail() {
        // Empty assistant content -> the agent completes with no report.
        let state = state_with_llm(None);

        let err = monitor_brand(
            State(state),
            Json(BrandQuery {
                brand_name: "Acme Corp".to_string(),
            }),
        )
        .await
        .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response_detail(response).await, "Failed to fetch brand data.");
    }

    #[tokio::test]
    async fn test_monitor_brand_unparseable_report_is_500() {
        let state = state_with_llm(Some("plain prose, not the report"));

        let err = monitor_brand(
            State(state),
            Json(BrandQuery {
                brand_name: "Acme Corp".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
