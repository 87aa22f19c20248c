//! Azure OpenAI chat-completions client.
//!
//! Azure addresses deployments by name in the URL path and versions the API
//! with an `api-version` query parameter; authentication uses the `api-key`
//! header rather than a bearer token.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    AssistantMessage, ChatMessage, LlmClient, LlmError, ResponseFormat, ToolDefinition,
};

/// Chat-completions client for an Azure OpenAI resource.
pub struct AzureOpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    api_version: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

impl AzureOpenAiClient {
    pub fn new(endpoint: String, api_key: String, api_version: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
            api_version,
        }
    }

    /// Completions URL for a deployment, e.g.
    /// `{endpoint}/openai/deployments/gpt-4o/chat/completions?api-version=...`.
    fn completions_url(&self, model: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            model,
            self.api_version
        )
    }
}

#[async_trait]
impl LlmClient for AzureOpenAiClient {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[ToolDefinition]>,
        response_format: Option<&ResponseFormat>,
    ) -> Result<AssistantMessage, LlmError> {
        let mut body: Value = json!({ "messages": messages });

        if let Some(tools) = tools {
            if !tools.is_empty() {
                body["tools"] = serde_json::to_value(tools)
                    .map_err(|e| LlmError::Malformed(format!("tool serialization: {}", e)))?;
                body["tool_choice"] = json!("auto");
            }
        }

        if let Some(format) = response_format {
            body["response_format"] = serde_json::to_value(format)
                .map_err(|e| LlmError::Malformed(format!("response_format serialization: {}", e)))?;
        }

        let response = self
            .http
            .post(self.completions_url(model))
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| LlmError::Malformed("response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    fn user_message(content: &str) -> ChatMessage {
        ChatMessage {
            role: Role::User,
            content: Some(content.to_string()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    #[test]
    fn test_completions_url() {
        let client = AzureOpenAiClient::new(
            "https://res.openai.azure.com/".to_string(),
            "key".to_string(),
            "2024-08-01-preview".to_string(),
        );
        assert_eq!(
            client.completions_url("gpt-4o"),
            "https://res.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-08-01-preview"
        );
    }

    #[tokio::test]
    async fn test_chat_completion_parses_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/openai/deployments/gpt-4o/chat/completions?api-version=v1",
            )
            .match_header("api-key", "secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"done"}}]}"#,
            )
            .create_async()
            .await;

        let client =
            AzureOpenAiClient::new(server.url(), "secret".to_string(), "v1".to_string());
        let message = client
            .chat_completion("gpt-4o", &[user_message("hi")], None, None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(message.content.as_deref(), Some("done"));
        assert!(message.tool_calls.is_none());
    }

    #[tokio::test]
    async fn test_chat_completion_parses_tool_calls() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/openai/deployments/gpt-4o/chat/completions?api-version=v1",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{
                    "role":"assistant",
                    "content":null,
                    "tool_calls":[{"id":"call_1","type":"function",
                        "function":{"name":"search","arguments":"{\"query\":\"acme\"}"}}]
                }}]}"#,
            )
            .create_async()
            .await;

        let client = AzureOpenAiClient::new(server.url(), "k".to_string(), "v1".to_string());
        let message = client
            .chat_completion("gpt-4o", &[user_message("hi")], None, None)
            .await
            .unwrap();

        let calls = message.tool_calls.unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].function.name, "search");
    }

    #[tokio::test]
    async fn test_chat_completion_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/openai/deployments/gpt-4o/chat/completions?api-version=v1",
            )
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let client = AzureOpenAiClient::new(server.url(), "k".to_string(), "v1".to_string());
        let err = client
            .chat_completion("gpt-4o", &[user_message("hi")], None, None)
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_chat_completion_empty_choices() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/openai/deployments/gpt-4o/chat/completions?api-version=v1",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = AzureOpenAiClient::new(server.url(), "k".to_string(), "v1".to_string());
        let err = client
            .chat_completion("gpt-4o", &[user_message("hi")], None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::Malformed(_)));
    }
}
