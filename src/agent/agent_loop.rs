//! Core agent loop implementation.

use std::sync::Arc;

use crate::config::Config;
use crate::llm::{AzureOpenAiClient, ChatMessage, LlmClient, Role};
use crate::tools::{SearchClient, SearchTool, ToolRegistry};

use super::prompt::build_system_prompt;
use super::report::BrandAnalysis;

/// The brand analysis agent.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
}

impl Agent {
    /// Create a new agent with the given configuration.
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(AzureOpenAiClient::new(
            config.llm_endpoint.clone(),
            config.llm_api_key.clone(),
            config.llm_api_version.clone(),
        ));

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(SearchTool::new(SearchClient::new(
            config.serper_api_key.clone(),
        ))));

        Self { config, llm, tools }
    }

    /// Create an agent with a custom LLM client and tool set (useful for testing).
    pub fn with_client(config: Config, llm: Arc<dyn LlmClient>, tools: ToolRegistry) -> Self {
        Self { config, llm, tools }
    }

    /// Run the analysis task and return the structured report.
    ///
    /// Returns `Ok(None)` when the agent completes without producing a usable
    /// report (empty final message, unparseable output, or iteration limit).
    /// Tool failures and LLM transport failures propagate as errors.
    pub async fn analyze_brand(&self, task: &str) -> anyhow::Result<Option<BrandAnalysis>> {
        let system_prompt = build_system_prompt(&self.tools);
        let mut messages = vec![
            ChatMessage {
                role: Role::System,
                content: Some(system_prompt),
                tool_calls: None,
                tool_call_id: None,
            },
            ChatMessage {
                role: Role::User,
                content: Some(task.to_string()),
                tool_calls: None,
                tool_call_id: None,
            },
        ];

        let tool_schemas = self.tools.get_tool_schemas();
        let response_format = BrandAnalysis::response_format();

        for iteration in 0..self.config.max_iterations {
            tracing::debug!("Agent iteration {}", iteration + 1);

            let response = self
                .llm
                .chat_completion(
                    &self.config.default_model,
                    &messages,
                    Some(&tool_schemas),
                    Some(&response_format),
                )
                .await?;

            if let Some(tool_calls) = &response.tool_calls {
                if !tool_calls.is_empty() {
                    messages.push(ChatMessage {
                        role: Role::Assistant,
                        content: response.content.clone(),
                        tool_calls: Some(tool_calls.clone()),
                        tool_call_id: None,
                    });

                    // Tool failures abort the run: no error is retried or
                    // recovered internally, it surfaces in the HTTP response.
                    for tool_call in tool_calls {
                        tracing::debug!(
                            tool = %tool_call.function.name,
                            args = %tool_call.function.arguments,
                            "Agent requested tool call"
                        );

                        let args: serde_json::Value =
                            serde_json::from_str(&tool_call.function.arguments)
                                .unwrap_or(serde_json::Value::Null);

                        let result = self.tools.execute(&tool_call.function.name, args).await?;

                        messages.push(ChatMessage {
                            role: Role::Tool,
                            content: Some(result),
                            tool_calls: None,
                            tool_call_id: Some(tool_call.id.clone()),
                        });
                    }

                    continue;
                }
            }

            // No tool calls - this is the final response.
            let Some(content) = response.content else {
                tracing::warn!("Agent returned an empty final message");
                return Ok(None);
            };

            return match serde_json::from_str::<BrandAnalysis>(&content) {
                Ok(report) => Ok(Some(report)),
                Err(e) => {
                    tracing::warn!("Agent output did not match the report shape: {}", e);
                    Ok(None)
                }
            };
        }

        tracing::warn!(
            "Max iterations ({}) reached without a report",
            self.config.max_iterations
        );
        Ok(None)
    }
}
