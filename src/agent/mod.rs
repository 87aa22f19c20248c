//! Agent module - the brand analysis agent.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Build context with the analyst system prompt and the task
//! 2. Call the LLM with the available tools and the report output schema
//! 3. If the LLM requests a tool call, execute it and feed the result back
//! 4. Repeat until the LLM produces the final structured report or the
//!    iteration limit is reached

mod agent_loop;
mod prompt;
mod report;

pub use agent_loop::Agent;
pub use prompt::{build_system_prompt, build_task_description};
pub use report::{BrandAnalysis, Influencer};
