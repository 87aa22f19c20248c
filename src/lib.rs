//! # brandwatch
//!
//! A brand and influencer monitoring service.
//!
//! Given a brand or person name, the service searches the web for recent
//! articles and influencer mentions, has an LLM-backed analyst agent
//! synthesize the raw results into a structured report (top articles plus
//! ranked influencers with engagement scores), and serves both a JSON API
//! and a single-page HTML UI.
//!
//! ## Architecture
//!
//! The analyst follows the "tools in a loop" pattern:
//! 1. Receive a brand name via `POST /monitor-brand/`
//! 2. Build context with the analyst persona and the search tool
//! 3. Call the LLM; execute any requested search tool calls
//! 4. Feed results back until the LLM emits the structured report
//!
//! ## Example
//!
//! ```rust,ignore
//! use brandwatch::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(config);
//! let report = agent.analyze_brand(
//!     "Find latest articles and identify top influencers talking about Acme Corp.",
//! ).await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;
