//! Anthropic Claude-based brain implementation.
//!
//! This crate provides the brain implementation that powers persona replies
//! and transcript analysis via Anthropic's Messages API.
//!
//! # Features
//!
//! - Model fallback chain across the claude-3 family, tried in priority order
//! - Missing models, exhausted quota, and empty or unparseable completions
//!   advance the chain; other failures abort immediately
//! - Canned Korean responses when no API credential is configured, so the
//!   companion works offline and in development
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use claude_brain::{Brain, ClaudeBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = ClaudeBrain::from_env()?;
//!
//!     let reply = brain.reply("엄마, 오늘 날씨가 참 좋네요.").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod chain;
mod config;
mod json;

pub use brain::{ClaudeBrain, MOCK_REPLY};
pub use config::{ClaudeBrainConfig, ANALYSIS_PROMPT, DEFAULT_MODELS, PERSONA_PROMPT};

// Re-export care-core types for convenience
pub use care_core::{async_trait, AnalysisResult, Brain, ProviderError, Sentiment};
