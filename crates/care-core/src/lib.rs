//! Core types and provider traits for the care companion.
//!
//! This crate defines the shared vocabulary of the workspace: conversation
//! turns, voice profiles, reminders, analysis results, the [`ProviderError`]
//! taxonomy, and the async traits ([`Brain`], [`VoiceSynthesizer`],
//! [`VoiceCloner`], [`Transcriber`]) that adapter crates implement.
//!
//! It deliberately has no HTTP or vendor dependencies. Everything here is
//! plain data plus trait seams, so orchestration code can be tested against
//! in-memory implementations.

pub mod analysis;
pub mod error;
pub mod profile;
pub mod reminder;
pub mod traits;
pub mod turn;

pub use analysis::{AnalysisResult, Sentiment};
pub use error::ProviderError;
pub use profile::{VoiceProfile, VoiceRole};
pub use reminder::Reminder;
pub use traits::{Brain, Transcriber, VoiceCloner, VoiceSynthesizer};
pub use turn::{AudioClip, ChatTurn, TurnRole};

// Re-export async_trait so implementors don't need a direct dependency.
pub use async_trait::async_trait;
