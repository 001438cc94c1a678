//! Provider trait seams.
//!
//! Each external capability the companion depends on sits behind one async
//! trait so the orchestration layer never names a vendor. Adapter crates
//! implement these against real APIs; mock implementations stand in when no
//! credentials are configured.

use async_trait::async_trait;

use crate::analysis::AnalysisResult;
use crate::error::ProviderError;
use crate::turn::AudioClip;

/// A language model that can converse as the family persona and analyze
/// transcripts.
///
/// # Example
///
/// ```
/// use care_core::{async_trait, AnalysisResult, Brain, ProviderError};
///
/// struct CannedBrain;
///
/// #[async_trait]
/// impl Brain for CannedBrain {
///     async fn reply(&self, _utterance: &str) -> Result<String, ProviderError> {
///         Ok("네, 잘 지내고 있어요.".to_string())
///     }
///
///     async fn analyze(&self, _transcript: &str) -> Result<AnalysisResult, ProviderError> {
///         Ok(AnalysisResult::mock())
///     }
///
///     fn name(&self) -> &str {
///         "canned"
///     }
/// }
/// ```
#[async_trait]
pub trait Brain: Send + Sync {
    /// Produce a persona reply to a single utterance from the parent.
    async fn reply(&self, utterance: &str) -> Result<String, ProviderError>;

    /// Produce a structured analysis of a conversation transcript.
    async fn analyze(&self, transcript: &str) -> Result<AnalysisResult, ProviderError>;

    /// Short identifier for logging.
    fn name(&self) -> &str;
}

/// Text-to-speech in a previously cloned voice.
#[async_trait]
pub trait VoiceSynthesizer: Send + Sync {
    /// Render `text` as speech using the given provider voice model.
    async fn synthesize(&self, text: &str, voice_model_id: &str)
        -> Result<AudioClip, ProviderError>;
}

/// One-shot voice cloning from a recorded sample.
#[async_trait]
pub trait VoiceCloner: Send + Sync {
    /// Create a voice model from `sample` and return its provider id.
    async fn clone_voice(
        &self,
        sample: &[u8],
        name: &str,
        description: &str,
    ) -> Result<String, ProviderError>;
}

/// Speech-to-text for recorded utterances.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe recorded audio to text.
    async fn transcribe(&self, audio: &[u8]) -> Result<String, ProviderError>;
}
