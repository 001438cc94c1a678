//! Error types for companion operations.

use care_core::ProviderError;
use care_store::StoreError;
use thiserror::Error;

/// Errors that can occur in the companion pipeline.
#[derive(Debug, Error)]
pub enum CompanionError {
    /// A capability provider call failed.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The persistence layer failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The voice sample is too small to clone from. The message is shown to
    /// the user as-is.
    #[error("목소리 등록을 위해 최소 30초 이상 녹음해주세요.")]
    RecordingTooShort {
        /// Size of the rejected sample.
        bytes: usize,
    },

    /// Audio playback failed.
    #[error("playback failed: {0}")]
    Playback(String),
}
