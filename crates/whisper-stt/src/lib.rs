//! OpenAI Whisper speech-to-text for the care companion.
//!
//! [`WhisperStt`] implements the [`Transcriber`](care_core::Transcriber)
//! trait against the Whisper transcription endpoint, with a Korean language
//! hint by default. Without an API credential it returns a fixed canned
//! transcript so the voice loop stays usable in development.

pub mod config;
pub mod stt;

pub use config::{WhisperSttConfig, WhisperSttConfigBuilder};
pub use stt::{WhisperStt, MOCK_TRANSCRIPT};
