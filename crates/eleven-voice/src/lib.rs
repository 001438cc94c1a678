//! ElevenLabs voice cloning and speech synthesis for the care companion.
//!
//! This crate provides [`ElevenVoice`], which implements the
//! [`VoiceSynthesizer`](care_core::VoiceSynthesizer) and
//! [`VoiceCloner`](care_core::VoiceCloner) traits against the ElevenLabs API.
//!
//! Without an API credential, synthesis degrades to silent clips so the
//! conversation loop keeps working in development; cloning has no useful
//! mock output and is refused up front instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use care_core::{VoiceCloner, VoiceSynthesizer};
//! use eleven_voice::{ElevenVoice, ElevenVoiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let voice = ElevenVoice::from_env()?;
//!
//!     let sample = std::fs::read("voice_sample.webm")?;
//!     let model_id = voice.clone_voice(&sample, "아들", "자녀 목소리").await?;
//!
//!     let clip = voice.synthesize("엄마, 식사는 하셨어요?", &model_id).await?;
//!     std::fs::write("reply.mp3", clip.as_bytes())?;
//!     Ok(())
//! }
//! ```

pub mod api_types;
pub mod config;
pub mod voice;

pub use config::{ElevenVoiceConfig, ElevenVoiceConfigBuilder};
pub use voice::ElevenVoice;
