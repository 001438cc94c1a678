//! Audio playback seam.

use async_trait::async_trait;
use care_core::AudioClip;

use crate::error::CompanionError;

/// Trait for playing synthesized speech.
///
/// Abstracted to support different outputs (a device speaker, a UI bridge,
/// tests). The companion holds one playback slot: callers [`stop`] the
/// current clip before starting a new one, and [`play`] resolves only when
/// playback has finished, so the caller's processing state stays blocked for
/// the duration.
///
/// [`play`]: AudioSink::play
/// [`stop`]: AudioSink::stop
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Play a clip to completion.
    async fn play(&self, clip: &AudioClip) -> Result<(), CompanionError>;

    /// Stop and release whatever is currently playing, if anything.
    async fn stop(&self);
}

/// A no-op audio sink for testing that discards all clips.
#[derive(Debug, Clone, Default)]
pub struct NoOpSink;

#[async_trait]
impl AudioSink for NoOpSink {
    async fn play(&self, _clip: &AudioClip) -> Result<(), CompanionError> {
        Ok(())
    }

    async fn stop(&self) {}
}

/// A logging audio sink for debugging that logs clip sizes instead of
/// playing them.
#[derive(Debug, Clone, Default)]
pub struct LoggingSink;

#[async_trait]
impl AudioSink for LoggingSink {
    async fn play(&self, clip: &AudioClip) -> Result<(), CompanionError> {
        tracing::info!("Playing {} byte clip ({})", clip.len(), clip.mime());
        Ok(())
    }

    async fn stop(&self) {
        tracing::info!("Stopping playback");
    }
}
