//! Conversation turn and audio payload types.

use std::sync::Arc;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    /// The elderly user.
    User,
    /// The AI speaking as the user's child.
    Assistant,
}

/// A transient, playable audio payload produced by speech synthesis.
///
/// Clips share their bytes cheaply on clone; the buffer is released when the
/// last handle is dropped. An empty clip means synthesis produced nothing
/// (the mock branch) and must not be offered for playback.
#[derive(Debug, Clone)]
pub struct AudioClip {
    data: Arc<Vec<u8>>,
    mime: String,
}

impl AudioClip {
    /// Wrap raw audio bytes with their MIME type.
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data: Arc::new(data),
            mime: mime.into(),
        }
    }

    /// An empty clip, the deterministic output of mock-mode synthesis.
    pub fn empty() -> Self {
        Self::new(Vec::new(), "audio/mpeg")
    }

    /// The audio bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The MIME type reported by the synthesis provider.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the clip carries no audio.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A single turn in the conversation log.
///
/// Audio is present only on assistant turns, and only when synthesis was
/// attempted and produced a non-empty clip.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    /// Who spoke.
    pub role: TurnRole,
    /// The utterance or reply text.
    pub text: String,
    /// Synthesized speech for assistant turns, if any.
    pub audio: Option<AudioClip>,
}

impl ChatTurn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
            audio: None,
        }
    }

    /// Create an assistant turn without audio.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
            audio: None,
        }
    }

    /// Create an assistant turn carrying synthesized speech.
    pub fn assistant_with_audio(text: impl Into<String>, clip: AudioClip) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
            audio: Some(clip),
        }
    }

    /// Whether this turn carries playable audio.
    pub fn has_audio(&self) -> bool {
        self.audio.as_ref().is_some_and(|clip| !clip.is_empty())
    }
}
