//! Conversation session: the utterance-to-spoken-reply pipeline.

use std::sync::Arc;

use care_core::{Brain, ChatTurn, Transcriber, VoiceRole, VoiceSynthesizer};
use care_store::ProfileStore;
use tracing::{debug, warn};

use crate::error::CompanionError;
use crate::playback::AudioSink;

/// Canned reply used when the whole model chain fails. The user always gets
/// an assistant turn, possibly this one.
pub const FALLBACK_REPLY: &str = "죄송해요, 잠시 문제가 생겼어요. 다시 말씀해주실 수 있나요?";

/// How the user is talking to the companion.
///
/// Voice mode gates both synthesis and playback: in text mode replies stay
/// silent even when a cloned voice is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    Voice,
}

/// A single user's conversation with the companion.
///
/// Each utterance becomes two turns: the user turn is appended before the
/// model call goes out, the assistant turn after it resolves. The model is
/// called statelessly with the current utterance only; the session log
/// exists for the UI and for later analysis, not as model context.
///
/// Provider failures never escape: an exhausted model chain degrades to
/// [`FALLBACK_REPLY`], synthesis failures drop the audio, playback failures
/// are logged and the turn stands.
pub struct ConversationSession {
    brain: Arc<dyn Brain>,
    synthesizer: Arc<dyn VoiceSynthesizer>,
    transcriber: Arc<dyn Transcriber>,
    profiles: Arc<dyn ProfileStore>,
    sink: Arc<dyn AudioSink>,
    mode: InputMode,
    turns: Vec<ChatTurn>,
}

impl ConversationSession {
    /// Create a session over the given providers and profile store.
    pub fn new(
        brain: Arc<dyn Brain>,
        synthesizer: Arc<dyn VoiceSynthesizer>,
        transcriber: Arc<dyn Transcriber>,
        profiles: Arc<dyn ProfileStore>,
        sink: Arc<dyn AudioSink>,
    ) -> Self {
        Self {
            brain,
            synthesizer,
            transcriber,
            profiles,
            sink,
            mode: InputMode::default(),
            turns: Vec::new(),
        }
    }

    /// The current input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch between text and voice input.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// The full conversation log, oldest first.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Process one utterance from the user, returning the turns it produced.
    ///
    /// Empty or whitespace-only input is a silent no-op: no turns, no
    /// provider calls. Otherwise exactly two turns are appended and returned,
    /// the user's and the assistant's reply. In voice mode, when a child
    /// voice model is registered, the reply is also synthesized and played
    /// to completion before this returns.
    pub async fn process_utterance(&mut self, text: &str) -> Vec<ChatTurn> {
        let utterance = text.trim();
        if utterance.is_empty() {
            return Vec::new();
        }

        // The user turn goes up before any network latency.
        self.turns.push(ChatTurn::user(utterance));

        let reply = match self.brain.reply(utterance).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Reply failed ({}), serving fallback", e);
                FALLBACK_REPLY.to_string()
            }
        };

        let clip = if self.mode == InputMode::Voice {
            self.synthesize_reply(&reply).await
        } else {
            None
        };

        let assistant = match clip {
            Some(clip) => ChatTurn::assistant_with_audio(&reply, clip),
            None => ChatTurn::assistant(&reply),
        };
        self.turns.push(assistant);

        if let Some(turn) = self.turns.last() {
            if turn.has_audio() {
                if let Some(clip) = &turn.audio {
                    // Exclusive playback slot: whatever was playing stops
                    // first. A playback failure leaves the turn in place.
                    self.sink.stop().await;
                    if let Err(e) = self.sink.play(clip).await {
                        warn!("Playback failed: {}", e);
                    }
                }
            }
        }

        let count = self.turns.len();
        self.turns[count - 2..].to_vec()
    }

    /// Transcribe a recorded utterance and process the recognized text.
    ///
    /// Transcription failures are surfaced to the caller; an empty
    /// transcript is the same silent no-op as empty typed input.
    pub async fn process_recording(&mut self, audio: &[u8]) -> Result<Vec<ChatTurn>, CompanionError> {
        let text = self.transcriber.transcribe(audio).await?;
        Ok(self.process_utterance(&text).await)
    }

    /// Synthesize a reply in the child's cloned voice, if one is registered.
    ///
    /// Returns None when no usable child voice model exists, when synthesis
    /// fails, or when the provider produced an empty (mock) clip.
    async fn synthesize_reply(&self, reply: &str) -> Option<care_core::AudioClip> {
        let model_id = match self.profiles.active_model_id(VoiceRole::Child).await {
            Some(id) => id,
            None => {
                debug!("No child voice model registered, skipping synthesis");
                return None;
            }
        };

        match self.synthesizer.synthesize(reply, &model_id).await {
            Ok(clip) if !clip.is_empty() => Some(clip),
            Ok(_) => {
                debug!("Synthesis produced an empty clip, skipping playback");
                None
            }
            Err(e) => {
                warn!("Synthesis failed ({}), reply stays text-only", e);
                None
            }
        }
    }
}
