//! Wiring: assemble the whole companion from environment configuration.

use std::path::Path;
use std::sync::Arc;

use care_core::{Brain, Transcriber, VoiceCloner, VoiceSynthesizer};
use care_store::{JsonProfileStore, JsonReminderStore, JsonStore, ProfileStore, ReminderStore};
use claude_brain::ClaudeBrain;
use eleven_voice::ElevenVoice;
use tracing::info;
use whisper_stt::WhisperStt;

use crate::analysis::AnalysisService;
use crate::error::CompanionError;
use crate::playback::{AudioSink, LoggingSink};
use crate::registration::VoiceRegistrar;
use crate::scheduler::{LoggingAlert, ReminderAlert, ReminderScheduler};
use crate::session::ConversationSession;

/// The assembled companion: shared stores plus the provider set, ready to
/// hand out sessions, registrars, schedulers, and the analysis service.
///
/// Built from environment variables via [`Companion::from_env`]; each
/// provider independently decides mock-vs-live from its own credential at
/// construction, never per call.
pub struct Companion {
    brain: Arc<dyn Brain>,
    synthesizer: Arc<dyn VoiceSynthesizer>,
    cloner: Arc<dyn VoiceCloner>,
    transcriber: Arc<dyn Transcriber>,
    profiles: Arc<dyn ProfileStore>,
    reminders: Arc<dyn ReminderStore>,
    sink: Arc<dyn AudioSink>,
    alert: Arc<dyn ReminderAlert>,
}

impl Companion {
    /// Build a companion from environment variables, persisting state to the
    /// JSON file at `data_path`.
    ///
    /// Recognized variables are each provider's: `CLAUDE_*`
    /// ([`claude_brain::ClaudeBrainConfig::from_env`]), `ELEVENLABS_*`
    /// ([`eleven_voice::ElevenVoiceConfig::from_env`]) and `OPENAI_*` /
    /// `WHISPER_*` ([`whisper_stt::WhisperSttConfig::from_env`]). Playback
    /// and alerts default to logging seams; swap them with
    /// [`with_sink`](Companion::with_sink) and
    /// [`with_alert`](Companion::with_alert).
    pub fn from_env(data_path: impl AsRef<Path>) -> Result<Self, CompanionError> {
        let store = Arc::new(JsonStore::open(data_path.as_ref()));

        let eleven = Arc::new(ElevenVoice::from_env()?);

        let companion = Self {
            brain: Arc::new(ClaudeBrain::from_env()?),
            synthesizer: eleven.clone(),
            cloner: eleven,
            transcriber: Arc::new(WhisperStt::from_env()?),
            profiles: Arc::new(JsonProfileStore::new(store.clone())),
            reminders: Arc::new(JsonReminderStore::new(store)),
            sink: Arc::new(LoggingSink),
            alert: Arc::new(LoggingAlert),
        };

        info!(
            "Companion assembled, state at {}",
            data_path.as_ref().display()
        );
        Ok(companion)
    }

    /// Replace the playback seam.
    pub fn with_sink(mut self, sink: Arc<dyn AudioSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the visible-alert seam.
    pub fn with_alert(mut self, alert: Arc<dyn ReminderAlert>) -> Self {
        self.alert = alert;
        self
    }

    /// Start a fresh conversation session.
    pub fn session(&self) -> ConversationSession {
        ConversationSession::new(
            self.brain.clone(),
            self.synthesizer.clone(),
            self.transcriber.clone(),
            self.profiles.clone(),
            self.sink.clone(),
        )
    }

    /// The voice registration workflow.
    pub fn registrar(&self) -> VoiceRegistrar {
        VoiceRegistrar::new(self.cloner.clone(), self.profiles.clone())
    }

    /// A reminder scheduler with fresh trigger markers.
    pub fn scheduler(&self) -> ReminderScheduler {
        ReminderScheduler::new(
            self.reminders.clone(),
            self.profiles.clone(),
            self.synthesizer.clone(),
            self.sink.clone(),
            self.alert.clone(),
        )
    }

    /// The analysis service.
    pub fn analysis(&self) -> AnalysisService {
        AnalysisService::new(self.brain.clone())
    }

    /// The voice profile store.
    pub fn profiles(&self) -> &Arc<dyn ProfileStore> {
        &self.profiles
    }

    /// The reminder store.
    pub fn reminders(&self) -> &Arc<dyn ReminderStore> {
        &self.reminders
    }
}
