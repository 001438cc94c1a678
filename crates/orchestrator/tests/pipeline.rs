//! End-to-end pipeline tests over real JSON stores and mock providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use care_core::{
    async_trait, AnalysisResult, AudioClip, Brain, ProviderError, Transcriber, TurnRole,
    VoiceRole, VoiceSynthesizer,
};
use orchestrator::{
    AudioSink, CompanionError, ConversationSession, InputMode, JsonProfileStore,
    JsonReminderStore, JsonStore, ProfileStore, ReminderAlert, ReminderScheduler, ReminderStore,
    VoiceRegistrar,
};

struct EchoBrain;

#[async_trait]
impl Brain for EchoBrain {
    async fn reply(&self, utterance: &str) -> Result<String, ProviderError> {
        Ok(format!("네, {} 그렇죠?", utterance))
    }

    async fn analyze(&self, _transcript: &str) -> Result<AnalysisResult, ProviderError> {
        Ok(AnalysisResult::mock())
    }

    fn name(&self) -> &str {
        "echo"
    }
}

/// Synthesizer that records the voice model used for each call.
struct RecordingSynth {
    used_models: Mutex<Vec<String>>,
}

impl RecordingSynth {
    fn new() -> Self {
        Self {
            used_models: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl VoiceSynthesizer for RecordingSynth {
    async fn synthesize(
        &self,
        _text: &str,
        voice_model_id: &str,
    ) -> Result<AudioClip, ProviderError> {
        self.used_models
            .lock()
            .unwrap()
            .push(voice_model_id.to_string());
        Ok(AudioClip::new(vec![0u8; 128], "audio/mpeg"))
    }
}

struct FixedCloner {
    voice_id: String,
}

#[async_trait]
impl care_core::VoiceCloner for FixedCloner {
    async fn clone_voice(
        &self,
        _sample: &[u8],
        _name: &str,
        _description: &str,
    ) -> Result<String, ProviderError> {
        Ok(self.voice_id.clone())
    }
}

struct FixedTranscriber {
    text: String,
}

#[async_trait]
impl Transcriber for FixedTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String, ProviderError> {
        Ok(self.text.clone())
    }
}

struct CountingSink {
    plays: AtomicUsize,
}

impl CountingSink {
    fn new() -> Self {
        Self {
            plays: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AudioSink for CountingSink {
    async fn play(&self, _clip: &AudioClip) -> Result<(), CompanionError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) {}
}

struct CollectingAlert {
    alerts: Mutex<Vec<String>>,
}

impl CollectingAlert {
    fn new() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReminderAlert for CollectingAlert {
    async fn alert(&self, text: &str) {
        self.alerts.lock().unwrap().push(text.to_string());
    }
}

struct Fixture {
    profiles: Arc<JsonProfileStore>,
    reminders: Arc<JsonReminderStore>,
    synth: Arc<RecordingSynth>,
    sink: Arc<CountingSink>,
    alert: Arc<CollectingAlert>,
    _dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path().join("care.json")));
        Self {
            profiles: Arc::new(JsonProfileStore::new(store.clone())),
            reminders: Arc::new(JsonReminderStore::new(store)),
            synth: Arc::new(RecordingSynth::new()),
            sink: Arc::new(CountingSink::new()),
            alert: Arc::new(CollectingAlert::new()),
            _dir: dir,
        }
    }

    fn session(&self, transcript: &str) -> ConversationSession {
        ConversationSession::new(
            Arc::new(EchoBrain),
            self.synth.clone(),
            Arc::new(FixedTranscriber {
                text: transcript.to_string(),
            }),
            self.profiles.clone(),
            self.sink.clone(),
        )
    }

    fn scheduler(&self) -> ReminderScheduler {
        ReminderScheduler::new(
            self.reminders.clone(),
            self.profiles.clone(),
            self.synth.clone(),
            self.sink.clone(),
            self.alert.clone(),
        )
    }
}

#[tokio::test]
async fn test_text_mode_conversation_without_registered_voice() {
    let fx = Fixture::new();
    let mut session = fx.session("");

    let turns = session.process_utterance("날씨가 좋네요").await;

    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, TurnRole::User);
    assert_eq!(turns[0].text, "날씨가 좋네요");
    assert_eq!(turns[1].role, TurnRole::Assistant);
    assert!(turns[1].audio.is_none());
    assert_eq!(fx.sink.plays.load(Ordering::SeqCst), 0);
    assert!(fx.synth.used_models.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_registration_feeds_the_conversation_voice() {
    let fx = Fixture::new();

    // Register a child voice, then converse in voice mode.
    let registrar = VoiceRegistrar::new(
        Arc::new(FixedCloner {
            voice_id: "voice-child-123".to_string(),
        }),
        fx.profiles.clone(),
    );
    registrar
        .register(&vec![0u8; 150_000], VoiceRole::Child, "아들")
        .await
        .unwrap();

    let mut session = fx.session("");
    session.set_mode(InputMode::Voice);
    let turns = session.process_utterance("밥은 먹었니?").await;

    assert!(turns[1].has_audio());
    assert_eq!(fx.sink.plays.load(Ordering::SeqCst), 1);
    assert_eq!(
        fx.synth.used_models.lock().unwrap().as_slice(),
        ["voice-child-123"]
    );
}

#[tokio::test]
async fn test_recorded_utterance_flows_through_transcription() {
    let fx = Fixture::new();
    let mut session = fx.session("엄마, 오늘 날씨가 참 좋네요.");

    let turns = session.process_recording(&[0u8; 2048]).await.unwrap();

    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].text, "엄마, 오늘 날씨가 참 좋네요.");
}

#[tokio::test]
async fn test_reminder_round_trip_and_firing() {
    let fx = Fixture::new();

    let saved = fx.reminders.add("08:30", "아침 약 드세요").await.unwrap();
    let listed = fx.reminders.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, saved.id);
    assert_eq!(listed[0].time, "08:30");
    assert_eq!(listed[0].message, "아침 약 드세요");
    assert!(listed[0].enabled);

    // No voice registered: firing degrades to the visible alert, once.
    let mut scheduler = fx.scheduler();
    scheduler.tick_at("08:30").await;
    scheduler.tick_at("08:30").await;

    assert_eq!(
        fx.alert.alerts.lock().unwrap().as_slice(),
        ["[알림] 아침 약 드세요"]
    );
    assert_eq!(fx.sink.plays.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_scheduler_restart_forgets_trigger_markers() {
    let fx = Fixture::new();
    fx.reminders.add("08:30", "아침 약 드세요").await.unwrap();

    let mut first = fx.scheduler();
    first.tick_at("08:30").await;
    drop(first);

    // A fresh scheduler carries no markers, so the same minute fires again.
    let mut second = fx.scheduler();
    second.tick_at("08:30").await;

    assert_eq!(fx.alert.alerts.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_disabled_reminder_survives_but_stays_silent() {
    let fx = Fixture::new();

    let saved = fx.reminders.add("08:30", "아침 약 드세요").await.unwrap();
    fx.reminders.set_enabled(&saved.id, false).await.unwrap();

    let mut scheduler = fx.scheduler();
    scheduler.tick_at("08:30").await;

    assert!(fx.alert.alerts.lock().unwrap().is_empty());
    assert_eq!(fx.reminders.list().await.len(), 1);
}

#[tokio::test]
async fn test_reminder_firing_prefers_parent_voice() {
    let fx = Fixture::new();

    fx.profiles
        .save(VoiceRole::Child, "아들", Some("voice-child".to_string()))
        .await
        .unwrap();
    fx.profiles
        .save(VoiceRole::Parent, "엄마", Some("voice-parent".to_string()))
        .await
        .unwrap();
    fx.reminders.add("21:00", "저녁 약 드세요").await.unwrap();

    let mut scheduler = fx.scheduler();
    scheduler.tick_at("21:00").await;

    assert_eq!(
        fx.synth.used_models.lock().unwrap().as_slice(),
        ["voice-parent"]
    );
    assert_eq!(fx.sink.plays.load(Ordering::SeqCst), 1);
    assert!(fx.alert.alerts.lock().unwrap().is_empty());
}

// The full mock-mode stack: real adapters, no credentials anywhere.
mod mock_mode {
    use super::*;

    use claude_brain::{ClaudeBrain, ClaudeBrainConfig, MOCK_REPLY};
    use eleven_voice::{ElevenVoice, ElevenVoiceConfig};
    use orchestrator::{AnalysisService, AnalysisSource};
    use whisper_stt::{WhisperStt, WhisperSttConfig, MOCK_TRANSCRIPT};

    #[tokio::test]
    async fn test_conversation_serves_deterministic_canned_outputs() {
        let fx = Fixture::new();
        let mut session = ConversationSession::new(
            Arc::new(ClaudeBrain::new(ClaudeBrainConfig::default()).unwrap()),
            Arc::new(ElevenVoice::new(ElevenVoiceConfig::default()).unwrap()),
            Arc::new(WhisperStt::new(WhisperSttConfig::default()).unwrap()),
            fx.profiles.clone(),
            fx.sink.clone(),
        );

        let first = session.process_utterance("날씨가 좋네요").await;
        let second = session.process_utterance("날씨가 좋네요").await;

        assert_eq!(first[1].text, MOCK_REPLY);
        assert_eq!(second[1].text, MOCK_REPLY);
        assert!(first[1].audio.is_none());
    }

    #[tokio::test]
    async fn test_voice_mode_mock_synthesis_stays_silent() {
        let fx = Fixture::new();
        fx.profiles
            .save(VoiceRole::Child, "아들", Some("voice-abc".to_string()))
            .await
            .unwrap();

        let mut session = ConversationSession::new(
            Arc::new(ClaudeBrain::new(ClaudeBrainConfig::default()).unwrap()),
            Arc::new(ElevenVoice::new(ElevenVoiceConfig::default()).unwrap()),
            Arc::new(WhisperStt::new(WhisperSttConfig::default()).unwrap()),
            fx.profiles.clone(),
            fx.sink.clone(),
        );
        session.set_mode(InputMode::Voice);

        let turns = session.process_utterance("안녕").await;

        // Mock synthesis yields an empty clip: no audio on the turn, no
        // playback attempted.
        assert!(!turns[1].has_audio());
        assert_eq!(fx.sink.plays.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mock_transcription_feeds_the_pipeline() {
        let fx = Fixture::new();
        let mut session = ConversationSession::new(
            Arc::new(ClaudeBrain::new(ClaudeBrainConfig::default()).unwrap()),
            Arc::new(ElevenVoice::new(ElevenVoiceConfig::default()).unwrap()),
            Arc::new(WhisperStt::new(WhisperSttConfig::default()).unwrap()),
            fx.profiles.clone(),
            fx.sink.clone(),
        );

        let turns = session.process_recording(&[0u8; 4096]).await.unwrap();
        assert_eq!(turns[0].text, MOCK_TRANSCRIPT);
    }

    #[tokio::test]
    async fn test_empty_analysis_is_the_canned_report() {
        let service = AnalysisService::new(Arc::new(
            ClaudeBrain::new(ClaudeBrainConfig::default()).unwrap(),
        ));

        let (result, source) = service.analyze_with_source("").await;

        assert_eq!(source, AnalysisSource::Fallback);
        assert_eq!(result.sentiment_score, 85);
        assert!(result.risk_factors.is_empty());
    }
}
