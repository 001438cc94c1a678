//! Conversation orchestration for the care companion.
//!
//! This crate ties the provider adapters and stores together into the
//! product's four workflows:
//!
//! - [`ConversationSession`] — the utterance-to-spoken-reply pipeline,
//!   speaking as the user's child in their cloned voice
//! - [`VoiceRegistrar`] — recorded sample in, cloned voice profile out
//! - [`ReminderScheduler`] — the wall-clock poll loop that speaks reminders
//! - [`AnalysisService`] — sentiment/risk analysis over the conversation log
//!
//! # Architecture
//!
//! ```text
//! utterance (typed, or recorded audio → Transcriber)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  CONVERSATION SESSION                       │
//! │                                                             │
//! │  1. Append user turn (before any network latency)           │
//! │         ↓                                                   │
//! │  2. Brain reply (model fallback chain; canned reply if      │
//! │     the whole chain fails)                                  │
//! │         ↓                                                   │
//! │  3. Voice mode + child voice registered?                    │
//! │     → synthesize reply in the cloned voice                  │
//! │         ↓                                                   │
//! │  4. Append assistant turn                                   │
//! │         ↓                                                   │
//! │  5. Play audio to completion (exclusive playback slot)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reminder scheduler runs beside the session, polling the reminder
//! store every second and speaking due reminders with the parent's voice,
//! the child's voice, or a visible alert, in that order of preference.
//!
//! # Example
//!
//! ```rust,ignore
//! use orchestrator::Companion;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let companion = Companion::from_env("data/care.json")?;
//!
//!     let mut session = companion.session();
//!     for turn in session.process_utterance("날씨가 좋네요").await {
//!         println!("{}", turn.text);
//!     }
//!
//!     tokio::spawn(companion.scheduler().run());
//!     Ok(())
//! }
//! ```

mod analysis;
mod companion;
mod error;
mod playback;
mod registration;
mod scheduler;
mod scripts;
mod session;

// Public exports
pub use analysis::{assemble_transcript, AnalysisService, AnalysisSource};
pub use companion::Companion;
pub use error::CompanionError;
pub use playback::{AudioSink, LoggingSink, NoOpSink};
pub use registration::{VoiceRegistrar, MIN_SAMPLE_BYTES};
pub use scheduler::{
    alert_text, LoggingAlert, ReminderAlert, ReminderScheduler, DEFAULT_POLL_INTERVAL,
};
pub use scripts::{
    random_script, scripts_for_role, VoiceScript, CHILD_SCRIPTS, PARENT_SCRIPTS,
};
pub use session::{ConversationSession, InputMode, FALLBACK_REPLY};

// Re-export commonly used types from dependencies
pub use care_core::{
    AnalysisResult, AudioClip, ChatTurn, Reminder, Sentiment, TurnRole, VoiceProfile, VoiceRole,
};
pub use care_store::{
    JsonProfileStore, JsonReminderStore, JsonStore, ProfileStore, ReminderStore,
};
