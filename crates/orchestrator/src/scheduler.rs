//! Reminder scheduler: the wall-clock poll loop that speaks reminders.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use care_core::{Reminder, VoiceRole, VoiceSynthesizer};
use care_store::{ProfileStore, ReminderStore};
use chrono::Local;
use tracing::{debug, warn};

use crate::playback::AudioSink;

/// Default poll period; well under a minute so no trigger window is missed.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Format a reminder message as the visible alert shown when no voice path
/// is available.
pub fn alert_text(message: &str) -> String {
    format!("[알림] {}", message)
}

/// Trait for raising a visible (non-spoken) reminder alert.
///
/// The last rung of the reminder fallback ladder: used when no voice is
/// registered or when synthesis or playback fails.
#[async_trait]
pub trait ReminderAlert: Send + Sync {
    /// Show `text` to the user.
    async fn alert(&self, text: &str);
}

/// A logging alert for headless setups and tests.
#[derive(Debug, Clone, Default)]
pub struct LoggingAlert;

#[async_trait]
impl ReminderAlert for LoggingAlert {
    async fn alert(&self, text: &str) {
        tracing::info!("{}", text);
    }
}

/// Polls the reminder store against the wall clock and speaks each due
/// reminder.
///
/// A reminder fires at most once per `(id, HH:MM)` pair per scheduler
/// instance; the trigger markers live only in this struct and are gone on
/// restart, so a reminder matching the current minute at startup fires
/// again. The marker set grows by one entry per firing and is never pruned
/// within a session.
///
/// Voice selection prefers the parent's registered voice, then the child's,
/// then the visible alert. This is deliberately not the conversation path's
/// child-only policy. No failure stops the poll loop.
pub struct ReminderScheduler {
    reminders: Arc<dyn ReminderStore>,
    profiles: Arc<dyn ProfileStore>,
    synthesizer: Arc<dyn VoiceSynthesizer>,
    sink: Arc<dyn AudioSink>,
    alert: Arc<dyn ReminderAlert>,
    poll_interval: Duration,
    fired: HashSet<(String, String)>,
}

impl ReminderScheduler {
    /// Create a scheduler over the given stores and output seams.
    pub fn new(
        reminders: Arc<dyn ReminderStore>,
        profiles: Arc<dyn ProfileStore>,
        synthesizer: Arc<dyn VoiceSynthesizer>,
        sink: Arc<dyn AudioSink>,
        alert: Arc<dyn ReminderAlert>,
    ) -> Self {
        Self {
            reminders,
            profiles,
            synthesizer,
            sink,
            alert,
            poll_interval: DEFAULT_POLL_INTERVAL,
            fired: HashSet::new(),
        }
    }

    /// Override the poll period (mainly for tests).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// The current local time truncated to the trigger granularity.
    fn current_minute() -> String {
        Local::now().format("%H:%M").to_string()
    }

    /// Run the poll loop forever. Ticks are strictly serialized: a tick's
    /// scan and any triggered speech complete before the next tick is
    /// evaluated.
    pub async fn run(mut self) {
        let mut interval = tokio::time::interval(self.poll_interval);
        loop {
            interval.tick().await;
            self.tick().await;
        }
    }

    /// Evaluate one poll tick against the wall clock.
    pub async fn tick(&mut self) {
        let minute = Self::current_minute();
        self.tick_at(&minute).await;
    }

    /// Evaluate one poll tick against an explicit `HH:MM` minute.
    pub async fn tick_at(&mut self, minute: &str) {
        let reminders = self.reminders.list().await;

        for reminder in reminders {
            if !reminder.enabled || reminder.time != minute {
                continue;
            }

            let marker = (reminder.id.clone(), minute.to_string());
            if self.fired.contains(&marker) {
                continue;
            }

            debug!("Reminder {} due at {}", reminder.id, minute);
            self.fire(&reminder).await;
            self.fired.insert(marker);
        }
    }

    /// Speak one reminder, falling back to the visible alert on any failure.
    async fn fire(&self, reminder: &Reminder) {
        let model_id = match self.profiles.active_model_id(VoiceRole::Parent).await {
            Some(id) => Some(id),
            None => self.profiles.active_model_id(VoiceRole::Child).await,
        };

        let Some(model_id) = model_id else {
            self.alert.alert(&alert_text(&reminder.message)).await;
            return;
        };

        match self.synthesizer.synthesize(&reminder.message, &model_id).await {
            Ok(clip) if !clip.is_empty() => {
                self.sink.stop().await;
                if let Err(e) = self.sink.play(&clip).await {
                    warn!("Reminder playback failed ({}), showing alert", e);
                    self.alert.alert(&alert_text(&reminder.message)).await;
                }
            }
            Ok(_) => {
                debug!("Reminder synthesis produced an empty clip, showing alert");
                self.alert.alert(&alert_text(&reminder.message)).await;
            }
            Err(e) => {
                warn!("Reminder synthesis failed ({}), showing alert", e);
                self.alert.alert(&alert_text(&reminder.message)).await;
            }
        }
    }
}
