//! Scheduled reminder records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recurring daily reminder.
///
/// `time` is a wall-clock `HH:MM` string in 24-hour local time. Matching is
/// exact string equality against the current minute, so a reminder fires at
/// most once per minute while enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Store-assigned identifier.
    pub id: String,
    /// Wall-clock firing time, "HH:MM" 24-hour.
    pub time: String,
    /// The message to speak or display.
    pub message: String,
    /// Disabled reminders are kept but never fire.
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    /// Build an enabled reminder.
    pub fn new(id: impl Into<String>, time: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            message: message.into(),
            enabled: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reminder_is_enabled() {
        let reminder = Reminder::new("1", "08:30", "아침 약 드세요");
        assert!(reminder.enabled);
        assert_eq!(reminder.time, "08:30");
    }

    #[test]
    fn test_serde_field_names() {
        let reminder = Reminder::new("1700000000000", "21:00", "저녁 약 드세요");
        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["time"], "21:00");
        assert_eq!(json["enabled"], true);
        assert!(json["createdAt"].is_string());
    }
}
