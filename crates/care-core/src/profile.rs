//! Voice profile records for cloned family voices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which family member a cloned voice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceRole {
    /// The adult child whose voice the companion speaks in.
    Child,
    /// The parent, used to voice their own reminders.
    Parent,
}

impl VoiceRole {
    /// Korean display name used in profile labels and UI copy.
    pub fn display_name(&self) -> &'static str {
        match self {
            VoiceRole::Child => "자녀",
            VoiceRole::Parent => "부모",
        }
    }
}

/// A registered voice clone.
///
/// At most one profile exists per role. Saving again for the same role
/// replaces the previous profile in place: `id` and `created_at` are kept,
/// `name` and `voice_model_id` are overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfile {
    /// Store-assigned identifier, immutable once created.
    pub id: String,
    /// Role this voice stands in for.
    pub role: VoiceRole,
    /// Display label, e.g. "아들" or "딸".
    pub name: String,
    /// Provider-side identifier of the cloned voice model. None means
    /// cloning failed or has not completed.
    pub voice_model_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl VoiceProfile {
    /// Build a fresh profile with the creation time set to now.
    pub fn new(
        id: impl Into<String>,
        role: VoiceRole,
        name: impl Into<String>,
        voice_model_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            name: name.into(),
            voice_model_id,
            created_at: Utc::now(),
        }
    }
}
