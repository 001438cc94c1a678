//! Voice registration workflow: recorded sample in, stored profile out.

use std::sync::Arc;

use care_core::{VoiceCloner, VoiceProfile, VoiceRole};
use care_store::ProfileStore;
use tracing::{info, warn};

use crate::error::CompanionError;

/// Minimum accepted sample size, roughly thirty seconds of recorded audio.
/// Smaller samples are rejected before any network call.
pub const MIN_SAMPLE_BYTES: usize = 100_000;

/// Drives a recorded voice sample through cloning and into the profile
/// store.
///
/// Registration is all-or-nothing: a failed clone leaves the store
/// untouched, and a successful one replaces any existing profile for the
/// same role.
pub struct VoiceRegistrar {
    cloner: Arc<dyn VoiceCloner>,
    profiles: Arc<dyn ProfileStore>,
}

impl VoiceRegistrar {
    /// Create a registrar over the given cloning provider and profile store.
    pub fn new(cloner: Arc<dyn VoiceCloner>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { cloner, profiles }
    }

    /// Clone a voice from `sample` and persist it as the profile for `role`.
    ///
    /// A blank `display_name` falls back to the role's Korean display name.
    /// Samples under [`MIN_SAMPLE_BYTES`] fail fast with
    /// [`CompanionError::RecordingTooShort`]; cloning errors are surfaced
    /// with the provider's message and nothing is persisted.
    pub async fn register(
        &self,
        sample: &[u8],
        role: VoiceRole,
        display_name: &str,
    ) -> Result<VoiceProfile, CompanionError> {
        if sample.len() < MIN_SAMPLE_BYTES {
            warn!(
                "Rejecting {} byte sample for {}, below the {} byte floor",
                sample.len(),
                role.display_name(),
                MIN_SAMPLE_BYTES
            );
            return Err(CompanionError::RecordingTooShort {
                bytes: sample.len(),
            });
        }

        let name = {
            let trimmed = display_name.trim();
            if trimmed.is_empty() {
                role.display_name().to_string()
            } else {
                trimmed.to_string()
            }
        };
        let description = format!("{} 목소리", name);

        let voice_model_id = self.cloner.clone_voice(sample, &name, &description).await?;

        let profile = self
            .profiles
            .save(role, &name, Some(voice_model_id))
            .await?;

        info!(
            "Registered voice '{}' for {} as profile {}",
            profile.name,
            profile.role.display_name(),
            profile.id
        );
        Ok(profile)
    }
}
