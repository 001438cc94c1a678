//! Voice profile storage.

use std::sync::Arc;

use async_trait::async_trait;
use care_core::{VoiceProfile, VoiceRole};

use crate::kv::{allocate_id, JsonStore};
use crate::{Result, StoreError};

/// Namespace key for voice profiles.
pub const PROFILES_NAMESPACE: &str = "silver_care_voice_profiles";

/// Repository of cloned voice profiles.
///
/// At most one profile exists per role. Saving for a role that is already
/// registered replaces that profile in place, keeping its `id` and
/// `created_at` while overwriting `name` and `voice_model_id`.
///
/// Abstracted to keep callers independent of the backing store (JSON file,
/// tests, a future networked implementation).
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// All registered profiles.
    async fn list(&self) -> Vec<VoiceProfile>;

    /// Create or replace the profile for `role`, returning the saved record.
    async fn save(
        &self,
        role: VoiceRole,
        name: &str,
        voice_model_id: Option<String>,
    ) -> Result<VoiceProfile>;

    /// Delete a profile by id.
    async fn remove(&self, id: &str) -> Result<()>;

    /// The profile registered for `role`, if any.
    async fn find_by_role(&self, role: VoiceRole) -> Option<VoiceProfile> {
        self.list().await.into_iter().find(|p| p.role == role)
    }

    /// The usable voice model id for `role`, if a profile exists and its
    /// clone succeeded.
    async fn active_model_id(&self, role: VoiceRole) -> Option<String> {
        self.find_by_role(role)
            .await
            .and_then(|p| p.voice_model_id)
            .filter(|id| !id.is_empty())
    }
}

/// JSON-file backed [`ProfileStore`].
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    store: Arc<JsonStore>,
}

impl JsonProfileStore {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileStore for JsonProfileStore {
    async fn list(&self) -> Vec<VoiceProfile> {
        self.store.load(PROFILES_NAMESPACE).await
    }

    async fn save(
        &self,
        role: VoiceRole,
        name: &str,
        voice_model_id: Option<String>,
    ) -> Result<VoiceProfile> {
        let mut profiles = self.list().await;

        let saved = match profiles.iter_mut().find(|p| p.role == role) {
            Some(existing) => {
                existing.name = name.to_string();
                existing.voice_model_id = voice_model_id;
                existing.clone()
            }
            None => {
                let taken: Vec<String> = profiles.iter().map(|p| p.id.clone()).collect();
                let profile = VoiceProfile::new(allocate_id(&taken), role, name, voice_model_id);
                profiles.push(profile.clone());
                profile
            }
        };

        self.store.save(PROFILES_NAMESPACE, &profiles).await?;
        Ok(saved)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut profiles = self.list().await;
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        if profiles.len() == before {
            return Err(StoreError::NotFound {
                entity: "voice profile",
                id: id.to_string(),
            });
        }

        self.store.save(PROFILES_NAMESPACE, &profiles).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(dir: &tempfile::TempDir) -> JsonProfileStore {
        JsonProfileStore::new(Arc::new(JsonStore::open(dir.path().join("care.json"))))
    }

    #[tokio::test]
    async fn test_save_and_find_by_role() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = test_store(&dir);

        profiles
            .save(VoiceRole::Child, "아들", Some("voice-abc".to_string()))
            .await
            .unwrap();

        let found = profiles.find_by_role(VoiceRole::Child).await.unwrap();
        assert_eq!(found.name, "아들");
        assert_eq!(found.voice_model_id.as_deref(), Some("voice-abc"));
        assert!(profiles.find_by_role(VoiceRole::Parent).await.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_in_place_keeping_identity() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = test_store(&dir);

        let first = profiles
            .save(VoiceRole::Child, "아들", Some("voice-old".to_string()))
            .await
            .unwrap();
        let second = profiles
            .save(VoiceRole::Child, "딸", Some("voice-new".to_string()))
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.name, "딸");
        assert_eq!(second.voice_model_id.as_deref(), Some("voice-new"));

        let all = profiles.list().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].voice_model_id.as_deref(), Some("voice-new"));
    }

    #[tokio::test]
    async fn test_roles_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = test_store(&dir);

        profiles
            .save(VoiceRole::Child, "아들", Some("voice-child".to_string()))
            .await
            .unwrap();
        profiles
            .save(VoiceRole::Parent, "엄마", Some("voice-parent".to_string()))
            .await
            .unwrap();

        assert_eq!(profiles.list().await.len(), 2);
        assert_eq!(
            profiles.active_model_id(VoiceRole::Parent).await.as_deref(),
            Some("voice-parent")
        );
    }

    #[tokio::test]
    async fn test_active_model_id_requires_successful_clone() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = test_store(&dir);

        profiles.save(VoiceRole::Child, "아들", None).await.unwrap();

        assert!(profiles.find_by_role(VoiceRole::Child).await.is_some());
        assert!(profiles.active_model_id(VoiceRole::Child).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_profile_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = test_store(&dir);

        let result = profiles.remove("nope").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_deletes_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = test_store(&dir);

        let saved = profiles
            .save(VoiceRole::Child, "아들", Some("voice-abc".to_string()))
            .await
            .unwrap();
        profiles.remove(&saved.id).await.unwrap();
        assert!(profiles.list().await.is_empty());
    }
}
