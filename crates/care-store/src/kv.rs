//! Namespaced JSON document store.
//!
//! All records live in a single JSON file keyed by namespace, each namespace
//! holding one array of records. Reads come from an in-process cache loaded
//! at open; every save rewrites the whole file.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::Result;

/// File-backed key-value store with JSON array values.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    cache: RwLock<serde_json::Map<String, Value>>,
}

impl JsonStore {
    /// Open a store at `path`.
    ///
    /// A missing file starts the store empty; an unreadable or corrupt file
    /// is logged and treated as empty rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<serde_json::Map<String, Value>>(&text) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt store file {}: {}", path.display(), e);
                    serde_json::Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => serde_json::Map::new(),
            Err(e) => {
                tracing::warn!("Could not read store file {}: {}", path.display(), e);
                serde_json::Map::new()
            }
        };

        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    /// Load all records under `namespace`.
    ///
    /// A missing namespace or malformed records yield an empty list.
    pub async fn load<T: DeserializeOwned>(&self, namespace: &str) -> Vec<T> {
        let cache = self.cache.read().await;
        match cache.get(namespace) {
            None => Vec::new(),
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("Ignoring malformed records under '{}': {}", namespace, e);
                    Vec::new()
                }
            },
        }
    }

    /// Replace all records under `namespace` and flush the store to disk.
    pub async fn save<T: Serialize>(&self, namespace: &str, items: &[T]) -> Result<()> {
        let mut cache = self.cache.write().await;
        cache.insert(namespace.to_string(), serde_json::to_value(items)?);
        let text = serde_json::to_string_pretty(&*cache)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Allocate a millisecond-timestamp id, bumping past any taken value.
pub(crate) fn allocate_id(taken: &[String]) -> String {
    let mut candidate = chrono::Utc::now().timestamp_millis();
    let mut id = candidate.to_string();
    while taken.contains(&id) {
        candidate += 1;
        id = candidate.to_string();
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_core::Reminder;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("care.json"));
        let reminders: Vec<Reminder> = store.load("silver_care_reminders").await;
        assert!(reminders.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_reopen_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("care.json");

        let store = JsonStore::open(&path);
        let reminder = Reminder::new("1700000000000", "08:30", "아침 약 드세요");
        store
            .save("silver_care_reminders", &[reminder])
            .await
            .unwrap();

        let reopened = JsonStore::open(&path);
        let loaded: Vec<Reminder> = reopened.load("silver_care_reminders").await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].time, "08:30");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("care.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonStore::open(&path);
        let reminders: Vec<Reminder> = store.load("silver_care_reminders").await;
        assert!(reminders.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_namespace_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("care.json");
        std::fs::write(&path, r#"{"silver_care_reminders": {"not": "a list"}}"#).unwrap();

        let store = JsonStore::open(&path);
        let reminders: Vec<Reminder> = store.load("silver_care_reminders").await;
        assert!(reminders.is_empty());
    }

    #[tokio::test]
    async fn test_namespaces_do_not_clobber_each_other() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("care.json");

        let store = JsonStore::open(&path);
        store
            .save("silver_care_reminders", &[Reminder::new("1", "08:30", "약")])
            .await
            .unwrap();
        store
            .save::<Reminder>("other", &[])
            .await
            .unwrap();

        let reminders: Vec<Reminder> = store.load("silver_care_reminders").await;
        assert_eq!(reminders.len(), 1);
    }

    #[test]
    fn test_allocate_id_bumps_past_taken() {
        let now = chrono::Utc::now().timestamp_millis();
        let taken = vec![now.to_string(), (now + 1).to_string()];
        let id = allocate_id(&taken);
        assert!(!taken.contains(&id));
        // Still a millisecond timestamp, just nudged forward.
        let parsed: i64 = id.parse().unwrap();
        assert!(parsed >= now);
    }
}
