//! Reminder storage.

use std::sync::Arc;

use async_trait::async_trait;
use care_core::Reminder;

use crate::kv::{allocate_id, JsonStore};
use crate::{Result, StoreError};

/// Namespace key for reminders.
pub const REMINDERS_NAMESPACE: &str = "silver_care_reminders";

/// Repository of daily reminders.
///
/// The scheduler only reads; all mutation comes from explicit user action.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// All reminders, enabled or not.
    async fn list(&self) -> Vec<Reminder>;

    /// Create an enabled reminder for the given "HH:MM" wall-clock time.
    async fn add(&self, time: &str, message: &str) -> Result<Reminder>;

    /// Enable or disable a reminder, returning the updated record.
    async fn set_enabled(&self, id: &str, enabled: bool) -> Result<Reminder>;

    /// Delete a reminder by id.
    async fn remove(&self, id: &str) -> Result<()>;
}

/// JSON-file backed [`ReminderStore`].
#[derive(Debug, Clone)]
pub struct JsonReminderStore {
    store: Arc<JsonStore>,
}

impl JsonReminderStore {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReminderStore for JsonReminderStore {
    async fn list(&self) -> Vec<Reminder> {
        self.store.load(REMINDERS_NAMESPACE).await
    }

    async fn add(&self, time: &str, message: &str) -> Result<Reminder> {
        let mut reminders = self.list().await;
        let taken: Vec<String> = reminders.iter().map(|r| r.id.clone()).collect();
        let reminder = Reminder::new(allocate_id(&taken), time, message);
        reminders.push(reminder.clone());

        self.store.save(REMINDERS_NAMESPACE, &reminders).await?;
        Ok(reminder)
    }

    async fn set_enabled(&self, id: &str, enabled: bool) -> Result<Reminder> {
        let mut reminders = self.list().await;
        let reminder = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "reminder",
                id: id.to_string(),
            })?;
        reminder.enabled = enabled;
        let updated = reminder.clone();

        self.store.save(REMINDERS_NAMESPACE, &reminders).await?;
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut reminders = self.list().await;
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            return Err(StoreError::NotFound {
                entity: "reminder",
                id: id.to_string(),
            });
        }

        self.store.save(REMINDERS_NAMESPACE, &reminders).await?;
        Ok(())
    }
}
