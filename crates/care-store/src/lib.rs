//! JSON-file persistence layer for the care companion.
//!
//! All state lives in one JSON file of namespaced record arrays, mirroring
//! the simple key-value layout the companion has always used: voice profiles
//! under `silver_care_voice_profiles` and reminders under
//! `silver_care_reminders`. The [`ProfileStore`] and [`ReminderStore`] traits
//! keep callers independent of the backing file; [`JsonProfileStore`] and
//! [`JsonReminderStore`] are the shipped implementations over a shared
//! [`JsonStore`].
//!
//! Writes are read-modify-write with no cross-process locking; two processes
//! sharing one file can overwrite each other.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use care_core::VoiceRole;
//! use care_store::{JsonProfileStore, JsonReminderStore, JsonStore, ProfileStore, ReminderStore};
//!
//! #[tokio::main]
//! async fn main() -> care_store::Result<()> {
//!     let store = Arc::new(JsonStore::open("data/care.json"));
//!
//!     let profiles = JsonProfileStore::new(store.clone());
//!     profiles
//!         .save(VoiceRole::Child, "아들", Some("voice-abc123".to_string()))
//!         .await?;
//!
//!     let reminders = JsonReminderStore::new(store);
//!     reminders.add("08:30", "아침 약 드세요").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod kv;
pub mod profiles;
pub mod reminders;

pub use error::{Result, StoreError};
pub use kv::JsonStore;
pub use profiles::{JsonProfileStore, ProfileStore, PROFILES_NAMESPACE};
pub use reminders::{JsonReminderStore, ReminderStore, REMINDERS_NAMESPACE};
