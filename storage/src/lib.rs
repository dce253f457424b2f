mod backend;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};

use dailyconcept_core::{
    CoreError, ErrorExt, StorageError, TodayTopic, TopicEntry, UserPreferences,
    RECENT_HISTORY_LEN,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

const PREFERENCES_KEY: &str = "user_preferences";
const ENTRIES_KEY: &str = "topic_entries";
const RECENT_TOPICS_KEY: &str = "last_14_topics";
const TODAY_TOPIC_PREFIX: &str = "today_topic_";
const STORE_FILE_NAME: &str = "store.json";

fn today_topic_key(date_key: &str) -> String {
    format!("{TODAY_TOPIC_PREFIX}{date_key}")
}

/// Typed persistence for preferences, per-day topics, and the entry history.
///
/// Reads never fail: a missing or unreadable record degrades to its default
/// and is logged. Writes propagate their errors.
pub struct TopicStore<B> {
    backend: B,
}

impl TopicStore<FileBackend> {
    /// File-backed store under `data_dir`.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(STORE_FILE_NAME);
        info!("Opening topic store at {}", path.display());
        Self::new(FileBackend::new(path))
    }
}

impl TopicStore<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl<B: KeyValueBackend> TopicStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn get_preferences(&self) -> UserPreferences {
        self.read_or_default(PREFERENCES_KEY).await
    }

    pub async fn set_preferences(&self, preferences: &UserPreferences) -> Result<(), CoreError> {
        self.write(PREFERENCES_KEY, preferences).await
    }

    pub async fn get_today_topic(&self, date_key: &str) -> Option<TodayTopic> {
        self.read_logged(&today_topic_key(date_key)).await
    }

    pub async fn set_today_topic(&self, topic: &TodayTopic) -> Result<(), CoreError> {
        self.write(&today_topic_key(&topic.date_key), topic).await
    }

    /// Newest first.
    pub async fn get_entries(&self) -> Vec<TopicEntry> {
        self.read_or_default(ENTRIES_KEY).await
    }

    /// Prepends the entry and moves its topic to the front of the recent list.
    pub async fn add_entry(&self, entry: &TopicEntry) -> Result<(), CoreError> {
        let mut entries = self.get_entries().await;
        entries.insert(0, entry.clone());
        self.write(ENTRIES_KEY, &entries).await?;

        if let Err(e) = self.push_recent_topic(&entry.topic).await {
            e.log_warn();
        }
        debug!("Stored entry {} for '{}'", entry.id, entry.topic);
        Ok(())
    }

    pub async fn get_entry_by_id(&self, id: &str) -> Option<TopicEntry> {
        self.get_entries().await.into_iter().find(|e| e.id == id)
    }

    /// Applies `update` to the entry with `id`. Returns whether it was found.
    pub async fn update_entry<F>(&self, id: &str, update: F) -> Result<bool, CoreError>
    where
        F: FnOnce(&mut TopicEntry),
    {
        let mut entries = self.get_entries().await;
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        update(entry);
        self.write(ENTRIES_KEY, &entries).await?;
        Ok(true)
    }

    pub async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<bool, CoreError> {
        self.update_entry(id, |entry| entry.is_favorite = is_favorite)
            .await
    }

    /// Most recent first, at most 14 and without duplicates.
    pub async fn get_last_14_topics(&self) -> Vec<String> {
        self.read_or_default(RECENT_TOPICS_KEY).await
    }

    /// Case-insensitive substring match on topic or teaser.
    pub async fn search_entries(&self, query: &str) -> Vec<TopicEntry> {
        let needle = query.trim().to_lowercase();
        let entries = self.get_entries().await;
        if needle.is_empty() {
            return entries;
        }
        entries
            .into_iter()
            .filter(|e| {
                e.topic.to_lowercase().contains(&needle)
                    || e.teaser.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub async fn clear_all(&self) -> Result<(), CoreError> {
        self.backend.clear().await?;
        info!("Cleared all stored data");
        Ok(())
    }

    async fn push_recent_topic(&self, topic: &str) -> Result<(), CoreError> {
        let mut recent = self.get_last_14_topics().await;
        recent.retain(|t| t != topic);
        recent.insert(0, topic.to_string());
        recent.truncate(RECENT_HISTORY_LEN);
        self.write(RECENT_TOPICS_KEY, &recent).await
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|_| StorageError::CorruptValue {
                key: key.to_string(),
            })
    }

    async fn read_logged<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.read(key).await {
            Ok(value) => value,
            Err(e) => {
                e.log_warn();
                None
            }
        }
    }

    async fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.read_logged(key).await.unwrap_or_default()
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
