use super::*;
use dailyconcept_core::{Category, Depth, EntrySource, GeneratedContent};
use tempfile::TempDir;

fn content(topic: &str) -> GeneratedContent {
    GeneratedContent {
        topic: topic.to_string(),
        teaser: format!("A short look at {topic}"),
        eli7: "Simple words.".to_string(),
        deeper: "More detail.".to_string(),
        example: "An everyday case.".to_string(),
        why_it_matters: "It shows up everywhere.".to_string(),
        reflection_question: "Where have you seen this?".to_string(),
    }
}

fn entry(topic: &str) -> TopicEntry {
    TopicEntry::from_content(
        content(topic),
        EntrySource::DailyRecommendation,
        Some(Category::Science),
    )
}

/// Accepts reads, rejects every write.
struct ReadOnlyBackend;

impl KeyValueBackend for ReadOnlyBackend {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, key: &str, _value: String) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed {
            key: key.to_string(),
            reason: "read-only".to_string(),
        })
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable {
            reason: "read-only".to_string(),
        })
    }
}

#[tokio::test]
async fn test_preferences_default_then_roundtrip() {
    let store = TopicStore::in_memory();
    assert_eq!(store.get_preferences().await, UserPreferences::default());

    let prefs = UserPreferences {
        selected_interests: vec![Category::History, Category::Art],
        depth: Depth::Light,
        audio_enabled: false,
        has_completed_onboarding: true,
    };
    store.set_preferences(&prefs).await.unwrap();
    assert_eq!(store.get_preferences().await, prefs);
}

#[tokio::test]
async fn test_corrupt_records_degrade_to_defaults() {
    let store = TopicStore::in_memory();
    for key in [PREFERENCES_KEY, ENTRIES_KEY, RECENT_TOPICS_KEY] {
        store
            .backend()
            .set(key, "{not json".to_string())
            .await
            .unwrap();
    }
    store
        .backend()
        .set(&today_topic_key("2026-01-01"), "[]".to_string())
        .await
        .unwrap();

    assert_eq!(store.get_preferences().await, UserPreferences::default());
    assert!(store.get_entries().await.is_empty());
    assert!(store.get_last_14_topics().await.is_empty());
    assert!(store.get_today_topic("2026-01-01").await.is_none());
}

#[tokio::test]
async fn test_today_topic_is_keyed_by_date() {
    let store = TopicStore::in_memory();
    let topic = TodayTopic {
        date_key: "2026-03-14".to_string(),
        topic: "Entropy".to_string(),
        teaser: "Why disorder wins".to_string(),
        category: Category::Science,
        entry_id: None,
    };
    store.set_today_topic(&topic).await.unwrap();

    assert_eq!(store.get_today_topic("2026-03-14").await, Some(topic));
    assert!(store.get_today_topic("2026-03-15").await.is_none());
}

#[tokio::test]
async fn test_add_entry_prepends_and_tracks_recent_topics() {
    let store = TopicStore::in_memory();
    store.add_entry(&entry("Entropy")).await.unwrap();
    store.add_entry(&entry("Inflation")).await.unwrap();
    store.add_entry(&entry("Entropy")).await.unwrap();

    let topics: Vec<String> = store
        .get_entries()
        .await
        .into_iter()
        .map(|e| e.topic)
        .collect();
    assert_eq!(topics, ["Entropy", "Inflation", "Entropy"]);
    assert_eq!(store.get_last_14_topics().await, ["Entropy", "Inflation"]);
}

#[tokio::test]
async fn test_recent_topics_capped_at_fourteen() {
    let store = TopicStore::in_memory();
    for i in 0..20 {
        store.add_entry(&entry(&format!("Topic {i}"))).await.unwrap();
    }

    let recent = store.get_last_14_topics().await;
    assert_eq!(recent.len(), RECENT_HISTORY_LEN);
    assert_eq!(recent.first().map(String::as_str), Some("Topic 19"));
    assert_eq!(recent.last().map(String::as_str), Some("Topic 6"));
    assert_eq!(store.get_entries().await.len(), 20);
}

#[tokio::test]
async fn test_entry_lookup_and_favorite() {
    let store = TopicStore::in_memory();
    let saved = entry("Compound Interest");
    store.add_entry(&saved).await.unwrap();

    assert_eq!(store.get_entry_by_id(&saved.id).await, Some(saved.clone()));
    assert!(store.get_entry_by_id("missing").await.is_none());

    assert!(store.set_favorite(&saved.id, true).await.unwrap());
    assert!(store.get_entry_by_id(&saved.id).await.unwrap().is_favorite);
    assert!(!store.set_favorite("missing", true).await.unwrap());
}

#[tokio::test]
async fn test_search_matches_topic_or_teaser() {
    let store = TopicStore::in_memory();
    store.add_entry(&entry("Entropy")).await.unwrap();
    store.add_entry(&entry("Inflation")).await.unwrap();

    let hits = store.search_entries("ENTRO").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].topic, "Entropy");

    assert_eq!(store.search_entries("short look").await.len(), 2);
    assert_eq!(store.search_entries("  ").await.len(), 2);
    assert!(store.search_entries("photosynthesis").await.is_empty());
}

#[tokio::test]
async fn test_clear_all() {
    let store = TopicStore::in_memory();
    store.add_entry(&entry("Entropy")).await.unwrap();
    store.clear_all().await.unwrap();

    assert!(store.get_entries().await.is_empty());
    assert!(store.get_last_14_topics().await.is_empty());
}

#[tokio::test]
async fn test_write_failures_propagate() {
    let store = TopicStore::new(ReadOnlyBackend);

    let error = store.add_entry(&entry("Entropy")).await.unwrap_err();
    assert!(matches!(
        error,
        CoreError::Storage(StorageError::WriteFailed { .. })
    ));
    assert!(store
        .set_preferences(&UserPreferences::default())
        .await
        .is_err());
    assert!(store.clear_all().await.is_err());
}

#[tokio::test]
async fn test_file_backend_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let saved = entry("Opportunity Cost");

    {
        let store = TopicStore::open(dir.path());
        store.add_entry(&saved).await.unwrap();
        store
            .set_preferences(&UserPreferences {
                has_completed_onboarding: true,
                ..UserPreferences::default()
            })
            .await
            .unwrap();
    }

    let reopened = TopicStore::open(dir.path());
    assert_eq!(reopened.get_entries().await, vec![saved]);
    assert!(reopened.get_preferences().await.has_completed_onboarding);
    assert_eq!(
        reopened.get_last_14_topics().await,
        ["Opportunity Cost"]
    );
}

#[tokio::test]
async fn test_file_backend_handles_missing_and_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::new(dir.path().join("nested").join("store.json"));
    assert_eq!(backend.get("anything").await.unwrap(), None);

    backend.set("k", "v".to_string()).await.unwrap();
    assert_eq!(backend.get("k").await.unwrap(), Some("v".to_string()));

    tokio::fs::write(backend.path(), "garbage").await.unwrap();
    assert!(matches!(
        backend.get("k").await,
        Err(StorageError::CorruptValue { .. })
    ));

    let store = TopicStore::new(backend);
    assert!(store.get_entries().await.is_empty());

    store.add_entry(&entry("Entropy")).await.unwrap();
    assert_eq!(store.get_entries().await.len(), 1);
}

#[tokio::test]
async fn test_file_backend_clear() {
    let dir = TempDir::new().unwrap();
    let store = TopicStore::open(dir.path());
    store.add_entry(&entry("Symbiosis")).await.unwrap();
    store.clear_all().await.unwrap();

    let reopened = TopicStore::open(dir.path());
    assert!(reopened.get_entries().await.is_empty());
}

#[tokio::test]
async fn test_entries_keep_camel_case_layout() {
    let store = TopicStore::in_memory();
    store.add_entry(&entry("Entropy")).await.unwrap();

    let raw = store.backend().get(ENTRIES_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["source"], "dailyRecommendation");
    assert_eq!(value[0]["isFavorite"], false);
    assert!(value[0]["whyItMatters"].is_string());
    assert!(chrono::DateTime::parse_from_rfc3339(value[0]["date"].as_str().unwrap()).is_ok());
}
