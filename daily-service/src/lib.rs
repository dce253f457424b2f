//! The daily loop: pick today's concept, offer alternatives, and turn a topic
//! into a stored explanation.

use content_generator::{ContentGenerationService, ContentProvider};
use dailyconcept_core::{
    Category, CoreError, Depth, EntrySource, GenerationRequest, RecommendationResult, TodayTopic,
    TopicEntry, UserPreferences,
};
use recommender::{FastRandSource, RandomSource, Recommender};
use storage::{KeyValueBackend, TopicStore};
use tracing::{debug, info};

pub const ALTERNATIVES_COUNT: usize = 2;
pub const MIN_ONBOARDING_INTERESTS: usize = 3;

pub struct DailyService<B, P, R = FastRandSource> {
    store: TopicStore<B>,
    recommender: Recommender<R>,
    generator: ContentGenerationService<P>,
    locale: String,
}

impl<B, P, R> DailyService<B, P, R>
where
    B: KeyValueBackend,
    P: ContentProvider,
    R: RandomSource,
{
    pub fn new(
        store: TopicStore<B>,
        recommender: Recommender<R>,
        generator: ContentGenerationService<P>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            store,
            recommender,
            generator,
            locale: locale.into(),
        }
    }

    pub fn store(&self) -> &TopicStore<B> {
        &self.store
    }

    pub async fn needs_onboarding(&self) -> bool {
        !self.store.get_preferences().await.has_completed_onboarding
    }

    pub async fn complete_onboarding(
        &self,
        interests: &[Category],
    ) -> Result<UserPreferences, CoreError> {
        let mut selected: Vec<Category> = Vec::with_capacity(interests.len());
        for interest in interests {
            if !selected.contains(interest) {
                selected.push(*interest);
            }
        }
        if selected.len() < MIN_ONBOARDING_INTERESTS {
            return Err(CoreError::InvalidInput {
                message: format!("Please select at least {MIN_ONBOARDING_INTERESTS} interests"),
            });
        }

        let mut preferences = self.store.get_preferences().await;
        preferences.selected_interests = selected;
        preferences.has_completed_onboarding = true;
        self.store.set_preferences(&preferences).await?;
        info!(
            "Onboarding complete with {} interests",
            preferences.selected_interests.len()
        );
        Ok(preferences)
    }

    pub async fn update_settings(
        &self,
        depth: Depth,
        audio_enabled: bool,
    ) -> Result<UserPreferences, CoreError> {
        let mut preferences = self.store.get_preferences().await;
        preferences.depth = depth;
        preferences.audio_enabled = audio_enabled;
        self.store.set_preferences(&preferences).await?;
        Ok(preferences)
    }

    /// The day's topic, recommending and persisting one on first access.
    pub async fn load_today_topic(&mut self, date_key: &str) -> Result<TodayTopic, CoreError> {
        if let Some(topic) = self.store.get_today_topic(date_key).await {
            debug!("Reusing stored topic for {}: {}", date_key, topic.topic);
            return Ok(topic);
        }

        let preferences = self.store.get_preferences().await;
        let recent = self.store.get_last_14_topics().await;
        let result = self
            .recommender
            .choose_topic_for_today(&preferences.selected_interests, &recent)?;

        let topic = TodayTopic::from_recommendation(date_key, result);
        self.store.set_today_topic(&topic).await?;
        info!("Today's topic for {}: {} ({})", date_key, topic.topic, topic.category);
        Ok(topic)
    }

    pub async fn pick_another(
        &mut self,
        date_key: &str,
    ) -> Result<Vec<RecommendationResult>, CoreError> {
        let current = self.load_today_topic(date_key).await?;
        let preferences = self.store.get_preferences().await;
        let recent = self.store.get_last_14_topics().await;
        let alternatives = self.recommender.get_alternative_topics(
            &current.topic,
            &preferences.selected_interests,
            &recent,
            ALTERNATIVES_COUNT,
        )?;
        Ok(alternatives)
    }

    /// Catalog lookup by title, ignoring case.
    pub fn find_topic(&self, title: &str) -> Option<RecommendationResult> {
        let catalog = self.recommender.catalog();
        let title = title.trim();
        catalog.categories().iter().find_map(|&category| {
            catalog
                .topics(category)
                .iter()
                .find(|seed| seed.topic.eq_ignore_ascii_case(title))
                .map(|seed| RecommendationResult {
                    topic: seed.topic.clone(),
                    teaser: seed.teaser.clone(),
                    category,
                })
        })
    }

    pub async fn select_alternative(
        &self,
        date_key: &str,
        choice: RecommendationResult,
    ) -> Result<TodayTopic, CoreError> {
        let topic = TodayTopic::from_recommendation(date_key, choice);
        self.store.set_today_topic(&topic).await?;
        info!("Switched topic for {} to {}", date_key, topic.topic);
        Ok(topic)
    }

    /// Explanation for the day's topic. Generated at most once per day unless
    /// the linked entry has gone missing.
    pub async fn teach_me_today(&mut self, date_key: &str) -> Result<TopicEntry, CoreError> {
        let mut today = self.load_today_topic(date_key).await?;

        if let Some(entry_id) = today.entry_id.as_deref() {
            if let Some(entry) = self.store.get_entry_by_id(entry_id).await {
                return Ok(entry);
            }
            debug!("Linked entry {} is gone, regenerating", entry_id);
        }

        let entry = self
            .generate_entry(&today.topic, EntrySource::DailyRecommendation, Some(today.category))
            .await?;
        today.entry_id = Some(entry.id.clone());
        self.store.set_today_topic(&today).await?;
        Ok(entry)
    }

    pub async fn teach_me_query(&self, query: &str) -> Result<TopicEntry, CoreError> {
        let topic = query.trim();
        if topic.is_empty() {
            return Err(CoreError::InvalidInput {
                message: "Query must not be empty".to_string(),
            });
        }
        self.generate_entry(topic, EntrySource::UserQuery, None).await
    }

    pub async fn history(&self, query: &str) -> Vec<TopicEntry> {
        if query.trim().is_empty() {
            self.store.get_entries().await
        } else {
            self.store.search_entries(query).await
        }
    }

    /// Returns the new favourite state.
    pub async fn toggle_favorite(&self, entry_id: &str) -> Result<bool, CoreError> {
        let mut is_favorite = false;
        let found = self
            .store
            .update_entry(entry_id, |entry| {
                entry.is_favorite = !entry.is_favorite;
                is_favorite = entry.is_favorite;
            })
            .await?;
        if !found {
            return Err(CoreError::NotFound {
                resource: format!("entry {entry_id}"),
            });
        }
        Ok(is_favorite)
    }

    pub async fn clear_all(&self) -> Result<(), CoreError> {
        self.store.clear_all().await
    }

    async fn generate_entry(
        &self,
        topic: &str,
        source: EntrySource,
        category: Option<Category>,
    ) -> Result<TopicEntry, CoreError> {
        let preferences = self.store.get_preferences().await;
        let request = GenerationRequest::new(
            topic,
            preferences.depth,
            preferences.selected_interests,
            self.locale.clone(),
        );
        let content = self.generator.generate(&request).await?;
        let entry = TopicEntry::from_content(content, source, category);
        self.store.add_entry(&entry).await?;
        info!("Stored explanation {} for '{}'", entry.id, entry.topic);
        Ok(entry)
    }
}
