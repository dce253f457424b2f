use crate::error::CoreError;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum teaser length, counted in characters.
pub const MAX_TEASER_CHARS: usize = 140;

/// How many recently shown topics are kept for deduplication.
pub const RECENT_HISTORY_LEN: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Business,
    Economics,
    Psychology,
    Philosophy,
    History,
    Art,
    Science,
    Health,
    Parenting,
    Politics,
    Culture,
    Nature,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Technology,
        Category::Business,
        Category::Economics,
        Category::Psychology,
        Category::Philosophy,
        Category::History,
        Category::Art,
        Category::Science,
        Category::Health,
        Category::Parenting,
        Category::Politics,
        Category::Culture,
        Category::Nature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Economics => "Economics",
            Category::Psychology => "Psychology",
            Category::Philosophy => "Philosophy",
            Category::History => "History",
            Category::Art => "Art",
            Category::Science => "Science",
            Category::Health => "Health",
            Category::Parenting => "Parenting",
            Category::Politics => "Politics",
            Category::Culture => "Culture",
            Category::Nature => "Nature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidInput {
                message: format!("unknown category '{s}'"),
            })
    }
}

/// A pre-authored topic and its one-line hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSeed {
    pub topic: String,
    pub teaser: String,
}

impl TopicSeed {
    pub fn new(topic: impl Into<String>, teaser: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            teaser: teaser.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub topic: String,
    pub teaser: String,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Light,
    #[default]
    Normal,
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Light => f.write_str("light"),
            Depth::Normal => f.write_str("normal"),
        }
    }
}

impl FromStr for Depth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Depth::Light),
            "normal" => Ok(Depth::Normal),
            _ => Err(CoreError::InvalidInput {
                message: format!("unknown depth '{s}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationContext {
    pub date: String,
    pub locale: String,
}

/// Body sent to the content provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub depth: Depth,
    pub user_interests: Vec<Category>,
    pub context: GenerationContext,
}

impl GenerationRequest {
    /// Builds a request stamped with the current UTC time.
    pub fn new(
        topic: impl Into<String>,
        depth: Depth,
        user_interests: Vec<Category>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            depth,
            user_interests,
            context: GenerationContext {
                date: Utc::now().to_rfc3339(),
                locale: locale.into(),
            },
        }
    }
}

/// Educational content that has passed the content contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub topic: String,
    pub teaser: String,
    pub eli7: String,
    pub deeper: String,
    pub example: String,
    pub why_it_matters: String,
    pub reflection_question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub selected_interests: Vec<Category>,
    pub depth: Depth,
    pub audio_enabled: bool,
    #[serde(default)]
    pub has_completed_onboarding: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            selected_interests: Vec::new(),
            depth: Depth::Normal,
            audio_enabled: true,
            has_completed_onboarding: false,
        }
    }
}

/// The topic picked for a given calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayTopic {
    pub date_key: String,
    pub topic: String,
    pub teaser: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,
}

impl TodayTopic {
    pub fn from_recommendation(date_key: impl Into<String>, result: RecommendationResult) -> Self {
        Self {
            date_key: date_key.into(),
            topic: result.topic,
            teaser: result.teaser,
            category: result.category,
            entry_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntrySource {
    DailyRecommendation,
    UserQuery,
}

/// A generated explanation kept in the user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicEntry {
    pub id: String,
    pub date: String,
    pub topic: String,
    pub teaser: String,
    pub eli7: String,
    pub deeper: String,
    pub example: String,
    pub why_it_matters: String,
    pub reflection_question: String,
    pub source: EntrySource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl TopicEntry {
    pub fn from_content(
        content: GeneratedContent,
        source: EntrySource,
        category: Option<Category>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: Utc::now().to_rfc3339(),
            topic: content.topic,
            teaser: content.teaser,
            eli7: content.eli7,
            deeper: content.deeper,
            example: content.example,
            why_it_matters: content.why_it_matters,
            reflection_question: content.reflection_question,
            source,
            category,
            is_favorite: false,
        }
    }
}

/// Formats a date as the `YYYY-MM-DD` key used for per-day records.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's key in UTC.
pub fn today_key() -> String {
    date_key(Utc::now().date_naive())
}
