pub mod catalog;
pub mod random;
mod seeds;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, MIN_SEEDS_PER_CATEGORY};
pub use random::{FastRandSource, RandomSource, ScriptedSource};

use dailyconcept_core::{CatalogError, Category, RecommendationResult, TopicSeed};
use std::sync::Arc;
use tracing::debug;

/// Share of draws that stay inside the user's interests.
pub const INTEREST_THRESHOLD: f64 = 0.70;
/// Draws below this (and above [`INTEREST_THRESHOLD`]) explore a neighbour.
pub const ADJACENT_THRESHOLD: f64 = 0.90;
/// Draw budget per requested alternative.
pub const ALTERNATIVE_ATTEMPTS_PER_SLOT: usize = 10;

/// How a category was resolved for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// No interests known yet.
    Cold,
    Interest,
    Adjacent,
    Wildcard,
}

/// Picks daily topics from a shared catalog.
///
/// Holds no state beyond the catalog and the random source; the recent-topic
/// history is passed in on every call and never modified.
pub struct Recommender<R = FastRandSource> {
    catalog: Arc<Catalog>,
    rng: R,
}

impl Recommender<FastRandSource> {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_source(catalog, FastRandSource::new())
    }
}

impl<R: RandomSource> Recommender<R> {
    pub fn with_source(catalog: Arc<Catalog>, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn choose_topic_for_today(
        &mut self,
        user_interests: &[Category],
        recent_topics: &[String],
    ) -> Result<RecommendationResult, CatalogError> {
        self.choose_with_branch(user_interests, recent_topics)
            .map(|(_, result)| result)
    }

    pub fn choose_with_branch(
        &mut self,
        user_interests: &[Category],
        recent_topics: &[String],
    ) -> Result<(Branch, RecommendationResult), CatalogError> {
        if user_interests.is_empty() {
            let category = pick_category(&mut self.rng, self.catalog.categories())?;
            let seeds = self.catalog.topics(category);
            if seeds.is_empty() {
                return Err(CatalogError::EmptyCategory {
                    category: category.to_string(),
                });
            }
            let seed = &seeds[self.rng.pick_index(seeds.len())];
            debug!("Cold start recommendation: {} ({})", seed.topic, category);
            return Ok((Branch::Cold, to_result(seed, category)));
        }

        let (branch, category) = self.resolve_category(user_interests)?;
        let seed = self.pick_seed(category, recent_topics)?;
        debug!(
            "Recommended {} from {} via {:?} branch",
            seed.topic, category, branch
        );
        Ok((branch, seed))
    }

    /// Suggestions for "pick another": never `current_topic`, never the same
    /// topic twice. May return fewer than `count` when the draws keep colliding.
    pub fn get_alternative_topics(
        &mut self,
        current_topic: &str,
        user_interests: &[Category],
        recent_topics: &[String],
        count: usize,
    ) -> Result<Vec<RecommendationResult>, CatalogError> {
        let max_attempts = count.saturating_mul(ALTERNATIVE_ATTEMPTS_PER_SLOT);
        let mut alternatives: Vec<RecommendationResult> = Vec::with_capacity(count);
        let mut attempts = 0;

        while alternatives.len() < count && attempts < max_attempts {
            attempts += 1;
            let candidate = self.choose_topic_for_today(user_interests, recent_topics)?;
            if candidate.topic == current_topic
                || alternatives.iter().any(|a| a.topic == candidate.topic)
            {
                continue;
            }
            alternatives.push(candidate);
        }

        if alternatives.len() < count {
            debug!(
                "Only found {}/{} alternatives to {} after {} draws",
                alternatives.len(),
                count,
                current_topic,
                attempts
            );
        }
        Ok(alternatives)
    }

    pub fn get_categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    pub fn get_topics_for_category(&self, category: &str) -> &[TopicSeed] {
        self.catalog.topics_by_name(category)
    }

    fn resolve_category(
        &mut self,
        interests: &[Category],
    ) -> Result<(Branch, Category), CatalogError> {
        let roll = self.rng.next_f64();

        if roll < INTEREST_THRESHOLD {
            let category = pick_category(&mut self.rng, interests)?;
            Ok((Branch::Interest, category))
        } else if roll < ADJACENT_THRESHOLD {
            let base = pick_category(&mut self.rng, interests)?;
            let neighbours = self.catalog.adjacent(base);
            let category = if neighbours.is_empty() {
                pick_category(&mut self.rng, interests)?
            } else {
                neighbours[self.rng.pick_index(neighbours.len())]
            };
            Ok((Branch::Adjacent, category))
        } else {
            let category = pick_category(&mut self.rng, self.catalog.categories())?;
            Ok((Branch::Wildcard, category))
        }
    }

    fn pick_seed(
        &mut self,
        category: Category,
        recent_topics: &[String],
    ) -> Result<RecommendationResult, CatalogError> {
        let seeds = self.catalog.topics(category);
        if seeds.is_empty() {
            return Err(CatalogError::EmptyCategory {
                category: category.to_string(),
            });
        }

        let fresh: Vec<&TopicSeed> = seeds
            .iter()
            .filter(|seed| !recent_topics.iter().any(|recent| *recent == seed.topic))
            .collect();

        let seed = if fresh.is_empty() {
            debug!("Every {} topic was shown recently, ignoring history", category);
            &seeds[self.rng.pick_index(seeds.len())]
        } else {
            fresh[self.rng.pick_index(fresh.len())]
        };
        Ok(to_result(seed, category))
    }
}

fn pick_category<R: RandomSource>(
    rng: &mut R,
    from: &[Category],
) -> Result<Category, CatalogError> {
    if from.is_empty() {
        return Err(CatalogError::EmptyCategory {
            category: "<none>".to_string(),
        });
    }
    Ok(from[rng.pick_index(from.len())])
}

fn to_result(seed: &TopicSeed, category: Category) -> RecommendationResult {
    RecommendationResult {
        topic: seed.topic.clone(),
        teaser: seed.teaser.clone(),
        category,
    }
}
