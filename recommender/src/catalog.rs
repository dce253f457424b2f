//! Immutable category, adjacency and seed-topic reference data.

use crate::seeds::{ADJACENCY, SEEDS};
use dailyconcept_core::{CatalogError, Category, TopicSeed, MAX_TEASER_CHARS};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Minimum number of seeds the built-in catalog carries per category.
pub const MIN_SEEDS_PER_CATEGORY: usize = 10;

/// Categories, their seed topics and the "related category" graph.
///
/// Built once at startup and shared read-only. Category order is the order
/// the categories were supplied in.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    seeds: HashMap<Category, Vec<TopicSeed>>,
    adjacency: HashMap<Category, Vec<Category>>,
}

impl Catalog {
    /// Checks that neighbours exist, topic titles are unique per category and
    /// teasers fit in [`MAX_TEASER_CHARS`].
    pub fn new(
        entries: Vec<(Category, Vec<TopicSeed>)>,
        adjacency: Vec<(Category, Vec<Category>)>,
    ) -> Result<Self, CatalogError> {
        let mut categories = Vec::with_capacity(entries.len());
        let mut seeds = HashMap::with_capacity(entries.len());

        for (category, topics) in entries {
            let mut titles = HashSet::new();
            for seed in &topics {
                if !titles.insert(seed.topic.as_str()) {
                    return Err(CatalogError::DuplicateTopic {
                        category: category.to_string(),
                        topic: seed.topic.clone(),
                    });
                }
                let length = seed.teaser.chars().count();
                if length > MAX_TEASER_CHARS {
                    return Err(CatalogError::TeaserTooLong {
                        topic: seed.topic.clone(),
                        length,
                        max: MAX_TEASER_CHARS,
                    });
                }
            }
            if seeds.insert(category, topics).is_none() {
                categories.push(category);
            }
        }

        let mut graph = HashMap::with_capacity(adjacency.len());
        for (category, neighbours) in adjacency {
            for neighbour in &neighbours {
                if !seeds.contains_key(neighbour) {
                    return Err(CatalogError::UnknownAdjacentCategory {
                        category: category.to_string(),
                        neighbour: neighbour.to_string(),
                    });
                }
            }
            graph.insert(category, neighbours);
        }

        Ok(Self {
            categories,
            seeds,
            adjacency: graph,
        })
    }

    /// The catalog shipped with the app.
    pub fn builtin() -> Result<Self, CatalogError> {
        let entries = SEEDS
            .iter()
            .map(|(category, rows)| {
                let topics = rows
                    .iter()
                    .map(|(topic, teaser)| TopicSeed::new(*topic, *teaser))
                    .collect();
                (*category, topics)
            })
            .collect();
        let adjacency = ADJACENCY
            .iter()
            .map(|(category, neighbours)| (*category, neighbours.to_vec()))
            .collect();

        let catalog = Self::new(entries, adjacency)?;
        catalog.ensure_min_seeds(MIN_SEEDS_PER_CATEGORY)?;
        debug!(
            "Loaded built-in catalog: {} categories, {} topics",
            catalog.categories.len(),
            catalog.topic_count()
        );
        Ok(catalog)
    }

    pub fn ensure_min_seeds(&self, min: usize) -> Result<(), CatalogError> {
        for category in &self.categories {
            let count = self.topics(*category).len();
            if count < min {
                return Err(CatalogError::TooFewSeeds {
                    category: category.to_string(),
                    count,
                    min,
                });
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn contains(&self, category: Category) -> bool {
        self.seeds.contains_key(&category)
    }

    pub fn topics(&self, category: Category) -> &[TopicSeed] {
        self.seeds.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lookup by exact display name; anything else yields an empty slice.
    pub fn topics_by_name(&self, name: &str) -> &[TopicSeed] {
        self.categories
            .iter()
            .find(|category| category.as_str() == name)
            .map(|category| self.topics(*category))
            .unwrap_or(&[])
    }

    pub fn adjacent(&self, category: Category) -> &[Category] {
        self.adjacency
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn topic_count(&self) -> usize {
        self.seeds.values().map(Vec::len).sum()
    }
}
