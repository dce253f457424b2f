use crate::{Branch, Catalog, FastRandSource, Recommender, ScriptedSource};
use dailyconcept_core::{CatalogError, Category, TopicSeed};
use std::collections::HashSet;
use std::sync::Arc;

fn builtin() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("built-in catalog is well formed"))
}

fn seeded(seed: u64) -> Recommender<FastRandSource> {
    Recommender::with_source(builtin(), FastRandSource::with_seed(seed))
}

fn scripted(rolls: Vec<f64>, picks: Vec<usize>) -> Recommender<ScriptedSource> {
    Recommender::with_source(builtin(), ScriptedSource::new(rolls, picks))
}

fn history(topics: &[&str]) -> Vec<String> {
    topics.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_categories_and_topics() {
    let recommender = seeded(1);
    let categories = recommender.get_categories();
    assert!(categories.len() >= 13);
    assert!(categories.contains(&Category::Technology));
    assert!(categories.contains(&Category::Science));
    assert!(categories.contains(&Category::Psychology));

    let topics = recommender.get_topics_for_category("Technology");
    assert!(!topics.is_empty());
    assert!(recommender.get_topics_for_category("InvalidCategory").is_empty());
    assert!(recommender.get_topics_for_category("TECHNOLOGY").is_empty());
}

#[test]
fn test_interest_branch_is_exact() {
    let mut recommender = scripted(vec![0.5], vec![1, 0]);
    let (branch, result) = recommender
        .choose_with_branch(&[Category::Technology, Category::Science], &[])
        .unwrap();

    assert_eq!(branch, Branch::Interest);
    assert_eq!(result.category, Category::Science);
    assert_eq!(result.topic, "Evolution by Natural Selection");
}

#[test]
fn test_adjacent_branch_is_exact() {
    // base Technology -> neighbours [Science, Business] -> Business -> third seed
    let mut recommender = scripted(vec![0.75], vec![0, 1, 2]);
    let (branch, result) = recommender
        .choose_with_branch(&[Category::Technology, Category::Science], &[])
        .unwrap();

    assert_eq!(branch, Branch::Adjacent);
    assert_eq!(result.category, Category::Business);
    assert_eq!(result.topic, "Opportunity Cost");
}

#[test]
fn test_wildcard_branch_ignores_interests() {
    let mut recommender = scripted(vec![0.95], vec![12, 0]);
    let (branch, result) = recommender
        .choose_with_branch(&[Category::Technology], &[])
        .unwrap();

    assert_eq!(branch, Branch::Wildcard);
    assert_eq!(result.category, Category::Nature);
    assert_eq!(result.topic, "Symbiosis");
}

#[test]
fn test_branch_boundaries() {
    let mut recommender = scripted(vec![0.70, 0.90, 0.6999], vec![]);
    let interests = [Category::Art];

    let (branch, _) = recommender.choose_with_branch(&interests, &[]).unwrap();
    assert_eq!(branch, Branch::Adjacent);
    let (branch, _) = recommender.choose_with_branch(&interests, &[]).unwrap();
    assert_eq!(branch, Branch::Wildcard);
    let (branch, _) = recommender.choose_with_branch(&interests, &[]).unwrap();
    assert_eq!(branch, Branch::Interest);
}

#[test]
fn test_adjacent_without_neighbours_repicks_interest() {
    let catalog = Catalog::new(
        vec![
            (
                Category::Art,
                vec![TopicSeed::new("Cubism", "Many viewpoints at once")],
            ),
            (
                Category::Nature,
                vec![TopicSeed::new("Symbiosis", "Species that depend on each other")],
            ),
        ],
        vec![],
    )
    .unwrap();
    // base pick 0 (Art, no neighbours), re-pick 1 (Nature), seed 0
    let mut recommender = Recommender::with_source(
        Arc::new(catalog),
        ScriptedSource::new(vec![0.8], vec![0, 1, 0]),
    );

    let (branch, result) = recommender
        .choose_with_branch(&[Category::Art, Category::Nature], &[])
        .unwrap();
    assert_eq!(branch, Branch::Adjacent);
    assert_eq!(result.category, Category::Nature);
    assert_eq!(result.topic, "Symbiosis");
}

#[test]
fn test_history_shifts_pick_to_fresh_pool() {
    let mut recommender = scripted(vec![0.1], vec![0, 0]);
    let recent = history(&["Evolution by Natural Selection"]);

    let result = recommender
        .choose_topic_for_today(&[Category::Science], &recent)
        .unwrap();
    assert_eq!(result.topic, "The Big Bang");
}

#[test]
fn test_cold_start_uses_whole_catalog() {
    let mut recommender = scripted(vec![], vec![3, 0]);
    // history is not consulted on the cold path
    let recent = history(&["Confirmation Bias"]);

    let (branch, result) = recommender.choose_with_branch(&[], &recent).unwrap();
    assert_eq!(branch, Branch::Cold);
    assert_eq!(result.category, Category::Psychology);
    assert_eq!(result.topic, "Confirmation Bias");
}

#[test]
fn test_cold_start_returns_complete_result() {
    let mut recommender = seeded(3);
    for _ in 0..50 {
        let result = recommender.choose_topic_for_today(&[], &[]).unwrap();
        assert!(!result.topic.is_empty());
        assert!(!result.teaser.is_empty());
        let topics = recommender.catalog().topics(result.category);
        assert!(topics.iter().any(|seed| seed.topic == result.topic));
    }
}

#[test]
fn test_recent_topics_never_repeat() {
    let mut recommender = seeded(7);
    let recent = history(&["Quantum Computing", "Neural Networks"]);

    for _ in 0..1000 {
        let result = recommender
            .choose_topic_for_today(&[Category::Technology], &recent)
            .unwrap();
        assert_ne!(result.topic, "Quantum Computing");
        assert_ne!(result.topic, "Neural Networks");
    }
}

#[test]
fn test_exhausted_category_falls_back_to_full_pool() {
    let catalog = Catalog::new(
        vec![(
            Category::Art,
            vec![
                TopicSeed::new("Cubism", "Many viewpoints at once"),
                TopicSeed::new("Pop Art", "Consumer culture as fine art"),
            ],
        )],
        vec![],
    )
    .unwrap();
    let mut recommender =
        Recommender::with_source(Arc::new(catalog), FastRandSource::with_seed(11));
    let recent = history(&["Cubism", "Pop Art"]);

    for _ in 0..20 {
        let result = recommender
            .choose_topic_for_today(&[Category::Art], &recent)
            .unwrap();
        assert_eq!(result.category, Category::Art);
        assert!(result.topic == "Cubism" || result.topic == "Pop Art");
    }
}

#[test]
fn test_empty_category_is_reported_not_panicking() {
    let catalog = Catalog::new(vec![(Category::Art, vec![])], vec![]).unwrap();
    let mut recommender =
        Recommender::with_source(Arc::new(catalog), FastRandSource::with_seed(5));

    let result = recommender.choose_topic_for_today(&[Category::Art], &[]);
    assert!(matches!(result, Err(CatalogError::EmptyCategory { .. })));

    let result = recommender.choose_topic_for_today(&[], &[]);
    assert!(matches!(result, Err(CatalogError::EmptyCategory { .. })));
}

#[test]
fn test_alternatives_are_distinct_and_exclude_current() {
    for seed in 0..20 {
        let mut recommender = seeded(seed);
        let alternatives = recommender
            .get_alternative_topics("Quantum Computing", &[Category::Technology], &[], 2)
            .unwrap();

        assert_eq!(alternatives.len(), 2);
        assert!(alternatives.iter().all(|a| a.topic != "Quantum Computing"));
        assert_ne!(alternatives[0].topic, alternatives[1].topic);
    }
}

#[test]
fn test_alternatives_stop_on_tiny_catalog() {
    let catalog = Catalog::new(
        vec![(
            Category::Art,
            vec![
                TopicSeed::new("Cubism", "Many viewpoints at once"),
                TopicSeed::new("Pop Art", "Consumer culture as fine art"),
            ],
        )],
        vec![],
    )
    .unwrap();
    let mut recommender =
        Recommender::with_source(Arc::new(catalog), FastRandSource::with_seed(9));

    let alternatives = recommender
        .get_alternative_topics("Cubism", &[Category::Art], &[], 5)
        .unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0].topic, "Pop Art");
}

#[test]
fn test_interest_share_dominates() {
    let mut recommender = seeded(42);
    let interests = [Category::Technology, Category::Science];
    let mut hits = 0;
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let result = recommender.choose_topic_for_today(&interests, &[]).unwrap();
        if interests.contains(&result.category) {
            hits += 1;
        }
        seen.insert(result.category);
    }

    // ~80% expected: 70% direct plus adjacency and wildcard overlap
    assert!(hits > 650, "only {hits} of 1000 within interests");
    assert!(hits < 950, "{hits} of 1000 within interests, exploration missing");
    assert!(seen.len() > 2);
}
