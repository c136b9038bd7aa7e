//! Tests for the `RecommendationEngine`.

use bazaar_core::test_support::{CannedExtractor, MemoryCatalog};
use bazaar_core::{Device, Item, Season, TimeOfDay};
use rstest::{fixture, rstest};

use super::*;

/// Three users over five products; `user_1` has not touched c or d.
#[fixture]
fn interactions() -> InteractionMatrix {
    InteractionMatrix::from_rows(
        vec![
            "product_a".into(),
            "product_b".into(),
            "product_c".into(),
            "product_d".into(),
            "product_e".into(),
        ],
        [
            ("user_1".to_owned(), vec![5.0, 3.0, 0.0, 0.0, 4.0]),
            ("user_2".to_owned(), vec![0.0, 4.0, 1.0, 2.0, 0.0]),
            ("user_3".to_owned(), vec![3.0, 0.0, 0.0, 4.0, 2.0]),
        ],
    )
    .expect("valid fixture matrix")
}

/// One catalog entry per demo category, aligned with the interaction ids.
#[fixture]
fn catalog() -> MemoryCatalog {
    MemoryCatalog::with_items([
        Item::new("product_a", "Warm Clothing", "down jacket"),
        Item::new("product_b", "Beach Wear", "swim shorts"),
        Item::new("product_c", "Indoor Accessories", "table lamp"),
        Item::new("product_d", "Fitness Products", "yoga mat"),
        Item::new("product_e", "Dinner Products", "stoneware plates"),
    ])
}

#[fixture]
fn item_vectors() -> FeatureMatrix {
    FeatureMatrix::from_rows([
        ("product_a".to_owned(), vec![1.0, 0.0, 0.0]),
        ("product_b".to_owned(), vec![0.9, 0.1, 0.0]),
        ("product_c".to_owned(), vec![0.0, 0.0, 1.0]),
        ("product_d".to_owned(), vec![0.0, 1.0, 0.0]),
    ])
    .expect("valid fixture matrix")
}

fn empty_vectors() -> FeatureMatrix {
    FeatureMatrix::from_rows([]).expect("empty matrix is valid")
}

#[rstest]
fn collaborative_queries_delegate_to_the_scorer(
    interactions: InteractionMatrix,
    catalog: MemoryCatalog,
) {
    let engine = RecommendationEngine::new(catalog, interactions, empty_vectors());

    let list = engine.recommend_for_user("user_1", 5).expect("known user");

    assert_eq!(list.ids(), ["product_d".to_owned(), "product_c".to_owned()]);
}

#[rstest]
fn neighbourhood_size_comes_from_config(interactions: InteractionMatrix, catalog: MemoryCatalog) {
    let config = EngineConfig {
        neighbours: 1,
        ..EngineConfig::default()
    };
    let engine = RecommendationEngine::with_config(catalog, interactions, empty_vectors(), config)
        .expect("valid config");

    let list = engine.recommend_for_user("user_1", 5).expect("known user");

    // Only user_3 is consulted, so user_2's exclusive item never appears.
    assert_eq!(list.ids(), ["product_d".to_owned()]);
}

#[rstest]
fn unknown_user_is_rejected(interactions: InteractionMatrix, catalog: MemoryCatalog) {
    let engine = RecommendationEngine::new(catalog, interactions, empty_vectors());

    let err = engine
        .recommend_for_user("user_9", 5)
        .expect_err("unknown user should error");

    assert!(matches!(
        err,
        EngineError::UnknownUser { user_id } if user_id == "user_9"
    ));
}

#[rstest]
fn context_ranking_follows_category_rules(
    interactions: InteractionMatrix,
    catalog: MemoryCatalog,
) {
    let engine = RecommendationEngine::new(catalog, interactions, empty_vectors());
    let context = ContextDescriptor::new()
        .with_device(Device::Mobile)
        .with_location("Urban")
        .with_time_of_day(TimeOfDay::Evening)
        .with_season(Season::Winter);

    let list = engine
        .recommendations_in_context("user_1", &context, 5)
        .expect("known user");

    // Winter and evening rules lift a, c, and e; ties keep catalog order.
    assert_eq!(
        list.ids(),
        [
            "product_a".to_owned(),
            "product_c".to_owned(),
            "product_e".to_owned(),
            "product_b".to_owned(),
            "product_d".to_owned(),
        ]
    );
}

#[rstest]
fn context_queries_validate_the_user(interactions: InteractionMatrix, catalog: MemoryCatalog) {
    let engine = RecommendationEngine::new(catalog, interactions, empty_vectors());

    let err = engine
        .recommendations_in_context("user_9", &ContextDescriptor::new(), 5)
        .expect_err("unknown user should error");

    assert!(matches!(err, EngineError::UnknownUser { .. }));
}

#[rstest]
fn similar_items_excludes_the_reference(
    interactions: InteractionMatrix,
    catalog: MemoryCatalog,
    item_vectors: FeatureMatrix,
) {
    let engine = RecommendationEngine::new(catalog, interactions, item_vectors);

    let list = engine.similar_items("product_a", 2).expect("known item");

    assert_eq!(list.ids(), ["product_b".to_owned(), "product_c".to_owned()]);
    assert!(!list.contains("product_a"));
}

#[rstest]
fn similar_items_rejects_unknown_ids(
    interactions: InteractionMatrix,
    catalog: MemoryCatalog,
    item_vectors: FeatureMatrix,
) {
    let engine = RecommendationEngine::new(catalog, interactions, item_vectors);

    let err = engine
        .similar_items("ghost", 2)
        .expect_err("unknown item should error");

    assert!(matches!(
        err,
        EngineError::Content(ContentError::UnknownItem { .. })
    ));
}

#[rstest]
fn diversity_filter_keeps_first_item_per_category(interactions: InteractionMatrix) {
    let catalog = MemoryCatalog::with_items([
        Item::new("coat", "Warm Clothing", "wool coat"),
        Item::new("scarf", "Warm Clothing", "knit scarf"),
        Item::new("sandals", "Beach Wear", "strap sandals"),
    ]);
    let engine = RecommendationEngine::new(catalog, interactions, empty_vectors());
    let ranked = [
        "coat".to_owned(),
        "scarf".to_owned(),
        "sandals".to_owned(),
    ];

    let kept = engine
        .diversity_filter(&ranked, &DiversityPolicy::OnePerCategory)
        .expect("known candidates");

    assert_eq!(kept.ids(), ["coat".to_owned(), "sandals".to_owned()]);
}

#[rstest]
fn diversity_filter_rejects_unknown_candidates(
    interactions: InteractionMatrix,
    catalog: MemoryCatalog,
) {
    let engine = RecommendationEngine::new(catalog, interactions, empty_vectors());

    let err = engine
        .diversity_filter(&["ghost".to_owned()], &DiversityPolicy::default())
        .expect_err("unknown candidate should error");

    assert!(matches!(
        err,
        EngineError::Catalog(CatalogError::UnknownItem { .. })
    ));
}

#[rstest]
fn visual_ranking_skips_unusable_items(interactions: InteractionMatrix) {
    let catalog = MemoryCatalog::with_items([
        Item::new("coat", "Warm Clothing", "wool coat").with_features(vec![1.0, 0.0]),
        Item::new("lamp", "Indoor Accessories", "table lamp").with_features(vec![0.0, 1.0]),
        Item::new("rug", "Indoor Accessories", "floor rug"),
        Item::new("banner", "Indoor Accessories", "wall banner").with_features(vec![1.0, 0.0, 0.0]),
    ]);
    let extractor = CannedExtractor::default().with_vector("coat.png", vec![1.0, 0.0]);
    let engine = RecommendationEngine::new(catalog, interactions, empty_vectors());

    let list = engine
        .visually_similar(&extractor, "coat.png", 5)
        .expect("reference resolves");

    // rug has no vector and banner's dimension disagrees; both are skipped.
    assert_eq!(list.ids(), ["coat".to_owned(), "lamp".to_owned()]);
}

#[rstest]
fn visual_reference_failures_surface(interactions: InteractionMatrix, catalog: MemoryCatalog) {
    let extractor = CannedExtractor::default();
    let engine = RecommendationEngine::new(catalog, interactions, empty_vectors());

    let err = engine
        .visually_similar(&extractor, "missing.png", 5)
        .expect_err("unknown reference should error");

    assert!(matches!(
        err,
        EngineError::FeatureExtraction { reference, .. } if reference == "missing.png"
    ));
}

#[rstest]
fn invalid_context_weights_are_rejected(interactions: InteractionMatrix, catalog: MemoryCatalog) {
    let config = EngineConfig {
        context_weights: ContextWeights::new(-0.2, 0.2, 0.3, 0.3),
        ..EngineConfig::default()
    };

    let err = RecommendationEngine::with_config(catalog, interactions, empty_vectors(), config)
        .expect_err("negative weight should be rejected");

    assert!(matches!(
        err,
        EngineError::Context(ContextError::InvalidWeight { name: "device", .. })
    ));
}
