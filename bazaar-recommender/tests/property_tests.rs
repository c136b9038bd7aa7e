//! Property-based tests for the recommendation engine.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid inputs, complementing the worked-example unit tests and the BDD
//! behavioural tests.
//!
//! # Invariants tested
//!
//! - **Similarity geometry:** pairwise cosine is symmetric, bounded by
//!   `[-1, 1]`, and pins the diagonal.
//! - **Candidate hygiene:** collaborative output never contains owned items,
//!   duplicates, or more than `top_n` entries.
//! - **Determinism:** equal inputs produce identical recommendation lists.
//! - **Self-exclusion:** content ranking never recommends the reference.
//! - **Diversity caps:** filtered lists are order-preserving subsequences
//!   with per-category counts within the cap.
//! - **Ranking order:** ranked lists are score-descending and capped.


use std::collections::{HashMap, HashSet};

use bazaar_core::{
    Category, FeatureMatrix, InteractionMatrix, RecommendationList, ScoredCandidate,
    pairwise_cosine,
};
use bazaar_recommender::{DiversityPolicy, diversify};
use bazaar_scorer::{CollaborativeParams, CollaborativeScorer, ContentScorer};
use proptest::prelude::*;

use proptest_support::{
    assert_subsequence, feature_rows_strategy, interaction_rows_strategy,
    labelled_candidates_strategy,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: pairwise cosine similarity is symmetric, stays within
    /// `[-1, 1]`, and pins the diagonal to 1 (or 0 for all-zero rows).
    #[expect(
        clippy::float_arithmetic,
        reason = "test uses float maths for assertions"
    )]
    #[test]
    fn pairwise_similarity_is_symmetric_and_bounded(
        (items, rows) in interaction_rows_strategy(6, 5),
    ) {
        let interactions = InteractionMatrix::from_rows(items, rows)
            .expect("generated interaction matrices are valid");
        let similarity = pairwise_cosine(interactions.vectors());

        for (user, row) in interactions.vectors().iter() {
            let zero_row = row.iter().all(|value| value.abs() < f32::EPSILON);
            let expected = if zero_row { 0.0 } else { 1.0 };
            let diagonal = similarity.between(user, user).unwrap_or(-2.0);
            prop_assert!(
                (diagonal - expected).abs() < 0.000_001,
                "diagonal for {} is {}, expected {}",
                user,
                diagonal,
                expected
            );
        }

        for a in similarity.ids() {
            for b in similarity.ids() {
                let forward = similarity.between(a, b).unwrap_or(-2.0);
                let backward = similarity.between(b, a).unwrap_or(2.0);
                prop_assert!(
                    (forward - backward).abs() < 0.000_001,
                    "similarity({}, {}) = {} but similarity({}, {}) = {}",
                    a,
                    b,
                    forward,
                    b,
                    a,
                    backward
                );
                prop_assert!(
                    (-1.0..=1.0).contains(&forward),
                    "similarity({}, {}) = {} is out of range",
                    a,
                    b,
                    forward
                );
            }
        }
    }

    /// Property: collaborative recommendations never contain an item the
    /// target user already interacted with, never repeat an item, and never
    /// exceed `top_n`.
    #[test]
    fn collaborative_never_recommends_owned_items(
        (items, rows) in interaction_rows_strategy(6, 5),
        top_n in 0_usize..=8,
    ) {
        let interactions = InteractionMatrix::from_rows(items, rows)
            .expect("generated interaction matrices are valid");
        let similarity = pairwise_cosine(interactions.vectors());
        let scorer = CollaborativeScorer::new(&interactions, &similarity);
        let params = CollaborativeParams::with_top_n(top_n);

        for user in interactions.users() {
            let list = scorer.recommend(user, &params).expect("known user");
            prop_assert!(
                list.len() <= top_n,
                "{} received {} recommendations with top_n {}",
                user,
                list.len(),
                top_n
            );

            let mut seen = HashSet::new();
            for item in list.iter() {
                prop_assert!(
                    seen.insert(item.to_owned()),
                    "'{}' recommended twice for {}",
                    item,
                    user
                );
                let strength = interactions.strength(user, item);
                prop_assert!(
                    matches!(strength, Some(value) if value.abs() < f32::EPSILON),
                    "'{}' for {} has interaction strength {:?}",
                    item,
                    user,
                    strength
                );
            }
        }
    }

    /// Property: recommending twice from the same snapshot yields identical
    /// lists.
    #[test]
    fn collaborative_output_is_deterministic(
        (items, rows) in interaction_rows_strategy(6, 5),
    ) {
        let interactions = InteractionMatrix::from_rows(items, rows)
            .expect("generated interaction matrices are valid");
        let similarity = pairwise_cosine(interactions.vectors());
        let scorer = CollaborativeScorer::new(&interactions, &similarity);
        let params = CollaborativeParams::default();

        for user in interactions.users() {
            let first = scorer.recommend(user, &params).expect("known user");
            let second = scorer.recommend(user, &params).expect("known user");
            prop_assert_eq!(first, second, "repeat call diverged for {}", user);
        }
    }

    /// Property: content ranking never recommends the reference item and
    /// only ever returns known rows.
    #[test]
    fn content_ranking_excludes_the_reference(
        rows in feature_rows_strategy(6, 4),
        top_n in 0_usize..=8,
    ) {
        let vectors = FeatureMatrix::from_rows(rows)
            .expect("generated feature matrices are valid");
        let scorer = ContentScorer::new(&vectors);

        for reference in vectors.ids() {
            let list = scorer.similar_to(reference, top_n).expect("known reference");
            prop_assert!(
                list.len() <= top_n,
                "'{}' received {} results with top_n {}",
                reference,
                list.len(),
                top_n
            );
            prop_assert!(
                !list.contains(reference),
                "'{}' recommended itself",
                reference
            );
            for item in list.iter() {
                prop_assert!(
                    vectors.index_of(item).is_some(),
                    "'{}' is not a known feature row",
                    item
                );
            }
        }
    }

    /// Property: the diversity filter emits an order-preserving subsequence
    /// whose per-category counts respect the cap.
    #[test]
    fn diversity_keeps_category_counts_within_the_cap(
        candidates in labelled_candidates_strategy(16),
        cap in 1_usize..=4,
    ) {
        let input_ids: Vec<String> = candidates.iter().map(|(id, _)| id.clone()).collect();
        let by_id: HashMap<String, Category> = candidates.iter().cloned().collect();
        let policy = DiversityPolicy::PerCategoryCap {
            max_per_category: cap,
        };

        let kept = diversify(candidates, &policy);

        assert_subsequence(&kept, &input_ids)?;

        let mut counts: HashMap<&Category, usize> = HashMap::new();
        for id in &kept {
            let category = by_id.get(id);
            prop_assert!(category.is_some(), "'{}' does not exist in the input", id);
            if let Some(category) = category {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        for (category, count) in counts {
            prop_assert!(
                count <= cap,
                "category '{}' kept {} items with cap {}",
                category,
                count,
                cap
            );
        }
    }

    /// Property: ranked lists are score-descending and capped at `top_n`.
    #[test]
    fn ranked_lists_are_ordered_and_capped(
        scores in proptest::collection::vec(-1.0_f32..=1.0_f32, 0..12),
        top_n in 0_usize..=8,
    ) {
        let candidates: Vec<ScoredCandidate> = scores
            .iter()
            .enumerate()
            .map(|(index, score)| ScoredCandidate::new(format!("item_{index}"), *score))
            .collect();
        let by_id: HashMap<String, f32> = candidates
            .iter()
            .map(|candidate| (candidate.id.clone(), candidate.score))
            .collect();

        let list = RecommendationList::from_ranked(candidates, top_n);

        prop_assert!(
            list.len() <= top_n,
            "list has {} entries with top_n {}",
            list.len(),
            top_n
        );
        for pair in list.ids().windows(2) {
            let (Some(first), Some(second)) = (pair.first(), pair.get(1)) else {
                continue;
            };
            let earlier = by_id.get(first).copied().unwrap_or(f32::MIN);
            let later = by_id.get(second).copied().unwrap_or(f32::MAX);
            prop_assert!(
                earlier >= later,
                "'{}' ({}) ranks before '{}' ({})",
                first,
                earlier,
                second,
                later
            );
        }
    }
}
