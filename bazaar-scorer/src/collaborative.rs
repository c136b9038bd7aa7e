//! Neighbour-based collaborative filtering over an interaction matrix.
//!
//! Candidates are items that a user's most similar neighbours interacted
//! with while the user did not. Ordering is fully deterministic: neighbours
//! rank by similarity (ties by row order), and candidates surface in
//! neighbour-rank-then-item-column order.

use std::cmp::Ordering;
use std::collections::HashSet;

use bazaar_core::{InteractionMatrix, RecommendationList, SimilarityMatrix};
use thiserror::Error;

const DEFAULT_NEIGHBOURS: usize = 5;
const DEFAULT_TOP_N: usize = 5;

/// Tunable parameters for collaborative candidate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollaborativeParams {
    /// Number of most-similar users consulted for candidates.
    pub neighbours: usize,
    /// Maximum number of recommendations returned.
    pub top_n: usize,
}

impl CollaborativeParams {
    /// Default neighbourhood size with an explicit result cap.
    #[must_use]
    pub const fn with_top_n(top_n: usize) -> Self {
        Self {
            neighbours: DEFAULT_NEIGHBOURS,
            top_n,
        }
    }
}

impl Default for CollaborativeParams {
    fn default() -> Self {
        Self {
            neighbours: DEFAULT_NEIGHBOURS,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Errors raised by collaborative scoring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollaborativeError {
    /// The queried user has no interaction row.
    #[error("user '{user_id}' is not present in the interaction matrix")]
    UnknownUser {
        /// The id that failed to resolve.
        user_id: String,
    },
}

/// Recommend unseen items from the behaviour of similar users.
///
/// The scorer borrows its inputs and holds no other state; both matrices are
/// derived elsewhere and rebuilt (never patched) when interactions change.
///
/// # Examples
/// ```
/// use bazaar_core::{InteractionMatrix, pairwise_cosine};
/// use bazaar_scorer::{CollaborativeParams, CollaborativeScorer};
///
/// let interactions = InteractionMatrix::from_rows(
///     vec!["product_a".into(), "product_b".into(), "product_c".into()],
///     [
///         ("user_1".to_owned(), vec![5.0, 0.0, 0.0]),
///         ("user_2".to_owned(), vec![4.0, 2.0, 0.0]),
///     ],
/// )?;
/// let similarity = pairwise_cosine(interactions.vectors());
/// let scorer = CollaborativeScorer::new(&interactions, &similarity);
///
/// let list = scorer.recommend("user_1", &CollaborativeParams::default())?;
/// assert_eq!(list.ids(), ["product_b".to_owned()]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CollaborativeScorer<'a> {
    interactions: &'a InteractionMatrix,
    similarity: &'a SimilarityMatrix,
}

impl<'a> CollaborativeScorer<'a> {
    /// Borrow the interaction matrix and the user–user similarity derived
    /// from it.
    #[must_use]
    pub const fn new(
        interactions: &'a InteractionMatrix,
        similarity: &'a SimilarityMatrix,
    ) -> Self {
        Self {
            interactions,
            similarity,
        }
    }

    /// Recommend up to `params.top_n` unseen items for `user_id`.
    ///
    /// A user with no neighbours (a single-row matrix) yields an empty list,
    /// not an error; the outcome is logged at `debug` level. Users missing
    /// from the similarity matrix contribute a neutral similarity of zero
    /// rather than failing the call.
    ///
    /// # Errors
    /// Returns [`CollaborativeError::UnknownUser`] when `user_id` has no
    /// interaction row.
    pub fn recommend(
        &self,
        user_id: &str,
        params: &CollaborativeParams,
    ) -> Result<RecommendationList, CollaborativeError> {
        let Some(target_row) = self.interactions.user_vector(user_id) else {
            return Err(CollaborativeError::UnknownUser {
                user_id: user_id.to_owned(),
            });
        };
        let neighbours = self.ranked_neighbours(user_id, params.neighbours);
        if neighbours.is_empty() {
            log::debug!("user '{user_id}' has no neighbours; returning an empty list");
            return Ok(RecommendationList::empty());
        }

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for neighbour_index in neighbours {
            let Some(neighbour_row) = self.interactions.vectors().row(neighbour_index) else {
                continue;
            };
            for (column, (&neighbour_strength, &target_strength)) in
                neighbour_row.iter().zip(target_row).enumerate()
            {
                if neighbour_strength <= 0.0 || target_strength != 0.0 || !seen.insert(column) {
                    continue;
                }
                if let Some(item_id) = self.interactions.items().get(column) {
                    candidates.push(item_id.clone());
                }
            }
        }
        Ok(RecommendationList::from_ordered(candidates, params.top_n))
    }

    /// Row indices of the most similar other users, best first.
    fn ranked_neighbours(&self, user_id: &str, limit: usize) -> Vec<usize> {
        let mut ranked: Vec<(usize, f32)> = self
            .interactions
            .users()
            .iter()
            .enumerate()
            .filter(|(_, other)| other.as_str() != user_id)
            .map(|(index, other)| {
                let similarity = self.similarity.between(user_id, other).unwrap_or(0.0);
                (index, similarity)
            })
            .collect();
        ranked.sort_unstable_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(limit);
        ranked.into_iter().map(|(index, _)| index).collect()
    }
}
