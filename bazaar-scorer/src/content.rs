//! Content similarity ranking over item description vectors.
//!
//! The scorer compares a reference vector against every row of a feature
//! matrix, one sweep per call; it never materialises an item–item matrix.

use bazaar_core::{FeatureMatrix, RecommendationList, ScoredCandidate, cosine};
use thiserror::Error;

/// Errors raised by content scoring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// The reference item has no row in the feature matrix.
    #[error("item '{item_id}' is not present in the feature matrix")]
    UnknownItem {
        /// The id that failed to resolve.
        item_id: String,
    },
    /// An external query vector disagreed with the matrix dimension.
    #[error("query vector has {actual} dimensions but the matrix expects {expected}")]
    DimensionMismatch {
        /// Dimension shared by the matrix rows.
        expected: usize,
        /// Length of the offending query.
        actual: usize,
    },
}

/// Rank catalog items by vector similarity to a reference.
///
/// Rows are expected in catalog order; equal scores resolve in that order,
/// so identical inputs always produce identical output.
///
/// # Examples
/// ```
/// use bazaar_core::FeatureMatrix;
/// use bazaar_scorer::ContentScorer;
///
/// let vectors = FeatureMatrix::from_rows([
///     ("lamp".to_owned(), vec![1.0, 0.0]),
///     ("torch".to_owned(), vec![0.9, 0.1]),
///     ("scarf".to_owned(), vec![0.0, 1.0]),
/// ])?;
/// let scorer = ContentScorer::new(&vectors);
///
/// let list = scorer.similar_to("lamp", 2)?;
/// assert_eq!(list.ids(), ["torch".to_owned(), "scarf".to_owned()]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ContentScorer<'a> {
    vectors: &'a FeatureMatrix,
}

impl<'a> ContentScorer<'a> {
    /// Borrow the item feature matrix to rank against.
    #[must_use]
    pub const fn new(vectors: &'a FeatureMatrix) -> Self {
        Self { vectors }
    }

    /// Rank every other item by similarity to `item_id`, best first.
    ///
    /// The reference item never appears in its own results.
    ///
    /// # Errors
    /// Returns [`ContentError::UnknownItem`] when `item_id` has no row.
    pub fn similar_to(
        &self,
        item_id: &str,
        top_n: usize,
    ) -> Result<RecommendationList, ContentError> {
        let Some((reference_index, reference)) = self
            .vectors
            .index_of(item_id)
            .and_then(|index| self.vectors.row(index).map(|row| (index, row)))
        else {
            return Err(ContentError::UnknownItem {
                item_id: item_id.to_owned(),
            });
        };
        Ok(self.rank(reference, top_n, Some(reference_index)))
    }

    /// Rank the whole matrix against an externally produced query vector.
    ///
    /// `exclude` removes one item from the results (pass the query's own id
    /// when the query was derived from a catalog item). An unknown exclude
    /// id is ignored. An empty matrix yields an empty list for any query.
    ///
    /// # Errors
    /// Returns [`ContentError::DimensionMismatch`] when the query length
    /// differs from the matrix dimension.
    pub fn rank_against(
        &self,
        query: &[f32],
        top_n: usize,
        exclude: Option<&str>,
    ) -> Result<RecommendationList, ContentError> {
        if self.vectors.is_empty() {
            return Ok(RecommendationList::empty());
        }
        if query.len() != self.vectors.dimension() {
            return Err(ContentError::DimensionMismatch {
                expected: self.vectors.dimension(),
                actual: query.len(),
            });
        }
        let exclude_index = exclude.and_then(|id| self.vectors.index_of(id));
        Ok(self.rank(query, top_n, exclude_index))
    }

    fn rank(&self, query: &[f32], top_n: usize, exclude: Option<usize>) -> RecommendationList {
        let candidates = self
            .vectors
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != exclude)
            .map(|(_, (id, row))| ScoredCandidate::new(id, cosine(query, row)))
            .collect();
        RecommendationList::from_ranked(candidates, top_n)
    }
}
