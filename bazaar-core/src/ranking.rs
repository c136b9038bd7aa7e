//! Ranked candidates and deterministic top-N selection.

use std::cmp::Ordering;

/// A candidate item paired with its strategy score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Candidate item id.
    pub id: String,
    /// Strategy score; higher ranks earlier. Scoring paths yield finite
    /// values only.
    pub score: f32,
}

impl ScoredCandidate {
    /// Pair an id with a score.
    #[must_use]
    pub fn new(id: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// Ordered recommendation output.
///
/// The list preserves the order in which it was built; every strategy
/// produces one via [`RecommendationList::from_ranked`] or
/// [`RecommendationList::from_ordered`], so equal inputs always yield
/// identical output. Producers keep ids unique; the list itself never
/// reorders or drops entries beyond the `top_n` cap.
///
/// # Examples
/// ```
/// use bazaar_core::{RecommendationList, ScoredCandidate};
///
/// let list = RecommendationList::from_ranked(
///     vec![
///         ScoredCandidate::new("low", 0.1),
///         ScoredCandidate::new("first_tie", 0.9),
///         ScoredCandidate::new("second_tie", 0.9),
///     ],
///     2,
/// );
/// assert_eq!(list.ids(), ["first_tie".to_owned(), "second_tie".to_owned()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationList {
    ids: Vec<String>,
}

impl RecommendationList {
    /// An empty list.
    #[must_use]
    pub const fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Rank candidates by score descending and keep the first `top_n`.
    ///
    /// Equal scores keep their input order, so callers control tie-breaking
    /// by the order in which they produce candidates. Non-finite scores
    /// compare equal to everything; scoring paths never produce them.
    #[must_use]
    pub fn from_ranked(candidates: Vec<ScoredCandidate>, top_n: usize) -> Self {
        let mut indexed: Vec<(usize, ScoredCandidate)> =
            candidates.into_iter().enumerate().collect();
        indexed.sort_unstable_by(|a, b| {
            b.1.score
                .partial_cmp(&a.1.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        Self {
            ids: indexed
                .into_iter()
                .take(top_n)
                .map(|(_, candidate)| candidate.id)
                .collect(),
        }
    }

    /// Keep the first `top_n` ids of an already ordered sequence.
    #[must_use]
    pub fn from_ordered(ids: impl IntoIterator<Item = String>, top_n: usize) -> Self {
        Self {
            ids: ids.into_iter().take(top_n).collect(),
        }
    }

    /// Recommended ids, best first.
    #[must_use]
    pub const fn ids(&self) -> &[String] {
        self.ids.as_slice()
    }

    /// Number of recommendations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing was recommended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the ids, best first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// True when `id` was recommended.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|candidate| candidate == id)
    }

    /// Consume the list, yielding the ordered ids.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.ids
    }
}
