//! Category diversity filtering for ranked candidate lists.
//!
//! Ranking strategies optimise for relevance, which tends to fill the top of
//! a list with near-duplicates from one category. The diversity filter walks
//! a ranked list once and keeps each candidate only while its category is
//! under the policy's cap, preserving the incoming order throughout.

use std::collections::HashMap;

use bazaar_core::Category;

/// Upper bound on how many kept items may share a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiversityPolicy {
    /// Keep only the first item seen in each category.
    OnePerCategory,
    /// Keep up to `max_per_category` items in each category.
    PerCategoryCap {
        /// Cap per category; zero behaves as one.
        max_per_category: usize,
    },
}

impl Default for DiversityPolicy {
    fn default() -> Self {
        Self::OnePerCategory
    }
}

impl DiversityPolicy {
    /// Derive a policy from a relevance/diversity trade-off factor.
    ///
    /// A factor of `f` keeps roughly `1 / f` items per category, rounded to
    /// the nearest whole number and never less than one. Non-finite or
    /// non-positive factors fall back to [`DiversityPolicy::OnePerCategory`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bazaar_recommender::DiversityPolicy;
    ///
    /// assert_eq!(
    ///     DiversityPolicy::from_factor(0.5),
    ///     DiversityPolicy::PerCategoryCap {
    ///         max_per_category: 2,
    ///     },
    /// );
    /// assert_eq!(DiversityPolicy::from_factor(1.0), DiversityPolicy::OnePerCategory);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the cap is the rounded reciprocal of the factor"
    )]
    pub fn from_factor(factor: f32) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return Self::OnePerCategory;
        }
        let cap = (1.0 / factor).round().max(1.0) as usize;
        if cap == 1 {
            Self::OnePerCategory
        } else {
            Self::PerCategoryCap {
                max_per_category: cap,
            }
        }
    }

    const fn cap(&self) -> usize {
        match self {
            Self::OnePerCategory => 1,
            Self::PerCategoryCap { max_per_category } => {
                if *max_per_category == 0 {
                    1
                } else {
                    *max_per_category
                }
            }
        }
    }
}

/// Filter category-labelled candidates, keeping per-category counts within
/// the policy.
///
/// The result is a subsequence of the input ids: candidates are visited in
/// order and dropped once their category has reached the cap, so relative
/// ranking is never disturbed.
///
/// # Examples
///
/// ```
/// use bazaar_core::Category;
/// use bazaar_recommender::{DiversityPolicy, diversify};
///
/// let ranked = [
///     ("coat".to_owned(), Category::from("Warm Clothing")),
///     ("scarf".to_owned(), Category::from("Warm Clothing")),
///     ("sandals".to_owned(), Category::from("Beach Wear")),
/// ];
/// let kept = diversify(ranked, &DiversityPolicy::OnePerCategory);
/// assert_eq!(kept, ["coat".to_owned(), "sandals".to_owned()]);
/// ```
#[must_use]
pub fn diversify(
    candidates: impl IntoIterator<Item = (String, Category)>,
    policy: &DiversityPolicy,
) -> Vec<String> {
    let cap = policy.cap();
    let mut counts: HashMap<Category, usize> = HashMap::new();
    let mut kept = Vec::new();
    for (id, category) in candidates {
        let count = counts.entry(category).or_insert(0);
        if *count < cap {
            *count += 1;
            kept.push(id);
        }
    }
    kept
}
