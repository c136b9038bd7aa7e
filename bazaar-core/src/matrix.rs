//! Immutable labelled matrices backing the similarity pipelines.
//!
//! Both matrix types validate their contents at construction so that every
//! downstream computation can assume finite values and consistent
//! dimensions. They are never patched in place; callers rebuild a matrix
//! when the underlying data changes and recompute anything derived from it.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while assembling a matrix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// A row's length disagreed with the established dimension.
    #[error("row '{id}' has {actual} values but the matrix dimension is {expected}")]
    DimensionMismatch {
        /// Row id whose length disagreed.
        id: String,
        /// Dimension established by earlier rows (or the item list).
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A row contained a NaN or infinite value.
    #[error("row '{id}' contains a non-finite value")]
    NonFinite {
        /// Row id carrying the non-finite value.
        id: String,
    },
    /// An id appeared more than once.
    #[error("duplicate id '{id}'")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
    /// A row carried no values at all.
    #[error("row '{id}' is empty")]
    EmptyRow {
        /// Id of the empty row.
        id: String,
    },
    /// An interaction strength was negative.
    #[error("interaction strength for user '{user_id}' and item '{item_id}' must be non-negative")]
    NegativeStrength {
        /// User whose row carried the negative strength.
        user_id: String,
        /// Item column holding the negative strength.
        item_id: String,
    },
}

/// Dense row-major matrix with string row labels.
///
/// Rows keep their insertion order; an id→row map supports lookups without a
/// scan. All values are finite and every row has the same non-zero length.
///
/// # Examples
/// ```
/// use bazaar_core::FeatureMatrix;
///
/// let matrix = FeatureMatrix::from_rows([
///     ("product_a".to_owned(), vec![1.0, 0.0]),
///     ("product_b".to_owned(), vec![0.0, 1.0]),
/// ])?;
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.row_of("product_b"), Some([0.0, 1.0].as_slice()));
/// # Ok::<(), bazaar_core::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    dimension: usize,
    values: Vec<f32>,
}

impl FeatureMatrix {
    /// Build a matrix from labelled rows, preserving their order.
    ///
    /// The first row fixes the dimension. An empty iterator yields an empty
    /// matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError`] when a row is empty, disagrees with the
    /// established dimension, repeats an id, or carries a non-finite value.
    pub fn from_rows(
        rows: impl IntoIterator<Item = (String, Vec<f32>)>,
    ) -> Result<Self, MatrixError> {
        let mut ids = Vec::new();
        let mut index = HashMap::new();
        let mut values = Vec::new();
        let mut dimension = 0_usize;
        for (id, row) in rows {
            if row.is_empty() {
                return Err(MatrixError::EmptyRow { id });
            }
            if ids.is_empty() {
                dimension = row.len();
            } else if row.len() != dimension {
                return Err(MatrixError::DimensionMismatch {
                    id,
                    expected: dimension,
                    actual: row.len(),
                });
            }
            if row.iter().any(|value| !value.is_finite()) {
                return Err(MatrixError::NonFinite { id });
            }
            if index.insert(id.clone(), ids.len()).is_some() {
                return Err(MatrixError::DuplicateId { id });
            }
            ids.push(id);
            values.extend(row);
        }
        Ok(Self {
            ids,
            index,
            dimension,
            values,
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the matrix has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Length shared by every row (0 only for the empty matrix).
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Row ids in insertion order.
    #[must_use]
    pub const fn ids(&self) -> &[String] {
        self.ids.as_slice()
    }

    /// Position of `id`, when present.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Id stored at `index`, when in range.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Row stored at `index`, when in range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.ids.len() {
            return None;
        }
        let start = index * self.dimension;
        self.values.get(start..start + self.dimension)
    }

    /// Row labelled `id`, when present.
    #[must_use]
    pub fn row_of(&self, id: &str) -> Option<&[f32]> {
        self.index_of(id).and_then(|index| self.row(index))
    }

    /// Iterate over rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.values.chunks_exact(self.dimension.max(1))
    }

    /// Iterate over `(id, row)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.ids.iter().map(String::as_str).zip(self.rows())
    }
}

/// User–item interaction strengths: user rows over item columns.
///
/// A strength of `0.0` (or an absent column) means "has not interacted";
/// positive strengths express interaction weight. Negative strengths are
/// rejected at construction.
///
/// # Examples
/// ```
/// use bazaar_core::InteractionMatrix;
///
/// let interactions = InteractionMatrix::from_rows(
///     vec!["product_a".into(), "product_b".into()],
///     [
///         ("user_1".to_owned(), vec![5.0, 0.0]),
///         ("user_2".to_owned(), vec![0.0, 4.0]),
///     ],
/// )?;
/// assert_eq!(interactions.strength("user_1", "product_a"), Some(5.0));
/// assert_eq!(interactions.strength("user_1", "missing"), None);
/// # Ok::<(), bazaar_core::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix {
    items: Vec<String>,
    item_index: HashMap<String, usize>,
    users: FeatureMatrix,
}

impl InteractionMatrix {
    /// Build an interaction matrix from an item list and labelled user rows.
    ///
    /// Every user row must carry exactly one strength per item, in item-list
    /// order. A matrix with user rows but no items is rejected.
    ///
    /// # Errors
    /// Returns [`MatrixError`] when item ids repeat, a row's length differs
    /// from the item count, a strength is negative, or the underlying row
    /// validation fails.
    pub fn from_rows(
        items: Vec<String>,
        rows: impl IntoIterator<Item = (String, Vec<f32>)>,
    ) -> Result<Self, MatrixError> {
        let mut item_index = HashMap::new();
        for (position, item_id) in items.iter().enumerate() {
            if item_index.insert(item_id.clone(), position).is_some() {
                return Err(MatrixError::DuplicateId {
                    id: item_id.clone(),
                });
            }
        }
        let user_rows: Vec<(String, Vec<f32>)> = rows.into_iter().collect();
        for (user_id, strengths) in &user_rows {
            if strengths.len() != items.len() {
                return Err(MatrixError::DimensionMismatch {
                    id: user_id.clone(),
                    expected: items.len(),
                    actual: strengths.len(),
                });
            }
            if let Some(position) = strengths.iter().position(|strength| *strength < 0.0) {
                let item_id = items.get(position).cloned().unwrap_or_default();
                return Err(MatrixError::NegativeStrength {
                    user_id: user_id.clone(),
                    item_id,
                });
            }
        }
        let users = FeatureMatrix::from_rows(user_rows)?;
        Ok(Self {
            items,
            item_index,
            users,
        })
    }

    /// Number of user rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.users.len()
    }

    /// True when no user rows exist.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// User ids in row order.
    #[must_use]
    pub const fn users(&self) -> &[String] {
        self.users.ids()
    }

    /// Item ids in column order.
    #[must_use]
    pub const fn items(&self) -> &[String] {
        self.items.as_slice()
    }

    /// The underlying user-row matrix (for similarity derivation).
    #[must_use]
    pub const fn vectors(&self) -> &FeatureMatrix {
        &self.users
    }

    /// True when `user_id` has a row.
    #[must_use]
    pub fn contains_user(&self, user_id: &str) -> bool {
        self.users.index_of(user_id).is_some()
    }

    /// Strength row for `user_id`, when present.
    #[must_use]
    pub fn user_vector(&self, user_id: &str) -> Option<&[f32]> {
        self.users.row_of(user_id)
    }

    /// Strength recorded for a user–item pair.
    ///
    /// `None` when either id is unknown; `Some(0.0)` when the pair simply has
    /// no interaction.
    #[must_use]
    pub fn strength(&self, user_id: &str, item_id: &str) -> Option<f32> {
        let row = self.users.row_of(user_id)?;
        let column = self.item_index.get(item_id)?;
        row.get(*column).copied()
    }
}
