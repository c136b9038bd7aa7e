//! Cosine similarity over labelled row vectors.
//!
//! The free functions are pure and stateless: derived similarity matrices
//! are recomputed from their source matrix rather than patched when the
//! source changes.
//!
//! # Examples
//! ```
//! use bazaar_core::cosine;
//!
//! let similarity = cosine(&[1.0, 0.0], &[1.0, 0.0]);
//! assert!((similarity - 1.0).abs() < 1e-6);
//! assert_eq!(cosine(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
//! ```

use std::collections::HashMap;

use crate::matrix::FeatureMatrix;

/// Cosine similarity between two vectors, in `[-1.0, 1.0]`.
///
/// Returns `0.0` when either vector has zero norm or when the slices differ
/// in length (the latter is also logged, as it indicates a caller bug).
/// Inputs are expected to be finite; matrix construction enforces this for
/// rows drawn from a [`FeatureMatrix`].
#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        log::warn!(
            "cosine called with mismatched lengths ({} vs {})",
            a.len(),
            b.len()
        );
        return 0.0;
    }
    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0_f32 || norm_b == 0.0_f32 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Symmetric pairwise similarity with string labels.
///
/// Values lie in `[-1.0, 1.0]`; the diagonal is exactly `1.0` for rows with
/// non-zero norm and `0.0` for all-zero rows. Built via [`pairwise_cosine`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Number of rows (and columns).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the matrix is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Row labels, in source-matrix order.
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

    /// Similarity at `(row, column)`, when both are in range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f32> {
        if row >= self.len() || column >= self.len() {
            return None;
        }
        self.values.get(row * self.len() + column).copied()
    }

    /// Similarity between two labelled rows, when both are present.
    #[must_use]
    pub fn between(&self, a: &str, b: &str) -> Option<f32> {
        let row = self.index_of(a)?;
        let column = self.index_of(b)?;
        self.get(row, column)
    }
}

/// Compute the pairwise cosine similarity of every row pair in `matrix`.
///
/// The result is symmetric and keeps the source row order. Empty or
/// single-row input yields a correspondingly trivial matrix.
///
/// # Examples
/// ```
/// use bazaar_core::{FeatureMatrix, pairwise_cosine};
///
/// let matrix = FeatureMatrix::from_rows([
///     ("a".to_owned(), vec![1.0, 0.0]),
///     ("b".to_owned(), vec![0.0, 1.0]),
/// ])?;
/// let similarity = pairwise_cosine(&matrix);
/// assert_eq!(similarity.between("a", "a"), Some(1.0));
/// assert_eq!(similarity.between("a", "b"), Some(0.0));
/// # Ok::<(), bazaar_core::MatrixError>(())
/// ```
#[must_use]
pub fn pairwise_cosine(matrix: &FeatureMatrix) -> SimilarityMatrix {
    let count = matrix.len();
    let norms: Vec<f32> = matrix
        .rows()
        .map(|row| row.iter().map(|value| value * value).sum::<f32>().sqrt())
        .collect();
    let mut values = Vec::with_capacity(count * count);
    for (i, a) in matrix.rows().enumerate() {
        let norm_a = norms.get(i).copied().unwrap_or(0.0_f32);
        for (j, b) in matrix.rows().enumerate() {
            let norm_b = norms.get(j).copied().unwrap_or(0.0_f32);
            let value = if i == j {
                if norm_a > 0.0_f32 { 1.0 } else { 0.0 }
            } else if norm_a > 0.0_f32 && norm_b > 0.0_f32 {
                (dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
            } else {
                0.0
            };
            values.push(value);
        }
    }
    let index = matrix
        .ids()
        .iter()
        .enumerate()
        .map(|(position, id)| (id.clone(), position))
        .collect();
    SimilarityMatrix {
        ids: matrix.ids().to_vec(),
        index,
        values,
    }
}
