//! Core domain types for the Bazaar recommendation engine.
//!
//! The crate provides the vocabulary shared by every scoring strategy:
//! catalog [`Item`]s and their [`Category`] labels, validated interaction and
//! feature matrices, cosine similarity over labelled rows, deterministic
//! ranking output, and the trait seams (`CatalogStore`, `FeatureExtractor`,
//! `SentimentAnalyzer`) through which callers supply data and models. It
//! performs no I/O and holds no global state.
//!
//! # Examples
//!
//! ```
//! use bazaar_core::{FeatureMatrix, pairwise_cosine};
//!
//! let vectors = FeatureMatrix::from_rows([
//!     ("user_1".to_owned(), vec![5.0, 3.0, 0.0]),
//!     ("user_2".to_owned(), vec![0.0, 4.0, 1.0]),
//! ])?;
//! let similarity = pairwise_cosine(&vectors);
//! assert_eq!(similarity.between("user_1", "user_1"), Some(1.0));
//! # Ok::<(), bazaar_core::MatrixError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod context;
pub mod extractor;
pub mod item;
pub mod matrix;
pub mod ranking;
pub mod sentiment;
pub mod similarity;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{CatalogError, CatalogStore};
pub use context::{ContextDescriptor, Device, Season, TimeOfDay};
pub use extractor::{FeatureExtractionError, FeatureExtractor};
pub use item::{Category, Item};
pub use matrix::{FeatureMatrix, InteractionMatrix, MatrixError};
pub use ranking::{RecommendationList, ScoredCandidate};
pub use sentiment::{
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, SentimentAnalyzer, SentimentLabel, SentimentScore,
};
pub use similarity::{SimilarityMatrix, cosine, pairwise_cosine};
