//! Feature extraction boundary for externally produced vectors.
//!
//! The `FeatureExtractor` trait wraps whatever model or service turns a
//! source reference (an image path, a URL, a cached key) into a numeric
//! vector. The engine never loads or runs models itself.

use thiserror::Error;

/// Errors raised while extracting features from a source reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureExtractionError {
    /// The source reference could not be read or decoded.
    #[error("feature source '{reference}' could not be read")]
    InvalidSource {
        /// The reference that failed to load.
        reference: String,
    },
    /// The extraction backend itself was unavailable.
    #[error("feature extraction backend unavailable: {reason}")]
    Unavailable {
        /// Backend-supplied description of the outage.
        reason: String,
    },
}

/// Turn a source reference into a feature vector.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so extraction can
/// run across threads. Vectors from one extractor must share a dimension;
/// consumers skip vectors that disagree with the query's dimension rather
/// than failing a whole ranking call.
///
/// # Examples
///
/// ```rust
/// use bazaar_core::{FeatureExtractionError, FeatureExtractor};
///
/// struct ConstantExtractor;
///
/// impl FeatureExtractor for ConstantExtractor {
///     fn extract_features(&self, reference: &str) -> Result<Vec<f32>, FeatureExtractionError> {
///         if reference.is_empty() {
///             return Err(FeatureExtractionError::InvalidSource {
///                 reference: reference.to_owned(),
///             });
///         }
///         Ok(vec![1.0, 0.0])
///     }
/// }
///
/// let extractor = ConstantExtractor;
/// assert_eq!(extractor.extract_features("shirt.png"), Ok(vec![1.0, 0.0]));
/// assert!(extractor.extract_features("").is_err());
/// ```
pub trait FeatureExtractor: Send + Sync {
    /// Extract a feature vector for `reference`.
    ///
    /// # Errors
    /// Returns [`FeatureExtractionError`] when the reference cannot be read
    /// or the backend is unavailable.
    fn extract_features(&self, reference: &str) -> Result<Vec<f32>, FeatureExtractionError>;
}
