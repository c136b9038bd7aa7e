//! Test-only, in-memory collaborators used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{
    CatalogError, CatalogStore, FeatureExtractionError, FeatureExtractor, Item, SentimentAnalyzer,
    SentimentScore,
};

/// In-memory `CatalogStore` implementation used in tests.
///
/// The catalog performs a linear scan and is intended only for small
/// datasets.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalog {
    items: Vec<Item>,
}

impl MemoryCatalog {
    /// Create a catalog containing a single item.
    #[must_use]
    pub fn with_item(item: Item) -> Self {
        Self::with_items(std::iter::once(item))
    }

    /// Create a catalog from a collection of items, preserving their order.
    #[must_use]
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

impl CatalogStore for MemoryCatalog {
    fn item(&self, item_id: &str) -> Result<Item, CatalogError> {
        self.items
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownItem {
                item_id: item_id.to_owned(),
            })
    }

    fn items(&self) -> Box<dyn Iterator<Item = Item> + Send + '_> {
        Box::new(self.items.iter().cloned())
    }
}

/// `FeatureExtractor` returning canned vectors keyed by reference.
///
/// References without a canned vector fail with
/// [`FeatureExtractionError::InvalidSource`], which lets tests exercise the
/// degraded paths deterministically.
#[derive(Default, Debug, Clone)]
pub struct CannedExtractor {
    vectors: HashMap<String, Vec<f32>>,
}

impl CannedExtractor {
    /// Register a vector for `reference` while consuming `self`, enabling
    /// chaining.
    #[must_use]
    pub fn with_vector(mut self, reference: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(reference.into(), vector);
        self
    }
}

impl FeatureExtractor for CannedExtractor {
    fn extract_features(&self, reference: &str) -> Result<Vec<f32>, FeatureExtractionError> {
        self.vectors
            .get(reference)
            .cloned()
            .ok_or_else(|| FeatureExtractionError::InvalidSource {
                reference: reference.to_owned(),
            })
    }
}

/// `SentimentAnalyzer` returning canned compound values keyed by text.
///
/// Unseen text scores a neutral `0.0`.
#[derive(Default, Debug, Clone)]
pub struct CannedSentiment {
    scores: HashMap<String, f32>,
}

impl CannedSentiment {
    /// Register a compound value for `text` while consuming `self`, enabling
    /// chaining.
    #[must_use]
    pub fn with_score(mut self, text: impl Into<String>, compound: f32) -> Self {
        self.scores.insert(text.into(), compound);
        self
    }
}

impl SentimentAnalyzer for CannedSentiment {
    fn score_text(&self, text: &str) -> SentimentScore {
        SentimentScore::new(self.scores.get(text).copied().unwrap_or(0.0))
    }
}
