//! Engine facade orchestrating the scoring strategies over one catalog.
//!
//! The engine snapshots its inputs at construction: the user-user similarity
//! matrix is derived once from the interaction matrix, and every query method
//! is a pure function over that snapshot. Rebuild the engine when interaction
//! or catalog data changes.

use bazaar_core::{
    CatalogError, CatalogStore, ContextDescriptor, FeatureExtractionError, FeatureExtractor,
    FeatureMatrix, InteractionMatrix, RecommendationList, ScoredCandidate, SimilarityMatrix,
    cosine, pairwise_cosine,
};
use bazaar_scorer::{
    CollaborativeError, CollaborativeParams, CollaborativeScorer, ContentError, ContentScorer,
    ContextError, ContextModel, ContextScorer, ContextWeights,
};
use thiserror::Error;

use crate::diversity::{DiversityPolicy, diversify};

/// Errors raised by engine queries.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The queried user has no interaction row.
    #[error("user '{user_id}' is not present in the interaction matrix")]
    UnknownUser {
        /// The id that failed to resolve.
        user_id: String,
    },
    /// A candidate id could not be resolved by the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The content strategy rejected the request.
    #[error(transparent)]
    Content(#[from] ContentError),
    /// The context configuration was invalid.
    #[error(transparent)]
    Context(#[from] ContextError),
    /// The reference for a visual similarity query could not be processed.
    #[error("feature extraction failed for '{reference}'")]
    FeatureExtraction {
        /// The reference passed to the extractor.
        reference: String,
        /// The extractor's own failure.
        #[source]
        source: FeatureExtractionError,
    },
}

impl From<CollaborativeError> for EngineError {
    fn from(err: CollaborativeError) -> Self {
        match err {
            CollaborativeError::UnknownUser { user_id } => Self::UnknownUser { user_id },
        }
    }
}

/// Configuration for [`RecommendationEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of most-similar users consulted by the collaborative path.
    pub neighbours: usize,
    /// Relative importance of each context attribute.
    pub context_weights: ContextWeights,
    /// Rule tables backing the context-aware path.
    pub context_model: ContextModel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neighbours: CollaborativeParams::default().neighbours,
            context_weights: ContextWeights::default(),
            context_model: ContextModel::default(),
        }
    }
}

/// Multi-strategy recommendation engine over a read-only catalog.
///
/// The engine is generic over the catalog boundary so callers decide where
/// item data lives; interaction and feature matrices are owned snapshots.
///
/// # Examples
///
/// Rank a catalog for a winter context, then spread the result across
/// categories:
///
/// ```
/// use bazaar_core::{
///     CatalogError, CatalogStore, ContextDescriptor, FeatureMatrix, InteractionMatrix, Item,
///     Season,
/// };
/// use bazaar_recommender::{DiversityPolicy, RecommendationEngine};
///
/// struct DemoCatalog(Vec<Item>);
///
/// impl CatalogStore for DemoCatalog {
///     fn item(&self, item_id: &str) -> Result<Item, CatalogError> {
///         self.0
///             .iter()
///             .find(|item| item.id == item_id)
///             .cloned()
///             .ok_or_else(|| CatalogError::UnknownItem {
///                 item_id: item_id.to_owned(),
///             })
///     }
///
///     fn items(&self) -> Box<dyn Iterator<Item = Item> + Send + '_> {
///         Box::new(self.0.iter().cloned())
///     }
/// }
///
/// let catalog = DemoCatalog(vec![
///     Item::new("coat", "Warm Clothing", "Wool winter coat"),
///     Item::new("scarf", "Warm Clothing", "Knitted scarf"),
///     Item::new("sandals", "Beach Wear", "Strapped sandals"),
/// ]);
/// let interactions = InteractionMatrix::from_rows(
///     vec!["coat".to_owned(), "scarf".to_owned(), "sandals".to_owned()],
///     [("ana".to_owned(), vec![5.0, 0.0, 1.0])],
/// )?;
///
/// let engine = RecommendationEngine::new(catalog, interactions, FeatureMatrix::from_rows([])?);
///
/// let context = ContextDescriptor::new().with_season(Season::Winter);
/// let ranked = engine.recommendations_in_context("ana", &context, 3)?;
/// assert_eq!(
///     ranked.ids(),
///     ["coat".to_owned(), "scarf".to_owned(), "sandals".to_owned()],
/// );
///
/// let diverse = engine.diversity_filter(ranked.ids(), &DiversityPolicy::OnePerCategory)?;
/// assert_eq!(diverse.ids(), ["coat".to_owned(), "sandals".to_owned()]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct RecommendationEngine<S>
where
    S: CatalogStore,
{
    catalog: S,
    interactions: InteractionMatrix,
    user_similarity: SimilarityMatrix,
    item_vectors: FeatureMatrix,
    context_scorer: ContextScorer,
    context_weights: ContextWeights,
    neighbours: usize,
}

impl<S> RecommendationEngine<S>
where
    S: CatalogStore,
{
    /// Construct an engine with default configuration.
    pub fn new(catalog: S, interactions: InteractionMatrix, item_vectors: FeatureMatrix) -> Self {
        Self::assemble(catalog, interactions, item_vectors, EngineConfig::default())
    }

    /// Construct an engine with explicit configuration.
    ///
    /// # Errors
    /// Returns [`EngineError::Context`] when the configured context weights
    /// are non-finite or negative.
    pub fn with_config(
        catalog: S,
        interactions: InteractionMatrix,
        item_vectors: FeatureMatrix,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.context_weights.validate()?;
        Ok(Self::assemble(catalog, interactions, item_vectors, config))
    }

    fn assemble(
        catalog: S,
        interactions: InteractionMatrix,
        item_vectors: FeatureMatrix,
        config: EngineConfig,
    ) -> Self {
        let EngineConfig {
            neighbours,
            context_weights,
            context_model,
        } = config;
        let user_similarity = pairwise_cosine(interactions.vectors());
        Self {
            catalog,
            interactions,
            user_similarity,
            item_vectors,
            context_scorer: ContextScorer::new(context_model),
            context_weights,
            neighbours,
        }
    }

    /// Collaborative recommendations for `user_id`, neighbour order first.
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownUser`] when `user_id` has no
    /// interaction row.
    pub fn recommend_for_user(
        &self,
        user_id: &str,
        top_n: usize,
    ) -> Result<RecommendationList, EngineError> {
        let params = CollaborativeParams {
            neighbours: self.neighbours,
            top_n,
        };
        let scorer = CollaborativeScorer::new(&self.interactions, &self.user_similarity);
        Ok(scorer.recommend(user_id, &params)?)
    }

    /// Items most similar to `item_id` by description feature vector.
    ///
    /// # Errors
    /// Returns [`EngineError::Content`] when `item_id` has no feature row.
    pub fn similar_items(
        &self,
        item_id: &str,
        top_n: usize,
    ) -> Result<RecommendationList, EngineError> {
        let scorer = ContentScorer::new(&self.item_vectors);
        Ok(scorer.similar_to(item_id, top_n)?)
    }

    /// Rank the whole catalog for `user_id` under `context`.
    ///
    /// Context scores depend only on item categories, but the user id is
    /// still validated at the boundary: an unknown caller is a request
    /// error, not an empty result.
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownUser`] when `user_id` has no
    /// interaction row.
    pub fn recommendations_in_context(
        &self,
        user_id: &str,
        context: &ContextDescriptor,
        top_n: usize,
    ) -> Result<RecommendationList, EngineError> {
        self.ensure_known_user(user_id)?;
        let candidates = self
            .catalog
            .items()
            .map(|item| {
                let score = self
                    .context_scorer
                    .score(&item.category, context, &self.context_weights);
                ScoredCandidate::new(item.id, score)
            })
            .collect();
        Ok(RecommendationList::from_ranked(candidates, top_n))
    }

    /// Apply a diversity policy to an ordered candidate list.
    ///
    /// # Errors
    /// Returns [`EngineError::Catalog`] when a candidate id has no catalog
    /// entry.
    pub fn diversity_filter(
        &self,
        candidates: &[String],
        policy: &DiversityPolicy,
    ) -> Result<RecommendationList, EngineError> {
        let mut labelled = Vec::with_capacity(candidates.len());
        for id in candidates {
            let item = self.catalog.item(id)?;
            labelled.push((item.id, item.category));
        }
        let kept = diversify(labelled, policy);
        Ok(RecommendationList::from_ordered(kept, candidates.len()))
    }

    /// Rank catalog items by visual similarity to an external reference.
    ///
    /// `extractor` turns `reference` into the query vector. Catalog items
    /// without a stored feature vector, or whose vector disagrees with the
    /// query's dimension, are skipped with a warning rather than failing
    /// the whole query.
    ///
    /// # Errors
    /// Returns [`EngineError::FeatureExtraction`] when the reference itself
    /// cannot be processed.
    pub fn visually_similar(
        &self,
        extractor: &dyn FeatureExtractor,
        reference: &str,
        top_n: usize,
    ) -> Result<RecommendationList, EngineError> {
        let query = extractor
            .extract_features(reference)
            .map_err(|source| EngineError::FeatureExtraction {
                reference: reference.to_owned(),
                source,
            })?;
        let mut candidates = Vec::new();
        for item in self.catalog.items() {
            let Some(features) = item.features.as_deref() else {
                log::warn!("item '{}' has no feature vector; skipping visual ranking", item.id);
                continue;
            };
            if features.len() != query.len() {
                log::warn!(
                    "item '{}' vector length {} differs from query length {}; skipping",
                    item.id,
                    features.len(),
                    query.len()
                );
                continue;
            }
            let score = cosine(&query, features);
            candidates.push(ScoredCandidate::new(item.id, score));
        }
        Ok(RecommendationList::from_ranked(candidates, top_n))
    }

    fn ensure_known_user(&self, user_id: &str) -> Result<(), EngineError> {
        if self.interactions.contains_user(user_id) {
            Ok(())
        } else {
            Err(EngineError::UnknownUser {
                user_id: user_id.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests;
