//! Facade crate for the Bazaar recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the scoring
//! strategies and the orchestrating engine behind feature flags.

#![forbid(unsafe_code)]

pub use bazaar_core::{
    CatalogError, CatalogStore, Category, ContextDescriptor, Device, FeatureExtractionError,
    FeatureExtractor, FeatureMatrix, InteractionMatrix, Item, MatrixError, RecommendationList,
    ScoredCandidate, Season, SentimentAnalyzer, SentimentLabel, SentimentScore, SimilarityMatrix,
    TimeOfDay, cosine, pairwise_cosine,
};

#[cfg(feature = "scorer")]
pub use bazaar_scorer::{
    CollaborativeError, CollaborativeParams, CollaborativeScorer, ContentError, ContentScorer,
    ContextError, ContextModel, ContextScorer, ContextWeights,
};

#[cfg(feature = "recommender")]
pub use bazaar_recommender::{
    DiversityPolicy, EngineConfig, EngineError, RecommendationEngine, diversify,
};
