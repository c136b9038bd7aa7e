//! Recommendation engine facade for Bazaar.
//!
//! This crate assembles the individual scoring strategies into
//! [`RecommendationEngine`], the entry point callers hold: collaborative and
//! content rankings are delegated to `bazaar-scorer`, context rankings run
//! over whatever [`CatalogStore`](bazaar_core::CatalogStore) the caller
//! supplies, and ranked lists can be post-processed with the category
//! [`diversify`] filter.
//!
//! The engine is deliberately snapshot-based: similarity matrices are derived
//! once at construction and never refreshed behind the caller's back, so two
//! engines built from the same data always answer identically.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod diversity;
mod engine;

pub use diversity::{DiversityPolicy, diversify};
pub use engine::{EngineConfig, EngineError, RecommendationEngine};
