//! Scoring strategies for the bazaar recommendation engine.
//!
//! Three independent strategies operate over the shared types from
//! [`bazaar_core`]:
//!
//! - [`CollaborativeScorer`] recommends what similar users interacted with.
//! - [`ContentScorer`] ranks items by feature-vector similarity.
//! - [`ContextScorer`] scores item categories against situational rule
//!   tables.
//!
//! Each strategy is a pure function over immutable inputs; callers combine
//! them (and post-process the results) however their product requires.
//!
//! # Examples
//! ```
//! use bazaar_core::{InteractionMatrix, pairwise_cosine};
//! use bazaar_scorer::{CollaborativeParams, CollaborativeScorer};
//!
//! let interactions = InteractionMatrix::from_rows(
//!     vec!["book".into(), "lamp".into()],
//!     [
//!         ("ana".to_owned(), vec![5.0, 0.0]),
//!         ("ben".to_owned(), vec![4.0, 2.0]),
//!     ],
//! )?;
//! let similarity = pairwise_cosine(interactions.vectors());
//! let scorer = CollaborativeScorer::new(&interactions, &similarity);
//!
//! let list = scorer.recommend("ana", &CollaborativeParams::default())?;
//! assert_eq!(list.ids(), ["lamp".to_owned()]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod collaborative;
pub mod content;
pub mod context;

pub use collaborative::{CollaborativeError, CollaborativeParams, CollaborativeScorer};
pub use content::{ContentError, ContentScorer};
pub use context::{ContextError, ContextModel, ContextScorer, ContextWeights};
