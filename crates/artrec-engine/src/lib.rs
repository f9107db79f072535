//! # artrec-engine
//!
//! Recommendation strategies over a loaded [`artrec_data::Dataset`].
//!
//! Strategies:
//! - [`rank`]: most-interacted articles, also the cold-start fallback
//! - [`collaborative`]: user-user filtering on shared reading history
//! - [`content`]: TF-IDF cosine similarity between catalog descriptions
//!
//! [`Recommender`] bundles them behind one read-only handle and returns the
//! response types from [`artrec_core::responses`].

pub mod collaborative;
pub mod content;
pub mod engine;
pub mod error;
pub mod rank;

pub use engine::{EngineOptions, Recommender};
pub use error::EngineError;
