//! # artrec-text
//!
//! Turns article descriptions into comparable vectors.
//!
//! Pipeline:
//! 1. [`Tokenizer`]: lowercase, split on non-alphanumerics, drop stop words,
//!    lemmatize, drop short tokens
//! 2. [`TfidfModel`]: fit a vocabulary with smoothed idf weights and produce
//!    L2-normalized sparse vectors
//! 3. [`SimilarityMatrix`]: pairwise cosine similarity between all documents

pub mod lemmatize;
pub mod similarity;
pub mod stop_words;
pub mod tfidf;
pub mod tokenize;

pub use similarity::SimilarityMatrix;
pub use tfidf::{SparseVector, TfidfModel};
pub use tokenize::Tokenizer;
