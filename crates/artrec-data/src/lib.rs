//! # artrec-data
//!
//! Loads the two input datasets into an in-memory [`Dataset`]:
//! - the interaction log (`article_id`, `title`, `email`), with emails mapped
//!   to dense user ids by [`EmailMapper`]
//! - the article catalog (`article_id`, `doc_full_name`, `doc_description`, ...),
//!   de-duplicated by `article_id`

pub mod dataset;
pub mod email_mapper;
pub mod error;
pub mod reader;

pub use dataset::Dataset;
pub use email_mapper::EmailMapper;
pub use error::DataError;
