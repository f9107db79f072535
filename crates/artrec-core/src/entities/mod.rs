//! Entity structs for the two input datasets.
//!
//! Both are read-only after load. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod article;
mod interaction;

pub use article::Article;
pub use interaction::Interaction;
