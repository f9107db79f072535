//! Typed identifiers for users and articles.
//!
//! Article ids arrive from CSV files in two spellings: integral (`1430`) and
//! float-formatted (`1430.0`). Both parse to the same [`ArticleId`]. User ids
//! are dense integers assigned at load time, starting at 1.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_992.0;

/// Catalog identifier of an article.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

impl ArticleId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArticleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u64>() {
            return Ok(Self(value));
        }

        let invalid = || CoreError::InvalidId {
            kind: "article",
            value: s.to_string(),
        };

        let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_EXACT_FLOAT_ID
        {
            return Err(invalid());
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self(value as u64))
    }
}

/// Dense user identifier assigned from email order of first appearance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl UserId {
    /// The first id handed out by the email mapper.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` once `u32` is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| CoreError::InvalidId {
                kind: "user",
                value: s.to_string(),
            })
    }
}

/// How a caller names an article: by catalog id or by exact title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArticleQuery {
    Id(ArticleId),
    Title(String),
}

impl fmt::Display for ArticleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Title(title) => f.write_str(title),
        }
    }
}

impl FromStr for ArticleQuery {
    type Err = std::convert::Infallible;

    /// Anything that parses as an [`ArticleId`] is an id; everything else is a title.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<ArticleId>()
            .map_or_else(|_| Self::Title(s.trim().to_string()), Self::Id))
    }
}
