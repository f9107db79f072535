//! Cross-cutting error types for artrec.
//!
//! Domain-specific errors (`DataError`, `EngineError`, `ConfigError`) live in
//! their respective crates. They converge into `anyhow::Error` in `artrec-cli`.

use thiserror::Error;

/// Errors that can be raised by any artrec crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An identifier could not be parsed.
    #[error("Invalid {kind} id: '{value}'")]
    InvalidId { kind: &'static str, value: String },
}
