//! # artrec-core
//!
//! Core types shared across all artrec crates.
//!
//! This crate provides:
//! - Typed identifiers for users and articles, plus article query parsing
//! - Entity structs for interaction records and catalog articles
//! - The recommendation strategy enum
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
