// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for plansync-core operations.

use thiserror::Error;

/// All possible errors that can occur in plansync-core operations.
///
/// The parser never surfaces these directly: it downgrades them to
/// [`ParseWarning`](crate::parser::ParseWarning)s and keeps going.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid priority: '{0}'\n  hint: valid priorities are: urgent, high, medium, low, none")]
    InvalidPriority(String),

    #[error("structured block is not a mapping (found {found})")]
    NotAMapping { found: &'static str },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for plansync-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
