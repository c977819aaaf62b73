// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

use crate::sync::TransportError;

/// Errors that stop a run before or outside of synchronization.
///
/// Failures of individual remote entities are not errors here: they are
/// counted in the sync report and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read document {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{setting} is required to {operation}\n  hint: pass --{flag}, set {env}, or add it to the [remote] section of the config file")]
    MissingSetting {
        setting: &'static str,
        operation: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    #[error("confirmation requires an interactive terminal\n  hint: pass --yes to skip the prompt")]
    TtyRequired,

    #[error("invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("cannot set up http client: {0}")]
    Transport(#[from] TransportError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
