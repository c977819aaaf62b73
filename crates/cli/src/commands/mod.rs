// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod confirm;
pub mod upload;

use std::path::Path;

use crate::error::{Error, Result};

/// Read the planning document, failing before any parsing happens.
pub fn read_document(path: &Path) -> Result<String> {
    crate::time_phase!("document::read", {
        std::fs::read_to_string(path).map_err(|source| Error::ReadDocument {
            path: path.to_path_buf(),
            source,
        })
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
