// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn read_document_returns_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("plan.md");
    std::fs::write(&path, "# Plan\n").unwrap();
    assert_eq!(read_document(&path).unwrap(), "# Plan\n");
}

#[test]
fn read_document_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.md");
    match read_document(&path) {
        Err(Error::ReadDocument { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => unreachable!("expected ReadDocument, got {other:?}"),
    }
}
