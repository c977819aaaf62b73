// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const ISOLATED_VARS: [&str; 7] = [
    "PLANSYNC_API_KEY",
    "PLANSYNC_API_URL",
    "PLANSYNC_WORKSPACE",
    "PLANSYNC_PROJECT",
    "PLANSYNC_CONFIG",
    "PLANSYNC_TIMINGS",
    "RUST_LOG",
];

/// `plansync` command isolated from the caller's environment and config.
///
/// Runs in `dir` so no `./plansync.toml` is picked up unless a test writes one.
pub fn plansync(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("plansync");
    for var in ISOLATED_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir)
        .current_dir(dir);
    cmd
}

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write `content` to `name` inside `dir` and return its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
