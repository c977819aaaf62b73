// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Non-empty value of `name`, if set.
fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the value of `PLANSYNC_API_KEY` if set.
pub fn api_key() -> Option<String> {
    non_empty(vars::PLANSYNC_API_KEY)
}

/// Returns the value of `PLANSYNC_API_URL` if set.
pub fn api_url() -> Option<String> {
    non_empty(vars::PLANSYNC_API_URL)
}

/// Returns the value of `PLANSYNC_WORKSPACE` if set.
pub fn workspace() -> Option<String> {
    non_empty(vars::PLANSYNC_WORKSPACE)
}

/// Returns the value of `PLANSYNC_PROJECT` if set.
pub fn project() -> Option<String> {
    non_empty(vars::PLANSYNC_PROJECT)
}

/// Returns the value of `PLANSYNC_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::PLANSYNC_CONFIG).map(PathBuf::from)
}

/// Returns `true` if `PLANSYNC_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::PLANSYNC_TIMINGS).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
