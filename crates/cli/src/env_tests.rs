// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::PLANSYNC_API_KEY, "PLANSYNC_API_KEY");
    assert_eq!(vars::PLANSYNC_API_URL, "PLANSYNC_API_URL");
    assert_eq!(vars::PLANSYNC_WORKSPACE, "PLANSYNC_WORKSPACE");
    assert_eq!(vars::PLANSYNC_PROJECT, "PLANSYNC_PROJECT");
    assert_eq!(vars::PLANSYNC_CONFIG, "PLANSYNC_CONFIG");
    assert_eq!(vars::PLANSYNC_TIMINGS, "PLANSYNC_TIMINGS");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_timings_follows_variable() {
    std::env::remove_var("PLANSYNC_TIMINGS");
    assert!(!timings());
    std::env::set_var("PLANSYNC_TIMINGS", "1");
    assert!(timings());
    std::env::remove_var("PLANSYNC_TIMINGS");
}

#[test]
fn test_blank_api_key_is_ignored() {
    std::env::set_var("PLANSYNC_API_KEY", "   ");
    assert_eq!(api_key(), None);
    std::env::set_var("PLANSYNC_API_KEY", "secret");
    assert_eq!(api_key().as_deref(), Some("secret"));
    std::env::remove_var("PLANSYNC_API_KEY");
}

#[test]
fn test_config_path_from_env() {
    std::env::set_var("PLANSYNC_CONFIG", "/tmp/plansync.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/tmp/plansync.toml")));
    std::env::remove_var("PLANSYNC_CONFIG");
    assert_eq!(config_path(), None);
}
