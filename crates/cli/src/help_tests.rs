// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn after_help_lists_examples_and_environment() {
    std::env::set_var("NO_COLOR", "1");
    let text = after_help();
    assert!(text.starts_with("Examples:"));
    assert!(text.contains("--dry-run"));
    assert!(text.contains("PLANSYNC_API_KEY"));
}
