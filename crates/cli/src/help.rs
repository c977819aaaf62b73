// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Examples and environment shown after the options.
pub fn after_help() -> String {
    colors::examples(
        "\
Examples:
  plansync plan.md --dry-run                      Show what would be created
  plansync plan.md -w acme -p <PROJECT> -k <KEY>  Upload after confirmation
  plansync plan.md --yes -o json                  Upload and print a JSON report

Environment:
  PLANSYNC_API_URL, PLANSYNC_WORKSPACE, PLANSYNC_PROJECT, PLANSYNC_API_KEY
  PLANSYNC_CONFIG: path of the config file
  RUST_LOG: log filter (default: info)",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
