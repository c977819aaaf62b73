// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and report output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use plansync_core::Priority;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Warnings: muted amber
    pub const WARNING: u8 = 179;
    /// Completed work: soft green
    pub const SUCCESS: u8 = 114;
    /// Failures: soft red
    pub const FAILURE: u8 = 203;

    pub const URGENT: u8 = 203;
    pub const HIGH: u8 = 215;
    pub const MEDIUM: u8 = 74;
    pub const LOW: u8 = 245;
    pub const NONE: u8 = 240;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color choice for one rendering.
///
/// Report formatting takes a `Palette` rather than probing the terminal so
/// output stays deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colors when stdout and the environment allow them.
    pub fn detect() -> Self {
        Palette {
            enabled: should_colorize(),
        }
    }

    pub fn plain() -> Self {
        Palette { enabled: false }
    }

    pub fn colored() -> Self {
        Palette { enabled: true }
    }

    fn apply(&self, code: u8, text: &str) -> String {
        if self.enabled {
            paint(code, text)
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.apply(codes::HEADER, text)
    }

    pub fn context(&self, text: &str) -> String {
        self.apply(codes::CONTEXT, text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.apply(codes::WARNING, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.apply(codes::SUCCESS, text)
    }

    pub fn failure(&self, text: &str) -> String {
        self.apply(codes::FAILURE, text)
    }

    /// `text` in the color of `priority`.
    pub fn priority(&self, priority: Priority, text: &str) -> String {
        let code = match priority {
            Priority::Urgent => codes::URGENT,
            Priority::High => codes::HIGH,
            Priority::Medium => codes::MEDIUM,
            Priority::Low => codes::LOW,
            Priority::None => codes::NONE,
        };
        self.apply(code, text)
    }
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   plansync plan.md --dry-run      Show what would be created
/// ```
///
/// Section headers (lines ending with `:`) get the header color, commands
/// (text before a run of two or more spaces) the literal color, and
/// `<placeholders>` inside commands the context color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Colorize a command, highlighting `<placeholders>` as context.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.starts_with('<') && word.ends_with('>') {
                context(word)
            } else if word.is_empty() {
                String::new()
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let gap = line.find("  ")?;
    let rest = &line[gap..];
    let spaces = rest.len() - rest.trim_start_matches(' ').len();
    (gap + spaces < line.len()).then_some(gap)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
