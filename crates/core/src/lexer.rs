// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line classifier for planning documents.
//!
//! Every line is tagged exactly once, so section and span boundaries can be
//! decided by looking at tags instead of re-scanning text. Fenced code is
//! tracked so that a `# comment` inside a YAML block is never mistaken for a
//! heading. The one exception is a cycle, module or issue heading: it closes a
//! fence left open above it, so a single missing closing fence cannot swallow
//! the entities that follow.

use regex::Regex;
use std::sync::LazyLock;

// Hard-coded patterns, verified by the lexer tests.
static CYCLE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)^cycle\s+\d+\s*:\s*(.+)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static MODULE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)^module\s+\d+\s*:\s*(.+)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static ISSUE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^([A-Z]+)-(\d+)\s*:\s*(.+)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Heading level used for cycle and module headings (`###`).
pub const ENTITY_HEADING_LEVEL: usize = 3;
/// Heading level used for issue headings (`####`).
pub const ISSUE_HEADING_LEVEL: usize = 4;

/// What a single line of the document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Any ATX heading that is not one of the entity headings below.
    Heading { level: usize, title: &'a str },
    /// `### Cycle <n>: <name>`
    CycleHeading { name: &'a str },
    /// `### Module <n>: <name>`
    ModuleHeading { name: &'a str },
    /// `#### <KEY>-<digits>: <title>`
    IssueHeading {
        key: &'a str,
        number: &'a str,
        title: &'a str,
    },
    /// Opening code fence with its info string (possibly empty).
    FenceOpen { info: &'a str },
    FenceClose,
    /// Anything else, including lines inside fenced code.
    Body,
}

impl LineKind<'_> {
    /// Heading level for any heading kind, `None` for other lines.
    pub fn heading_level(&self) -> Option<usize> {
        match self {
            LineKind::Heading { level, .. } => Some(*level),
            LineKind::CycleHeading { .. } | LineKind::ModuleHeading { .. } => {
                Some(ENTITY_HEADING_LEVEL)
            }
            LineKind::IssueHeading { .. } => Some(ISSUE_HEADING_LEVEL),
            _ => None,
        }
    }

    /// Cycle, module or issue heading.
    pub fn is_entity_heading(&self) -> bool {
        matches!(
            self,
            LineKind::CycleHeading { .. }
                | LineKind::ModuleHeading { .. }
                | LineKind::IssueHeading { .. }
        )
    }
}

/// A classified line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
    pub kind: LineKind<'a>,
}

/// Classify every line of `text`.
pub fn tokenize(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut fence: Option<&str> = None;

    for (idx, raw) in text.lines().enumerate() {
        let kind = match fence {
            Some(marker) => {
                if is_fence_close(raw, marker) {
                    fence = None;
                    LineKind::FenceClose
                } else {
                    // An entity heading ends an unterminated fence.
                    match classify_heading(raw).filter(LineKind::is_entity_heading) {
                        Some(kind) => {
                            fence = None;
                            kind
                        }
                        None => LineKind::Body,
                    }
                }
            }
            None => match fence_open(raw) {
                Some((marker, info)) => {
                    fence = Some(marker);
                    LineKind::FenceOpen { info }
                }
                None => classify_heading(raw).unwrap_or(LineKind::Body),
            },
        };
        lines.push(Line {
            number: idx + 1,
            text: raw,
            kind,
        });
    }

    lines
}

/// Recognize an opening fence, returning the fence marker and info string.
fn fence_open(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    let fence_char = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == fence_char).count();
    if len < 3 {
        return None;
    }
    // Markers are ASCII, so char count equals byte count here.
    let (marker, info) = trimmed.split_at(len);
    Some((marker, info.trim()))
}

fn is_fence_close(line: &str, marker: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(marker) && trimmed.chars().all(|c| marker.starts_with(c))
}

/// Classify an ATX heading line, if it is one.
fn classify_heading(line: &str) -> Option<LineKind<'_>> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = strip_closing_sequence(rest.trim());

    if level == ENTITY_HEADING_LEVEL {
        if let Some(caps) = CYCLE_RE.captures(title) {
            if let Some(name) = caps.get(1) {
                return Some(LineKind::CycleHeading {
                    name: name.as_str().trim(),
                });
            }
        }
        if let Some(caps) = MODULE_RE.captures(title) {
            if let Some(name) = caps.get(1) {
                return Some(LineKind::ModuleHeading {
                    name: name.as_str().trim(),
                });
            }
        }
    }

    if level == ISSUE_HEADING_LEVEL {
        if let Some(caps) = ISSUE_RE.captures(title) {
            if let (Some(key), Some(number), Some(title)) = (caps.get(1), caps.get(2), caps.get(3))
            {
                return Some(LineKind::IssueHeading {
                    key: key.as_str(),
                    number: number.as_str(),
                    title: title.as_str().trim(),
                });
            }
        }
    }

    Some(LineKind::Heading { level, title })
}

/// Drop an optional closing `#` run, as in `## Title ##`.
///
/// The run only counts when it is the whole title or follows whitespace, so
/// `C#` keeps its hash.
fn strip_closing_sequence(title: &str) -> &str {
    let without = title.trim_end_matches('#');
    if without.len() == title.len() {
        return title;
    }
    if without.is_empty() {
        return "";
    }
    if without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        title
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
