// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Planning document parser.
//!
//! Works on the output of [`tokenize`]: sections are located by their
//! top-level headings, entities by their entity headings, and each entity's
//! fields come from the first YAML block in its span.
//!
//! Nothing in here fails. A cycle or module whose block is missing or
//! unreadable is dropped; an issue in the same situation is kept with only its
//! name. Every such decision is recorded as a [`ParseWarning`].

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::block::{first_block, FieldResult, RawBlock};
use crate::lexer::{tokenize, Line, LineKind, ISSUE_HEADING_LEVEL};
use crate::model::{
    Cycle, Document, Issue, Module, Priority, DEFAULT_IDENTIFIER, DEFAULT_MODULE_STATUS,
};

// Hard-coded patterns, verified by the parser tests.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\*\*[^*]+\*\*:\s*`([A-Z]{3,7})`") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)\s*\(\s*\d+\s*pt\s*,\s*\w+\s*\)\s*$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Heading words that open the two recognized sections.
const CYCLES_SECTION: &str = "cycles";
const MODULES_SECTION: &str = "modules";

/// Which kind of entity a warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Cycle,
    Module,
    Issue,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Cycle => "cycle",
            EntityKind::Module => "module",
            EntityKind::Issue => "issue",
        }
    }

    /// What the parser does with this kind when its block is unusable.
    pub fn fallback(&self) -> &'static str {
        match self {
            EntityKind::Cycle | EntityKind::Module => "skipped",
            EntityKind::Issue => "kept with defaults",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recoverable problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    #[error("modules section not found\n  hint: add a heading like '## 7. Modules'")]
    MissingModuleSection,

    #[error("{kind} '{name}' (line {line}) has no yaml block: {}", kind.fallback())]
    MissingBlock {
        kind: EntityKind,
        name: String,
        line: usize,
    },

    #[error("{kind} '{name}' (line {line}) has an invalid yaml block: {}: {reason}", kind.fallback())]
    BlockDecode {
        kind: EntityKind,
        name: String,
        line: usize,
        reason: String,
    },

    #[error("{kind} '{name}' (line {line}): '{key}' is not a {expected}, ignoring it")]
    InvalidField {
        kind: EntityKind,
        name: String,
        line: usize,
        key: String,
        expected: &'static str,
    },

    #[error("yaml block opened at line {line} is never closed; it ends at the heading on line {closed_by}")]
    UnterminatedBlock { line: usize, closed_by: usize },

    #[error("issue heading '{key}-{number}' (line {line}) does not use project identifier '{identifier}': not an issue")]
    ForeignIssueKey {
        key: String,
        number: String,
        line: usize,
        identifier: String,
    },
}

/// Parse result together with everything that was skipped or degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub document: Document,
    pub warnings: Vec<ParseWarning>,
}

/// Parse a planning document, logging each warning.
pub fn parse(text: &str) -> Document {
    let parsed = parse_with_warnings(text);
    for warning in &parsed.warnings {
        tracing::warn!("{}", warning);
    }
    parsed.document
}

/// Parse a planning document, returning warnings instead of logging them.
pub fn parse_with_warnings(text: &str) -> Parsed {
    let lines = tokenize(text);
    let identifier = extract_identifier(&lines);
    let mut assembler = Assembler {
        identifier,
        warnings: unterminated_blocks(&lines),
    };

    let cycles = match section(&lines, CYCLES_SECTION, false) {
        Some(span) => assembler.cycles(span),
        None => Vec::new(),
    };
    let modules = match section(&lines, MODULES_SECTION, true) {
        Some(span) => assembler.modules(span),
        None => {
            assembler.warnings.push(ParseWarning::MissingModuleSection);
            Vec::new()
        }
    };

    Parsed {
        document: Document {
            identifier: assembler.identifier,
            cycles,
            modules,
        },
        warnings: assembler.warnings,
    }
}

/// Remove a trailing `(8pt, High)` style annotation from an issue title.
pub fn strip_annotation(title: &str) -> String {
    ANNOTATION_RE.replace(title, "").trim().to_string()
}

/// First ``**Label**: `CODE` `` marker outside fenced code, or the default.
fn extract_identifier(lines: &[Line<'_>]) -> String {
    let mut in_fence = false;
    for line in lines {
        match line.kind {
            LineKind::FenceOpen { .. } => in_fence = true,
            LineKind::FenceClose => in_fence = false,
            LineKind::Body if !in_fence => {
                if let Some(code) = IDENTIFIER_RE.captures(line.text).and_then(|c| c.get(1)) {
                    return code.as_str().to_string();
                }
            }
            _ => {}
        }
    }
    DEFAULT_IDENTIFIER.to_string()
}

/// Fences that an entity heading had to close.
fn unterminated_blocks(lines: &[Line<'_>]) -> Vec<ParseWarning> {
    let mut warnings = Vec::new();
    let mut open = None;
    for line in lines {
        match line.kind {
            LineKind::FenceOpen { .. } => open = Some(line.number),
            LineKind::FenceClose => open = None,
            kind if kind.is_entity_heading() => {
                if let Some(opened) = open.take() {
                    warnings.push(ParseWarning::UnterminatedBlock {
                        line: opened,
                        closed_by: line.number,
                    });
                }
            }
            _ => {}
        }
    }
    warnings
}

/// Top-level heading info: `(numbered, title without numbering)`.
fn top_level_heading<'a>(line: &Line<'a>) -> Option<(bool, &'a str)> {
    match line.kind {
        LineKind::Heading { level, title } if level <= 2 => {
            let rest = title.trim_start_matches(|c: char| c.is_ascii_digit());
            let numbered = rest.len() < title.len() && rest.starts_with('.');
            let bare = if numbered { &rest[1..] } else { title };
            Some((numbered, bare.trim()))
        }
        _ => None,
    }
}

/// Body lines of the section whose heading starts with `word`.
///
/// With `numbered_end`, the section runs to the next *numbered* top-level
/// heading; otherwise to the next top-level heading of any kind.
fn section<'l, 'a>(lines: &'l [Line<'a>], word: &str, numbered_end: bool) -> Option<&'l [Line<'a>]> {
    let start = lines.iter().position(|line| {
        top_level_heading(line).is_some_and(|(_, title)| {
            title
                .get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word))
        })
    })?;

    let body = &lines[start + 1..];
    let end = body
        .iter()
        .position(|line| top_level_heading(line).is_some_and(|(numbered, _)| numbered || !numbered_end))
        .unwrap_or(body.len());
    Some(&body[..end])
}

/// Identifies the entity a warning refers to.
struct Origin {
    kind: EntityKind,
    name: String,
    line: usize,
}

struct Assembler {
    identifier: String,
    warnings: Vec<ParseWarning>,
}

impl Assembler {
    fn cycles(&mut self, section: &[Line<'_>]) -> Vec<Cycle> {
        let mut cycles = Vec::new();
        for (idx, line) in section.iter().enumerate() {
            let LineKind::CycleHeading { name } = line.kind else {
                continue;
            };
            let rest = &section[idx + 1..];
            let end = rest
                .iter()
                .position(|l| l.kind.heading_level().is_some_and(|level| level <= 3))
                .unwrap_or(rest.len());
            let origin = Origin {
                kind: EntityKind::Cycle,
                name: name.to_string(),
                line: line.number,
            };
            if let Some(block) = self.block(&origin, &rest[..end]) {
                cycles.push(self.cycle(&origin, &block));
            }
        }
        cycles
    }

    fn cycle(&mut self, origin: &Origin, block: &RawBlock) -> Cycle {
        Cycle {
            name: self
                .field(origin, block.string("name"))
                .unwrap_or_else(|| origin.name.clone()),
            description: self
                .field(origin, block.string("description"))
                .unwrap_or_default(),
            start_date: self.field(origin, block.date("start_date")),
            end_date: self.field(origin, block.date("end_date")),
            owned_by: self.field(origin, block.string("owned_by")),
        }
    }

    fn modules(&mut self, section: &[Line<'_>]) -> Vec<Module> {
        let starts: Vec<usize> = section
            .iter()
            .enumerate()
            .filter(|(_, line)| matches!(line.kind, LineKind::ModuleHeading { .. }))
            .map(|(idx, _)| idx)
            .collect();

        let mut modules = Vec::new();
        for (n, &start) in starts.iter().enumerate() {
            let end = starts.get(n + 1).copied().unwrap_or(section.len());
            let LineKind::ModuleHeading { name } = section[start].kind else {
                continue;
            };
            let origin = Origin {
                kind: EntityKind::Module,
                name: name.to_string(),
                line: section[start].number,
            };
            if let Some(module) = self.module(&origin, &section[start + 1..end]) {
                modules.push(module);
            }
        }
        modules
    }

    fn module(&mut self, origin: &Origin, span: &[Line<'_>]) -> Option<Module> {
        let preamble_end = span
            .iter()
            .position(|line| matches!(line.kind, LineKind::IssueHeading { .. }))
            .unwrap_or(span.len());
        let block = self.block(origin, &span[..preamble_end])?;

        Some(Module {
            name: self
                .field(origin, block.string("name"))
                .unwrap_or_else(|| origin.name.clone()),
            description: self
                .field(origin, block.string("description"))
                .unwrap_or_default(),
            start_date: self.field(origin, block.date("start_date")),
            target_date: self.field(origin, block.date("target_date")),
            lead: self.field(origin, block.string("lead")),
            members: self
                .field(origin, block.string_list("members"))
                .unwrap_or_default(),
            status: self
                .field(origin, block.string("status"))
                .unwrap_or_else(|| DEFAULT_MODULE_STATUS.to_string()),
            issues: self.issues(span),
        })
    }

    fn issues(&mut self, span: &[Line<'_>]) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (idx, line) in span.iter().enumerate() {
            let LineKind::IssueHeading { key, number, title } = line.kind else {
                continue;
            };
            if key != self.identifier {
                self.warnings.push(ParseWarning::ForeignIssueKey {
                    key: key.to_string(),
                    number: number.to_string(),
                    line: line.number,
                    identifier: self.identifier.clone(),
                });
                continue;
            }

            let rest = &span[idx + 1..];
            let end = rest
                .iter()
                .position(|l| {
                    l.kind
                        .heading_level()
                        .is_some_and(|level| level <= ISSUE_HEADING_LEVEL)
                })
                .unwrap_or(rest.len());

            let mut name = strip_annotation(title);
            if name.is_empty() {
                name = format!("{key}-{number}");
            }
            let origin = Origin {
                kind: EntityKind::Issue,
                name,
                line: line.number,
            };
            let issue = match self.block(&origin, &rest[..end]) {
                Some(block) => self.issue(&origin, &block),
                None => Issue::minimal(origin.name.clone()),
            };
            issues.push(issue);
        }
        issues
    }

    fn issue(&mut self, origin: &Origin, block: &RawBlock) -> Issue {
        Issue {
            name: origin.name.clone(),
            description_html: self
                .field(origin, block.string("description_html"))
                .unwrap_or_default(),
            priority: self
                .field(origin, block.string("priority"))
                .map(|p| Priority::normalize(&p))
                .unwrap_or_default(),
            assignees: self
                .field(origin, block.string_list("assignees"))
                .unwrap_or_default(),
            labels: self
                .field(origin, block.string_list("labels"))
                .unwrap_or_default(),
            start_date: self.field(origin, block.date("start_date")),
            target_date: self.field(origin, block.date("target_date")),
            estimate_point: self.field(origin, block.non_negative_int("estimate_point")),
            state: self.field(origin, block.string("state")),
        }
    }

    /// Decode the first YAML block in `span`, recording why if there is none.
    fn block(&mut self, origin: &Origin, span: &[Line<'_>]) -> Option<RawBlock> {
        let Some(text) = first_block(span) else {
            self.warnings.push(ParseWarning::MissingBlock {
                kind: origin.kind,
                name: origin.name.clone(),
                line: origin.line,
            });
            return None;
        };
        match RawBlock::decode(&text) {
            Ok(block) => Some(block),
            Err(e) => {
                self.warnings.push(ParseWarning::BlockDecode {
                    kind: origin.kind,
                    name: origin.name.clone(),
                    line: origin.line,
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    /// Unwrap a field, downgrading a type mismatch to a warning.
    fn field<T>(&mut self, origin: &Origin, result: FieldResult<T>) -> Option<T> {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.warnings.push(ParseWarning::InvalidField {
                    kind: origin.kind,
                    name: origin.name.clone(),
                    line: origin.line,
                    key: e.key,
                    expected: e.expected,
                });
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
