// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Planning entities produced by the parser.
//!
//! The tree is `Document → Module → Issue`. Cycles sit beside modules rather
//! than above them; the sync step associates the two by date.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Identifier used when the document does not declare one.
pub const DEFAULT_IDENTIFIER: &str = "PROJ";

/// Status given to modules whose block omits one.
pub const DEFAULT_MODULE_STATUS: &str = "planned";

/// Urgency of an issue, as understood by the remote tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
    None,
}

impl Priority {
    /// All priorities, most urgent first.
    #[cfg(test)]
    pub const ALL: [Priority; 5] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::None,
    ];

    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::None => "none",
        }
    }

    /// Lenient conversion: anything unrecognized becomes [`Priority::Medium`].
    ///
    /// Total and idempotent, so `normalize(normalize(x).as_str())` is
    /// `normalize(x)` for every input.
    pub fn normalize(s: &str) -> Priority {
        s.trim().parse().unwrap_or_default()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "urgent" => Ok(Priority::Urgent),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            "none" => Ok(Priority::None),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// A single unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Title with the `(Npt, Priority)` annotation removed.
    pub name: String,
    /// Rich-text (HTML) body.
    pub description_html: String,
    pub priority: Priority,
    /// User handles, de-duplicated in document order.
    pub assignees: Vec<String>,
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// Story points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_point: Option<u32>,
    /// Workflow state name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Issue {
    /// An issue carrying only its name, every other field at its default.
    ///
    /// Used when an issue's structured block is missing or unreadable.
    pub fn minimal(name: impl Into<String>) -> Self {
        Issue {
            name: name.into(),
            description_html: String::new(),
            priority: Priority::default(),
            assignees: Vec::new(),
            labels: Vec::new(),
            start_date: None,
            target_date: None,
            estimate_point: None,
            state: None,
        }
    }
}

/// A named grouping of issues (an "epic").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub members: Vec<String>,
    /// Free-form status, `planned` unless the document says otherwise.
    pub status: String,
    /// Issues in document order.
    pub issues: Vec<Issue>,
}

impl Module {
    /// Sum of the issues' story points; issues without an estimate count as 0.
    pub fn story_points(&self) -> u64 {
        self.issues
            .iter()
            .filter_map(|issue| issue.estimate_point)
            .map(u64::from)
            .sum()
    }
}

/// A time-boxed sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cycle {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

impl Cycle {
    /// Whether `date` falls inside `[start_date, end_date]`.
    ///
    /// Always false when either bound is missing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

/// Root of a parsed planning document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Project identifier code, e.g. `ABC` in `ABC-001`.
    pub identifier: String,
    pub cycles: Vec<Cycle>,
    pub modules: Vec<Module>,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            identifier: DEFAULT_IDENTIFIER.to_string(),
            cycles: Vec::new(),
            modules: Vec::new(),
        }
    }
}

impl Document {
    /// Total number of issues across all modules.
    pub fn issue_count(&self) -> usize {
        self.modules.iter().map(|m| m.issues.len()).sum()
    }

    /// Total story points across all modules.
    pub fn story_points(&self) -> u64 {
        self.modules.iter().map(Module::story_points).sum()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
