// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Counts derived from a parsed document, for reporting.

use serde::Serialize;

use crate::model::Document;

/// Per-module line of a [`PlanSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub issues: usize,
    pub story_points: u64,
}

/// What a document would create, without touching the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub identifier: String,
    pub cycles: usize,
    pub modules: Vec<ModuleSummary>,
    pub total_issues: usize,
    pub total_story_points: u64,
}

impl PlanSummary {
    pub fn of(document: &Document) -> Self {
        let modules = document
            .modules
            .iter()
            .map(|module| ModuleSummary {
                name: module.name.clone(),
                issues: module.issues.len(),
                story_points: module.story_points(),
            })
            .collect();

        PlanSummary {
            identifier: document.identifier.clone(),
            cycles: document.cycles.len(),
            modules,
            total_issues: document.issue_count(),
            total_story_points: document.story_points(),
        }
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
