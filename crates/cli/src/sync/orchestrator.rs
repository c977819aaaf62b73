// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replicates a parsed [`Document`] into the remote project.
//!
//! Stages run strictly in order: cycles, then each module followed by its
//! issues, then cycle links. A module that fails to be created takes its
//! issues with it; every other failure only affects the entity at hand.

use chrono::NaiveDate;
use plansync_core::{Cycle, Document, Module};
use serde::Serialize;

use super::client::{PlaneClient, RemoteId};
use super::pacing::Waiter;
use super::transport::Transport;

/// Modules whose issues were attached to one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleAttribution {
    pub cycle: String,
    pub modules: Vec<String>,
    pub issues: usize,
}

/// Outcome of one synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Counts describe what would be created; nothing was sent.
    pub dry_run: bool,
    pub cycles_created: usize,
    pub modules_created: usize,
    pub issues_created: usize,
    pub cycles_failed: usize,
    pub modules_failed: usize,
    pub issues_failed: usize,
    /// Issues never attempted because their module failed.
    pub issues_skipped: usize,
    pub module_links_failed: usize,
    pub cycle_links_failed: usize,
    pub cycles: Vec<CycleAttribution>,
}

impl SyncReport {
    /// The report a successful run over `document` would produce.
    pub fn planned(document: &Document) -> Self {
        let modules: Vec<(&str, Option<NaiveDate>, usize)> = document
            .modules
            .iter()
            .map(|m| (m.name.as_str(), m.start_date, m.issues.len()))
            .collect();

        SyncReport {
            dry_run: true,
            cycles_created: document.cycles.len(),
            modules_created: document.modules.len(),
            issues_created: document.issue_count(),
            cycles: document
                .cycles
                .iter()
                .filter_map(|cycle| {
                    let members = attributed(cycle, &modules, |m| m.1);
                    attribution(cycle, &members, |m| m.0.to_string(), |m| m.2)
                })
                .collect(),
            ..SyncReport::default()
        }
    }

    /// Total failures of any kind.
    pub fn failures(&self) -> usize {
        self.cycles_failed
            + self.modules_failed
            + self.issues_failed
            + self.issues_skipped
            + self.module_links_failed
            + self.cycle_links_failed
    }
}

/// Whether a module starting on `start` belongs to `cycle`.
///
/// Only the module's start date is considered, and only cycles with both
/// bounds can hold modules.
pub fn starts_within(cycle: &Cycle, start: Option<NaiveDate>) -> bool {
    start.is_some_and(|date| cycle.contains(date))
}

fn attributed<'m, M>(
    cycle: &Cycle,
    modules: &'m [M],
    start: impl Fn(&M) -> Option<NaiveDate>,
) -> Vec<&'m M> {
    modules
        .iter()
        .filter(|&m| starts_within(cycle, start(m)))
        .collect()
}

fn attribution<M>(
    cycle: &Cycle,
    members: &[&M],
    name: impl Fn(&M) -> String,
    issues: impl Fn(&M) -> usize,
) -> Option<CycleAttribution> {
    let count: usize = members.iter().map(|&m| issues(m)).sum();
    if count == 0 {
        return None;
    }
    Some(CycleAttribution {
        cycle: cycle.name.clone(),
        modules: members.iter().map(|&m| name(m)).collect(),
        issues: count,
    })
}

/// A module that exists remotely, with the issues created under it.
struct CreatedModule<'d> {
    name: &'d str,
    start_date: Option<NaiveDate>,
    issues: Vec<RemoteId>,
}

/// Drives a [`PlaneClient`] over a whole document.
pub struct Synchronizer<T: Transport, W: Waiter> {
    client: PlaneClient<T, W>,
}

impl<T: Transport, W: Waiter> Synchronizer<T, W> {
    pub fn new(client: PlaneClient<T, W>) -> Self {
        Synchronizer { client }
    }

    /// Create every entity of `document` and link issues to modules and cycles.
    pub fn synchronize(&mut self, document: &Document) -> SyncReport {
        let mut report = SyncReport::default();

        let cycles = self.create_cycles(&document.cycles, &mut report);
        let modules = self.create_modules(&document.modules, &mut report);
        self.link_cycles(&cycles, &modules, &mut report);

        tracing::info!(
            "created {} cycles, {} modules, {} issues ({} failures)",
            report.cycles_created,
            report.modules_created,
            report.issues_created,
            report.failures()
        );
        report
    }

    fn create_cycles<'d>(
        &mut self,
        cycles: &'d [Cycle],
        report: &mut SyncReport,
    ) -> Vec<(&'d Cycle, RemoteId)> {
        let mut created = Vec::with_capacity(cycles.len());
        for cycle in cycles {
            match self.client.create_cycle(cycle) {
                Ok(id) => {
                    report.cycles_created += 1;
                    created.push((cycle, id));
                }
                Err(_) => report.cycles_failed += 1,
            }
        }
        created
    }

    fn create_modules<'d>(
        &mut self,
        modules: &'d [Module],
        report: &mut SyncReport,
    ) -> Vec<CreatedModule<'d>> {
        let mut created = Vec::with_capacity(modules.len());
        for module in modules {
            let module_id = match self.client.create_module(module) {
                Ok(id) => id,
                Err(_) => {
                    report.modules_failed += 1;
                    report.issues_skipped += module.issues.len();
                    if !module.issues.is_empty() {
                        tracing::warn!(
                            "skipping {} issues of module '{}'",
                            module.issues.len(),
                            module.name
                        );
                    }
                    continue;
                }
            };
            report.modules_created += 1;

            let mut issues = Vec::with_capacity(module.issues.len());
            for issue in &module.issues {
                let issue_id = match self.client.create_issue(issue) {
                    Ok(id) => id,
                    Err(_) => {
                        report.issues_failed += 1;
                        continue;
                    }
                };
                report.issues_created += 1;
                if self.client.link_issue_to_module(&module_id, &issue_id).is_err() {
                    report.module_links_failed += 1;
                }
                issues.push(issue_id);
            }

            created.push(CreatedModule {
                name: &module.name,
                start_date: module.start_date,
                issues,
            });
        }
        created
    }

    fn link_cycles(
        &mut self,
        cycles: &[(&Cycle, RemoteId)],
        modules: &[CreatedModule<'_>],
        report: &mut SyncReport,
    ) {
        for (cycle, cycle_id) in cycles {
            let members = attributed(cycle, modules, |m| m.start_date);
            for module in &members {
                tracing::info!("  {} -> {}", module.name, cycle.name);
            }

            let issues: Vec<RemoteId> = members
                .iter()
                .flat_map(|m| m.issues.iter().cloned())
                .collect();
            if issues.is_empty() {
                continue;
            }
            if self.client.link_issues_to_cycle(cycle_id, &issues).is_err() {
                report.cycle_links_failed += 1;
                continue;
            }
            if let Some(entry) = attribution(cycle, &members, |m| m.name.to_string(), |m| m.issues.len()) {
                report.cycles.push(entry);
            }
        }
    }
}
