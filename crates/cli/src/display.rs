// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of plans and sync reports.
//!
//! Every function returns the finished text; callers decide where it goes.

use chrono::NaiveDate;
use plansync_core::block::DATE_FORMAT;
use plansync_core::{Cycle, Document, Issue, ParseWarning, PlanSummary};

use crate::colors::Palette;
use crate::config::Target;
use crate::sync::SyncReport;

/// Shown in place of a missing date.
const NO_DATE: &str = "N/A";

/// Width of the widest priority tag, `[urgent]`.
const TAG_WIDTH: usize = 8;

/// `"1 module"`, `"2 modules"`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| NO_DATE.to_string(), |d| d.format(DATE_FORMAT).to_string())
}

fn period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    format!("{} ~ {}", date(start), date(end))
}

/// `"5pt"`, or `"?pt"` when the issue has no estimate.
pub fn points(issue: &Issue) -> String {
    match issue.estimate_point {
        Some(points) => format!("{points}pt"),
        None => "?pt".to_string(),
    }
}

/// One issue line: priority tag, name, points and labels.
pub fn format_issue(issue: &Issue, palette: Palette) -> String {
    let tag = format!("{:<width$}", format!("[{}]", issue.priority), width = TAG_WIDTH);
    let mut line = format!(
        "{} {} ({})",
        palette.priority(issue.priority, &tag),
        issue.name,
        points(issue)
    );
    if !issue.labels.is_empty() {
        line.push_str(&palette.context(&format!(" [{}]", issue.labels.join(", "))));
    }
    line
}

fn format_cycle(cycle: &Cycle) -> String {
    format!("  {}  {}", cycle.name, period(cycle.start_date, cycle.end_date))
}

/// Totals line, e.g. `"1 module, 2 issues, 8pt"`.
pub fn format_totals(summary: &PlanSummary) -> String {
    format!(
        "{}, {}, {}pt",
        plural(summary.module_count(), "module"),
        plural(summary.total_issues, "issue"),
        summary.total_story_points
    )
}

fn format_warning(warning: &ParseWarning) -> String {
    warning
        .to_string()
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The parsed plan: cycles, modules with their issues, totals, warnings.
pub fn format_plan(document: &Document, warnings: &[ParseWarning], palette: Palette) -> String {
    let summary = PlanSummary::of(document);
    let mut out = vec![palette.header(&format!("Plan {}", document.identifier))];

    if !document.cycles.is_empty() {
        out.push(String::new());
        out.push(palette.header("Cycles:"));
        out.extend(document.cycles.iter().map(format_cycle));
    }

    for (module, counts) in document.modules.iter().zip(&summary.modules) {
        out.push(String::new());
        out.push(palette.header(&format!("Module: {}", module.name)));
        out.push(format!(
            "  Period: {}",
            period(module.start_date, module.target_date)
        ));
        out.push(format!(
            "  Issues: {}, Story points: {}pt",
            counts.issues, counts.story_points
        ));
        for issue in &module.issues {
            out.push(format!("    {}", format_issue(issue, palette)));
        }
    }

    out.push(String::new());
    out.push(format!("Total: {}", format_totals(&summary)));

    if !warnings.is_empty() {
        out.push(String::new());
        out.push(palette.warning(&format!("{}:", plural(warnings.len(), "warning"))));
        out.extend(warnings.iter().map(format_warning));
    }
    out.join("\n")
}

/// Where an upload will go. The API key is never shown.
pub fn format_target(target: &Target) -> String {
    [
        "Upload target:".to_string(),
        format!("  API URL:   {}", target.api_url),
        format!("  Workspace: {}", target.workspace),
        format!("  Project:   {}", target.project),
    ]
    .join("\n")
}

fn outcome(created: usize, failed: usize, skipped: usize, palette: Palette) -> String {
    let mut parts = vec![palette.success(&format!("{created} created"))];
    if failed > 0 {
        parts.push(palette.failure(&format!("{failed} failed")));
    }
    if skipped > 0 {
        parts.push(palette.warning(&format!("{skipped} skipped")));
    }
    parts.join(", ")
}

/// Final counts of a run, with cycle attributions and the project URL.
pub fn format_report(report: &SyncReport, project_url: Option<&str>, palette: Palette) -> String {
    let title = if report.dry_run {
        "Dry run: nothing was sent"
    } else {
        "Upload finished"
    };
    let mut out = vec![
        palette.header(title),
        format!(
            "  Cycles:  {}",
            outcome(report.cycles_created, report.cycles_failed, 0, palette)
        ),
        format!(
            "  Modules: {}",
            outcome(report.modules_created, report.modules_failed, 0, palette)
        ),
        format!(
            "  Issues:  {}",
            outcome(
                report.issues_created,
                report.issues_failed,
                report.issues_skipped,
                palette
            )
        ),
    ];

    let link_failures = report.module_links_failed + report.cycle_links_failed;
    if link_failures > 0 {
        out.push(palette.failure(&format!(
            "  Links:   {} module, {} cycle failed",
            report.module_links_failed, report.cycle_links_failed
        )));
    }

    for attribution in &report.cycles {
        out.push(format!(
            "  {} <- {} ({})",
            attribution.cycle,
            attribution.modules.join(", "),
            plural(attribution.issues, "issue")
        ));
    }

    if let Some(url) = project_url {
        out.push(format!("Project: {url}"));
    }
    out.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
