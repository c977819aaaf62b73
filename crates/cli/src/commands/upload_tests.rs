// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::sync::test_helpers::{MockTransport, RecordingWaiter};
use crate::sync::RetryPolicy;
use clap::Parser;
use std::io::Cursor;
use tempfile::TempDir;

const PLAN: &str = r#"**Project Identifier**: `ABC`

## 7. Modules

### Module 1: Auth

```yaml
name: Auth
start_date: 2024-01-02
```

#### ABC-001: Login (5pt, High)

```yaml
priority: high
estimate_point: 5
```
"#;

struct Fixture {
    _temp: TempDir,
    path: std::path::PathBuf,
    mock: MockTransport,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plan.md");
        std::fs::write(&path, PLAN).unwrap();
        Fixture {
            _temp: temp,
            path,
            mock: MockTransport::new(),
        }
    }

    fn cli(&self, extra: &[&str]) -> Cli {
        let mut args = vec!["plansync".to_string(), self.path.display().to_string()];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    /// Run with a scripted client; returns (result, stdout, stderr).
    fn run(&self, cli: &Cli, input: Option<&str>) -> (Result<()>, String, String) {
        let overrides = cli.remote.overrides();
        self.run_with(cli, input, || {
            Settings::resolve(&overrides, &Overrides::default(), &Config::default())
        })
    }

    fn run_with(
        &self,
        cli: &Cli,
        input: Option<&str>,
        resolve: impl FnOnce() -> Result<Settings>,
    ) -> (Result<()>, String, String) {
        let mut console = Console {
            input: input.map(|s| Cursor::new(s.to_string())),
            out: Vec::new(),
            err: Vec::new(),
        };
        let mock = self.mock.clone();
        let result = run_impl(cli, &mut console, Palette::plain(), resolve, |_, target| {
            Ok(PlaneClient::with_transport(
                target.endpoint(),
                mock,
                RecordingWaiter::new(),
                RetryPolicy::immediate(),
            ))
        });
        (
            result,
            String::from_utf8(console.out).unwrap(),
            String::from_utf8(console.err).unwrap(),
        )
    }

    fn script_success(&self) {
        self.mock.push_created("m1");
        self.mock.push_created("i1");
        self.mock.push_status(200);
    }
}

const TARGET: [&str; 6] = ["-w", "acme", "-p", "p1", "-k", "secret"];

#[test]
fn dry_run_sends_nothing() {
    let fixture = Fixture::new();
    let (result, out, _) = fixture.run(&fixture.cli(&["--dry-run"]), None);

    result.unwrap();
    assert!(out.contains("Total: 1 module, 1 issue, 5pt"));
    assert!(out.contains("Dry run: nothing was sent"));
    assert!(fixture.mock.requests().is_empty());
}

#[test]
fn dry_run_ignores_settings() {
    let fixture = Fixture::new();
    let broken = || -> Result<Settings> {
        Err(Error::Config("retry.max_attempts must be at least 1".to_string()))
    };
    let (result, out, _) = fixture.run_with(&fixture.cli(&["--dry-run"]), None, broken);

    result.unwrap();
    assert!(out.contains("Total: 1 module, 1 issue, 5pt"));
}

#[test]
fn upload_surfaces_settings_error() {
    let fixture = Fixture::new();
    let broken = || -> Result<Settings> {
        Err(Error::Config("retry.max_attempts must be at least 1".to_string()))
    };
    let (result, out, _) = fixture.run_with(&fixture.cli(&["--yes"]), None, broken);

    assert!(matches!(result, Err(Error::Config(_))));
    assert!(out.is_empty());
    assert!(fixture.mock.requests().is_empty());
}

#[test]
fn dry_run_json() {
    let fixture = Fixture::new();
    let (result, out, _) = fixture.run(&fixture.cli(&["--dry-run", "-o", "json"]), None);

    result.unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["summary"]["total_issues"], 1);
    assert_eq!(value["summary"]["total_story_points"], 5);
    assert_eq!(value["document"]["identifier"], "ABC");
    assert_eq!(value["report"]["dry_run"], true);
    assert_eq!(value["warnings"], serde_json::json!([]));
}

#[test]
fn upload_requires_target() {
    let fixture = Fixture::new();
    let (result, _, _) = fixture.run(&fixture.cli(&["--yes"]), None);

    assert!(matches!(
        result,
        Err(Error::MissingSetting {
            setting: "workspace",
            ..
        })
    ));
    assert!(fixture.mock.requests().is_empty());
}

#[test]
fn upload_with_yes() {
    let fixture = Fixture::new();
    fixture.script_success();
    let mut args = TARGET.to_vec();
    args.push("--yes");

    let (result, out, err) = fixture.run(&fixture.cli(&args), None);

    result.unwrap();
    assert!(out.contains("Upload target:"));
    assert!(out.contains("Upload finished"));
    assert!(out.contains("Project: http://localhost:8090/workspaces/acme/projects/p1"));
    assert!(err.is_empty());
    assert_eq!(fixture.mock.requests().len(), 3);
}

#[test]
fn confirmation_accepted() {
    let fixture = Fixture::new();
    fixture.script_success();

    let (result, out, err) = fixture.run(&fixture.cli(&TARGET), Some("y\n"));

    result.unwrap();
    assert_eq!(err, "Upload to acme/p1? (y/n): ");
    assert!(out.contains("Issues:  1 created"));
}

#[test]
fn confirmation_declined() {
    let fixture = Fixture::new();
    let (result, out, _) = fixture.run(&fixture.cli(&TARGET), Some("n\n"));

    result.unwrap();
    assert!(out.trim_end().ends_with("cancelled"));
    assert!(fixture.mock.requests().is_empty());
}

#[test]
fn confirmation_needs_terminal() {
    let fixture = Fixture::new();
    let (result, _, _) = fixture.run(&fixture.cli(&TARGET), None);

    assert!(matches!(result, Err(Error::TtyRequired)));
    assert!(fixture.mock.requests().is_empty());
}

#[test]
fn upload_json_report() {
    let fixture = Fixture::new();
    fixture.script_success();
    let mut args = TARGET.to_vec();
    args.extend(["--yes", "-o", "json"]);

    let (result, out, _) = fixture.run(&fixture.cli(&args), None);

    result.unwrap();
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["modules_created"], 1);
    assert_eq!(report["issues_created"], 1);
    assert_eq!(report["dry_run"], false);
}

#[test]
fn missing_document_fails_before_anything() {
    let fixture = Fixture::new();
    let cli = Cli::try_parse_from(["plansync", "/nonexistent/plan.md", "--dry-run"]).unwrap();
    let (result, out, _) = fixture.run(&cli, None);

    assert!(matches!(result, Err(Error::ReadDocument { .. })));
    assert!(out.is_empty());
}
