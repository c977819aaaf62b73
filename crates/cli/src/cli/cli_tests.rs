// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("plansync").chain(args.iter().copied())).unwrap()
}

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn document_only() {
    let cli = parse(&["plan.md"]);
    assert_eq!(cli.document, PathBuf::from("plan.md"));
    assert!(!cli.dry_run);
    assert!(!cli.yes);
    assert_eq!(cli.output, OutputFormat::Text);
    assert_eq!(cli.remote.overrides(), crate::config::Overrides::default());
}

#[test]
fn short_flags() {
    let cli = parse(&["plan.md", "-w", "acme", "-p", "p1", "-k", "key", "-y", "-o", "json", "-v"]);
    let overrides = cli.remote.overrides();
    assert_eq!(overrides.workspace.as_deref(), Some("acme"));
    assert_eq!(overrides.project.as_deref(), Some("p1"));
    assert_eq!(overrides.api_key.as_deref(), Some("key"));
    assert!(cli.yes);
    assert!(cli.verbose);
    assert_eq!(cli.output, OutputFormat::Json);
}

#[test]
fn long_flags() {
    let cli = parse(&[
        "plan.md",
        "--api-url",
        "http://plane.local",
        "--dry-run",
        "--config",
        "custom.toml",
    ]);
    assert_eq!(cli.remote.api_url.as_deref(), Some("http://plane.local"));
    assert!(cli.dry_run);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn document_is_required() {
    assert!(Cli::try_parse_from(["plansync"]).is_err());
}

#[test]
fn empty_workspace_is_rejected() {
    assert!(Cli::try_parse_from(["plansync", "plan.md", "-w", "  "]).is_err());
}

#[test]
fn unknown_output_format_is_rejected() {
    assert!(Cli::try_parse_from(["plansync", "plan.md", "-o", "yaml"]).is_err());
}
