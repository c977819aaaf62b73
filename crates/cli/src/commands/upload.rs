// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse a planning document and upload it, or report what would be uploaded.

use std::io::{BufRead, IsTerminal, Write};

use plansync_core::{parse_with_warnings, Document, Parsed, PlanSummary};
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::colors::Palette;
use crate::config::{Config, Overrides, Settings, Target};
use crate::display::{format_plan, format_report, format_target};
use crate::error::{Error, Result};
use crate::sync::{PlaneClient, SyncReport, Synchronizer, Transport, Waiter};

use super::{confirm, read_document};

/// Streams used by one run. `input` is `None` when stdin is not a terminal.
pub struct Console<R, O, E> {
    pub input: Option<R>,
    pub out: O,
    pub err: E,
}

/// JSON shape of a dry run.
#[derive(Serialize)]
struct PlanOutput<'a> {
    document: &'a Document,
    summary: PlanSummary,
    warnings: Vec<String>,
    report: &'a SyncReport,
}

pub fn run(cli: &Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let input = stdin.is_terminal().then(|| stdin.lock());
    let mut console = Console {
        input,
        out: std::io::stdout().lock(),
        err: std::io::stderr(),
    };

    let resolve = || -> Result<Settings> {
        let (config, _) = Config::discover(cli.config.as_deref())?;
        Settings::resolve(&cli.remote.overrides(), &Overrides::from_env(), &config)
    };
    run_impl(cli, &mut console, Palette::detect(), resolve, |settings, target| {
        PlaneClient::new(
            target.endpoint(),
            &target.api_key,
            settings.timeout,
            settings.retry,
        )
        .map_err(Error::from)
    })
}

/// Internal implementation with injectable streams, settings and client (for
/// testing).
///
/// A dry run only parses, so it never calls `resolve` and a broken config file
/// cannot fail it. `connect` is only called once the upload is confirmed.
pub(crate) fn run_impl<R, O, E, T, W, S, F>(
    cli: &Cli,
    console: &mut Console<R, O, E>,
    palette: Palette,
    resolve: S,
    connect: F,
) -> Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
    T: Transport,
    W: Waiter,
    S: FnOnce() -> Result<Settings>,
    F: FnOnce(&Settings, &Target) -> Result<PlaneClient<T, W>>,
{
    let text = read_document(&cli.document)?;
    let Parsed { document, warnings } =
        crate::time_phase!("document::parse", parse_with_warnings(&text));

    if cli.dry_run {
        let report = SyncReport::planned(&document);
        return match cli.output {
            OutputFormat::Text => {
                writeln!(
                    console.out,
                    "{}\n\n{}",
                    format_plan(&document, &warnings, palette),
                    format_report(&report, None, palette)
                )?;
                Ok(())
            }
            OutputFormat::Json => write_json(
                &mut console.out,
                &PlanOutput {
                    document: &document,
                    summary: PlanSummary::of(&document),
                    warnings: warnings.iter().map(ToString::to_string).collect(),
                    report: &report,
                },
            ),
        };
    }

    let settings = resolve()?;
    let target = settings.target()?;
    match cli.output {
        OutputFormat::Text => writeln!(
            console.out,
            "{}\n\n{}\n",
            format_plan(&document, &warnings, palette),
            format_target(&target)
        )?,
        OutputFormat::Json => {
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
        }
    }

    if !cli.yes {
        let Some(input) = console.input.as_mut() else {
            return Err(Error::TtyRequired);
        };
        let question = format!("Upload to {}/{}?", target.workspace, target.project);
        if !confirm::ask(input, &mut console.err, &question)? {
            writeln!(console.out, "cancelled")?;
            return Ok(());
        }
    }

    let client = connect(&settings, &target)?;
    let report = crate::time_phase!(
        "sync::upload",
        Synchronizer::new(client).synchronize(&document)
    );

    match cli.output {
        OutputFormat::Text => writeln!(
            console.out,
            "\n{}",
            format_report(&report, Some(&target.project_url()), palette)
        )?,
        OutputFormat::Json => write_json(&mut console.out, &report)?,
    }
    Ok(())
}

fn write_json<O: Write, V: Serialize>(out: &mut O, value: &V) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
