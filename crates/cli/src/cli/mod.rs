// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::help;
use clap::{Parser, ValueEnum};

pub use args::RemoteArgs;

/// Output format for plans and reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "plansync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Upload a markdown planning document to a Plane project")]
#[command(
    long_about = "Upload a markdown planning document to a Plane project.\n\n\
    Cycles, modules and issues described by the document's YAML blocks are created \
    in order; issues are linked to their module and to the cycle their module starts in."
)]
#[command(after_help = help::after_help())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Planning document to read
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    #[command(flatten)]
    pub remote: RemoteArgs,

    /// Parse and report only; nothing is sent
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Config file [default: ./plansync.toml, then the user config dir]
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log request details
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
