// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! plansync - upload markdown planning documents to a Plane project.
//!
//! This crate provides the `plansync` CLI on top of [`plansync_core`], which
//! parses the document. Everything that touches the network, the terminal or
//! configuration lives here.
//!
//! # Main Components
//!
//! - [`sync`] - API client with throttling retry, and the orchestrator that
//!   creates cycles, modules and issues and links them
//! - [`config`] - Layered settings (flags, environment, config file, defaults)
//! - [`Error`] - Fatal errors; per-entity failures are counted, not raised
//!
//! # Uploading
//!
//! ```rust,ignore
//! use plansync::sync::{Endpoint, PlaneClient, RetryPolicy, Synchronizer};
//!
//! let document = plansync_core::parse(&text);
//! let client = PlaneClient::new(
//!     Endpoint::new("http://localhost:8090", "acme", project_id),
//!     &api_key,
//!     std::time::Duration::from_secs(30),
//!     RetryPolicy::default(),
//! )?;
//! let report = Synchronizer::new(client).synchronize(&document);
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod timings;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, OutputFormat, RemoteArgs};
pub use config::{Config, Settings, Target};
pub use error::{Error, Result};

/// Run the CLI with parsed arguments.
pub fn run(cli: &Cli) -> Result<()> {
    commands::upload::run(cli)
}
