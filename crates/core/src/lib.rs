// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! plansync-core: planning document model and parser
//!
//! This crate turns a markdown planning document into a [`Document`] tree
//! (modules owning issues, with cycles alongside) without any network or
//! file access. The `plansync` CLI uploads the result.

pub mod block;
pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod summary;

pub use error::{Error, Result};
pub use model::{Cycle, Document, Issue, Module, Priority};
pub use parser::{parse, parse_with_warnings, strip_annotation, EntityKind, ParseWarning, Parsed};
pub use summary::{ModuleSummary, PlanSummary};
