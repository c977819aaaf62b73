// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Upload of a parsed plan to the remote project-tracking service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Synchronizer │────►│ PlaneClient │────►│  Transport  │────► REST API
//! │   (stages)   │     │  (retries)  │     │   (trait)   │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!                             │
//!                             ▼
//!                      ┌─────────────┐
//!                      │   Waiter    │  (pacing, backoff)
//!                      └─────────────┘
//! ```
//!
//! Injectable transport and waiter traits keep every stage testable without
//! a network or real sleeps.

mod client;
mod orchestrator;
mod pacing;
mod transport;

pub use client::{
    cycle_payload, issue_payload, link_payload, module_payload, CreateError, Endpoint, LinkError,
    PlaneClient, RemoteId, EMPTY_DESCRIPTION_HTML,
};
pub use orchestrator::{starts_within, CycleAttribution, SyncReport, Synchronizer};
pub use pacing::{RetryPolicy, ThreadWaiter, Waiter};
pub use transport::{
    HttpTransport, Response, Transport, TransportError, TransportResult, DEFAULT_TIMEOUT,
};

#[cfg(test)]
pub(crate) mod test_helpers;
