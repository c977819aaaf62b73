// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use plansync_core::model::{Module, DEFAULT_MODULE_STATUS};
use serde_json::{json, Value};

use super::pacing::Waiter;
use super::transport::{Response, Transport, TransportError, TransportResult};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub body: Value,
}

/// Mock transport replaying scripted responses.
///
/// Clones share the script and the request log, so a test can keep a handle
/// after moving the transport into a client.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<TransportResult<Response>>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, result: TransportResult<Response>) {
        self.script.lock().unwrap().push_back(result);
    }

    pub fn push_status(&self, status: u16) {
        self.push(Ok(Response::new(status, "")));
    }

    /// A 201 response carrying `id`.
    pub fn push_created(&self, id: &str) {
        self.push(Ok(Response::new(201, json!({ "id": id }).to_string())));
    }

    pub fn push_failure(&self) {
        self.push(Err(TransportError::Request {
            url: "mock".to_string(),
            reason: "connection refused".to_string(),
        }));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// URLs of all requests, in order.
    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl Transport for MockTransport {
    fn post(&mut self, url: &str, body: &Value) -> TransportResult<Response> {
        self.requests.lock().unwrap().push(Request {
            url: url.to_string(),
            body: body.clone(),
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request {
                    url: url.to_string(),
                    reason: "no scripted response".to_string(),
                })
            })
    }
}

/// Waiter recording requested durations instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingWaiter {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingWaiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

impl Waiter for RecordingWaiter {
    fn wait(&mut self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// A module with default fields and no issues.
pub fn module(name: &str) -> Module {
    Module {
        name: name.to_string(),
        description: String::new(),
        start_date: None,
        target_date: None,
        lead: None,
        members: Vec::new(),
        status: DEFAULT_MODULE_STATUS.to_string(),
        issues: Vec::new(),
    }
}
