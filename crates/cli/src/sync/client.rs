// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the project-tracking service's REST API.
//!
//! Provides entity creation with:
//! - Bounded retry with linear backoff on throttled (429) responses
//! - Fixed pacing after each created module and issue
//! - Single-attempt relationship links
//!
//! No operation aborts a batch: every failure comes back as a value and is
//! logged, leaving the caller to decide what to skip.

use std::fmt;
use std::time::Duration;

use plansync_core::block::DATE_FORMAT;
use plansync_core::{Cycle, Issue, Module};
use serde::Serialize;
use serde_json::{json, Map, Value};

use super::pacing::{RetryPolicy, ThreadWaiter, Waiter};
use super::transport::{HttpTransport, Response, Transport, TransportError, TransportResult};

/// Sent in place of an empty issue description.
pub const EMPTY_DESCRIPTION_HTML: &str = "<p>No description</p>";

const STATUS_CREATED: u16 = 201;
const STATUS_OK: u16 = 200;
const STATUS_THROTTLED: u16 = 429;

/// Identifier assigned by the remote service to a created entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RemoteId(String);

impl RemoteId {
    pub fn new(id: impl Into<String>) -> Self {
        RemoteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URLs of one project's collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
    project: String,
}

impl Endpoint {
    pub fn new(api_url: &str, workspace: &str, project: &str) -> Self {
        Endpoint {
            base: format!(
                "{}/api/v1/workspaces/{}/projects/{}/",
                api_url.trim_end_matches('/'),
                workspace,
                project
            ),
            project: project.to_string(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn modules(&self) -> String {
        format!("{}modules/", self.base)
    }

    pub fn issues(&self) -> String {
        format!("{}issues/", self.base)
    }

    pub fn cycles(&self) -> String {
        format!("{}cycles/", self.base)
    }

    pub fn module_issues(&self, module: &RemoteId) -> String {
        format!("{}modules/{}/module-issues/", self.base, module)
    }

    pub fn cycle_issues(&self, cycle: &RemoteId) -> String {
        format!("{}cycles/{}/cycle-issues/", self.base, cycle)
    }
}

/// Why an entity could not be created.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    /// Every attempt was answered with 429.
    #[error("still throttled after {attempts} attempts")]
    Throttled { attempts: u32 },

    /// A status other than 201 or 429.
    #[error("rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Status 201 without a string `id` in the body.
    #[error("created, but the response carries no id")]
    MissingId,
}

/// Why a relationship could not be recorded.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("link rejected with status {status}")]
    Rejected { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Client for one workspace project.
pub struct PlaneClient<T: Transport = HttpTransport, W: Waiter = ThreadWaiter> {
    endpoint: Endpoint,
    transport: T,
    waiter: W,
    policy: RetryPolicy,
}

impl PlaneClient<HttpTransport, ThreadWaiter> {
    /// Create a client sending real HTTP requests.
    pub fn new(
        endpoint: Endpoint,
        api_key: &str,
        timeout: Duration,
        policy: RetryPolicy,
    ) -> TransportResult<Self> {
        let transport = HttpTransport::new(api_key, timeout)?;
        Ok(Self::with_transport(endpoint, transport, ThreadWaiter, policy))
    }
}

impl<T: Transport, W: Waiter> PlaneClient<T, W> {
    /// Create a client with a custom transport and waiter (for testing).
    pub fn with_transport(endpoint: Endpoint, transport: T, waiter: W, policy: RetryPolicy) -> Self {
        PlaneClient {
            endpoint,
            transport,
            waiter,
            policy,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Create a module, retrying while throttled.
    pub fn create_module(&mut self, module: &Module) -> Result<RemoteId, CreateError> {
        let url = self.endpoint.modules();
        let pacing = self.policy.module_pacing;
        let result = self.create_with_retry(&url, &module_payload(module), pacing);
        match &result {
            Ok(id) => tracing::info!("created module '{}' ({})", module.name, id),
            Err(e) => tracing::warn!("failed to create module '{}': {}", module.name, e),
        }
        result
    }

    /// Create an issue, retrying while throttled.
    pub fn create_issue(&mut self, issue: &Issue) -> Result<RemoteId, CreateError> {
        let url = self.endpoint.issues();
        let pacing = self.policy.issue_pacing;
        let result = self.create_with_retry(&url, &issue_payload(issue), pacing);
        match &result {
            Ok(id) => tracing::info!("  created issue '{}' ({})", issue.name, id),
            Err(e) => tracing::warn!("  failed to create issue '{}': {}", issue.name, e),
        }
        result
    }

    /// Create a cycle. Cycles get a single attempt.
    pub fn create_cycle(&mut self, cycle: &Cycle) -> Result<RemoteId, CreateError> {
        let url = self.endpoint.cycles();
        let payload = cycle_payload(cycle, self.endpoint.project());
        let result = self
            .transport
            .post(&url, &payload)
            .map_err(CreateError::from)
            .and_then(|response| match response.status {
                STATUS_CREATED => created_id(&response),
                status => Err(CreateError::Rejected {
                    status,
                    body: response.body,
                }),
            });
        match &result {
            Ok(id) => tracing::info!("created cycle '{}' ({})", cycle.name, id),
            Err(e) => tracing::warn!("failed to create cycle '{}': {}", cycle.name, e),
        }
        result
    }

    /// Attach one issue to a module.
    pub fn link_issue_to_module(
        &mut self,
        module: &RemoteId,
        issue: &RemoteId,
    ) -> Result<(), LinkError> {
        let url = self.endpoint.module_issues(module);
        let result = self.link(&url, std::slice::from_ref(issue));
        match &result {
            Ok(()) => tracing::debug!("    linked issue {} to module {}", issue, module),
            Err(e) => tracing::warn!("    failed to link issue {} to module {}: {}", issue, module, e),
        }
        result
    }

    /// Attach a batch of issues to a cycle. An empty batch sends nothing.
    pub fn link_issues_to_cycle(
        &mut self,
        cycle: &RemoteId,
        issues: &[RemoteId],
    ) -> Result<(), LinkError> {
        if issues.is_empty() {
            return Ok(());
        }
        let url = self.endpoint.cycle_issues(cycle);
        let result = self.link(&url, issues);
        match &result {
            Ok(()) => tracing::info!("  linked {} issues to cycle {}", issues.len(), cycle),
            Err(e) => tracing::warn!("  failed to link issues to cycle {}: {}", cycle, e),
        }
        result
    }

    fn create_with_retry(
        &mut self,
        url: &str,
        payload: &Value,
        pacing: Duration,
    ) -> Result<RemoteId, CreateError> {
        let mut attempt = 1;
        loop {
            let response = self.transport.post(url, payload)?;
            match response.status {
                STATUS_CREATED => {
                    let id = created_id(&response)?;
                    self.waiter.wait(pacing);
                    return Ok(id);
                }
                STATUS_THROTTLED if self.policy.can_retry(attempt) => {
                    let delay = self.policy.backoff(attempt);
                    tracing::warn!(
                        "throttled, retrying in {}s (attempt {}/{})",
                        delay.as_secs_f32(),
                        attempt,
                        self.policy.max_attempts
                    );
                    self.waiter.wait(delay);
                    attempt += 1;
                }
                STATUS_THROTTLED => return Err(CreateError::Throttled { attempts: attempt }),
                status => {
                    return Err(CreateError::Rejected {
                        status,
                        body: response.body,
                    })
                }
            }
        }
    }

    fn link(&mut self, url: &str, issues: &[RemoteId]) -> Result<(), LinkError> {
        let response = self.transport.post(url, &link_payload(issues))?;
        match response.status {
            STATUS_OK | STATUS_CREATED => Ok(()),
            status => Err(LinkError::Rejected {
                status,
                body: response.body,
            }),
        }
    }
}

fn created_id(response: &Response) -> Result<RemoteId, CreateError> {
    response
        .json()
        .as_ref()
        .and_then(|body| body.get("id"))
        .and_then(Value::as_str)
        .map(RemoteId::new)
        .ok_or(CreateError::MissingId)
}

fn insert_date(map: &mut Map<String, Value>, key: &str, date: Option<chrono::NaiveDate>) {
    if let Some(date) = date {
        map.insert(key.to_string(), json!(date.format(DATE_FORMAT).to_string()));
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// JSON body creating `module`.
pub fn module_payload(module: &Module) -> Value {
    let mut map = object(json!({
        "name": module.name,
        "description": module.description,
        "status": module.status,
    }));
    insert_date(&mut map, "start_date", module.start_date);
    insert_date(&mut map, "target_date", module.target_date);
    Value::Object(map)
}

/// JSON body creating `issue`.
pub fn issue_payload(issue: &Issue) -> Value {
    let description = if issue.description_html.trim().is_empty() {
        EMPTY_DESCRIPTION_HTML
    } else {
        issue.description_html.as_str()
    };
    let mut map = object(json!({
        "name": issue.name,
        "description_html": description,
        "priority": issue.priority.as_str(),
    }));
    insert_date(&mut map, "start_date", issue.start_date);
    insert_date(&mut map, "target_date", issue.target_date);
    Value::Object(map)
}

/// JSON body creating `cycle` in `project`.
pub fn cycle_payload(cycle: &Cycle, project: &str) -> Value {
    let mut map = object(json!({
        "name": cycle.name,
        "description": cycle.description,
        "project_id": project,
    }));
    insert_date(&mut map, "start_date", cycle.start_date);
    insert_date(&mut map, "end_date", cycle.end_date);
    Value::Object(map)
}

/// JSON body attaching `issues` to a module or cycle.
pub fn link_payload(issues: &[RemoteId]) -> Value {
    json!({ "issues": issues })
}
