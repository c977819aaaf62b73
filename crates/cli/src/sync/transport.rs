// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the remote HTTP API.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests for production
//! - Mock transports for unit testing

use std::time::Duration;

use serde_json::Value;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for transport operations.
///
/// A transport error means no HTTP response was obtained. Responses with
/// error statuses are returned as ordinary [`Response`] values.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client could not be built.
    #[error("client setup failed: {0}")]
    Setup(String),

    /// The request timed out.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The request could not be sent or the response could not be read.
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A received HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Response {
            status,
            body: body.into(),
        }
    }

    /// The body as JSON, if it parses.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Transport trait for JSON-over-HTTP requests.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations.
pub trait Transport {
    /// POST `body` as JSON to `url`.
    fn post(&mut self, url: &str, body: &Value) -> TransportResult<Response>;
}

/// HTTP transport implementation using blocking reqwest.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport authenticating every request with `api_key`.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;
        Ok(HttpTransport {
            client,
            api_key: api_key.into(),
        })
    }
}

impl Transport for HttpTransport {
    fn post(&mut self, url: &str, body: &Value) -> TransportResult<Response> {
        tracing::debug!(url, "POST");
        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| request_error(url, &e))?;

        let status = response.status().as_u16();
        let text = response.text().map_err(|e| request_error(url, &e))?;
        tracing::debug!(url, status, "response");
        Ok(Response { status, body: text })
    }
}

fn request_error(url: &str, err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::Request {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
