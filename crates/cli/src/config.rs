// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Settings are resolved per field, highest precedence first: command-line
//! flag, environment variable, config file, built-in default.
//!
//! The config file is TOML and is looked up in this order:
//! - the `--config` path
//! - `PLANSYNC_CONFIG`
//! - `./plansync.toml`
//! - `<user config dir>/plansync/config.toml`
//!
//! ```toml
//! [remote]
//! api_url = "https://plane.example.com"
//! workspace = "acme"
//! project = "5f1c..."
//! api_key = "plane_api_..."
//! timeout_secs = 30
//!
//! [retry]
//! max_attempts = 3
//! backoff_base_ms = 5000
//! module_pacing_ms = 500
//! issue_pacing_ms = 300
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};
use crate::sync::{Endpoint, RetryPolicy};

/// API URL used when no layer provides one.
pub const DEFAULT_API_URL: &str = "http://localhost:8090";

const CONFIG_FILE_NAME: &str = "plansync.toml";
const CONFIG_DIR_NAME: &str = "plansync";
const USER_CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

/// `[remote]` section: where and as whom to upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    pub api_url: Option<String>,
    pub workspace: Option<String>,
    pub project: Option<String>,
    pub api_key: Option<String>,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            api_url: None,
            workspace: None,
            project: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[retry]` section: throttling backoff and request pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Attempts per module or issue, first attempt included (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Backoff unit after a throttled response (default: 5000).
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
    /// Pause after each created module (default: 500).
    #[serde(default = "default_module_pacing_ms")]
    pub module_pacing_ms: u64,
    /// Pause after each created issue (default: 300).
    #[serde(default = "default_issue_pacing_ms")]
    pub issue_pacing_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
            module_pacing_ms: default_module_pacing_ms(),
            issue_pacing_ms: default_issue_pacing_ms(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    5_000
}

fn default_module_pacing_ms() -> u64 {
    500
}

fn default_issue_pacing_ms() -> u64 {
    300
}

impl RetryConfig {
    /// The client policy described by this section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `max_attempts` is zero.
    pub fn policy(&self) -> Result<RetryPolicy> {
        if self.max_attempts == 0 {
            return Err(Error::Config(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(RetryPolicy {
            max_attempts: self.max_attempts,
            backoff_base: Duration::from_millis(self.backoff_base_ms),
            module_pacing: Duration::from_millis(self.module_pacing_ms),
            issue_pacing: Duration::from_millis(self.issue_pacing_ms),
        })
    }
}

impl Config {
    /// Reads and parses the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string().trim_end().to_string(),
        })
    }

    /// Loads the first config file found, or defaults when there is none.
    ///
    /// An explicitly named file (flag or environment) must exist.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let explicit = explicit.map(Path::to_path_buf).or_else(env::config_path);
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok((Self::load(&path)?, Some(path)));
        }

        match implicit_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!("using config file {}", path.display());
                Ok((Self::load(&path)?, Some(path)))
            }
            None => Ok((Config::default(), None)),
        }
    }
}

fn implicit_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join(USER_CONFIG_FILE_NAME));
    }
    paths
}

/// One layer of remote settings (flags or environment).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub workspace: Option<String>,
    pub project: Option<String>,
    pub api_key: Option<String>,
}

impl Overrides {
    /// The `PLANSYNC_*` environment layer.
    pub fn from_env() -> Self {
        Overrides {
            api_url: env::api_url(),
            workspace: env::workspace(),
            project: env::project(),
            api_key: env::api_key(),
        }
    }
}

/// Fully layered settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub workspace: Option<String>,
    pub project: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

fn pick(layers: [Option<&String>; 3]) -> Option<String> {
    layers
        .into_iter()
        .flatten()
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

impl Settings {
    /// Merges flags over environment over file over defaults.
    pub fn resolve(flags: &Overrides, environment: &Overrides, config: &Config) -> Result<Self> {
        let file = &config.remote;
        let api_url = pick([
            flags.api_url.as_ref(),
            environment.api_url.as_ref(),
            file.api_url.as_ref(),
        ])
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Settings {
            api_url: api_url.trim_end_matches('/').to_string(),
            workspace: pick([
                flags.workspace.as_ref(),
                environment.workspace.as_ref(),
                file.workspace.as_ref(),
            ]),
            project: pick([
                flags.project.as_ref(),
                environment.project.as_ref(),
                file.project.as_ref(),
            ]),
            api_key: pick([
                flags.api_key.as_ref(),
                environment.api_key.as_ref(),
                file.api_key.as_ref(),
            ]),
            timeout: Duration::from_secs(file.timeout_secs),
            retry: config.retry.policy()?,
        })
    }

    /// The upload target, failing on the first missing setting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] naming the flag and variable to set.
    pub fn target(&self) -> Result<Target> {
        let workspace = required(
            &self.workspace,
            "workspace",
            "workspace",
            env::vars::PLANSYNC_WORKSPACE,
        )?;
        let project = required(
            &self.project,
            "project",
            "project",
            env::vars::PLANSYNC_PROJECT,
        )?;
        let api_key = required(
            &self.api_key,
            "API key",
            "api-key",
            env::vars::PLANSYNC_API_KEY,
        )?;
        Ok(Target {
            api_url: self.api_url.clone(),
            workspace,
            project,
            api_key,
        })
    }
}

fn required(
    value: &Option<String>,
    setting: &'static str,
    flag: &'static str,
    var: &'static str,
) -> Result<String> {
    value.clone().ok_or(Error::MissingSetting {
        setting,
        operation: "upload",
        flag,
        env: var,
    })
}

/// A complete upload destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub api_url: String,
    pub workspace: String,
    pub project: String,
    pub api_key: String,
}

impl Target {
    /// Collection URLs for the target project.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(&self.api_url, &self.workspace, &self.project)
    }

    /// Browser URL of the target project.
    pub fn project_url(&self) -> String {
        format!(
            "{}/workspaces/{}/projects/{}",
            self.api_url, self.workspace, self.project
        )
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
