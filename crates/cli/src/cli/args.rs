// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Args;

use crate::config::Overrides;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Where to upload. Each flag overrides its environment variable and the
/// `[remote]` section of the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct RemoteArgs {
    /// Workspace slug [env: PLANSYNC_WORKSPACE]
    #[arg(short = 'w', long, value_parser = non_empty_string)]
    pub workspace: Option<String>,

    /// Project ID [env: PLANSYNC_PROJECT]
    #[arg(short = 'p', long, value_parser = non_empty_string)]
    pub project: Option<String>,

    /// API key [env: PLANSYNC_API_KEY]
    #[arg(short = 'k', long, value_parser = non_empty_string)]
    pub api_key: Option<String>,

    /// API base URL [env: PLANSYNC_API_URL] [default: http://localhost:8090]
    #[arg(long, value_name = "URL", value_parser = non_empty_string)]
    pub api_url: Option<String>,
}

impl RemoteArgs {
    /// The command-line layer of the remote settings.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            workspace: self.workspace.clone(),
            project: self.project.clone(),
            api_key: self.api_key.clone(),
        }
    }
}
