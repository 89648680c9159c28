//! Global CLI options
//!
//! Consolidates the parsed flags that configure the client, so handlers do not
//! take the whole `Cli`.

use crate::cli::{Cli, LogLevel};
use crate::client::ApiKey;

/// Options resolved once in `main` after parsing.
///
/// # Precedence
///
/// CLI flag > environment variable > default. clap resolves the first two.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Admin API key from `--api-key` or `SPLIT_API_KEY`; blank counts as unset
    pub api_key: Option<ApiKey>,

    /// Workspace every request is scoped to
    pub workspace_id: String,

    /// Verbosity from `--debug` / `--trace`
    pub log_level: LogLevel,

    /// Custom API host for development/testing
    pub api_host: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_key: cli
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(ApiKey::new),
            workspace_id: cli.workspace_id.clone(),
            log_level: LogLevel::from_flags(cli.debug, cli.trace),
            api_host: cli.api_host.clone(),
        }
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
