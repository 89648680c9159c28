//! Command execution context
//!
//! Validates the credential and builds the API client before any request.

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::client::SplitClient;
use crate::error::{ConfigError, Result};

/// Context for command execution: an authenticated client and its workspace.
pub struct CommandContext {
    /// Admin API client carrying the key
    pub client: SplitClient,
    /// Workspace every request is scoped to
    pub workspace_id: String,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingApiKey` when no key was given, or
    /// `ConfigError::Invalid` for an unusable key, host or workspace id.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let api_key = opts.api_key.as_ref().ok_or(ConfigError::MissingApiKey)?;

        let workspace_id = opts.workspace_id.trim();
        if workspace_id.is_empty() {
            return Err(ConfigError::Invalid("--workspace-id must not be empty".to_string()).into());
        }

        let client = SplitClient::new(api_key, opts.api_host_ref())?;
        debug!(
            "Using workspace {} via {}",
            workspace_id,
            opts.api_host_ref().unwrap_or(crate::client::split::API_HOST)
        );

        Ok(Self {
            client,
            workspace_id: workspace_id.to_string(),
        })
    }
}
