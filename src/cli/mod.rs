//! CLI definitions and handlers

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser};

pub mod args;
pub mod confirm;
pub mod context;
pub mod delete;

pub use args::{GlobalOptions, LogLevel};
pub use confirm::TerminalPrompt;
pub use context::CommandContext;
pub use delete::Target;

use crate::error::{ConfigError, Result};
use crate::resource::ResourceType;

/// Delete Split feature flags, segments or environments, one by name or all at once
#[derive(Parser, Debug)]
#[command(name = "split-cleanup")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("target").required(true).args(["name", "all"])))]
pub struct Cli {
    /// Split Admin API key
    #[arg(long, env = "SPLIT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Split workspace ID
    #[arg(long)]
    pub workspace_id: String,

    /// Name of the flag, segment, or environment to delete
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub name: Option<String>,

    /// Type of item to delete
    #[arg(long = "type", value_enum, default_value_t = ResourceType::Flag)]
    pub resource_type: ResourceType,

    /// Delete all items of the specified type in the workspace
    #[arg(long)]
    pub all: bool,

    /// Enable debug logging (request URLs, response status and body)
    #[arg(long)]
    pub debug: bool,

    /// Enable trace logging (debug output plus request headers)
    #[arg(long)]
    pub trace: bool,

    /// Override the Admin API host
    #[arg(long, env = "SPLIT_API_HOST", hide = true)]
    pub api_host: Option<String>,
}

impl Cli {
    /// What to delete. clap already enforces exactly one of `--name`/`--all`;
    /// this repeats the check for callers that build `Cli` by hand.
    pub fn target(&self) -> Result<Target> {
        let name = self.name.as_deref().filter(|name| !name.is_empty());
        match (name, self.all) {
            (Some(name), false) => Ok(Target::Named(name.to_string())),
            (None, true) => Ok(Target::All),
            (Some(_), true) => {
                Err(ConfigError::Invalid("Cannot specify both --all and --name".to_string()).into())
            }
            (None, false) => Err(ConfigError::Invalid(
                "You must specify either --name or --all".to_string(),
            )
            .into()),
        }
    }
}
