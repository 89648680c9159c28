//! split-cleanup - delete Split feature flags, segments and environments in bulk

use clap::Parser;

mod cli;
mod client;
mod error;
mod resource;

use cli::{Cli, CommandContext, GlobalOptions, TerminalPrompt};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);
    cli::args::init_logger(opts.log_level);

    // Everything that can be wrong with the invocation fails here, before any request
    let target = cli.target()?;
    let ctx = CommandContext::new(&opts)?;

    cli::delete::run(
        &ctx.client,
        &ctx.workspace_id,
        cli.resource_type,
        &target,
        &TerminalPrompt,
    )
    .await?;

    Ok(())
}
