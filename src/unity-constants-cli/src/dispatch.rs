//! Command dispatch functions
//!
//! Routes parsed commands to their handlers.

use anyhow::Result;

use crate::cli::{Cli, Commands, ConfigCommand};
use crate::commands::{self, Session};

/// Dispatch a parsed command line
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::All => commands::generate::all(&Session::open(&cli.global)?),

        Commands::Generate { domain, dry_run } => {
            commands::generate::one(&Session::open(&cli.global)?, *domain, *dry_run)
        }

        Commands::List { domain } => commands::list::handle(&Session::open(&cli.global)?, *domain),

        Commands::Config { command } => dispatch_config(cli, command),
    }
}

/// Dispatch config subcommands (no project source needed)
fn dispatch_config(cli: &Cli, command: &ConfigCommand) -> Result<()> {
    let (config, source) = commands::effective_config(&cli.global)?;

    match command {
        ConfigCommand::Show => commands::configure::show(&config, &source, &cli.global.project),
        ConfigCommand::Init { force } => {
            commands::configure::init(&config, &cli.global.project, *force)
        }
    }
}
