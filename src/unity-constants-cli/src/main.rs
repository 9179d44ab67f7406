mod cli;
mod commands;
mod config;
mod dispatch;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose);

    dispatch::dispatch(&cli)
}

/// Log to stderr so generated output on stdout stays clean
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "unity_constants=debug,unity_constants_cli=debug"
    } else {
        "unity_constants=info,unity_constants_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
