//! nox-ci - CI entry point for nox test sessions
//!
//! Takes no arguments of its own. Set `NOX_SESSION` to run a single session;
//! leave it unset to run nox's default set.

use clap::Parser;
use nox_ci::{common::logging, invoker, InvokerConfig, ProcessRunner};

#[derive(Parser)]
#[command(name = "nox-ci", about = "Install nox and run its sessions for CI")]
#[command(version, long_about = None)]
#[command(after_help = "Environment:\n  NOX_SESSION  run only this session instead of the default set")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();

    logging::init_cli();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> nox_ci::Result<()> {
    let config = InvokerConfig::from_env()?;
    invoker::run(&config, &ProcessRunner).await
}
