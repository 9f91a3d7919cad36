//! Build invoker
//!
//! Installs nox, reports its version, then runs either one named session or
//! the default session set. Steps run strictly in order and the first one
//! that does not exit cleanly aborts the run.

pub mod args;
pub mod interpreter;
pub mod runner;

use std::path::Path;
use std::time::Instant;

use crate::common::{InvokerConfig, Result};

pub use args::choose_invocation_args;
pub use interpreter::find_interpreter;
pub use runner::{CommandRunner, ProcessRunner, Step, StepExit, StepKind};

/// Environment applied to every child so their output is not block-buffered
pub const UNBUFFERED_ENV: (&str, &str) = ("PYTHONUNBUFFERED", "1");

/// Build the ordered list of steps for a run
pub fn plan(config: &InvokerConfig, interpreter: &Path) -> Vec<Step> {
    let step = |kind, args| Step {
        kind,
        program: interpreter.to_path_buf(),
        args,
        envs: vec![(UNBUFFERED_ENV.0.to_string(), UNBUFFERED_ENV.1.to_string())],
    };

    vec![
        step(StepKind::Install, args::install_args()),
        step(StepKind::Version, args::version_args()),
        step(
            StepKind::Sessions,
            args::sessions_args(config.session.as_deref()),
        ),
    ]
}

/// Run the invoker against the given runner
pub async fn run(config: &InvokerConfig, runner: &dyn CommandRunner) -> Result<()> {
    let interpreter = find_interpreter(config)?;
    tracing::debug!("Using interpreter: {}", interpreter.display());

    match &config.session {
        Some(session) => tracing::info!("Running nox session '{}'", session),
        None => tracing::info!("Running all default nox sessions"),
    }

    for step in plan(config, &interpreter) {
        run_step(&step, runner).await?;
    }

    tracing::info!("All steps succeeded");
    Ok(())
}

async fn run_step(step: &Step, runner: &dyn CommandRunner) -> Result<()> {
    tracing::info!("Starting {} step", step.kind);
    tracing::debug!("$ {}", step.command_line());

    let started = Instant::now();
    let exit = runner.run(step).await?;
    tracing::debug!(
        "{} step finished with {:?} after {:.1?}",
        step.kind,
        exit,
        started.elapsed()
    );

    exit.into_result(step.kind)
}
