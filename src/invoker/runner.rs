//! Step execution
//!
//! [`CommandRunner`] is the seam between the step sequence and the OS.
//! [`ProcessRunner`] spawns real child processes with inherited stdio so
//! their output streams live; tests substitute a recording fake.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::common::{Error, Result};

/// Which of the invoker's steps a child process belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Install or upgrade nox and pip
    Install,
    /// Print the installed nox version
    Version,
    /// Run one session or the default set
    Sessions,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Install => "install",
            StepKind::Version => "version",
            StepKind::Sessions => "sessions",
        };
        f.write_str(name)
    }
}

/// One child process to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Extra environment variables layered over the inherited environment
    pub envs: Vec<(String, String)>,
}

impl Step {
    /// Command line for log output
    ///
    /// Arguments that are empty or contain whitespace are single-quoted.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                line.push('\'');
                line.push_str(&arg.replace('\'', "'\\''"));
                line.push('\'');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepExit {
    /// Exited normally with this code
    Code(i32),
    /// Killed by this signal
    Signal(i32),
}

impl StepExit {
    pub fn success(&self) -> bool {
        matches!(self, StepExit::Code(0))
    }

    /// Convert a non-successful exit into the matching error
    pub fn into_result(self, step: StepKind) -> Result<()> {
        match self {
            _ if self.success() => Ok(()),
            StepExit::Code(code) => Err(Error::StepFailed { step, code }),
            StepExit::Signal(signal) => Err(Error::StepTerminated { step, signal }),
        }
    }
}

impl From<ExitStatus> for StepExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return StepExit::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return StepExit::Signal(signal);
            }
        }

        StepExit::Code(1)
    }
}

/// Runs steps to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the step and wait for it to finish
    ///
    /// A non-zero exit is not an error at this level; only failing to run
    /// the process at all is.
    async fn run(&self, step: &Step) -> Result<StepExit>;
}

/// Runs steps as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, step: &Step) -> Result<StepExit> {
        let mut cmd = Command::new(&step.program);
        cmd.args(&step.args)
            .envs(step.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = cmd
            .spawn()
            .map_err(|e| Error::spawn_failed(&step.program, e))?;

        let status = child.wait().await?;
        Ok(StepExit::from(status))
    }
}
