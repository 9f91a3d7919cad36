//! Error types for the CI invoker
//!
//! Every failure ends the run. The variants only exist so the failing step
//! can be named in the log and mapped to the right process exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::invoker::StepKind;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the CI invoker
#[derive(Error, Debug)]
pub enum Error {
    // === Step Errors ===
    #[error("{step} step failed with exit code {code}")]
    StepFailed { step: StepKind, code: i32 },

    #[error("{step} step was terminated by signal {signal}")]
    StepTerminated { step: StepKind, signal: i32 },

    // === Environment Errors ===
    #[error("NOX_SESSION is not valid UTF-8: '{value}'")]
    InvalidSession { value: String },

    #[error("Python interpreter not found. Searched PATH for: {searched}")]
    InterpreterNotFound { searched: String },

    #[error("Failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an interpreter not found error listing the names tried
    pub fn interpreter_not_found<S: AsRef<str>>(names: &[S]) -> Self {
        Self::InterpreterNotFound {
            searched: names.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", "),
        }
    }

    /// Create a spawn failed error
    pub fn spawn_failed(program: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            source,
        }
    }

    /// Process exit code the invoker should terminate with
    ///
    /// Child exit codes pass through verbatim; a child killed by signal `N`
    /// maps to `128 + N` like a POSIX shell would report it.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::StepFailed { code, .. } => *code,
            Error::StepTerminated { signal, .. } => 128 + signal,
            Error::InvalidSession { .. }
            | Error::InterpreterNotFound { .. }
            | Error::SpawnFailed { .. }
            | Error::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_failed_passes_code_through() {
        let err = Error::StepFailed {
            step: StepKind::Sessions,
            code: 3,
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "sessions step failed with exit code 3");
    }

    #[test]
    fn test_signal_maps_to_shell_convention() {
        let err = Error::StepTerminated {
            step: StepKind::Install,
            signal: 9,
        };
        assert_eq!(err.exit_code(), 137);
    }

    #[test]
    fn test_interpreter_not_found_lists_names() {
        let err = Error::interpreter_not_found(&["python3", "python"]);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("python3, python"));
    }
}
