//! nox-ci - CI entry point for nox test sessions
//!
//! Installs nox, prints its version, and runs either the session named by
//! `NOX_SESSION` or every default session, failing fast on the first error.

pub mod common;
pub mod invoker;

// Re-export commonly used types for tests
pub use common::{Error, InvokerConfig, Result};
pub use invoker::{choose_invocation_args, CommandRunner, ProcessRunner, Step, StepExit, StepKind};
