//! Locating the Python interpreter that hosts pip and nox

use std::path::PathBuf;

use crate::common::{Error, InvokerConfig, Result};

/// Interpreter names searched on PATH, in order
pub const CANDIDATES: &[&str] = &["python3", "python"];

/// Find the interpreter to run pip and nox with
///
/// An explicit `config.interpreter` wins and is used as-is; otherwise the
/// first of [`CANDIDATES`] found on PATH.
pub fn find_interpreter(config: &InvokerConfig) -> Result<PathBuf> {
    if let Some(path) = &config.interpreter {
        return Ok(path.clone());
    }

    CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or_else(|| Error::interpreter_not_found(CANDIDATES))
}
