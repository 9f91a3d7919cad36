//! Invoker configuration
//!
//! The environment is read exactly once, in [`InvokerConfig::from_env`].
//! Everything downstream receives the resulting value explicitly.

use std::ffi::OsString;
use std::path::PathBuf;

use super::{Error, Result};

/// Environment variable naming the single session to run
pub const SESSION_ENV: &str = "NOX_SESSION";

/// Configuration for one invoker run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokerConfig {
    /// Restrict the run to this session; `None` runs the default set
    pub session: Option<String>,

    /// Interpreter hosting pip and nox; `None` searches PATH
    pub interpreter: Option<PathBuf>,
}

impl InvokerConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_os_session_var(std::env::var_os(SESSION_ENV))
    }

    /// Build the configuration from a raw, possibly non-UTF-8 `NOX_SESSION`
    ///
    /// A set value that is not valid UTF-8 is rejected rather than treated
    /// as unset.
    pub fn from_os_session_var(value: Option<OsString>) -> Result<Self> {
        let session = value
            .map(|raw| {
                raw.into_string().map_err(|raw| Error::InvalidSession {
                    value: raw.to_string_lossy().into_owned(),
                })
            })
            .transpose()?;
        Ok(Self::from_session_var(session))
    }

    /// Build the configuration from a raw `NOX_SESSION` value
    ///
    /// An empty value counts as unset.
    pub fn from_session_var(value: Option<String>) -> Self {
        Self {
            session: value.filter(|s| !s.is_empty()),
            interpreter: None,
        }
    }

    /// Restrict the run to a single named session
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        let session = session.into();
        self.session = (!session.is_empty()).then_some(session);
        self
    }

    /// Use a specific interpreter instead of searching PATH
    pub fn with_interpreter(mut self, path: impl Into<PathBuf>) -> Self {
        self.interpreter = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_session_runs_everything() {
        let config = InvokerConfig::from_session_var(None);
        assert_eq!(config.session, None);
        assert_eq!(config.interpreter, None);
    }

    #[test]
    fn test_empty_session_is_unset() {
        let config = InvokerConfig::from_session_var(Some(String::new()));
        assert_eq!(config.session, None);

        let config = InvokerConfig::default().with_session("");
        assert_eq!(config.session, None);
    }

    #[test]
    fn test_named_session_is_kept_verbatim() {
        let config = InvokerConfig::from_session_var(Some("unit-3.8".to_string()));
        assert_eq!(config.session.as_deref(), Some("unit-3.8"));
    }

    #[test]
    fn test_os_session_var() {
        let config = InvokerConfig::from_os_session_var(Some(OsString::from("unit"))).unwrap();
        assert_eq!(config.session.as_deref(), Some("unit"));

        let config = InvokerConfig::from_os_session_var(None).unwrap();
        assert_eq!(config.session, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_session_is_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"unit\xff".to_vec());
        let err = InvokerConfig::from_os_session_var(Some(raw)).unwrap_err();
        assert!(matches!(err, Error::InvalidSession { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_builders() {
        let config = InvokerConfig::default()
            .with_session("lint")
            .with_interpreter("/usr/bin/python3.8");
        assert_eq!(config.session.as_deref(), Some("lint"));
        assert_eq!(config.interpreter, Some(PathBuf::from("/usr/bin/python3.8")));
    }
}
