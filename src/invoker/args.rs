//! Argument builders for the three invoker steps
//!
//! These are pure so the branch on the session name can be checked
//! without running anything.

/// Packages installed (and upgraded) before running nox
pub const PACKAGES: &[&str] = &["nox", "pip"];

/// Flag making nox fail instead of skipping sessions whose interpreter is absent
pub const ERROR_ON_MISSING_INTERPRETERS: &str = "--error-on-missing-interpreters";

/// Arguments for `<python> -m pip ...`
pub fn install_args() -> Vec<String> {
    let mut args: Vec<String> = ["-m", "pip", "install", "--upgrade", "--quiet"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    args.extend(PACKAGES.iter().map(|s| s.to_string()));
    args
}

/// Arguments for `<python> -m nox --version`
pub fn version_args() -> Vec<String> {
    vec!["-m".to_string(), "nox".to_string(), "--version".to_string()]
}

/// Arguments passed to nox for the session run
///
/// A non-empty session selects exactly that session; `None` or an empty
/// name leaves nox to run its default set.
pub fn choose_invocation_args(session: Option<&str>) -> Vec<String> {
    match session.filter(|s| !s.is_empty()) {
        Some(name) => vec![
            "-s".to_string(),
            name.to_string(),
            ERROR_ON_MISSING_INTERPRETERS.to_string(),
        ],
        None => vec![ERROR_ON_MISSING_INTERPRETERS.to_string()],
    }
}

/// Full interpreter arguments for the session run (`-m nox ...`)
pub fn sessions_args(session: Option<&str>) -> Vec<String> {
    let mut args = vec!["-m".to_string(), "nox".to_string()];
    args.extend(choose_invocation_args(session));
    args
}
