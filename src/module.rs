//! Module path derivation.
//! Turns a repository URL (HTTPS or SSH form) or an explicit module path into
//! the canonical `host/org/repo` module path and the project name.

use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Minimum number of segments in a module path: host, org and repository.
pub const MIN_MODULE_SEGMENTS: usize = 3;

static SSH_REMOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@/\s]+@(?P<host>[^:/\s]+):(?P<path>\S+)$").expect("Invalid SSH remote regex")
});

/// A derived module identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleId {
    /// Slash separated import root, e.g. `github.com/acme/widgets`.
    pub module_path: String,
    /// Last segment of the module path, e.g. `widgets`.
    pub project_name: String,
}

/// Derives the module path and project name from a repository URL or module path.
///
/// # Examples
/// * `https://github.com/acme/widgets.git` -> `github.com/acme/widgets`
/// * `git@github.com:acme/widgets.git` -> `github.com/acme/widgets`
/// * `github.com/acme/widgets` -> unchanged
///
/// # Errors
/// * `Error::InvalidUrlError` if fewer than three path segments remain
pub fn derive_module(input: &str) -> Result<ModuleId> {
    let trimmed = input.trim();
    let invalid = || Error::InvalidUrlError { input: input.to_string() };

    let raw = if trimmed.contains("://") {
        let url = Url::parse(trimmed).map_err(|_| invalid())?;
        let host = url.host_str().ok_or_else(invalid)?;
        format!("{}{}", host, url.path())
    } else if let Some(caps) = SSH_REMOTE_REGEX.captures(trimmed) {
        format!("{}/{}", &caps["host"], &caps["path"])
    } else {
        trimmed.to_string()
    };

    let raw = raw.trim_end_matches('/');
    let raw = raw.strip_suffix(".git").unwrap_or(raw);

    let segments: Vec<&str> = raw.split('/').collect();
    if segments.len() < MIN_MODULE_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
        return Err(invalid());
    }

    let project_name = segments[segments.len() - 1].to_string();
    let module_path = segments.join("/");
    debug!("Derived module '{}' (project '{}') from '{}'", module_path, project_name, input);

    Ok(ModuleId { module_path, project_name })
}
