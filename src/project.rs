//! Per-run generation settings.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::module::{derive_module, ModuleId};
use cruet::Inflector;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything the templates need to know about the project being generated.
///
/// Built once per invocation and serialized as the template context, so the
/// field names are the placeholder names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationConfig {
    pub module_path: String,
    pub project_name: String,
    /// Go package identifier derived from the project name.
    pub package_name: String,
    /// Prefix for environment variables read by the generated program.
    pub env_prefix: String,
    /// Absolute project root.
    pub output_dir: PathBuf,
    /// Default data directory of the generated program, `~/{project_name}`.
    pub home_dir: String,
    pub author: String,
    pub log_fmt: String,
}

impl GenerationConfig {
    /// Derives the module from `source` and resolves `output_dir` to an absolute path.
    /// An empty `output_dir` means the current directory.
    ///
    /// # Errors
    /// * `Error::InvalidUrlError` if the module path has fewer than three segments
    pub fn new<P: AsRef<Path>>(source: &str, output_dir: P, settings: &Settings) -> Result<Self> {
        let ModuleId { module_path, project_name } = derive_module(source)?;

        let output_dir = output_dir.as_ref();
        let output_dir =
            if output_dir.as_os_str().is_empty() { Path::new(".") } else { output_dir };
        let output_dir = std::path::absolute(output_dir).map_err(|e| Error::io(output_dir, e))?;

        Ok(Self {
            package_name: package_name(&project_name),
            env_prefix: project_name.to_screaming_snake_case(),
            home_dir: format!("~/{}", project_name),
            author: settings.author.clone(),
            log_fmt: settings.log_fmt.clone(),
            module_path,
            project_name,
            output_dir,
        })
    }

    /// Absolute directory the project is generated into.
    pub fn project_path(&self) -> &Path {
        &self.output_dir
    }
}

/// Lowercases the name and drops everything that is not ASCII alphanumeric.
pub fn package_name(project_name: &str) -> String {
    let name: String = project_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match name.chars().next() {
        None => "app".to_string(),
        Some(first) if first.is_ascii_digit() => format!("app{}", name),
        Some(_) => name,
    }
}
