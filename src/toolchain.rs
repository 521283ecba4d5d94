//! Module bootstrap for generated projects.
//! Runs the Go toolchain in the project directory and patches `go.mod` so the
//! generated `config` and `logs` packages resolve locally.

use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

/// Dependency manifest written by `go mod init`.
pub const MANIFEST: &str = "go.mod";

/// Marker used to detect an existing replace block.
pub const REPLACE_MARKER: &str = "replace (";

/// External steps needed to bootstrap a module.
pub trait Toolchain {
    /// Creates the manifest for `module_path` in `project_dir`.
    fn init_module(&self, project_dir: &Path, module_path: &str) -> Result<()>;

    /// Resolves and records dependencies.
    fn tidy(&self, project_dir: &Path) -> Result<()>;
}

/// The `go` command.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    program: String,
}

impl GoToolchain {
    pub fn new() -> Self {
        Self { program: "go".to_string() }
    }

    /// Uses a different executable, e.g. a pinned `go1.22.0`.
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, project_dir: &Path, args: &[&str]) -> Result<()> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!("Running '{}' in {}", command, project_dir.display());

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::ExternalProcessError {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::ExternalProcessError {
                command,
                reason: format!("exited with {}", status),
            });
        }
        Ok(())
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        GoToolchain::new()
    }
}

impl Toolchain for GoToolchain {
    fn init_module(&self, project_dir: &Path, module_path: &str) -> Result<()> {
        self.run(project_dir, &["mod", "init", module_path])
    }

    fn tidy(&self, project_dir: &Path) -> Result<()> {
        self.run(project_dir, &["mod", "tidy"])
    }
}

/// The replace block pointing the generated packages at local directories.
pub fn replace_block(module_path: &str) -> String {
    format!(
        "\n\nreplace (\n\t{m} => .\n\t{m}/config => ./config\n\t{m}/logs => ./logs\n)\n",
        m = module_path
    )
}

/// Appends [`replace_block`] to the manifest unless it already has a replace block.
/// Returns whether the manifest was changed.
pub fn inject_replace_directives<P: AsRef<Path>>(manifest: P, module_path: &str) -> Result<bool> {
    let manifest = manifest.as_ref();
    let content = fs::read_to_string(manifest).map_err(|e| Error::io(manifest, e))?;
    if content.contains(REPLACE_MARKER) {
        debug!("{} already has a replace block", manifest.display());
        return Ok(false);
    }

    let updated = content + &replace_block(module_path);
    fs::write(manifest, updated).map_err(|e| Error::io(manifest, e))?;
    Ok(true)
}

/// Initializes the module (unless a manifest exists), injects the replace
/// directives and resolves dependencies.
pub fn bootstrap(toolchain: &dyn Toolchain, project_dir: &Path, module_path: &str) -> Result<()> {
    let manifest = project_dir.join(MANIFEST);

    match fs::metadata(&manifest) {
        Ok(_) => info!("{} already exists, skipping module init", manifest.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            toolchain.init_module(project_dir, module_path)?
        }
        Err(e) => return Err(Error::io(&manifest, e)),
    }

    inject_replace_directives(&manifest, module_path)?;
    toolchain.tidy(project_dir)
}
