//! Text fixups applied to generated files after rendering.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Literal replacements applied to the rendered task file.
///
/// The task-file template writes Task variables as `{{.Task.Get "X"}}`;
/// Task itself expects `{{.X}}`.
pub const TASKFILE_REPLACEMENTS: [(&str, &str); 8] = [
    (r#"{{.Task.Get "VERSION"}}"#, "{{.VERSION}}"),
    (r#"{{.Task.Get "COMMIT"}}"#, "{{.COMMIT}}"),
    (r#"{{.Task.Get "BUILDTIME"}}"#, "{{.BUILDTIME}}"),
    (r#"{{.Task.Get "MAIN"}}"#, "{{.MAIN}}"),
    (r#"{{.Task.Get "CLI_ARGS"}}"#, "{{.CLI_ARGS}}"),
    (r#"{{.Task.Get "OUT"}}"#, "{{.OUT}}"),
    (r#"{{.Task.Get "LDFLAGS"}}"#, "{{.LDFLAGS}}"),
    (r#"{{.Task.Get "APP"}}"#, "{{.APP}}"),
];

/// Ignore-list file extended after generation.
pub const GITIGNORE: &str = ".gitignore";

/// Entry that keeps build output out of version control.
pub const GITIGNORE_ENTRY: &str = "bin/*";

/// Applies [`TASKFILE_REPLACEMENTS`] to `content`.
pub fn rewrite_task_vars(content: &str) -> String {
    TASKFILE_REPLACEMENTS
        .iter()
        .fold(content.to_string(), |acc, (old, new)| acc.replace(old, new))
}

/// Rewrites the task file at `path` in place.
pub fn postprocess_taskfile<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    debug!("Rewriting task variables in {}", path.display());
    fs::write(path, rewrite_task_vars(&content)).map_err(|e| Error::io(path, e))
}

/// Appends `bin/*` to an existing `.gitignore` in `project_root`.
///
/// Does nothing when there is no `.gitignore` or it already has the entry.
/// Returns whether the file was changed.
pub fn update_gitignore<P: AsRef<Path>>(project_root: P) -> Result<bool> {
    let path = project_root.as_ref().join(GITIGNORE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::io(&path, e)),
    };
    if content.contains(GITIGNORE_ENTRY) {
        return Ok(false);
    }

    debug!("Adding '{}' to {}", GITIGNORE_ENTRY, path.display());
    let mut file =
        fs::OpenOptions::new().append(true).open(&path).map_err(|e| Error::io(&path, e))?;
    write!(file, "\n# Binary output directory\n{}\n", GITIGNORE_ENTRY)
        .map_err(|e| Error::io(&path, e))?;
    Ok(true)
}
