//! Destination paths of the generated files.

use std::path::{Path, PathBuf};

/// Logical files rendered by every generation run, in order.
pub const GENERATED_FILES: [&str; 5] = ["main", "config", "logs", "project", "taskfile"];

/// Name of the build-task file at the project root.
pub const TASKFILE: &str = "Taskfile.yaml";

/// Template name for a logical file.
pub fn template_name(logical_name: &str) -> String {
    format!("{}.j2", logical_name)
}

/// Maps a logical file name to its destination under `project_root`.
///
/// Unknown names land at the root as `{logical_name}.go`.
pub fn resolve_path(logical_name: &str, project_root: &Path, project_name: &str) -> PathBuf {
    match logical_name {
        "main" => project_root.join("cmd").join(project_name).join("main.go"),
        "config" => project_root.join("config").join("config.go"),
        "logs" => project_root.join("logs").join("logs.go"),
        "taskfile" => project_root.join(TASKFILE),
        "project" => project_root.join(format!("{}.go", project_name)),
        other => project_root.join(format!("{}.go", other)),
    }
}
