use clistart::error::{Error, Result};
use clistart::toolchain::{
    bootstrap, inject_replace_directives, replace_block, GoToolchain, Toolchain, MANIFEST,
};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingToolchain {
    calls: RefCell<Vec<String>>,
}

impl Toolchain for RecordingToolchain {
    fn init_module(&self, project_dir: &Path, module_path: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("init {}", module_path));
        fs::write(project_dir.join(MANIFEST), format!("module {}\n\ngo 1.22\n", module_path))
            .unwrap();
        Ok(())
    }

    fn tidy(&self, _project_dir: &Path) -> Result<()> {
        self.calls.borrow_mut().push("tidy".to_string());
        Ok(())
    }
}

#[test]
fn test_replace_block() {
    assert_eq!(
        replace_block("github.com/acme/widgets"),
        concat!(
            "\n\nreplace (\n",
            "\tgithub.com/acme/widgets => .\n",
            "\tgithub.com/acme/widgets/config => ./config\n",
            "\tgithub.com/acme/widgets/logs => ./logs\n",
            ")\n",
        )
    );
}

#[test]
fn test_inject_replace_directives_once() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join(MANIFEST);
    fs::write(&manifest, "module github.com/acme/widgets\n").unwrap();

    assert!(inject_replace_directives(&manifest, "github.com/acme/widgets").unwrap());
    assert!(!inject_replace_directives(&manifest, "github.com/acme/widgets").unwrap());

    let content = fs::read_to_string(&manifest).unwrap();
    assert_eq!(content.matches("replace (").count(), 1);
    assert!(content.contains("github.com/acme/widgets/logs => ./logs"));
}

#[test]
fn test_inject_without_manifest_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result =
        inject_replace_directives(temp_dir.path().join(MANIFEST), "github.com/acme/widgets");
    assert!(matches!(result, Err(Error::IoError { .. })));
}

#[test]
fn test_bootstrap_initializes_then_skips() {
    let temp_dir = TempDir::new().unwrap();
    let toolchain = RecordingToolchain::default();

    bootstrap(&toolchain, temp_dir.path(), "github.com/acme/widgets").unwrap();
    bootstrap(&toolchain, temp_dir.path(), "github.com/acme/widgets").unwrap();

    assert_eq!(
        *toolchain.calls.borrow(),
        vec!["init github.com/acme/widgets", "tidy", "tidy"]
    );
}

#[test]
fn test_missing_program_is_an_external_process_error() {
    let temp_dir = TempDir::new().unwrap();
    let toolchain = GoToolchain::with_program("clistart-no-such-go-binary");

    match toolchain.tidy(temp_dir.path()) {
        Err(Error::ExternalProcessError { command, .. }) => {
            assert_eq!(command, "clistart-no-such-go-binary mod tidy")
        }
        other => panic!("Expected ExternalProcessError, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_non_zero_exit_is_an_external_process_error() {
    let temp_dir = TempDir::new().unwrap();
    let toolchain = GoToolchain::with_program("false");

    match toolchain.init_module(temp_dir.path(), "github.com/acme/widgets") {
        Err(Error::ExternalProcessError { reason, .. }) => {
            assert!(reason.starts_with("exited with"))
        }
        other => panic!("Expected ExternalProcessError, got {:?}", other),
    }
}
