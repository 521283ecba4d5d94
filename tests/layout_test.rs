use clistart::layout::{resolve_path, template_name, GENERATED_FILES};
use std::path::{Path, PathBuf};

#[test]
fn test_resolve_path() {
    let root = Path::new("/work/widgets");
    let cases = [
        ("main", "/work/widgets/cmd/widgets/main.go"),
        ("config", "/work/widgets/config/config.go"),
        ("logs", "/work/widgets/logs/logs.go"),
        ("taskfile", "/work/widgets/Taskfile.yaml"),
        ("project", "/work/widgets/widgets.go"),
        ("version", "/work/widgets/version.go"),
    ];

    for (logical_name, expected) in cases {
        assert_eq!(resolve_path(logical_name, root, "widgets"), PathBuf::from(expected));
    }
}

#[test]
fn test_generated_files_have_distinct_destinations() {
    let root = Path::new("out");
    let mut paths: Vec<PathBuf> =
        GENERATED_FILES.iter().map(|name| resolve_path(name, root, "widgets")).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), GENERATED_FILES.len());
}

#[test]
fn test_template_name() {
    assert_eq!(template_name("taskfile"), "taskfile.j2");
}
