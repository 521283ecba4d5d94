use clistart::config::Settings;
use clistart::error::Error;
use clistart::project::GenerationConfig;
use clistart::renderer::{MiniJinjaRenderer, TemplateRenderer};
use clistart::templates::EMBEDDED;
use std::fs;
use tempfile::TempDir;

fn context() -> serde_json::Value {
    let settings =
        Settings { home: "~/clistart".into(), author: "Jane Doe".into(), log_fmt: "json".into() };
    let config =
        GenerationConfig::new("github.com/acme/widgets", "/tmp/widgets", &settings).unwrap();
    serde_json::to_value(config).unwrap()
}

#[test]
fn test_embedded_templates_render_project_name() {
    let renderer = MiniJinjaRenderer::new();
    let context = context();

    for (name, _) in EMBEDDED {
        let output = renderer.render(name, &context).unwrap();
        assert!(output.contains("widgets"), "{} output missing project name", name);
        assert!(!output.contains("{{ "), "{} output has unrendered placeholders", name);
    }
}

#[test]
fn test_main_template_imports_local_packages() {
    let output = MiniJinjaRenderer::new().render("main.j2", &context()).unwrap();
    assert!(output.contains(r#"config "github.com/acme/widgets/config""#));
    assert!(output.contains(r#"logs "github.com/acme/widgets/logs""#));
    assert!(output.contains(r#"widgets "github.com/acme/widgets""#));
    assert!(output.ends_with("}\n"));
}

#[test]
fn test_config_template_uses_defaults() {
    let output = MiniJinjaRenderer::new().render("config.j2", &context()).unwrap();
    assert!(output.contains(r#"HomeDir: "~/widgets""#));
    assert!(output.contains(r#"const EnvConfigPath = "WIDGETS_CONFIG""#));
    assert!(output.contains(".widgets"));
}

#[test]
fn test_taskfile_template_keeps_task_variables() {
    let output = MiniJinjaRenderer::new().render("taskfile.j2", &context()).unwrap();
    assert!(output.contains("APP: widgets"));
    assert!(output.contains(r#"{{.Task.Get "LDFLAGS"}}"#));
    assert!(output.contains("-X github.com/acme/widgets.Version="));
}

#[test]
fn test_template_not_found() {
    match MiniJinjaRenderer::new().render("missing.j2", &context()) {
        Err(Error::TemplateNotFoundError { name }) => assert_eq!(name, "missing.j2"),
        other => panic!("Expected TemplateNotFoundError, got {:?}", other),
    }
}

#[test]
fn test_template_dir_overrides_embedded() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("main.j2"), "package main // {{ project_name }}\n").unwrap();
    let renderer = MiniJinjaRenderer::with_template_dir(Some(temp_dir.path().to_path_buf()));

    assert_eq!(renderer.render("main.j2", &context()).unwrap(), "package main // widgets\n");
    // Templates missing from the directory still come from the binary.
    assert!(renderer.render("logs.j2", &context()).unwrap().contains("package logs"));
}

#[test]
fn test_template_syntax_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("main.j2"), "{% if project_name %}unterminated").unwrap();
    let renderer = MiniJinjaRenderer::with_template_dir(Some(temp_dir.path().to_path_buf()));

    match renderer.render("main.j2", &context()) {
        Err(Error::TemplateSyntaxError { name, .. }) => assert_eq!(name, "main.j2"),
        other => panic!("Expected TemplateSyntaxError, got {:?}", other),
    }
}

#[test]
fn test_undefined_field_is_a_render_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("logs.j2"), "package {{ no_such_field }}").unwrap();
    let renderer = MiniJinjaRenderer::with_template_dir(Some(temp_dir.path().to_path_buf()));

    match renderer.render("logs.j2", &context()) {
        Err(Error::RenderError { name, .. }) => assert_eq!(name, "logs.j2"),
        other => panic!("Expected RenderError, got {:?}", other),
    }
}

#[test]
fn test_user_values_are_quoted_as_go_literals() {
    let settings = Settings {
        home: "~/clistart".into(),
        author: "Dwayne \"Rock\" Johnson, Inc.\nHQ".into(),
        log_fmt: "text`raw".into(),
    };
    let config =
        GenerationConfig::new("github.com/acme/widgets", "/tmp/widgets", &settings).unwrap();
    let context = serde_json::to_value(config).unwrap();
    let renderer = MiniJinjaRenderer::new();

    let output = renderer.render("config.j2", &context).unwrap();
    assert!(output.contains(r#"return "Dwayne \"Rock\" Johnson, Inc.\nHQ""#));
    assert!(output.contains(r#"LogFmt:  "text`raw","#));
    // Struct tags carry no user values, so parseTag never sees their commas.
    let author_tag = r#"`yaml:"author" config:"desc=Default author name for new items"`"#;
    assert!(output.contains(author_tag));
    assert!(!output.contains("default=Dwayne"));

    let output = renderer.render("logs.j2", &context).unwrap();
    assert!(output.contains(r#"format = "text`raw""#));

    let output = renderer.render("project.j2", &context).unwrap();
    assert!(output.contains("// Author: Dwayne \"Rock\" Johnson, Inc. HQ\n"));
}
