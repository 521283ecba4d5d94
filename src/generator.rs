//! Core generation orchestration.
//! Renders every logical file into the project tree, post-processes the task
//! file and bootstraps the Go module.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::layout::{resolve_path, template_name, GENERATED_FILES, TASKFILE};
use crate::postprocess::{postprocess_taskfile, update_gitignore};
use crate::project::GenerationConfig;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::toolchain::{bootstrap, Toolchain};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Directory whose templates take precedence over the embedded ones.
    pub template_dir: Option<PathBuf>,
    /// Skip `go mod init`, the replace block and `go mod tidy`.
    pub skip_bootstrap: bool,
}

impl GenerateOptions {
    /// Builds the renderer these options ask for.
    pub fn renderer(&self) -> MiniJinjaRenderer {
        MiniJinjaRenderer::with_template_dir(self.template_dir.clone())
    }
}

/// What a generation run did.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub config: GenerationConfig,
    /// Rendered files, in generation order.
    pub written: Vec<PathBuf>,
    pub gitignore_updated: bool,
    pub bootstrapped: bool,
}

/// Coordinates rendering, writing and module bootstrap.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    toolchain: &'a dyn Toolchain,
    settings: Settings,
    skip_bootstrap: bool,
}

impl<'a> Generator<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        toolchain: &'a dyn Toolchain,
        settings: Settings,
        options: &GenerateOptions,
    ) -> Self {
        Self { renderer, toolchain, settings, skip_bootstrap: options.skip_bootstrap }
    }

    /// Generates the whole project for `source` into `output_dir`.
    ///
    /// # Flow
    /// 1. Builds the [`GenerationConfig`]
    /// 2. Renders and writes every logical file, overwriting existing ones
    /// 3. Rewrites the task variables in the task file
    /// 4. Adds `bin/*` to an existing `.gitignore`
    /// 5. Bootstraps the Go module
    ///
    /// The first failure aborts the run; files already written are kept.
    pub fn generate_all<P: AsRef<Path>>(
        &self,
        source: &str,
        output_dir: P,
    ) -> Result<GenerationReport> {
        let config = GenerationConfig::new(source, output_dir, &self.settings)?;
        let context = serde_json::to_value(&config)?;
        let project_path = config.project_path();

        let mut written = Vec::with_capacity(GENERATED_FILES.len());
        for logical_name in GENERATED_FILES {
            let target =
                self.generate_file(&config, &context, logical_name).map_err(|e| {
                    Error::GenerateError { file: logical_name.to_string(), source: Box::new(e) }
                })?;
            written.push(target);
        }

        postprocess_taskfile(project_path.join(TASKFILE))?;
        let gitignore_updated = update_gitignore(project_path)?;

        let bootstrapped = if self.skip_bootstrap {
            info!("Skipping module bootstrap");
            false
        } else {
            bootstrap(self.toolchain, project_path, &config.module_path)?;
            true
        };

        Ok(GenerationReport { config, written, gitignore_updated, bootstrapped })
    }

    /// Renders one logical file and writes it to its destination.
    pub fn generate_file(
        &self,
        config: &GenerationConfig,
        context: &serde_json::Value,
        logical_name: &str,
    ) -> Result<PathBuf> {
        let content = self.renderer.render(&template_name(logical_name), context)?;
        let target = resolve_path(logical_name, config.project_path(), &config.project_name);
        write_file(&content, &target)?;
        Ok(target)
    }
}

fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    debug!("Writing file: {}", dest_path.display());
    fs::write(dest_path, content).map_err(|e| Error::io(dest_path, e))
}
