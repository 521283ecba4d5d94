//! clistart is a scaffolding tool for baseline Go command-line projects.
//! It derives a module path from a repository URL, renders a fixed set of
//! templates into a new project tree and bootstraps the Go module.

/// Command-line interface module for the clistart application
pub mod cli;

/// Persisted user settings and the declarative field table behind
/// `config get`, `config set` and `config describe`
pub mod config;

/// Error types and handling for the clistart application
pub mod error;

/// Core generation orchestration
pub mod generator;

/// Destination paths of the generated files
pub mod layout;

pub mod logger;

/// Repository URL to module path derivation
pub mod module;

/// Fixups applied to generated files after rendering
pub mod postprocess;

pub mod project;

/// Template rendering
pub mod renderer;

/// Built-in template bodies
pub mod templates;

/// Go module bootstrap:
/// - go mod init
/// - replace directives for the local config and logs packages
/// - go mod tidy
pub mod toolchain;
