//! Error handling for the clistart application.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Custom error types for clistart operations.
///
/// Every variant carries enough context (file, key, command) to tell the
/// user what was being done when the failure happened.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error for '{path}': {source}.")]
    IoError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The persisted configuration file exists but does not decode.
    #[error("Failed to parse config file '{path}': {source}.")]
    ConfigParseError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize config: {0}.")]
    ConfigSerializeError(#[source] serde_yaml::Error),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// A config get/set named a key that is not declared.
    #[error("Unknown config key: {key}.")]
    UnknownKeyError { key: String },

    /// The source could not be turned into a module path.
    #[error("Invalid repository URL or module path '{input}': expected at least host/org/repo.")]
    InvalidUrlError { input: String },

    #[error("Template '{name}' not found.")]
    TemplateNotFoundError { name: String },

    #[error("Syntax error in template '{name}': {source}.")]
    TemplateSyntaxError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render template '{name}': {source}.")]
    RenderError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Wraps the failure of one logical file during generation.
    #[error("Failed to generate {file}: {source}")]
    GenerateError {
        file: String,
        #[source]
        source: Box<Error>,
    },

    /// An external command failed to start or exited unsuccessfully.
    #[error("Command '{command}' failed: {reason}.")]
    ExternalProcessError { command: String, reason: String },
}

impl Error {
    /// Builds an [`Error::IoError`] for the given path.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::IoError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
