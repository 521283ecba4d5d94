//! Command-line interface implementation for clistart.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for clistart.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "clistart: scaffold a baseline Go CLI project",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new Go CLI project
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// View or modify your config settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Show version info
    Version,
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Repository URL (same as the git clone URL) or module path
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Output directory (defaults to the repository name)
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Directory with templates overriding the built-in ones
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Do not run `go mod init` / `go mod tidy`
    #[arg(long)]
    pub skip_mod: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show config file location and values
    Describe {
        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a config key
    Get {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Set a config key
    Set {
        #[arg(value_name = "KEY")]
        key: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 for `--help` and `--version`
/// * With status code 1 for every other parse error, printing the help when
///   no subcommand is given
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}
