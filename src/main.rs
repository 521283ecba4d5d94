//! clistart's main application entry point.
//! Handles command-line argument parsing and dispatches to project
//! generation or config management.

use std::path::PathBuf;

use clistart::{
    cli::{get_args, Args, Commands, ConfigCommand, GenerateArgs},
    config::ConfigStore,
    error::{default_error_handler, Error, Result},
    generator::{GenerateOptions, Generator},
    logger::init_logger,
    module::derive_module,
    toolchain::GoToolchain,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let store = ConfigStore::from_env();
    match args.command {
        Commands::Generate(generate_args) => generate(&store, generate_args),
        Commands::Config { command } => config(&store, command),
        Commands::Version => {
            println!("clistart {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Generates a project.
///
/// The output directory defaults to the repository name and is created if
/// missing; existing files in it are overwritten.
fn generate(store: &ConfigStore, args: GenerateArgs) -> Result<()> {
    let module = derive_module(&args.source)?;
    let output_dir = args.dir.unwrap_or_else(|| PathBuf::from(&module.project_name));
    std::fs::create_dir_all(&output_dir).map_err(|e| Error::io(&output_dir, e))?;

    let settings = store.load()?;
    let options = GenerateOptions { template_dir: args.templates, skip_bootstrap: args.skip_mod };
    let renderer = options.renderer();
    let toolchain = GoToolchain::new();
    let generator = Generator::new(&renderer, &toolchain, settings, &options);

    let report = generator.generate_all(&args.source, &output_dir)?;
    for path in &report.written {
        println!("Generated: '{}'", path.display());
    }
    if report.gitignore_updated {
        println!("Updated: '.gitignore'");
    }

    println!(
        "Project generated in {}\nModule URL: {}",
        report.config.output_dir.display(),
        report.config.module_path
    );
    Ok(())
}

fn config(store: &ConfigStore, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Describe { json: true } => {
            println!("{}", store.describe_json()?);
        }
        ConfigCommand::Describe { json: false } => {
            println!("clistart config file: {}", store.path().display());
            for field in store.describe()? {
                println!("  {} = {}\n    → {}", field.key, field.value, field.description);
            }
        }
        ConfigCommand::Get { key } => {
            println!("{}", store.get(&key)?);
        }
        ConfigCommand::Set { key, value } => {
            let stored = store.set(&key, &value)?;
            println!("{} = {}", key, stored);
        }
    }
    Ok(())
}
