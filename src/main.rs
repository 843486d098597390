//! Capsula's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches to the
//! scaffolding, bundling, diffing and verification flows.

use std::path::Path;

use capsula::{
    bundle::make_bundle,
    cli::{get_args, Args, Command},
    config::Config,
    constants::{DEFAULT_EXCLUDES, DEFAULT_PREFIX},
    diff::make_diff,
    error::{default_error_handler, Result},
    logger::init_logger,
    pattern::ExcludeSet,
    prompt::{confirm_overwrite, prompt_project},
    scaffold::{create_project, print_next_steps},
    verify::verify_all,
};
use console::style;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_file(path),
        None => Config::load_from_dir(Path::new(".")),
    }
}

fn run(args: Args) -> Result<()> {
    let config_path = args.config;

    match args.command.unwrap_or(Command::New) {
        Command::New => run_new(config_path.as_deref()),

        Command::Bundle { template_dir, output_file, exclude } => {
            let rules = if exclude.is_empty() {
                DEFAULT_EXCLUDES.iter().map(|rule| rule.to_string()).collect()
            } else {
                exclude
            };
            let excludes = ExcludeSet::compile(&rules)?;
            let prefix = load_config(config_path.as_deref())
                .map(|config| config.prefix)
                .unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
            make_bundle(&template_dir, &output_file, &excludes, &prefix)?;
            Ok(())
        }

        Command::Diff { original, generated } => {
            make_diff(&original, &generated)?;
            Ok(())
        }

        Command::Verify { keep } => {
            let config = load_config(config_path.as_deref())?;
            verify_all(&config, keep)
        }
    }
}

/// The interactive creation flow. Cancellations exit cleanly with a
/// farewell; creation errors print a short message instead of crashing.
fn run_new(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    println!("\n{}", style("Create a new project from a template").cyan().bold());
    println!("{}\n", style("Press Ctrl-C at any time to exit.").yellow());

    let Some(answers) = prompt_project(&config)? else {
        println!("{}", style("Goodbye!").yellow());
        return Ok(());
    };

    let project_dir = std::env::current_dir()?.join(&answers.project_name);
    if project_dir.exists() && !confirm_overwrite(&answers.project_name)? {
        println!("{}", style("Creation cancelled").yellow());
        return Ok(());
    }

    match create_project(&config, &answers) {
        Ok(_) => {
            print_next_steps(config.template(&answers.template_key)?, &answers);
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red());
            Ok(())
        }
    }
}
