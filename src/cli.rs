//! Command-line interface implementation for Capsula.
//! Provides argument parsing using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for Capsula.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Capsula: project scaffolding from self-replaying template capsules",
    long_about = None
)]
pub struct Args {
    /// Path to the template catalogue file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively create a new project from a template (the default)
    New,

    /// Pack a template directory into a self-contained capsule
    Bundle {
        /// Template directory to pack
        #[arg(value_name = "TEMPLATE_DIR")]
        template_dir: PathBuf,

        /// Capsule file to write
        #[arg(value_name = "OUTPUT_FILE")]
        output_file: PathBuf,

        /// Exclusion patterns overriding the built-in list
        #[arg(short, long, value_name = "PATTERN")]
        exclude: Vec<String>,
    },

    /// Compare a generated tree against its original template source
    Diff {
        /// Original template directory
        #[arg(value_name = "ORIGINAL_DIR")]
        original: PathBuf,

        /// Generated directory to check
        #[arg(value_name = "GENERATED_DIR")]
        generated: PathBuf,
    },

    /// Bundle, replay and verify every configured template
    Verify {
        /// Keep scratch directories and capsule binaries afterwards
        #[arg(short, long)]
        keep: bool,
    },
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
