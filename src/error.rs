//! Error handling for the Capsula application.
//! Defines the error types and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Custom error types for Capsula operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Represents errors during configuration loading or parsing
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents an exclusion rule that failed to compile
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Represents errors during template traversal or processing
    #[error("Template error: {0}")]
    Template(String),

    /// A generated tree does not match its original template source.
    /// Carries the full differing and missing path lists; display
    /// truncation happens at the reporting layer.
    #[error(
        "Comparison failed: {} differing, {} missing from original",
        .different.len(),
        .missing.len()
    )]
    ComparisonFailed {
        different: Vec<String>,
        missing: Vec<String>,
    },

    /// A spawned external process exited with a non-zero status
    #[error("Command '{command}' exited with status {code}{}", stderr_suffix(.stderr))]
    ProcessExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
