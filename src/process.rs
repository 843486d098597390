//! External command execution.
//! One helper covers both streamed (live stdout/stderr) and captured
//! runs; a non-zero exit always maps to the same error type.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Longest stderr prefix attached to a process-exit error.
const STDERR_PREFIX_LEN: usize = 200;

/// Runs `program` with `args`, waiting for completion.
///
/// With `stream` set, stdout and stderr are inherited and the returned
/// string is empty; otherwise stdout is captured and returned.
///
/// # Errors
/// * `Error::Io` if the process cannot be spawned
/// * `Error::ProcessExit` on a non-zero exit, carrying the exit code and
///   a stderr prefix (empty in streaming mode)
pub fn run_command(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
    stream: bool,
) -> Result<String> {
    let display = if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    };
    debug!("Running: {display}");

    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::null());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    if stream {
        let status = command
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        if !status.success() {
            return Err(Error::ProcessExit {
                command: display,
                code: status.code().unwrap_or(-1),
                stderr: String::new(),
            });
        }
        Ok(String::new())
    } else {
        let output = command.output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ProcessExit {
                command: display,
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.chars().take(STDERR_PREFIX_LEN).collect::<String>().trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
