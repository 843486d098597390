//! Capsule generation: serializing a collected template tree into a
//! single self-contained generator program.
//!
//! A capsule is plain Rust source with no dependencies. Compiled directly
//! (`rustc --edition 2021 bundle.worker.rs`) it is an executable that
//! recreates the captured tree; included as a module it exposes
//! `generate` for programmatic reuse.

use crate::collect::{collect_files, FileSet};
use crate::error::{Error, Result};
use crate::pattern::ExcludeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// The materialization routine and entry point embedded in every capsule.
/// Kept dependency-free so a capsule compiles with a bare `rustc`.
const CAPSULE_RUNTIME: &str = r#"
pub fn generate(target: &Path, verbose: bool) -> io::Result<()> {
    if verbose {
        println!("\nCREATING PROJECT\n");
    }
    for (path, content) in FILES {
        let dest = target.join(path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, content)?;
        if verbose {
            println!("   + {path}");
        } else {
            println!("   Created: {path}");
        }
    }
    if verbose {
        println!("\nPROJECT READY");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("\nUSAGE: {CAPSULE_NAME} <target-dir> [false]");
        println!("USING (default): {DEFAULT_TARGET}");
    }
    let target = args.first().cloned().unwrap_or_else(|| DEFAULT_TARGET.to_string());
    let verbose = args.get(1).map(|flag| flag != "false").unwrap_or(true);
    if let Err(err) = generate(Path::new(&target), verbose) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
"#;

/// Derives the default materialization target from the capsule file name:
/// the trailing dotted segment of the stem, prefixed with the project-name
/// template. A name without such a segment is returned unchanged.
///
/// `pack/bundle.worker.rs` with prefix `capsula` becomes `capsula-worker`.
pub fn default_target(capsule_name: &str, prefix: &str) -> String {
    match capsule_name
        .strip_suffix(".rs")
        .and_then(|stem| stem.rsplit_once('.'))
    {
        Some((_, tag)) => format!("{prefix}-{tag}"),
        None => capsule_name.to_string(),
    }
}

/// Serializes `files` into capsule source text.
///
/// The data section preserves set order and the output is byte-identical
/// across runs for the same input.
pub fn render_capsule(files: &FileSet, capsule_name: &str, prefix: &str) -> String {
    let target = default_target(capsule_name, prefix);

    let mut out = String::new();
    let _ = writeln!(out, "//! Generated by capsula from a captured template tree. Do not edit.");
    let _ = writeln!(out, "//! Rebuild with: capsula bundle <template-dir> {capsule_name}");
    out.push_str("\nuse std::env;\nuse std::fs;\nuse std::io;\nuse std::path::Path;\nuse std::process::ExitCode;\n\n");
    let _ = writeln!(out, "const CAPSULE_NAME: &str = {capsule_name:?};");
    let _ = writeln!(out, "const DEFAULT_TARGET: &str = {target:?};");
    out.push_str("\nstatic FILES: &[(&str, &str)] = &[\n");
    for (path, content) in files {
        let _ = writeln!(out, "    ({path:?}, {content:?}),");
    }
    out.push_str("];\n");
    out.push_str(CAPSULE_RUNTIME);
    out
}

/// Collects `template_dir` and writes a capsule to `output_file`.
/// Returns the number of packed files.
///
/// # Errors
/// * `Error::Io` if the template walk or the capsule write fails
pub fn make_bundle(
    template_dir: &Path,
    output_file: &Path,
    excludes: &ExcludeSet,
    prefix: &str,
) -> Result<usize> {
    println!("\n{}", "─".repeat(57));
    println!("TARGET: {}", output_file.display());
    println!("{}", "─".repeat(57));
    println!("Packing: {}", template_dir.display());

    let files = collect_files(template_dir, excludes)?;

    let capsule_name = output_file
        .to_str()
        .ok_or_else(|| Error::Template(format!("Invalid path: {}", output_file.display())))?;
    let capsule = render_capsule(&files, capsule_name, prefix);

    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_file, capsule)?;

    println!("Created: {} ({} files)", output_file.display(), files.len());
    Ok(files.len())
}
