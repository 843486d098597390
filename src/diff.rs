//! Content-hash comparison between an original template tree and a
//! generated one.
//!
//! The comparison is one-directional by design: every file of the
//! generated tree is checked against the original, while files present
//! only in the original are never reported.

use crate::constants::{DIFF_DISPLAY_LIMIT, SHORT_HASH_LEN};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use md5::{Digest, Md5};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// A collected file extended with its content hash and byte length.
#[derive(Debug)]
pub struct HashedFile {
    pub hash: String,
    pub size: u64,
}

/// Ordered mapping from relative path to hashed content.
pub type HashedFileSet = IndexMap<String, HashedFile>;

/// One content mismatch between the generated tree and the original.
/// Hashes are truncated to a short prefix for reporting.
#[derive(Debug)]
pub struct FileDiff {
    pub path: String,
    pub original_hash: String,
    pub generated_hash: String,
    pub original_size: u64,
    pub generated_size: u64,
}

/// Outcome of one tree comparison. Built fresh per run, never persisted.
#[derive(Debug, Default)]
pub struct DiffReport {
    pub identical: Vec<String>,
    pub different: Vec<FileDiff>,
    pub missing: Vec<String>,
    pub total_compared: usize,
}

impl DiffReport {
    /// The comparison passes iff nothing differs and nothing is missing.
    pub fn passed(&self) -> bool {
        self.different.is_empty() && self.missing.is_empty()
    }

    /// Converts a failed comparison into the hard error, carrying the
    /// full differing and missing path lists.
    pub fn ensure_passed(&self) -> Result<()> {
        if self.passed() {
            return Ok(());
        }
        Err(Error::ComparisonFailed {
            different: self.different.iter().map(|d| d.path.clone()).collect(),
            missing: self.missing.clone(),
        })
    }
}

fn hash_content(content: &str) -> String {
    hex::encode(Md5::digest(content.as_bytes()))
}

fn short_hash(hash: &str) -> String {
    hash.chars().take(SHORT_HASH_LEN).collect()
}

/// Walks `root` without exclusion filtering, hashing every file.
///
/// # Errors
/// * `Error::Io` if `root` does not exist or an entry cannot be read
pub fn collect_hashed(root: &Path) -> Result<HashedFileSet> {
    let mut files = HashedFileSet::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::Template(e.to_string()))?
            .to_str()
            .ok_or_else(|| Error::Template(format!("Invalid path: {}", entry.path().display())))?
            .to_string();

        let content = fs::read_to_string(entry.path())?;
        let size = content.len() as u64;
        files.insert(
            relative,
            HashedFile {
                hash: hash_content(&content),
                size,
            },
        );
    }

    Ok(files)
}

/// Compares every file of `generated` against the same relative path
/// under `original`.
///
/// An unreadable entry under `original` counts as missing, not fatal;
/// an unreadable entry under `generated` aborts the comparison.
pub fn compare_trees(original: &Path, generated: &Path) -> Result<DiffReport> {
    println!("{}", "─".repeat(37));
    println!("COMPARING GENERATED FILES");
    println!("{}", "─".repeat(37));
    println!("   Original:  {}", original.display());
    println!("   Generated: {}", generated.display());

    let generated_files = collect_hashed(generated)?;
    println!("   {} file(s) in the generated tree", generated_files.len());

    let mut report = DiffReport::default();

    for (relative, generated_data) in &generated_files {
        let original_path = original.join(relative);

        match fs::read_to_string(&original_path) {
            Ok(content) => {
                let original_hash = hash_content(&content);
                if original_hash == generated_data.hash {
                    report.identical.push(relative.clone());
                } else {
                    report.different.push(FileDiff {
                        path: relative.clone(),
                        original_hash: short_hash(&original_hash),
                        generated_hash: short_hash(&generated_data.hash),
                        original_size: content.len() as u64,
                        generated_size: generated_data.size,
                    });
                }
            }
            Err(err) => {
                debug!("Missing from original: {relative} ({err})");
                report.missing.push(relative.clone());
            }
        }

        report.total_compared += 1;
    }

    Ok(report)
}

/// Prints a report summary, truncating the differing list for display.
/// Truncation is a display concern only; the report keeps the full lists.
pub fn display_report(report: &DiffReport) {
    if !report.different.is_empty() {
        println!();
        for diff in report.different.iter().take(DIFF_DISPLAY_LIMIT) {
            println!(
                "   x {} ({} ({}b) vs {} ({}b))",
                diff.path,
                diff.original_hash,
                diff.original_size,
                diff.generated_hash,
                diff.generated_size,
            );
        }
        if report.different.len() > DIFF_DISPLAY_LIMIT {
            println!("   ... and {} more", report.different.len() - DIFF_DISPLAY_LIMIT);
        }
    }

    println!("{}", "─".repeat(37));
    let mut summary = format!("IDENTICAL ({})", report.identical.len());
    if !report.different.is_empty() {
        summary.push_str(&format!("  DIFFERENT ({})", report.different.len()));
    }
    if !report.missing.is_empty() {
        summary.push_str(&format!("  MISSING ({})", report.missing.len()));
    }
    println!("{summary}");
}

/// Compares, displays and enforces: fails with `Error::ComparisonFailed`
/// when the generated tree does not replay the original faithfully.
pub fn make_diff(original: &Path, generated: &Path) -> Result<DiffReport> {
    let report = compare_trees(original, generated)?;
    display_report(&report);
    report.ensure_passed()?;
    Ok(report)
}
