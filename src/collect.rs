//! Recursive collection of a template tree into an ordered file set.

use crate::error::{Error, Result};
use crate::pattern::ExcludeSet;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// An ordered mapping from root-relative path to file content.
/// Iteration order is the depth-first order of discovery.
pub type FileSet = IndexMap<String, String>;

/// Recursively collects every non-excluded regular file under `root`.
///
/// Excluded entries are pruned before descent, so the contents of an
/// excluded directory are never visited. Symbolic links are followed: a
/// symlinked directory is traversed as a directory.
///
/// # Errors
/// * `Error::Io` if `root` does not exist or a kept entry cannot be read
pub fn collect_files(root: &Path, excludes: &ExcludeSet) -> Result<FileSet> {
    let mut files = FileSet::new();

    let walker = WalkDir::new(root).follow_links(true).into_iter();
    for entry in walker.filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_string_lossy();
        if excludes.is_excluded(&name, &relative) {
            debug!("Skipping: {relative}");
            false
        } else {
            true
        }
    }) {
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
        debug!("Collected: {relative}");
        files.insert(relative, content);
    }

    Ok(files)
}
