//! Writing a collected file set back onto disk.

use crate::collect::FileSet;
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// Writes every entry of `files` under `target`, in set order.
///
/// Parent directories are created as needed (an already-existing
/// directory is not an error); existing files are overwritten
/// unconditionally. There is no rollback: if entry N fails, entries
/// 1..N-1 remain on disk and the error propagates.
///
/// `on_write` is invoked once per written file with its relative path.
pub fn materialize<F>(files: &FileSet, target: &Path, mut on_write: F) -> Result<()>
where
    F: FnMut(&str),
{
    for (relative, content) in files {
        let dest = target.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, content)?;
        debug!("Wrote: {}", dest.display());
        on_write(relative);
    }
    Ok(())
}
