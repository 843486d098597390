//! Author-time verification loop: bundle every configured template,
//! replay its capsule into a scratch directory and certify the replay
//! against the template source.
//!
//! The batch is fail-fast: a single template's failure halts processing
//! of the remaining templates, and no cleanup of the failed template's
//! scratch output is attempted.

use crate::bundle::make_bundle;
use crate::config::Config;
use crate::diff::make_diff;
use crate::error::Result;
use crate::pattern::ExcludeSet;
use crate::process::run_command;
use std::fs;

/// Bundles, replays and diffs every template of the catalogue, in order.
///
/// A scratch replay directory and the compiled capsule binary are removed
/// after a successful comparison unless `keep` is set; the capsule source
/// itself is always retained.
pub fn verify_all(config: &Config, keep: bool) -> Result<()> {
    for (key, template) in &config.templates {
        let template_dir = config.template_dir(key);
        let capsule_file = config.pack_dir().join(format!("bundle.{key}.rs"));
        let binary_file = config.pack_dir().join(format!("bundle.{key}"));
        let scratch_dir = config.pack_dir().join(format!("test.{key}"));

        let excludes = ExcludeSet::compile(&template.exclude_rules())?;
        make_bundle(&template_dir, &capsule_file, &excludes, &config.prefix)?;

        // Replay the capsule the way an end user would run it: as a
        // standalone compiled artifact.
        let capsule_path = capsule_file.display().to_string();
        let binary_path = binary_file.display().to_string();
        let scratch_path = scratch_dir.display().to_string();
        run_command(
            "rustc",
            &["--edition", "2021", capsule_path.as_str(), "-o", binary_path.as_str()],
            None,
            true,
        )?;
        run_command(&binary_path, &[scratch_path.as_str()], None, true)?;

        println!("{}", "─".repeat(37));
        println!("Created: {}", scratch_dir.display());

        make_diff(&template_dir, &scratch_dir)?;

        if !keep {
            fs::remove_dir_all(&scratch_dir)?;
            fs::remove_file(&binary_file)?;
        }
    }

    Ok(())
}
