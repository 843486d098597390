//! End-user project creation: materializing a chosen template and the
//! follow-up steps around it (manifest patching, optional dependency
//! installation, optional Git initialization).

use crate::collect::collect_files;
use crate::config::{Config, Template};
use crate::error::{Error, Result};
use crate::materialize::materialize;
use crate::pattern::ExcludeSet;
use crate::process::run_command;
use crate::prompt::ProjectAnswers;
use console::style;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Materializes the chosen template into `./<project-name>` and runs the
/// follow-up steps. Returns the created project directory.
///
/// Dependency installation is non-fatal: a failed install leaves the
/// created project in place and prints the manual command instead.
pub fn create_project(config: &Config, answers: &ProjectAnswers) -> Result<PathBuf> {
    let template = config.template(&answers.template_key)?;
    let template_dir = config.template_dir(&answers.template_key);
    let project_dir = std::env::current_dir()?.join(&answers.project_name);

    println!("\n{}", style("Creating project...").cyan());
    println!("{}", style(format!("Template: {}", template.name)).dim());
    println!("{}", style(format!("Location: ./{}", answers.project_name)).dim());

    let excludes = ExcludeSet::compile(&template.exclude_rules())?;
    let files = collect_files(&template_dir, &excludes)?;
    materialize(&files, &project_dir, |path| {
        println!("{}", style(format!("  Created: {path}")).dim());
    })?;

    patch_manifest(&project_dir.join(&config.manifest_file), &answers.project_name)?;

    if answers.init_git {
        match run_command("git", &["init"], Some(&project_dir), false) {
            Ok(_) => println!("{}", style("Git repository initialized").green()),
            Err(err) => warn!("git init failed: {err}"),
        }
    }

    if let Some(manager) = &answers.package_manager {
        println!("\n{}", style(format!("Installing dependencies with {manager}...")).cyan());
        match run_command(manager, &["install"], Some(&project_dir), true) {
            Ok(_) => println!("{}", style("Dependencies installed successfully").green()),
            Err(err) => {
                debug!("{err}");
                println!("{}", style("Installation failed, but the project was created.").yellow());
                println!(
                    "{}",
                    style(format!(
                        "Install manually with: cd {} && {manager} install",
                        answers.project_name
                    ))
                    .dim()
                );
            }
        }
    }

    Ok(project_dir)
}

/// Rewrites the project name field of the manifest at the tree root.
/// A template without a manifest is skipped.
///
/// # Errors
/// * `Error::Config` if the manifest exists but is not valid JSON
pub fn patch_manifest(manifest_path: &Path, project_name: &str) -> Result<()> {
    if !manifest_path.exists() {
        debug!("No manifest at {}, skipping rename", manifest_path.display());
        return Ok(());
    }

    let content = fs::read_to_string(manifest_path)?;
    let mut manifest: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid manifest {}: {e}", manifest_path.display())))?;

    if let Some(fields) = manifest.as_object_mut() {
        fields.insert(
            "name".to_string(),
            serde_json::Value::String(project_name.to_string()),
        );
    }

    let patched = serde_json::to_string_pretty(&manifest)
        .map_err(|e| Error::Config(format!("Invalid manifest {}: {e}", manifest_path.display())))?;
    fs::write(manifest_path, patched)?;
    Ok(())
}

/// Prints the post-creation summary with the template's suggested
/// commands.
pub fn print_next_steps(template: &Template, answers: &ProjectAnswers) {
    println!("\n{}", style("Project created successfully!").green().bold());
    println!("\n{}", style("Next steps:").bold());
    println!("  cd {}", answers.project_name);
    if answers.package_manager.is_none() {
        println!("  npm install");
    }
    if !template.commands.is_empty() {
        println!("\n{}", style("Available commands:").bold());
        for command in &template.commands {
            println!("  {command}");
        }
    }
}
