//! User input and interaction handling for the project creation flow.

use crate::config::Config;
use crate::error::{Error, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use std::io;

/// Answers gathered from the interactive prompt sequence.
#[derive(Debug)]
pub struct ProjectAnswers {
    pub template_key: String,
    pub project_name: String,
    /// Package manager to install with; `None` skips installation
    pub package_manager: Option<String>,
    pub init_git: bool,
}

/// Maps a prompt result into our error type, turning an interrupt
/// (Ctrl-C) into a cancellation instead of an error.
fn check<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(dialoguer::Error::IO(err)) => Err(Error::Io(err)),
    }
}

fn validate_project_name(input: &String) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        return Err("Project name is required".to_string());
    }
    if !input.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("Use only letters, numbers and hyphens".to_string());
    }
    Ok(())
}

/// Runs the prompt sequence against the template catalogue.
/// Returns `None` when the user cancels at any step.
pub fn prompt_project(config: &Config) -> Result<Option<ProjectAnswers>> {
    let theme = ColorfulTheme::default();

    let keys: Vec<&String> = config.templates.keys().collect();
    let items: Vec<String> = config
        .templates
        .values()
        .map(|template| {
            if template.description.is_empty() {
                template.name.clone()
            } else {
                format!("{} - {}", template.name, template.description)
            }
        })
        .collect();

    let Some(selection) = check(
        Select::with_theme(&theme)
            .with_prompt("Choose a template (Esc to exit)")
            .items(&items)
            .default(0)
            .interact_opt(),
    )?
    .flatten() else {
        return Ok(None);
    };
    let template_key = keys[selection].clone();

    let Some(project_name) = check(
        Input::<String>::with_theme(&theme)
            .with_prompt("Project name")
            .default(format!("{}-{template_key}", config.prefix))
            .validate_with(validate_project_name)
            .interact_text(),
    )? else {
        return Ok(None);
    };

    let managers = ["skip installation", "npm", "pnpm", "yarn"];
    let Some(manager) = check(
        Select::with_theme(&theme)
            .with_prompt("Package manager")
            .items(&managers)
            .default(0)
            .interact_opt(),
    )?
    .flatten() else {
        return Ok(None);
    };
    let package_manager = (manager != 0).then(|| managers[manager].to_string());

    let features = ["Initialize Git repository"];
    let Some(picked) = check(
        MultiSelect::with_theme(&theme)
            .with_prompt("Additional features (space to select, enter to continue)")
            .items(&features)
            .interact_opt(),
    )?
    .flatten() else {
        return Ok(None);
    };
    let init_git = picked.contains(&0);

    Ok(Some(ProjectAnswers {
        template_key,
        project_name,
        package_manager,
        init_git,
    }))
}

/// Asks whether an existing destination directory may be overwritten.
/// Cancelling counts as declining.
pub fn confirm_overwrite(project_name: &str) -> Result<bool> {
    let confirmed = check(
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Directory \"{project_name}\" already exists. Overwrite?"))
            .default(false)
            .interact(),
    )?;
    Ok(confirmed.unwrap_or(false))
}
