//! Configuration handling for the Capsula template catalogue.
//! Supports JSON and YAML formats (capsula.json, capsula.yml,
//! capsula.yaml); JSON is tried first, YAML is the fallback.

use crate::constants::{CONFIG_FILES, DEFAULT_EXCLUDES, DEFAULT_PREFIX};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One template of the catalogue.
#[derive(Debug, Deserialize)]
pub struct Template {
    /// Display name shown in the template selection prompt
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Commands suggested to the user after project creation
    #[serde(default)]
    pub commands: Vec<String>,

    /// Exclusion rules for this template's traversal
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Template {
    /// This template's rules, falling back to the built-in exclusion
    /// list when none are declared.
    pub fn exclude_rules(&self) -> Vec<String> {
        if self.exclude.is_empty() {
            DEFAULT_EXCLUDES.iter().map(|rule| rule.to_string()).collect()
        } else {
            self.exclude.clone()
        }
    }
}

/// The template catalogue plus the layout of the authoring workspace.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Project-name prefix: template directories are named
    /// `<prefix>-<key>` and generated project names default to it
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Directory holding template sources, relative to the catalogue file
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Directory receiving capsules and scratch replays
    #[serde(default = "default_pack_dir")]
    pub pack_dir: PathBuf,

    /// Manifest whose name field is rewritten after materialization
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Ordered map of template key to template description
    pub templates: IndexMap<String, Template>,

    /// Directory the catalogue file was loaded from
    #[serde(skip)]
    root: PathBuf,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_pack_dir() -> PathBuf {
    PathBuf::from("pack")
}

fn default_manifest_file() -> String {
    "package.json".to_string()
}

impl Config {
    /// Loads the catalogue from `dir`, trying multiple file names.
    ///
    /// # Errors
    /// * `Error::Config` if no catalogue file exists in `dir`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        for file in CONFIG_FILES {
            let config_path = dir.join(file);
            if config_path.exists() {
                debug!("Loading configuration from {}", config_path.display());
                return Self::load_file(&config_path);
            }
        }

        Err(Error::Config(format!(
            "No configuration file found in {} (tried: {})",
            dir.display(),
            CONFIG_FILES.join(", ")
        )))
    }

    /// Loads and parses a catalogue file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.root = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        Ok(config)
    }

    /// Parses catalogue content, trying JSON first and YAML second.
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str(content) {
            Ok(config) => Ok(config),
            Err(_) => serde_yaml::from_str(content)
                .map_err(|e| Error::Config(format!("Invalid configuration format: {e}"))),
        }
    }

    /// Looks up a template by key.
    pub fn template(&self, key: &str) -> Result<&Template> {
        self.templates
            .get(key)
            .ok_or_else(|| Error::Config(format!("Unknown template: {key}")))
    }

    /// Source directory of a template: `<templates_dir>/<prefix>-<key>`.
    pub fn template_dir(&self, key: &str) -> PathBuf {
        self.root
            .join(&self.templates_dir)
            .join(format!("{}-{key}", self.prefix))
    }

    /// Directory receiving capsules and scratch replays.
    pub fn pack_dir(&self) -> PathBuf {
        self.root.join(&self.pack_dir)
    }
}
