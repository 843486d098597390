//! Common constants used throughout the Capsula application.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["capsula.json", "capsula.yml", "capsula.yaml"];

/// Default project-name prefix for templates and generated directories
pub const DEFAULT_PREFIX: &str = "capsula";

/// Exclusion rules applied when a template declares none of its own
pub const DEFAULT_EXCLUDES: [&str; 9] = [
    ".DS_Store",
    "__*",
    "node_modules",
    "package-*",
    ".git",
    ".wrangler",
    ".astro",
    "dist",
    "target",
];

/// Number of differing paths printed before the diff summary truncates
pub const DIFF_DISPLAY_LIMIT: usize = 10;

/// Length of the short content-hash prefix shown in diff records
pub const SHORT_HASH_LEN: usize = 8;
