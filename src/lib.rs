//! Capsula is a project scaffolding tool built around self-contained
//! template capsules. A template tree is packed into a single generator
//! artifact that replays the tree at any destination, and every capsule
//! is certified against its source by content-hash comparison before it
//! ships.

/// Capsule generation from collected template trees
pub mod bundle;

/// Command-line interface module for the Capsula application
pub mod cli;

/// Recursive collection of template trees into ordered file sets
pub mod collect;

/// Configuration handling for the template catalogue
/// Supports JSON and YAML formats (capsula.json, capsula.yml, capsula.yaml)
pub mod config;

/// Common constants used throughout the Capsula application
pub mod constants;

/// Content-hash comparison between original and generated trees
pub mod diff;

/// Error types and handling for the Capsula application
pub mod error;

/// Logger configuration
pub mod logger;

/// Materialization of collected file sets onto disk
pub mod materialize;

/// Exclusion pattern matching for template traversal
pub mod pattern;

/// External command execution
pub mod process;

/// User input and interaction handling
pub mod prompt;

/// End-user project creation flow
pub mod scaffold;

/// Author-time bundle, replay and verify loop
pub mod verify;
