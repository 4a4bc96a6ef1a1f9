//! Intermine-boot - InterMine source build automation
//!
//! This library clones the InterMine repository at a requested branch,
//! builds its Gradle modules in dependency order, and extracts the core
//! and bio version strings for the downstream installer.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Build orchestration and version extraction
//! - [`infra`] - Infrastructure layer (git and Gradle subprocesses)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
