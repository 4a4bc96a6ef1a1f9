//! Error types for intermine-boot
//!
//! Domain-specific error types using thiserror. Subsystem errors are
//! defined next to their subsystems; this module aggregates them.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::version::VersionError;
use crate::infra::git::GitError;
use crate::infra::gradle::GradleError;

/// Top-level intermine-boot error type
#[derive(Error, Debug)]
pub enum BootError {
    /// Repository fetch error
    #[error("Fetch error: {0}")]
    Git(#[from] GitError),

    /// Module build error
    #[error("Build error: {0}")]
    Gradle(#[from] GradleError),

    /// Version extraction error
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// IO error
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}
