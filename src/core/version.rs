//! Version string extraction
//!
//! InterMine build files declare their artifact version as a quoted
//! literal on a `version` line. The installer needs the core and bio
//! versions after a successful build, so a missing version line means
//! the upstream file format drifted and this tool needs updating.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Version extraction errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// No line in the file matched the version pattern
    #[error(
        "Failed to read version string from '{path}'. It's likely the source files have changed \
         and intermine-boot needs to be updated to work again."
    )]
    PatternNotFound { path: PathBuf },

    /// Build file could not be read
    #[error("Failed to read '{path}': {error}")]
    ReadFailed { path: PathBuf, error: String },
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"version[\s=]+['"]([^'"]*)['"]"#).expect("version pattern is valid")
    })
}

/// Match one line against the version pattern, returning the quoted
/// literal if present.
pub fn match_version_line(line: &str) -> Option<String> {
    version_pattern()
        .captures(line)
        .map(|captures| captures[1].to_string())
}

/// Scan `path` line by line and return the first version capture.
///
/// Scanning short-circuits at the first match. A file with no matching
/// line is an error naming the file.
pub fn read_version_string(path: &Path) -> Result<String, VersionError> {
    let file = File::open(path).map_err(|e| VersionError::ReadFailed {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| VersionError::ReadFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        if let Some(version) = match_version_line(&line) {
            return Ok(version);
        }
    }

    Err(VersionError::PatternNotFound {
        path: path.to_path_buf(),
    })
}
