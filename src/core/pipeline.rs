//! End-to-end build pipeline
//!
//! Clones the InterMine repository at the requested branch into a
//! scoped temporary directory, builds every module in order, then reads
//! the two version strings the installer needs. The temporary clone is
//! removed when the pipeline returns, on success and failure alike.

use std::path::Path;

use serde::Serialize;
use tempfile::TempDir;

use crate::config::defaults::{BIO_VERSION_FILE, CLONE_DIR, IM_VERSION_FILE, TMPDIR_PREFIX};
use crate::core::{build, version};
use crate::error::BootError;
use crate::infra::git::{self, CloneTick};

/// Versions extracted from a successful build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOutcome {
    /// Core InterMine version
    pub im_version: String,
    /// Bio layer version
    pub bio_version: String,
}

/// Progress surface for a pipeline run.
///
/// The CLI renders these as status lines and progress bars; tests use a
/// recording implementation. All hooks default to no-ops.
pub trait Reporter {
    /// One clone progress sample from git's stderr stream
    fn clone_tick(&mut self, _tick: CloneTick) {}

    /// The clone finished and the module build loop is starting
    fn build_started(&mut self, _repo: &str, _branch: &str, _total_steps: u64) {}

    /// One build command (clean or install) completed
    fn build_step(&mut self) {}

    /// Every module built successfully
    fn build_finished(&mut self) {}
}

/// Run the whole pipeline: fetch, build, extract.
///
/// The clone lives in a temporary directory owned by this call; it is
/// deleted before this function returns, whatever the outcome.
pub fn run(repo: &str, branch: &str, reporter: &mut impl Reporter) -> Result<BuildOutcome, BootError> {
    let tmpdir = TempDir::with_prefix(TMPDIR_PREFIX).map_err(|e| BootError::Io {
        path: std::env::temp_dir(),
        error: e.to_string(),
    })?;

    // tmpdir drops here, removing the clone on every path out
    run_in(tmpdir.path(), repo, branch, reporter)
}

fn run_in(
    workdir: &Path,
    repo: &str,
    branch: &str,
    reporter: &mut impl Reporter,
) -> Result<BuildOutcome, BootError> {
    let repo_dir = workdir.join(CLONE_DIR);

    git::clone_single_branch(repo, branch, &repo_dir, |tick| reporter.clone_tick(tick))?;
    tracing::info!("Cloned {} at branch {}", repo, branch);

    reporter.build_started(repo, branch, build::total_build_steps());
    build::build_modules(&repo_dir, || reporter.build_step())?;
    reporter.build_finished();

    let im_build_file = build::module_dir(&repo_dir, IM_VERSION_FILE);
    let bio_build_file = build::module_dir(&repo_dir, BIO_VERSION_FILE);

    Ok(BuildOutcome {
        im_version: version::read_version_string(&im_build_file)?,
        bio_version: version::read_version_string(&bio_build_file)?,
    })
}
