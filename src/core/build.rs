//! Module build loop
//!
//! Drives the Gradle wrapper over the fixed, ordered list of InterMine
//! modules. Each module is cleaned and then installed so that later
//! modules can resolve the artifacts earlier ones publish.

use std::path::{Path, PathBuf};

use crate::config::defaults::MODULE_BUILD_ORDER;
use crate::infra::gradle::{self, GradleError};

/// Total progress units for the build loop: clean plus install per
/// module.
pub fn total_build_steps() -> u64 {
    (MODULE_BUILD_ORDER.len() * 2) as u64
}

/// Resolve a module's directory under the clone root
pub fn module_dir(repo_dir: &Path, segments: &[&str]) -> PathBuf {
    segments
        .iter()
        .fold(repo_dir.to_path_buf(), |dir, segment| dir.join(segment))
}

/// Build every module in declared order, cleaning then installing each.
///
/// `on_step` is called once per completed command. The first failing
/// command aborts the loop; nothing after it runs.
pub fn build_modules(repo_dir: &Path, mut on_step: impl FnMut()) -> Result<(), GradleError> {
    for segments in MODULE_BUILD_ORDER {
        let dir = module_dir(repo_dir, segments);
        tracing::info!("Building module {}", segments.join("/"));

        gradle::run_task(&dir, "clean")?;
        on_step();
        gradle::run_task(&dir, "install")?;
        on_step();
    }
    Ok(())
}
