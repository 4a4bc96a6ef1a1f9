//! Gradle wrapper invocation
//!
//! Runs `./gradlew <task>` inside a module directory. Output is
//! captured, never streamed to the terminal; the first non-zero exit is
//! an error.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Gradle invocation errors
#[derive(Error, Debug)]
pub enum GradleError {
    /// Task exited non-zero
    #[error("'gradlew {task}' failed in '{dir}' ({status}): {stderr}")]
    TaskFailed {
        task: String,
        dir: String,
        status: String,
        stderr: String,
    },

    /// Wrapper could not be started
    #[error("Failed to run gradle wrapper in '{dir}': {error}")]
    SpawnFailed { dir: String, error: String },
}

/// Run one Gradle task with `module_dir` as the working directory.
///
/// Blocks until the wrapper exits. On failure the tail of its stderr is
/// carried in the error.
pub fn run_task(module_dir: &Path, task: &str) -> Result<(), GradleError> {
    tracing::debug!("Running 'gradlew {}' in {}", task, module_dir.display());

    let output = Command::new("./gradlew")
        .arg(task)
        .current_dir(module_dir)
        .output()
        .map_err(|e| GradleError::SpawnFailed {
            dir: module_dir.display().to_string(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GradleError::TaskFailed {
            task: task.to_string(),
            dir: module_dir.display().to_string(),
            status: output.status.to_string(),
            stderr: stderr_tail(&output.stderr),
        });
    }

    Ok(())
}

/// Last few stderr lines, for error messages
fn stderr_tail(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut lines: Vec<&str> = text.lines().rev().take(10).collect();
    lines.reverse();
    lines.join("\n")
}
