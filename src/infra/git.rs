//! Git operations
//!
//! Clones the InterMine repository by shelling out to the system `git`
//! binary and translates its `--progress` stderr stream into progress
//! samples for the caller.

use std::collections::VecDeque;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Git operation errors
#[derive(Error, Debug)]
pub enum GitError {
    /// git binary not on PATH
    #[error("git not found on PATH; install git to fetch InterMine sources")]
    GitNotFound,

    /// Clone exited non-zero
    #[error("Failed to clone '{url}' (branch '{branch}'): {error}")]
    CloneFailed {
        url: String,
        branch: String,
        error: String,
    },

    /// IO error talking to the git subprocess
    #[error("IO error during clone: {0}")]
    Io(String),
}

/// One phase of a clone as reported on git's progress stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClonePhase {
    /// Object transfer phase
    ReceivingObjects,
    /// Post-transfer delta resolution phase
    ResolvingDeltas,
}

impl ClonePhase {
    /// Human label for this phase
    pub fn label(self) -> &'static str {
        match self {
            Self::ReceivingObjects => "Receiving objects:",
            Self::ResolvingDeltas => "Resolving deltas:",
        }
    }
}

/// A single progress sample parsed from git's stderr stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneTick {
    /// Phase the sample belongs to
    pub phase: ClonePhase,
    /// Monotonically increasing count within the phase
    pub current: u64,
    /// Count at which the phase completes
    pub max: u64,
}

fn progress_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(Receiving objects|Resolving deltas):\s+\d+% \((\d+)/(\d+)\)")
            .expect("progress pattern is valid")
    })
}

/// Parse one stderr line into a progress sample, if it is one.
///
/// Lines that are not progress reports (status messages, remote output)
/// yield `None`.
pub fn parse_progress_line(line: &str) -> Option<CloneTick> {
    let captures = progress_pattern().captures(line)?;
    let phase = match &captures[1] {
        "Receiving objects" => ClonePhase::ReceivingObjects,
        _ => ClonePhase::ResolvingDeltas,
    };
    let current = captures[2].parse().ok()?;
    let max = captures[3].parse().ok()?;
    Some(CloneTick {
        phase,
        current,
        max,
    })
}

/// Clone `url` at `branch` into `dest`, restricted to that branch's
/// history.
///
/// Progress samples parsed from git's stderr are handed to `on_progress`
/// as they arrive. Blocks until git exits; a non-zero exit is an error
/// carrying the tail of git's diagnostics.
pub fn clone_single_branch(
    url: &str,
    branch: &str,
    dest: &Path,
    mut on_progress: impl FnMut(CloneTick),
) -> Result<(), GitError> {
    which::which("git").map_err(|_| GitError::GitNotFound)?;

    tracing::debug!("Cloning {} (branch {}) into {}", url, branch, dest.display());

    let mut child = Command::new("git")
        .arg("clone")
        .arg("--single-branch")
        .arg("--branch")
        .arg(branch)
        .arg("--progress")
        .arg(url)
        .arg(dest)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| GitError::Io(e.to_string()))?;

    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| GitError::Io("no stderr handle on git subprocess".to_string()))?;

    // Keep the most recent diagnostic lines for the error message.
    let mut diagnostics: VecDeque<String> = VecDeque::with_capacity(5);
    for_each_line(stderr, |line| {
        if let Some(tick) = parse_progress_line(line) {
            on_progress(tick);
        } else if !line.trim().is_empty() {
            if diagnostics.len() == 5 {
                diagnostics.pop_front();
            }
            diagnostics.push_back(line.to_string());
        }
    })
    .map_err(|e| GitError::Io(e.to_string()))?;

    let status = child.wait().map_err(|e| GitError::Io(e.to_string()))?;
    if !status.success() {
        return Err(GitError::CloneFailed {
            url: url.to_string(),
            branch: branch.to_string(),
            error: if diagnostics.is_empty() {
                status.to_string()
            } else {
                diagnostics.into_iter().collect::<Vec<_>>().join("; ")
            },
        });
    }

    Ok(())
}

/// Call `f` for each line of `reader`, splitting on both LF and CR.
///
/// Git rewrites progress lines in place with carriage returns, so the
/// stream cannot be read with a plain line reader.
fn for_each_line(mut reader: impl Read, mut f: impl FnMut(&str)) -> std::io::Result<()> {
    let mut buf = [0u8; 4096];
    let mut pending = Vec::new();
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            if byte == b'\r' || byte == b'\n' {
                if !pending.is_empty() {
                    f(&String::from_utf8_lossy(&pending));
                    pending.clear();
                }
            } else {
                pending.push(byte);
            }
        }
    }
    if !pending.is_empty() {
        f(&String::from_utf8_lossy(&pending));
    }
    Ok(())
}
