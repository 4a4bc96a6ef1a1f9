//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars and
//! formatted messages to the user.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::core::pipeline::Reporter;
use crate::infra::git::{ClonePhase, CloneTick};

/// Create a labeled progress bar for one clone phase
pub fn create_clone_bar(length: u64, label: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(label);
    pb
}

/// Create the progress bar for the module build loop
pub fn create_build_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Building InterMine: [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Per-clone progress state.
///
/// Owns one bar per clone phase; a fresh instance is created for each
/// clone and dropped with it.
pub struct CloneProgress {
    bar: Option<ProgressBar>,
    phase: Option<ClonePhase>,
    hidden: bool,
}

impl CloneProgress {
    /// Create progress state for one clone. `hidden` suppresses drawing
    /// while keeping the position bookkeeping intact.
    pub fn new(hidden: bool) -> Self {
        Self {
            bar: None,
            phase: None,
            hidden,
        }
    }

    /// Feed one progress sample.
    ///
    /// A sample from a new phase starts a fresh bar of that phase's
    /// length; every sample moves the bar, and the bar finishes when the
    /// count reaches the phase maximum.
    pub fn update(&mut self, tick: CloneTick) {
        if self.phase != Some(tick.phase) {
            if let Some(old) = self.bar.take() {
                old.finish();
            }
            let bar = create_clone_bar(tick.max, tick.phase.label());
            if self.hidden {
                bar.set_draw_target(ProgressDrawTarget::hidden());
            }
            self.phase = Some(tick.phase);
            self.bar = Some(bar);
        }

        if let Some(bar) = &self.bar {
            bar.set_position(tick.current);
            if tick.current >= tick.max {
                bar.finish();
            }
        }
    }

    /// Current bar position, if a phase is active
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Current bar length, if a phase is active
    pub fn length(&self) -> Option<u64> {
        self.bar.as_ref().and_then(ProgressBar::length)
    }

    /// Whether the active phase has completed
    pub fn is_finished(&self) -> bool {
        self.bar.as_ref().is_some_and(|bar| bar.is_finished())
    }
}

/// Renders pipeline progress on the terminal
pub struct ConsoleReporter {
    quiet: bool,
    clone: CloneProgress,
    build_bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    /// Create a reporter; `quiet` suppresses all drawing
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            clone: CloneProgress::new(quiet),
            build_bar: None,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn clone_tick(&mut self, tick: CloneTick) {
        self.clone.update(tick);
    }

    fn build_started(&mut self, repo: &str, branch: &str, total_steps: u64) {
        if !self.quiet {
            println!("Will build {branch} branch of {repo}");
        }
        let bar = create_build_bar(total_steps);
        if self.quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        self.build_bar = Some(bar);
    }

    fn build_step(&mut self) {
        if let Some(bar) = &self.build_bar {
            bar.inc(1);
        }
    }

    fn build_finished(&mut self) {
        if let Some(bar) = self.build_bar.take() {
            bar.finish();
        }
    }
}

/// Print a top-level error to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
