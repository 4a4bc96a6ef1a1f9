//! Full pipeline tests
//!
//! Runs the whole fetch-build-extract sequence against a local origin
//! repository whose modules carry recording stub `gradlew` scripts.
//! Requires a git binary; skips when none is installed.

#![cfg(unix)]

mod common;

use common::{git_available, TestRepo};
use tempfile::TempDir;

use intermine_boot::core::pipeline::{self, BuildOutcome, Reporter};
use intermine_boot::error::BootError;
use intermine_boot::infra::git::CloneTick;

const MODULES: &[&str] = &["plugin", "intermine", "bio", "bio/sources", "bio/postprocess"];

/// Records every pipeline hook for assertions
#[derive(Default)]
struct RecordingReporter {
    ticks: Vec<CloneTick>,
    build_started: Option<(String, String, u64)>,
    steps: u64,
    finished: bool,
}

impl Reporter for RecordingReporter {
    fn clone_tick(&mut self, tick: CloneTick) {
        self.ticks.push(tick);
    }

    fn build_started(&mut self, repo: &str, branch: &str, total_steps: u64) {
        self.build_started = Some((repo.to_string(), branch.to_string(), total_steps));
    }

    fn build_step(&mut self) {
        self.steps += 1;
    }

    fn build_finished(&mut self) {
        self.finished = true;
    }
}

/// Build an origin repository with stub gradlews and version files
fn make_origin(log: &std::path::Path, failing_module: Option<&str>) -> TestRepo {
    let origin = TestRepo::new();
    for module in MODULES {
        let exit_code = i32::from(failing_module == Some(*module));
        origin.install_stub_gradlew(module, log, exit_code);
    }
    origin.create_file("intermine/build.gradle", "version = '4.1.3'\n");
    origin.create_file("bio/build.gradle", "version = \"4.1.0\"\n");
    origin.commit_all("main");
    origin
}

#[test]
fn test_successful_run_yields_both_versions() {
    if !git_available() {
        eprintln!("skipping: git not on PATH");
        return;
    }

    let log_dir = TempDir::new().unwrap();
    let log = log_dir.path().join("invocations.log");
    let origin = make_origin(&log, None);

    let mut reporter = RecordingReporter::default();
    let outcome = pipeline::run(origin.path().to_str().unwrap(), "main", &mut reporter).unwrap();

    assert_eq!(
        outcome,
        BuildOutcome {
            im_version: "4.1.3".to_string(),
            bio_version: "4.1.0".to_string(),
        }
    );
    assert!(!outcome.im_version.is_empty());
    assert!(!outcome.bio_version.is_empty());

    // Any clone progress samples stay within their phase maximum
    assert!(reporter.ticks.iter().all(|tick| tick.current <= tick.max));

    // The build loop reported 2 steps per module and then finished
    let (_, branch, total) = reporter.build_started.expect("build_started fired");
    assert_eq!(branch, "main");
    assert_eq!(total, 10);
    assert_eq!(reporter.steps, 10);
    assert!(reporter.finished);

    // All ten commands ran, in declared order
    let lines: Vec<String> = std::fs::read_to_string(&log)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    let expected: Vec<String> = MODULES
        .iter()
        .flat_map(|module| [format!("{module} clean"), format!("{module} install")])
        .collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_failing_module_aborts_run() {
    if !git_available() {
        eprintln!("skipping: git not on PATH");
        return;
    }

    let log_dir = TempDir::new().unwrap();
    let log = log_dir.path().join("invocations.log");
    let origin = make_origin(&log, Some("bio"));

    let mut reporter = RecordingReporter::default();
    let result = pipeline::run(origin.path().to_str().unwrap(), "main", &mut reporter);

    assert!(matches!(result, Err(BootError::Gradle(_))));
    assert_eq!(reporter.steps, 4);
    assert!(!reporter.finished);

    let lines = std::fs::read_to_string(&log).unwrap();
    assert!(!lines.contains("bio/sources"));
    assert!(!lines.contains("bio/postprocess"));
}

#[test]
fn test_missing_version_line_fails_and_names_file() {
    if !git_available() {
        eprintln!("skipping: git not on PATH");
        return;
    }

    let log_dir = TempDir::new().unwrap();
    let log = log_dir.path().join("invocations.log");

    let origin = TestRepo::new();
    for module in MODULES {
        origin.install_stub_gradlew(module, &log, 0);
    }
    origin.create_file("intermine/build.gradle", "version = '4.1.3'\n");
    // Bio build file drifted: no quoted version line
    origin.create_file("bio/build.gradle", "group = 'org.intermine'\n");
    origin.commit_all("main");

    let mut reporter = RecordingReporter::default();
    let result = pipeline::run(origin.path().to_str().unwrap(), "main", &mut reporter);

    match result {
        Err(error @ BootError::Version(_)) => {
            let message = error.to_string();
            assert!(message.contains("bio"));
            assert!(message.contains("build.gradle"));
        }
        other => panic!("Expected Version error, got: {other:?}"),
    }
}

#[test]
fn test_missing_branch_fails_without_building() {
    if !git_available() {
        eprintln!("skipping: git not on PATH");
        return;
    }

    let log_dir = TempDir::new().unwrap();
    let log = log_dir.path().join("invocations.log");
    let origin = make_origin(&log, None);

    let mut reporter = RecordingReporter::default();
    let result = pipeline::run(origin.path().to_str().unwrap(), "no-such-branch", &mut reporter);

    assert!(matches!(result, Err(BootError::Git(_))));
    assert!(reporter.build_started.is_none());
    assert!(!log.exists());
}
