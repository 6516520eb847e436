// Library-level pipeline tests: index merging and the scan → execute →
// judge loop, driven by a scripted executor instead of real processes.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ember_harness::config::{InterpreterChoice, RunConfig};
use ember_harness::exec::{Execute, ExecutionResult};
use ember_harness::report::{self, Reporter};
use ember_harness::{index, runner, HarnessError};

fn scratch(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ember-pipeline-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("sample")).unwrap();
    dir
}

fn config_for(dir: &Path) -> RunConfig {
    RunConfig::new(dir.to_path_buf(), InterpreterChoice::ProjectLocal, false).unwrap()
}

/// Returns canned results keyed by test file name.
struct ScriptedExecutor {
    results: HashMap<String, ExecutionResult>,
}

impl ScriptedExecutor {
    fn new(results: Vec<(&str, ExecutionResult)>) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|(name, result)| (name.to_string(), result))
                .collect(),
        }
    }
}

impl Execute for ScriptedExecutor {
    fn execute(&self, _binary: &Path, test_file: &Path) -> Result<ExecutionResult, HarnessError> {
        let name = test_file.file_name().unwrap().to_string_lossy().to_string();
        Ok(self.results[&name].clone())
    }
}

fn ran(exit_code: i32, stdout: &str) -> ExecutionResult {
    ExecutionResult {
        exit_code,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

#[test]
fn index_merge_preserves_order_and_duplicates() {
    let dir = scratch("merge");
    for name in ["a.em", "b.em", "c.em", "f.em"] {
        fs::write(dir.join("sample").join(name), "").unwrap();
    }
    fs::write(dir.join("first.txt"), "sample/a.em\nsample/b.em\n").unwrap();
    fs::write(dir.join("second.txt"), "sample/b.em # again\nsample/c.em\n").unwrap();

    let config = config_for(&dir);
    let set = index::load_file_set(
        &config,
        &[PathBuf::from("first.txt"), PathBuf::from("second.txt")],
        &[PathBuf::from("sample/f.em")],
    )
    .unwrap();

    let expected: Vec<PathBuf> = ["sample/a.em", "sample/b.em", "sample/b.em", "sample/c.em", "sample/f.em"]
        .iter()
        .map(|p| config.resolve(p))
        .collect();
    assert_eq!(set, expected);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_index_is_fatal() {
    let dir = scratch("badindex");
    let config = config_for(&dir);
    let err = index::load_file_set(&config, &[PathBuf::from("nope.txt")], &[]).unwrap_err();
    assert!(matches!(err, HarnessError::IndexUnreadable { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_selection_is_fatal() {
    let dir = scratch("empty");
    let config = config_for(&dir);
    let err = index::load_file_set(&config, &[], &[]).unwrap_err();
    assert!(matches!(err, HarnessError::EmptyFileSet));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_listed_file_is_fatal() {
    let dir = scratch("missing");
    fs::write(dir.join("idx.txt"), "sample/ghost.em\n").unwrap();
    let config = config_for(&dir);
    let err = index::load_file_set(&config, &[PathBuf::from("idx.txt")], &[]).unwrap_err();
    assert!(matches!(err, HarnessError::MissingTestFile { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn full_run_tallies_mixed_verdicts() {
    let dir = scratch("mixed");
    fs::write(dir.join("sample/pass.em"), "# Expect:\n# hello\n").unwrap();
    fs::write(dir.join("sample/status.em"), "# Expect:\n# hello\n").unwrap();
    fs::write(dir.join("sample/output.em"), "# Expect:\n# hello\n").unwrap();
    fs::write(dir.join("sample/crashes.em"), "# Expect failure\n").unwrap();

    let config = config_for(&dir);
    let files: Vec<PathBuf> = ["sample/pass.em", "sample/status.em", "sample/output.em", "sample/crashes.em"]
        .iter()
        .map(|p| config.resolve(p))
        .collect();

    let executor = ScriptedExecutor::new(vec![
        ("pass.em", ran(0, "hello\n")),
        ("status.em", ran(1, "hello\n")),
        ("output.em", ran(0, "goodbye\n")),
        ("crashes.em", ran(1, "")),
    ]);

    let mut reporter = Reporter::new(false);
    let report = runner::run(&config, &files, &executor, &mut reporter).unwrap();
    assert_eq!(report.total, 4);
    assert_eq!(report.failures, 2);
    assert_eq!(report::exit_code(&report), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rerun_is_idempotent() {
    let dir = scratch("idempotent");
    fs::write(dir.join("sample/one.em"), "# Expect:\n# 1\n").unwrap();

    let config = config_for(&dir);
    let files = vec![config.resolve("sample/one.em")];
    let executor = ScriptedExecutor::new(vec![("one.em", ran(0, "1\n"))]);

    let mut reporter = Reporter::new(false);
    let first = runner::run(&config, &files, &executor, &mut reporter).unwrap();
    let second = runner::run(&config, &files, &executor, &mut reporter).unwrap();
    assert_eq!(first, second);
    assert_eq!(report::exit_code(&first), 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn relisted_file_runs_twice() {
    let dir = scratch("relist");
    fs::write(dir.join("sample/twice.em"), "").unwrap();
    fs::write(dir.join("idx.txt"), "sample/twice.em\nsample/twice.em\n").unwrap();

    let config = config_for(&dir);
    let files = index::load_file_set(&config, &[PathBuf::from("idx.txt")], &[]).unwrap();
    assert_eq!(files.len(), 2);

    let executor = ScriptedExecutor::new(vec![("twice.em", ran(0, ""))]);
    let mut reporter = Reporter::new(false);
    let report = runner::run(&config, &files, &executor, &mut reporter).unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.failures, 0);

    let _ = fs::remove_dir_all(&dir);
}
