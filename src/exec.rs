//! Interpreter invocation.
//!
//! Spawning the interpreter is the one effectful boundary in the pipeline,
//! so it sits behind the [`Execute`] trait: the runner, verdict engine, and
//! reporter are all exercised in tests with scripted results instead of
//! real child processes.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::HarnessError;

/// Captured outcome of one interpreter invocation. Never mutated after
/// capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Process exit code; `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    /// Any status other than the canonical success code counts as failure;
    /// a crash and a deliberate nonzero exit are not distinguished.
    pub fn saw_failure(&self) -> bool {
        self.exit_code != 0
    }
}

/// Runs the interpreter on one test file.
pub trait Execute {
    fn execute(&self, binary: &Path, test_file: &Path) -> Result<ExecutionResult, HarnessError>;
}

/// The real executor: `<binary> <test-file>`, no stdin, both streams
/// captured in full. Blocks until the child terminates; a hung interpreter
/// hangs the harness (accepted limitation, there is no timeout).
#[derive(Debug, Default)]
pub struct ProcessExecutor;

impl Execute for ProcessExecutor {
    fn execute(&self, binary: &Path, test_file: &Path) -> Result<ExecutionResult, HarnessError> {
        let output = Command::new(binary)
            .arg(test_file)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HarnessError::InterpreterNotFound {
                binary: binary.to_path_buf(),
                source,
            })?;

        Ok(ExecutionResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
