//! Run configuration and path resolution.
//!
//! A [`RunConfig`] is built once at startup from the CLI arguments and then
//! threaded, immutably, through every component. All relative paths in the
//! system (index entries, the sample directory, the project-local
//! interpreter) resolve against its project root.

use std::path::{Path, PathBuf};

use crate::errors::HarnessError;

/// Directory of annotated sample files, relative to the project root.
pub const SAMPLE_DIR: &str = "sample";

/// The standard regression index loaded by `--all`.
pub const STANDARD_INDEX: &str = "sample/regression.txt";

/// The known-bad index loaded by `--known-bad`.
pub const KNOWN_BAD_INDEX: &str = "sample/known-bad.txt";

/// Suffix that marks a file in the sample directory as an index rather than
/// a test. The hygiene audit skips these.
pub const INDEX_SUFFIX: &str = ".txt";

/// Project-local interpreter, relative to the project root.
pub const LOCAL_BINARY: &str = "build/ember";

/// Interpreter name looked up on PATH in `--system` mode.
pub const SYSTEM_BINARY: &str = "ember";

/// Which interpreter binary the executor should spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterChoice {
    /// The default: `build/ember` under the project root.
    ProjectLocal,
    /// `ember` resolved from PATH by the OS.
    System,
    /// An explicit path given on the command line.
    Explicit(PathBuf),
}

/// Immutable configuration for one harness run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub interpreter: InterpreterChoice,
    pub verbose: bool,
}

impl RunConfig {
    /// Builds a configuration with a normalized, absolute project root.
    pub fn new(
        root: PathBuf,
        interpreter: InterpreterChoice,
        verbose: bool,
    ) -> Result<Self, HarnessError> {
        let root = root
            .canonicalize()
            .map_err(|source| HarnessError::RootUnreadable { path: root, source })?;
        Ok(Self {
            root,
            interpreter,
            verbose,
        })
    }

    /// Resolves a path against the project root. Absolute paths pass
    /// through untouched.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// The interpreter binary the executor will spawn. In `System` mode the
    /// bare name is returned and PATH lookup is left to the OS.
    pub fn interpreter_path(&self) -> PathBuf {
        match &self.interpreter {
            InterpreterChoice::ProjectLocal => self.resolve(LOCAL_BINARY),
            InterpreterChoice::System => PathBuf::from(SYSTEM_BINARY),
            InterpreterChoice::Explicit(path) => path.clone(),
        }
    }

    pub fn sample_dir(&self) -> PathBuf {
        self.resolve(SAMPLE_DIR)
    }

    pub fn standard_index(&self) -> PathBuf {
        self.resolve(STANDARD_INDEX)
    }

    pub fn known_bad_index(&self) -> PathBuf {
        self.resolve(KNOWN_BAD_INDEX)
    }
}
