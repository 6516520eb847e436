//! Ember Harness Error Handling
//!
//! One error type for every fatal, startup-class condition. Per-test
//! failures are not errors; they are [`crate::verdict::Verdict`] values and
//! flow through the reporter instead.
//!
//! Errors carry miette diagnostic codes in the `harness::<area>::<kind>`
//! style so they can be matched in tests and grepped in logs.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A fatal harness error. Any of these aborts the run before the tally line
/// is printed; verdicts already reported stand.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("project root '{}' is not accessible", path.display())]
    #[diagnostic(code(harness::config::root_unreadable))]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open index file '{}'", path.display())]
    #[diagnostic(code(harness::config::index_unreadable))]
    IndexUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no test files selected")]
    #[diagnostic(
        code(harness::config::empty_file_set),
        help("name test files directly, load an index with --index, or pass --all for the standard regression index")
    )]
    EmptyFileSet,

    #[error("test file '{}' does not exist", path.display())]
    #[diagnostic(code(harness::config::missing_test_file))]
    MissingTestFile { path: PathBuf },

    #[error("cannot read test file '{}'", path.display())]
    #[diagnostic(code(harness::config::test_file_unreadable))]
    TestFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot walk sample directory '{}'", path.display())]
    #[diagnostic(code(harness::audit::sample_dir_unreadable))]
    SampleDirUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot launch interpreter '{}'", binary.display())]
    #[diagnostic(
        code(harness::exec::interpreter_not_found),
        help("build the project-local interpreter first, pass --system to use one on PATH, or point --binary at an executable")
    )]
    InterpreterNotFound {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders a fatal error with full miette diagnostics on stderr.
pub fn print_fatal(error: HarnessError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
