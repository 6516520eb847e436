//! Annotation scanning: turning a sample file's leading comments into a
//! structured expectation.
//!
//! The annotation format is embedded in ordinary `#` comments of the file
//! under test:
//!
//! `# Expect failure` declares that the run must exit with a nonzero
//! status. `# Expect:` declares that the run must exit zero and print
//! exactly the lines captured from the comments that follow:
//!
//! ```text
//! # Expect:
//! # hello
//! # world
//! ```
//!
//! "Expect" and "failure" are matched case-insensitively. A colon starts an
//! output capture run: each following comment line contributes its text
//! (one space after the marker stripped, the rest verbatim) until the first
//! non-comment line. A file without any directive carries the default
//! expectation: exit successfully, print nothing.
//!
//! The scan is a pure fold over lines with a two-state machine; every
//! directive line fully overwrites both the failure flag and the collecting
//! state, while the output buffer only ever appends. A file with several
//! directive blocks therefore replays literally: the last directive's
//! failure flag wins and all captured runs concatenate.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::HarnessError;

static DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*#\s*expect(?P<failure>\s+failure)?(?P<colon>\s*:)?\s*$").unwrap()
});

static OUTPUT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*# ?(?P<rest>.*)$").unwrap());

/// What a sample file declares about its own execution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expectation {
    /// The interpreter must exit with a nonzero status.
    pub expect_failure: bool,
    /// Golden stdout, trailing whitespace already stripped.
    pub expected_output: String,
}

/// One file paired with its scanned expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub path: PathBuf,
    pub expectation: Expectation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    Collecting,
}

/// Scans a file's full text for annotation directives.
///
/// Never fails: unannotated files simply get the default expectation.
pub fn scan_expectation(source: &str) -> Expectation {
    let mut state = ScanState::Idle;
    let mut expect_failure = false;
    let mut buffer = String::new();

    for line in source.lines() {
        if let Some(caps) = DIRECTIVE.captures(line) {
            // Each directive overwrites the flag and the collecting state;
            // "failure" and the colon count only when present on this line.
            expect_failure = caps.name("failure").is_some();
            state = if caps.name("colon").is_some() {
                ScanState::Collecting
            } else {
                ScanState::Idle
            };
            continue;
        }

        if state == ScanState::Collecting {
            if let Some(caps) = OUTPUT_LINE.captures(line) {
                buffer.push_str(&caps["rest"]);
                buffer.push('\n');
                continue;
            }
        }

        // Any other line ends an active capture run; only a new colon
        // directive restarts one.
        state = ScanState::Idle;
    }

    let trimmed = buffer.trim_end().len();
    buffer.truncate(trimmed);
    Expectation {
        expect_failure,
        expected_output: buffer,
    }
}

/// Reads and scans one test file.
pub fn scan_file(path: &Path) -> Result<TestCase, HarnessError> {
    let source = fs::read_to_string(path).map_err(|source| HarnessError::TestFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TestCase {
        path: path.to_path_buf(),
        expectation: scan_expectation(&source),
    })
}
