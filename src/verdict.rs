//! The verdict engine: judging a real execution against an expectation.
//!
//! Exit-status class is checked first and alone decides the verdict when it
//! mismatches; output is only compared once the status class agrees, and
//! always with trailing whitespace stripped from both sides. Stderr never
//! participates in the decision.

use crate::exec::ExecutionResult;
use crate::scan::Expectation;

/// Exactly one verdict per test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// The exit-status class (success vs. failure) disagreed with the
    /// annotation. Output is deliberately not consulted in this case.
    ProcessStatusMismatch {
        expected_failure: bool,
        saw_failure: bool,
    },
    /// Status class agreed but stdout differed from the golden output.
    OutputMismatch { expected: String, actual: String },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Compares one execution against one expectation.
pub fn judge(expectation: &Expectation, result: &ExecutionResult) -> Verdict {
    let saw_failure = result.saw_failure();
    if saw_failure != expectation.expect_failure {
        return Verdict::ProcessStatusMismatch {
            expected_failure: expectation.expect_failure,
            saw_failure,
        };
    }

    // An expected failure that did fail passes outright; exit-status class
    // alone governs, whatever the process printed.
    if expectation.expect_failure {
        return Verdict::Pass;
    }

    let expected = expectation.expected_output.trim_end();
    let actual = result.stdout.trim_end();
    if expected != actual {
        return Verdict::OutputMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        };
    }

    Verdict::Pass
}
