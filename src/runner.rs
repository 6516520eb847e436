//! The main run loop: scan, execute, judge, report, one file at a time in
//! file set order. Strictly sequential; the accumulating [`RunReport`] is
//! the only mutable run state.

use std::path::PathBuf;

use crate::config::RunConfig;
use crate::errors::HarnessError;
use crate::exec::Execute;
use crate::report::Reporter;
use crate::scan;
use crate::verdict::{self, Verdict};

/// Aggregate result of a full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub total: usize,
    pub failures: usize,
}

impl RunReport {
    fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        if !verdict.is_pass() {
            self.failures += 1;
        }
    }
}

/// Runs every file in the set and prints the tally.
///
/// Per-test failures are recorded and the run continues; a fatal error
/// (unreadable test file, interpreter that cannot be spawned) aborts
/// immediately, before the tally line. Verdicts already reported stand.
pub fn run(
    config: &RunConfig,
    files: &[PathBuf],
    executor: &dyn Execute,
    reporter: &mut Reporter,
) -> Result<RunReport, HarnessError> {
    let binary = config.interpreter_path();
    let mut report = RunReport::default();

    for path in files {
        let case = scan::scan_file(path)?;
        reporter.running(path);
        let result = executor.execute(&binary, path)?;
        let verdict = verdict::judge(&case.expectation, &result);
        reporter.verdict(path, &verdict, &result);
        report.record(&verdict);
    }

    reporter.tally(&report);
    Ok(report)
}
