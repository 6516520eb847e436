//! User-facing run output.
//!
//! All terminal writing lives here: the per-file running indicator, tagged
//! failure detail with a colored line diff on output mismatches, verbose
//! success output, the audit listing, and the final tally. Centralizing it
//! keeps the rest of the pipeline pure and the output format consistent.

use std::io::Write;
use std::path::Path;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::exec::ExecutionResult;
use crate::runner::RunReport;
use crate::verdict::Verdict;

/// Process exit code when every test passed (or the audit ran).
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code when at least one test failed.
pub const EXIT_TEST_FAILURES: i32 = 1;
/// Process exit code for fatal startup-class errors.
pub const EXIT_FATAL: i32 = 2;

/// Maps the aggregate run result to the process exit code.
pub fn exit_code(report: &RunReport) -> i32 {
    if report.failures == 0 {
        EXIT_SUCCESS
    } else {
        EXIT_TEST_FAILURES
    }
}

/// Prints run progress and results to stdout.
pub struct Reporter {
    out: StandardStream,
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            out: StandardStream::stdout(choice),
            verbose,
        }
    }

    /// The running indicator, printed before the interpreter is spawned.
    pub fn running(&mut self, path: &Path) {
        let _ = writeln!(self.out, "Running {}", path.display());
    }

    /// Reports one verdict. Passing files are silent unless verbose mode
    /// is on; failures always print their detail.
    pub fn verdict(&mut self, path: &Path, verdict: &Verdict, result: &ExecutionResult) {
        match verdict {
            Verdict::Pass => {
                if self.verbose {
                    self.tagged(
                        "PASS",
                        Color::Green,
                        &format!(": {}", path.display()),
                    );
                    self.block("stdout", &result.stdout);
                    self.block("stderr", &result.stderr);
                }
            }
            Verdict::ProcessStatusMismatch {
                expected_failure,
                saw_failure,
            } => {
                self.tagged("FAIL", Color::Red, &format!(": {}", path.display()));
                let detail = match (*expected_failure, *saw_failure) {
                    (true, false) => {
                        "expected the interpreter to fail, but it exited successfully".to_string()
                    }
                    _ => format!(
                        "expected a clean exit, but the interpreter reported failure (exit code {})",
                        result.exit_code
                    ),
                };
                let _ = writeln!(self.out, "  {}", detail);
                self.block("stderr", &result.stderr);
            }
            Verdict::OutputMismatch { expected, actual } => {
                self.tagged("FAIL", Color::Red, &format!(": {}", path.display()));
                let _ = writeln!(self.out, "  output did not match the annotation");
                self.block("expected", expected);
                self.block("actual", actual);
                self.diff(expected, actual);
                self.block("stderr", &result.stderr);
            }
        }
    }

    /// The aggregate line, printed once after the last file.
    pub fn tally(&mut self, report: &RunReport) {
        let color = if report.failures == 0 {
            Color::Green
        } else {
            Color::Red
        };
        let _ = self.out.set_color(ColorSpec::new().set_fg(Some(color)));
        let _ = writeln!(
            self.out,
            "{} tests failed of {}",
            report.failures, report.total
        );
        let _ = self.out.reset();
    }

    /// Lists sample files not covered by any index. Silent when empty.
    pub fn audit_findings(&mut self, findings: &[std::path::PathBuf]) {
        for path in findings {
            let _ = writeln!(self.out, "{}", path.display());
        }
    }

    fn tagged(&mut self, tag: &str, color: Color, rest: &str) {
        let _ = self
            .out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.out, "{}", tag);
        let _ = self.out.reset();
        let _ = writeln!(self.out, "{}", rest);
    }

    /// An indented, labelled stream block. Empty streams print nothing.
    fn block(&mut self, label: &str, text: &str) {
        if text.trim_end().is_empty() {
            return;
        }
        let _ = self
            .out
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = writeln!(self.out, "  {}:", label);
        let _ = self.out.reset();
        for line in text.trim_end().lines() {
            let _ = writeln!(self.out, "    {}", line);
        }
    }

    fn diff(&mut self, expected: &str, actual: &str) {
        let changeset = Changeset::new(expected, actual, "\n");
        let _ = writeln!(self.out, "  diff:");
        for diff in &changeset.diffs {
            let (marker, color, text) = diff_style(diff);
            match color {
                Some(color) => {
                    let _ = self.out.set_color(ColorSpec::new().set_fg(Some(color)));
                    for line in text.lines() {
                        let _ = writeln!(self.out, "   {}{}", marker, line);
                    }
                    let _ = self.out.reset();
                }
                None => {
                    for line in text.lines() {
                        let _ = writeln!(self.out, "    {}", line);
                    }
                }
            }
        }
    }
}

/// Marker and color for one diff hunk: additions green, removals red.
fn diff_style(diff: &Difference) -> (char, Option<Color>, &str) {
    match diff {
        Difference::Same(text) => (' ', None, text.as_str()),
        Difference::Rem(text) => ('-', Some(Color::Red), text.as_str()),
        Difference::Add(text) => ('+', Some(Color::Green), text.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removals_are_red_and_additions_green() {
        let changeset = Changeset::new("hello", "goodbye", "\n");
        for diff in &changeset.diffs {
            let (marker, color, _) = diff_style(diff);
            match diff {
                Difference::Rem(_) => {
                    assert_eq!((marker, color), ('-', Some(Color::Red)));
                }
                Difference::Add(_) => {
                    assert_eq!((marker, color), ('+', Some(Color::Green)));
                }
                Difference::Same(_) => {
                    assert_eq!((marker, color), (' ', None));
                }
            }
        }
    }
}
