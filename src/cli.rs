//! Command-line entry point and orchestration of the run pipeline.

use std::path::PathBuf;

use clap::Parser;

use crate::audit;
use crate::config::{InterpreterChoice, RunConfig, KNOWN_BAD_INDEX, STANDARD_INDEX};
use crate::errors::{self, HarnessError};
use crate::exec::ProcessExecutor;
use crate::index;
use crate::report::{self, Reporter, EXIT_FATAL, EXIT_SUCCESS};
use crate::runner;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "ember-harness",
    version,
    about = "Golden-output regression harness for the Ember interpreter."
)]
pub struct HarnessArgs {
    /// Test files to run, after any index-derived files.
    pub files: Vec<PathBuf>,

    /// Index files listing test paths, one per line (# starts a comment).
    #[arg(short, long = "index", value_name = "FILE")]
    pub indices: Vec<PathBuf>,

    /// Load the standard regression index (sample/regression.txt).
    #[arg(short, long)]
    pub all: bool,

    /// Also load the known-bad index (sample/known-bad.txt).
    #[arg(short = 'b', long = "known-bad")]
    pub known_bad: bool,

    /// Project root against which relative paths resolve.
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Use an ember interpreter from PATH instead of the project-local
    /// build/ember.
    #[arg(short, long)]
    pub system: bool,

    /// Explicit interpreter binary to spawn.
    #[arg(long, value_name = "PATH", conflicts_with = "system")]
    pub binary: Option<PathBuf>,

    /// Print captured output for passing tests as well.
    #[arg(short, long)]
    pub verbose: bool,

    /// List sample files not referenced by any loaded index, then exit.
    /// Runs nothing.
    #[arg(long)]
    pub audit: bool,
}

/// Parses arguments, runs the harness, and returns the process exit code.
pub fn run() -> i32 {
    let args = HarnessArgs::parse();
    match try_run(args) {
        Ok(code) => code,
        Err(error) => {
            errors::print_fatal(error);
            EXIT_FATAL
        }
    }
}

fn try_run(args: HarnessArgs) -> Result<i32, HarnessError> {
    let interpreter = match args.binary {
        Some(path) => InterpreterChoice::Explicit(path),
        None if args.system => InterpreterChoice::System,
        None => InterpreterChoice::ProjectLocal,
    };
    let config = RunConfig::new(args.root, interpreter, args.verbose)?;

    let mut indices = Vec::new();
    if args.all {
        indices.push(PathBuf::from(STANDARD_INDEX));
    }
    if args.known_bad {
        indices.push(PathBuf::from(KNOWN_BAD_INDEX));
    }
    indices.extend(args.indices);

    let files = index::load_file_set(&config, &indices, &args.files)?;
    let mut reporter = Reporter::new(config.verbose);

    if args.audit {
        let findings = audit::untracked_samples(&config, &files)?;
        reporter.audit_findings(&findings);
        return Ok(EXIT_SUCCESS);
    }

    let report = runner::run(&config, &files, &ProcessExecutor, &mut reporter)?;
    Ok(report::exit_code(&report))
}
