//! Index loading and test file set construction.
//!
//! An index is a plain text manifest: one test path per line, relative to
//! the project root, with `#` starting a comment that runs to end of line
//! (`\#` escapes a literal `#`). The file set preserves the order in which
//! indices and explicit files were given and is deliberately not
//! deduplicated: listing a file twice runs it twice.

use std::fs;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::errors::HarnessError;

/// Strips the comment and surrounding whitespace from one index line.
/// Returns `None` for blank and comment-only lines.
fn parse_entry(line: &str) -> Option<String> {
    let mut kept = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('#') => kept.push('#'),
                Some(other) => {
                    kept.push('\\');
                    kept.push(other);
                }
                None => kept.push('\\'),
            },
            '#' => break,
            _ => kept.push(c),
        }
    }
    let trimmed = kept.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses the body of an index file into its entries, in order.
pub fn parse_index(text: &str) -> Vec<String> {
    text.lines().filter_map(parse_entry).collect()
}

/// Builds the ordered test file set from zero or more index files plus zero
/// or more explicitly named files.
///
/// Index entries come first, in the order the indices were given; explicit
/// files follow. Every member is resolved against the project root and must
/// exist — a missing member is a startup error, not a per-test verdict.
pub fn load_file_set(
    config: &RunConfig,
    indices: &[PathBuf],
    explicit: &[PathBuf],
) -> Result<Vec<PathBuf>, HarnessError> {
    let mut set = Vec::new();

    for index in indices {
        let index = config.resolve(index);
        let text = fs::read_to_string(&index).map_err(|source| HarnessError::IndexUnreadable {
            path: index.clone(),
            source,
        })?;
        for entry in parse_index(&text) {
            set.push(config.resolve(entry));
        }
    }

    for file in explicit {
        set.push(config.resolve(file));
    }

    if set.is_empty() {
        return Err(HarnessError::EmptyFileSet);
    }

    for path in &set {
        if !path.is_file() {
            return Err(HarnessError::MissingTestFile { path: path.clone() });
        }
    }

    Ok(set)
}
