//! Repository hygiene audit.
//!
//! Lists sample files that no loaded index references, so new samples that
//! were never wired into the regression run get noticed. Pure: no
//! interpreter is spawned and nothing is judged.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{RunConfig, INDEX_SUFFIX};
use crate::errors::HarnessError;

/// Collapses `.` components and repeated separators so that spelling
/// variants of the same index entry (`./sample/a.em`, `sample//a.em`)
/// compare equal to the walked path.
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Files under the sample directory that are neither indices (by suffix)
/// nor members of the resolved file set. Sorted for stable output.
pub fn untracked_samples(
    config: &RunConfig,
    file_set: &[PathBuf],
) -> Result<Vec<PathBuf>, HarnessError> {
    let sample_dir = config.sample_dir();
    let covered: HashSet<PathBuf> = file_set.iter().map(|p| normalize(p)).collect();

    let mut findings = Vec::new();
    for entry in WalkDir::new(&sample_dir) {
        let entry = entry.map_err(|source| HarnessError::SampleDirUnreadable {
            path: sample_dir.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path().to_path_buf();
        if path.to_string_lossy().ends_with(INDEX_SUFFIX) {
            continue;
        }
        if covered.contains(&normalize(&path)) {
            continue;
        }
        findings.push(path);
    }
    findings.sort();
    Ok(findings)
}
