use std::fmt::Display;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::ExclusionSet;

/// A directory the scanner could not list. Its subtree contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub reason: String,
}

impl Display for SkippedDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.reason)
    }
}

/// Result of one scan: the candidates found plus every directory that was
/// skipped along the way. Reporting skipped directories is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub candidates: Vec<PathBuf>,
    pub skipped: Vec<SkippedDir>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Recursively collects every file named `target_name` below `root`.
///
/// Entries are visited depth-first in pre-order, siblings in the order the
/// directory listing reports them. Directories whose own name is in `excluded`
/// are pruned at any depth; the root itself is never tested. Symlinks and
/// special files are neither followed nor collected.
///
/// A directory that cannot be listed does not abort the scan: it is recorded
/// in [`ScanReport::skipped`] and its siblings are still visited.
pub fn scan<P: AsRef<Path>>(
    root: P,
    excluded: &ExclusionSet,
    target_name: &str,
) -> ScanReport {
    let root = root.as_ref();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, excluded));
    collect(root, walker, target_name)
}

/// Folds walk results into a report. Every walk error becomes a
/// [`SkippedDir`]; the walk itself decides what comes after it.
fn collect<I>(root: &Path, walker: I, target_name: &str) -> ScanReport
where
    I: IntoIterator<Item = walkdir::Result<DirEntry>>,
{
    let mut report = ScanReport::default();

    for dir_entry in walker {
        let entry = match dir_entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                log::debug!("Cannot list {}: {err}", path.display());
                report.skipped.push(SkippedDir { path, reason: describe(&err) });
                continue;
            }
        };

        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                report.skipped.push(SkippedDir {
                    path: root.to_path_buf(),
                    reason: "not a directory".to_string(),
                });
            }
            continue;
        }

        if entry.file_type().is_file() && entry.file_name() == target_name {
            log::trace!("Found candidate: {}", entry.path().display());
            report.candidates.push(entry.into_path());
        }
    }

    report
}

fn is_excluded_dir(entry: &DirEntry, excluded: &ExclusionSet) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let pruned = excluded.contains(entry.file_name());
    if pruned {
        log::debug!("Excluding directory: {}", entry.path().display());
    }
    pruned
}

fn describe(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}
