#![allow(dead_code)]

use add_js_import::cli::{run, RunSummary};
use add_js_import::config::{ExclusionSet, Settings};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Creates every `(relative path, content)` pair below `root`.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Prints a diff of files and their contents between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |dir: &Path| -> std::collections::BTreeSet<_> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    for file in files1.difference(&files2) {
        println!("  + {file:?}");
    }
    for file in files2.difference(&files1) {
        println!("  - {file:?}");
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let expected = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if actual != expected {
            println!("\n  File: {file:?}");
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Builds `input` in a scratch directory, runs the tool over it with the
/// given exclusions, and asserts the result matches `expected`.
pub fn run_and_assert(
    input: &[(&str, &str)],
    expected: &[(&str, &str)],
    excluded: &[&str],
) -> RunSummary {
    let actual_dir = tempfile::tempdir().unwrap();
    let expected_dir = tempfile::tempdir().unwrap();
    write_tree(actual_dir.path(), input);
    write_tree(expected_dir.path(), expected);

    let settings = Settings::new(actual_dir.path())
        .with_excluded(ExclusionSet::new(excluded.iter().copied()));
    let summary = run(settings).unwrap();
    debug!("Run summary: {summary:?}");

    let different = dir_diff::is_different(actual_dir.path(), expected_dir.path()).unwrap();
    if different {
        print_dir_diff(actual_dir.path(), expected_dir.path());
        panic!("Directories differ. See above for details.");
    }
    summary
}
