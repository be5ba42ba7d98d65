use crate::{
    config::Settings,
    error::Result,
    rewrite::{RewriteOutcome, Rewriter},
    scanner::{scan, SkippedDir},
};
use std::path::PathBuf;

/// Everything one run found and changed.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub candidates: Vec<PathBuf>,
    pub updated: Vec<PathBuf>,
    pub skipped: Vec<SkippedDir>,
}

/// Scans the tree, then rewrites each candidate in turn.
pub struct Runner {
    settings: Settings,
}

impl Runner {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Executes the complete scan-and-rewrite workflow
    pub fn run(self) -> Result<RunSummary> {
        let settings = &self.settings;
        let rewriter = Rewriter::standard(settings.extension.as_str())?
            .dry_run(settings.dry_run);

        println!("Scanning \"{}\"", settings.root.display());
        if !settings.excluded.is_empty() {
            println!("Excluding directories by name: {}", settings.excluded);
        }

        let report = scan(&settings.root, &settings.excluded, &settings.target_file_name);
        for skipped in &report.skipped {
            log::warn!("Skipping non-existent or unreadable directory: {skipped}");
        }

        println!("Found {} files:", settings.target_file_name);
        for candidate in &report.candidates {
            println!("{}", candidate.display());
        }

        let mut updated = Vec::new();
        for candidate in &report.candidates {
            if rewriter.rewrite_file(candidate)? == RewriteOutcome::Updated {
                if settings.dry_run {
                    println!("Would update {}", candidate.display());
                } else {
                    println!("Updated {}", candidate.display());
                }
                updated.push(candidate.clone());
            }
        }

        println!("Done processing {} files.", settings.target_file_name);
        log::info!(
            "{} candidate(s), {} updated, {} directory(ies) skipped",
            report.candidates.len(),
            updated.len(),
            report.skipped.len()
        );

        Ok(RunSummary { candidates: report.candidates, updated, skipped: report.skipped })
    }
}

/// Main entry point for CLI execution
pub fn run(settings: Settings) -> Result<RunSummary> {
    let runner = Runner::new(settings);
    runner.run()
}
