use crate::config::{ExclusionSet, Settings};
use crate::constants::{
    verbosity, DEFAULT_EXTENSION, DEFAULT_ROOT_DIR, DEFAULT_TARGET_FILE_NAME,
};
use crate::error::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// CLI arguments for add-js-import.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan. Defaults to `packages` in the working directory.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Directory names to skip at any depth.
    #[arg(short = 'e', long = "exclude-dirs", value_name = "NAME", num_args = 1..)]
    pub exclude_dirs: Vec<String>,

    /// Name of the entry files to rewrite.
    #[arg(long = "file-name", default_value = DEFAULT_TARGET_FILE_NAME)]
    pub file_name: String,

    /// Extension appended to relative specifiers.
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Report files that would change without writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolves the scan root against `cwd`.
    pub fn resolve_root(&self, cwd: &Path) -> PathBuf {
        match &self.target_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.join(DEFAULT_ROOT_DIR),
        }
    }

    /// Builds the engine settings for a run started in `cwd`.
    pub fn into_settings(self, cwd: &Path) -> Result<Settings> {
        let settings = Settings::new(self.resolve_root(cwd))
            .with_excluded(ExclusionSet::new(self.exclude_dirs))
            .with_target_file_name(self.file_name)
            .with_extension(self.extension)
            .with_dry_run(self.dry_run);
        settings.validate()?;
        Ok(settings)
    }
}

/// Map `-v` counts to the appropriate log level. Warnings are always shown
/// because skipped directories are reported through them.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
