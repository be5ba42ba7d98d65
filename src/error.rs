use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to compile rewrite pattern. Original error: {0}")]
    PatternError(#[from] regex::Error),

    /// The candidate file could not be read as UTF-8 text.
    #[error("Cannot read '{}'. Original error: {source}", path.display())]
    ReadError { path: PathBuf, source: std::io::Error },

    /// The rewritten content could not be persisted.
    #[error("Cannot write '{}'. Original error: {source}", path.display())]
    WriteError { path: PathBuf, source: std::io::Error },

    #[error("Invalid settings: {0}.")]
    InvalidSettings(String),
}

/// Convenience type alias for Results with this crate's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
