/// Handles argument parsing and the run loop.
pub mod cli;

/// Explicit run settings and the directory exclusion set.
pub mod config;

/// Shared defaults.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Specifier rewrite rules and the file rewriter.
pub mod rewrite;

/// Recursive discovery of entry files.
pub mod scanner;
