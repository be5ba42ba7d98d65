//! Constants used throughout add-js-import

/// Name of the module entry files that get rewritten
pub const DEFAULT_TARGET_FILE_NAME: &str = "index.ts";

/// Extension appended to relative specifiers
pub const DEFAULT_EXTENSION: &str = ".js";

/// Directory scanned when no target is given, relative to the working directory
pub const DEFAULT_ROOT_DIR: &str = "packages";

/// Every relative specifier handled by the rewrite rules starts with this prefix
pub const RELATIVE_PREFIX: &str = "./";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
