use indexmap::IndexSet;
use std::ffi::OsStr;
use std::fmt::Display;
use std::path::PathBuf;

use crate::constants::{DEFAULT_EXTENSION, DEFAULT_TARGET_FILE_NAME};
use crate::error::{Error, Result};

/// Directory names that prune traversal wherever they appear in the tree.
///
/// Only the entry's own name is compared, never its full path, so a
/// `node_modules` three levels down is excluded exactly like one at the root.
/// Names keep the order they were given in; repeats collapse to the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: IndexSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// Returns true when `name` is one of the excluded directory names.
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.names.contains(name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Display for ExclusionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// Everything the engine needs for one run. Built by the caller; the core
/// never looks at process arguments or the working directory itself.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub excluded: ExclusionSet,
    pub target_file_name: String,
    pub extension: String,
    pub dry_run: bool,
}

impl Settings {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            excluded: ExclusionSet::default(),
            target_file_name: DEFAULT_TARGET_FILE_NAME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }

    pub fn with_excluded(mut self, excluded: ExclusionSet) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn with_target_file_name<S: Into<String>>(mut self, name: S) -> Self {
        self.target_file_name = name.into();
        self
    }

    /// Sets the appended extension. A missing leading dot is added.
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        let extension = extension.into();
        self.extension = if extension.is_empty() || extension.starts_with('.') {
            extension
        } else {
            format!(".{extension}")
        };
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rejects values that would make the scan or the rewrite meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.target_file_name.is_empty() {
            return Err(Error::InvalidSettings("target file name is empty".into()));
        }
        if self.target_file_name.contains(['/', '\\']) {
            return Err(Error::InvalidSettings(format!(
                "target file name '{}' must be a plain name, not a path",
                self.target_file_name
            )));
        }
        if self.extension.len() < 2 {
            return Err(Error::InvalidSettings(format!(
                "extension '{}' has nothing after the dot",
                self.extension
            )));
        }
        if self.extension.contains(['\'', '"', ';', '/', '\\']) {
            return Err(Error::InvalidSettings(format!(
                "extension '{}' contains quote, semicolon or path separator characters",
                self.extension
            )));
        }
        Ok(())
    }
}
