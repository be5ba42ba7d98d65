use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole file as UTF-8 text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map_err(|source| Error::ReadError { path: path.to_path_buf(), source })
}

/// Replaces the contents of an existing file in one write.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, content)
        .map_err(|source| Error::WriteError { path: path.to_path_buf(), source })
}
