//! Reading documents from disk and naming the files results are written to.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a document as UTF-8 text.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file is missing, unreadable or not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Sibling path for a document's saved analysis: `notes/project.md` becomes
/// `notes/project.analysis.json`.
#[must_use]
pub fn result_path(document: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .map_or_else(|| "document".into(), |s| s.to_string_lossy());
    document.with_file_name(format!("{stem}.analysis.json"))
}

/// Write serialised output next to the analysed document.
///
/// # Errors
///
/// Returns [`Error::Write`] if the destination cannot be written.
pub fn write_result(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
