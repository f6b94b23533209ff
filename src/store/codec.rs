use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{AppError, Result};
use crate::models::Document;

/// Read and decode the whole document from the store file
///
/// Fails with a storage error when the file cannot be opened or read, and
/// with a decode error when the content is not a well-formed document.
pub fn load(path: &Path) -> Result<Document> {
    let bytes = fs::read(path)?;
    let document = serde_json::from_slice(&bytes)?;
    Ok(document)
}

/// Serialize and persist the whole document, replacing the store file
///
/// The document is written indented to a temporary file in the same
/// directory and renamed over the store file, so a failed write leaves the
/// previous document intact.
pub fn save(path: &Path, document: &Document) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(document)?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(&bytes)?;
    tmp.persist(path).map_err(|e| AppError::Storage(e.error))?;

    Ok(())
}
