//! Directory scanning for bulk photo import.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Error;

/// Return `true` if `path` has an extension the album importer accepts.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    const EXTS: &[&str] = &["jpg", "jpeg", "png"];
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            EXTS.iter().any(|e| *e == ext)
        })
}

/// Collect every supported image under `root`, recursively, skipping hidden
/// dot-directories below the root. Results come back sorted so imports are
/// deterministic.
///
/// # Errors
/// Returns [`Error::BadDir`] if `root` is missing or not a directory.
pub fn scan_dir(root: &Path) -> Result<Vec<PathBuf>, Error> {
    if !root.is_dir() {
        return Err(Error::BadDir(root.to_string_lossy().into_owned()));
    }
    let mut out = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !should_skip_dir(e))
        .flatten()
    {
        let path = entry.path();
        if path.is_file() && is_supported_image(path) {
            out.push(path.to_path_buf());
        }
    }
    out.sort();
    Ok(out)
}

fn should_skip_dir(entry: &DirEntry) -> bool {
    // Never skip the root; tempfile roots can be dot-dirs.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|n| n.starts_with('.'))
}
