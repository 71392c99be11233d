//! engine::patch
//!
//! Anchor-based text insertion into existing files.
//!
//! # Semantics
//!
//! - The anchor is matched as an exact, case-sensitive substring.
//! - Only the first occurrence (left to right) is used.
//! - The insert text is placed verbatim immediately after the anchor; the
//!   rest of the content is unchanged.
//! - A missing anchor is an error and the file is left byte-identical.
//! - Patching is not idempotent: applying the same insert twice inserts it
//!   twice. Callers guard against re-application.
//!
//! # Example
//!
//! ```
//! use crudgen::engine::patch::insert_after;
//!
//! let patched = insert_after("a\n// merge api\nb", "// merge api", "\nX").unwrap();
//! assert_eq!(patched, "a\n// merge api\nX\nb");
//!
//! assert!(insert_after("no anchor here", "// merge api", "X").is_none());
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from patching a file.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("anchor '{anchor}' not found in '{}'", .path.display())]
    AnchorNotFound { path: PathBuf, anchor: String },

    #[error("failed to read '{}': {source}", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Insert `insert` immediately after the first occurrence of `anchor`.
///
/// Returns `None` if the anchor is empty or does not occur in `content`.
pub fn insert_after(content: &str, anchor: &str, insert: &str) -> Option<String> {
    if anchor.is_empty() {
        return None;
    }
    let at = content.find(anchor)? + anchor.len();

    let mut patched = String::with_capacity(content.len() + insert.len());
    patched.push_str(&content[..at]);
    patched.push_str(insert);
    patched.push_str(&content[at..]);
    Some(patched)
}

/// Patch a file in place.
///
/// Reads the whole file, inserts `insert` after the first `anchor`, and writes
/// the result back atomically. On `AnchorNotFound` nothing is written.
pub fn patch_file(path: &Path, anchor: &str, insert: &str) -> Result<(), PatchError> {
    let content = read(path)?;
    let patched =
        insert_after(&content, anchor, insert).ok_or_else(|| PatchError::AnchorNotFound {
            path: path.to_path_buf(),
            anchor: anchor.to_string(),
        })?;
    write_atomic(path, &patched)
}

/// Read a file to a string, mapping errors to `PatchError::ReadError`.
pub(crate) fn read(path: &Path) -> Result<String, PatchError> {
    fs::read_to_string(path).map_err(|e| PatchError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a file atomically.
///
/// Creates parent directories if needed, writes to a sibling temp file and
/// renames it over the target.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), PatchError> {
    let write_err = |path: &Path, e: std::io::Error| PatchError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_err(path, e))?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".crudgen.tmp");
    let temp_path = path.with_file_name(temp_name);

    let result = write_temp(&temp_path, contents)
        .map_err(|e| write_err(&temp_path, e))
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| write_err(path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp(temp_path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
