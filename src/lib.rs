//! Core library functions used by `main`, the interactive prompt and tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod prompt;

/// Validation errors raised before any rename is issued.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),
    #[error("path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("the text to replace must not be empty")]
    EmptyPattern,
    #[error("failed to read directory '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One of the three supported filename transformations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Replace the first occurrence of `old` with `new`.
    Replace { old: String, new: String },
    /// Add `before` in front of the name and `after` in front of the
    /// extension. Either may be empty.
    Append { before: String, after: String },
    /// Rename each entry to its zero-based position, keeping the extension.
    Number,
}

/// Per-entry outcomes of one batch. A failed entry never stops the batch
/// and is never retried; callers decide how loudly to report it.
#[derive(Debug, Default)]
pub struct RenameReport {
    /// Successful renames as (old name, new name) pairs.
    pub renamed: Vec<(String, String)>,
    /// Entries whose transformed name was unchanged (no rename issued).
    pub skipped: usize,
    /// Entries that could not be renamed, with the failure message.
    pub failed: Vec<(String, String)>,
}

impl RenameReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Public API: rename every entry of `dir` according to `operation`.
///
/// Validation happens up front; no filesystem mutation occurs if it fails.
/// The directory is listed once (non-recursively, subdirectories are
/// renamed as whole entries) and entries are processed in lexical order so
/// the `Number` operation assigns indices deterministically.
pub fn run(dir: &Path, operation: &Operation) -> Result<RenameReport, RenameError> {
    validate_dir(dir)?;
    if let Operation::Replace { old, .. } = operation {
        if old.is_empty() {
            return Err(RenameError::EmptyPattern);
        }
    }

    let names = list_entries(dir)?;
    let mut report = RenameReport::default();

    for (index, os_name) in names.iter().enumerate() {
        let Some(name) = os_name.to_str() else {
            report.failed.push((
                os_name.to_string_lossy().into_owned(),
                "file name is not valid UTF-8".to_string(),
            ));
            continue;
        };

        let target = match operation {
            Operation::Replace { old, new } => replace_name(name, old, new),
            Operation::Append { before, after } => append_name(name, before, after),
            Operation::Number => numbered_name(index, name),
        };

        if target == name {
            report.skipped += 1;
            continue;
        }

        // fs::rename replaces an existing target, so numbering a directory
        // that already contains an entry literally named e.g. "2.txt" can
        // clobber it. Inherited behavior, left as is.
        match fs::rename(dir.join(name), dir.join(&target)) {
            Ok(()) => report.renamed.push((name.to_string(), target)),
            Err(err) => report.failed.push((name.to_string(), err.to_string())),
        }
    }

    Ok(report)
}

/// Check that `path` exists and is a directory. Shared between the CLI
/// dispatcher (where a failure aborts the run) and the interactive prompt
/// (where it re-prompts with the message).
pub fn validate_dir(path: &Path) -> Result<(), RenameError> {
    if !path.exists() {
        return Err(RenameError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(RenameError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// List the entry names of `dir`, sorted lexically. Directory listing
/// order is filesystem-dependent, so we sort to keep numbering stable
/// across runs.
fn list_entries(dir: &Path) -> Result<Vec<std::ffi::OsString>, RenameError> {
    let read_dir = fs::read_dir(dir).map_err(|source| RenameError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| RenameError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}

/// Replace the first occurrence of `old` in `name`. Names that don't
/// contain `old` come back unchanged.
pub fn replace_name(name: &str, old: &str, new: &str) -> String {
    name.replacen(old, new, 1)
}

/// Build `before + stem + after + extension`.
pub fn append_name(name: &str, before: &str, after: &str) -> String {
    let (stem, ext) = split_extension(name);
    format!("{before}{stem}{after}{ext}")
}

/// Build `index + extension`, where the extension is taken from `name`.
pub fn numbered_name(index: usize, name: &str) -> String {
    let (_, ext) = split_extension(name);
    format!("{index}{ext}")
}

/// Split a file name into (stem, extension). The extension starts at the
/// last `.` and includes it. A dot at position zero does not start an
/// extension, so dotfiles like `.gitignore` have none.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}
