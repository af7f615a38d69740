//! Line-oriented file helpers for scenario steps.
//!
//! The recipes write small prose files; every write ends with a newline so
//! appended additions land on their own lines.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::GenerateError;

/// Create a directory (and any missing parents).
pub fn create_dir(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path)
        .map_err(|err| GenerateError::io(format!("create directory {}", path.display()), err))
}

/// Write `content` to a new file, creating parent directories as needed.
///
/// A trailing newline is added if missing.
pub fn write_text(path: &Path, content: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, with_trailing_newline(content))
        .map_err(|err| GenerateError::io(format!("write file {}", path.display()), err))
}

/// Append `content` to an existing file, with a trailing newline if missing.
///
/// The file must already exist; appending to a missing file means the recipe
/// forgot to create it first.
pub fn append_text(path: &Path, content: &str) -> Result<(), GenerateError> {
    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|err| GenerateError::io(format!("open file {}", path.display()), err))?;
    file.write_all(with_trailing_newline(content).as_bytes())
        .map_err(|err| GenerateError::io(format!("append to file {}", path.display()), err))
}

fn with_trailing_newline(content: &str) -> String {
    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    }
}
