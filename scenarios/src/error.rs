//! Error taxonomy for scenario generation.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that can abort a scenario run.
///
/// None of these are recovered locally: the first error terminates the run,
/// and any half-built destination directory is left for the user to delete
/// before re-running.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The destination directory is already present.
    #[error("destination '{}' already exists", .0.display())]
    DestinationExists(PathBuf),

    /// A git operation could not be spawned or exited non-zero
    /// (nothing staged, ambiguous ref, ...).
    #[error("git {command} failed: {detail}")]
    Tool { command: String, detail: String },

    /// A file or directory could not be written.
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn tool(command: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Tool {
            command: command.into(),
            detail: detail.into(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
