//! Declarative scenario recipes.
//!
//! A [`Scenario`] is pure data: a destination name, the explanation text for
//! the initial `README.md`, and an ordered list of [`Step`]s replayed against
//! a fresh repository. Nothing here performs I/O; execution lives in
//! [`crate::generate`], and the order of steps is the whole point of each
//! recipe (reordering them changes the resulting commit graph).

use serde::Serialize;

/// Token in file contents replaced with the short id of the initial commit.
///
/// The id is captured immediately after the initial commit completes, so it
/// is available to every subsequent step.
pub const INITIAL_COMMIT_ID: &str = "{initial_commit_id}";

/// Token in file contents replaced with the generation timestamp (UTC).
pub const TIMESTAMP: &str = "{timestamp}";

/// A named recipe for one practice repository.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    /// Destination directory name; also the scenario's CLI name.
    pub name: &'static str,
    /// One-line description shown by `scenarios list`.
    pub summary: &'static str,
    /// Explanation text committed as the initial `README.md`.
    pub readme: &'static str,
    /// Steps replayed, in order, after the initial commit.
    pub steps: Vec<Step>,
}

/// One recipe action.
///
/// File contents may embed [`INITIAL_COMMIT_ID`] and [`TIMESTAMP`]; the
/// generator substitutes both when the step executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Step {
    /// Write a new file, creating parent directories as needed.
    CreateFile { path: String, content: String },
    /// Append to an existing file.
    AppendFile { path: String, content: String },
    /// Stage every change in the working tree.
    StageAll,
    /// Commit the staged state with the given message.
    Commit(String),
    /// Create a branch at HEAD and check it out.
    CreateBranch(String),
    /// Check out an existing ref.
    Checkout(String),
}

impl Step {
    pub fn create(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::CreateFile {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn append(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::AppendFile {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn commit(message: impl Into<String>) -> Self {
        Self::Commit(message.into())
    }
}

impl Scenario {
    /// Number of commits the recipe produces, counting the initial commit.
    pub fn commit_count(&self) -> usize {
        let scripted = self
            .steps
            .iter()
            .filter(|step| matches!(step, Step::Commit(_)))
            .count();
        1 + scripted
    }
}
