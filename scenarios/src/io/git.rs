//! Git adapter for the scenario generator.
//!
//! Recipes replay scripted commits against a real repository, so we keep a
//! small, explicit wrapper around `git` subprocess calls. Swapping the
//! underlying binding touches only this module.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::GenerateError;

/// Wrapper for executing git commands in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    /// Initialize a fresh repository at `workdir` (which must already exist).
    ///
    /// The initial branch is pinned to `master` since the recipes and their
    /// explanation texts name it, and a repository-local committer identity
    /// is set so scripted commits succeed regardless of host configuration.
    pub fn init(workdir: impl Into<PathBuf>) -> Result<Self, GenerateError> {
        let git = Self {
            workdir: workdir.into(),
        };
        debug!(workdir = %git.workdir.display(), "initializing repository");
        git.run_checked(&["init", "--initial-branch", "master"])?;
        git.run_checked(&["config", "user.name", "Scenario Generator"])?;
        git.run_checked(&["config", "user.email", "scenarios@local.invalid"])?;
        Ok(git)
    }

    /// Wrap an existing repository without touching it.
    pub fn open(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Return the current HEAD short id, truncated to `len` characters.
    pub fn head_short_sha(&self, len: usize) -> Result<String, GenerateError> {
        let arg = format!("--short={len}");
        let out = self.run_capture(&["rev-parse", &arg, "HEAD"])?;
        Ok(out.trim().to_string())
    }

    /// Stage all changes (respects .gitignore).
    pub fn add_all(&self) -> Result<(), GenerateError> {
        self.run_checked(&["add", "-A"])?;
        Ok(())
    }

    /// Commit the staged state with a message.
    ///
    /// Fails if nothing is staged; recipes always stage before committing,
    /// so an empty commit indicates a broken recipe.
    pub fn commit(&self, message: &str) -> Result<(), GenerateError> {
        debug!(message, "committing staged changes");
        self.run_checked(&["commit", "-m", message])?;
        Ok(())
    }

    /// Create a branch at HEAD and check it out.
    pub fn checkout_new_branch(&self, branch: &str) -> Result<(), GenerateError> {
        debug!(branch, "creating and checking out new branch");
        self.run_checked(&["checkout", "-b", branch])?;
        Ok(())
    }

    /// Check out an existing ref.
    pub fn checkout(&self, reference: &str) -> Result<(), GenerateError> {
        debug!(reference, "checking out");
        self.run_checked(&["checkout", reference])?;
        Ok(())
    }

    /// Number of commits reachable from `reference`.
    pub fn commit_count(&self, reference: &str) -> Result<usize, GenerateError> {
        let out = self.run_capture(&["rev-list", "--count", reference])?;
        let trimmed = out.trim();
        trimmed.parse().map_err(|_| {
            GenerateError::tool(
                "rev-list --count",
                format!("unexpected output '{trimmed}'"),
            )
        })
    }

    fn run_capture(&self, args: &[&str]) -> Result<String, GenerateError> {
        let output = self.run_checked(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn run_checked(&self, args: &[&str]) -> Result<Output, GenerateError> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GenerateError::tool(args.join(" "), stderr.trim()));
        }
        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<Output, GenerateError> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|err| GenerateError::tool(args.join(" "), err.to_string()))
    }
}
