//! Orchestration for generating one scenario repository.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::GenerateError;
use crate::io::fs::{append_text, create_dir, write_text};
use crate::io::git::Git;
use crate::scenario::{INITIAL_COMMIT_ID, Scenario, Step, TIMESTAMP};

/// Length of the short commit id substituted into file contents.
const SHORT_ID_LEN: usize = 7;

/// A freshly generated practice repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRepo {
    /// Repository root on disk.
    pub path: PathBuf,
    /// Short id of the initial commit.
    pub initial_commit_id: String,
}

/// Generate `scenario` under `parent`, leaving the repository on disk.
///
/// The destination `parent/<name>` must not already exist; this is checked
/// once, up front, and a race between check and creation is not guarded
/// against. Any later failure aborts the remaining steps with no rollback:
/// delete the half-built directory and re-run.
pub fn generate(scenario: &Scenario, parent: &Path) -> Result<GeneratedRepo, GenerateError> {
    let dest = parent.join(scenario.name);
    if dest.exists() {
        return Err(GenerateError::DestinationExists(dest));
    }

    debug!(scenario = scenario.name, dest = %dest.display(), "generating scenario");
    create_dir(&dest)?;
    let git = Git::init(&dest)?;

    write_text(&dest.join("README.md"), scenario.readme)?;
    git.add_all()?;
    git.commit("Initial commit")?;

    // Captured right after the initial commit so later steps can embed it.
    let initial_commit_id = git.head_short_sha(SHORT_ID_LEN)?;
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    for step in &scenario.steps {
        apply_step(&git, &dest, step, &initial_commit_id, &timestamp)?;
    }

    info!(scenario = scenario.name, "scenario generated");
    Ok(GeneratedRepo {
        path: dest,
        initial_commit_id,
    })
}

fn apply_step(
    git: &Git,
    dest: &Path,
    step: &Step,
    initial_commit_id: &str,
    timestamp: &str,
) -> Result<(), GenerateError> {
    match step {
        Step::CreateFile { path, content } => write_text(
            &dest.join(path),
            &substitute(content, initial_commit_id, timestamp),
        ),
        Step::AppendFile { path, content } => append_text(
            &dest.join(path),
            &substitute(content, initial_commit_id, timestamp),
        ),
        Step::StageAll => git.add_all(),
        Step::Commit(message) => git.commit(message),
        Step::CreateBranch(name) => git.checkout_new_branch(name),
        Step::Checkout(reference) => git.checkout(reference),
    }
}

/// Replace the recipe placeholders in file contents.
fn substitute(content: &str, initial_commit_id: &str, timestamp: &str) -> String {
    content
        .replace(INITIAL_COMMIT_ID, initial_commit_id)
        .replace(TIMESTAMP, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn substitute_replaces_every_placeholder_occurrence() {
        let content = "forked at {initial_commit_id}, ancestor ({initial_commit_id})";
        assert_eq!(
            substitute(content, "abc1234", "unused"),
            "forked at abc1234, ancestor (abc1234)"
        );
    }

    #[test]
    fn substitute_leaves_other_text_alone() {
        let content = "tuned at {timestamp}.";
        assert_eq!(
            substitute(content, "abc1234", "2026-08-08 12:00:00 UTC"),
            "tuned at 2026-08-08 12:00:00 UTC."
        );
    }

    /// The existence check fires before any repository work, so a second
    /// run must not mutate an existing destination at all.
    #[test]
    fn existing_destination_aborts_before_any_write() {
        let temp = tempfile::tempdir().expect("tempdir");
        let scenario = Scenario {
            name: "demo",
            summary: "demo",
            readme: "# Demo",
            steps: Vec::new(),
        };

        let dest = temp.path().join("demo");
        fs::create_dir(&dest).expect("precreate destination");
        fs::write(dest.join("marker.txt"), "untouched\n").expect("write marker");

        let err = generate(&scenario, temp.path()).unwrap_err();
        assert!(matches!(err, GenerateError::DestinationExists(_)));

        // Nothing was created or overwritten.
        assert!(!dest.join(".git").exists());
        assert!(!dest.join("README.md").exists());
        let marker = fs::read_to_string(dest.join("marker.txt")).expect("read marker");
        assert_eq!(marker, "untouched\n");
    }

    #[test]
    fn empty_recipe_yields_a_single_commit_repository() {
        let temp = tempfile::tempdir().expect("tempdir");
        let scenario = Scenario {
            name: "demo",
            summary: "demo",
            readme: "# Demo\n\nJust the initial commit.",
            steps: Vec::new(),
        };

        let repo = generate(&scenario, temp.path()).expect("generate");
        assert_eq!(repo.path, temp.path().join("demo"));
        assert_eq!(repo.initial_commit_id.len(), 7);

        let git = Git::open(&repo.path);
        assert_eq!(git.commit_count("master").expect("count"), 1);
        let readme = fs::read_to_string(repo.path.join("README.md")).expect("read");
        assert_eq!(readme, "# Demo\n\nJust the initial commit.\n");
    }
}
