//! A repository with a merge conflict on the horizon.

use crate::scenario::{Scenario, Step};

const README: &str = "# Merge Conflicts\n\
                      \n\
                      This repository demonstrates how merge conflicts occur.";

const FEATURE_ADDITION: &str = "\n\nA feature branch was created off of the `Initial commit` at \
                                `{initial_commit_id}`.  This line was added to the file on the \
                                feature branch.";

const MASTER_ADDITION: &str = "\n\nA feature branch was created off of the initial commit \
                               (`{initial_commit_id}`).  However, work on `master` progressed in \
                               parallel to the work on `feature`.  Since both branches contain \
                               commits after their common ancestor ({initial_commit_id}), the \
                               `master` and `feature` branches have now diverged.  This is not \
                               always a problem, but since the same line (this line) was modified \
                               on both branches, Git does not know which version is the correct \
                               one.  At this point, if you try to merge `feature` into `master`, \
                               you will encounter a merge conflict.";

/// Both branches extend `README.md` at the same position relative to the
/// shared ancestor commit, so `git merge feature` cannot resolve the region
/// and reports exactly one conflicting hunk.
pub fn merge_conflict() -> Scenario {
    Scenario {
        name: "merge-conflict",
        summary: "a `git merge feature` on `master` that hits a one-hunk conflict",
        readme: README,
        steps: vec![
            Step::CreateBranch("feature".to_string()),
            Step::append("README.md", FEATURE_ADDITION),
            Step::StageAll,
            Step::commit("Add line to feature branch"),
            Step::Checkout("master".to_string()),
            Step::append("README.md", MASTER_ADDITION),
            Step::StageAll,
            Step::commit("Add line to master branch"),
        ],
    }
}
