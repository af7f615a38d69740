//! A history worth restructuring with `git reset --mixed`.

use crate::scenario::{Scenario, Step, TIMESTAMP};

/// Strings on the guitar, in replacement order. One "replace" and one "tune"
/// commit is scripted per string.
pub const GUITAR_STRINGS: [&str; 6] = ["low-E", "A", "D", "G", "B", "high-E"];

const README: &str = "# Git Reset (mixed)\n\
                      \n\
                      When you are working on a feature or bug, you will often find it helpful to \
                      create frequent commits that track your overall progress.  When it is time \
                      to share your changes, however, those commits may not be structured and \
                      ordered in a way that is best for historical reference.  Using the command \
                      `git reset --mixed` allows you to step backwards in your commit history \
                      while leaving the changes in your working directory intact but unstaged so \
                      you can re-stage related pieces of work and craft a commit history that \
                      better represents individual development steps.\n\
                      \n\
                      It is kind of like restringing a guitar.  You might replace and tune each \
                      string one at a time.  But maybe it makes more sense to group all of the \
                      replacement work together, separate from the tuning work for each string.  \
                      Instead of a history that looks like:\n\
                      \n\
                      ```\n\
                      1. Replace low-E string\n\
                      2. Tune low-E string\n\
                      3. Replace A string\n\
                      4. Tune A string...\n\
                      ```\n\
                      \n\
                      You could roll back and regroup those units of work so that similar tasks \
                      are part of the same commits.\n\
                      \n\
                      This repository contains folders that each represent a string on a guitar.  \
                      You have a branch called `replace-strings` that contains individual commits \
                      for each step of the restringing process.  If you run \
                      `git reset --mixed HEAD~12`, Git will rewind your commit history back to 12 \
                      commits ago, leaving all of the changes those commits introduced intact but \
                      unstaged.  From there, you can re-add your files to the staging area and \
                      create new commits structured in a way that tells a clearer story of the \
                      changes you made.\n\
                      \n\
                      For instance, you might want to stage all of the `*/string-info.md` files \
                      for one commit and stage all of the `tuning-info.md` files for another \
                      commit.";

/// One directory per guitar string, two commits per string, all on a
/// `replace-strings` branch off the initial commit.
pub fn reset_mixed() -> Scenario {
    let mut steps = vec![Step::CreateBranch("replace-strings".to_string())];
    for string in GUITAR_STRINGS {
        steps.push(Step::create(
            format!("{string}/string-info.md"),
            format!("{string} string replaced at {TIMESTAMP}."),
        ));
        steps.push(Step::StageAll);
        steps.push(Step::commit(format!("Replace {string} string")));

        steps.push(Step::create(
            format!("{string}/tuning-info.md"),
            format!("{string} tuned at {TIMESTAMP}."),
        ));
        steps.push(Step::StageAll);
        steps.push(Step::commit(format!("Tune {string} string")));
    }

    Scenario {
        name: "git-reset-mixed",
        summary: "a commit-per-chore history to regroup with `git reset --mixed HEAD~12`",
        readme: README,
        steps,
    }
}
