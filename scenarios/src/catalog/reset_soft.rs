//! A history worth squashing with `git reset --soft`.

use crate::scenario::{Scenario, Step};

/// Finished kitchen components committed one-by-one on `master`.
pub const KITCHEN_COMPONENTS: [(&str, &str); 4] = [
    (
        "stove",
        "# Stove\n- Remove old appliance\n- Sweep up\n- Check electrical connections\n\
         - Install new stove",
    ),
    (
        "countertops",
        "# Countertops\n- Remove old countertops\n- Ensure countertops will fit new cabinets\n\
         - Install new countertops\n- Dispose of surplus material",
    ),
    (
        "cabinets",
        "# Cabinets\n- Remove old cabinets\n- Measure for fit\n- Install cabinets\n\
         - Level cabinets and doors\n- Clean up",
    ),
    (
        "lighting",
        "# Lighting\n- Remove old fixtures\n- Replace wiring\n- Install medallions\n\
         - Install lights\n- Repair ceiling",
    ),
];

/// Flooring steps committed one-by-one on the `flooring` branch.
pub const FLOORING_STEPS: [&str; 5] = [
    "Remove old flooring and adhesive",
    "Install new boards",
    "Let wood breathe",
    "Sand boards",
    "Apply finish",
];

const README: &str = "# Git Reset (soft)\n\
                      \n\
                      When you are working on a feature or bug, you will often find it helpful to \
                      create frequent commits that track your overall progress.  When it is time \
                      to share your changes, however, you may not want each step to appear in the \
                      history of the project.  Using the command `git reset --soft` allows you to \
                      step backwards in your commit history while leaving your working directory \
                      and staging area intact so you can combine all of those commits into a \
                      single snapshot.\n\
                      \n\
                      It is kind of like remodeling a kitchen.  Maybe there are multiple \
                      contractors who are each responsible for a particular component.  The \
                      person overseeing the overall progress might not necessarily be concerned \
                      with how each component is constructed, only that the components are \
                      complete and installed.\n\
                      \n\
                      This repository contains files that each represent a finished component of \
                      a kitchen remodel.  You have a branch called `flooring` that contains \
                      individual commits for each step of the flooring process.  If you run \
                      `git reset --soft HEAD~5`, Git will rewind your commit history, leaving all \
                      of the changes those commits introduced intact and staged.  From there, you \
                      can run `git commit -m 'Add flooring'` to combine all of those individual \
                      changes into a single commit.";

/// Finished components land on `master`; the `flooring` branch then grows
/// one commit per flooring step, each appending a single line to
/// `flooring.md`.
pub fn reset_soft() -> Scenario {
    let mut steps = Vec::new();
    for (name, content) in KITCHEN_COMPONENTS {
        steps.push(Step::create(format!("{name}.md"), content));
        steps.push(Step::StageAll);
        steps.push(Step::commit(format!("Add {name}")));
    }

    steps.push(Step::CreateBranch("flooring".to_string()));
    steps.push(Step::create("flooring.md", "# Flooring"));
    for flooring_step in FLOORING_STEPS {
        steps.push(Step::append("flooring.md", format!("- {flooring_step}")));
        steps.push(Step::StageAll);
        steps.push(Step::commit(flooring_step));
    }

    Scenario {
        name: "git-reset-soft",
        summary: "a step-by-step history to squash with `git reset --soft HEAD~5`",
        readme: README,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_components_then_flooring_steps() {
        let scenario = reset_soft();
        assert_eq!(
            scenario.commit_count(),
            1 + KITCHEN_COMPONENTS.len() + FLOORING_STEPS.len()
        );
    }

    /// Every flooring commit appends exactly one line to `flooring.md`; the
    /// file header itself rides along with the first step's commit, as the
    /// branch story requires.
    #[test]
    fn flooring_commits_append_single_lines() {
        let scenario = reset_soft();
        for step in &scenario.steps {
            if let Step::AppendFile { path, content } = step {
                assert_eq!(path, "flooring.md");
                assert!(content.starts_with("- "));
                assert!(!content.contains('\n'));
            }
        }
        let appended = scenario
            .steps
            .iter()
            .filter(|s| matches!(s, Step::AppendFile { .. }))
            .count();
        assert_eq!(appended, FLOORING_STEPS.len());
    }

    #[test]
    fn flooring_branch_starts_after_the_component_commits() {
        let scenario = reset_soft();
        let branch_pos = scenario
            .steps
            .iter()
            .position(|s| matches!(s, Step::CreateBranch(name) if name == "flooring"))
            .expect("flooring branch step");
        let commits_before = scenario.steps[..branch_pos]
            .iter()
            .filter(|s| matches!(s, Step::Commit(_)))
            .count();
        assert_eq!(commits_before, KITCHEN_COMPONENTS.len());
    }

    #[test]
    fn readme_points_at_the_matching_reset_depth() {
        let scenario = reset_soft();
        assert!(
            scenario
                .readme
                .contains(&format!("HEAD~{}", FLOORING_STEPS.len()))
        );
    }
}
