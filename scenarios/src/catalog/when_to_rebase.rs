//! A diverged branch worth rebasing onto `master`.

use crate::scenario::{Scenario, Step};

/// Car components committed one-by-one on `master` after the `car-body`
/// branch forks off.
pub const CAR_PARTS: [(&str, &str); 4] = [
    (
        "wheels",
        "These are the wheels.  They ensure the car can roll smoothly.",
    ),
    (
        "chassis",
        "This is the chassis.  It is the structure upon which all other components sit.",
    ),
    ("engine", "This is the engine.  It gives the car power."),
    (
        "transmission",
        "This is the transmission.  It controls the application of power from the engine.",
    ),
];

const CAR_BODY: &str = "This is the body of the car.  It not only gives the car added structure \
                        and safety, but also makes the car stylish and aerodynamic.";

const README: &str = "# When to Rebase\n\
                      \n\
                      Because the `master` branch is constantly receiving updates from new \
                      commits and merged Pull Requests, choosing the right time to create your \
                      `feature` branch can be intimidating.  With `git-rebase`, the answer is \
                      right now.\n\
                      \n\
                      In its simplest form, rebasing lets you take your current branch and shift \
                      it in its entirety so that it begins at a different point in history.  This \
                      means you can create a branch when you are ready, pull any updates from \
                      `master`, and then move your feature branch to the current tip of `master` \
                      as though you had created your branch right now instead of yesterday or two \
                      weeks ago.  In addition to ensuring your branch contains the most \
                      up-to-date work, rebasing is often helpful for ensuring commits on your \
                      branch apply cleanly via a fast-forward merge instead of creating merge \
                      commits, which can clutter the history of a project.\n\
                      \n\
                      It is kind of like building a car.  Different people are working on \
                      different components at the same time: wheels, chassis, engine, \
                      transmission.  You want to make sure you have the most recent components so \
                      you can make sure the bodywork you are building fits with everything else \
                      that is already done.\n\
                      \n\
                      The `master` branch of this repository contains files representing each of \
                      those components.  Every part was added with a separate commit.  You have a \
                      branch called `car-body` that you started immediately after the initial \
                      commit.  However, work has progressed on the `master` branch since then.  \
                      You need to make sure your frame takes into consideration all of the other \
                      components that are already part of the car before you add it in.\n\
                      \n\
                      If you check out your `car-body` branch and run `git rebase master`, Git \
                      will look at all of the commits that exist on your branch and recreate them \
                      so that they are based on (and therefore include) the most recent commits \
                      on `master`.";

/// `car-body` forks at the initial commit with a single commit of its own,
/// while `master` keeps moving. The two branches touch disjoint files, so
/// the rebase applies cleanly.
pub fn when_to_rebase() -> Scenario {
    let mut steps = vec![
        Step::CreateBranch("car-body".to_string()),
        Step::create("body.md", CAR_BODY),
        Step::StageAll,
        Step::commit("Add car body"),
        Step::Checkout("master".to_string()),
    ];
    for (name, content) in CAR_PARTS {
        steps.push(Step::create(format!("{name}.md"), content));
        steps.push(Step::StageAll);
        steps.push(Step::commit(format!("Add {name} to car")));
    }

    Scenario {
        name: "when-to-rebase",
        summary: "a stale `car-body` branch that `git rebase master` moves forward cleanly",
        readme: README,
        steps,
    }
}
