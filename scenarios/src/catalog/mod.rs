//! The fixed scenario catalogue.
//!
//! Each entry reproduces one teachable git situation. The recipes are plain
//! data; what makes every scenario work is the exact order of its steps.

mod merge_conflict;
mod reset_mixed;
mod reset_soft;
mod when_to_rebase;

pub use merge_conflict::merge_conflict;
pub use reset_mixed::reset_mixed;
pub use reset_soft::reset_soft;
pub use when_to_rebase::when_to_rebase;

use crate::scenario::Scenario;

/// Every scenario this tool can generate, in presentation order.
pub fn all() -> Vec<Scenario> {
    vec![
        merge_conflict(),
        reset_mixed(),
        reset_soft(),
        when_to_rebase(),
    ]
}
