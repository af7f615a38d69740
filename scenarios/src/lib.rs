//! Practice-repository generators for learning git.
//!
//! Each entry in the [`catalog`] is a declarative recipe: files to write,
//! changes to stage, commits and branches to create, in a fixed order that
//! reproduces one teachable situation (a guaranteed merge conflict,
//! histories suited to mixed and soft resets, a stale branch worth
//! rebasing). The [`generate`] module replays a recipe against a fresh
//! repository and leaves the result on disk for a human to explore with
//! real git commands.
//!
//! The crate keeps a strict separation:
//!
//! - **[`scenario`] / [`catalog`]**: pure recipe data. No I/O.
//! - **[`io`]**: side effects (filesystem writes, git subprocess calls).
//! - **[`generate`]**: orchestration of a single run.

pub mod catalog;
pub mod error;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
pub mod scenario;
