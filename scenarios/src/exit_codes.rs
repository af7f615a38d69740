//! Stable exit codes for the scenarios CLI.

/// Scenario generated (or catalogue listed) successfully.
pub const OK: i32 = 0;
/// Generation aborted: git failure, I/O failure, or bad invocation.
pub const FAILED: i32 = 1;
/// The destination directory already exists; nothing was touched.
pub const DEST_EXISTS: i32 = 2;
