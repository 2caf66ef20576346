//! `edgedu`: report Microsoft Edge browser storage usage per user on macOS.
//!
//! The library is split the same way the binary flows:
//! - [`cli`] parses the command line (positional usernames plus `--debug`).
//! - [`core`] resolves usernames to home directories and produces the
//!   per-user category report.
//! - [`utils`] holds the filesystem size accumulator and the
//!   human-readable byte formatter.
//! - [`logger`] provides the `log_*!` macros used for diagnostics.

pub mod cli; // Command-line definition and parsing.
pub mod core; // Resolver, category table, and reporter.
pub mod logger; // Colored, level-prefixed logging macros.
pub mod utils; // Filesystem helpers shared across the crate.
