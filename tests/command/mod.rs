//! Command-tree walker tests
//!
//! Tests for:
//! - Backtracking between sibling arguments
//! - Redirects and chained subcommands
//! - Grammar-level diagnostics
//! - Ambiguity tie-breaks

mod tests_ambiguity;
mod tests_walker;
