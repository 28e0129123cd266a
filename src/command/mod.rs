//! Command-tree walker: resolves one line against the grammar.
//!
//! ```text
//! line ─→ tokenize ─→ frontier of forked readers ─→ LineReport
//!                        │   ↑
//!                        └───┘ one generation per argument
//! ```
//!
//! See [`walk`] for the search and [`AmbiguityKind`] for how competing paths
//! are settled.

mod report;
mod walker;

pub use report::{Ambiguity, AmbiguityKind, LineReport, PathEntry, WalkError};
pub use walker::walk;
