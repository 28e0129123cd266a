//! What the walker hands back for one line.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{TextRange, TextSize};
use crate::project::CommandNode;
use crate::syntax::{Diagnostic, SemanticToken};

/// One grammar hop of a resolved path.
#[derive(Debug, Clone)]
pub struct PathEntry<'g> {
    /// Literal keyword or argument name as declared in the grammar.
    pub name: SmolStr,
    /// Text this hop consumed.
    pub range: TextRange,
    pub node: &'g CommandNode,
    /// False for the failed hop a failure report ends on.
    pub matched: bool,
}

impl PathEntry<'_> {
    pub fn is_literal(&self) -> bool {
        self.node.is_literal()
    }
}

/// Which tie-break picked the reported path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbiguityKind {
    /// Several paths reached an executable node; the first one is reported.
    MultipleTerminals,
    /// Several paths ran out of input before an executable node; the first one is reported.
    MultipleIncomplete,
    /// Every attempt failed; the one that read furthest is reported.
    MultipleFailures,
}

#[derive(Debug, Clone)]
pub struct Ambiguity<'g> {
    pub kind: AmbiguityKind,
    /// The paths that were not reported, in attempt order.
    pub alternatives: Vec<Vec<PathEntry<'g>>>,
}

/// Diagnostics, highlighting and the resolved path of one command line.
#[derive(Debug, Clone)]
pub struct LineReport<'g> {
    pub diagnostics: Vec<Diagnostic>,
    /// Ordered by start offset.
    pub tokens: Vec<SemanticToken>,
    /// Root excluded.
    pub path: Vec<PathEntry<'g>>,
    /// True when the path ends on an executable node with all input consumed.
    pub success: bool,
    pub ambiguity: Option<Ambiguity<'g>>,
}

impl<'g> LineReport<'g> {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn is_ambiguous(&self) -> bool {
        self.ambiguity.is_some()
    }

    /// Deepest matched hop that ends strictly before `offset`.
    pub fn entry_before(&self, offset: TextSize) -> Option<&PathEntry<'g>> {
        self.path
            .iter()
            .rev()
            .find(|entry| entry.matched && entry.range.end() < offset)
    }
}

/// Contract break between the tokenizer and the walker.
///
/// Fatal for the line being walked only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalkError {
    #[error("token stream out of step with the command tree at offset {offset}")]
    TokenizerDesync { offset: u32 },
}
