//! # mcfunction-base
//!
//! Core library for Minecraft command parsing: tokenizing, grammar-driven
//! command resolution, argument validation and semantic highlighting.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Document analysis, semantic-token encoding, completion
//!   ↓
//! command   → Command-tree walker (frontier search over forked readers)
//!   ↓
//! project   → Grammar tree, registries, Context + ContextHandle
//!   ↓
//! args      → Argument kinds, parser registry, entity predicates
//!   ↓
//! comb      → Combinator toolkit for small ad hoc grammars
//!   ↓
//! parser    → Logos tokenizer, TokenReader, ParseResult/Reporter
//!   ↓
//! syntax    → TokenType legend, Severity, Diagnostic
//!   ↓
//! base      → RangeString, TextRange/TextSize, constants
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → comb → args → project → command → ide)
// ============================================================================

/// Foundation types: RangeString, TextRange
pub mod base;

/// Output vocabulary: token types, diagnostics
pub mod syntax;

/// Tokenizer, token reader, parse results
pub mod parser;

/// Combinator toolkit
pub mod comb;

/// Argument parsers, one per grammar argument kind
pub mod args;

/// Grammar tree and loaded context
pub mod project;

/// Command-tree walker
pub mod command;

/// IDE features: document analysis, completion
pub mod ide;

// Re-export foundation types
pub use base::{RangeString, TextRange, TextSize};

pub use command::{LineReport, WalkError, walk};
pub use project::{Context, ContextHandle, LoadError};
pub use syntax::{Diagnostic, SemanticToken, Severity, TokenType};
