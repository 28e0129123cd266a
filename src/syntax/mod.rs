//! Output vocabulary shared by every parser layer.
//!
//! - [`TokenType`], [`SemanticToken`] - Semantic highlighting kinds and the LSP legend
//! - [`Severity`], [`Diagnostic`] - Problems reported for a line
//!
//! Depends only on `base`.

mod diagnostic;
mod token_type;

pub use diagnostic::{Diagnostic, Severity};
pub use token_type::{SemanticToken, TokenType};
