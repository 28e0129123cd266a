//! Accumulators for argument-level diagnostics and semantic tokens.

use std::sync::Arc;

use crate::base::TextRange;
use crate::syntax::{Diagnostic, SemanticToken, TokenType};

// ============================================================================
// REPORTER
// ============================================================================

/// Sink for everything a sub-parser has to say about the text it read.
///
/// Implemented by [`ParseResult`] and by [`PrefixedReporter`]; parsers take
/// `&mut dyn Reporter` so a composite parser can hand its own sink, or a
/// prefixing wrapper around it, to the parsers it delegates to.
pub trait Reporter {
    fn err(&mut self, range: TextRange, message: &str);
    fn warn(&mut self, range: TextRange, message: &str);
    fn token(&mut self, range: TextRange, kind: TokenType);
}

// ============================================================================
// PARSE RESULT
// ============================================================================

/// Errors, warnings and semantic tokens, each kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub tokens: Vec<SemanticToken>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, range: TextRange, message: impl Into<Arc<str>>) -> Self {
        self.errors.push(Diagnostic::error(range, message));
        self
    }

    pub fn with_warning(mut self, range: TextRange, message: impl Into<Arc<str>>) -> Self {
        self.warnings.push(Diagnostic::warning(range, message));
        self
    }

    pub fn with_token(mut self, range: TextRange, kind: TokenType) -> Self {
        self.tokens.push(SemanticToken { range, kind });
        self
    }

    /// True when no error was reported. Warnings do not count.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append another result's three lists to this one.
    pub fn merge(&mut self, other: ParseResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.tokens.extend(other.tokens);
    }

    /// Feed every entry into another reporter, errors first.
    pub fn replay(&self, reporter: &mut dyn Reporter) {
        for e in &self.errors {
            reporter.err(e.range, &e.message);
        }
        for w in &self.warnings {
            reporter.warn(w.range, &w.message);
        }
        for t in &self.tokens {
            reporter.token(t.range, t.kind);
        }
    }

    /// Errors followed by warnings.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// Tokens ordered by start offset; equal starts keep insertion order.
    pub fn sorted_tokens(&self) -> Vec<SemanticToken> {
        let mut tokens = self.tokens.clone();
        tokens.sort_by_key(|t| t.range.start());
        tokens
    }
}

impl Reporter for ParseResult {
    fn err(&mut self, range: TextRange, message: &str) {
        self.errors.push(Diagnostic::error(range, message));
    }

    fn warn(&mut self, range: TextRange, message: &str) {
        self.warnings.push(Diagnostic::warning(range, message));
    }

    fn token(&mut self, range: TextRange, kind: TokenType) {
        self.tokens.push(SemanticToken { range, kind });
    }
}

// ============================================================================
// PREFIXING WRAPPER
// ============================================================================

/// Forwards to another reporter, tagging error and warning messages.
///
/// Tokens pass through unchanged.
pub struct PrefixedReporter<'r> {
    inner: &'r mut dyn Reporter,
    prefix: &'r str,
}

impl<'r> PrefixedReporter<'r> {
    pub fn new(inner: &'r mut dyn Reporter, prefix: &'r str) -> Self {
        Self { inner, prefix }
    }
}

impl Reporter for PrefixedReporter<'_> {
    fn err(&mut self, range: TextRange, message: &str) {
        self.inner.err(range, &format!("{}{}", self.prefix, message));
    }

    fn warn(&mut self, range: TextRange, message: &str) {
        self.inner.warn(range, &format!("{}{}", self.prefix, message));
    }

    fn token(&mut self, range: TextRange, kind: TokenType) {
        self.inner.token(range, kind);
    }
}
