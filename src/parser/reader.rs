//! Cursor over a tokenized line.

use crate::base::{RangeString, TextSize};

use super::lexer::Token;

/// Cursor over an immutable token array plus the original line.
///
/// Copying the reader is the backtracking primitive: a fork shares the token
/// array and owns only its index.
#[derive(Debug, Clone, Copy)]
pub struct TokenReader<'a> {
    tokens: &'a [Token<'a>],
    index: usize,
    text: &'a str,
}

impl<'a> TokenReader<'a> {
    pub fn new(tokens: &'a [Token<'a>], text: &'a str) -> Self {
        Self {
            tokens,
            index: 0,
            text,
        }
    }

    /// Independent cursor at the same position.
    pub fn fork(&self) -> Self {
        *self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    pub fn current(&self) -> Option<Token<'a>> {
        self.tokens.get(self.index).copied()
    }

    /// Token `n` positions after the current one.
    pub fn peek(&self, n: usize) -> Option<Token<'a>> {
        self.tokens.get(self.index + n).copied()
    }

    pub fn previous(&self) -> Option<Token<'a>> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .copied()
    }

    /// Last token of the line.
    pub fn last(&self) -> Option<Token<'a>> {
        self.tokens.last().copied()
    }

    /// Return the current token and advance past it.
    pub fn consume(&mut self) -> Option<Token<'a>> {
        let token = self.current()?;
        self.index += 1;
        Some(token)
    }

    /// Consume the current token only if it is non-whitespace.
    pub fn consume_word(&mut self) -> Option<RangeString<'a>> {
        match self.current() {
            Some(token) if !token.is_whitespace => {
                self.index += 1;
                Some(token.value)
            }
            _ => None,
        }
    }

    /// Move to the end of the line.
    pub fn consume_all(&mut self) {
        self.index = self.tokens.len();
    }

    /// Offset where the unconsumed input begins.
    pub fn offset(&self) -> TextSize {
        match self.current() {
            Some(token) => token.value.start(),
            None => TextSize::of(self.text),
        }
    }

    /// Unconsumed input, from the current token to the end of the line.
    pub fn remaining(&self) -> RangeString<'a> {
        let whole = RangeString::new(self.text, TextSize::from(0));
        whole.slice_from(u32::from(self.offset()) as usize)
    }
}
