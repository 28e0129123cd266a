//! Logos-based tokenizer for command lines.
//!
//! Logos splits the line into atoms (space runs, quoted strings, brackets and
//! plain text). [`tokenize`] then groups those atoms with a bracket stack so a
//! space nested inside `{...}` or `[...]` does not end a token.

use logos::Logos;

use crate::base::{RangeString, TextSize};

/// A maximal whitespace or non-whitespace run of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub value: RangeString<'a>,
    pub is_whitespace: bool,
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        self.value.as_str()
    }
}

/// Raw atoms recognised by logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Atom {
    #[regex(" +")]
    Space,

    // Unterminated quotes run to the end of the line.
    #[regex(r#""([^"\\]|\\.)*"?"#)]
    #[regex(r#"'([^'\\]|\\.)*'?"#)]
    Quoted,

    #[token("{")]
    OpenBrace,

    #[token("[")]
    OpenBracket,

    #[token("}")]
    CloseBrace,

    #[token("]")]
    CloseBracket,

    #[regex(r#"[^ "'\[\]{}]+"#)]
    Text,
}

/// Split a line into alternating whitespace/non-whitespace tokens.
///
/// Concatenating the token texts reproduces `line` exactly.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let whole = RangeString::new(line, TextSize::from(0));
    let mut tokens = Vec::new();
    let mut stack: Vec<char> = Vec::new();
    let mut word_start: Option<usize> = None;

    let mut lexer = Atom::lexer(line);
    while let Some(atom) = lexer.next() {
        let span = lexer.span();
        // Anything logos cannot classify is plain text.
        let atom = atom.unwrap_or(Atom::Text);

        if atom == Atom::Space && stack.is_empty() {
            if let Some(start) = word_start.take() {
                tokens.push(Token {
                    value: whole.slice(start, span.start),
                    is_whitespace: false,
                });
            }
            tokens.push(Token {
                value: whole.slice(span.start, span.end),
                is_whitespace: true,
            });
            continue;
        }

        word_start.get_or_insert(span.start);
        match atom {
            Atom::OpenBrace => stack.push('{'),
            Atom::OpenBracket => stack.push('['),
            Atom::CloseBrace => pop_until(&mut stack, '{'),
            Atom::CloseBracket => pop_until(&mut stack, '['),
            Atom::Space | Atom::Quoted | Atom::Text => {}
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token {
            value: whole.slice_from(start),
            is_whitespace: false,
        });
    }
    tokens
}

/// Pop openers until `opener` is removed or the stack is empty.
fn pop_until(stack: &mut Vec<char>, opener: char) {
    while let Some(top) = stack.pop() {
        if top == opener {
            break;
        }
    }
}
