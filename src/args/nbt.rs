//! Compound tag (SNBT) reader.
//!
//! ```text
//! tag   := '{' (key ':' value (',' key ':' value)*)? '}'
//! value := tag | list | scalar
//! list  := '[' value (',' value)* ']'  |  '[' T ';' ... ']'
//! ```
//!
//! The first structural error stops the whole tag; everything reported up to
//! that point is kept.

use crate::base::RangeString;
use crate::parser::{ParseResult, PrefixedReporter, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::string_reader::{ReadResult, Stop, StringReader};
use super::{ArgumentParser, Example, Registries};

struct NbtReader<'s, 'r> {
    r: StringReader<'s, 'r>,
}

impl NbtReader<'_, '_> {
    fn read_key(&mut self) -> ReadResult {
        if matches!(self.r.curr(), Some('"' | '\'')) {
            let key = self.r.read_quoted()?;
            self.r.res.token(key.range(), TokenType::Property);
            return Ok(());
        }

        let key = self.r.read_unquoted();
        if key.is_empty() {
            if self.r.at_end() {
                let whole = self.r.text().range();
                self.r.res.err(whole, "expected key but got end of string");
            } else {
                let here = self.r.curr_range().range();
                self.r.res.err(here, "expected non-empty key but got illegal char");
            }
            return Err(Stop);
        }
        self.r.res.token(key.range(), TokenType::Property);
        Ok(())
    }

    fn read_value(&mut self) -> ReadResult {
        self.r.skip_whitespace();
        match self.r.curr() {
            Some('{') => self.read_tag(),
            Some('[') => self.read_list(),
            _ => self.read_scalar(),
        }
    }

    fn has_element_separator(&mut self) -> bool {
        self.r.skip_whitespace();
        if self.r.curr() == Some(',') {
            self.r.consume();
            self.r.skip_whitespace();
            return true;
        }
        false
    }

    fn read_tag(&mut self) -> ReadResult {
        if !self.r.expect('{', None) {
            return Err(Stop);
        }
        self.r.skip_whitespace();
        while self.r.curr().is_some_and(|c| c != '}') {
            self.read_key()?;
            self.r.skip_whitespace();
            if !self.r.expect(':', Some(TokenType::Operator)) {
                return Err(Stop);
            }
            self.read_value()?;
            if !self.has_element_separator() {
                break;
            }
            if self.r.at_end() {
                return self.r.expected_value();
            }
        }
        if !self.r.expect('}', None) {
            return Err(Stop);
        }
        Ok(())
    }

    fn read_scalar(&mut self) -> ReadResult {
        if matches!(self.r.curr(), Some('"' | '\'')) {
            let s = self.r.read_quoted()?;
            self.r.res.token(s.range(), TokenType::String);
            return Ok(());
        }

        let value = self.r.read_unquoted();
        if value.is_empty() {
            return self.r.expected_value();
        }
        self.r.res.token(value.range(), scalar_kind(value));
        Ok(())
    }

    fn read_list(&mut self) -> ReadResult {
        let typed_array = self.r.can_read(3)
            && !matches!(self.r.peek(1), Some('"' | '\''))
            && self.r.peek(2) == Some(';');
        if typed_array {
            self.read_array()
        } else {
            self.read_list_tag()
        }
    }

    // `[B;...]`, `[I;...]`, `[L;...]` are taken as opaque up to the closing bracket.
    fn read_array(&mut self) -> ReadResult {
        self.r.expect('[', None);
        let kind = self.r.curr_range();
        self.r.res.token(kind.range(), TokenType::Keyword);
        self.r.consume();
        self.r.consume();
        self.r.read_while(|c| c != ']');
        if !self.r.expect(']', None) {
            return Err(Stop);
        }
        Ok(())
    }

    fn read_list_tag(&mut self) -> ReadResult {
        self.r.expect('[', None);
        self.r.skip_whitespace();
        if self.r.at_end() {
            return self.r.expected_value();
        }
        while self.r.curr().is_some_and(|c| c != ']') {
            self.read_value()?;
            if !self.has_element_separator() {
                break;
            }
            if self.r.at_end() {
                return self.r.expected_value();
            }
        }
        if !self.r.expect(']', None) {
            return Err(Stop);
        }
        Ok(())
    }
}

/// NUMBER for numeric literals (with an optional type suffix), KEYWORD for
/// booleans, STRING otherwise.
fn scalar_kind(value: RangeString<'_>) -> TokenType {
    let text = value.as_str();
    if text == "true" || text == "false" {
        return TokenType::Keyword;
    }
    let digits = text
        .strip_suffix(|c: char| matches!(c.to_ascii_lowercase(), 'b' | 's' | 'l' | 'f' | 'd'))
        .unwrap_or(text);
    if digits.parse::<f64>().is_ok_and(f64::is_finite) {
        TokenType::Number
    } else {
        TokenType::String
    }
}

/// Read one compound tag from the start of `text`.
///
/// Returns the text after the closing `}`, or `None` when reading stopped on
/// a structural error.
pub fn parse_compound_tag<'s>(
    text: RangeString<'s>,
    report: &mut dyn Reporter,
) -> Option<RangeString<'s>> {
    let mut reader = NbtReader {
        r: StringReader::new(text, report),
    };
    match reader.read_tag() {
        Ok(()) => Some(reader.r.rest()),
        Err(Stop) => None,
    }
}

/// Read a compound tag that must make up all of `text`.
pub fn parse_whole_compound_tag(text: RangeString<'_>, report: &mut dyn Reporter) {
    if let Some(rest) = parse_compound_tag(text, report).filter(|rest| !rest.is_empty()) {
        report.err(rest.range(), "unexpected characters after compound tag");
    }
}

/// `minecraft:nbt_compound_tag`.
#[derive(Debug, Clone, Default)]
pub struct CompoundTagArgument;

impl ArgumentParser for CompoundTagArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut result = ParseResult::new();
        match input.consume_word() {
            Some(token) => parse_whole_compound_tag(
                token,
                &mut PrefixedReporter::new(&mut result, "CompoundTagParser: "),
            ),
            None => result.err(input.remaining().range(), "CompoundTagParser: expected '{'"),
        }
        result
    }

    fn examples(&self) -> Vec<Example> {
        ["{}", "{foo:1b}", "{Items:[{id:\"stone\",Count:1b}]}"]
            .into_iter()
            .map(Example::new)
            .collect()
    }
}
