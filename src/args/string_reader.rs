//! Character cursor for the recursive readers (compound tags, advancements).

use crate::base::RangeString;
use crate::base::constants::is_unquoted_char;
use crate::parser::Reporter;
use crate::syntax::TokenType;

/// Signal that the current structure cannot be read any further.
///
/// Returned as `Err(Stop)` and threaded back with `?`; diagnostics reported
/// before the stop are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop;

pub type ReadResult = Result<(), Stop>;

/// Cursor over one [`RangeString`], reporting into a borrowed reporter.
pub struct StringReader<'s, 'r> {
    text: RangeString<'s>,
    pub(crate) res: &'r mut dyn Reporter,
    index: usize,
}

impl<'s, 'r> StringReader<'s, 'r> {
    pub fn new(text: RangeString<'s>, res: &'r mut dyn Reporter) -> Self {
        Self {
            text,
            res,
            index: 0,
        }
    }

    pub fn text(&self) -> RangeString<'s> {
        self.text
    }

    /// Unread remainder.
    pub fn rest(&self) -> RangeString<'s> {
        self.text.slice_from(self.index)
    }

    /// Jump to the start of `slice`, which must come from [`Self::rest`].
    pub fn seek_to(&mut self, slice: RangeString<'s>) {
        self.index = u32::from(slice.start() - self.text.start()) as usize;
    }

    pub fn curr(&self) -> Option<char> {
        self.peek(0)
    }

    /// Character `offset` positions ahead.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.text.as_str()[self.index..].chars().nth(offset)
    }

    /// One-character slice under the cursor, or an empty slice at the end.
    pub fn curr_range(&self) -> RangeString<'s> {
        self.text
            .char_at(self.index)
            .unwrap_or_else(|| self.text.empty_at(self.index))
    }

    pub fn can_read(&self, count: usize) -> bool {
        count == 0 || self.text.as_str()[self.index..].chars().nth(count - 1).is_some()
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.text.len()
    }

    pub fn consume(&mut self) {
        if let Some(c) = self.curr() {
            self.index += c.len_utf8();
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.curr().is_some_and(char::is_whitespace) {
            self.consume();
        }
    }

    /// Consume `ch`, or report what was found instead.
    pub fn expect(&mut self, ch: char, token: Option<TokenType>) -> bool {
        let here = self.curr_range().range();
        if self.curr() != Some(ch) {
            if self.at_end() {
                let whole = self.text.range();
                self.res
                    .err(whole, &format!("expected '{ch}' but got end of string"));
            } else {
                self.res.err(here, &format!("expected '{ch}'"));
            }
            return false;
        }
        if let Some(kind) = token {
            self.res.token(here, kind);
        }
        self.consume();
        true
    }

    pub fn read_while(&mut self, pred: impl Fn(char) -> bool) -> RangeString<'s> {
        let start = self.index;
        while self.curr().is_some_and(&pred) {
            self.consume();
        }
        self.text.slice(start, self.index)
    }

    pub fn read_unquoted(&mut self) -> RangeString<'s> {
        self.read_while(is_unquoted_char)
    }

    /// Read a quoted string including both quotes; `\` escapes one character.
    /// A missing closing quote is reported and stops the reader.
    pub fn read_quoted(&mut self) -> Result<RangeString<'s>, Stop> {
        let start = self.index;
        let Some(quote) = self.curr() else {
            return Ok(self.text.empty_at(start));
        };
        self.consume();
        while let Some(c) = self.curr() {
            if c == quote {
                break;
            }
            if c == '\\' {
                self.consume();
            }
            self.consume();
        }
        if !self.expect(quote, None) {
            return Err(Stop);
        }
        Ok(self.text.slice(start, self.index))
    }

    /// Report "expected value" over the whole text and stop.
    pub fn expected_value(&mut self) -> ReadResult {
        let whole = self.text.range();
        self.res.err(whole, "expected value");
        Err(Stop)
    }
}
