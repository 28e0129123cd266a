//! Text slices carrying their absolute position in the source line.
//!
//! Every parser in the crate works on [`RangeString`] rather than `&str`, so a
//! substring derived by slicing, trimming or splitting always knows where it
//! came from. Derived ranges are a linear transform of the parent's range:
//! `child.start = parent.start + offset` and `child.len == child.text.len`.

use std::fmt;

use text_size::{TextRange, TextSize};

/// An immutable slice of a source line plus its absolute range.
///
/// All offsets taken by the methods below are byte offsets relative to the
/// start of `self` and must lie on `char` boundaries.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeString<'a> {
    text: &'a str,
    start: TextSize,
}

#[inline]
fn size(n: usize) -> TextSize {
    TextSize::from(n as u32)
}

impl<'a> RangeString<'a> {
    /// Create a slice whose first byte sits at `start` in the source line.
    pub fn new(text: &'a str, start: TextSize) -> Self {
        Self { text, start }
    }

    /// Create a slice that starts at offset 0 (a whole line).
    pub fn from_line(text: &'a str) -> Self {
        Self::new(text, TextSize::from(0))
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn range(&self) -> TextRange {
        TextRange::at(self.start, TextSize::of(self.text))
    }

    pub fn start(&self) -> TextSize {
        self.start
    }

    pub fn end(&self) -> TextSize {
        self.start + TextSize::of(self.text)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sub-slice `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        Self::new(&self.text[start..end], self.start + size(start))
    }

    /// Sub-slice from `start` to the end.
    pub fn slice_from(&self, start: usize) -> Self {
        self.slice(start, self.text.len())
    }

    /// Sub-slice from the beginning up to `end`.
    pub fn slice_to(&self, end: usize) -> Self {
        self.slice(0, end)
    }

    /// Zero-width slice at `offset`.
    pub fn empty_at(&self, offset: usize) -> Self {
        self.slice(offset, offset)
    }

    /// The single character starting at byte `offset`, as a slice.
    pub fn char_at(&self, offset: usize) -> Option<Self> {
        let ch = self.text.get(offset..)?.chars().next()?;
        Some(self.slice(offset, offset + ch.len_utf8()))
    }

    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.text.starts_with(pat)
    }

    pub fn ends_with(&self, pat: &str) -> bool {
        self.text.ends_with(pat)
    }

    /// Iterate over every character together with its one-character slice.
    pub fn char_slices(&self) -> impl Iterator<Item = (char, RangeString<'a>)> + '_ {
        self.text
            .char_indices()
            .map(move |(i, c)| (c, self.slice(i, i + c.len_utf8())))
    }

    pub fn strip_prefix(&self, prefix: &str) -> Option<Self> {
        self.text
            .starts_with(prefix)
            .then(|| self.slice_from(prefix.len()))
    }

    pub fn strip_suffix(&self, suffix: &str) -> Option<Self> {
        self.text
            .ends_with(suffix)
            .then(|| self.slice_to(self.text.len() - suffix.len()))
    }

    pub fn find(&self, ch: char) -> Option<usize> {
        self.text.find(ch)
    }

    pub fn trim(&self) -> Self {
        self.trim_start().trim_end()
    }

    pub fn trim_start(&self) -> Self {
        let trimmed = self.text.trim_start();
        self.slice_from(self.text.len() - trimmed.len())
    }

    pub fn trim_end(&self) -> Self {
        self.slice_to(self.text.trim_end().len())
    }

    /// Split into the longest prefix whose characters satisfy `pred`, and the rest.
    pub fn take_while(&self, mut pred: impl FnMut(char) -> bool) -> (Self, Self) {
        let end = self
            .text
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.text.len(), |(i, _)| i);
        (self.slice_to(end), self.slice_from(end))
    }

    /// Split on every occurrence of `sep`, like `str::split`.
    pub fn split(&self, sep: &str) -> Vec<Self> {
        self.splitn(usize::MAX, sep)
    }

    /// Split on `sep` into at most `limit` parts; the last part keeps the remainder.
    pub fn splitn(&self, limit: usize, sep: &str) -> Vec<Self> {
        let mut parts = Vec::new();
        let mut offset = 0;
        for piece in self.text.splitn(limit, sep) {
            parts.push(self.slice(offset, offset + piece.len()));
            offset += piece.len() + sep.len();
        }
        parts
    }

    /// Split on `sep` occurrences that are outside quotes and `{}`/`[]` nesting.
    ///
    /// Returns the parts and the separators between them.
    pub fn split_top_level(&self, sep: char) -> (Vec<Self>, Vec<Self>) {
        let mut parts = Vec::new();
        let mut separators = Vec::new();
        let mut depth = 0usize;
        let mut quote: Option<char> = None;
        let mut escaped = false;
        let mut part_start = 0;

        for (i, c) in self.text.char_indices() {
            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
                continue;
            }
            match c {
                '"' | '\'' => quote = Some(c),
                '{' | '[' => depth += 1,
                '}' | ']' => depth = depth.saturating_sub(1),
                _ if c == sep && depth == 0 => {
                    parts.push(self.slice(part_start, i));
                    separators.push(self.slice(i, i + c.len_utf8()));
                    part_start = i + c.len_utf8();
                }
                _ => {}
            }
        }
        parts.push(self.slice_from(part_start));
        (parts, separators)
    }

    /// Range spanning from the start of `first` to the end of `last`.
    pub fn span(first: &Self, last: &Self) -> TextRange {
        TextRange::new(first.start(), last.end().max(first.start()))
    }
}

impl fmt::Debug for RangeString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.text, self.range())
    }
}

impl fmt::Display for RangeString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl From<RangeString<'_>> for TextRange {
    fn from(value: RangeString<'_>) -> Self {
        value.range()
    }
}
