//! Fixed-dimension vectors: positions, rotations, angles and dust colours.

use rustc_hash::FxHashSet;

use crate::base::{RangeString, TextRange};
use crate::parser::{ParseResult, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::number::parse_finite;
use super::{ArgumentParser, Registries, skip_separator};

/// `dim` space-separated components, each optionally prefixed by one of
/// `rel_chars`.
#[derive(Debug, Clone)]
pub struct VectorArgument {
    name: &'static str,
    dim: usize,
    rel_chars: &'static str,
    /// Absolute components must be integers.
    integer: bool,
}

impl VectorArgument {
    pub const fn new(name: &'static str, dim: usize, rel_chars: &'static str, integer: bool) -> Self {
        Self {
            name,
            dim,
            rel_chars,
            integer,
        }
    }

    /// Read the components, reporting separator problems.
    fn read_components<'a>(
        &self,
        input: &mut TokenReader<'a>,
        res: &mut ParseResult,
    ) -> Option<Vec<RangeString<'a>>> {
        let Some(first) = input.consume_word() else {
            res.err(
                input.remaining().range(),
                &format!("{}: expected {} coordinates", self.name, self.dim),
            );
            return None;
        };

        let mut parts = vec![first];
        while parts.len() < self.dim {
            skip_separator(input, res);
            let Some(part) = input.consume_word() else {
                let end = input.last().map_or(first.end(), |t| t.value.end());
                res.err(
                    TextRange::new(first.start(), end),
                    &format!("{}: unexpected end-of-line command", self.name),
                );
                return None;
            };
            parts.push(part);
        }
        Some(parts)
    }
}

impl ArgumentParser for VectorArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        let Some(parts) = self.read_components(input, &mut res) else {
            return res;
        };

        let mut prefixes = FxHashSet::default();
        for part in &parts {
            let (prefix, offset) = match part.first_char() {
                Some(c) if self.rel_chars.contains(c) => {
                    let width = c.len_utf8();
                    (Some(part.slice_to(width)), part.slice_from(width))
                }
                _ => (None, *part),
            };

            if let Some(prefix) = prefix {
                res.token(prefix.range(), TokenType::PosRel);
                prefixes.insert(prefix.as_str());
            }
            if offset.is_empty() {
                continue;
            }

            let is_int = self.integer && prefix.is_none();
            if parse_finite(offset.as_str(), is_int).is_none() {
                let what = if is_int { "integer" } else { "float" };
                res.err(
                    offset.range(),
                    &format!("{}: failed to parse {what} '{}'", self.name, offset.as_str()),
                );
            }
            res.token(offset.range(), TokenType::Number);
        }

        if prefixes.len() > 1 {
            if let (Some(first), Some(last)) = (parts.first(), parts.last()) {
                res.err(
                    RangeString::span(first, last),
                    &format!("{}: cannot mix relative coord types", self.name),
                );
            }
        }
        res
    }
}
