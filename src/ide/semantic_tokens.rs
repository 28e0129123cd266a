//! Semantic tokens in the LSP flat integer layout.

use crate::syntax::SemanticToken;

/// A semantic token tagged with its 0-based document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineToken {
    pub line: u32,
    pub token: SemanticToken,
}

/// Encode tokens as `(lineDelta, startDelta, length, type, 0)` quintuples.
///
/// `startDelta` is relative to the previous token's start when both are on
/// the same line, and the absolute column otherwise. Tokens are ordered by
/// line then start; ties keep their input order.
pub fn encode_semantic_tokens(tokens: &[LineToken]) -> Vec<u32> {
    let mut sorted = tokens.to_vec();
    sorted.sort_by_key(|t| (t.line, t.token.range.start()));

    let mut data = Vec::with_capacity(sorted.len() * 5);
    let mut prev_line = 0;
    let mut prev_start = 0;
    for LineToken { line, token } in sorted {
        let start = u32::from(token.range.start());
        let line_delta = line - prev_line;
        let start_delta = if line_delta == 0 {
            start - prev_start
        } else {
            start
        };
        data.extend([
            line_delta,
            start_delta,
            u32::from(token.range.len()),
            token.kind.to_lsp_index(),
            0,
        ]);
        prev_line = line;
        prev_start = start;
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{TextRange, TextSize};
    use crate::syntax::TokenType;

    fn tok(line: u32, start: u32, end: u32, kind: TokenType) -> LineToken {
        LineToken {
            line,
            token: SemanticToken {
                range: TextRange::new(TextSize::from(start), TextSize::from(end)),
                kind,
            },
        }
    }

    #[test]
    fn test_delta_encoding() {
        let data = encode_semantic_tokens(&[
            tok(0, 0, 4, TokenType::CommandLiteral),
            tok(0, 5, 7, TokenType::Selector),
            tok(2, 3, 6, TokenType::Number),
        ]);
        assert_eq!(
            data,
            [
                0, 0, 4, TokenType::CommandLiteral as u32, 0, //
                0, 5, 2, TokenType::Selector as u32, 0, //
                2, 3, 3, TokenType::Number as u32, 0,
            ]
        );
    }

    #[test]
    fn test_out_of_order_input_is_sorted() {
        let data = encode_semantic_tokens(&[
            tok(1, 4, 5, TokenType::Number),
            tok(1, 0, 2, TokenType::Keyword),
        ]);
        assert_eq!(&data[..2], [1, 0]);
        assert_eq!(&data[5..7], [0, 4]);
    }
}
