//! `brigadier:string`, `brigadier:bool` and `minecraft:message`.

use crate::base::RangeString;
use crate::base::constants::is_unquoted_str;
use crate::parser::{ParseResult, PrefixedReporter, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::string_reader::StringReader;
use super::{ArgumentParser, Example, Registries};

/// The `type` property of `brigadier:string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    /// A single unquoted word.
    Word,
    /// A quoted string or a single word.
    Phrase,
    /// Everything up to the end of the line.
    Greedy,
}

impl StringKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "word" => Some(Self::Word),
            "phrase" => Some(Self::Phrase),
            "greedy" => Some(Self::Greedy),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Phrase => "phrase",
            Self::Greedy => "greedy",
        }
    }
}

/// Token over the rest of the line, then move the reader to the end.
fn take_rest_of_line(input: &mut TokenReader<'_>, missing: &str) -> ParseResult {
    if input.at_end() {
        return ParseResult::new().with_error(input.remaining().range(), missing);
    }
    let rest = input.remaining();
    input.consume_all();
    ParseResult::new().with_token(rest.range(), TokenType::String)
}

#[derive(Debug, Clone)]
pub struct StringArgument {
    kind: StringKind,
}

impl StringArgument {
    pub fn new(kind: StringKind) -> Self {
        Self { kind }
    }

    fn parse_word(&self, value: RangeString<'_>, res: &mut ParseResult) {
        if !is_unquoted_str(value.as_str()) {
            res.err(
                value.range(),
                &format!(
                    "StringArgument({}): illegal character in word; it should match [a-zA-Z0-9_.+-]+",
                    self.kind.name()
                ),
            );
        }
        res.token(value.range(), TokenType::String);
    }

    fn parse_quoted(&self, value: RangeString<'_>, res: &mut ParseResult) {
        let mut prefixed = PrefixedReporter::new(res, "StringArgument(phrase): ");
        let mut reader = StringReader::new(value, &mut prefixed);
        let quoted = match reader.read_quoted() {
            Ok(quoted) => {
                let rest = reader.rest();
                if !rest.is_empty() {
                    prefixed.err(rest.range(), "unexpected characters after quoted string");
                }
                quoted
            }
            Err(_) => value,
        };
        res.token(quoted.range(), TokenType::String);
    }
}

impl ArgumentParser for StringArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        if self.kind == StringKind::Greedy {
            return take_rest_of_line(input, "StringArgument(greedy): expected text");
        }

        let mut res = ParseResult::new();
        let Some(value) = input.consume_word() else {
            return res.with_error(
                input.remaining().range(),
                format!("StringArgument({}): expected a string", self.kind.name()),
            );
        };
        match self.kind {
            StringKind::Phrase if matches!(value.first_char(), Some('"' | '\'')) => {
                self.parse_quoted(value, &mut res)
            }
            _ => self.parse_word(value, &mut res),
        }
        res
    }

    fn examples(&self) -> Vec<Example> {
        let samples: &[&str] = match self.kind {
            StringKind::Greedy => &["word", "words with spaces", "\"and symbols\""],
            StringKind::Phrase => &["\"quoted phrase\"", "word", "\"\""],
            StringKind::Word => &["word", "words_with_underscores"],
        };
        samples
            .iter()
            .map(|s| Example::tagged(*s, self.kind.name()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoolArgument;

impl ArgumentParser for BoolArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        match input.consume_word() {
            Some(value) if matches!(value.as_str(), "true" | "false") => {
                ParseResult::new().with_token(value.range(), TokenType::Keyword)
            }
            Some(value) => ParseResult::new()
                .with_error(value.range(), "BoolArgument: expected 'true' or 'false'"),
            None => ParseResult::new().with_error(
                input.remaining().range(),
                "BoolArgument: expected 'true' or 'false'",
            ),
        }
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new("true"), Example::new("false")]
    }
}

/// `minecraft:message`: the rest of the line, verbatim.
#[derive(Debug, Clone, Default)]
pub struct MessageArgument;

impl ArgumentParser for MessageArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        take_rest_of_line(input, "MessageArgument: expected a message")
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new("Hello world")]
    }
}
