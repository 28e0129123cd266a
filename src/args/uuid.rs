//! `minecraft:uuid`.

use uuid::Uuid;

use crate::base::RangeString;
use crate::parser::{ParseResult, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::{ArgumentParser, Example, Registries};

const INVALID_UUID: &str = "Invalid UUID, see https://datatracker.ietf.org/doc/html/rfc4122";

/// Hyphenated form only: 36 characters that parse as a UUID.
pub(crate) fn is_hyphenated_uuid(text: RangeString<'_>) -> bool {
    text.len() == 36 && Uuid::parse_str(text.as_str()).is_ok()
}

#[derive(Debug, Clone, Default)]
pub struct UuidArgument;

impl ArgumentParser for UuidArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        match input.consume_word() {
            Some(value) if is_hyphenated_uuid(value) => res.token(value.range(), TokenType::Uuid),
            Some(value) => res.err(value.range(), INVALID_UUID),
            None => res.err(input.remaining().range(), INVALID_UUID),
        }
        res
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new("dd12be42-52a9-4a91-a8a1-11c01849e498")]
    }
}
