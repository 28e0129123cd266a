//! `minecraft:block_state` and `minecraft:block_predicate`.
//!
//! ```text
//! block := id ('[' key '=' value (',' key '=' value)* ']')? ('{' nbt '}')?
//! ```
//!
//! The id is checked against the block-state table: an unknown id is only a
//! warning, and property checks run only once the id has been resolved.

use rustc_hash::FxHashSet;

use crate::base::RangeString;
use crate::parser::{ParseResult, PrefixedReporter, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::nbt::parse_whole_compound_tag;
use super::properties::{PropertyMessages, PropertySpec, all_word_chars, parse_properties};
use super::resource::parse_resource;
use super::{ArgumentParser, BlockProperties, Example, Registries};

#[derive(Debug, Clone)]
pub struct BlockStateArgument {
    name: &'static str,
    allow_tag: bool,
}

impl BlockStateArgument {
    pub fn new(name: &'static str, allow_tag: bool) -> Self {
        Self { name, allow_tag }
    }

    fn property_spec(&self) -> PropertySpec {
        PropertySpec {
            open: '[',
            close: ']',
            key_valid: all_word_chars,
            value_valid: all_word_chars,
            allow_empty_key: false,
            allow_empty_value: false,
            key_token: TokenType::Property,
            messages: PropertyMessages {
                unclosed: "unclosed block state property expression",
                bad_key: "bad character in property key",
                bad_value: "bad character in property value",
                empty_key: "missing property key",
                empty_value: "missing property value",
                no_eq: "missing '=' in property",
                extra_comma: "extra comma in property",
            },
        }
    }

    /// Validate one block argument already split off the token stream.
    pub(crate) fn parse_block(
        &self,
        value: RangeString<'_>,
        registries: &dyn Registries,
        res: &mut ParseResult,
    ) {
        let prefix = format!("{}: ", self.name);
        let mut report = PrefixedReporter::new(res, &prefix);

        let (id, suffix) = value.take_while(|c| c != '[' && c != '{');
        if id.is_empty() {
            report.err(value.range(), "missing block id");
            return;
        }

        let resolved = parse_resource(&mut report, self.allow_tag, id, TokenType::Resource)
            .and_then(|parsed| {
                if parsed.is_tag {
                    return None;
                }
                let normalized = parsed.normalized();
                match registries.block_properties(&normalized) {
                    Some(table) => Some((normalized, table)),
                    None => {
                        report.warn(id.range(), &format!("unknown block '{normalized}'"));
                        None
                    }
                }
            });

        let mut rest = suffix;
        if suffix.starts_with("[") {
            let Some(list) = parse_properties(suffix, &mut report, &self.property_spec()) else {
                return;
            };
            for (key, value) in &list.entries {
                if !value.is_empty() {
                    let kind = if value.as_str().chars().all(|c| c.is_ascii_digit()) {
                        TokenType::Number
                    } else {
                        TokenType::Keyword
                    };
                    report.token(value.range(), kind);
                }
            }
            if let Some((block, table)) = &resolved {
                check_properties(block, table, &list.entries, &mut report);
            }
            rest = list.rest;
        }

        if rest.starts_with("{") {
            parse_whole_compound_tag(rest, &mut report);
        } else if !rest.is_empty() {
            report.err(rest.range(), "unexpected trailing characters");
        }
    }
}

fn check_properties(
    block: &str,
    table: &BlockProperties,
    entries: &[(RangeString<'_>, RangeString<'_>)],
    report: &mut dyn Reporter,
) {
    let mut seen = FxHashSet::default();
    for (key, value) in entries {
        if !seen.insert(key.as_str()) {
            report.err(key.range(), &format!("duplicate property {}", key.as_str()));
        }
        let Some(allowed) = table.get(key.as_str()) else {
            report.err(
                key.range(),
                &format!(
                    "unknown block state property '{}' in block '{block}'",
                    key.as_str()
                ),
            );
            continue;
        };
        if !allowed.iter().any(|v| v == value.as_str()) {
            report.err(
                value.range(),
                &format!(
                    "unknown block state value '{}' in property '{}' in block '{block}'. Note: allowed values are {}",
                    value.as_str(),
                    key.as_str(),
                    allowed.join(", ")
                ),
            );
        }
    }
}

impl ArgumentParser for BlockStateArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, registries: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        match input.consume_word() {
            Some(value) => self.parse_block(value, registries, &mut res),
            None => res.err(
                input.remaining().range(),
                &format!("{}: missing block id", self.name),
            ),
        }
        res
    }

    fn examples(&self) -> Vec<Example> {
        let mut examples = vec![
            Example::new("stone"),
            Example::new("minecraft:barrel[facing=up]"),
        ];
        if self.allow_tag {
            examples.push(Example::new("#minecraft:logs"));
        }
        examples
    }
}
