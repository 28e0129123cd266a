//! `minecraft:entity`, `minecraft:game_profile` and `minecraft:score_holder`.
//!
//! ```text
//! target   := selector | uuid | player
//! selector := '@' class ('[' key '=' value? (',' key '=' value?)* ']')?
//! class    := 'p' | 'a' | 'r' | 's' | 'e'
//! ```

use crate::base::RangeString;
use crate::base::constants::{MAX_PLAYER_NAME_LEN, is_word_char};
use crate::parser::{ParseResult, PrefixedReporter, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::pred::{ENTITY_PREDICATES, entity_predicate};
use super::properties::{PropertyMessages, PropertySpec, any_text, parse_properties};
use super::uuid::is_hyphenated_uuid;
use super::{ArgumentParser, Example, Registries};

/// Which grammar argument an [`EntityArgument`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Entity,
    GameProfile,
    /// Also accepts the `*` wildcard.
    ScoreHolder,
}

const SELECTOR_CLASSES: &str = "parse";

fn is_predicate_key(key: &str) -> bool {
    key.chars().all(is_word_char)
}

const PREDICATE_SPEC: PropertySpec = PropertySpec {
    open: '[',
    close: ']',
    key_valid: is_predicate_key,
    value_valid: any_text,
    allow_empty_key: false,
    allow_empty_value: true,
    key_token: TokenType::Property,
    messages: PropertyMessages {
        unclosed: "EntityParser: unclosed predicate block (missing ']')",
        bad_key: "EntityParser: illegal character in predicate key",
        bad_value: "EntityParser: illegal character in predicate value",
        empty_key: "EntityParser: empty predicate key is not allowed",
        empty_value: "EntityParser: empty predicate value is not allowed",
        no_eq: "EntityParser: missing '=' in predicate",
        extra_comma: "EntityParser: extra comma in property",
    },
};

#[derive(Debug, Clone)]
pub struct EntityArgument {
    kind: EntityKind,
}

impl EntityArgument {
    pub fn new(kind: EntityKind) -> Self {
        Self { kind }
    }

    fn parse_selector(&self, arg: RangeString<'_>, res: &mut ParseResult) {
        let Some(class) = arg.char_at(1) else {
            res.err(
                arg.range(),
                "EntityParser: missing selector class (possible @p, @a, @r, @s, @e)",
            );
            return;
        };
        if !SELECTOR_CLASSES.contains(class.as_str()) {
            res.err(
                arg.range(),
                &format!("EntityParser: unknown selector class '{}'", class.as_str()),
            );
            return;
        }
        res.token(RangeString::span(&arg, &class), TokenType::Selector);

        let block = arg.slice_from(1 + class.len());
        if block.is_empty() {
            return;
        }
        if !block.starts_with("[") {
            res.err(
                block.range(),
                "EntityParser: illegal characters after entity selector class",
            );
            return;
        }

        let Some(list) = parse_properties(block, res, &PREDICATE_SPEC) else {
            return;
        };
        if !list.rest.is_empty() {
            res.err(
                list.rest.range(),
                "EntityParser: unexpected characters after predicate block",
            );
        }

        // Malformed keys were already reported by the list reader.
        for (key, value) in list.entries {
            if !is_predicate_key(key.as_str()) {
                continue;
            }
            let Some(entry) = entity_predicate(key.as_str()) else {
                res.err(key.range(), "EntityParser: unknown predicate");
                continue;
            };
            if value.is_empty() && !entry.parser.allow_empty() {
                res.err(
                    RangeString::span(&key, &value),
                    "EntityParser: empty predicate value not allowed",
                );
                continue;
            }
            let prefix = format!("EntityParser (predicate '{}'): ", key.as_str());
            entry
                .parser
                .parse(value, &mut PrefixedReporter::new(res, &prefix));
        }
    }

    fn parse_player(&self, arg: RangeString<'_>, res: &mut ParseResult) {
        if is_hyphenated_uuid(arg) {
            res.token(arg.range(), TokenType::Uuid);
            return;
        }

        res.token(arg.range(), TokenType::PlayerName);
        if arg.as_str().chars().count() > MAX_PLAYER_NAME_LEN {
            res.err(
                arg.range(),
                "EntityParser: player name too long (max 16 characters)",
            );
        } else if !arg.as_str().chars().all(is_word_char) {
            res.err(arg.range(), "EntityParser: bad player name (illegal character)");
        }
    }
}

impl ArgumentParser for EntityArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        let Some(arg) = input.consume_word() else {
            return res.with_error(input.remaining().range(), "EntityParser: expected an entity");
        };

        if self.kind == EntityKind::ScoreHolder && arg.as_str() == "*" {
            return res.with_token(arg.range(), TokenType::Selector);
        }
        if arg.starts_with("@") {
            self.parse_selector(arg, &mut res);
        } else {
            self.parse_player(arg, &mut res);
        }
        res
    }

    fn examples(&self) -> Vec<Example> {
        let mut examples: Vec<_> = ["@p", "@a", "@r", "@s", "@e", "Steve"]
            .into_iter()
            .map(Example::new)
            .collect();
        if self.kind == EntityKind::ScoreHolder {
            examples.push(Example::new("*"));
        }
        examples.extend(ENTITY_PREDICATES.iter().filter_map(|entry| {
            let sample = entry.samples.first()?;
            Some(Example::tagged(
                format!("@e[{}={sample}]", entry.key),
                "predicate",
            ))
        }));
        examples
    }
}
