//! Single-token arguments restricted to the unquoted charset, with a
//! per-kind hook for the final check.

use crate::base::RangeString;
use crate::base::constants::is_unquoted_char;
use crate::parser::{ParseResult, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::{ArgumentParser, Example, Registries};

/// Kind-specific validation run on an unquoted token.
pub trait UnquotedHook: Default + Send + Sync {
    fn check(&self, value: RangeString<'_>, res: &mut ParseResult);

    /// Whether every character must be in `[0-9A-Za-z_.+-]`.
    fn check_chars(&self) -> bool {
        true
    }

    fn examples(&self) -> Vec<Example> {
        Vec::new()
    }
}

/// Report one error per character for which `check` returns a message.
pub(crate) fn check_each_char(
    value: RangeString<'_>,
    res: &mut dyn Reporter,
    mut check: impl FnMut(char) -> Option<String>,
) {
    for (c, slice) in value.char_slices() {
        if let Some(message) = check(c) {
            res.err(slice.range(), &message);
        }
    }
}

/// An argument made of one unquoted token, finished by `H`.
#[derive(Debug, Default)]
pub struct UnquotedArgument<H> {
    hook: H,
}

impl<H: UnquotedHook> UnquotedArgument<H> {
    pub fn new() -> Self {
        Self { hook: H::default() }
    }
}

impl<H: UnquotedHook> ArgumentParser for UnquotedArgument<H> {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        let Some(value) = input.consume_word() else {
            return res.with_error(input.remaining().range(), "expected a value");
        };
        if self.hook.check_chars() {
            check_each_char(value, &mut res, |c| {
                (!is_unquoted_char(c)).then(|| "Illegal character in unquoted string".to_string())
            });
        }
        self.hook.check(value, &mut res);
        res
    }

    fn examples(&self) -> Vec<Example> {
        self.hook.examples()
    }
}

// ============================================================================
// SCOREBOARD
// ============================================================================

#[derive(Debug, Default)]
pub struct TeamHook;

impl UnquotedHook for TeamHook {
    fn check(&self, value: RangeString<'_>, res: &mut ParseResult) {
        res.token(value.range(), TokenType::Team);
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new("red"), Example::new("my_team")]
    }
}

#[derive(Debug, Default)]
pub struct ObjectiveHook;

impl UnquotedHook for ObjectiveHook {
    fn check(&self, value: RangeString<'_>, res: &mut ParseResult) {
        res.token(value.range(), TokenType::Objective);
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new("kills"), Example::new("deaths")]
    }
}

#[derive(Debug, Default)]
pub struct ScoreboardSlotHook;

impl UnquotedHook for ScoreboardSlotHook {
    fn check(&self, value: RangeString<'_>, res: &mut ParseResult) {
        res.token(value.range(), TokenType::ScoreboardSlot);
    }

    fn examples(&self) -> Vec<Example> {
        ["list", "sidebar", "belowName", "sidebar.team.red"]
            .into_iter()
            .map(Example::new)
            .collect()
    }
}

/// `minecraft:objective_criteria` takes any single token.
#[derive(Debug, Clone, Default)]
pub struct ObjectiveCriteriaArgument;

impl ArgumentParser for ObjectiveCriteriaArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        match input.consume_word() {
            Some(value) => ParseResult::new().with_token(value.range(), TokenType::ObjectiveCriteria),
            None => ParseResult::new().with_error(input.remaining().range(), "expected a criterion"),
        }
    }

    fn examples(&self) -> Vec<Example> {
        ["dummy", "deathCount", "minecraft.mined:minecraft.stone"]
            .into_iter()
            .map(Example::new)
            .collect()
    }
}

// ============================================================================
// ENTITY ANCHOR
// ============================================================================

#[derive(Debug, Default)]
pub struct EntityAnchorHook;

impl UnquotedHook for EntityAnchorHook {
    fn check(&self, value: RangeString<'_>, res: &mut ParseResult) {
        if !matches!(value.as_str(), "eyes" | "feet") {
            res.err(
                value.range(),
                &format!("EntityAnchorArgument: unknown anchor '{}'", value.as_str()),
            );
        }
        res.token(value.range(), TokenType::Enum);
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new("eyes"), Example::new("feet")]
    }
}
