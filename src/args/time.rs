//! `minecraft:time`: a duration with an optional unit suffix.

use crate::parser::{ParseResult, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::{ArgumentParser, Example, Registries};

/// Ticks per unit suffix.
fn unit_ticks(unit: &str) -> Option<f64> {
    match unit {
        "d" => Some(24000.0),
        "s" => Some(20.0),
        "t" | "" => Some(1.0),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct TimeArgument {
    /// Smallest accepted duration, in ticks.
    min: i64,
}

impl TimeArgument {
    pub fn new(min: i64) -> Self {
        Self { min }
    }
}

impl ArgumentParser for TimeArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        let Some(arg) = input.consume_word() else {
            return res.with_error(
                input.remaining().range(),
                "TimeArgument: expected number optionally followed by units",
            );
        };

        let (number, unit) = arg.take_while(|c| c.is_ascii_digit() || c == '.');
        if number.is_empty() {
            return res.with_error(
                arg.range(),
                "TimeArgument: expected number optionally followed by units",
            );
        }

        res.token(number.range(), TokenType::Number);
        if !unit.is_empty() {
            res.token(unit.range(), TokenType::Units);
        }

        let Some(value) = number.as_str().parse::<f64>().ok() else {
            res.err(
                number.range(),
                &format!("TimeArgument: failed to parse number '{}'", number.as_str()),
            );
            return res;
        };
        let Some(ticks) = unit_ticks(unit.as_str()) else {
            res.err(
                unit.range(),
                &format!(
                    "TimeArgument: unknown unit '{}', allowed values are 'd' (day), 's' (second), 't' (tick)",
                    unit.as_str()
                ),
            );
            return res;
        };

        let time = value * ticks;
        if time < self.min as f64 {
            res.err(
                arg.range(),
                &format!(
                    "TimeArgument: a minimum of {} ticks was expected, but got {time}",
                    self.min
                ),
            );
        }
        res
    }

    fn examples(&self) -> Vec<Example> {
        ["0d", "0s", "0t", "0"].into_iter().map(Example::new).collect()
    }
}
