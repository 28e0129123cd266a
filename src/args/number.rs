//! Bounded numbers and `a..b` ranges.

use crate::base::RangeString;
use crate::parser::{ParseResult, PrefixedReporter, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::{ArgumentParser, Registries};

// ============================================================================
// NUMBERS
// ============================================================================

/// How a single number is parsed and bounded.
#[derive(Debug, Clone, Copy)]
pub struct NumberSpec {
    pub is_int: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub parse_fail: &'static str,
    /// Fixed message for a value below `min`; `None` describes the bound.
    pub below_min: Option<&'static str>,
    /// Fixed message for a value above `max`; `None` describes the bound.
    pub above_max: Option<&'static str>,
}

impl NumberSpec {
    pub const fn new(is_int: bool, parse_fail: &'static str) -> Self {
        Self {
            is_int,
            min: None,
            max: None,
            parse_fail,
            below_min: None,
            above_max: None,
        }
    }
}

/// Parse `text` as an integer or a finite float.
pub fn parse_finite(text: &str, is_int: bool) -> Option<f64> {
    if is_int {
        text.parse::<i64>().ok().map(|v| v as f64)
    } else {
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Parse and bound-check one number.
///
/// The NUMBER token is emitted whenever the text parses, even when a bound
/// is violated.
pub fn parse_number(s: RangeString<'_>, spec: &NumberSpec, report: &mut dyn Reporter) -> Option<f64> {
    let Some(value) = parse_finite(s.as_str(), spec.is_int) else {
        report.err(s.range(), spec.parse_fail);
        return None;
    };

    report.token(s.range(), TokenType::Number);

    if let Some(min) = spec.min.filter(|&min| value < min) {
        match spec.below_min {
            Some(message) => report.err(s.range(), message),
            None => report.err(s.range(), &format!("{value} is below the minimum of {min}")),
        }
    }
    if let Some(max) = spec.max.filter(|&max| value > max) {
        match spec.above_max {
            Some(message) => report.err(s.range(), message),
            None => report.err(s.range(), &format!("{value} exceeds maximum of {max}")),
        }
    }

    Some(value)
}

// ============================================================================
// RANGES
// ============================================================================

/// How an `a..b` range is parsed.
#[derive(Debug, Clone, Copy)]
pub struct RangeSpec {
    pub is_int: bool,
    pub allow_negative: bool,
    pub parse_fail: &'static str,
    pub missing_bounds: &'static str,
    pub too_many_components: &'static str,
    pub negative: &'static str,
}

/// Parse `a`, `a..b`, `..b` or `a..`. Open ends become infinities.
pub fn parse_range(
    s: RangeString<'_>,
    spec: &RangeSpec,
    report: &mut dyn Reporter,
) -> Option<(f64, f64)> {
    let number = NumberSpec {
        min: (!spec.allow_negative).then_some(0.0),
        below_min: Some(spec.negative),
        ..NumberSpec::new(spec.is_int, spec.parse_fail)
    };

    let parts = s.split("..");
    match parts.as_slice() {
        [single] => parse_number(*single, &number, report).map(|v| (v, v)),
        [from, to] => {
            report.token(s.slice(from.len(), from.len() + 2).range(), TokenType::Operator);
            if from.is_empty() && to.is_empty() {
                report.err(s.range(), spec.missing_bounds);
                return None;
            }
            let low = if from.is_empty() {
                Some(f64::NEG_INFINITY)
            } else {
                parse_number(*from, &number, report)
            };
            let high = if to.is_empty() {
                Some(f64::INFINITY)
            } else {
                parse_number(*to, &number, report)
            };
            Some((low?, high?))
        }
        _ => {
            report.err(s.range(), spec.too_many_components);
            None
        }
    }
}

// ============================================================================
// ARGUMENTS
// ============================================================================

/// `brigadier:integer`, `brigadier:long`, `brigadier:float`, `brigadier:double`.
#[derive(Debug, Clone)]
pub struct NumberArgument {
    is_int: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberArgument {
    pub fn new(is_int: bool, min: Option<f64>, max: Option<f64>) -> Self {
        Self { is_int, min, max }
    }

    fn name(&self) -> &'static str {
        if self.is_int {
            "IntegerArgument: "
        } else {
            "FloatArgument: "
        }
    }
}

impl ArgumentParser for NumberArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut result = ParseResult::new();
        let Some(token) = input.consume_word() else {
            return result.with_error(input.remaining().range(), "expected a number");
        };
        let spec = NumberSpec {
            min: self.min,
            max: self.max,
            ..NumberSpec::new(self.is_int, "failed to parse number")
        };
        parse_number(token, &spec, &mut PrefixedReporter::new(&mut result, self.name()));
        result
    }
}

/// `minecraft:int_range` and `minecraft:float_range`.
#[derive(Debug, Clone)]
pub struct NumberRangeArgument {
    spec: RangeSpec,
}

impl NumberRangeArgument {
    pub fn new(is_int: bool) -> Self {
        Self {
            spec: RangeSpec {
                is_int,
                allow_negative: true,
                parse_fail: "NumberRange: failed to parse number",
                missing_bounds: "NumberRange: range cannot be just '..'",
                too_many_components: "NumberRange: only one '..' expected",
                negative: "NumberRange: value cannot be negative",
            },
        }
    }
}

impl ArgumentParser for NumberRangeArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut result = ParseResult::new();
        match input.consume_word() {
            Some(token) => {
                parse_range(token, &self.spec, &mut result);
            }
            None => result.err(input.remaining().range(), "NumberRange: expected a range"),
        }
        result
    }
}
