//! Building blocks shared by predicate value parsers.

use crate::base::RangeString;
use crate::parser::Reporter;
use crate::syntax::TokenType;

use crate::args::number::{NumberSpec, RangeSpec, parse_number, parse_range};

/// Validates the value of one predicate.
pub trait PredicateParser: Send + Sync {
    fn parse(&self, value: RangeString<'_>, report: &mut dyn Reporter);

    /// Whether `key=` with nothing after it is accepted.
    fn allow_empty(&self) -> bool {
        false
    }
}

/// Extra validation run on a predicate value.
pub type Validate = fn(RangeString<'_>, &mut dyn Reporter);

pub struct FloatPredicate;

impl PredicateParser for FloatPredicate {
    fn parse(&self, value: RangeString<'_>, report: &mut dyn Reporter) {
        parse_number(value, &NumberSpec::new(false, "failed to parse float"), report);
    }
}

pub struct NonNegativeIntPredicate;

impl PredicateParser for NonNegativeIntPredicate {
    fn parse(&self, value: RangeString<'_>, report: &mut dyn Reporter) {
        let spec = NumberSpec {
            min: Some(0.0),
            below_min: Some("expected non-negative integer"),
            ..NumberSpec::new(true, "failed to parse integer")
        };
        parse_number(value, &spec, report);
    }
}

/// `a..b` ranges, integer or float.
pub struct RangePredicate {
    pub is_int: bool,
    pub allow_negative: bool,
}

impl PredicateParser for RangePredicate {
    fn parse(&self, value: RangeString<'_>, report: &mut dyn Reporter) {
        let spec = RangeSpec {
            is_int: self.is_int,
            allow_negative: self.allow_negative,
            parse_fail: if self.is_int {
                "failed to parse integer"
            } else {
                "failed to parse float"
            },
            missing_bounds: "range cannot be just '..'",
            too_many_components: "too many components in range, only one '..' is allowed",
            negative: "value cannot be negative",
        };
        parse_range(value, &spec, report);
    }
}

/// A value that may be negated with a leading `!`.
pub struct NegatablePredicate {
    pub allow_empty: bool,
    pub validate: Validate,
    pub token: Option<TokenType>,
}

impl PredicateParser for NegatablePredicate {
    fn parse(&self, value: RangeString<'_>, report: &mut dyn Reporter) {
        let value = match value.strip_prefix("!") {
            Some(rest) => {
                report.token(value.slice(0, 1).range(), TokenType::Operator);
                rest.trim_start()
            }
            None => value,
        };

        if value.is_empty() {
            if !self.allow_empty {
                report.err(value.range(), "empty ! not allowed");
            }
            return;
        }

        (self.validate)(value, report);
        if let Some(kind) = self.token {
            report.token(value.range(), kind);
        }
    }

    fn allow_empty(&self) -> bool {
        self.allow_empty
    }
}

/// A plain value checked by `validate`, always tokenized as `token`.
pub struct EnumPredicate {
    pub validate: Validate,
    pub token: TokenType,
}

impl PredicateParser for EnumPredicate {
    fn parse(&self, value: RangeString<'_>, report: &mut dyn Reporter) {
        (self.validate)(value, report);
        report.token(value.range(), self.token);
    }
}
