//! Entity selector predicates: the `key=value` entries inside `@e[...]`.

/// A validation fn accepting exactly the listed words.
macro_rules! one_of {
    ($message:literal, [$($word:literal),+ $(,)?]) => {{
        fn check(value: $crate::base::RangeString<'_>, report: &mut dyn $crate::parser::Reporter) {
            if !matches!(value.as_str(), $($word)|+) {
                report.err(value.range(), $message);
            }
        }
        check
    }};
}

mod common;
mod entity;

pub use common::{
    EnumPredicate, FloatPredicate, NegatablePredicate, NonNegativeIntPredicate, PredicateParser,
    RangePredicate, Validate,
};
pub use entity::{ENTITY_PREDICATES, PredicateEntry, entity_predicate};
