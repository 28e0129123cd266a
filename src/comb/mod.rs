//! Parser combinators for small ad hoc grammars.
//!
//! A combinator reads a prefix of a [`RangeString`], reports into a
//! [`Reporter`], and returns the unconsumed remainder plus a keep-going flag.
//! The flag only says whether the enclosing sequence should continue; it does
//! not mean that no error was reported.

mod resource;

use rustc_hash::FxHashMap;

use crate::base::RangeString;
use crate::parser::Reporter;
use crate::syntax::TokenType;

pub use resource::{NAMESPACE_OR_PATH, PATH, parse_resource_location};

/// Remaining input and whether to keep parsing.
pub type CombResult<'s> = (RangeString<'s>, bool);

/// Named slices captured while a combinator runs.
#[derive(Debug, Default)]
pub struct CombContext<'s> {
    data: FxHashMap<&'static str, RangeString<'s>>,
}

impl<'s> CombContext<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<RangeString<'s>> {
        self.data.get(name).copied()
    }

    pub fn insert(&mut self, name: &'static str, value: RangeString<'s>) {
        self.data.insert(name, value);
    }
}

/// A parser combinator.
pub trait Comb: Send + Sync {
    fn run<'s>(
        &self,
        report: &mut dyn Reporter,
        input: RangeString<'s>,
        ctx: &mut CombContext<'s>,
    ) -> CombResult<'s>;
}

impl<F> Comb for F
where
    F: for<'s> Fn(&mut dyn Reporter, RangeString<'s>, &mut CombContext<'s>) -> CombResult<'s>
        + Send
        + Sync,
{
    fn run<'s>(
        &self,
        report: &mut dyn Reporter,
        input: RangeString<'s>,
        ctx: &mut CombContext<'s>,
    ) -> CombResult<'s> {
        self(report, input, ctx)
    }
}

pub type BoxedComb = Box<dyn Comb>;

pub fn boxed(p: impl Comb + 'static) -> BoxedComb {
    Box::new(p)
}

// Pins a closure to the higher-ranked combinator signature.
fn comb<F>(f: F) -> F
where
    F: for<'s> Fn(&mut dyn Reporter, RangeString<'s>, &mut CombContext<'s>) -> CombResult<'s>
        + Send
        + Sync,
{
    f
}

/// The part of `input` that `remaining` no longer contains.
fn consumed<'s>(input: RangeString<'s>, remaining: RangeString<'s>) -> RangeString<'s> {
    input.slice_to(input.len().saturating_sub(remaining.len()))
}

// ============================================================================
// OBSERVERS
// ============================================================================

/// Run `p`, then hand the consumed slice to `consumer`.
pub fn with_parsed<P, C>(p: P, consumer: C, emit_on_fail: bool) -> impl Comb
where
    P: Comb,
    C: for<'s> Fn(&mut dyn Reporter, RangeString<'s>, &mut CombContext<'s>) + Send + Sync,
{
    comb(move |report, input, ctx| {
        let (remaining, ok) = p.run(report, input, ctx);
        if emit_on_fail || ok {
            consumer(report, consumed(input, remaining), ctx);
        }
        (remaining, ok)
    })
}

/// Emit a semantic token over whatever `p` consumed.
pub fn emit_semantic_token(p: impl Comb, kind: TokenType, emit_on_fail: bool) -> impl Comb {
    with_parsed(
        p,
        move |report, slice, _| report.token(slice.range(), kind),
        emit_on_fail,
    )
}

/// Record whatever `p` consumed under `name` in the context.
pub fn store_to(p: impl Comb, name: &'static str, emit_on_fail: bool) -> impl Comb {
    with_parsed(p, move |_, slice, ctx| ctx.insert(name, slice), emit_on_fail)
}

// ============================================================================
// CONTROL FLOW
// ============================================================================

/// Run parsers in sequence, stopping at the first that says stop.
///
/// With `exit_on_empty`, the sequence also ends successfully once the input
/// is exhausted.
pub fn chain(exit_on_empty: bool, parsers: Vec<BoxedComb>) -> impl Comb {
    comb(move |report, mut input, ctx| {
        for p in &parsers {
            let (remaining, ok) = p.run(report, input, ctx);
            if !ok {
                return (remaining, false);
            }
            input = remaining;
            if exit_on_empty && input.is_empty() {
                return (input, true);
            }
        }
        (input, true)
    })
}

/// On failure, resynchronize with `recovery` and keep going.
pub fn recover<P, R>(p: P, recovery: R) -> impl Comb
where
    P: Comb,
    R: for<'s> Fn(RangeString<'s>) -> RangeString<'s> + Send + Sync,
{
    comb(move |report, input, ctx| {
        let (remaining, ok) = p.run(report, input, ctx);
        if ok {
            (remaining, true)
        } else {
            (recovery(remaining), true)
        }
    })
}

/// On failure, skip ahead to the first character matching `stop`.
pub fn recover_to_matching<P, S>(p: P, stop: S) -> impl Comb
where
    P: Comb,
    S: Fn(char) -> bool + Send + Sync,
{
    recover(p, move |s| s.take_while(|c| !stop(c)).1)
}

/// Run `p` only when `predicate` holds for the input; otherwise succeed without consuming.
pub fn parse_if<P, Q>(p: P, predicate: Q) -> impl Comb
where
    P: Comb,
    Q: Fn(&str) -> bool + Send + Sync,
{
    comb(move |report, input, ctx| {
        if predicate(input.as_str()) {
            p.run(report, input, ctx)
        } else {
            (input, true)
        }
    })
}

/// On failure, rewind to the original input and keep going.
pub fn skip_if_fail(p: impl Comb) -> impl Comb {
    comb(move |report, input, ctx| {
        let (remaining, ok) = p.run(report, input, ctx);
        if ok { (remaining, true) } else { (input, true) }
    })
}

/// Strip `prefix` when present, then run `p`.
pub fn consume_if(p: impl Comb, prefix: &'static str) -> impl Comb {
    comb(move |report, input, ctx| {
        let input = input.strip_prefix(prefix).unwrap_or(input);
        p.run(report, input, ctx)
    })
}

// ============================================================================
// EXPECTATIONS
// ============================================================================

/// Report `message` over any input `p` leaves behind.
pub fn expect_empty(p: impl Comb, message: &'static str) -> impl Comb {
    comb(move |report, input, ctx| {
        let (remaining, ok) = p.run(report, input, ctx);
        if ok && !remaining.is_empty() {
            report.err(remaining.range(), message);
        }
        (remaining, ok)
    })
}

/// Require `prefix`, report `message` when it is missing, then run `p` after it.
pub fn expect_prefix(p: impl Comb, prefix: &'static str, message: &'static str) -> impl Comb {
    comb(move |report, input, ctx| match input.strip_prefix(prefix) {
        Some(rest) => p.run(report, rest, ctx),
        None => {
            let width = input
                .as_str()
                .chars()
                .take(prefix.chars().count())
                .map(char::len_utf8)
                .sum();
            report.err(input.slice_to(width).range(), message);
            p.run(report, input, ctx)
        }
    })
}

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Consume the longest prefix of characters matching `predicate`.
pub fn consume_while<P>(predicate: P) -> impl Comb
where
    P: Fn(char) -> bool + Send + Sync,
{
    comb(move |_, input, _| (input.take_while(&predicate).1, true))
}

/// [`consume_while`], with `validation` deciding whether to keep going.
pub fn consume_while_validated<P, V>(predicate: P, validation: V) -> impl Comb
where
    P: Fn(char) -> bool + Send + Sync,
    V: for<'s> Fn(&mut dyn Reporter, RangeString<'s>) -> bool + Send + Sync,
{
    comb(move |report, input, _| {
        let (taken, rest) = input.take_while(&predicate);
        (rest, validation(report, taken))
    })
}
