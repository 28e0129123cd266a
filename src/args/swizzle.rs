//! `minecraft:swizzle`: a non-repeating subset of `xyz`.

use rustc_hash::FxHashSet;

use crate::base::RangeString;
use crate::parser::{ParseResult, Reporter};
use crate::syntax::TokenType;

use super::Example;
use super::unquoted::{UnquotedHook, check_each_char};

#[derive(Debug, Default)]
pub struct SwizzleHook;

impl UnquotedHook for SwizzleHook {
    fn check(&self, value: RangeString<'_>, res: &mut ParseResult) {
        let mut seen = FxHashSet::default();
        check_each_char(value, res, |c| {
            if !matches!(c, 'x' | 'y' | 'z') {
                Some(format!(
                    "SwizzleArgument: unexpected character in swizzle: '{c}' (must be x, y, or z)"
                ))
            } else if !seen.insert(c) {
                Some(format!("SwizzleArgument: duplicate character in swizzle: '{c}'"))
            } else {
                None
            }
        });
        res.token(value.range(), TokenType::Swizzle);
    }

    fn check_chars(&self) -> bool {
        false
    }

    fn examples(&self) -> Vec<Example> {
        ["xyz", "x", "xz"].into_iter().map(Example::new).collect()
    }
}
