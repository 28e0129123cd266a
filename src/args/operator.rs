//! `minecraft:operation`: scoreboard arithmetic operators.

use crate::parser::{ParseResult, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::{ArgumentParser, Example, Registries};

const OPERATORS: [&str; 9] = ["=", "+=", "-=", "*=", "/=", "%=", "<", ">", "><"];

#[derive(Debug, Clone, Default)]
pub struct OperatorArgument;

impl ArgumentParser for OperatorArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        let Some(op) = input.consume_word() else {
            return res.with_error(input.remaining().range(), "OperatorArgument: expected an operator");
        };
        res.token(op.range(), TokenType::Operator);
        if !OPERATORS.contains(&op.as_str()) {
            res.err(
                op.range(),
                &format!("OperatorArgument: unknown operator '{}'", op.as_str()),
            );
        }
        res
    }

    fn examples(&self) -> Vec<Example> {
        OPERATORS.into_iter().map(Example::new).collect()
    }
}
