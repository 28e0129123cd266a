//! `minecraft:item_stack` and `minecraft:item_predicate`.

use crate::parser::{ParseResult, PrefixedReporter, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::nbt::parse_whole_compound_tag;
use super::resource::parse_resource;
use super::{ArgumentParser, Example, Registries};

/// An item id with an optional compound-tag suffix.
#[derive(Debug, Clone)]
pub struct ItemArgument {
    allow_tag: bool,
}

impl ItemArgument {
    pub fn new(allow_tag: bool) -> Self {
        Self { allow_tag }
    }

    fn name(&self) -> &'static str {
        if self.allow_tag {
            "ItemPredicate: "
        } else {
            "ItemStack: "
        }
    }
}

impl ArgumentParser for ItemArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        let mut report = PrefixedReporter::new(&mut res, self.name());
        let Some(value) = input.consume_word() else {
            report.err(input.remaining().range(), "missing item id");
            return res;
        };

        let (id, nbt) = value.take_while(|c| c != '[' && c != '{');
        if id.is_empty() {
            report.err(value.range(), "missing item id");
            return res;
        }
        parse_resource(&mut report, self.allow_tag, id, TokenType::Resource);
        if !nbt.is_empty() {
            parse_whole_compound_tag(nbt, &mut report);
        }
        res
    }

    fn examples(&self) -> Vec<Example> {
        let mut examples = vec![
            Example::new("diamond_sword"),
            Example::new("minecraft:stone{CustomModelData:1}"),
        ];
        if self.allow_tag {
            examples.push(Example::new("#minecraft:planks"));
        }
        examples
    }
}
