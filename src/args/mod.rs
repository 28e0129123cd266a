//! Argument parsers: one implementation per grammar argument kind.
//!
//! Every kind implements [`ArgumentParser`]. A parser consumes exactly one
//! grammar-level argument from a [`TokenReader`] (several raw tokens for
//! vectors and greedy strings) and leaves the reader just past what it read,
//! on success and on failure alike. Problems never abort the line: they are
//! recorded in the returned [`ParseResult`].
//!
//! Kinds are looked up by their grammar name through [`ParserRegistry`].

mod blockstate;
mod color;
mod entity;
mod item;
mod location;
pub mod nbt;
pub mod number;
mod operator;
mod particle;
pub mod pred;
mod primitive;
pub mod properties;
mod registry;
pub mod resource;
mod slot;
pub mod string_reader;
mod swizzle;
mod time;
mod unquoted;
mod uuid;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::parser::{ParseResult, Reporter, TokenReader};

pub use blockstate::BlockStateArgument;
pub use color::ColorHook;
pub use entity::{EntityArgument, EntityKind};
pub use item::ItemArgument;
pub use location::VectorArgument;
pub use nbt::CompoundTagArgument;
pub use number::{NumberArgument, NumberRangeArgument};
pub use operator::OperatorArgument;
pub use particle::ParticleArgument;
pub use primitive::{BoolArgument, MessageArgument, StringArgument, StringKind};
pub use registry::{ParserFactory, ParserInfo, ParserRegistry, Properties};
pub use resource::ResourceArgument;
pub use slot::SlotHook;
pub use swizzle::SwizzleHook;
pub use time::TimeArgument;
pub use unquoted::{
    EntityAnchorHook, ObjectiveCriteriaArgument, ObjectiveHook, ScoreboardSlotHook, TeamHook,
    UnquotedArgument, UnquotedHook,
};
pub use uuid::UuidArgument;

/// Legal values per property of one block.
pub type BlockProperties = IndexMap<String, Vec<String>>;

/// Read-only lookup tables an argument parser may consult.
pub trait Registries: Sync {
    /// Property table of a namespaced block id, if the block is known.
    fn block_properties(&self, block: &str) -> Option<&BlockProperties>;

    /// Ids registered under a registry name such as `minecraft:particle_type`.
    fn registry(&self, name: &str) -> Option<&FxHashSet<String>>;
}

/// A literal sample offered for completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub value: SmolStr,
    /// Extra tag shown next to the parser name, e.g. a string kind.
    pub tag: Option<SmolStr>,
}

impl Example {
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Self {
            value: value.into(),
            tag: None,
        }
    }

    pub fn tagged(value: impl Into<SmolStr>, tag: impl Into<SmolStr>) -> Self {
        Self {
            value: value.into(),
            tag: Some(tag.into()),
        }
    }
}

/// Common interface of every argument kind.
pub trait ArgumentParser: Send + Sync {
    /// Consume one argument's worth of tokens and validate it.
    fn try_parse(&self, input: &mut TokenReader<'_>, registries: &dyn Registries) -> ParseResult;

    /// Completions for the text under the reader.
    fn suggest(&self, _input: &TokenReader<'_>) -> Vec<String> {
        Vec::new()
    }

    /// Samples used for completion when the registry entry has none.
    fn examples(&self) -> Vec<Example> {
        Vec::new()
    }
}

/// Step over the space between two parts of one argument.
///
/// Returns `false`, consuming nothing, when the next token is not whitespace.
/// A separator other than a single space is reported.
pub(crate) fn skip_separator(input: &mut TokenReader<'_>, res: &mut ParseResult) -> bool {
    let Some(space) = input.current().filter(|t| t.is_whitespace) else {
        return false;
    };
    input.consume();
    if space.text() != " " {
        res.err(space.value.range(), "Extra space in command");
    }
    true
}

#[cfg(test)]
pub(crate) mod test_support {
    use rustc_hash::{FxHashMap, FxHashSet};

    use super::{ArgumentParser, BlockProperties, Registries};
    use crate::parser::{ParseResult, TokenReader, tokenize};

    /// Small in-memory registries for unit tests.
    #[derive(Default)]
    pub struct FakeRegistries {
        pub blocks: FxHashMap<String, BlockProperties>,
        pub registries: FxHashMap<String, FxHashSet<String>>,
    }

    impl FakeRegistries {
        pub fn with_barrel() -> Self {
            let mut barrel = BlockProperties::new();
            barrel.insert(
                "facing".into(),
                ["north", "east", "south", "west", "up", "down"]
                    .map(String::from)
                    .to_vec(),
            );
            barrel.insert("open".into(), vec!["true".into(), "false".into()]);
            let mut me = Self::default();
            me.blocks.insert("minecraft:barrel".into(), barrel);
            me.blocks
                .insert("minecraft:stone".into(), BlockProperties::new());
            me.registries.insert(
                "minecraft:particle_type".into(),
                ["minecraft:flame", "minecraft:block", "minecraft:dust"]
                    .map(String::from)
                    .into_iter()
                    .collect(),
            );
            me
        }
    }

    impl Registries for FakeRegistries {
        fn block_properties(&self, block: &str) -> Option<&BlockProperties> {
            self.blocks.get(block)
        }

        fn registry(&self, name: &str) -> Option<&FxHashSet<String>> {
            self.registries.get(name)
        }
    }

    /// Run `parser` over the whole of `line`; returns the result and the reader index.
    pub fn parse_with(parser: &dyn ArgumentParser, line: &str) -> (ParseResult, usize) {
        let tokens = tokenize(line);
        let mut reader = TokenReader::new(&tokens, line);
        let registries = FakeRegistries::with_barrel();
        let result = parser.try_parse(&mut reader, &registries);
        (result, reader.index())
    }

    pub fn messages(result: &ParseResult) -> Vec<String> {
        result.errors.iter().map(|e| e.message.to_string()).collect()
    }
}
