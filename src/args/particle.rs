//! `minecraft:particle`: a particle id, plus extra arguments for the
//! particles that take them.

use crate::base::constants::PARTICLE_REGISTRY;
use crate::parser::{ParseResult, PrefixedReporter, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::blockstate::BlockStateArgument;
use super::location::VectorArgument;
use super::resource::parse_resource;
use super::{ArgumentParser, Example, Registries, skip_separator};

/// Extra arguments following a particle id.
enum ParticleExtra {
    BlockState,
    /// RGB colour plus size.
    Dust,
}

fn particle_extra(id: &str) -> Option<ParticleExtra> {
    match id {
        "minecraft:block" | "minecraft:block_marker" | "minecraft:falling_dust" => {
            Some(ParticleExtra::BlockState)
        }
        "minecraft:dust" => Some(ParticleExtra::Dust),
        _ => None,
    }
}

const DUST: VectorArgument = VectorArgument::new("ParticleArgument", 4, "", false);

#[derive(Debug, Clone, Default)]
pub struct ParticleArgument;

impl ArgumentParser for ParticleArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, registries: &dyn Registries) -> ParseResult {
        let mut res = ParseResult::new();
        let Some(arg) = input.consume_word() else {
            return res.with_error(input.remaining().range(), "ParticleArgument: expected a particle");
        };

        let parsed = parse_resource(
            &mut PrefixedReporter::new(&mut res, "ParticleArgument: "),
            false,
            arg,
            TokenType::Resource,
        );
        let Some(id) = parsed.map(|id| id.normalized()) else {
            return res;
        };

        if registries
            .registry(PARTICLE_REGISTRY)
            .is_some_and(|known| !known.contains(&id))
        {
            res.warn(arg.range(), "ParticleArgument: unknown particle type");
            return res;
        }

        let Some(extra) = particle_extra(&id) else {
            return res;
        };
        if !skip_separator(input, &mut res) {
            res.err(arg.range(), "ParticleArgument: expected additional arguments in particle");
            return res;
        }
        let nested = match extra {
            ParticleExtra::BlockState => {
                BlockStateArgument::new("ParticleArgument", false).try_parse(input, registries)
            }
            ParticleExtra::Dust => DUST.try_parse(input, registries),
        };
        res.merge(nested);
        res
    }

    fn examples(&self) -> Vec<Example> {
        ["flame", "minecraft:dust 1 0 0 1", "block stone"]
            .into_iter()
            .map(Example::new)
            .collect()
    }
}
