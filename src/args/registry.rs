//! Grammar parser name → argument kind.

use rustc_hash::FxHashMap;
use serde_json::Value;
use smol_str::SmolStr;

use super::{
    ArgumentParser, BlockStateArgument, BoolArgument, ColorHook, CompoundTagArgument,
    EntityAnchorHook, EntityArgument, EntityKind, ItemArgument, MessageArgument, NumberArgument,
    NumberRangeArgument, ObjectiveCriteriaArgument, ObjectiveHook, OperatorArgument,
    ParticleArgument, ResourceArgument, ScoreboardSlotHook, SlotHook, StringArgument, StringKind,
    SwizzleHook, TeamHook, TimeArgument, UnquotedArgument, UuidArgument, VectorArgument,
};

/// The `properties` object attached to a grammar argument node.
pub type Properties = serde_json::Map<String, Value>;

/// Builds a parser instance from a node's properties.
pub type ParserFactory = fn(&Properties) -> Box<dyn ArgumentParser>;

/// A registered argument kind.
#[derive(Clone, Copy)]
pub struct ParserInfo {
    pub factory: ParserFactory,
    /// Completion samples; when empty, the parser's own examples are used.
    pub samples: &'static [&'static str],
}

impl ParserInfo {
    pub const fn new(factory: ParserFactory, samples: &'static [&'static str]) -> Self {
        Self { factory, samples }
    }
}

impl std::fmt::Debug for ParserInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserInfo")
            .field("samples", &self.samples)
            .finish_non_exhaustive()
    }
}

fn number_property(props: &Properties, key: &str) -> Option<f64> {
    props.get(key).and_then(Value::as_f64)
}

fn string_kind(props: &Properties) -> StringKind {
    let name = props.get("type").and_then(Value::as_str).unwrap_or("word");
    StringKind::from_name(name).unwrap_or_else(|| {
        tracing::warn!(kind = name, "unknown brigadier:string type, reading a word");
        StringKind::Word
    })
}

fn boxed(parser: impl ArgumentParser + 'static) -> Box<dyn ArgumentParser> {
    Box::new(parser)
}

const INT_SAMPLES: &[&str] = &["0", "123", "-123"];
const FLOAT_SAMPLES: &[&str] = &["0", "1.2", ".5", "-1", "-.5", "-1234.56"];
const RESOURCE_SAMPLES: &[&str] = &["foo", "foo:bar", "gregtech:tools/axe"];
const TAG_SAMPLES: &[&str] = &["foo", "foo:bar", "#skeletons", "#minecraft:skeletons"];

const BUILTIN: &[(&str, ParserInfo)] = &[
    // vectors
    (
        "minecraft:vec3",
        ParserInfo::new(
            |_| boxed(VectorArgument::new("Vec3Argument", 3, "~^", false)),
            &["0 0 0", "~ ~ ~", "^ ^ ^", "^1 ^ ^-5", "0.1 -0.5 .9", "~0.5 ~1 ~-5"],
        ),
    ),
    (
        "minecraft:vec2",
        ParserInfo::new(
            |_| boxed(VectorArgument::new("Vec2Argument", 2, "~", false)),
            &["0 0", "~ ~", "0.1 -0.5", "~1 ~-2"],
        ),
    ),
    (
        "minecraft:block_pos",
        ParserInfo::new(
            |_| boxed(VectorArgument::new("BlockPosArgument", 3, "~^", true)),
            &["0 0 0", "~ ~ ~", "^ ^ ^", "^1 ^ ^-5", "~0.5 ~1 ~-5"],
        ),
    ),
    (
        "minecraft:column_pos",
        ParserInfo::new(
            |_| boxed(VectorArgument::new("ColumnPosArgument", 2, "~^", true)),
            &["0 0", "~ ~", "~1 ~-2", "^ ^", "^-1 ^0"],
        ),
    ),
    (
        "minecraft:rotation",
        ParserInfo::new(
            |_| boxed(VectorArgument::new("RotationArgument", 2, "~", false)),
            &["0 0", "~ ~", "~-5 ~5"],
        ),
    ),
    (
        "minecraft:angle",
        ParserInfo::new(
            |_| boxed(VectorArgument::new("AngleArgument", 1, "~", false)),
            &["0", "~", "~-5"],
        ),
    ),
    // resources
    (
        "minecraft:resource_location",
        ParserInfo::new(|_| boxed(ResourceArgument::new(false)), RESOURCE_SAMPLES),
    ),
    (
        "minecraft:resource",
        ParserInfo::new(|_| boxed(ResourceArgument::new(false)), RESOURCE_SAMPLES),
    ),
    (
        "minecraft:dimension",
        ParserInfo::new(
            |_| boxed(ResourceArgument::new(false)),
            &["minecraft:overworld", "the_nether", "minecraft:the_end"],
        ),
    ),
    (
        "minecraft:entity_summon",
        ParserInfo::new(
            |_| boxed(ResourceArgument::new(false)),
            &["zombie", "minecraft:armor_stand"],
        ),
    ),
    (
        "minecraft:mob_effect",
        ParserInfo::new(
            |_| boxed(ResourceArgument::new(false)),
            &["speed", "minecraft:night_vision"],
        ),
    ),
    (
        "minecraft:item_enchantment",
        ParserInfo::new(
            |_| boxed(ResourceArgument::new(false)),
            &["sharpness", "minecraft:unbreaking"],
        ),
    ),
    (
        "minecraft:resource_or_tag",
        ParserInfo::new(|_| boxed(ResourceArgument::new(true)), TAG_SAMPLES),
    ),
    (
        "minecraft:function",
        ParserInfo::new(
            |_| boxed(ResourceArgument::new(true)),
            &["foo:bar", "foo:path/to/fn", "#foo:tick"],
        ),
    ),
    (
        "minecraft:uuid",
        ParserInfo::new(
            |_| boxed(UuidArgument),
            &["dd12be42-52a9-4a91-a8a1-11c01849e498"],
        ),
    ),
    (
        "minecraft:time",
        ParserInfo::new(
            |props| {
                let min = props.get("min").and_then(Value::as_i64).unwrap_or(0);
                boxed(TimeArgument::new(min))
            },
            &["0d", "0s", "0t", "0"],
        ),
    ),
    // scoreboard
    (
        "minecraft:objective",
        ParserInfo::new(
            |_| boxed(UnquotedArgument::<ObjectiveHook>::new()),
            &["foo", "012"],
        ),
    ),
    (
        "minecraft:team",
        ParserInfo::new(
            |_| boxed(UnquotedArgument::<TeamHook>::new()),
            &["foo", "123"],
        ),
    ),
    (
        "minecraft:scoreboard_slot",
        ParserInfo::new(
            |_| boxed(UnquotedArgument::<ScoreboardSlotHook>::new()),
            &["sidebar", "foo.bar"],
        ),
    ),
    (
        "minecraft:objective_criteria",
        ParserInfo::new(
            |_| boxed(ObjectiveCriteriaArgument),
            &["foo", "foo.bar.baz", "minecraft:foo"],
        ),
    ),
    (
        "minecraft:swizzle",
        ParserInfo::new(
            |_| boxed(UnquotedArgument::<SwizzleHook>::new()),
            &["xyz", "x"],
        ),
    ),
    (
        "minecraft:item_slot",
        ParserInfo::new(
            |_| boxed(UnquotedArgument::<SlotHook>::new()),
            &["container.5", "12", "weapon"],
        ),
    ),
    (
        "minecraft:operation",
        ParserInfo::new(|_| boxed(OperatorArgument), &["=", ">", "<"]),
    ),
    (
        "minecraft:color",
        ParserInfo::new(
            |_| boxed(UnquotedArgument::<ColorHook>::new()),
            &["red", "green"],
        ),
    ),
    (
        "minecraft:entity_anchor",
        ParserInfo::new(
            |_| boxed(UnquotedArgument::<EntityAnchorHook>::new()),
            &["eyes", "feet"],
        ),
    ),
    // blocks and items
    (
        "minecraft:block_state",
        ParserInfo::new(
            |_| boxed(BlockStateArgument::new("BlockState", false)),
            &["stone", "minecraft:stone", "redstone_wire[power=2]", "chest{Lock:\"a\"}"],
        ),
    ),
    (
        "minecraft:block_predicate",
        ParserInfo::new(
            |_| boxed(BlockStateArgument::new("BlockPredicate", true)),
            &["stone", "#minecraft:logs", "redstone_wire[power=2]"],
        ),
    ),
    (
        "minecraft:item_stack",
        ParserInfo::new(
            |_| boxed(ItemArgument::new(false)),
            &["stick", "minecraft:diamond_sword{Damage:5}"],
        ),
    ),
    (
        "minecraft:item_predicate",
        ParserInfo::new(
            |_| boxed(ItemArgument::new(true)),
            &["stick", "#minecraft:planks"],
        ),
    ),
    (
        "minecraft:particle",
        ParserInfo::new(
            |_| boxed(ParticleArgument),
            &["flame", "dust 1 0 0 1", "block stone"],
        ),
    ),
    (
        "minecraft:nbt_compound_tag",
        ParserInfo::new(|_| boxed(CompoundTagArgument), &["{}", "{foo:1b}"]),
    ),
    (
        "minecraft:message",
        ParserInfo::new(|_| boxed(MessageArgument), &["Hello world"]),
    ),
    // ranges
    (
        "minecraft:int_range",
        ParserInfo::new(
            |_| boxed(NumberRangeArgument::new(true)),
            &["0", "12", "12..34", "..12", "12.."],
        ),
    ),
    (
        "minecraft:float_range",
        ParserInfo::new(
            |_| boxed(NumberRangeArgument::new(false)),
            &["0", "1.5", "1.5..3", "..-2", "0.5.."],
        ),
    ),
    // targets
    (
        "minecraft:entity",
        ParserInfo::new(
            |_| boxed(EntityArgument::new(EntityKind::Entity)),
            &["Player", "0123", "@e", "@e[type=foo]", "dd12be42-52a9-4a91-a8a1-11c01849e498"],
        ),
    ),
    (
        "minecraft:game_profile",
        ParserInfo::new(
            |_| boxed(EntityArgument::new(EntityKind::GameProfile)),
            &["Player", "0123", "dd12be42-52a9-4a91-a8a1-11c01849e498", "@p"],
        ),
    ),
    (
        "minecraft:score_holder",
        ParserInfo::new(
            |_| boxed(EntityArgument::new(EntityKind::ScoreHolder)),
            &["Player", "@s", "*"],
        ),
    ),
    // brigadier
    (
        "brigadier:string",
        ParserInfo::new(|props| boxed(StringArgument::new(string_kind(props))), &[]),
    ),
    (
        "brigadier:bool",
        ParserInfo::new(|_| boxed(BoolArgument), &["true", "false"]),
    ),
    (
        "brigadier:integer",
        ParserInfo::new(
            |props| {
                boxed(NumberArgument::new(
                    true,
                    number_property(props, "min"),
                    number_property(props, "max"),
                ))
            },
            INT_SAMPLES,
        ),
    ),
    (
        "brigadier:long",
        ParserInfo::new(
            |props| {
                boxed(NumberArgument::new(
                    true,
                    number_property(props, "min"),
                    number_property(props, "max"),
                ))
            },
            INT_SAMPLES,
        ),
    ),
    (
        "brigadier:float",
        ParserInfo::new(
            |props| {
                boxed(NumberArgument::new(
                    false,
                    number_property(props, "min"),
                    number_property(props, "max"),
                ))
            },
            FLOAT_SAMPLES,
        ),
    ),
    (
        "brigadier:double",
        ParserInfo::new(
            |props| {
                boxed(NumberArgument::new(
                    false,
                    number_property(props, "min"),
                    number_property(props, "max"),
                ))
            },
            FLOAT_SAMPLES,
        ),
    ),
];

/// Lookup table from grammar parser names to argument kinds.
///
/// [`ParserRegistry::builtin`] knows every kind this crate implements;
/// embedders can add or override kinds with [`ParserRegistry::register`].
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    parsers: FxHashMap<SmolStr, ParserInfo>,
}

impl ParserRegistry {
    /// A registry with no kinds at all.
    pub fn empty() -> Self {
        Self {
            parsers: FxHashMap::default(),
        }
    }

    pub fn builtin() -> Self {
        BUILTIN
            .iter()
            .fold(Self::empty(), |registry, (name, info)| registry.register(name, *info))
    }

    /// Add a kind, replacing any kind already registered under `name`.
    pub fn register(mut self, name: &str, info: ParserInfo) -> Self {
        self.parsers.insert(SmolStr::new(name), info);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParserInfo> {
        self.parsers.get(name)
    }

    /// Instantiate the kind registered under `name`.
    pub fn create(&self, name: &str, props: &Properties) -> Option<Box<dyn ArgumentParser>> {
        self.get(name).map(|info| (info.factory)(props))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
