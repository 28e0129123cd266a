//! The predicate table behind `@e[...]`.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::args::nbt::parse_whole_compound_tag;
use crate::args::properties::{PropertyMessages, PropertySpec, any_text, parse_properties};
use crate::args::resource::parse_resource;
use crate::args::string_reader::{ReadResult, Stop, StringReader};
use crate::base::RangeString;
use crate::base::constants::is_unquoted_str;
use crate::comb::{Comb, CombContext, parse_resource_location};
use crate::parser::Reporter;
use crate::syntax::TokenType;

use super::common::{
    EnumPredicate, FloatPredicate, NegatablePredicate, NonNegativeIntPredicate, PredicateParser,
    RangePredicate,
};

/// One row of the predicate table.
pub struct PredicateEntry {
    pub key: &'static str,
    pub parser: &'static dyn PredicateParser,
    /// Values offered for completion.
    pub samples: &'static [&'static str],
}

const FLOAT_SAMPLES: &[&str] = &["0", "1234", "+12.34"];
const FLOAT_RANGE_SAMPLES: &[&str] = &["0", "12", "12..34", "..12", "12..", "1.4..2.3"];
const INT_RANGE_SAMPLES: &[&str] = &["0", "12", "12..34", "..12", "12.."];

// ============================================================================
// SCORES
// ============================================================================

/// `scores={name=range,...}`.
struct ScoresPredicate;

const SCORES_SPEC: PropertySpec = PropertySpec {
    open: '{',
    close: '}',
    key_valid: is_unquoted_str,
    value_valid: any_text,
    allow_empty_key: false,
    allow_empty_value: false,
    key_token: TokenType::ScoreboardId,
    messages: PropertyMessages {
        unclosed: "missing closing '}' in score predicate",
        bad_key: "illegal score name",
        bad_value: "illegal score value",
        empty_key: "score name cannot be empty",
        empty_value: "score value cannot be empty",
        no_eq: "missing '='",
        extra_comma: "extra comma in score predicate",
    },
};

const SCORE_RANGE: RangePredicate = RangePredicate {
    is_int: true,
    allow_negative: true,
};

impl PredicateParser for ScoresPredicate {
    fn parse(&self, value: RangeString<'_>, report: &mut dyn Reporter) {
        if !value.starts_with("{") {
            report.err(value.range(), "missing '{' in score predicate");
            return;
        }
        if !value.ends_with("}") {
            report.err(value.range(), "missing closing '}' in score predicate");
            return;
        }

        let Some(scores) = parse_properties(value, report, &SCORES_SPEC) else {
            return;
        };
        if !scores.rest.is_empty() {
            report.err(scores.rest.range(), "unexpected characters after score predicate");
        }
        for (_, range) in scores.entries {
            SCORE_RANGE.parse(range, report);
        }
    }
}

// ============================================================================
// ADVANCEMENTS
// ============================================================================

/// `advancements={id=bool, id={criterion=bool,...}, ...}`.
struct AdvancementsPredicate;

struct AdvancementReader<'s, 'r> {
    r: StringReader<'s, 'r>,
}

impl<'s> AdvancementReader<'s, '_> {
    fn read_resource(&mut self) -> RangeString<'s> {
        let input = self.r.rest();
        let mut ctx = CombContext::new();
        let (after, _) = parse_resource_location().run(self.r.res, input, &mut ctx);
        self.r.seek_to(after);
        input.slice_to(input.len() - after.len())
    }

    fn read_boolean(&mut self) {
        let value = self.r.read_unquoted();
        if !matches!(value.as_str(), "true" | "false") {
            self.r.res.err(value.range(), "must be 'true' or 'false'");
        }
        self.r.res.token(value.range(), TokenType::Keyword);
    }

    fn read_criteria(&mut self) -> ReadResult {
        self.r.consume();
        self.r.skip_whitespace();
        while self.r.curr().is_some_and(|c| c != '}') {
            let criterion = self.r.read_unquoted();
            if criterion.is_empty() {
                let here = self.r.curr_range().range();
                self.r.res.err(here, "expected criterion name");
                return Err(Stop);
            }
            self.r.res.token(criterion.range(), TokenType::String);
            self.r.skip_whitespace();
            if !self.r.expect('=', Some(TokenType::Operator)) {
                return Err(Stop);
            }
            self.r.skip_whitespace();
            self.read_boolean();
            self.r.skip_whitespace();
            if self.r.curr() != Some(',') {
                break;
            }
            self.r.consume();
            self.r.skip_whitespace();
        }
        if !self.r.expect('}', None) {
            return Err(Stop);
        }
        Ok(())
    }

    fn read(&mut self) -> ReadResult {
        if !self.r.expect('{', None) {
            return Err(Stop);
        }
        self.r.skip_whitespace();
        while self.r.curr().is_some_and(|c| c != '}') {
            let id = self.read_resource();
            parse_resource(self.r.res, false, id, TokenType::Resource);
            self.r.skip_whitespace();
            if !self.r.expect('=', Some(TokenType::Operator)) {
                return Err(Stop);
            }
            self.r.skip_whitespace();
            if self.r.curr() == Some('{') {
                self.read_criteria()?;
            } else {
                self.read_boolean();
            }
            self.r.skip_whitespace();
            if self.r.curr() != Some(',') {
                break;
            }
            self.r.consume();
            self.r.skip_whitespace();
        }
        if !self.r.expect('}', None) {
            return Err(Stop);
        }
        let rest = self.r.rest();
        if !rest.is_empty() {
            self.r.res.err(rest.range(), "unexpected characters after advancements");
        }
        Ok(())
    }
}

impl PredicateParser for AdvancementsPredicate {
    fn parse(&self, value: RangeString<'_>, report: &mut dyn Reporter) {
        let _ = AdvancementReader {
            r: StringReader::new(value, report),
        }
        .read();
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

fn tag_identifier(value: RangeString<'_>, report: &mut dyn Reporter) {
    if !is_unquoted_str(value.as_str()) {
        report.err(value.range(), "invalid scoreboard tag identifier");
    }
}

fn team_identifier(value: RangeString<'_>, report: &mut dyn Reporter) {
    if !is_unquoted_str(value.as_str()) {
        report.err(value.range(), "invalid scoreboard team identifier");
    }
}

fn any_name(_: RangeString<'_>, _: &mut dyn Reporter) {}

fn entity_type(value: RangeString<'_>, report: &mut dyn Reporter) {
    parse_resource(report, true, value, TokenType::Resource);
}

fn predicate_id(value: RangeString<'_>, report: &mut dyn Reporter) {
    parse_resource(report, false, value, TokenType::Resource);
}

fn compound_tag(value: RangeString<'_>, report: &mut dyn Reporter) {
    parse_whole_compound_tag(value, report);
}

// ============================================================================
// TABLE
// ============================================================================

const fn float(key: &'static str) -> PredicateEntry {
    PredicateEntry {
        key,
        parser: &FloatPredicate,
        samples: FLOAT_SAMPLES,
    }
}

/// Every entry of the predicate table.
pub static ENTITY_PREDICATES: &[PredicateEntry] = &[
    float("x"),
    float("y"),
    float("z"),
    float("dx"),
    float("dy"),
    float("dz"),
    float("x_rotation"),
    float("y_rotation"),
    PredicateEntry {
        key: "distance",
        parser: &RangePredicate {
            is_int: false,
            allow_negative: false,
        },
        samples: FLOAT_RANGE_SAMPLES,
    },
    PredicateEntry {
        key: "level",
        parser: &RangePredicate {
            is_int: true,
            allow_negative: false,
        },
        samples: INT_RANGE_SAMPLES,
    },
    PredicateEntry {
        key: "scores",
        parser: &ScoresPredicate,
        samples: &["{}", "{foo=1}", "{foo=1..,bar=..-2}"],
    },
    PredicateEntry {
        key: "tag",
        parser: &NegatablePredicate {
            allow_empty: true,
            validate: tag_identifier,
            token: Some(TokenType::ScoreboardId),
        },
        samples: &["foo", "!foo", ""],
    },
    PredicateEntry {
        key: "team",
        parser: &NegatablePredicate {
            allow_empty: true,
            validate: team_identifier,
            token: Some(TokenType::ScoreboardId),
        },
        samples: &["red", "!red", ""],
    },
    PredicateEntry {
        key: "name",
        parser: &NegatablePredicate {
            allow_empty: true,
            validate: any_name,
            token: Some(TokenType::String),
        },
        samples: &["Steve", "!Steve"],
    },
    PredicateEntry {
        key: "gamemode",
        parser: &NegatablePredicate {
            allow_empty: false,
            validate: one_of!(
                "unknown gamemode",
                ["creative", "adventure", "survival", "spectator"]
            ),
            token: Some(TokenType::Enum),
        },
        samples: &["creative", "adventure", "survival", "spectator", "!creative"],
    },
    PredicateEntry {
        key: "limit",
        parser: &NonNegativeIntPredicate,
        samples: &["1", "10"],
    },
    PredicateEntry {
        key: "sort",
        parser: &EnumPredicate {
            validate: one_of!(
                "unknown sorting mode",
                ["nearest", "furthest", "random", "arbitrary"]
            ),
            token: TokenType::Enum,
        },
        samples: &["nearest", "furthest", "random", "arbitrary"],
    },
    PredicateEntry {
        key: "type",
        parser: &NegatablePredicate {
            allow_empty: false,
            validate: entity_type,
            token: None,
        },
        samples: &["minecraft:zombie", "!player", "#minecraft:skeletons"],
    },
    PredicateEntry {
        key: "predicate",
        parser: &NegatablePredicate {
            allow_empty: false,
            validate: predicate_id,
            token: None,
        },
        samples: &["foo:bar", "!foo:bar"],
    },
    PredicateEntry {
        key: "nbt",
        parser: &NegatablePredicate {
            allow_empty: false,
            validate: compound_tag,
            token: None,
        },
        samples: &["{}", "!{Tags:[\"a\"]}"],
    },
    PredicateEntry {
        key: "advancements",
        parser: &AdvancementsPredicate,
        samples: &["{minecraft:story/root=true}"],
    },
    PredicateEntry {
        key: "all_worlds",
        parser: &EnumPredicate {
            validate: one_of!("must be boolean", ["true", "false"]),
            token: TokenType::Keyword,
        },
        samples: &["true", "false"],
    },
];

static BY_KEY: LazyLock<FxHashMap<&'static str, &'static PredicateEntry>> = LazyLock::new(|| {
    ENTITY_PREDICATES
        .iter()
        .map(|entry| (entry.key, entry))
        .collect()
});

/// Look up the predicate registered under `key`.
pub fn entity_predicate(key: &str) -> Option<&'static PredicateEntry> {
    BY_KEY.get(key).copied()
}
