//! Entity selectors and their predicates.

use mcfunction::TokenType;
use mcfunction::args::{EntityArgument, EntityKind};
use rstest::rstest;

use crate::helpers::assertions::{error_messages, parse_arg, span};

fn entity() -> EntityArgument {
    EntityArgument::new(EntityKind::Entity)
}

#[rstest]
#[case("@e[distance=..1]")]
#[case("@a[level=5..,gamemode=!creative,sort=random]")]
#[case("@e[scores={kills=1..5,deaths=..-1}]")]
#[case("@p[advancements={minecraft:story/mine_stone=true}]")]
#[case("@s[x=1.5,dx=-2,nbt=!{OnGround:1b}]")]
fn test_selectors_without_errors(#[case] text: &str) {
    let (result, _) = parse_arg(&entity(), text);
    assert!(result.errors.is_empty(), "{text}: {:?}", result.errors);
}

#[test]
fn test_unknown_predicate_at_key() {
    let (result, _) = parse_arg(&entity(), "@e[unknown_key=1]");
    assert_eq!(error_messages(&result), ["EntityParser: unknown predicate"]);
    assert_eq!(span(result.errors[0].range), (3, 14));
}

#[test]
fn test_bare_class_marker() {
    let (result, _) = parse_arg(&entity(), "@p");
    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].kind, TokenType::Selector);
    assert_eq!(span(result.tokens[0].range), (0, 2));
}

#[test]
fn test_required_value_spans_gap() {
    let (result, _) = parse_arg(&entity(), "@e[limit=]");
    assert_eq!(
        error_messages(&result),
        ["EntityParser: empty predicate value not allowed"]
    );
}

#[test]
fn test_uuid_then_player_name() {
    let (result, _) = parse_arg(&entity(), "dd12be42-52a9-4a91-a8a1-11c01849e498");
    assert_eq!(result.tokens[0].kind, TokenType::Uuid);

    let (result, _) = parse_arg(&entity(), "Alex_2");
    assert!(result.success());
    assert_eq!(result.tokens[0].kind, TokenType::PlayerName);
}
