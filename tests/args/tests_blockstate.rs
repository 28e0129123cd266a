//! Block states checked against the fixture block registry.

use mcfunction::args::BlockStateArgument;

use crate::helpers::assertions::{error_messages, parse_arg, span};

fn block_state() -> BlockStateArgument {
    BlockStateArgument::new("BlockState", false)
}

#[test]
fn test_known_properties_are_clean() {
    let (result, _) = parse_arg(&block_state(), "minecraft:barrel[facing=north,open=true]");
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn test_disallowed_value_names_allowed_set() {
    let text = "barrel[facing=false]";
    let (result, _) = parse_arg(&block_state(), text);
    assert_eq!(
        error_messages(&result),
        ["BlockState: unknown block state value 'false' in property 'facing' in block 'minecraft:barrel'. Note: allowed values are north, east, south, west, up, down"]
    );
    assert_eq!(span(result.errors[0].range), (14, 19));
}

#[test]
fn test_duplicate_property_at_second_key() {
    let (result, _) = parse_arg(&block_state(), "minecraft:barrel[facing=north,facing=north]");
    assert_eq!(
        error_messages(&result),
        ["BlockState: duplicate property facing"]
    );
    assert_eq!(span(result.errors[0].range), (30, 36));
}

#[test]
fn test_unknown_block_is_only_a_warning() {
    let (result, _) = parse_arg(&block_state(), "mymod:machine[power=on]");
    assert!(result.success());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        &*result.warnings[0].message,
        "BlockState: unknown block 'mymod:machine'"
    );
}

#[test]
fn test_tag_is_exempt_from_lookup() {
    let (result, _) = parse_arg(&BlockStateArgument::new("BlockPredicate", true), "#minecraft:logs");
    assert!(result.success());
    assert!(result.warnings.is_empty());
}
