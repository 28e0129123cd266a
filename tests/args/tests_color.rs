//! Chat colour names resolved through the builtin registry.

use mcfunction::args::{ParserRegistry, Properties};
use rstest::rstest;

use crate::helpers::assertions::{error_messages, parse_arg};

fn color_errors(text: &str) -> Vec<String> {
    let parser = ParserRegistry::builtin()
        .create("minecraft:color", &Properties::new())
        .expect("color is a builtin parser");
    let (result, _) = parse_arg(&*parser, text);
    error_messages(&result)
}

#[rstest]
#[case("red")]
#[case("dark_red")]
#[case("Dark_Red")]
#[case("darkred")]
fn test_known_color(#[case] text: &str) {
    assert!(color_errors(text).is_empty(), "{text}");
}

#[rstest]
#[case("red9")]
#[case("r.e.d")]
#[case("1red")]
#[case("nope")]
fn test_unknown_color(#[case] text: &str) {
    assert_eq!(
        color_errors(text),
        [format!("ColorArgument: unknown color '{text}'")]
    );
}
