//! Resource locations and number formatting.

use mcfunction::args::{NumberArgument, ResourceArgument};
use mcfunction::TokenType;
use rstest::rstest;

use crate::helpers::assertions::{error_messages, parse_arg, span};

#[rstest]
#[case("minecraft:stone")]
#[case("my_pack:path/to/function")]
#[case("a.b-c:d_e.f/g-h")]
#[case("0:0")]
fn test_valid_resource_is_one_token(#[case] text: &str) {
    let (result, index) = parse_arg(&ResourceArgument::new(false), text);
    assert!(result.success(), "{text}: {:?}", result.errors);
    assert_eq!(index, 1);
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].kind, TokenType::Resource);
    assert_eq!(span(result.tokens[0].range), (0, text.len() as u32));
}

#[rstest]
#[case(
    "a:b:c",
    "ResourceArgument: extra namespace separators found, expected <id> or <ns>:<p>"
)]
#[case(":b", "ResourceArgument: missing namespace in resource")]
#[case("a:", "ResourceArgument: missing path in resource")]
fn test_invalid_resource_has_one_error(#[case] text: &str, #[case] message: &str) {
    let (result, _) = parse_arg(&ResourceArgument::new(false), text);
    assert_eq!(error_messages(&result), [message]);
}

#[test]
fn test_tag_reference_tokens() {
    let (result, _) = parse_arg(&ResourceArgument::new(true), "#minecraft:logs");
    assert!(result.success());
    let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TokenType::Tag, TokenType::Resource]);
    assert_eq!(span(result.tokens[1].range), (1, 15));
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(-42)]
#[case(i64::from(i32::MAX))]
#[case(i64::from(i32::MIN))]
fn test_formatted_integers_reparse(#[case] value: i64) {
    let text = value.to_string();
    let (result, _) = parse_arg(&NumberArgument::new(true, None, None), &text);
    assert!(result.success(), "{text}: {:?}", result.errors);
}

#[rstest]
#[case(0.0)]
#[case(0.1)]
#[case(-3.75)]
#[case(12345.678)]
#[case(1e21)]
fn test_formatted_floats_reparse(#[case] value: f64) {
    let text = value.to_string();
    let (result, _) = parse_arg(&NumberArgument::new(false, None, None), &text);
    assert!(result.success(), "{text}: {:?}", result.errors);
    assert_eq!(result.tokens[0].kind, TokenType::Number);
}
