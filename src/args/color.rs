//! `minecraft:color`: chat colour names.

use crate::base::RangeString;
use crate::parser::{ParseResult, Reporter};
use crate::syntax::TokenType;

use super::Example;
use super::unquoted::UnquotedHook;

const COLORS: [&str; 17] = [
    "black",
    "darkblue",
    "darkgreen",
    "darkaqua",
    "darkred",
    "darkpurple",
    "gold",
    "gray",
    "darkgray",
    "blue",
    "green",
    "aqua",
    "red",
    "lightpurple",
    "yellow",
    "white",
    "reset",
];

// Case and `_` are ignored on both sides of the comparison, so `dark_blue`,
// `DarkBlue` and `darkblue` are the same colour. Any other character is kept
// and fails the lookup.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Default)]
pub struct ColorHook;

impl UnquotedHook for ColorHook {
    fn check(&self, value: RangeString<'_>, res: &mut ParseResult) {
        let name = normalize(value.as_str());
        if !COLORS.contains(&name.as_str()) {
            res.err(value.range(), &format!("ColorArgument: unknown color '{name}'"));
        }
        res.token(value.range(), TokenType::Color);
    }

    fn examples(&self) -> Vec<Example> {
        ["red", "dark_blue", "light_purple", "reset"]
            .into_iter()
            .map(Example::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::UnquotedArgument;
    use crate::args::test_support::{messages, parse_with};
    use rstest::rstest;

    #[rstest]
    #[case("red")]
    #[case("dark_blue")]
    #[case("DARK_BLUE")]
    #[case("LightPurple")]
    #[case("dark_red")]
    #[case("reset")]
    fn test_known_colors(#[case] text: &str) {
        let (result, _) = parse_with(&UnquotedArgument::<ColorHook>::new(), text);
        assert!(result.success(), "{text}");
        assert_eq!(result.tokens[0].kind, TokenType::Color);
    }

    #[test]
    fn test_unknown_color() {
        let (result, _) = parse_with(&UnquotedArgument::<ColorHook>::new(), "Pink");
        assert_eq!(messages(&result), ["ColorArgument: unknown color 'pink'"]);
        assert_eq!(result.tokens.len(), 1);
    }

    #[rstest]
    #[case("red9", "ColorArgument: unknown color 'red9'")]
    #[case("r.e.d", "ColorArgument: unknown color 'r.e.d'")]
    #[case("1red", "ColorArgument: unknown color '1red'")]
    #[case("dark-red", "ColorArgument: unknown color 'dark-red'")]
    fn test_stray_characters_are_not_ignored(#[case] text: &str, #[case] message: &str) {
        let (result, _) = parse_with(&UnquotedArgument::<ColorHook>::new(), text);
        assert_eq!(messages(&result), [message]);
    }
}
