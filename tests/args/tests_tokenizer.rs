//! Offsets survive every slice, and tokens reassemble the line.

use mcfunction::parser::tokenize;
use mcfunction::{RangeString, TextSize};
use rstest::rstest;

fn assert_linear(parent: RangeString<'_>, child: RangeString<'_>) {
    assert!(parent.range().contains_range(child.range()));
    assert_eq!(usize::from(child.range().len()), child.as_str().len());
    let rel = u32::from(child.start() - parent.start()) as usize;
    assert_eq!(&parent.as_str()[rel..rel + child.len()], child.as_str());
}

#[test]
fn test_derived_ranges_stay_inside_parent() {
    let line = "  minecraft:barrel[facing=north]  ";
    let s = RangeString::new(line, TextSize::from(7));

    assert_linear(s, s.trim());
    assert_linear(s, s.trim_start());
    assert_linear(s, s.trim_end());
    assert_linear(s, s.slice(2, 11));
    assert_linear(s, s.slice_from(18));
    assert_linear(s, s.slice_to(5));
    for part in s.trim().split(":") {
        assert_linear(s, part);
    }
    for (_, ch) in s.char_slices() {
        assert_linear(s, ch);
    }
    let (head, tail) = s.trim().take_while(|c| c != '[');
    assert_linear(s, head);
    assert_linear(s, tail);
    assert_eq!(u32::from(head.start()), 9);
    assert_eq!(head.as_str(), "minecraft:barrel");
}

#[rstest]
#[case("say hello world")]
#[case("  leading and  double  spaces ")]
#[case("summon zombie ~ ~ ~ {CustomName:'\"Bob the zombie\"', Tags:[a, b]}")]
#[case("give @p[tag=x, limit=1] stone 1")]
#[case("tellraw @a \"unterminated")]
#[case("")]
fn test_tokens_reassemble_line(#[case] line: &str) {
    let tokens = tokenize(line);
    let joined: String = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(joined, line);
    for pair in tokens.windows(2) {
        assert_ne!(pair[0].is_whitespace, pair[1].is_whitespace);
        assert_eq!(pair[0].value.end(), pair[1].value.start());
    }
}

#[test]
fn test_bracket_nesting_keeps_spaces() {
    let tokens = tokenize("foo{bar: [1, 2]} baz");
    let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, ["foo{bar: [1, 2]}", " ", "baz"]);
}
