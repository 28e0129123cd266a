//! Resolving whole lines against the fixture grammar.

use mcfunction::Severity;
use rstest::rstest;

use crate::helpers::assertions::{assert_clean, messages, path_names, span, walk_line};

#[rstest]
#[case("say hello there")]
#[case("stop")]
#[case("time add 2d")]
#[case("time query daytime")]
#[case("kill")]
#[case("kill @e[type=minecraft:zombie,distance=..10]")]
#[case("setblock ~ ~1 ~ minecraft:barrel[facing=up]")]
#[case("setblock 0 64 0 stone")]
#[case("particle flame")]
#[case("particle dust 1 0 0 1")]
#[case("particle block barrel[open=true]")]
#[case("execute as @a run say hi")]
#[case("execute as @a as @s[tag=boss] run kill @s")]
#[case("execute run execute run stop")]
fn test_clean_lines(#[case] line: &str) {
    assert_clean(line);
}

#[test]
fn test_backtracks_to_second_argument() {
    // `count` rejects a word; `name` accepts it. Nothing from `count` leaks.
    let report = assert_clean("pick abc");
    assert_eq!(path_names(&report), ["pick", "name"]);
    assert!(report.ambiguity.is_none());
}

#[test]
fn test_redirect_path() {
    let report = assert_clean("execute as @a run say hi");
    assert_eq!(
        path_names(&report),
        ["execute", "as", "targets", "run", "say", "message"]
    );
    assert_eq!(span(report.path[2].range), (11, 13));
}

#[test]
fn test_tokens_are_monotonic() {
    let report = assert_clean("execute as @e[tag=a,limit=1] run setblock ~ ~ ~ barrel[open=false]");
    let starts: Vec<_> = report.tokens.iter().map(|t| t.range.start()).collect();
    assert!(starts.windows(2).all(|w| w[0] <= w[1]), "{starts:?}");
}

#[test]
fn test_incomplete_command_spans_line() {
    let report = walk_line("time query");
    assert!(!report.success);
    assert_eq!(messages(&report), ["Incomplete command"]);
    assert_eq!(span(report.diagnostics[0].range), (0, 10));
}

#[test]
fn test_extra_space_is_reported() {
    let report = walk_line("say  hi");
    assert!(report.success);
    assert_eq!(messages(&report), ["Extra space in command"]);
    assert_eq!(span(report.diagnostics[0].range), (3, 5));
}

#[test]
fn test_leading_whitespace_warns() {
    let report = walk_line("  stop");
    assert!(report.success);
    assert_eq!(messages(&report), ["Unexpected leading whitespace"]);
    assert_eq!(report.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn test_unknown_literal_lists_choices() {
    let report = walk_line("time skip");
    assert!(!report.success);
    assert_eq!(
        messages(&report),
        ["Unknown literal 'skip', expected one of add, query"]
    );
    assert_eq!(span(report.diagnostics[0].range), (5, 9));
}

#[test]
fn test_input_after_leaf() {
    let report = walk_line("stop now");
    assert!(!report.success);
    assert_eq!(messages(&report), ["Expected end of command"]);
    assert_eq!(span(report.diagnostics[0].range), (5, 8));
}

#[test]
fn test_argument_error_surfaces() {
    let report = walk_line("setblock 0 0 0 barrel[facing=false]");
    assert!(!report.success);
    assert_eq!(report.errors().count(), 1);
    assert_eq!(path_names(&report), ["setblock", "pos", "block"]);
}

#[test]
fn test_warning_does_not_fail_path() {
    let report = walk_line("particle nope");
    assert!(report.success);
    assert_eq!(messages(&report), ["ParticleArgument: unknown particle type"]);
}

#[test]
fn test_nested_predicate_error_keeps_prefix_and_span() {
    let report = walk_line("kill @e[scores={a=x}]");
    assert!(!report.success);
    assert_eq!(path_names(&report), ["kill", "targets"]);
    assert_eq!(
        messages(&report),
        ["EntityParser (predicate 'scores'): failed to parse integer"]
    );
    // `x` sits at column 18 of the line, not of the argument.
    assert_eq!(span(report.diagnostics[0].range), (18, 19));
}
