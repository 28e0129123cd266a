//! Which path is reported when several compete.

use mcfunction::command::AmbiguityKind;
use mcfunction::{Context, walk};

use crate::helpers::assertions::{messages, path_names, walk_line};

#[test]
fn test_first_terminal_wins() {
    // A number is also a valid word.
    let report = walk_line("pick 5");
    assert!(report.success);
    assert_eq!(path_names(&report), ["pick", "count"]);

    let ambiguity = report.ambiguity.expect("two terminals");
    assert_eq!(ambiguity.kind, AmbiguityKind::MultipleTerminals);
    assert_eq!(ambiguity.alternatives.len(), 1);
    assert_eq!(ambiguity.alternatives[0].last().map(|e| e.name.as_str()), Some("name"));
}

#[test]
fn test_failure_ties_go_to_earliest_attempt() {
    let report = walk_line("pick a\"b");
    assert!(!report.success);
    assert_eq!(path_names(&report), ["pick", "count"]);
    assert_eq!(messages(&report), ["IntegerArgument: failed to parse number"]);
    assert_eq!(
        report.ambiguity.map(|a| a.kind),
        Some(AmbiguityKind::MultipleFailures)
    );
}

const COMPETING: &str = r#"{"type": "root", "children": {
    "f": {"type": "literal", "children": {
        "count": {"type": "argument", "parser": "brigadier:integer", "executable": true},
        "pos": {"type": "argument", "parser": "minecraft:vec3", "executable": true}
    }},
    "g": {"type": "literal", "children": {
        "a": {"type": "argument", "parser": "brigadier:string", "properties": {"type": "word"},
              "children": {"x": {"type": "literal", "executable": true}}},
        "b": {"type": "argument", "parser": "brigadier:bool",
              "children": {"y": {"type": "literal", "executable": true}}}
    }}
}}"#;

#[test]
fn test_furthest_failure_wins() {
    let ctx = Context::from_json(COMPETING, "{}", "{}").unwrap();
    // The vector reads all three words before failing; the integer stops at the first.
    let report = walk(&ctx, "f a b c").unwrap();
    let names: Vec<_> = report.path.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["f", "pos"]);
    assert_eq!(report.errors().count(), 3);
    let ambiguity = report.ambiguity.expect("two failed attempts");
    assert_eq!(ambiguity.kind, AmbiguityKind::MultipleFailures);
    assert_eq!(ambiguity.alternatives[0].last().map(|e| e.name.as_str()), Some("count"));
}

#[test]
fn test_first_incomplete_is_reported() {
    let ctx = Context::from_json(COMPETING, "{}", "{}").unwrap();
    let report = walk(&ctx, "g true").unwrap();
    assert!(!report.success);
    let names: Vec<_> = report.path.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["g", "a"]);
    assert_eq!(messages(&report), ["Incomplete command"]);
    assert_eq!(
        report.ambiguity.map(|a| a.kind),
        Some(AmbiguityKind::MultipleIncomplete)
    );
}
