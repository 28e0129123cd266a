//! Completion while a line is being typed.

use mcfunction::ide::{CompletionKind, completions};
use mcfunction::walk;

use crate::helpers::fixtures::CTX;

fn labels_at(line: &str) -> Vec<String> {
    let report = walk(&CTX, line).ok();
    completions(&CTX, line, report.as_ref(), line.len() as u32)
        .iter()
        .map(|i| i.label.to_string())
        .collect()
}

#[test]
fn test_empty_line_offers_every_command() {
    let labels = labels_at("");
    for command in ["say", "stop", "time", "kill", "setblock", "execute"] {
        assert!(labels.iter().any(|l| l == command), "missing {command}");
    }
}

#[test]
fn test_partial_word_filters() {
    assert_eq!(labels_at("se"), ["setblock"]);
    assert_eq!(labels_at("time q"), ["query"]);
}

#[test]
fn test_children_after_space() {
    assert_eq!(labels_at("time "), ["add", "query"]);
    assert_eq!(labels_at("time query "), ["daytime", "gametime"]);
}

#[test]
fn test_redirected_children() {
    assert_eq!(labels_at("execute as @s "), ["as", "run"]);
}

#[test]
fn test_argument_samples_are_tagged() {
    let line = "setblock ";
    let report = walk(&CTX, line).ok();
    let items = completions(&CTX, line, report.as_ref(), 9);
    assert!(items.iter().any(|i| &*i.label == "~ ~ ~"));
    assert!(items.iter().all(|i| i.kind == CompletionKind::Value));
    assert!(
        items
            .iter()
            .all(|i| i.detail.as_deref() == Some("minecraft:block_pos"))
    );
    assert_eq!(items[0].kind.to_lsp(), 21);
}
