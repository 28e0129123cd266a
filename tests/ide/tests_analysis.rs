//! Whole documents through the analysis entry point.

use mcfunction::TokenType;
use mcfunction::ide::{AnalysisOptions, analyze_document, parse_line};

use crate::helpers::fixtures::CTX;

const DOCUMENT: &str = "\
# spawn the arena
setblock 0 64 0 barrel[facing=up]

say  ready
time query
kill @e[unknown_key=1]
";

#[test]
fn test_diagnostics_carry_lines() {
    let analysis = analyze_document(&CTX, DOCUMENT, AnalysisOptions::default());
    let found: Vec<_> = analysis
        .diagnostics
        .iter()
        .map(|d| (d.line, d.diagnostic.message.to_string()))
        .collect();
    assert_eq!(
        found,
        [
            (3, "Extra space in command".to_string()),
            (4, "Incomplete command".to_string()),
            (5, "EntityParser: unknown predicate".to_string()),
        ]
    );
}

#[test]
fn test_reports_only_for_command_lines() {
    let analysis = analyze_document(&CTX, DOCUMENT, AnalysisOptions::default());
    let lines: Vec<_> = analysis.lines.iter().map(|l| l.line).collect();
    assert_eq!(lines, [1, 3, 4, 5]);
    assert!(analysis.report(1).is_some_and(|r| r.success));
    assert!(analysis.report(0).is_none());
}

#[test]
fn test_encoded_tokens_start_with_comment() {
    let analysis = analyze_document(&CTX, DOCUMENT, AnalysisOptions::default());
    let data = &analysis.tokens;
    assert_eq!(data.len() % 5, 0);
    assert_eq!(data[..5], [0, 0, 17, TokenType::Comment.to_lsp_index(), 0]);
    // `setblock` opens line 1 at column 0.
    assert_eq!(data[5..10], [1, 0, 8, TokenType::CommandLiteral.to_lsp_index(), 0]);
    assert!(data.chunks(5).all(|q| q[4] == 0));
}

#[test]
fn test_problem_cap() {
    let doc = "nope\n".repeat(20);
    let analysis = analyze_document(&CTX, &doc, AnalysisOptions { max_problems: 5 });
    assert_eq!(analysis.diagnostics.len(), 5);
    assert_eq!(analysis.lines.len(), 20);
}

#[test]
fn test_parse_line_matches_analysis() {
    let report = parse_line(&CTX, "time add 1s").unwrap();
    assert!(report.success);
    let kinds: Vec<_> = report.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenType::CommandLiteral,
            TokenType::CommandLiteral,
            TokenType::Number,
            TokenType::Units,
        ]
    );
}
