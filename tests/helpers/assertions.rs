//! Helpers for inspecting parse output.

use mcfunction::args::ArgumentParser;
use mcfunction::command::LineReport;
use mcfunction::parser::{ParseResult, TokenReader, tokenize};
use mcfunction::{TextRange, walk};

use super::fixtures::CTX;

pub fn messages(report: &LineReport<'_>) -> Vec<String> {
    report
        .diagnostics
        .iter()
        .map(|d| d.message.to_string())
        .collect()
}

pub fn error_messages(result: &ParseResult) -> Vec<String> {
    result.errors.iter().map(|e| e.message.to_string()).collect()
}

pub fn span(range: TextRange) -> (u32, u32) {
    (u32::from(range.start()), u32::from(range.end()))
}

pub fn path_names(report: &LineReport<'_>) -> Vec<String> {
    report.path.iter().map(|e| e.name.to_string()).collect()
}

/// Walk `line` against the shared fixture grammar.
pub fn walk_line(line: &str) -> LineReport<'static> {
    walk(&CTX, line).expect("walker stays in step with the tokenizer")
}

/// Run one argument parser over the whole of `line`.
pub fn parse_arg(parser: &dyn ArgumentParser, line: &str) -> (ParseResult, usize) {
    let tokens = tokenize(line);
    let mut reader = TokenReader::new(&tokens, line);
    let result = parser.try_parse(&mut reader, &*CTX);
    (result, reader.index())
}

/// Walk `line` and require a clean, executable resolution.
pub fn assert_clean(line: &str) -> LineReport<'static> {
    let report = walk_line(line);
    assert!(
        report.success && report.diagnostics.is_empty(),
        "{line}: {:?}",
        report.diagnostics
    );
    report
}
