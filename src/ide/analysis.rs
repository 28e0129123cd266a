//! Whole-document analysis: one independent walk per line.

use rayon::prelude::*;

use crate::base::{TextRange, TextSize};
use crate::command::{LineReport, WalkError, walk};
use crate::project::Context;
use crate::syntax::{Diagnostic, SemanticToken, TokenType};

use super::semantic_tokens::{LineToken, encode_semantic_tokens};

/// Knobs for [`analyze_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Diagnostics beyond this count are dropped, in document order.
    pub max_problems: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { max_problems: 1000 }
    }
}

/// A diagnostic tagged with its 0-based document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line: u32,
    pub diagnostic: Diagnostic,
}

/// Walk result of one command line of a document.
#[derive(Debug, Clone)]
pub struct ParsedLine<'g> {
    pub line: u32,
    pub report: LineReport<'g>,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentAnalysis<'g> {
    pub diagnostics: Vec<LineDiagnostic>,
    /// Delta-encoded semantic tokens, see [`encode_semantic_tokens`].
    pub tokens: Vec<u32>,
    /// Command lines in document order. Comments and blank lines have none.
    pub lines: Vec<ParsedLine<'g>>,
}

impl<'g> DocumentAnalysis<'g> {
    pub fn report(&self, line: u32) -> Option<&LineReport<'g>> {
        self.lines
            .binary_search_by_key(&line, |parsed| parsed.line)
            .ok()
            .map(|i| &self.lines[i].report)
    }
}

/// Walk a single command line.
pub fn parse_line<'g>(ctx: &'g Context, text: &str) -> Result<LineReport<'g>, WalkError> {
    walk(ctx, text)
}

enum LineKind<'a> {
    Comment(TextRange),
    Command(&'a str),
}

fn classify(text: &str) -> Option<LineKind<'_>> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() || trimmed == "}" {
        return None;
    }
    if trimmed.starts_with('#') {
        let start = TextSize::of(&text[..text.len() - trimmed.len()]);
        return Some(LineKind::Comment(TextRange::new(start, TextSize::of(text))));
    }
    Some(LineKind::Command(text))
}

/// Diagnose and highlight every line of `text`.
///
/// Lines are split on `\n` with trailing whitespace trimmed. Lines starting
/// with `#` are comments; blank lines and a lone `}` are skipped.
pub fn analyze_document<'g>(
    ctx: &'g Context,
    text: &str,
    options: AnalysisOptions,
) -> DocumentAnalysis<'g> {
    let mut comments = Vec::new();
    let mut commands = Vec::new();
    for (n, raw) in text.split('\n').enumerate() {
        let line = n as u32;
        match classify(raw.trim_end()) {
            Some(LineKind::Comment(range)) => comments.push(LineToken {
                line,
                token: SemanticToken {
                    range,
                    kind: TokenType::Comment,
                },
            }),
            Some(LineKind::Command(command)) => commands.push((line, command)),
            None => {}
        }
    }

    let walked: Vec<_> = commands
        .par_iter()
        .map(|&(line, command)| (line, command, parse_line(ctx, command)))
        .collect();

    let mut analysis = DocumentAnalysis::default();
    let mut tokens = comments;
    for (line, command, outcome) in walked {
        match outcome {
            Ok(report) => {
                analysis
                    .diagnostics
                    .extend(report.diagnostics.iter().map(|d| LineDiagnostic {
                        line,
                        diagnostic: d.clone(),
                    }));
                tokens.extend(report.tokens.iter().map(|&token| LineToken { line, token }));
                analysis.lines.push(ParsedLine { line, report });
            }
            Err(err) => {
                tracing::error!(line, %err, "command line could not be walked");
                analysis.diagnostics.push(LineDiagnostic {
                    line,
                    diagnostic: Diagnostic::error(TextRange::up_to(TextSize::of(command)), err.to_string()),
                });
            }
        }
    }

    if analysis.diagnostics.len() > options.max_problems {
        tracing::debug!(
            total = analysis.diagnostics.len(),
            kept = options.max_problems,
            "truncating diagnostics"
        );
        analysis.diagnostics.truncate(options.max_problems);
    }
    analysis.tokens = encode_semantic_tokens(&tokens);
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::from_json(
            r#"{"type": "root", "children": {
                "say": {"type": "literal", "children": {
                    "msg": {"type": "argument", "parser": "minecraft:message", "executable": true}
                }},
                "stop": {"type": "literal", "executable": true}
            }}"#,
            "{}",
            "{}",
        )
        .unwrap()
    }

    #[test]
    fn test_lines_are_classified() {
        let ctx = ctx();
        let doc = "# setup\n\nsay hi\r\n  }\nstop\nsay";
        let analysis = analyze_document(&ctx, doc, AnalysisOptions::default());

        let parsed: Vec<_> = analysis.lines.iter().map(|l| l.line).collect();
        assert_eq!(parsed, [2, 4, 5]);
        assert!(analysis.report(2).is_some_and(|r| r.success));
        assert!(analysis.report(1).is_none());

        assert_eq!(analysis.diagnostics.len(), 1);
        assert_eq!(analysis.diagnostics[0].line, 5);
        assert_eq!(&*analysis.diagnostics[0].diagnostic.message, "Incomplete command");

        // Comment token comes first: line 0, column 0, whole line.
        assert_eq!(
            analysis.tokens[..5],
            [0, 0, 7, TokenType::Comment.to_lsp_index(), 0]
        );
    }

    #[test]
    fn test_max_problems() {
        let ctx = ctx();
        let doc = "nope\nnope\nnope";
        let analysis = analyze_document(&ctx, doc, AnalysisOptions { max_problems: 2 });
        assert_eq!(analysis.diagnostics.len(), 2);
        assert_eq!(analysis.diagnostics[1].line, 1);
    }

    #[test]
    fn test_indented_comment() {
        let ctx = ctx();
        let analysis = analyze_document(&ctx, "  # note", AnalysisOptions::default());
        assert_eq!(analysis.tokens, [0, 2, 6, TokenType::Comment.to_lsp_index(), 0]);
        assert!(analysis.diagnostics.is_empty());
    }
}
