//! Completion suggestions for a command line.

use std::sync::Arc;

use crate::base::TextSize;
use crate::command::LineReport;
use crate::project::{CommandNode, Context};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    /// A literal keyword of the grammar.
    Literal,
    /// A sample value for an argument.
    Value,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Literal => 3, // Function
            CompletionKind::Value => 21,  // Constant
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Originating parser, e.g. `brigadier:string (word)`.
    pub detail: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            sort_priority: 100,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Suggestions for the caret at byte offset `caret` of `line`.
///
/// Candidates are the children of the deepest matched hop of `report` that
/// ends before the caret, or of the root when there is none. Only candidates
/// starting with the word under the caret are kept.
pub fn completions(
    ctx: &Context,
    line: &str,
    report: Option<&LineReport<'_>>,
    caret: u32,
) -> Vec<CompletionItem> {
    let caret = (caret as usize).min(line.len());
    let before = line.get(..caret).unwrap_or(line);
    let partial = before.rsplit(' ').next().unwrap_or_default();

    let root = ctx.root();
    let node = report
        .and_then(|r| r.entry_before(TextSize::of(before)))
        .map_or(root, |entry| entry.node);

    let mut items: Vec<_> = node_candidates(ctx, node)
        .into_iter()
        .filter(|item| item.label.starts_with(partial))
        .collect();
    items.sort_by_key(|item| item.sort_priority);
    items.dedup_by(|a, b| a.label == b.label && a.detail == b.detail);
    items
}

fn node_candidates(ctx: &Context, node: &CommandNode) -> Vec<CompletionItem> {
    let mut items = Vec::new();
    for (name, child) in node.effective_children(ctx.root()) {
        if child.is_literal() {
            items.push(CompletionItem::new(name, CompletionKind::Literal).with_priority(10));
            continue;
        }

        let Some(parser) = child.parser.as_deref() else {
            continue;
        };
        let Some(info) = ctx.parsers().get(parser) else {
            continue;
        };
        if !info.samples.is_empty() {
            items.extend(info.samples.iter().map(|sample| {
                CompletionItem::new(*sample, CompletionKind::Value)
                    .with_detail(parser)
                    .with_priority(50)
            }));
            continue;
        }

        for example in (info.factory)(&child.properties).examples() {
            let detail = match &example.tag {
                Some(tag) => format!("{parser} ({tag})"),
                None => parser.to_string(),
            };
            items.push(
                CompletionItem::new(example.value.as_str(), CompletionKind::Value)
                    .with_detail(detail)
                    .with_priority(50),
            );
        }
    }
    items
}
