//! Breadth-first backtracking walk of the command tree over one line.
//!
//! Every hop the walker tries, matching or not, becomes a [`Step`] in a
//! line-scoped arena that records its parent by index. The frontier holds the
//! indices of the steps still worth extending. Each generation:
//!
//! 1. steps whose reader is exhausted leave the frontier, either as terminals
//!    (executable node) or with an "Incomplete command" error;
//! 2. every remaining step tries each effective child on a forked reader;
//! 3. successful attempts consume one separating space and form the next
//!    frontier.
//!
//! The walk ends when the frontier empties or no attempt succeeds. A chosen
//! step's diagnostics and tokens are gathered root to leaf.

use std::fmt::Write as _;

use smol_str::SmolStr;

use crate::base::{TextRange, TextSize};
use crate::parser::{ParseResult, Reporter, TokenReader, tokenize};
use crate::project::{CommandNode, Context};
use crate::syntax::TokenType;

use super::report::{Ambiguity, AmbiguityKind, LineReport, PathEntry, WalkError};

const ROOT: usize = 0;

/// One attempted hop.
struct Step<'g, 't> {
    parent: Option<usize>,
    name: &'g str,
    node: &'g CommandNode,
    range: TextRange,
    /// Reader positioned after this hop's text.
    reader: TokenReader<'t>,
    /// This hop's own diagnostics and tokens.
    result: ParseResult,
    matched: bool,
}

struct Walker<'g, 't> {
    ctx: &'g Context,
    text: &'t str,
    arena: Vec<Step<'g, 't>>,
}

/// Resolve `text` against the command tree of `ctx`.
pub fn walk<'g>(ctx: &'g Context, text: &str) -> Result<LineReport<'g>, WalkError> {
    let tokens = tokenize(text);
    let mut lead = ParseResult::new();
    let start = match tokens.first() {
        Some(first) if first.is_whitespace => {
            lead.warn(first.value.range(), "Unexpected leading whitespace");
            1
        }
        _ => 0,
    };

    let mut walker = Walker {
        ctx,
        text,
        arena: vec![Step {
            parent: None,
            name: "",
            node: ctx.root(),
            range: TextRange::empty(TextSize::from(0)),
            reader: TokenReader::new(&tokens[start..], text),
            result: lead,
            matched: true,
        }],
    };
    walker.run()
}

impl<'g, 't> Walker<'g, 't> {
    fn run(&mut self) -> Result<LineReport<'g>, WalkError> {
        let mut frontier = vec![ROOT];
        let mut terminals = Vec::new();
        let mut generation = 0usize;

        loop {
            let mut live = Vec::new();
            let mut incomplete = Vec::new();
            for id in frontier {
                let step = &mut self.arena[id];
                if !step.reader.at_end() {
                    live.push(id);
                } else if step.node.executable {
                    terminals.push(id);
                } else {
                    step.result
                        .err(TextRange::up_to(TextSize::of(self.text)), "Incomplete command");
                    incomplete.push(id);
                }
            }

            if live.is_empty() {
                if !terminals.is_empty() {
                    break;
                }
                return Ok(self.report_first(incomplete, AmbiguityKind::MultipleIncomplete));
            }

            // Dead ends re-enter `attempts` under their old index; only new steps can survive.
            let first_new = self.arena.len();
            let mut attempts = Vec::new();
            for &id in &live {
                self.expand(id, &mut attempts)?;
            }
            let survivors: Vec<usize> = attempts
                .iter()
                .copied()
                .filter(|&id| id >= first_new && self.arena[id].matched)
                .collect();

            tracing::trace!(
                generation,
                frontier = live.len(),
                attempts = attempts.len(),
                survivors = survivors.len(),
                "walker generation"
            );

            if survivors.is_empty() {
                if !terminals.is_empty() {
                    break;
                }
                return Ok(self.report_failure(attempts));
            }

            for &id in &survivors {
                self.consume_separator(id)?;
            }
            frontier = survivors;
            generation += 1;
        }

        Ok(self.report_first(terminals, AmbiguityKind::MultipleTerminals))
    }

    /// Try every effective child of step `id`, appending the new step indices.
    fn expand(&mut self, id: usize, attempts: &mut Vec<usize>) -> Result<(), WalkError> {
        let node = self.arena[id].node;
        let ctx = self.ctx;
        let root = ctx.root();

        if let Some(target) = &node.redirect {
            if root.resolve(target).is_none() {
                tracing::warn!(target = %target.join(" "), "redirect does not resolve");
            }
        }

        let before = attempts.len();
        for (name, child) in node.effective_children(root) {
            let step = self.attempt(id, name, child)?;
            attempts.push(self.push(step));
        }

        if attempts.len() == before {
            // Nothing can follow this node, yet input remains.
            let step = &mut self.arena[id];
            let rest = step.reader.remaining().range();
            step.result.err(rest, "Expected end of command");
            attempts.push(id);
        }
        Ok(())
    }

    fn attempt(
        &self,
        parent: usize,
        name: &'g str,
        child: &'g CommandNode,
    ) -> Result<Step<'g, 't>, WalkError> {
        let reader = self.arena[parent].reader;
        let token = match reader.current() {
            Some(token) if !token.is_whitespace => token,
            _ => return Err(desync(&reader)),
        };

        let mut step = Step {
            parent: Some(parent),
            name,
            node: child,
            range: token.value.range(),
            reader,
            result: ParseResult::new(),
            matched: false,
        };

        if child.is_literal() {
            if token.text() == name {
                step.result.token(step.range, TokenType::CommandLiteral);
                step.reader.consume();
                step.matched = true;
            }
            return Ok(step);
        }

        let parser_name = child.parser.as_deref().unwrap_or_default();
        let Some(parser) = self.ctx.parsers().create(parser_name, &child.properties) else {
            step.result.err(
                reader.remaining().range(),
                &format!("Parser not implemented for {parser_name}"),
            );
            return Ok(step);
        };

        step.result = parser.try_parse(&mut step.reader, self.ctx);
        step.matched = step.result.success();
        step.range = match step.reader.previous() {
            Some(last) if step.reader.index() > reader.index() => {
                TextRange::new(token.value.start(), last.value.end())
            }
            _ => TextRange::empty(token.value.start()),
        };
        Ok(step)
    }

    fn push(&mut self, step: Step<'g, 't>) -> usize {
        self.arena.push(step);
        self.arena.len() - 1
    }

    /// Step over the single space that separates two arguments.
    fn consume_separator(&mut self, id: usize) -> Result<(), WalkError> {
        let step = &mut self.arena[id];
        let Some(token) = step.reader.current() else {
            return Ok(());
        };
        if !token.is_whitespace {
            return Err(desync(&step.reader));
        }
        if token.text() != " " {
            step.result.err(token.value.range(), "Extra space in command");
        }
        step.reader.consume();
        Ok(())
    }

    /// Report the first of `ids`; the rest become alternatives.
    fn report_first(&self, ids: Vec<usize>, kind: AmbiguityKind) -> LineReport<'g> {
        let chosen = ids.first().copied().unwrap_or(ROOT);
        tracing::debug!(
            candidates = ids.len(),
            ?kind,
            executable = self.arena[chosen].node.executable,
            "resolved command line"
        );
        self.report(chosen, &ids, kind)
    }

    /// Every attempt of the last generation failed.
    ///
    /// The attempt whose reader got furthest is reported; ties go to the
    /// earliest attempt.
    fn report_failure(&mut self, attempts: Vec<usize>) -> LineReport<'g> {
        let mut chosen = attempts.first().copied().unwrap_or(ROOT);
        for &id in &attempts {
            if self.arena[id].reader.index() > self.arena[chosen].reader.index() {
                chosen = id;
            }
        }

        let step = &self.arena[chosen];
        if step.node.is_literal() && !step.matched {
            let message = self.unknown_literal(chosen);
            let rest = self.arena[chosen]
                .parent
                .map(|p| self.arena[p].reader.remaining().range())
                .unwrap_or(self.arena[chosen].range);
            self.arena[chosen].result.err(rest, &message);
        }

        tracing::debug!(attempts = attempts.len(), "no grammar path matched");
        self.report(chosen, &attempts, AmbiguityKind::MultipleFailures)
    }

    fn unknown_literal(&self, id: usize) -> String {
        let step = &self.arena[id];
        let typed = step
            .parent
            .and_then(|p| self.arena[p].reader.current())
            .map(|t| t.text())
            .unwrap_or_default();
        let mut message = format!("Unknown literal '{typed}', expected one of ");
        let parent = step.parent.map_or(step.node, |p| self.arena[p].node);
        let literals = parent
            .effective_children(self.ctx.root())
            .filter(|(_, child)| child.is_literal());
        for (i, (name, _)) in literals.enumerate() {
            if i > 0 {
                message.push_str(", ");
            }
            let _ = write!(message, "{name}");
        }
        message
    }

    fn report(&self, chosen: usize, candidates: &[usize], kind: AmbiguityKind) -> LineReport<'g> {
        let chain = self.chain(chosen);

        let mut diagnostics = Vec::new();
        let mut tokens = Vec::new();
        for &id in &chain {
            let result = &self.arena[id].result;
            diagnostics.extend(result.diagnostics().cloned());
            tokens.extend(result.sorted_tokens());
        }

        let alternatives: Vec<_> = candidates
            .iter()
            .filter(|&&id| id != chosen)
            .map(|&id| self.path(id))
            .collect();

        LineReport {
            diagnostics,
            tokens,
            path: self.path(chosen),
            success: kind == AmbiguityKind::MultipleTerminals,
            ambiguity: (!alternatives.is_empty()).then_some(Ambiguity { kind, alternatives }),
        }
    }

    /// Step indices from the root down to `id`, root included.
    fn chain(&self, id: usize) -> Vec<usize> {
        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.arena[current].parent {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    fn path(&self, id: usize) -> Vec<PathEntry<'g>> {
        self.chain(id)
            .into_iter()
            .filter(|&i| i != ROOT)
            .map(|i| {
                let step = &self.arena[i];
                PathEntry {
                    name: SmolStr::new(step.name),
                    range: step.range,
                    node: step.node,
                    matched: step.matched,
                }
            })
            .collect()
    }
}

fn desync(reader: &TokenReader<'_>) -> WalkError {
    WalkError::TokenizerDesync {
        offset: u32::from(reader.offset()),
    }
}
