//! Memoized parsing engine
//!
//!     This module implements the parsing orchestrator: a recursive-descent
//!     resolver over a compiled [`Grammar`], with ordered choice and a
//!     session-scoped memo table.
//!
//!     Resolution is ordered choice, not general disjunction. A nonterminal's
//!     alternatives are tried in declaration order; the first alternative
//!     whose full atom sequence matches is committed immediately and later
//!     alternatives are never examined. Inside a sequence there is no
//!     resumption: any atom failure abandons the whole alternative. Failure
//!     is a sentinel value (`None`), not an unwound error: ordered choice
//!     probes alternatives constantly and needs "no match" to be free.
//!
//!     Every `(atom, position)` evaluation is memoized for the session, so
//!     the same pair reached through different call paths is computed once.
//!     The memo table lives and dies with one top-level call; see [memo].
//!
//!     One hazard is inherited from the formalism: a left-recursive rule
//!     re-invokes itself at the same position without consuming input and
//!     would recurse forever. The engine performs no cycle detection; an
//!     explicit depth guard turns that defect into
//!     [`ParseError::RecursionLimit`] instead of a stack overflow. Left
//!     recursion is unsupported; rewrite such rules right-recursively.
//!
//! [memo]: crate::peg::memo

use crate::peg::error::ParseError;
use crate::peg::grammar::{compile_terminal, Alternative, Grammar};
use crate::peg::matcher::match_terminal;
use crate::peg::memo::{MemoKey, MemoTable};
use crate::peg::tree::ParseTree;

/// Upper bound on nested atom resolutions for one session.
///
/// Honest grammars stay far below this; a left-recursive rule trips it at
/// once. Parse with [`parse_with_limit`] to raise it for very deeply nested
/// inputs.
pub const DEFAULT_RECURSION_LIMIT: usize = 1000;

/// A successful parse: the tree and the unconsumed tail of the input.
///
/// Partial consumption is permitted; callers wanting whole-input validation
/// must additionally check `remainder.is_empty()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'t> {
    pub tree: ParseTree,
    pub remainder: &'t str,
}

/// Counters accumulated over one parse session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseMetrics {
    /// Atom resolutions actually computed (memo misses).
    pub atoms_evaluated: u64,
    /// Resolutions answered from the memo table.
    pub cache_hits: u64,
    /// Memo lookups that found no entry.
    pub cache_misses: u64,
}

/// Memo key: one atom resolved at one byte offset of the session input.
///
/// Offsets stand in for the exact remaining suffix. Equivalent within a
/// session, which owns exactly one input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AtomAt {
    atom: String,
    pos: usize,
}

impl MemoKey for AtomAt {
    type Owned = AtomAt;

    fn memo_key(&self) -> Option<AtomAt> {
        Some(self.clone())
    }
}

/// Stored outcome of one atom resolution: the subtree and the offset after
/// it, or `None` for a recorded mismatch.
type MemoResult = Option<(ParseTree, usize)>;

/// All mutable state of one top-level parse call.
///
/// Exclusively owned by that call and dropped at its end; nothing here
/// crosses parse invocations.
struct ParseSession<'g, 't> {
    grammar: &'g Grammar,
    text: &'t str,
    memo: MemoTable<AtomAt, MemoResult>,
    depth: usize,
    max_depth: usize,
    atoms_evaluated: u64,
}

impl<'g, 't> ParseSession<'g, 't> {
    fn new(grammar: &'g Grammar, text: &'t str, max_depth: usize) -> Self {
        Self {
            grammar,
            text,
            memo: MemoTable::new(),
            depth: 0,
            max_depth,
            atoms_evaluated: 0,
        }
    }

    fn metrics(&self) -> ParseMetrics {
        ParseMetrics {
            atoms_evaluated: self.atoms_evaluated,
            cache_hits: self.memo.hits(),
            cache_misses: self.memo.misses(),
        }
    }

    /// Resolve one atom at one position, consulting the memo table first.
    fn parse_atom(&mut self, atom: &str, pos: usize) -> Result<MemoResult, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::RecursionLimit {
                symbol: atom.to_string(),
                limit: self.max_depth,
            });
        }

        let key = AtomAt {
            atom: atom.to_string(),
            pos,
        };
        if let Some(entry) = self.memo.get(&key) {
            return Ok(entry.clone());
        }

        self.atoms_evaluated += 1;
        self.depth += 1;
        let result = self.resolve_atom(atom, pos);
        self.depth -= 1;

        let result = result?;
        self.memo.insert(&key, result.clone());
        Ok(result)
    }

    /// Uncached resolution: a rule's alternatives in declared order, or a
    /// terminal match.
    fn resolve_atom(&mut self, atom: &str, pos: usize) -> Result<MemoResult, ParseError> {
        let grammar = self.grammar;
        if let Some(alternatives) = grammar.rule(atom) {
            for alternative in alternatives {
                if let Some((children, next)) = self.parse_sequence(alternative, pos)? {
                    // First full success wins; remaining alternatives are
                    // never examined.
                    return Ok(Some((ParseTree::node(atom, children), next)));
                }
            }
            Ok(None)
        } else {
            self.match_terminal_at(atom, pos)
        }
    }

    /// Walk an alternative's atoms left to right, threading the position.
    /// Any atom failure abandons the whole alternative.
    fn parse_sequence(
        &mut self,
        sequence: &Alternative,
        mut pos: usize,
    ) -> Result<Option<(Vec<ParseTree>, usize)>, ParseError> {
        let mut children = Vec::with_capacity(sequence.len());
        for atom in sequence {
            match self.parse_atom(atom, pos)? {
                Some((tree, next)) => {
                    children.push(tree);
                    pos = next;
                }
                None => return Ok(None),
            }
        }
        Ok(Some((children, pos)))
    }

    fn match_terminal_at(&mut self, atom: &str, pos: usize) -> Result<MemoResult, ParseError> {
        let rest = &self.text[pos..];
        let matched = match self.grammar.terminal(atom) {
            Some(re) => match_terminal(re, rest),
            None => {
                // A start symbol that never appears on a right-hand side has
                // no precompiled matcher; build one on the fly.
                let re = compile_terminal(atom, self.grammar.whitespace()).map_err(|source| {
                    ParseError::BadStartPattern {
                        symbol: atom.to_string(),
                        source,
                    }
                })?;
                match_terminal(&re, rest)
            }
        };
        Ok(matched.map(|(leaf, remainder)| {
            (ParseTree::leaf(leaf), self.text.len() - remainder.len())
        }))
    }
}

/// Parse `text` from `start` using `grammar`.
///
/// Returns `Ok(Some(_))` with the tree and remainder on success, `Ok(None)`
/// when no alternative of the start symbol matches, and `Err(_)` only for
/// grammar-authoring defects (recursion limit, invalid ad-hoc start pattern).
pub fn parse<'t>(
    start: &str,
    text: &'t str,
    grammar: &Grammar,
) -> Result<Option<Match<'t>>, ParseError> {
    parse_with_limit(start, text, grammar, DEFAULT_RECURSION_LIMIT)
}

/// [`parse`] with an explicit recursion-depth limit.
pub fn parse_with_limit<'t>(
    start: &str,
    text: &'t str,
    grammar: &Grammar,
    max_depth: usize,
) -> Result<Option<Match<'t>>, ParseError> {
    parse_with_metrics(start, text, grammar, max_depth).0
}

/// [`parse_with_limit`], also reporting the session's counters.
///
/// Metrics are returned for every outcome, including no-match and errors.
pub fn parse_with_metrics<'t>(
    start: &str,
    text: &'t str,
    grammar: &Grammar,
    max_depth: usize,
) -> (Result<Option<Match<'t>>, ParseError>, ParseMetrics) {
    let mut session = ParseSession::new(grammar, text, max_depth);
    let result = session.parse_atom(start, 0).map(|outcome| {
        outcome.map(|(tree, pos)| Match {
            tree,
            remainder: &text[pos..],
        })
    });
    (result, session.metrics())
}
