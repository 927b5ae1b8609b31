//! Static grammar diagnostics
//!
//! `verify` inspects a compiled grammar table without parsing anything. It is
//! a grammar-authoring aid: the most common authoring mistake is referencing
//! a rule that was never declared, which silently becomes a terminal pattern
//! and matches the rule's *name* instead of its language. Such tokens show up
//! under `suspects`.

use crate::peg::grammar::Grammar;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Symbol sets produced by [`verify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// Declared rule names.
    pub nonterminals: BTreeSet<String>,
    /// Right-hand-side atoms that are not declared rules.
    pub terminals: BTreeSet<String>,
    /// Terminals whose text is purely alphanumeric, heuristically likely to
    /// be misspelled rule references rather than intended patterns.
    pub suspects: BTreeSet<String>,
    /// Declared rules never referenced on any right-hand side. The intended
    /// start symbol lands here too; anything else is a dead rule.
    pub orphans: BTreeSet<String>,
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Non-Term = {}", join(&self.nonterminals))?;
        writeln!(f, "Terminals = {}", join(&self.terminals))?;
        writeln!(f, "Suspects = {}", join(&self.suspects))?;
        write!(f, "Orphans = {}", join(&self.orphans))
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Report terminals, suspect tokens, and orphan rules for a compiled grammar.
///
/// Pure and read-only; has no effect on parsing.
pub fn verify(grammar: &Grammar) -> VerifyReport {
    let nonterminals: BTreeSet<String> = grammar.rule_names().map(str::to_string).collect();
    let rhs: BTreeSet<String> = grammar.rhs_atoms().map(str::to_string).collect();

    let terminals: BTreeSet<String> = rhs.difference(&nonterminals).cloned().collect();
    let suspects: BTreeSet<String> = terminals
        .iter()
        .filter(|t| !t.is_empty() && t.chars().all(char::is_alphanumeric))
        .cloned()
        .collect();
    let orphans: BTreeSet<String> = nonterminals.difference(&rhs).cloned().collect();

    VerifyReport {
        nonterminals,
        terminals,
        suspects,
        orphans,
    }
}
