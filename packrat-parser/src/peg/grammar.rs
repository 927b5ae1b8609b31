//! Grammar table construction
//!
//! A grammar description is a small line-oriented language. Each non-blank
//! line declares one rule:
//!
//!   Exp => Term [+-] Exp | Term
//!
//! The left-hand side names a nonterminal; the right-hand side is a list of
//! alternatives separated by ` | `, and each alternative is a
//! whitespace-separated sequence of atoms. An atom equal to some rule name is
//! a nonterminal reference; every other atom is a terminal pattern passed
//! verbatim to the regex engine. There is no separate terminal mini-language.
//!
//! Alternative order is semantic: the engine commits to the first alternative
//! that fully matches, so longer or more specific alternatives must be listed
//! before shorter ones at the same position (`Term [+-] Exp` before `Term`).
//!
//! Compilation strips tabs, trims every produced token, and drops empty
//! pieces. The anchored matcher for every right-hand-side terminal is
//! compiled here as well, so an invalid pattern fails the whole compile and
//! no partially-usable grammar escapes.

use crate::peg::error::GrammarError;
use regex::Regex;
use std::collections::HashMap;

/// Default whitespace-skip pattern, consumed before every terminal match.
pub const DEFAULT_WHITESPACE: &str = r"\s*";

/// Separator between a rule name and its right-hand side.
const RULE_SEPARATOR: &str = " => ";

/// Separator between alternatives on a right-hand side.
const ALTERNATIVE_SEPARATOR: &str = " | ";

/// Type alias for one alternative: an ordered sequence of atom tokens.
pub type Alternative = Vec<String>;

/// An immutable grammar table: rule name -> ordered alternatives.
///
/// The whitespace-skip pattern is fixed per grammar and applied before every
/// terminal match; it is not addressable as a rule.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: HashMap<String, Vec<Alternative>>,
    whitespace: String,
    terminals: HashMap<String, Regex>,
}

impl Grammar {
    /// Compile a description with the default whitespace pattern (`\s*`).
    pub fn from_description(description: &str) -> Result<Self, GrammarError> {
        Self::compile(description, DEFAULT_WHITESPACE)
    }

    /// Compile a textual description into a grammar table.
    ///
    /// Pure function of its inputs. Later rules with the same left-hand side
    /// overwrite earlier ones, as in any table build.
    pub fn compile(description: &str, whitespace: &str) -> Result<Self, GrammarError> {
        let description = description.replace('\t', " ");
        let mut rules: HashMap<String, Vec<Alternative>> = HashMap::new();

        for line in description.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (lhs, rhs) = split_rule(line)?;
            let alternatives = rhs
                .split(ALTERNATIVE_SEPARATOR)
                .map(str::trim)
                .filter(|alt| !alt.is_empty())
                .map(|alt| alt.split_whitespace().map(str::to_string).collect())
                .collect();
            rules.insert(lhs.to_string(), alternatives);
        }

        let terminals = compile_terminals(&rules, whitespace)?;
        Ok(Self {
            rules,
            whitespace: whitespace.to_string(),
            terminals,
        })
    }

    /// The ordered alternatives of a rule, or `None` if `symbol` is not a rule.
    pub fn rule(&self, symbol: &str) -> Option<&[Alternative]> {
        self.rules.get(symbol).map(Vec::as_slice)
    }

    /// Whether `atom` names a declared rule.
    pub fn is_rule(&self, atom: &str) -> bool {
        self.rules.contains_key(atom)
    }

    /// The precompiled anchored matcher for a right-hand-side terminal.
    pub fn terminal(&self, atom: &str) -> Option<&Regex> {
        self.terminals.get(atom)
    }

    /// The whitespace-skip pattern this grammar was compiled with.
    pub fn whitespace(&self) -> &str {
        &self.whitespace
    }

    /// Iterate the declared rule names.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterate every atom appearing on any right-hand side.
    pub fn rhs_atoms(&self) -> impl Iterator<Item = &str> {
        self.rules
            .values()
            .flatten()
            .flatten()
            .map(String::as_str)
    }
}

/// Split one description line into `(lhs, rhs)` at the first ` => `.
fn split_rule(line: &str) -> Result<(&str, &str), GrammarError> {
    line.split_once(RULE_SEPARATOR)
        .map(|(lhs, rhs)| (lhs.trim(), rhs.trim()))
        .filter(|(lhs, rhs)| !lhs.is_empty() && !rhs.is_empty())
        .ok_or_else(|| GrammarError::MalformedRule {
            line: line.to_string(),
        })
}

/// Precompile the anchored matcher for every right-hand-side atom that is not
/// a rule key.
fn compile_terminals(
    rules: &HashMap<String, Vec<Alternative>>,
    whitespace: &str,
) -> Result<HashMap<String, Regex>, GrammarError> {
    let mut terminals = HashMap::new();
    for alternative in rules.values().flatten() {
        for atom in alternative {
            if rules.contains_key(atom) || terminals.contains_key(atom) {
                continue;
            }
            let re = compile_terminal(atom, whitespace).map_err(|source| {
                GrammarError::BadTerminal {
                    atom: atom.clone(),
                    source,
                }
            })?;
            terminals.insert(atom.clone(), re);
        }
    }
    Ok(terminals)
}

/// Build the anchored matcher for one terminal: skip the whitespace pattern,
/// then capture the terminal itself as group 1.
pub(crate) fn compile_terminal(atom: &str, whitespace: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{})({})", whitespace, atom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_single_rule() {
        let g = Grammar::from_description("Num => [0-9]+").unwrap();
        assert!(g.is_rule("Num"));
        assert_eq!(g.rule("Num").unwrap(), &[vec!["[0-9]+".to_string()]]);
        assert!(g.terminal("[0-9]+").is_some());
    }

    #[test]
    fn test_alternatives_keep_declaration_order() {
        let g = Grammar::from_description("Exp => Term [+-] Exp | Term\nTerm => [0-9]+").unwrap();
        let alternatives = g.rule("Exp").unwrap();
        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0], vec!["Term", "[+-]", "Exp"]);
        assert_eq!(alternatives[1], vec!["Term"]);
    }

    #[test]
    fn test_tabs_and_padding_are_stripped() {
        let g = Grammar::from_description("\tNum\t=>\t[0-9]+\t\n\n   \n").unwrap();
        assert!(g.is_rule("Num"));
        assert_eq!(g.rule("Num").unwrap(), &[vec!["[0-9]+".to_string()]]);
    }

    #[test]
    fn test_line_without_separator_is_rejected() {
        let err = Grammar::from_description("Num [0-9]+").unwrap_err();
        assert!(matches!(err, GrammarError::MalformedRule { .. }));
    }

    #[test]
    fn test_empty_rhs_is_rejected() {
        let err = Grammar::from_description("Num => ").unwrap_err();
        assert!(matches!(err, GrammarError::MalformedRule { .. }));
    }

    #[test]
    fn test_duplicate_lhs_last_write_wins() {
        let g = Grammar::from_description("A => [0-9]\nA => [a-z]").unwrap();
        assert_eq!(g.rule("A").unwrap(), &[vec!["[a-z]".to_string()]]);
    }

    #[test]
    fn test_invalid_terminal_pattern_fails_compile() {
        let err = Grammar::from_description("A => [unclosed").unwrap_err();
        assert!(matches!(err, GrammarError::BadTerminal { .. }));
    }

    #[test]
    fn test_nonterminal_references_are_not_compiled_as_terminals() {
        let g = Grammar::from_description("A => B\nB => [0-9]").unwrap();
        assert!(g.terminal("B").is_none());
        assert!(g.terminal("[0-9]").is_some());
    }

    #[test]
    fn test_whitespace_pattern_is_not_a_rule() {
        let g = Grammar::compile("A => [0-9]", r"[ ]*").unwrap();
        assert_eq!(g.whitespace(), r"[ ]*");
        assert!(!g.is_rule(" "));
        assert!(!g.is_rule(r"[ ]*"));
    }
}
