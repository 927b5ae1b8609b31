//! Error types for grammar compilation and parsing

use std::fmt;

/// Errors that can occur while compiling a grammar description.
///
/// Compilation is all-or-nothing: any of these aborts the whole compile and
/// no partially-usable grammar is produced.
#[derive(Debug, Clone)]
pub enum GrammarError {
    /// A description line has no ` => ` separator, or one side of it is empty
    MalformedRule { line: String },
    /// A terminal pattern was rejected by the regex engine
    BadTerminal { atom: String, source: regex::Error },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::MalformedRule { line } => {
                write!(f, "Malformed grammar rule (expected `LHS => RHS`): {}", line)
            }
            GrammarError::BadTerminal { atom, source } => {
                write!(f, "Invalid terminal pattern `{}`: {}", atom, source)
            }
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrammarError::MalformedRule { .. } => None,
            GrammarError::BadTerminal { source, .. } => Some(source),
        }
    }
}

/// Errors that indicate a defect in the grammar itself, surfaced while
/// parsing.
///
/// An input that simply does not match is *not* an error: the engine reports
/// it as a no-match sentinel so that ordered choice can probe alternatives
/// cheaply at every nesting level. The variants here are the cases that must
/// not be silently folded into "no match".
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The recursion-depth guard tripped. The usual cause is a left-recursive
    /// rule, which this engine does not support: a nonterminal that re-invokes
    /// itself at the same position without consuming input recurses forever.
    RecursionLimit { symbol: String, limit: usize },
    /// The start symbol is neither a rule nor a valid terminal pattern
    BadStartPattern { symbol: String, source: regex::Error },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::RecursionLimit { symbol, limit } => {
                write!(
                    f,
                    "Recursion limit ({}) exceeded while resolving `{}`; the grammar is likely left-recursive",
                    limit, symbol
                )
            }
            ParseError::BadStartPattern { symbol, source } => {
                write!(f, "Start symbol `{}` is not a valid pattern: {}", symbol, source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::RecursionLimit { .. } => None,
            ParseError::BadStartPattern { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_error_display() {
        let err = GrammarError::MalformedRule {
            line: "Exp Term".to_string(),
        };
        assert!(format!("{}", err).contains("Exp Term"));
    }

    #[test]
    fn test_recursion_limit_display_names_symbol_and_limit() {
        let err = ParseError::RecursionLimit {
            symbol: "E".to_string(),
            limit: 1000,
        };
        let text = format!("{}", err);
        assert!(text.contains("`E`"));
        assert!(text.contains("1000"));
    }
}
