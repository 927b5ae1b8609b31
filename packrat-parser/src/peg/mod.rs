//! Main module for the packrat grammar interpreter
//!
//!     The pipeline is short: a description string is compiled into a
//!     [`Grammar`] table, and [`parse`] resolves a start symbol against input
//!     text using that table. Everything else supports those two calls:
//!
//!         1. Compiling: description text -> rule table. See [grammar].
//!         2. Matching: anchored terminal matching with whitespace skip.
//!            See [matcher].
//!         3. Parsing: memoized recursive descent with ordered choice.
//!            See [engine].
//!         4. Diagnostics: static analysis of a compiled table. See [verify].
//!
//!     The memo table in [memo] is the session-scoped cache that gives the
//!     engine its packrat complexity bound, and [tree] defines the parse
//!     tree produced by successful matches.

pub mod engine;
pub mod error;
pub mod grammar;
pub mod grammars;
pub mod matcher;
pub mod memo;
pub mod tree;
pub mod verify;

pub use engine::{parse, parse_with_limit, parse_with_metrics, Match, ParseMetrics};
pub use engine::DEFAULT_RECURSION_LIMIT;
pub use error::{GrammarError, ParseError};
pub use grammar::{Grammar, DEFAULT_WHITESPACE};
pub use tree::ParseTree;
pub use verify::{verify, VerifyReport};
