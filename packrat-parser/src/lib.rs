//! # packrat
//!
//! A declarative grammar interpreter. A textual grammar description is
//! compiled into an in-memory rule table, and input text is matched against a
//! chosen start symbol by memoized recursive-descent (packrat) parsing,
//! producing a nested parse tree.
//!
//! The formalism is a small parsing expression grammar (PEG): alternatives
//! are tried in declaration order and the first full success is final. The
//! engine is entirely data-driven by the grammar table; the bundled
//! arithmetic and JSON grammars in [grammars](peg::grammars) are ordinary
//! consumers with no special-casing.
//!
//! A grammar description is one rule per line:
//!
//!   Exp     => Term [+-] Exp | Term
//!   Term    => Factor [*/] Term | Factor
//!   Factor  => Var | Num
//!   Var     => [a-zA-Z_]\w*
//!   Num     => [-+]?[0-9]+([.][0-9]*)?
//!
//! Atoms that name another rule are nonterminal references; any other atom
//! is a terminal pattern handed verbatim to the regex engine.

pub mod peg;
