//! Property-based tests for the parsing engine
//!
//! These drive the arithmetic grammar with generated expressions and check
//! the engine's laws: determinism across calls, full consumption of
//! well-formed input, and whitespace never leaking into leaves.

use packrat_parser::peg::grammars::ARITHMETIC;
use packrat_parser::peg::{parse, ParseTree};
use proptest::prelude::*;

/// Generate valid variable names
fn var_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Short lowercase names
        "[a-z][a-z0-9_]{0,6}",
        // Leading underscore
        "_[a-zA-Z0-9_]{0,6}",
        // Mixed case
        "[A-Z][a-zA-Z0-9]{0,6}",
    ]
}

/// Generate unsigned numeric literals, optionally with a fraction part
fn num_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,4}", "[0-9]{1,4}\\.[0-9]{0,3}"]
}

fn atom_strategy() -> impl Strategy<Value = String> {
    prop_oneof![var_strategy(), num_strategy()]
}

/// Generate infix expressions: atom (op atom)*, with incidental spacing.
fn expression_strategy() -> impl Strategy<Value = String> {
    (
        atom_strategy(),
        proptest::collection::vec(("[ ]{0,2}[-+*/][ ]{0,2}", atom_strategy()), 0..4),
    )
        .prop_map(|(first, rest)| {
            let mut expr = first;
            for (op, atom) in rest {
                expr.push_str(&op);
                expr.push_str(&atom);
            }
            expr
        })
}

proptest! {
    #[test]
    fn parse_is_deterministic(expr in expression_strategy()) {
        let first = parse("Exp", &expr, &ARITHMETIC).unwrap();
        let second = parse("Exp", &expr, &ARITHMETIC).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn well_formed_expressions_fully_consume(expr in expression_strategy()) {
        let m = parse("Exp", &expr, &ARITHMETIC).unwrap().unwrap();
        prop_assert_eq!(m.remainder, "");
    }

    #[test]
    fn leading_padding_does_not_change_the_tree(
        expr in expression_strategy(),
        pad in "[ \\t]{1,5}",
    ) {
        let bare = parse("Exp", &expr, &ARITHMETIC).unwrap().unwrap();
        let padded_input = format!("{}{}", pad, expr);
        let padded = parse("Exp", &padded_input, &ARITHMETIC).unwrap().unwrap();
        prop_assert_eq!(bare.tree, padded.tree);
        prop_assert_eq!(padded.remainder, "");
    }

    #[test]
    fn variables_parse_to_their_own_name(name in var_strategy()) {
        let m = parse("Var", &name, &ARITHMETIC).unwrap().unwrap();
        prop_assert_eq!(m.remainder, "");
        prop_assert_eq!(
            m.tree,
            ParseTree::node("Var", vec![ParseTree::leaf(name)])
        );
    }
}
