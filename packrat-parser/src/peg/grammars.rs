//! Built-in grammar instances
//!
//! These are ordinary grammars compiled through the public compiler; nothing
//! in the engine knows about them. They double as reference material for the
//! description format, and their alternatives show the one ordering rule that
//! matters: longer alternatives come first (`Term [+-] Exp` before `Term`,
//! `int frac exp` before `int frac` before `int`), or the shorter one would
//! shadow the longer parse.

use crate::peg::grammar::Grammar;
use once_cell::sync::Lazy;

/// Arithmetic expression grammar: infix `+ - * /`, parenthesized
/// subexpressions, function calls, identifiers, and signed numbers.
pub static ARITHMETIC: Lazy<Grammar> = Lazy::new(|| {
    Grammar::from_description(
        r"
        Exp     => Term [+-] Exp | Term
        Term    => Factor [*/] Term | Factor
        Factor  => Funcall | Var | Num | [(] Exp [)]
        Funcall => Var [(] Exps [)]
        Exps    => Exp [,] Exps | Exp
        Var     => [a-zA-Z_]\w*
        Num     => [-+]?[0-9]+([.][0-9]*)?
        ",
    )
    .unwrap()
});

/// JSON-like value grammar: arrays, objects, strings, and numbers with
/// optional fraction and exponent parts. Parse from `value`.
pub static JSON: Lazy<Grammar> = Lazy::new(|| {
    Grammar::from_description(
        r#"
        value    => array | object | string | number
        array    => \[ elements \]
        elements => value , elements | value
        string   => "[^"]*"
        number   => int frac exp | int frac | int
        int      => [-+]?\d+
        frac     => \.\d*
        exp      => e\+\d+
        object   => \{ members \}
        members  => pair , members | pair
        pair     => string : value
        "#,
    )
    .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peg::verify::verify;

    #[test]
    fn test_arithmetic_compiles_with_expected_rules() {
        for symbol in ["Exp", "Term", "Factor", "Funcall", "Exps", "Var", "Num"] {
            assert!(ARITHMETIC.is_rule(symbol), "missing rule {}", symbol);
        }
    }

    #[test]
    fn test_arithmetic_has_no_suspects() {
        let report = verify(&ARITHMETIC);
        assert!(report.suspects.is_empty(), "suspects: {:?}", report.suspects);
        // Every rule, the start symbol included, is referenced somewhere.
        assert!(report.orphans.is_empty(), "orphans: {:?}", report.orphans);
    }

    #[test]
    fn test_json_compiles_with_expected_rules() {
        for symbol in [
            "value", "array", "elements", "string", "number", "int", "frac", "exp", "object",
            "members", "pair",
        ] {
            assert!(JSON.is_rule(symbol), "missing rule {}", symbol);
        }
    }

    #[test]
    fn test_json_has_no_suspects_or_orphans() {
        // `value` recurs through `elements` and `pair`, so even the start
        // symbol is referenced somewhere.
        let report = verify(&JSON);
        assert!(report.suspects.is_empty(), "suspects: {:?}", report.suspects);
        assert!(report.orphans.is_empty(), "orphans: {:?}", report.orphans);
    }
}
