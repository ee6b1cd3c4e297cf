//! Grammar validation
//!
//! A tree can parse syntactically yet use symbols outside the grammar's
//! alphabet, or shapes the grammar does not have at all (a predicate node
//! under the propositional grammar). Validation walks the tree and checks
//! every leaf symbol and binder.

use crate::formula::{Formula, PREDICATE_LETTERS, PROP_LETTERS, VARIABLES};

/// The two mutually exclusive grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Propositional,
    FirstOrder,
}

/// Check that every symbol and shape in `formula` belongs to `grammar`.
pub fn is_valid_under(formula: &Formula, grammar: Grammar) -> bool {
    match grammar {
        Grammar::Propositional => valid_propositional(formula),
        Grammar::FirstOrder => valid_first_order(formula),
    }
}

fn single_char_in(name: &str, alphabet: &[char]) -> bool {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => alphabet.contains(&c),
        _ => false,
    }
}

fn valid_propositional(formula: &Formula) -> bool {
    match formula {
        Formula::Atom(name) => single_char_in(name, &PROP_LETTERS),
        Formula::Negation(inner) => valid_propositional(inner),
        Formula::Binary { left, right, .. } => {
            valid_propositional(left) && valid_propositional(right)
        }
        Formula::Predicate { .. } | Formula::Quantifier { .. } => false,
    }
}

fn valid_first_order(formula: &Formula) -> bool {
    match formula {
        Formula::Atom(name) => single_char_in(name, &VARIABLES),
        Formula::Negation(inner) => valid_first_order(inner),
        Formula::Binary { left, right, .. } => {
            valid_first_order(left) && valid_first_order(right)
        }
        Formula::Predicate {
            symbol,
            left,
            right,
        } => {
            PREDICATE_LETTERS.contains(symbol)
                && valid_first_order(left)
                && valid_first_order(right)
        }
        Formula::Quantifier { variable, body, .. } => {
            single_char_in(variable, &VARIABLES) && valid_first_order(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{first_order, propositional};

    #[test]
    fn test_propositional_alphabet() {
        let ok = propositional::parse("(p/\\~q)").unwrap();
        assert!(is_valid_under(&ok, Grammar::Propositional));

        let foreign = propositional::parse("(p/\\t)").unwrap();
        assert!(!is_valid_under(&foreign, Grammar::Propositional));
    }

    #[test]
    fn test_first_order_alphabet() {
        let ok = first_order::parse("Ax(P(x,x)=>Q(x,y))").unwrap();
        assert!(is_valid_under(&ok, Grammar::FirstOrder));

        // "p" parses as an atom under both grammars but only the
        // propositional alphabet contains it.
        let prop_atom = first_order::parse("p").unwrap();
        assert!(!is_valid_under(&prop_atom, Grammar::FirstOrder));
    }

    #[test]
    fn test_shapes_are_grammar_specific() {
        let pred = first_order::parse("P(x,y)").unwrap();
        assert!(!is_valid_under(&pred, Grammar::Propositional));

        let quant = first_order::parse("AxP(x,x)").unwrap();
        assert!(!is_valid_under(&quant, Grammar::Propositional));
    }

    #[test]
    fn test_bound_variable_must_be_in_alphabet() {
        let f = first_order::parse("AaP(x,x)").unwrap();
        assert!(!is_valid_under(&f, Grammar::FirstOrder));
    }

    #[test]
    fn test_multi_char_atom_rejected() {
        let f = propositional::parse("pp").unwrap();
        assert!(!is_valid_under(&f, Grammar::Propositional));
    }
}
