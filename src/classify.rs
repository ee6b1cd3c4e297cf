//! Syntactic classification
//!
//! Runs both parsers over the input, validates each result, and reports
//! which of the nine categories the string belongs to. An input valid under
//! both grammars is reported as propositional; the propositional check runs
//! first and that precedence is part of the output contract.

use crate::formula::{Connective, Formula, QuantifierKind};
use crate::parser::{first_order, propositional};
use crate::validate::{is_valid_under, Grammar};

/// The nine syntactic categories, with their stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    NotAFormula = 0,
    FirstOrderAtom = 1,
    FirstOrderNegation = 2,
    UniversallyQuantified = 3,
    ExistentiallyQuantified = 4,
    FirstOrderBinary = 5,
    Proposition = 6,
    PropositionalNegation = 7,
    PropositionalBinary = 8,
}

impl Category {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Binary-connective categories get the extra lhs/connective/rhs
    /// sentence in reports.
    pub fn is_binary(self) -> bool {
        matches!(self, Category::FirstOrderBinary | Category::PropositionalBinary)
    }

    pub fn is_formula(self) -> bool {
        self != Category::NotAFormula
    }
}

/// Classify a formula string into one of the nine categories.
pub fn classify(input: &str) -> Category {
    match validated(input) {
        Some((tree, Grammar::Propositional)) => match tree {
            Formula::Atom(_) => Category::Proposition,
            Formula::Negation(_) => Category::PropositionalNegation,
            Formula::Binary { .. } => Category::PropositionalBinary,
            // Unreachable: the propositional validator rejects these shapes.
            _ => Category::NotAFormula,
        },
        Some((tree, Grammar::FirstOrder)) => match tree {
            Formula::Predicate { .. } => Category::FirstOrderAtom,
            Formula::Negation(_) => Category::FirstOrderNegation,
            Formula::Quantifier {
                kind: QuantifierKind::Universal,
                ..
            } => Category::UniversallyQuantified,
            Formula::Quantifier {
                kind: QuantifierKind::Existential,
                ..
            } => Category::ExistentiallyQuantified,
            Formula::Binary { .. } => Category::FirstOrderBinary,
            // A bare first-order variable has no category of its own.
            Formula::Atom(_) => Category::NotAFormula,
        },
        None => Category::NotAFormula,
    }
}

/// Parse and validate under both grammars, propositional first.
///
/// Returns the validated tree and the grammar it belongs to, or `None` when
/// neither grammar accepts the string.
pub fn validated(input: &str) -> Option<(Formula, Grammar)> {
    if let Ok(tree) = propositional::parse(input) {
        if is_valid_under(&tree, Grammar::Propositional) {
            return Some((tree, Grammar::Propositional));
        }
    }
    if let Ok(tree) = first_order::parse(input) {
        if is_valid_under(&tree, Grammar::FirstOrder) {
            return Some((tree, Grammar::FirstOrder));
        }
    }
    None
}

/// For a binary-connective formula, the rendered left side, connective
/// token and right side. `None` for anything else.
pub fn binary_parts(input: &str) -> Option<(String, Connective, String)> {
    match validated(input)?.0 {
        Formula::Binary { left, op, right } => {
            Some((left.to_string(), op, right.to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nine_categories_reachable() {
        let cases = [
            ("p/\\q", Category::NotAFormula),
            ("P(x,y)", Category::FirstOrderAtom),
            ("~P(x,y)", Category::FirstOrderNegation),
            ("AxP(x,x)", Category::UniversallyQuantified),
            ("ExP(x,x)", Category::ExistentiallyQuantified),
            ("(P(x,y)\\/Q(y,x))", Category::FirstOrderBinary),
            ("p", Category::Proposition),
            ("~~q", Category::PropositionalNegation),
            ("(p=>q)", Category::PropositionalBinary),
        ];
        for (input, expected) in cases {
            assert_eq!(classify(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Category::NotAFormula.code(), 0);
        assert_eq!(Category::FirstOrderAtom.code(), 1);
        assert_eq!(Category::FirstOrderBinary.code(), 5);
        assert_eq!(Category::PropositionalBinary.code(), 8);
    }

    #[test]
    fn test_invalid_inputs() {
        for input in ["", "~", "()", "(p", "t", "xy", "P(p,q)", "A", "Ap P"] {
            assert_eq!(classify(input), Category::NotAFormula, "input {:?}", input);
        }
    }

    #[test]
    fn test_bare_variable_is_not_a_formula() {
        // "x" validates under the first-order grammar as a term, but a term
        // on its own is not one of the formula categories.
        assert_eq!(classify("x"), Category::NotAFormula);
    }

    #[test]
    fn test_binary_parts() {
        let (lhs, op, rhs) = binary_parts("((p\\/q)=>r)").unwrap();
        assert_eq!(lhs, "(p\\/q)");
        assert_eq!(op, Connective::Implies);
        assert_eq!(rhs, "r");
        assert!(binary_parts("p").is_none());
        assert!(binary_parts("junk").is_none());
    }
}
