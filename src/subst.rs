//! Variable substitution
//!
//! Renames every free occurrence of one name to another, producing a fresh
//! tree. This is a capture-naive rename, not capture-avoiding substitution
//! of a term: the tableau engine only ever targets a quantifier's own bound
//! variable with a fresh or pool constant, so a quantifier binding the old
//! name is renamed along with its body.

use crate::formula::Formula;

/// Return a copy of `formula` with every atom named `old` renamed to `new`,
/// and every quantifier binding `old` rebound to `new`.
pub fn substitute(formula: &Formula, old: &str, new: &str) -> Formula {
    match formula {
        Formula::Atom(name) => {
            if name == old {
                Formula::atom(new)
            } else {
                formula.clone()
            }
        }
        Formula::Negation(inner) => Formula::negation(substitute(inner, old, new)),
        Formula::Binary { left, op, right } => Formula::binary(
            substitute(left, old, new),
            *op,
            substitute(right, old, new),
        ),
        Formula::Predicate {
            symbol,
            left,
            right,
        } => Formula::predicate(
            *symbol,
            substitute(left, old, new),
            substitute(right, old, new),
        ),
        Formula::Quantifier {
            kind,
            variable,
            body,
        } => {
            let variable = if variable == old { new } else { variable };
            Formula::quantifier(*kind, variable, substitute(body, old, new))
        }
    }
}
