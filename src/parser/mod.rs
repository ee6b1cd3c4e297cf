//! Formula parsers
//!
//! Two independent recursive-descent parsers, one per grammar:
//!
//! - [`propositional::parse`] - negation prefix, bracketed binary
//!   connectives, bare atoms
//! - [`first_order::parse`] - additionally quantifier prefixes and
//!   two-argument predicates
//!
//! Both consume the entire input and fail on anything malformed rather than
//! producing a partial tree. Binary connectives are located by scanning a
//! bracketed expression left to right at bracket depth zero; the first
//! match is authoritative. There is no operator precedence: every binary
//! connective is fully bracketed.

pub mod first_order;
pub mod propositional;

use crate::formula::Connective;

/// Parser error type.
///
/// The distinctions matter for diagnostics only; at the classification
/// surface every failure collapses to "not a formula".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty formula")]
    Empty,
    #[error("formula contains non-ASCII characters")]
    NonAscii,
    #[error("no top-level connective in bracketed expression")]
    MissingConnective,
    #[error("predicate arguments must be comma-separated")]
    MalformedPredicate,
    #[error("quantifier needs a variable and a body")]
    TruncatedQuantifier,
}

/// Split a bracketed expression `( ... )` at its first depth-zero binary
/// connective, returning the left slice, the connective and the right slice
/// with the outer brackets and the token removed.
pub(crate) fn split_on_connective(input: &str) -> Option<(&str, Connective, &str)> {
    debug_assert!(input.starts_with('(') && input.ends_with(')'));
    let bytes = input.as_bytes();
    let mut depth = 0i32;
    let mut i = 1;
    while i + 1 < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ if depth == 0 => {
                if let Some(window) = input.get(i..i + 2) {
                    if let Some(op) = Connective::from_token(window) {
                        return Some((&input[1..i], op, &input[i + 2..input.len() - 1]));
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
