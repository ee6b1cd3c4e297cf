//! First-order grammar parser
//!
//! Extends the propositional shape with single-character quantifier
//! prefixes (`A`, `E`) and two-argument predicates `S(arg,arg)`. Rules are
//! tried in a fixed order: negation, quantifier, predicate, bracketed
//! connective, atom.

use super::{split_on_connective, ParseError};
use crate::formula::{Formula, QuantifierKind, PREDICATE_LETTERS};

/// Parse a complete first-order formula string.
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    if !input.is_ascii() {
        return Err(ParseError::NonAscii);
    }
    parse_inner(input)
}

fn parse_inner(input: &str) -> Result<Formula, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let bytes = input.as_bytes();

    if let Some(rest) = input.strip_prefix('~') {
        return Ok(Formula::negation(parse_inner(rest)?));
    }

    if let Some(kind) = QuantifierKind::from_symbol(bytes[0] as char) {
        // One character of bound variable, then the body.
        if input.len() < 3 {
            return Err(ParseError::TruncatedQuantifier);
        }
        return Ok(Formula::quantifier(
            kind,
            &input[1..2],
            parse_inner(&input[2..])?,
        ));
    }

    if PREDICATE_LETTERS.contains(&(bytes[0] as char))
        && input.len() > 2
        && bytes[1] == b'('
        && input.ends_with(')')
    {
        // Arguments are bare variables or constants, so the first comma is
        // always the argument separator.
        let comma = input.find(',').ok_or(ParseError::MalformedPredicate)?;
        return Ok(Formula::predicate(
            bytes[0] as char,
            parse_inner(&input[2..comma])?,
            parse_inner(&input[comma + 1..input.len() - 1])?,
        ));
    }

    if input.starts_with('(') && input.ends_with(')') {
        let (left, op, right) =
            split_on_connective(input).ok_or(ParseError::MissingConnective)?;
        return Ok(Formula::binary(parse_inner(left)?, op, parse_inner(right)?));
    }

    Ok(Formula::atom(input))
}
