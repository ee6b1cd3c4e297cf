//! Propositional grammar parser

use super::{split_on_connective, ParseError};
use crate::formula::Formula;

/// Parse a complete propositional formula string.
///
/// Only the shape is checked here; whether atom names belong to the
/// propositional alphabet is the validator's job.
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
    if let Some(rest) = input.strip_prefix('~') {
        return Ok(Formula::negation(parse_inner(rest)?));
    }
    if input.starts_with('(') && input.ends_with(')') && input.len() > 1 {
        let (left, op, right) =
            split_on_connective(input).ok_or(ParseError::MissingConnective)?;
        return Ok(Formula::binary(parse_inner(left)?, op, parse_inner(right)?));
    }
    // Anything else is taken as an atom name; the validator decides whether
    // the name is in the alphabet.
    Ok(Formula::atom(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Connective;

    #[test]
    fn test_parse_atom() {
        assert_eq!(parse("p").unwrap(), Formula::atom("p"));
    }

    #[test]
    fn test_parse_negation() {
        assert_eq!(
            parse("~~q").unwrap(),
            Formula::negation(Formula::negation(Formula::atom("q")))
        );
    }

    #[test]
    fn test_parse_binary() {
        assert_eq!(
            parse("(p=>q)").unwrap(),
            Formula::binary(Formula::atom("p"), Connective::Implies, Formula::atom("q"))
        );
    }

    #[test]
    fn test_parse_nested() {
        let f = parse("((p\\/q)/\\~r)").unwrap();
        assert_eq!(f.to_string(), "((p\\/q)/\\~r)");
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("~"), Err(ParseError::Empty));
        assert_eq!(parse("(pq)"), Err(ParseError::MissingConnective));
        assert_eq!(parse("()"), Err(ParseError::MissingConnective));
    }

    #[test]
    fn test_unbalanced_input_becomes_atom() {
        // Mirrors the grammar: a string not bracketed on both ends falls
        // through to the atom rule and is rejected later by validation.
        assert_eq!(parse("(p").unwrap(), Formula::atom("(p"));
    }

    #[test]
    fn test_round_trip() {
        for src in ["p", "~s", "(p/\\q)", "(p\\/~p)", "~((p=>p)=>(q=>q))"] {
            let tree = parse(src).unwrap();
            assert_eq!(tree.to_string(), src);
            assert_eq!(parse(&tree.to_string()).unwrap(), tree);
        }
    }
}
