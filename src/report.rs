//! Report rendering and line-oriented processing
//!
//! The I/O collaborator around the core: one formula per input line, with a
//! mode directive on the first line selecting category reporting (`PARSE`),
//! satisfiability reporting (`SAT`), or both. Output phrasing is fixed and
//! indexed by the numeric category and verdict codes.

use std::io::{BufRead, Write};

use crate::classify::{binary_parts, classify, Category};
use crate::error::Result;
use crate::tableau::{satisfiability, TableauConfig, Verdict};

/// Category phrases, indexed by category code.
pub const CATEGORY_PHRASES: [&str; 9] = [
    "not a formula",
    "an atom",
    "a negation of a first order logic formula",
    "a universally quantified formula",
    "an existentially quantified formula",
    "a binary connective first order formula",
    "a proposition",
    "a negation of a propositional formula",
    "a binary connective propositional formula",
];

/// Verdict phrases, indexed by verdict code.
pub const VERDICT_PHRASES: [&str; 3] = [
    "is not satisfiable",
    "is satisfiable",
    "may or may not be satisfiable",
];

pub fn category_phrase(category: Category) -> &'static str {
    CATEGORY_PHRASES[category.code() as usize]
}

pub fn verdict_phrase(verdict: Verdict) -> &'static str {
    VERDICT_PHRASES[verdict.code() as usize]
}

/// Which reports to emit, read from the first input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub parse: bool,
    pub sat: bool,
}

impl Mode {
    /// Interpret a directive line. `PARSE` and `SAT` may both occur.
    pub fn from_directive(line: &str) -> Mode {
        Mode {
            parse: line.contains("PARSE"),
            sat: line.contains("SAT"),
        }
    }
}

/// The category report line for one formula.
pub fn category_line(formula: &str) -> String {
    let category = classify(formula);
    let mut out = format!("{} is {}.", formula, category_phrase(category));
    if category.is_binary() {
        if let Some((lhs, op, rhs)) = binary_parts(formula) {
            out.push_str(&format!(
                " Its left hand side is {}, its connective is {}, and its right hand side is {}.",
                lhs,
                op.token(),
                rhs
            ));
        }
    }
    out
}

/// The satisfiability report line for one formula.
pub fn verdict_line(formula: &str, config: &TableauConfig) -> String {
    match satisfiability(formula, config) {
        Ok(verdict) => format!("{} {}.", formula, verdict_phrase(verdict)),
        Err(_) => format!("{} is not a formula.", formula),
    }
}

/// Process a whole input: directive line first (unless a mode override is
/// given, in which case every line is a formula), then one formula per
/// line. Line terminators are trimmed before the core sees the string.
pub fn process<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    mode_override: Option<Mode>,
    config: &TableauConfig,
) -> Result<()> {
    let mut lines = reader.lines();

    let mode = match mode_override {
        Some(mode) => mode,
        None => match lines.next() {
            Some(first) => Mode::from_directive(&first?),
            None => return Ok(()),
        },
    };

    for line in lines {
        let line = line?;
        let formula = line.trim_end_matches(&['\n', '\r'][..]);
        if mode.parse {
            writeln!(writer, "{}", category_line(formula))?;
        }
        if mode.sat {
            writeln!(writer, "{}", verdict_line(formula, config))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive() {
        assert_eq!(
            Mode::from_directive("PARSE"),
            Mode {
                parse: true,
                sat: false
            }
        );
        assert_eq!(
            Mode::from_directive("PARSE SAT"),
            Mode {
                parse: true,
                sat: true
            }
        );
        assert_eq!(
            Mode::from_directive("nothing useful"),
            Mode {
                parse: false,
                sat: false
            }
        );
    }

    #[test]
    fn test_category_line_plain() {
        assert_eq!(category_line("p"), "p is a proposition.");
        assert_eq!(category_line("p/\\q"), "p/\\q is not a formula.");
    }

    #[test]
    fn test_category_line_binary_details() {
        assert_eq!(
            category_line("(p=>q)"),
            "(p=>q) is a binary connective propositional formula. \
             Its left hand side is p, its connective is =>, and its right hand side is q."
        );
        assert_eq!(
            category_line("(P(x,y)/\\Q(y,x))"),
            "(P(x,y)/\\Q(y,x)) is a binary connective first order formula. \
             Its left hand side is P(x,y), its connective is /\\, and its right hand side is Q(y,x)."
        );
    }

    #[test]
    fn test_verdict_line() {
        let config = TableauConfig::default();
        assert_eq!(verdict_line("(p/\\~p)", &config), "(p/\\~p) is not satisfiable.");
        assert_eq!(verdict_line("(p\\/~p)", &config), "(p\\/~p) is satisfiable.");
        assert_eq!(verdict_line("(p", &config), "(p is not a formula.");
        assert_eq!(
            verdict_line("ExAyEz(P(x,y)/\\P(y,z))", &config),
            "ExAyEz(P(x,y)/\\P(y,z)) may or may not be satisfiable."
        );
    }

    #[test]
    fn test_process_both_modes() {
        let input = "PARSE SAT\np\n(q/\\~q)\n";
        let mut out = Vec::new();
        process(
            input.as_bytes(),
            &mut out,
            None,
            &TableauConfig::default(),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "p is a proposition.\n\
             p is satisfiable.\n\
             (q/\\~q) is a binary connective propositional formula. \
             Its left hand side is q, its connective is /\\, and its right hand side is ~q.\n\
             (q/\\~q) is not satisfiable.\n"
        );
    }

    #[test]
    fn test_process_mode_override_skips_directive() {
        let input = "p\nq\n";
        let mut out = Vec::new();
        process(
            input.as_bytes(),
            &mut out,
            Some(Mode {
                parse: true,
                sat: false,
            }),
            &TableauConfig::default(),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "p is a proposition.\nq is a proposition.\n");
    }

    #[test]
    fn test_process_empty_input() {
        let mut out = Vec::new();
        process("".as_bytes(), &mut out, None, &TableauConfig::default()).unwrap();
        assert!(out.is_empty());
    }
}
