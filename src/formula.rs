//! Formula data model
//!
//! The tagged tree representing a parsed formula, shared by both grammars.
//! Trees are immutable once built: the tableau engine extends branches with
//! substituted copies while other branches keep the original nodes.
//!
//! Canonical rendering (the `Display` impl) is load-bearing: branch closure
//! compares literals by their rendered string, and re-parsing a rendered
//! tree must reproduce an equal tree.

use std::fmt;

/// Propositional alphabet.
pub const PROP_LETTERS: [char; 4] = ['p', 'q', 'r', 's'];

/// First-order variable alphabet.
pub const VARIABLES: [char; 4] = ['x', 'y', 'z', 'w'];

/// Predicate symbol alphabet. All predicates take exactly two arguments.
pub const PREDICATE_LETTERS: [char; 4] = ['P', 'Q', 'R', 'S'];

/// Binary connective, rendered as a fixed two-character token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Implies,
}

impl Connective {
    /// The two-character surface token for this connective.
    pub fn token(self) -> &'static str {
        match self {
            Connective::And => "/\\",
            Connective::Or => "\\/",
            Connective::Implies => "=>",
        }
    }

    /// Recognize a two-character token.
    pub fn from_token(token: &str) -> Option<Connective> {
        match token {
            "/\\" => Some(Connective::And),
            "\\/" => Some(Connective::Or),
            "=>" => Some(Connective::Implies),
            _ => None,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Quantifier kind, written as a single-character prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantifierKind {
    Universal,
    Existential,
}

impl QuantifierKind {
    pub fn symbol(self) -> char {
        match self {
            QuantifierKind::Universal => 'A',
            QuantifierKind::Existential => 'E',
        }
    }

    pub fn from_symbol(c: char) -> Option<QuantifierKind> {
        match c {
            'A' => Some(QuantifierKind::Universal),
            'E' => Some(QuantifierKind::Existential),
            _ => None,
        }
    }
}

/// A parsed formula.
///
/// `Predicate` and `Quantifier` only occur in first-order trees; the
/// validator rejects them under the propositional grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// Bare symbol. Which names are legal depends on the grammar.
    Atom(String),
    /// `~` prefix.
    Negation(Box<Formula>),
    /// `(left op right)`.
    Binary {
        left: Box<Formula>,
        op: Connective,
        right: Box<Formula>,
    },
    /// `S(left,right)`. In valid formulas both arguments are atoms; the
    /// grammar has no nested terms.
    Predicate {
        symbol: char,
        left: Box<Formula>,
        right: Box<Formula>,
    },
    /// `Av...` / `Ev...` with a single-character bound variable.
    Quantifier {
        kind: QuantifierKind,
        variable: String,
        body: Box<Formula>,
    },
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Formula {
        Formula::Atom(name.into())
    }

    pub fn negation(inner: Formula) -> Formula {
        Formula::Negation(Box::new(inner))
    }

    pub fn binary(left: Formula, op: Connective, right: Formula) -> Formula {
        Formula::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn predicate(symbol: char, left: Formula, right: Formula) -> Formula {
        Formula::Predicate {
            symbol,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn quantifier(kind: QuantifierKind, variable: impl Into<String>, body: Formula) -> Formula {
        Formula::Quantifier {
            kind,
            variable: variable.into(),
            body: Box::new(body),
        }
    }

    /// An atom or predicate counts as atomic for closure and leaf checks.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::Atom(_) | Formula::Predicate { .. })
    }

    /// A literal is an atomic formula or its single negation.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Atom(_) | Formula::Predicate { .. } => true,
            Formula::Negation(inner) => inner.is_atomic(),
            _ => false,
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name) => f.write_str(name),
            Formula::Negation(inner) => write!(f, "~{}", inner),
            Formula::Binary { left, op, right } => write!(f, "({}{}{})", left, op, right),
            Formula::Predicate { symbol, left, right } => {
                write!(f, "{}({},{})", symbol, left, right)
            }
            Formula::Quantifier {
                kind,
                variable,
                body,
            } => write!(f, "{}{}{}", kind.symbol(), variable, body),
        }
    }
}
