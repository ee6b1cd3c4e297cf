//! Crate-level error handling
//!
//! The core surfaces exactly one error condition: a string that validates
//! under neither grammar. Everything else here wraps I/O and configuration
//! failures from the outer layers.

use crate::parser::ParseError;

/// Errors surfaced by the library and the CLI wrapper.
#[derive(Debug, thiserror::Error)]
pub enum SemtabError {
    /// The string validates under neither grammar.
    #[error("'{0}' is not a formula")]
    NotAFormula(String),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SemtabError {
    fn from(err: toml::de::Error) -> Self {
        SemtabError::Config(err.to_string())
    }
}

/// A Result type using [`SemtabError`].
pub type Result<T> = std::result::Result<T, SemtabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SemtabError::NotAFormula("(p".to_string());
        assert_eq!(err.to_string(), "'(p' is not a formula");

        let err: SemtabError = ParseError::Empty.into();
        assert_eq!(err.to_string(), "parse error: empty formula");
    }
}
