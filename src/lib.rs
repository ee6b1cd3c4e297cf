//! semtab - semantic-tableau formula classifier and satisfiability checker
//!
//! Classifies textual logic formulas (propositional and first-order) by
//! syntactic shape and decides their satisfiability with the semantic
//! tableau method.
//!
//! # Architecture
//!
//! - [`formula`] - the tagged formula tree and its canonical rendering
//! - [`parser`] - two independent recursive-descent parsers, one per grammar
//! - [`validate`] - alphabet and shape checks per grammar
//! - [`classify`] - the nine-way syntactic category decision
//! - [`subst`] - capture-naive variable renaming for quantifier rules
//! - [`tableau`] - branch expansion, closure detection and the bounded
//!   depth-first search
//! - [`report`] - line-oriented driving and output phrasing
//!
//! # Example
//!
//! ```rust
//! use semtab::{classify, satisfiability, Category, TableauConfig, Verdict};
//!
//! assert_eq!(classify("(p\\/~p)"), Category::PropositionalBinary);
//!
//! let verdict = satisfiability("(p\\/~p)", &TableauConfig::default()).unwrap();
//! assert_eq!(verdict, Verdict::Satisfiable);
//! ```
//!
//! First-order satisfiability is undecidable; the engine carries a constant
//! pool bound (default 10) and answers [`Verdict::Unknown`] when the bound
//! is exceeded before a definite verdict.

pub mod classify;
pub mod config;
pub mod error;
pub mod formula;
pub mod parser;
pub mod report;
pub mod subst;
pub mod tableau;
pub mod validate;

// Re-export the formula model
pub use formula::{Connective, Formula, QuantifierKind};

// Re-export parsing and classification
pub use classify::{binary_parts, classify, validated, Category};
pub use parser::ParseError;
pub use validate::{is_valid_under, Grammar};

// Re-export the engine
pub use subst::substitute;
pub use tableau::{satisfiability, solve, TableauConfig, Verdict, DEFAULT_MAX_CONSTANTS};

// Re-export the report layer
pub use report::{category_line, process, verdict_line, Mode};

// Re-export configuration and errors
pub use config::{EngineConfig, SemtabConfig};
pub use error::{Result, SemtabError};
