//! Semantic tableau engine
//!
//! Decides satisfiability of a validated formula by branch expansion.
//! A branch is one candidate conjunction of commitments; the frontier of
//! open branches is a disjunction, so the input is satisfiable iff some
//! branch survives full expansion without closing.
//!
//! Rules:
//! - Alpha (conjunctive): both results extend the current branch.
//! - Beta (disjunctive): the branch splits into two alternatives.
//! - Delta: an existential is witnessed by one fresh pool constant.
//! - Gamma: a universal is registered and re-instantiated against every
//!   constant that ever enters the pool.
//!
//! First-order satisfiability is undecidable, so the only termination
//! guarantee for quantified input is the constant-pool bound: once the pool
//! outgrows `max_constants` the search gives up with [`Verdict::Unknown`].
//! Purely propositional input never mints a constant and always reaches a
//! definite verdict.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::formula::{Connective, Formula, QuantifierKind};
use crate::subst::substitute;

/// Default constant-pool bound.
pub const DEFAULT_MAX_CONSTANTS: usize = 10;

/// Configuration for one satisfiability query.
#[derive(Debug, Clone)]
pub struct TableauConfig {
    /// Give up with `Unknown` once the constant pool outgrows this.
    pub max_constants: usize,
    /// Trace branch expansion to stderr.
    pub verbose: bool,
}

impl Default for TableauConfig {
    fn default() -> Self {
        TableauConfig {
            max_constants: DEFAULT_MAX_CONSTANTS,
            verbose: false,
        }
    }
}

/// Satisfiability verdict, with its stable numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Unsatisfiable = 0,
    Satisfiable = 1,
    /// Resource bound exceeded before a definite verdict.
    Unknown = 2,
}

impl Verdict {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A registered universal quantifier awaiting instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Universal {
    variable: String,
    body: Formula,
}

/// Outcome of expanding a single node.
#[derive(Debug)]
enum ExpansionResult {
    /// Literal; stays on the branch as-is.
    Terminal,
    /// Conjunctive: all results join the branch together.
    Alpha(Vec<Formula>),
    /// Disjunctive: the branch splits between the two alternatives.
    Beta(Formula, Formula),
    /// Universal quantifier, registered for gamma instantiation.
    Deferred(Universal),
}

/// One open branch of the tableau.
///
/// Universals registered on the branch carry a watermark into the global
/// constant pool: constants below it have already been instantiated here.
/// Children inherit the parent's registrations, so an instantiation never
/// leaks onto a sibling branch.
#[derive(Debug, Clone)]
struct Branch {
    nodes: Vec<Formula>,
    universals: Vec<(Universal, usize)>,
}

impl Branch {
    fn root(formula: Formula) -> Branch {
        Branch {
            nodes: vec![formula],
            universals: Vec::new(),
        }
    }

    /// Closed iff some atomic formula appears both bare and singly negated,
    /// compared by canonical rendering.
    fn is_closed(&self) -> bool {
        let mut positive = HashSet::new();
        let mut negative = HashSet::new();
        for node in &self.nodes {
            match node {
                Formula::Atom(_) | Formula::Predicate { .. } => {
                    positive.insert(node.to_string());
                }
                Formula::Negation(inner) if inner.is_atomic() => {
                    negative.insert(inner.to_string());
                }
                _ => {}
            }
        }
        !positive.is_disjoint(&negative)
    }

    /// Fully expanded: only literals remain and every registered universal
    /// has been instantiated against the entire pool seen so far.
    fn is_leaf(&self, pool_len: usize) -> bool {
        self.nodes.iter().all(Formula::is_literal)
            && self
                .universals
                .iter()
                .all(|(_, watermark)| *watermark >= pool_len)
    }
}

/// Search-wide state for one query: the constant pool and the fresh-symbol
/// counter. Never shared between queries.
struct SearchContext {
    /// Append-only; insertion order drives gamma instantiation order.
    constants: IndexSet<String>,
    next_constant: usize,
}

impl SearchContext {
    fn new() -> SearchContext {
        SearchContext {
            constants: IndexSet::new(),
            next_constant: 0,
        }
    }

    /// Mint a constant not yet in the pool and add it.
    fn fresh_constant(&mut self) -> String {
        let name = format!("c{}", self.next_constant);
        self.next_constant += 1;
        self.constants.insert(name.clone());
        name
    }
}

/// Decide satisfiability of a single validated formula.
///
/// Depth-first over an explicit branch stack; the first open leaf found is
/// a witness and ends the search.
pub fn solve(formula: &Formula, config: &TableauConfig) -> Verdict {
    let mut ctx = SearchContext::new();
    let mut frontier = vec![Branch::root(formula.clone())];

    loop {
        if ctx.constants.len() > config.max_constants {
            return Verdict::Unknown;
        }
        let Some(branch) = frontier.pop() else {
            break;
        };
        if branch.is_closed() {
            continue;
        }
        if branch.is_leaf(ctx.constants.len()) {
            return Verdict::Satisfiable;
        }
        if config.verbose {
            eprintln!(
                "expanding branch: {} nodes, {} universals, {} open, pool {}",
                branch.nodes.len(),
                branch.universals.len(),
                frontier.len() + 1,
                ctx.constants.len()
            );
        }
        frontier.extend(expand_branch(branch, &mut ctx));
    }

    Verdict::Unsatisfiable
}

/// Classify, validate and solve a raw formula string.
///
/// The tableau is only seeded with validated trees; anything that fails
/// classification is rejected here without touching the engine.
pub fn satisfiability(input: &str, config: &TableauConfig) -> crate::error::Result<Verdict> {
    if !crate::classify::classify(input).is_formula() {
        return Err(crate::error::SemtabError::NotAFormula(input.to_string()));
    }
    match crate::classify::validated(input) {
        Some((tree, _)) => Ok(solve(&tree, config)),
        None => Err(crate::error::SemtabError::NotAFormula(input.to_string())),
    }
}

/// Expand every node on a branch once, producing one or two children.
fn expand_branch(branch: Branch, ctx: &mut SearchContext) -> Vec<Branch> {
    let mut children = vec![Branch {
        nodes: Vec::new(),
        universals: branch.universals.clone(),
    }];

    for node in &branch.nodes {
        match expand_node(node, ctx) {
            ExpansionResult::Terminal => {
                for child in &mut children {
                    child.nodes.push(node.clone());
                }
            }
            ExpansionResult::Alpha(items) => {
                for child in &mut children {
                    child.nodes.extend(items.iter().cloned());
                }
            }
            ExpansionResult::Beta(first, second) => {
                if children.len() == 1 {
                    let base = children.swap_remove(0);
                    let mut left = base.clone();
                    left.nodes.push(first);
                    let mut right = base;
                    right.nodes.push(second);
                    children.push(left);
                    children.push(right);
                } else {
                    // Already split once while processing this branch. A
                    // further beta node is carried over unexpanded and
                    // split when the child itself is expanded, keeping
                    // every parent at exactly two children.
                    for child in &mut children {
                        child.nodes.push(node.clone());
                    }
                }
            }
            ExpansionResult::Deferred(universal) => {
                for child in &mut children {
                    if !child.universals.iter().any(|(u, _)| *u == universal) {
                        child.universals.push((universal.clone(), 0));
                    }
                }
            }
        }
    }

    // Gamma: every registered universal catches up with constants that
    // entered the pool since its watermark, including ones minted by the
    // delta expansions just above.
    for child in &mut children {
        for (universal, watermark) in &mut child.universals {
            for constant in ctx.constants.iter().skip(*watermark) {
                child
                    .nodes
                    .push(substitute(&universal.body, &universal.variable, constant));
            }
            *watermark = ctx.constants.len();
        }
    }

    children
}

/// Apply the expansion table to one node.
fn expand_node(node: &Formula, ctx: &mut SearchContext) -> ExpansionResult {
    match node {
        Formula::Atom(_) | Formula::Predicate { .. } => ExpansionResult::Terminal,

        Formula::Binary { left, op, right } => match op {
            Connective::And => {
                ExpansionResult::Alpha(vec![(**left).clone(), (**right).clone()])
            }
            Connective::Or => ExpansionResult::Beta((**left).clone(), (**right).clone()),
            Connective::Implies => ExpansionResult::Beta(
                Formula::negation((**left).clone()),
                (**right).clone(),
            ),
        },

        Formula::Quantifier {
            kind: QuantifierKind::Existential,
            variable,
            body,
        } => {
            let constant = ctx.fresh_constant();
            ExpansionResult::Alpha(vec![substitute(body, variable, &constant)])
        }

        Formula::Quantifier {
            kind: QuantifierKind::Universal,
            variable,
            body,
        } => ExpansionResult::Deferred(Universal {
            variable: variable.clone(),
            body: (**body).clone(),
        }),

        Formula::Negation(inner) => match &**inner {
            Formula::Atom(_) | Formula::Predicate { .. } => ExpansionResult::Terminal,

            Formula::Negation(f) => ExpansionResult::Alpha(vec![(**f).clone()]),

            Formula::Binary { left, op, right } => match op {
                Connective::And => ExpansionResult::Beta(
                    Formula::negation((**left).clone()),
                    Formula::negation((**right).clone()),
                ),
                Connective::Or => ExpansionResult::Alpha(vec![
                    Formula::negation((**left).clone()),
                    Formula::negation((**right).clone()),
                ]),
                Connective::Implies => ExpansionResult::Alpha(vec![
                    (**left).clone(),
                    Formula::negation((**right).clone()),
                ]),
            },

            // ~E rewrites to A~, joining the gamma queue.
            Formula::Quantifier {
                kind: QuantifierKind::Existential,
                variable,
                body,
            } => ExpansionResult::Deferred(Universal {
                variable: variable.clone(),
                body: Formula::negation((**body).clone()),
            }),

            // ~A rewrites to E~ and is witnessed immediately.
            Formula::Quantifier {
                kind: QuantifierKind::Universal,
                variable,
                body,
            } => {
                let constant = ctx.fresh_constant();
                let negated_body = Formula::negation((**body).clone());
                ExpansionResult::Alpha(vec![substitute(&negated_body, variable, &constant)])
            }
        },
    }
}
