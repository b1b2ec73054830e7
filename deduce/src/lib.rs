//! # deduce
//!
//! **Propositional logic for people checking their reasoning**
//!
//! deduce parses propositional formulas, evaluates them under truth
//! assignments, builds truth tables, classifies formulas and arguments, and
//! constructs natural-deduction proofs either step by step or by automatic
//! forward search over a catalog of nineteen inference rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use deduce::{Engine, DeduceResult};
//!
//! fn main() -> DeduceResult<()> {
//!     let engine = Engine::new();
//!
//!     let mut proof = engine.proof_for(&["A → B", "B → C", "A"], "C")?;
//!     let outcome = proof.auto_prove(10)?;
//!
//!     assert!(proof.is_complete());
//!     assert_eq!(outcome.closing_rule, Some("Modus Ponens"));
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Formulas
//! Propositions are single uppercase letters. Connectives, loosest first:
//! `↔` (`<->`), `→` (`->`, right-associative), `∨` (`|`) and `↓`, `⊕` (`^`),
//! `∧` (`&`) and `↑`, then prefix `¬` (`~`). Printing inserts only the
//! parentheses needed to parse back to the same tree.
//!
//! ### Proofs
//! A proof is a numbered list of premises and derived steps. Each derived
//! step names the rule and the earlier steps it came from.
//!
//! ### Truth tables
//! Rows enumerate assignments with `true` before `false`, the first
//! proposition varying slowest.

pub mod ast;
pub mod engine;
pub mod enumeration;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod parser;
pub mod proof;
pub mod resource_limits;
pub mod response;
pub mod rules;
pub mod truth_table;
pub mod validator;

pub use ast::{Connective, Node, Span};
pub use engine::Engine;
pub use error::{DeduceError, ErrorDetails, SearchStop};
pub use evaluator::Assignment;
pub use formula::Formula;
pub use parser::{parse, parse_with_limits};
pub use proof::{Justification, ProofState, ProofStep, SearchOutcome};
pub use resource_limits::ResourceLimits;
pub use response::ProofData;
pub use rules::{
    Direction, NegationMode, ParameterKind, RuleCatalog, RuleDescriptor, RuleInfo, RuleParams,
    Side,
};
pub use truth_table::{TableData, TruthTable};
pub use validator::{Classification, Validator};

/// Result type for deduce operations
pub type DeduceResult<T> = Result<T, DeduceError>;

#[cfg(test)]
mod tests;
