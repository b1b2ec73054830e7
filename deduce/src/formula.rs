use crate::ast::Node;
use crate::evaluator::{self, Assignment};
use crate::DeduceResult;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A parsed propositional formula
///
/// Owns its AST root and caches the propositions it references. Two formulas
/// are equal when their trees are equal, regardless of how they were written
/// (`A & B` equals `(A ∧ B)`).
#[derive(Debug, Clone)]
pub struct Formula {
    root: Node,
    propositions: BTreeSet<char>,
    source: Option<String>,
}

impl Formula {
    /// Build a formula from a tree that has no source text of its own
    pub fn from_node(root: Node) -> Self {
        let mut propositions = BTreeSet::new();
        root.collect_propositions(&mut propositions);
        Self {
            root,
            propositions,
            source: None,
        }
    }

    pub(crate) fn with_source(root: Node, source: String) -> Self {
        let mut formula = Self::from_node(root);
        formula.source = Some(source);
        formula
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// The text this formula was parsed from, trimmed, if it was parsed
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Propositions referenced by the formula, in alphabetical order
    pub fn atomic_propositions(&self) -> &BTreeSet<char> {
        &self.propositions
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Evaluate under an assignment that must cover every referenced proposition
    pub fn evaluate(&self, assignment: &Assignment) -> DeduceResult<bool> {
        evaluator::evaluate(self, assignment)
    }

    /// Every subformula, root first, in pre-order
    ///
    /// Repeated subtrees appear once per occurrence.
    pub fn subformulas(&self) -> Vec<Formula> {
        let mut nodes = Vec::new();
        self.root.collect_subnodes(&mut nodes);
        nodes
            .into_iter()
            .map(|node| Formula::from_node(node.clone()))
            .collect()
    }
}

impl From<Node> for Formula {
    fn from(root: Node) -> Self {
        Formula::from_node(root)
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::str::FromStr for Formula {
    type Err = crate::DeduceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
