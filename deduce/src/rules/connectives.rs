//! Introduction and elimination rules for ∧, ∨ and ↔

use super::{Direction, ParameterKind, RuleDescriptor, RuleParams, Side};
use crate::ast::{Connective, Node};

pub const CONJUNCTION_INTRODUCTION: RuleDescriptor = RuleDescriptor::new(
    "Conjunction Introduction",
    "CI",
    "If P and Q are true, then P∧Q is true",
    2,
    ParameterKind::None,
    |nodes, _| nodes.len() == 2,
    |nodes, _| match nodes {
        &[left, right] => Some(Node::and(left.clone(), right.clone())),
        _ => None,
    },
);

pub const CONJUNCTION_ELIMINATION: RuleDescriptor = RuleDescriptor::new(
    "Conjunction Elimination",
    "CE",
    "If P∧Q is true, then P and Q are each true individually",
    1,
    ParameterKind::Side,
    |nodes, params| conjunct(nodes, params).is_some(),
    |nodes, params| conjunct(nodes, params).cloned(),
);

pub const ADDITION: RuleDescriptor = RuleDescriptor::new(
    "Addition",
    "ADD",
    "If P is true, then P∨Q is true",
    1,
    ParameterKind::Disjunct,
    |nodes, params| nodes.len() == 1 && matches!(params, RuleParams::Disjunct(_)),
    |nodes, params| match (nodes, params) {
        (&[formula], RuleParams::Disjunct(disjunct)) => {
            Some(Node::or(formula.clone(), disjunct.root().clone()))
        }
        _ => None,
    },
);

pub const SIMPLIFICATION: RuleDescriptor = RuleDescriptor::new(
    "Simplification",
    "SIMP",
    "If P∧Q is true, then P or Q is true individually",
    1,
    ParameterKind::Side,
    |nodes, params| conjunct(nodes, params).is_some(),
    |nodes, params| conjunct(nodes, params).cloned(),
);

pub const BICONDITIONAL_INTRODUCTION: RuleDescriptor = RuleDescriptor::new(
    "Biconditional Introduction",
    "BI",
    "If P→Q and Q→P are true, then P↔Q is true",
    2,
    ParameterKind::None,
    |nodes, _| converse_pair(nodes).is_some(),
    |nodes, _| converse_pair(nodes).map(|(p, q)| Node::iff(p.clone(), q.clone())),
);

pub const BICONDITIONAL_ELIMINATION: RuleDescriptor = RuleDescriptor::new(
    "Biconditional Elimination",
    "BE",
    "If P↔Q is true, then P→Q and Q→P are true",
    1,
    ParameterKind::Direction,
    |nodes, _| biconditional(nodes).is_some(),
    |nodes, params| {
        let (p, q) = biconditional(nodes)?;
        match params {
            RuleParams::Direction(Direction::Backward) => Some(Node::implies(q.clone(), p.clone())),
            _ => Some(Node::implies(p.clone(), q.clone())),
        }
    },
);

fn conjunct<'a>(nodes: &[&'a Node], params: &RuleParams) -> Option<&'a Node> {
    let &[conjunction] = nodes else {
        return None;
    };
    let (left, right) = conjunction.operands(Connective::And)?;
    match params {
        RuleParams::Side(Side::Right) => Some(right),
        _ => Some(left),
    }
}

/// `(P, Q)` when the inputs are `P→Q` and `Q→P`, oriented by the first
fn converse_pair<'a>(nodes: &[&'a Node]) -> Option<(&'a Node, &'a Node)> {
    let &[first, second] = nodes else {
        return None;
    };
    let (p, q) = first.operands(Connective::Implies)?;
    let (r, s) = second.operands(Connective::Implies)?;
    (p == s && q == r).then_some((p, q))
}

fn biconditional<'a>(nodes: &[&'a Node]) -> Option<(&'a Node, &'a Node)> {
    let &[formula] = nodes else {
        return None;
    };
    formula.operands(Connective::Iff)
}
