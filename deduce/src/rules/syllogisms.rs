//! Rules that chain implications and disjunctions: MP, MT, HS, DS, RES, CD.
//!
//! Two-premise rules here accept their inputs in either order wherever the
//! roles are distinguishable by shape.

use super::{ParameterKind, RuleDescriptor};
use crate::ast::{Connective, Node};

pub const MODUS_PONENS: RuleDescriptor = RuleDescriptor::new(
    "Modus Ponens",
    "MP",
    "If P→Q and P are true, then Q is true",
    2,
    ParameterKind::None,
    |nodes, _| modus_ponens(nodes).is_some(),
    |nodes, _| modus_ponens(nodes).cloned(),
);

pub const MODUS_TOLLENS: RuleDescriptor = RuleDescriptor::new(
    "Modus Tollens",
    "MT",
    "If P→Q and ¬Q are true, then ¬P is true",
    2,
    ParameterKind::None,
    |nodes, _| modus_tollens(nodes).is_some(),
    |nodes, _| modus_tollens(nodes).map(|antecedent| Node::not(antecedent.clone())),
);

pub const HYPOTHETICAL_SYLLOGISM: RuleDescriptor = RuleDescriptor::new(
    "Hypothetical Syllogism",
    "HS",
    "If P→Q and Q→R are true, then P→R is true",
    2,
    ParameterKind::None,
    |nodes, _| hypothetical_syllogism(nodes).is_some(),
    |nodes, _| {
        hypothetical_syllogism(nodes)
            .map(|(first, last)| Node::implies(first.clone(), last.clone()))
    },
);

pub const DISJUNCTIVE_SYLLOGISM: RuleDescriptor = RuleDescriptor::new(
    "Disjunctive Syllogism",
    "DS",
    "If P∨Q and ¬P are true, then Q is true",
    2,
    ParameterKind::None,
    |nodes, _| disjunctive_syllogism(nodes).is_some(),
    |nodes, _| disjunctive_syllogism(nodes).cloned(),
);

pub const RESOLUTION: RuleDescriptor = RuleDescriptor::new(
    "Resolution",
    "RES",
    "If P∨Q and ¬P∨R are true, then Q∨R is true",
    2,
    ParameterKind::None,
    |nodes, _| resolution(nodes).is_some(),
    |nodes, _| resolution(nodes).map(|(left, right)| Node::or(left.clone(), right.clone())),
);

pub const CONSTRUCTIVE_DILEMMA: RuleDescriptor = RuleDescriptor::new(
    "Constructive Dilemma",
    "CD",
    "If P→Q, R→S and P∨R are true, then Q∨S is true",
    3,
    ParameterKind::None,
    |nodes, _| constructive_dilemma(nodes).is_some(),
    |nodes, _| {
        constructive_dilemma(nodes).map(|(left, right)| Node::or(left.clone(), right.clone()))
    },
);

/// The consequent of whichever input is an implication whose antecedent is
/// the other input
fn modus_ponens<'a>(nodes: &[&'a Node]) -> Option<&'a Node> {
    let &[first, second] = nodes else {
        return None;
    };
    for (fact, implication) in [(first, second), (second, first)] {
        if let Some((antecedent, consequent)) = implication.operands(Connective::Implies) {
            if antecedent == fact {
                return Some(consequent);
            }
        }
    }
    None
}

/// The antecedent to negate
fn modus_tollens<'a>(nodes: &[&'a Node]) -> Option<&'a Node> {
    let &[first, second] = nodes else {
        return None;
    };
    for (implication, denial) in [(first, second), (second, first)] {
        if let (Some((antecedent, consequent)), Some(denied)) =
            (implication.operands(Connective::Implies), denial.negated())
        {
            if denied == consequent {
                return Some(antecedent);
            }
        }
    }
    None
}

/// Outer ends of the chain `P→Q, Q→R`
fn hypothetical_syllogism<'a>(nodes: &[&'a Node]) -> Option<(&'a Node, &'a Node)> {
    let &[first, second] = nodes else {
        return None;
    };
    let (p, q) = first.operands(Connective::Implies)?;
    let (r, s) = second.operands(Connective::Implies)?;
    if q == r {
        Some((p, s))
    } else if s == p {
        Some((r, q))
    } else {
        None
    }
}

/// The disjunct left over once the denied one is removed
fn disjunctive_syllogism<'a>(nodes: &[&'a Node]) -> Option<&'a Node> {
    let &[first, second] = nodes else {
        return None;
    };
    for (disjunction, denial) in [(first, second), (second, first)] {
        if let (Some((left, right)), Some(denied)) =
            (disjunction.operands(Connective::Or), denial.negated())
        {
            if denied == left {
                return Some(right);
            }
            if denied == right {
                return Some(left);
            }
        }
    }
    None
}

fn complementary(a: &Node, b: &Node) -> bool {
    a.negated() == Some(b) || b.negated() == Some(a)
}

/// The two remaining disjuncts after cancelling a complementary pair
fn resolution<'a>(nodes: &[&'a Node]) -> Option<(&'a Node, &'a Node)> {
    let &[first, second] = nodes else {
        return None;
    };
    let (a_left, a_right) = first.operands(Connective::Or)?;
    let (b_left, b_right) = second.operands(Connective::Or)?;

    for (literal, rest) in [(a_left, a_right), (a_right, a_left)] {
        for (other, other_rest) in [(b_left, b_right), (b_right, b_left)] {
            if complementary(literal, other) {
                return Some((rest, other_rest));
            }
        }
    }
    None
}

/// Consequents of the two implications, in the order of the disjunction
fn constructive_dilemma<'a>(nodes: &[&'a Node]) -> Option<(&'a Node, &'a Node)> {
    if nodes.len() != 3 {
        return None;
    }
    let implications: Vec<(&'a Node, &'a Node)> = nodes
        .iter()
        .filter_map(|node| node.operands(Connective::Implies))
        .collect();
    let disjunctions: Vec<(&'a Node, &'a Node)> = nodes
        .iter()
        .filter_map(|node| node.operands(Connective::Or))
        .collect();

    let (&[(p, q), (r, s)], &[(left, right)]) = (implications.as_slice(), disjunctions.as_slice())
    else {
        return None;
    };

    if left == p && right == r {
        Some((q, s))
    } else if left == r && right == p {
        Some((s, q))
    } else {
        None
    }
}
