//! Single-formula rewrites between logically equivalent forms
//!
//! Each rewrite recognizes both of its forms and produces the other one.

use super::{NegationMode, ParameterKind, RuleDescriptor, RuleParams};
use crate::ast::{Connective, Node};

pub const DOUBLE_NEGATION: RuleDescriptor = RuleDescriptor::new(
    "Double Negation",
    "DN",
    "If ¬¬P is true, then P is true",
    1,
    ParameterKind::Mode,
    |nodes, params| double_negation(nodes, params).is_some(),
    double_negation,
);

pub const DE_MORGAN_CONJUNCTION: RuleDescriptor = RuleDescriptor::new(
    "De Morgan's Law 1",
    "DML1",
    "¬(P∧Q) is equivalent to ¬P∨¬Q",
    1,
    ParameterKind::None,
    |nodes, _| de_morgan(nodes, Connective::And).is_some(),
    |nodes, _| de_morgan(nodes, Connective::And),
);

pub const DE_MORGAN_DISJUNCTION: RuleDescriptor = RuleDescriptor::new(
    "De Morgan's Law 2",
    "DML2",
    "¬(P∨Q) is equivalent to ¬P∧¬Q",
    1,
    ParameterKind::None,
    |nodes, _| de_morgan(nodes, Connective::Or).is_some(),
    |nodes, _| de_morgan(nodes, Connective::Or),
);

pub const TRANSPOSITION: RuleDescriptor = RuleDescriptor::new(
    "Transposition",
    "TRANS",
    "P→Q is equivalent to ¬Q→¬P",
    1,
    ParameterKind::None,
    |nodes, _| transposition(nodes).is_some(),
    |nodes, _| transposition(nodes),
);

pub const IMPLICATION: RuleDescriptor = RuleDescriptor::new(
    "Implication",
    "IMPL",
    "P→Q is equivalent to ¬P∨Q",
    1,
    ParameterKind::None,
    |nodes, _| material_implication(nodes).is_some(),
    |nodes, _| material_implication(nodes),
);

pub const EXPORTATION: RuleDescriptor = RuleDescriptor::new(
    "Exportation",
    "EXP",
    "P→(Q→R) is equivalent to (P∧Q)→R",
    1,
    ParameterKind::None,
    |nodes, _| exportation(nodes).is_some(),
    |nodes, _| exportation(nodes),
);

pub const ABSORPTION: RuleDescriptor = RuleDescriptor::new(
    "Absorption",
    "ABS",
    "If P→Q is true, then P→(P∧Q) is true",
    1,
    ParameterKind::None,
    |nodes, _| absorption(nodes).is_some(),
    |nodes, _| absorption(nodes),
);

fn single<'a>(nodes: &[&'a Node]) -> Option<&'a Node> {
    match nodes {
        &[formula] => Some(formula),
        _ => None,
    }
}

fn double_negation(nodes: &[&Node], params: &RuleParams) -> Option<Node> {
    let formula = single(nodes)?;
    match params {
        RuleParams::Mode(NegationMode::Introduce) => {
            Some(Node::not(Node::not(formula.clone())))
        }
        _ => formula
            .negated()
            .and_then(Node::negated)
            .cloned(),
    }
}

/// `¬(P op Q)` and `¬P dual ¬Q`, where `op` is ∧ or ∨ and `dual` the other
fn de_morgan(nodes: &[&Node], op: Connective) -> Option<Node> {
    let formula = single(nodes)?;
    let dual = match op {
        Connective::And => Connective::Or,
        _ => Connective::And,
    };

    if let Some((p, q)) = formula.negated().and_then(|inner| inner.operands(op)) {
        return Some(Node::binary(
            dual,
            Node::not(p.clone()),
            Node::not(q.clone()),
        ));
    }

    let (left, right) = formula.operands(dual)?;
    let (p, q) = (left.negated()?, right.negated()?);
    Some(Node::not(Node::binary(op, p.clone(), q.clone())))
}

fn transposition(nodes: &[&Node]) -> Option<Node> {
    let (antecedent, consequent) = single(nodes)?.operands(Connective::Implies)?;
    if let (Some(q), Some(p)) = (antecedent.negated(), consequent.negated()) {
        return Some(Node::implies(p.clone(), q.clone()));
    }
    Some(Node::implies(
        Node::not(consequent.clone()),
        Node::not(antecedent.clone()),
    ))
}

fn material_implication(nodes: &[&Node]) -> Option<Node> {
    let formula = single(nodes)?;
    if let Some((p, q)) = formula.operands(Connective::Implies) {
        return Some(Node::or(Node::not(p.clone()), q.clone()));
    }
    let (left, q) = formula.operands(Connective::Or)?;
    let p = left.negated()?;
    Some(Node::implies(p.clone(), q.clone()))
}

fn exportation(nodes: &[&Node]) -> Option<Node> {
    let (antecedent, consequent) = single(nodes)?.operands(Connective::Implies)?;
    if let Some((q, r)) = consequent.operands(Connective::Implies) {
        return Some(Node::implies(
            Node::and(antecedent.clone(), q.clone()),
            r.clone(),
        ));
    }
    let (p, q) = antecedent.operands(Connective::And)?;
    Some(Node::implies(
        p.clone(),
        Node::implies(q.clone(), consequent.clone()),
    ))
}

/// `P→(P∧Q)` and `P→(Q∧P)` shrink back to `P→Q`; any other implication
/// grows to `P→(P∧Q)`
fn absorption(nodes: &[&Node]) -> Option<Node> {
    let (p, consequent) = single(nodes)?.operands(Connective::Implies)?;
    if let Some((left, right)) = consequent.operands(Connective::And) {
        if left == p {
            return Some(Node::implies(p.clone(), right.clone()));
        }
        if right == p {
            return Some(Node::implies(p.clone(), left.clone()));
        }
    }
    Some(Node::implies(
        p.clone(),
        Node::and(p.clone(), consequent.clone()),
    ))
}
