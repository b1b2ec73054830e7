//! Truth-functional evaluation
//!
//! Evaluates a formula by:
//! 1. Checking the assignment covers every referenced proposition
//! 2. Folding the tree bottom-up with each connective's truth function

use crate::ast::Node;
use crate::{DeduceError, DeduceResult, Formula};
use std::collections::BTreeMap;

/// Mapping from proposition letters to truth values
pub type Assignment = BTreeMap<char, bool>;

pub fn evaluate(formula: &Formula, assignment: &Assignment) -> DeduceResult<bool> {
    if let Some(missing) = formula
        .atomic_propositions()
        .iter()
        .find(|letter| !assignment.contains_key(letter))
    {
        return Err(DeduceError::Evaluation {
            proposition: *missing,
        });
    }

    evaluate_node(formula.root(), assignment)
}

fn evaluate_node(node: &Node, assignment: &Assignment) -> DeduceResult<bool> {
    match node {
        Node::Proposition(letter) => assignment
            .get(letter)
            .copied()
            .ok_or(DeduceError::Evaluation {
                proposition: *letter,
            }),
        Node::Not(operand) => Ok(!evaluate_node(operand, assignment)?),
        Node::Binary(op, left, right) => {
            let left = evaluate_node(left, assignment)?;
            let right = evaluate_node(right, assignment)?;
            Ok(op.apply(left, right))
        }
    }
}

/// Build an assignment from `(letter, value)` pairs
pub fn assignment<I>(pairs: I) -> Assignment
where
    I: IntoIterator<Item = (char, bool)>,
{
    pairs.into_iter().collect()
}
