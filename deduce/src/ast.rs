//! AST types
//!
//! This module contains the tree a formula is parsed into:
//! - `Span` for tracking source locations (character offsets)
//! - `Connective` for the binary operators and their precedence
//! - `Node` for the formula tree itself, plus its precedence-aware printer

use serde::Serialize;
use std::fmt;

/// Span representing a location in a formula's source text
///
/// Offsets count characters, not bytes, so that positions in error
/// messages line up with what the user typed (`∧` is one position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at a single position
    pub fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn from_pest_span(span: pest::Span, text: &str) -> Self {
        Self {
            start: char_offset(text, span.start()),
            end: char_offset(text, span.end()),
        }
    }
}

/// Convert a byte offset into `text` to a character offset
pub(crate) fn char_offset(text: &str, byte: usize) -> usize {
    let byte = byte.min(text.len());
    text.char_indices().take_while(|(i, _)| *i < byte).count()
}

/// Binary connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connective {
    And,
    Or,
    Implies,
    Iff,
    Xor,
    Nand,
    Nor,
}

impl Connective {
    pub const ALL: [Connective; 7] = [
        Connective::And,
        Connective::Or,
        Connective::Implies,
        Connective::Iff,
        Connective::Xor,
        Connective::Nand,
        Connective::Nor,
    ];

    /// Canonical symbol used by the printer
    pub fn symbol(&self) -> &'static str {
        match self {
            Connective::And => "∧",
            Connective::Or => "∨",
            Connective::Implies => "→",
            Connective::Iff => "↔",
            Connective::Xor => "⊕",
            Connective::Nand => "↑",
            Connective::Nor => "↓",
        }
    }

    /// Binding strength, higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            Connective::Iff => 1,
            Connective::Implies => 2,
            Connective::Or | Connective::Nor => 3,
            Connective::Xor => 4,
            Connective::And | Connective::Nand => 5,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, Connective::Implies)
    }

    /// Truth function of the connective
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Connective::And => left && right,
            Connective::Or => left || right,
            Connective::Implies => !left || right,
            Connective::Iff => left == right,
            Connective::Xor => left != right,
            Connective::Nand => !(left && right),
            Connective::Nor => !(left || right),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

const NOT_PRECEDENCE: u8 = 6;
const ATOM_PRECEDENCE: u8 = 7;

/// A node of the formula tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Proposition(char),
    Not(Box<Node>),
    Binary(Connective, Box<Node>, Box<Node>),
}

impl Node {
    pub fn proposition(letter: char) -> Self {
        Node::Proposition(letter)
    }

    pub fn not(operand: Node) -> Self {
        Node::Not(Box::new(operand))
    }

    pub fn binary(op: Connective, left: Node, right: Node) -> Self {
        Node::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn and(left: Node, right: Node) -> Self {
        Self::binary(Connective::And, left, right)
    }

    pub fn or(left: Node, right: Node) -> Self {
        Self::binary(Connective::Or, left, right)
    }

    pub fn implies(left: Node, right: Node) -> Self {
        Self::binary(Connective::Implies, left, right)
    }

    pub fn iff(left: Node, right: Node) -> Self {
        Self::binary(Connective::Iff, left, right)
    }

    /// Operand of a negation
    pub fn negated(&self) -> Option<&Node> {
        match self {
            Node::Not(operand) => Some(operand),
            _ => None,
        }
    }

    /// Operands of a binary node with the given connective
    pub fn operands(&self, op: Connective) -> Option<(&Node, &Node)> {
        match self {
            Node::Binary(kind, left, right) if *kind == op => Some((left, right)),
            _ => None,
        }
    }

    pub fn is_proposition(&self) -> bool {
        matches!(self, Node::Proposition(_))
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, Node::Not(_))
    }

    pub fn is_binary(&self, op: Connective) -> bool {
        matches!(self, Node::Binary(kind, _, _) if *kind == op)
    }

    /// Height of the tree; a single proposition has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Node::Proposition(_) => 1,
            Node::Not(operand) => 1 + operand.depth(),
            Node::Binary(_, left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    pub(crate) fn collect_propositions(&self, into: &mut std::collections::BTreeSet<char>) {
        match self {
            Node::Proposition(letter) => {
                into.insert(*letter);
            }
            Node::Not(operand) => operand.collect_propositions(into),
            Node::Binary(_, left, right) => {
                left.collect_propositions(into);
                right.collect_propositions(into);
            }
        }
    }

    /// Pre-order walk: this node first, then its children left to right
    pub(crate) fn collect_subnodes<'a>(&'a self, into: &mut Vec<&'a Node>) {
        into.push(self);
        match self {
            Node::Proposition(_) => {}
            Node::Not(operand) => operand.collect_subnodes(into),
            Node::Binary(_, left, right) => {
                left.collect_subnodes(into);
                right.collect_subnodes(into);
            }
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Node::Proposition(_) => ATOM_PRECEDENCE,
            Node::Not(_) => NOT_PRECEDENCE,
            Node::Binary(op, _, _) => op.precedence(),
        }
    }
}

// Parenthesize a binary child only when reparsing would otherwise regroup it:
// lower precedence, or equal precedence on the side the operator does not
// associate towards.
fn needs_parentheses(child: &Node, parent: Connective, is_left: bool) -> bool {
    let child_prec = child.precedence();
    let parent_prec = parent.precedence();
    if child_prec != parent_prec {
        return child_prec < parent_prec;
    }
    if parent.is_right_associative() {
        is_left
    } else {
        !is_left
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, node: &Node, parenthesize: bool) -> fmt::Result {
    if parenthesize {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Proposition(letter) => write!(f, "{}", letter),
            Node::Not(operand) => {
                write!(f, "¬")?;
                let bare = matches!(**operand, Node::Proposition(_) | Node::Not(_));
                write_operand(f, operand, !bare)
            }
            Node::Binary(op, left, right) => {
                write_operand(f, left, needs_parentheses(left, *op, true))?;
                write!(f, " {} ", op)?;
                write_operand(f, right, needs_parentheses(right, *op, false))
            }
        }
    }
}
