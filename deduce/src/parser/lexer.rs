//! Token pre-pass
//!
//! Runs before the grammar so that the common mistakes get precise messages:
//! unknown characters, unbalanced parentheses and runaway nesting are
//! reported here with their exact position. Anything that survives is handed
//! to the pest grammar for the structural parse.

use crate::ast::{Connective, Span};
use crate::error::DeduceError;
use crate::resource_limits::ResourceLimits;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Proposition(char),
    Not,
    Binary(Connective),
    LeftParen,
    RightParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Canonical spelling of the token, used in error messages
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Proposition(letter) => letter.to_string(),
            TokenKind::Not => "¬".to_string(),
            TokenKind::Binary(op) => op.symbol().to_string(),
            TokenKind::LeftParen => "(".to_string(),
            TokenKind::RightParen => ")".to_string(),
        }
    }
}

/// Whether `c` may appear anywhere in a formula, including the pieces of the
/// ASCII arrows `->` and `<->`
pub fn is_formula_char(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_uppercase()
        || matches!(
            c,
            '∧' | '&' | '∨' | '|' | '¬' | '~' | '→' | '↔' | '⊕' | '^' | '↑' | '↓' | '-' | '<'
                | '>' | '(' | ')'
        )
}

/// Split a formula into tokens, rejecting any character that is not part of
/// the formula language
pub fn tokenize(text: &str) -> Result<Vec<Token>, DeduceError> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let (kind, width) = match c {
            'A'..='Z' => (TokenKind::Proposition(c), 1),
            '∧' | '&' => (TokenKind::Binary(Connective::And), 1),
            '∨' | '|' => (TokenKind::Binary(Connective::Or), 1),
            '¬' | '~' => (TokenKind::Not, 1),
            '→' => (TokenKind::Binary(Connective::Implies), 1),
            '↔' => (TokenKind::Binary(Connective::Iff), 1),
            '⊕' | '^' => (TokenKind::Binary(Connective::Xor), 1),
            '↑' => (TokenKind::Binary(Connective::Nand), 1),
            '↓' => (TokenKind::Binary(Connective::Nor), 1),
            '-' if chars.get(i + 1) == Some(&'>') => (TokenKind::Binary(Connective::Implies), 2),
            '<' if chars.get(i + 1) == Some(&'-') && chars.get(i + 2) == Some(&'>') => {
                (TokenKind::Binary(Connective::Iff), 3)
            }
            '(' => (TokenKind::LeftParen, 1),
            ')' => (TokenKind::RightParen, 1),
            _ => {
                return Err(DeduceError::syntax(
                    format!("Invalid character '{}' at position {}", c, i),
                    Span::new(i, i + 1),
                    Arc::from(text),
                ))
            }
        };

        tokens.push(Token {
            kind,
            span: Span::new(i, i + width),
        });
        i += width;
    }

    Ok(tokens)
}

/// Check that every parenthesis has a partner
pub fn check_parentheses(tokens: &[Token], text: &str) -> Result<(), DeduceError> {
    let mut open: Vec<Span> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => open.push(token.span),
            TokenKind::RightParen => {
                if open.pop().is_none() {
                    return Err(DeduceError::syntax(
                        format!(
                            "Unmatched closing parenthesis at position {}",
                            token.span.start
                        ),
                        token.span,
                        Arc::from(text),
                    ));
                }
            }
            _ => {}
        }
    }

    if let Some(first) = open.first() {
        return Err(DeduceError::syntax_with_suggestion(
            format!("Unmatched opening parenthesis at position {}", first.start),
            *first,
            Arc::from(text),
            "add the missing ')'",
        ));
    }

    Ok(())
}

/// Deepest recursion the grammar would need for these tokens
///
/// Counts open groups, runs of stacked negations and chained implications
/// (which nest to the right) at each point of the token stream.
pub fn nesting_depth(tokens: &[Token]) -> usize {
    let mut groups: Vec<usize> = vec![0];
    let mut negations = 0;
    let mut deepest = 0;

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => groups.push(0),
            TokenKind::RightParen => {
                if groups.len() > 1 {
                    groups.pop();
                }
            }
            TokenKind::Not => negations += 1,
            TokenKind::Binary(Connective::Implies) => {
                if let Some(chain) = groups.last_mut() {
                    *chain += 1;
                }
            }
            _ => {}
        }
        if !matches!(token.kind, TokenKind::Not) {
            negations = 0;
        }
        let current = (groups.len() - 1) + groups.iter().sum::<usize>() + negations;
        deepest = deepest.max(current);
    }

    deepest
}

pub fn check_depth(
    tokens: &[Token],
    limits: &ResourceLimits,
) -> Result<(), DeduceError> {
    let depth = nesting_depth(tokens);
    if depth > limits.max_expression_depth {
        return Err(DeduceError::ResourceLimitExceeded {
            limit_name: "max_expression_depth".to_string(),
            limit_value: limits.max_expression_depth.to_string(),
            actual_value: depth.to_string(),
            suggestion: "Simplify nested expressions to reduce depth".to_string(),
        });
    }
    Ok(())
}
