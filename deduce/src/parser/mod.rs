use crate::ast::{char_offset, Span};
use crate::error::DeduceError;
use crate::formula::Formula;
use crate::resource_limits::ResourceLimits;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod expressions;
pub mod lexer;

#[derive(Parser)]
#[grammar = "src/parser/formula.pest"]
pub struct FormulaParser;

/// Parse a formula with the default resource limits
pub fn parse(text: &str) -> Result<Formula, DeduceError> {
    parse_with_limits(text, &ResourceLimits::default())
}

/// Parse a formula, enforcing `limits`
///
/// The length limit counts non-whitespace characters, so the canonical
/// printing of any accepted formula is accepted too.
pub fn parse_with_limits(text: &str, limits: &ResourceLimits) -> Result<Formula, DeduceError> {
    let length = text.chars().filter(|c| !c.is_whitespace()).count();
    if length > limits.max_formula_length {
        return Err(DeduceError::ResourceLimitExceeded {
            limit_name: "max_formula_length".to_string(),
            limit_value: format!("{} characters", limits.max_formula_length),
            actual_value: format!("{} characters", length),
            suggestion: "Split the formula into several premises".to_string(),
        });
    }

    let source = text.trim();
    let tokens = lexer::tokenize(text)?;
    if tokens.is_empty() {
        return Err(DeduceError::syntax(
            "Formula cannot be empty",
            Span::point(0),
            Arc::from(text),
        ));
    }
    lexer::check_parentheses(&tokens, text)?;
    lexer::check_depth(&tokens, limits)?;

    match FormulaParser::parse(Rule::formula, text) {
        Ok(mut pairs) => {
            let formula_pair = pairs
                .next()
                .ok_or_else(|| DeduceError::Engine("Empty parse result".to_string()))?;
            let root = expressions::parse_formula(formula_pair)?;
            Ok(Formula::with_source(root, source.to_string()))
        }
        Err(e) => Err(describe_parse_failure(&e, &tokens, text)),
    }
}

// Translate a pest failure into a message about the offending token.
// pest reports the furthest position it tried, which after skipped
// whitespace is the start of the next token, or the end of input.
fn describe_parse_failure(
    error: &pest::error::Error<Rule>,
    tokens: &[lexer::Token],
    text: &str,
) -> DeduceError {
    let byte_pos = match error.location {
        pest::error::InputLocation::Pos(pos) => pos,
        pest::error::InputLocation::Span((start, _)) => start,
    };
    let pos = char_offset(text, byte_pos);

    match tokens.iter().find(|token| token.span.start >= pos) {
        Some(token) => DeduceError::syntax(
            format!(
                "Unexpected token '{}' at position {}",
                token.describe(),
                token.span.start
            ),
            token.span,
            Arc::from(text),
        ),
        None => {
            let end = text.chars().count();
            DeduceError::syntax_with_suggestion(
                "Unexpected end of formula",
                Span::point(end),
                Arc::from(text),
                "an operator is missing its right-hand operand",
            )
        }
    }
}
