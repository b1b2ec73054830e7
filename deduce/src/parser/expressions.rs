use crate::ast::{Connective, Node};
use crate::error::DeduceError;
use crate::parser::Rule;
use pest::iterators::Pair;

pub(crate) fn parse_formula(pair: Pair<Rule>) -> Result<Node, DeduceError> {
    // formula = { SOI ~ iff_expr ~ EOI }
    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::iff_expr {
            return parse_expression(inner);
        }
    }
    Err(DeduceError::Engine("Formula without expression".to_string()))
}

pub(crate) fn parse_expression(pair: Pair<Rule>) -> Result<Node, DeduceError> {
    match pair.as_rule() {
        Rule::iff_expr | Rule::or_expr | Rule::xor_expr | Rule::and_expr => {
            parse_left_associative(pair)
        }
        Rule::implies_expr => parse_implies_expression(pair),
        Rule::unary => parse_unary(pair),
        Rule::group => parse_group(pair),
        Rule::proposition => parse_proposition(pair),
        _ => Err(DeduceError::Engine(format!(
            "Invalid expression: unable to parse '{}' as {:?}",
            pair.as_str(),
            pair.as_rule()
        ))),
    }
}

fn connective_for(rule: Rule) -> Option<Connective> {
    match rule {
        Rule::iff_op => Some(Connective::Iff),
        Rule::implies_op => Some(Connective::Implies),
        Rule::or_op => Some(Connective::Or),
        Rule::nor_op => Some(Connective::Nor),
        Rule::xor_op => Some(Connective::Xor),
        Rule::and_op => Some(Connective::And),
        Rule::nand_op => Some(Connective::Nand),
        _ => None,
    }
}

fn parse_left_associative(pair: Pair<Rule>) -> Result<Node, DeduceError> {
    // The grammar structure is: operand ~ (operator ~ operand)*
    let level = pair.as_rule();
    let mut pairs = pair.into_inner();
    let mut left = parse_expression(pairs.next().ok_or_else(|| {
        DeduceError::Engine(format!("Missing left operand in {:?}", level))
    })?)?;

    while let Some(op_pair) = pairs.next() {
        let op = connective_for(op_pair.as_rule()).ok_or_else(|| {
            DeduceError::Engine(format!(
                "Unexpected operator in {:?}: {:?}",
                level,
                op_pair.as_rule()
            ))
        })?;
        let right = parse_expression(pairs.next().ok_or_else(|| {
            DeduceError::Engine(format!("Missing right operand in {:?}", level))
        })?)?;
        left = Node::binary(op, left, right);
    }

    Ok(left)
}

fn parse_implies_expression(pair: Pair<Rule>) -> Result<Node, DeduceError> {
    // implies_expr = { or_expr ~ (implies_op ~ implies_expr)? }
    let mut pairs = pair.into_inner();
    let antecedent = parse_expression(pairs.next().ok_or_else(|| {
        DeduceError::Engine("Missing antecedent in implication".to_string())
    })?)?;

    if pairs.next().is_none() {
        return Ok(antecedent);
    }

    let consequent = parse_expression(pairs.next().ok_or_else(|| {
        DeduceError::Engine("Missing consequent in implication".to_string())
    })?)?;
    Ok(Node::implies(antecedent, consequent))
}

fn parse_unary(pair: Pair<Rule>) -> Result<Node, DeduceError> {
    // unary = { not_op* ~ primary }
    let mut negations = 0;
    let mut operand = None;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::not_op => negations += 1,
            _ => operand = Some(parse_expression(inner)?),
        }
    }

    let mut node =
        operand.ok_or_else(|| DeduceError::Engine("Negation without operand".to_string()))?;
    for _ in 0..negations {
        node = Node::not(node);
    }
    Ok(node)
}

fn parse_group(pair: Pair<Rule>) -> Result<Node, DeduceError> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| DeduceError::Engine("Empty parenthesized group".to_string()))?;
    parse_expression(inner)
}

fn parse_proposition(pair: Pair<Rule>) -> Result<Node, DeduceError> {
    pair.as_str()
        .chars()
        .next()
        .map(Node::proposition)
        .ok_or_else(|| DeduceError::Engine("Empty proposition".to_string()))
}
