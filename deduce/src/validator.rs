//! Semantic checks decided by exhaustive enumeration of assignments

use crate::enumeration::Assignments;
use crate::evaluator::Assignment;
use crate::parser::{self, lexer};
use crate::{DeduceError, DeduceResult, Formula, ResourceLimits};
use serde::Serialize;
use std::fmt;

/// Semantic status of a single formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// True under every assignment
    Tautology,
    /// False under every assignment
    Contradiction,
    Contingent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingent => write!(f, "contingent"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ResourceLimits,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self { limits }
    }

    pub fn classify(&self, formula: &Formula) -> DeduceResult<Classification> {
        let mut seen_true = false;
        let mut seen_false = false;
        for assignment in Assignments::over([formula], &self.limits)? {
            if formula.evaluate(&assignment)? {
                seen_true = true;
            } else {
                seen_false = true;
            }
            if seen_true && seen_false {
                return Ok(Classification::Contingent);
            }
        }
        Ok(if seen_true {
            Classification::Tautology
        } else {
            Classification::Contradiction
        })
    }

    /// Whether both formulas agree under every assignment of their combined
    /// propositions
    pub fn check_equivalence(&self, first: &Formula, second: &Formula) -> DeduceResult<bool> {
        for assignment in Assignments::over([first, second], &self.limits)? {
            if first.evaluate(&assignment)? != second.evaluate(&assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether some assignment makes every formula true
    pub fn check_consistency(&self, formulas: &[Formula]) -> DeduceResult<bool> {
        for assignment in Assignments::over(formulas, &self.limits)? {
            if all_true(formulas, &assignment)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// First assignment, in enumeration order, under which every premise is
    /// true and the conclusion false
    pub fn find_counterexample(
        &self,
        premises: &[Formula],
        conclusion: &Formula,
    ) -> DeduceResult<Option<Assignment>> {
        let assignments = Assignments::over(premises.iter().chain([conclusion]), &self.limits)?;
        for assignment in assignments {
            if all_true(premises, &assignment)? && !conclusion.evaluate(&assignment)? {
                return Ok(Some(assignment));
            }
        }
        Ok(None)
    }

    pub fn is_valid_argument(&self, premises: &[Formula], conclusion: &Formula) -> DeduceResult<bool> {
        Ok(self.find_counterexample(premises, conclusion)?.is_none())
    }

    /// Every character that cannot appear in a formula, with its position
    pub fn check_valid_characters(&self, text: &str) -> Vec<(char, usize)> {
        text.chars()
            .enumerate()
            .filter(|(_, c)| !lexer::is_formula_char(*c))
            .map(|(position, c)| (c, position))
            .collect()
    }

    /// Parse `text`, reporting the first syntax problem
    pub fn check_well_formed(&self, text: &str) -> DeduceResult<Formula> {
        parser::parse_with_limits(text, &self.limits)
    }

    /// Check that an argument is worth proving
    ///
    /// Returns a warning when the conclusion holds regardless of the premises.
    pub fn validate_premises_and_conclusion(
        &self,
        premises: &[Formula],
        conclusion: &Formula,
    ) -> DeduceResult<Option<String>> {
        if premises.is_empty() {
            return Err(DeduceError::Proof(
                "At least one premise is required".to_string(),
            ));
        }
        if !self.check_consistency(premises)? {
            return Err(DeduceError::Proof(
                "Premises are contradictory (no valid truth assignment)".to_string(),
            ));
        }
        if self.classify(conclusion)? == Classification::Tautology {
            return Ok(Some(
                "Conclusion is a tautology (always true)".to_string(),
            ));
        }
        Ok(None)
    }
}

fn all_true(formulas: &[Formula], assignment: &Assignment) -> DeduceResult<bool> {
    for formula in formulas {
        if !formula.evaluate(assignment)? {
            return Ok(false);
        }
    }
    Ok(true)
}
