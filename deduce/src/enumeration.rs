//! Deterministic enumeration of truth assignments
//!
//! Shared by the truth table and the validator so both see rows in the same
//! order: `true` before `false`, first proposition most significant.

use crate::evaluator::Assignment;
use crate::{DeduceError, DeduceResult, Formula, ResourceLimits};
use std::collections::BTreeSet;

/// Sorted union of the propositions referenced by `formulas`
pub fn propositions_of<'a, I>(formulas: I) -> Vec<char>
where
    I: IntoIterator<Item = &'a Formula>,
{
    let mut all = BTreeSet::new();
    for formula in formulas {
        all.extend(formula.atomic_propositions().iter().copied());
    }
    all.into_iter().collect()
}

/// Iterator over all `2^k` assignments of a proposition list
#[derive(Debug, Clone)]
pub struct Assignments {
    propositions: Vec<char>,
    next_row: u64,
    rows: u64,
}

impl Assignments {
    pub fn new(propositions: Vec<char>, limits: &ResourceLimits) -> DeduceResult<Self> {
        if propositions.len() > limits.max_table_propositions {
            return Err(DeduceError::ResourceLimitExceeded {
                limit_name: "max_table_propositions".to_string(),
                limit_value: limits.max_table_propositions.to_string(),
                actual_value: propositions.len().to_string(),
                suggestion: "Use fewer distinct propositions".to_string(),
            });
        }
        let rows = 1u64 << propositions.len();
        Ok(Self {
            propositions,
            next_row: 0,
            rows,
        })
    }

    /// Enumerate the assignments of every proposition referenced by `formulas`
    pub fn over<'a, I>(formulas: I, limits: &ResourceLimits) -> DeduceResult<Self>
    where
        I: IntoIterator<Item = &'a Formula>,
    {
        Self::new(propositions_of(formulas), limits)
    }

    pub fn propositions(&self) -> &[char] {
        &self.propositions
    }

    pub fn row_count(&self) -> u64 {
        self.rows
    }

    fn assignment_for(&self, row: u64) -> Assignment {
        let width = self.propositions.len();
        self.propositions
            .iter()
            .enumerate()
            .map(|(i, letter)| {
                let bit = (row >> (width - 1 - i)) & 1;
                (*letter, bit == 0)
            })
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.rows {
            return None;
        }
        let assignment = self.assignment_for(self.next_row);
        self.next_row += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.rows - self.next_row) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}
