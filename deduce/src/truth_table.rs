//! Truth tables over a list of formulas
//!
//! Columns are the sorted propositions followed by one column per formula.
//! A cell whose formula could not be evaluated is `None`.

use crate::enumeration::Assignments;
use crate::proof::ProofState;
use crate::{DeduceError, DeduceResult, Formula, ResourceLimits};
use serde::Serialize;

/// Plain snapshot of a table, ready for rendering or serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<bool>>>,
    pub is_empty: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TruthTable {
    limits: ResourceLimits,
    formulas: Vec<Formula>,
    propositions: Vec<char>,
    headers: Vec<String>,
    rows: Vec<Vec<Option<bool>>>,
}

impl TruthTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Build a table for `formulas`, replacing any previous contents
    ///
    /// On failure the previous contents are kept.
    pub fn generate(&mut self, formulas: &[Formula]) -> DeduceResult<()> {
        if formulas.is_empty() {
            return Err(DeduceError::Engine("No formulas provided".to_string()));
        }
        let assignments = Assignments::over(formulas, &self.limits)?;
        let propositions = assignments.propositions().to_vec();

        let mut headers: Vec<String> = propositions.iter().map(char::to_string).collect();
        headers.extend(formulas.iter().map(Formula::to_string));

        let mut rows = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let mut row: Vec<Option<bool>> = propositions
                .iter()
                .map(|letter| assignment.get(letter).copied())
                .collect();
            row.extend(
                formulas
                    .iter()
                    .map(|formula| formula.evaluate(&assignment).ok()),
            );
            rows.push(row);
        }

        self.formulas = formulas.to_vec();
        self.propositions = propositions;
        self.headers = headers;
        self.rows = rows;
        Ok(())
    }

    /// Table of a proof's premises, derived formulas and conclusion, each once
    pub fn from_proof(proof: &ProofState) -> DeduceResult<Self> {
        let mut formulas: Vec<Formula> = Vec::new();
        let candidates = proof
            .premises()
            .iter()
            .chain(
                proof
                    .steps()
                    .iter()
                    .filter(|step| !step.is_premise())
                    .map(|step| &step.formula),
            )
            .chain(proof.conclusion());
        for formula in candidates {
            if !formulas.contains(formula) {
                formulas.push(formula.clone());
            }
        }

        let mut table = Self::with_limits(proof.limits().clone());
        table.generate(&formulas)?;
        Ok(table)
    }

    pub fn clear(&mut self) {
        self.formulas.clear();
        self.propositions.clear();
        self.headers.clear();
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<bool>>] {
        &self.rows
    }

    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn propositions(&self) -> &[char] {
        &self.propositions
    }

    pub fn data(&self) -> TableData {
        TableData {
            headers: self.headers.clone(),
            rows: self.rows.clone(),
            is_empty: self.is_empty(),
        }
    }

    /// Whether the formula at `formula_index` is true in every row
    ///
    /// `false` for an out-of-range index or an empty table.
    pub fn is_tautology(&self, formula_index: usize) -> bool {
        self.column(formula_index)
            .is_some_and(|mut cells| cells.all(|cell| cell == Some(true)))
    }

    pub fn is_contradiction(&self, formula_index: usize) -> bool {
        self.column(formula_index)
            .is_some_and(|mut cells| cells.all(|cell| cell == Some(false)))
    }

    /// Indices of the rows where the formula at `formula_index` is true
    pub fn rows_where_true(&self, formula_index: usize) -> Vec<usize> {
        match self.column(formula_index) {
            Some(cells) => cells
                .enumerate()
                .filter(|(_, cell)| *cell == Some(true))
                .map(|(row, _)| row)
                .collect(),
            None => Vec::new(),
        }
    }

    fn column(&self, formula_index: usize) -> Option<impl Iterator<Item = Option<bool>> + '_> {
        if formula_index >= self.formulas.len() {
            return None;
        }
        let column = self.propositions.len() + formula_index;
        Some(self.rows.iter().map(move |row| row.get(column).copied().flatten()))
    }
}
