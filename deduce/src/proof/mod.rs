//! Proof state and manual derivation
//!
//! A `ProofState` is an append-only list of numbered steps plus an optional
//! conclusion. Every mutation either fully succeeds or leaves the state
//! untouched.

pub mod search;
pub mod step;

pub use search::SearchOutcome;
pub use step::{Justification, ProofStep};

use crate::response::ProofData;
use crate::rules::{RuleCatalog, RuleDescriptor, RuleParams};
use crate::{DeduceError, DeduceResult, Formula, ResourceLimits, Validator};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ProofState {
    catalog: Arc<RuleCatalog>,
    limits: ResourceLimits,
    steps: Vec<ProofStep>,
    premises: Vec<Formula>,
    conclusion: Option<Formula>,
    complete: bool,
}

impl Default for ProofState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofState {
    /// An empty proof over the standard rule catalog
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(RuleCatalog::standard()), ResourceLimits::default())
    }

    /// An empty proof sharing an existing catalog
    pub fn with_catalog(catalog: Arc<RuleCatalog>, limits: ResourceLimits) -> Self {
        Self {
            catalog,
            limits,
            steps: Vec::new(),
            premises: Vec::new(),
            conclusion: None,
            complete: false,
        }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Append a premise step, returning its index
    pub fn add_premise(&mut self, formula: Formula) -> DeduceResult<usize> {
        if self.premises.contains(&formula) {
            return Err(DeduceError::Proof("Premise already exists".to_string()));
        }
        let index = self.next_index();
        self.premises.push(formula.clone());
        self.steps.push(ProofStep::premise(index, formula));
        self.refresh_completion();
        Ok(index)
    }

    /// Replace the goal; returns whether the proof is now complete
    pub fn set_conclusion(&mut self, formula: Formula) -> bool {
        self.conclusion = Some(formula);
        self.refresh_completion();
        self.complete
    }

    /// Apply a rule, looked up by name or abbreviation, to the given steps
    pub fn apply_rule(
        &mut self,
        rule: &str,
        step_indices: &[usize],
        params: RuleParams,
    ) -> DeduceResult<ProofStep> {
        let descriptor = *self
            .catalog
            .get(rule)
            .ok_or_else(|| DeduceError::rule(format!("Unknown rule '{}'", rule)))?;

        let formula = {
            let inputs = self.formulas_for(step_indices)?;
            descriptor.apply(&inputs, &params)?
        };

        if self.contains_formula(&formula) {
            return Err(DeduceError::rule("This formula already exists in the proof"));
        }

        let index = self.push_derived(formula, &descriptor, step_indices.to_vec());
        self.step(index)
            .cloned()
            .ok_or_else(|| DeduceError::Engine(format!("Step {} vanished after insertion", index)))
    }

    /// Reset to an empty proof; numbering restarts at 1
    pub fn clear(&mut self) {
        self.steps.clear();
        self.premises.clear();
        self.conclusion = None;
        self.complete = false;
    }

    pub fn step(&self, index: usize) -> Option<&ProofStep> {
        index.checked_sub(1).and_then(|position| self.steps.get(position))
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    pub fn conclusion(&self) -> Option<&Formula> {
        self.conclusion.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Every step the given step rests on, directly or transitively
    pub fn dependencies(&self, index: usize) -> DeduceResult<BTreeSet<usize>> {
        let mut found = BTreeSet::new();
        let mut pending = self.require_step(index)?.dependencies.clone();

        while let Some(dependency) = pending.pop() {
            if found.insert(dependency) {
                pending.extend(self.require_step(dependency)?.dependencies.iter().copied());
            }
        }
        Ok(found)
    }

    /// Check that the proof is well-formed, sound step by step, and finished
    pub fn validate(&self) -> DeduceResult<()> {
        let conclusion = self
            .conclusion
            .as_ref()
            .ok_or_else(|| DeduceError::Proof("No conclusion set".to_string()))?;
        if self.premises.is_empty() {
            return Err(DeduceError::Proof("No premises given".to_string()));
        }

        let validator = Validator::with_limits(self.limits.clone());
        for step in self.steps.iter().filter(|step| !step.is_premise()) {
            let mut inputs = Vec::with_capacity(step.dependencies.len());
            for &dependency in &step.dependencies {
                if dependency >= step.index || self.step(dependency).is_none() {
                    return Err(DeduceError::Proof(format!(
                        "Step {} depends on step {}, which does not precede it",
                        step.index, dependency
                    )));
                }
                inputs.push(self.require_step(dependency)?.formula.clone());
            }
            if validator
                .find_counterexample(&inputs, &step.formula)?
                .is_some()
            {
                return Err(DeduceError::Proof(format!(
                    "Step {} does not follow from its dependencies",
                    step.index
                )));
            }
        }

        if !self.complete {
            return Err(DeduceError::Proof(format!(
                "Conclusion {} has not been derived",
                conclusion
            )));
        }
        Ok(())
    }

    /// Serializable snapshot of the whole proof
    pub fn proof_data(&self) -> ProofData {
        ProofData {
            premises: self.premises.clone(),
            conclusion: self.conclusion.clone(),
            steps: self.steps.clone(),
            is_complete: self.complete,
        }
    }

    fn next_index(&self) -> usize {
        self.steps.len() + 1
    }

    fn require_step(&self, index: usize) -> DeduceResult<&ProofStep> {
        self.step(index)
            .ok_or_else(|| DeduceError::rule(format!("Step {} not found", index)))
    }

    fn formulas_for(&self, step_indices: &[usize]) -> DeduceResult<Vec<&Formula>> {
        step_indices
            .iter()
            .map(|&index| self.require_step(index).map(|step| &step.formula))
            .collect()
    }

    fn contains_formula(&self, formula: &Formula) -> bool {
        self.steps.iter().any(|step| step.formula == *formula)
    }

    fn push_derived(
        &mut self,
        formula: Formula,
        rule: &RuleDescriptor,
        dependencies: Vec<usize>,
    ) -> usize {
        let index = self.next_index();
        self.steps
            .push(ProofStep::derived(index, formula, rule.name, dependencies));
        self.refresh_completion();
        index
    }

    /// Derive from the steps at the given list positions, skipping silently
    /// when the rule does not fit or the result is already present
    fn try_derive(
        &mut self,
        rule: &RuleDescriptor,
        positions: &[usize],
        params: &RuleParams,
    ) -> bool {
        let derived = {
            let inputs: Vec<&Formula> = positions
                .iter()
                .filter_map(|&position| self.steps.get(position))
                .map(|step| &step.formula)
                .collect();
            if inputs.len() != positions.len() || !rule.can_apply(&inputs, params) {
                return false;
            }
            match rule.apply(&inputs, params) {
                Ok(formula) => formula,
                Err(_) => return false,
            }
        };

        if self.contains_formula(&derived) {
            return false;
        }
        let dependencies = positions
            .iter()
            .map(|&position| self.steps[position].index)
            .collect();
        self.push_derived(derived, rule, dependencies);
        true
    }

    fn refresh_completion(&mut self) {
        self.complete = match &self.conclusion {
            Some(goal) => self.contains_formula(goal),
            None => false,
        };
    }
}

impl fmt::Display for ProofState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        match &self.conclusion {
            Some(goal) if self.complete => write!(f, "⊢ {} (proved)", goal),
            Some(goal) => write!(f, "⊢ {} (open)", goal),
            None => write!(f, "⊢ ? (no conclusion)"),
        }
    }
}
