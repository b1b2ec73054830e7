use crate::parser::parse_with_limits;
use crate::proof::ProofState;
use crate::rules::{RuleCatalog, RuleInfo};
use crate::{Classification, DeduceResult, Formula, ResourceLimits, TruthTable, Validator};
use std::sync::Arc;

/// The deduce engine.
///
/// Bundles the shared rule catalog with one set of resource limits so that
/// every formula, proof and table it hands out is checked the same way.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<RuleCatalog>,
    validator: Validator,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_limits(ResourceLimits::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            catalog: Arc::new(RuleCatalog::standard()),
            validator: Validator::with_limits(limits.clone()),
            limits,
        }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn parse(&self, text: &str) -> DeduceResult<Formula> {
        parse_with_limits(text, &self.limits)
    }

    pub fn parse_all<S: AsRef<str>>(&self, texts: &[S]) -> DeduceResult<Vec<Formula>> {
        texts.iter().map(|text| self.parse(text.as_ref())).collect()
    }

    pub fn rule_catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> Vec<RuleInfo> {
        self.catalog.summaries()
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// An empty proof sharing this engine's catalog and limits
    pub fn new_proof(&self) -> ProofState {
        ProofState::with_catalog(Arc::clone(&self.catalog), self.limits.clone())
    }

    /// A proof with the given premises and conclusion already in place
    pub fn proof_for<S: AsRef<str>>(&self, premises: &[S], conclusion: &str) -> DeduceResult<ProofState> {
        let mut proof = self.new_proof();
        for premise in self.parse_all(premises)? {
            proof.add_premise(premise)?;
        }
        proof.set_conclusion(self.parse(conclusion)?);
        Ok(proof)
    }

    pub fn truth_table<S: AsRef<str>>(&self, texts: &[S]) -> DeduceResult<TruthTable> {
        let formulas = self.parse_all(texts)?;
        let mut table = TruthTable::with_limits(self.limits.clone());
        table.generate(&formulas)?;
        Ok(table)
    }

    pub fn classify(&self, text: &str) -> DeduceResult<Classification> {
        let formula = self.parse(text)?;
        self.validator.classify(&formula)
    }
}
