use crate::proof::ProofStep;
use crate::rules::ParameterKind;
use crate::Formula;
use serde::Serialize;

/// Snapshot of a proof for display or serialization
///
/// Formulas serialize as their canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofData {
    pub premises: Vec<Formula>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<Formula>,
    pub steps: Vec<ProofStep>,
    pub is_complete: bool,
}

/// Public summary of a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub description: &'static str,
    pub arity: usize,
    pub parameter: ParameterKind,
}
