use crate::Formula;
use serde::Serialize;
use std::fmt;

/// How a step entered the proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "rule", rename_all = "snake_case")]
pub enum Justification {
    Premise,
    /// Derived by the named rule
    Rule(&'static str),
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Justification::Premise => write!(f, "Premise"),
            Justification::Rule(name) => write!(f, "{}", name),
        }
    }
}

/// One numbered line of a proof
///
/// Indices start at 1 and are never reused until the proof is cleared.
/// Dependencies always point at earlier steps, in the order they were fed
/// to the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofStep {
    pub index: usize,
    pub formula: Formula,
    pub justification: Justification,
    pub dependencies: Vec<usize>,
}

impl ProofStep {
    pub fn premise(index: usize, formula: Formula) -> Self {
        Self {
            index,
            formula,
            justification: Justification::Premise,
            dependencies: Vec::new(),
        }
    }

    pub fn derived(
        index: usize,
        formula: Formula,
        rule: &'static str,
        dependencies: Vec<usize>,
    ) -> Self {
        Self {
            index,
            formula,
            justification: Justification::Rule(rule),
            dependencies,
        }
    }

    pub fn is_premise(&self) -> bool {
        self.justification == Justification::Premise
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({}", self.index, self.formula, self.justification)?;
        if !self.dependencies.is_empty() {
            let deps: Vec<String> = self.dependencies.iter().map(|d| d.to_string()).collect();
            write!(f, " [{}]", deps.join(", "))?;
        }
        write!(f, ")")
    }
}
