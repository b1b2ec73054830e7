//! Inference rule catalog
//!
//! Rules are data: each `RuleDescriptor` pairs a precondition predicate with
//! a conclusion builder over an ordered tuple of input formulas. The standard
//! catalog holds the nineteen rules below, in the order the proof search
//! tries them.

pub mod connectives;
pub mod equivalences;
pub mod syllogisms;

use crate::ast::Node;
pub use crate::response::RuleInfo;
use crate::{DeduceError, DeduceResult, Formula, ResourceLimits};
use serde::Serialize;
use std::fmt;

/// Which conjunct Conjunction Elimination extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Which implication Biconditional Elimination produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `P↔Q` gives `P→Q`
    Forward,
    /// `P↔Q` gives `Q→P`
    Backward,
}

/// Whether Double Negation removes or adds `¬¬`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NegationMode {
    Eliminate,
    Introduce,
}

/// Extra, rule-specific input supplied alongside the step indices
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuleParams {
    /// Use the rule's default setting
    #[default]
    None,
    Side(Side),
    Direction(Direction),
    Mode(NegationMode),
    /// The formula Addition joins to its input
    Disjunct(Formula),
}

impl fmt::Display for RuleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleParams::None => write!(f, "none"),
            RuleParams::Side(Side::Left) => write!(f, "left"),
            RuleParams::Side(Side::Right) => write!(f, "right"),
            RuleParams::Direction(Direction::Forward) => write!(f, "forward"),
            RuleParams::Direction(Direction::Backward) => write!(f, "backward"),
            RuleParams::Mode(NegationMode::Eliminate) => write!(f, "eliminate"),
            RuleParams::Mode(NegationMode::Introduce) => write!(f, "introduce"),
            RuleParams::Disjunct(formula) => write!(f, "{}", formula),
        }
    }
}

/// The kind of parameter a rule takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    None,
    Side,
    Direction,
    Mode,
    Disjunct,
}

impl ParameterKind {
    /// Setting used when the caller passes `RuleParams::None`
    fn default_params(&self) -> Option<RuleParams> {
        match self {
            ParameterKind::None => Some(RuleParams::None),
            ParameterKind::Side => Some(RuleParams::Side(Side::Left)),
            ParameterKind::Direction => Some(RuleParams::Direction(Direction::Forward)),
            ParameterKind::Mode => Some(RuleParams::Mode(NegationMode::Eliminate)),
            ParameterKind::Disjunct => None,
        }
    }

    fn accepts(&self, params: &RuleParams) -> bool {
        matches!(
            (self, params),
            (ParameterKind::None, RuleParams::None)
                | (ParameterKind::Side, RuleParams::Side(_))
                | (ParameterKind::Direction, RuleParams::Direction(_))
                | (ParameterKind::Mode, RuleParams::Mode(_))
                | (ParameterKind::Disjunct, RuleParams::Disjunct(_))
        )
    }

    /// Every setting the automatic search tries, in order
    ///
    /// Empty for `Disjunct`: its parameter is an arbitrary formula.
    pub fn search_settings(&self) -> Vec<RuleParams> {
        match self {
            ParameterKind::None => vec![RuleParams::None],
            ParameterKind::Side => vec![
                RuleParams::Side(Side::Left),
                RuleParams::Side(Side::Right),
            ],
            ParameterKind::Direction => vec![
                RuleParams::Direction(Direction::Forward),
                RuleParams::Direction(Direction::Backward),
            ],
            ParameterKind::Mode => vec![
                RuleParams::Mode(NegationMode::Eliminate),
                RuleParams::Mode(NegationMode::Introduce),
            ],
            ParameterKind::Disjunct => Vec::new(),
        }
    }

    /// Read a parameter written as text, e.g. `right`, `backward`,
    /// `introduce`, or a formula for `Disjunct` (parsed under `limits`)
    pub fn parse_params(&self, text: &str, limits: &ResourceLimits) -> DeduceResult<RuleParams> {
        let word = text.trim().to_ascii_lowercase();
        let params = match (self, word.as_str()) {
            (ParameterKind::Side, "left") => RuleParams::Side(Side::Left),
            (ParameterKind::Side, "right") => RuleParams::Side(Side::Right),
            (ParameterKind::Direction, "forward") => RuleParams::Direction(Direction::Forward),
            (ParameterKind::Direction, "backward") => RuleParams::Direction(Direction::Backward),
            (ParameterKind::Mode, "eliminate") => RuleParams::Mode(NegationMode::Eliminate),
            (ParameterKind::Mode, "introduce") => RuleParams::Mode(NegationMode::Introduce),
            (ParameterKind::Disjunct, _) => RuleParams::Disjunct(crate::parse_with_limits(text, limits)?),
            (ParameterKind::None, _) => {
                return Err(DeduceError::rule(format!(
                    "Rule takes no parameter, got '{}'",
                    text.trim()
                )))
            }
            _ => {
                return Err(DeduceError::rule(format!(
                    "'{}' is not {} parameter",
                    text.trim(),
                    self.name()
                )))
            }
        };
        Ok(params)
    }

    fn name(&self) -> &'static str {
        match self {
            ParameterKind::None => "no",
            ParameterKind::Side => "a side",
            ParameterKind::Direction => "a direction",
            ParameterKind::Mode => "a mode",
            ParameterKind::Disjunct => "a disjunct",
        }
    }
}

/// Shape test over the input trees; never has side effects
pub type Precondition = fn(&[&Node], &RuleParams) -> bool;

/// Builds the derived tree; `None` when the inputs do not fit the rule
pub type Conclusion = fn(&[&Node], &RuleParams) -> Option<Node>;

/// An immutable inference rule
#[derive(Debug, Clone, Copy)]
pub struct RuleDescriptor {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub description: &'static str,
    pub arity: usize,
    pub parameter: ParameterKind,
    precondition: Precondition,
    conclusion: Conclusion,
}

impl RuleDescriptor {
    pub const fn new(
        name: &'static str,
        abbreviation: &'static str,
        description: &'static str,
        arity: usize,
        parameter: ParameterKind,
        precondition: Precondition,
        conclusion: Conclusion,
    ) -> Self {
        Self {
            name,
            abbreviation,
            description,
            arity,
            parameter,
            precondition,
            conclusion,
        }
    }

    /// Check `params` against this rule, filling in the default setting
    pub fn resolve_params(&self, params: &RuleParams) -> DeduceResult<RuleParams> {
        if *params == RuleParams::None {
            return self.parameter.default_params().ok_or_else(|| {
                DeduceError::rule(format!(
                    "{} requires {} parameter",
                    self.name,
                    self.parameter.name()
                ))
            });
        }
        if !self.parameter.accepts(params) {
            return Err(DeduceError::rule(format!(
                "{} takes {} parameter, got '{}'",
                self.name,
                self.parameter.name(),
                params
            )));
        }
        Ok(params.clone())
    }

    /// Whether the rule applies to `formulas` in this order
    pub fn can_apply(&self, formulas: &[&Formula], params: &RuleParams) -> bool {
        if formulas.len() != self.arity {
            return false;
        }
        match self.resolve_params(params) {
            Ok(params) => {
                let nodes = roots(formulas);
                (self.precondition)(&nodes, &params)
            }
            Err(_) => false,
        }
    }

    /// Derive the conclusion, re-checking the precondition first
    pub fn apply(&self, formulas: &[&Formula], params: &RuleParams) -> DeduceResult<Formula> {
        if formulas.len() != self.arity {
            return Err(DeduceError::rule(format!(
                "{} needs {} formula(s), got {}",
                self.name,
                self.arity,
                formulas.len()
            )));
        }
        let params = self.resolve_params(params)?;
        let nodes = roots(formulas);

        if !(self.precondition)(&nodes, &params) {
            return Err(DeduceError::rule(format!(
                "Rule {} cannot be applied to selected steps",
                self.name
            )));
        }

        (self.conclusion)(&nodes, &params)
            .map(Formula::from_node)
            .ok_or_else(|| DeduceError::rule(format!("Rule {} application failed", self.name)))
    }

    pub fn info(&self) -> RuleInfo {
        RuleInfo {
            name: self.name,
            abbreviation: self.abbreviation,
            description: self.description,
            arity: self.arity,
            parameter: self.parameter,
        }
    }

    fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.abbreviation.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}

fn roots<'a>(formulas: &[&'a Formula]) -> Vec<&'a Node> {
    formulas.iter().map(|formula| formula.root()).collect()
}

/// Ordered, immutable set of rules
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<RuleDescriptor>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleCatalog {
    /// A catalog holding exactly `rules`, in the given order
    pub fn new(rules: Vec<RuleDescriptor>) -> Self {
        Self { rules }
    }

    /// The nineteen standard rules
    pub fn standard() -> Self {
        Self::new(vec![
            syllogisms::MODUS_PONENS,
            syllogisms::MODUS_TOLLENS,
            syllogisms::HYPOTHETICAL_SYLLOGISM,
            syllogisms::DISJUNCTIVE_SYLLOGISM,
            connectives::CONJUNCTION_INTRODUCTION,
            connectives::CONJUNCTION_ELIMINATION,
            connectives::ADDITION,
            connectives::SIMPLIFICATION,
            connectives::BICONDITIONAL_INTRODUCTION,
            connectives::BICONDITIONAL_ELIMINATION,
            equivalences::DOUBLE_NEGATION,
            equivalences::DE_MORGAN_CONJUNCTION,
            equivalences::DE_MORGAN_DISJUNCTION,
            equivalences::TRANSPOSITION,
            equivalences::IMPLICATION,
            equivalences::EXPORTATION,
            syllogisms::RESOLUTION,
            equivalences::ABSORPTION,
            syllogisms::CONSTRUCTIVE_DILEMMA,
        ])
    }

    /// Look a rule up by full name or abbreviation, ignoring case
    pub fn get(&self, name: &str) -> Option<&RuleDescriptor> {
        let name = name.trim();
        self.rules.iter().find(|rule| rule.matches_name(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleDescriptor> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn summaries(&self) -> Vec<RuleInfo> {
        self.rules.iter().map(RuleDescriptor::info).collect()
    }
}

impl<'a> IntoIterator for &'a RuleCatalog {
    type Item = &'a RuleDescriptor;
    type IntoIter = std::slice::Iter<'a, RuleDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
