//! Breadth-first forward-chaining proof search
//!
//! Rounds sweep the catalog in order. Within a rule's pass the first input
//! ranges over the steps present when the pass began, while the remaining
//! inputs range over the live list, so a step derived earlier in the same
//! pass can already serve as a partner. Input tuples are tried in ascending
//! position order, each as its permutations in lexicographic order until one
//! succeeds.

use super::ProofState;
use crate::error::SearchStop;
use crate::rules::{RuleDescriptor, RuleParams};
use crate::{DeduceError, DeduceResult};
use serde::Serialize;
use std::sync::Arc;

/// Result of a successful search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Rule whose application reached the conclusion; `None` when the proof
    /// was already complete
    pub closing_rule: Option<&'static str>,
    pub steps_added: usize,
    pub message: String,
}

impl ProofState {
    /// Search using the step budget from the configured limits
    pub fn auto_prove_default(&mut self) -> DeduceResult<SearchOutcome> {
        let budget = self.limits().max_search_steps;
        self.auto_prove(budget)
    }

    /// Try to derive the conclusion by applying rules, adding at most
    /// `max_steps` steps
    ///
    /// Steps derived before the search gives up are kept.
    pub fn auto_prove(&mut self, max_steps: usize) -> DeduceResult<SearchOutcome> {
        if self.conclusion().is_none() {
            return Err(DeduceError::Proof("No conclusion set".to_string()));
        }
        if self.premises().is_empty() {
            return Err(DeduceError::Proof("No premises given".to_string()));
        }
        if self.is_complete() {
            return Ok(SearchOutcome {
                closing_rule: None,
                steps_added: 0,
                message: "Proof is already complete".to_string(),
            });
        }

        let mut search = Search {
            added: 0,
            max_steps,
        };
        if max_steps == 0 {
            return Err(search.exhausted(SearchStop::BudgetExhausted));
        }

        let catalog = Arc::clone(&self.catalog);
        loop {
            let before = search.added;
            for rule in catalog.iter() {
                if let Some(done) = search.run_rule(self, rule) {
                    return done;
                }
            }
            if search.added == before {
                return Err(search.exhausted(SearchStop::Saturated));
            }
        }
    }
}

struct Search {
    added: usize,
    max_steps: usize,
}

type Finished = Option<DeduceResult<SearchOutcome>>;

impl Search {
    fn run_rule(&mut self, state: &mut ProofState, rule: &RuleDescriptor) -> Finished {
        let settings = rule.parameter.search_settings();
        if settings.is_empty() {
            return None;
        }
        let snapshot = state.steps.len();
        let mut chosen = Vec::with_capacity(rule.arity);
        self.extend(state, rule, &settings, &mut chosen, snapshot)
    }

    /// Grow an ascending tuple of step positions until it reaches the rule's arity
    fn extend(
        &mut self,
        state: &mut ProofState,
        rule: &RuleDescriptor,
        settings: &[RuleParams],
        chosen: &mut Vec<usize>,
        snapshot: usize,
    ) -> Finished {
        if chosen.len() == rule.arity {
            return self.try_tuple(state, rule, settings, chosen);
        }

        let mut position = chosen.last().map_or(0, |last| last + 1);
        loop {
            let bound = if chosen.is_empty() {
                snapshot
            } else {
                state.steps.len()
            };
            if position >= bound {
                return None;
            }
            chosen.push(position);
            let done = self.extend(state, rule, settings, chosen, snapshot);
            chosen.pop();
            if done.is_some() {
                return done;
            }
            position += 1;
        }
    }

    fn try_tuple(
        &mut self,
        state: &mut ProofState,
        rule: &RuleDescriptor,
        settings: &[RuleParams],
        tuple: &[usize],
    ) -> Finished {
        for params in settings {
            for order in permutations(tuple) {
                if state.try_derive(rule, &order, params) {
                    if let Some(done) = self.record(state, rule) {
                        return Some(done);
                    }
                    break;
                }
            }
        }
        None
    }

    fn record(&mut self, state: &ProofState, rule: &RuleDescriptor) -> Finished {
        self.added += 1;
        if state.is_complete() {
            return Some(Ok(SearchOutcome {
                closing_rule: Some(rule.name),
                steps_added: self.added,
                message: format!("Proof completed using {}", rule.name),
            }));
        }
        if self.added >= self.max_steps {
            return Some(Err(self.exhausted(SearchStop::BudgetExhausted)));
        }
        None
    }

    fn exhausted(&self, reason: SearchStop) -> DeduceError {
        DeduceError::SearchExhausted {
            reason,
            steps_added: self.added,
        }
    }
}

/// All orderings of `items`, lexicographic when `items` is ascending
fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for (i, &head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            result.push(tail);
        }
    }
    result
}
