use crate::rules::{syllogisms, RuleCatalog};
use crate::{parse, DeduceError, ProofState, ResourceLimits, SearchStop};
use std::sync::Arc;

fn setup(proof: &mut ProofState, premises: &[&str], conclusion: &str) {
    for premise in premises {
        proof.add_premise(parse(premise).unwrap()).unwrap();
    }
    proof.set_conclusion(parse(conclusion).unwrap());
}

#[test]
fn test_auto_prove_chain() {
    let mut proof = ProofState::new();
    setup(&mut proof, &["A → B", "B → C", "A"], "C");

    let outcome = proof.auto_prove(10).unwrap();
    assert!(proof.is_complete());
    assert_eq!(outcome.closing_rule, Some("Modus Ponens"));
    assert_eq!(outcome.steps_added, 2);

    let lines: Vec<String> = proof.steps().iter().map(|s| s.to_string()).collect();
    assert_eq!(lines[3], "4. B (Modus Ponens [1, 3])");
    assert_eq!(lines[4], "5. C (Modus Ponens [2, 4])");
}

#[test]
fn test_auto_prove_gives_up_within_budget() {
    let mut proof = ProofState::new();
    setup(&mut proof, &["A"], "B");

    let err = proof.auto_prove(5).unwrap_err();
    match &err {
        DeduceError::SearchExhausted {
            reason,
            steps_added,
        } => {
            assert_eq!(*reason, SearchStop::BudgetExhausted);
            assert_eq!(*steps_added, 5);
        }
        other => panic!("expected exhausted search, got {:?}", other),
    }
    assert!(err
        .to_string()
        .starts_with("Could not complete proof within the step limit"));
    assert!(!proof.is_complete());
    assert_eq!(proof.steps().len(), 6);
}

#[test]
fn test_auto_prove_saturates() {
    let catalog = Arc::new(RuleCatalog::new(vec![syllogisms::MODUS_PONENS]));
    let mut proof = ProofState::with_catalog(catalog, ResourceLimits::default());
    setup(&mut proof, &["A → B", "A"], "C");

    let err = proof.auto_prove(50).unwrap_err();
    assert!(matches!(
        err,
        DeduceError::SearchExhausted {
            reason: SearchStop::Saturated,
            steps_added: 1
        }
    ));
    assert!(err
        .to_string()
        .starts_with("Could not complete proof: no new steps can be derived"));
    assert_eq!(proof.steps().len(), 3);
}

#[test]
fn test_auto_prove_already_complete() {
    let mut proof = ProofState::new();
    setup(&mut proof, &["A", "B"], "A");

    let outcome = proof.auto_prove(10).unwrap();
    assert_eq!(outcome.closing_rule, None);
    assert_eq!(outcome.steps_added, 0);
    assert_eq!(proof.steps().len(), 2);
}

#[test]
fn test_auto_prove_requires_goal_and_premises() {
    let mut proof = ProofState::new();
    proof.add_premise(parse("A").unwrap()).unwrap();
    assert_eq!(proof.auto_prove(10).unwrap_err().message(), "No conclusion set");

    let mut proof = ProofState::new();
    proof.set_conclusion(parse("A").unwrap());
    assert_eq!(proof.auto_prove(10).unwrap_err().message(), "No premises given");
}

#[test]
fn test_auto_prove_uses_disjunctive_syllogism() {
    let mut proof = ProofState::new();
    setup(&mut proof, &["A ∨ B", "¬A"], "B");

    let outcome = proof.auto_prove(10).unwrap();
    assert_eq!(outcome.closing_rule, Some("Disjunctive Syllogism"));
    assert_eq!(outcome.steps_added, 1);
}

#[test]
fn test_auto_prove_constructive_dilemma() {
    let catalog = Arc::new(RuleCatalog::new(vec![syllogisms::CONSTRUCTIVE_DILEMMA]));
    let mut proof = ProofState::with_catalog(catalog, ResourceLimits::default());
    setup(&mut proof, &["P ∨ R", "P → Q", "R → S"], "Q ∨ S");

    let outcome = proof.auto_prove(5).unwrap();
    assert_eq!(outcome.closing_rule, Some("Constructive Dilemma"));
    assert_eq!(proof.step(4).unwrap().dependencies, vec![1, 2, 3]);
}

#[test]
fn test_auto_prove_default_budget() {
    let mut proof = ProofState::new();
    setup(&mut proof, &["A → B", "A"], "B");
    assert!(proof.auto_prove_default().is_ok());
    assert!(proof.validate().is_ok());
}

#[test]
fn test_zero_budget() {
    let mut proof = ProofState::new();
    setup(&mut proof, &["A → B", "A"], "B");
    let err = proof.auto_prove(0).unwrap_err();
    assert!(matches!(
        err,
        DeduceError::SearchExhausted {
            reason: SearchStop::BudgetExhausted,
            steps_added: 0
        }
    ));
    assert_eq!(proof.steps().len(), 2);
}
