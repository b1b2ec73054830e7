use deduce::{parse, DeduceError, Engine, RuleParams, SearchStop, Side, TruthTable};

#[test]
fn test_manual_proof_end_to_end() {
    let engine = Engine::new();
    let mut proof = engine
        .proof_for(&["(P ∧ Q) → R", "P", "Q"], "R")
        .unwrap();

    let step = proof.apply_rule("CI", &[2, 3], RuleParams::None).unwrap();
    assert_eq!(step.to_string(), "4. P ∧ Q (Conjunction Introduction [2, 3])");

    let step = proof.apply_rule("Modus Ponens", &[1, 4], RuleParams::None).unwrap();
    assert_eq!(step.to_string(), "5. R (Modus Ponens [1, 4])");
    assert!(proof.is_complete());
    assert!(proof.validate().is_ok());

    let deps: Vec<usize> = proof.dependencies(5).unwrap().into_iter().collect();
    assert_eq!(deps, vec![1, 2, 3, 4]);
}

#[test]
fn test_auto_prove_then_table() {
    let engine = Engine::new();
    let mut proof = engine.proof_for(&["A → B", "B → C", "A"], "C").unwrap();
    let outcome = proof.auto_prove(10).unwrap();
    assert_eq!(outcome.closing_rule, Some("Modus Ponens"));
    assert!(proof.validate().is_ok());

    let table = TruthTable::from_proof(&proof).unwrap();
    assert_eq!(
        table.headers(),
        &["A", "B", "C", "A → B", "B → C", "A", "B", "C"]
    );
    assert_eq!(table.rows().len(), 8);
}

#[test]
fn test_auto_prove_failure_keeps_partial_steps() {
    let engine = Engine::new();
    let mut proof = engine.proof_for(&["A"], "B").unwrap();
    let err = proof.auto_prove(5).unwrap_err();
    assert!(matches!(
        err,
        DeduceError::SearchExhausted {
            reason: SearchStop::BudgetExhausted,
            ..
        }
    ));
    assert!(!proof.is_complete());
    assert!(proof.steps().len() > 1);
    assert!(proof.validate().is_err());
}

#[test]
fn test_search_after_manual_steps() {
    let engine = Engine::new();
    let mut proof = engine.proof_for(&["A ∧ B", "B → C"], "C").unwrap();
    proof
        .apply_rule("SIMP", &[1], RuleParams::Side(Side::Right))
        .unwrap();
    let outcome = proof.auto_prove(10).unwrap();
    assert_eq!(outcome.closing_rule, Some("Modus Ponens"));
    assert_eq!(outcome.steps_added, 1);
}

#[test]
fn test_conclusion_change_after_progress() {
    let engine = Engine::new();
    let mut proof = engine.proof_for(&["A → B", "A"], "C").unwrap();
    proof.apply_rule("MP", &[1, 2], RuleParams::None).unwrap();
    assert!(!proof.is_complete());
    assert!(proof.set_conclusion(parse("B").unwrap()));
}
