use crate::rules::{RuleParams, Side};
use crate::{parse, DeduceError, Justification, ProofState};

fn proof_with(premises: &[&str], conclusion: Option<&str>) -> ProofState {
    let mut proof = ProofState::new();
    for premise in premises {
        proof.add_premise(parse(premise).unwrap()).unwrap();
    }
    if let Some(goal) = conclusion {
        proof.set_conclusion(parse(goal).unwrap());
    }
    proof
}

#[test]
fn test_modus_ponens_step() {
    let mut proof = proof_with(&["P → Q", "P"], Some("Q"));
    assert!(!proof.is_complete());

    let step = proof.apply_rule("MP", &[1, 2], RuleParams::None).unwrap();
    assert_eq!(step.index, 3);
    assert_eq!(step.formula.to_string(), "Q");
    assert_eq!(step.justification, Justification::Rule("Modus Ponens"));
    assert_eq!(step.dependencies, vec![1, 2]);
    assert_eq!(step.to_string(), "3. Q (Modus Ponens [1, 2])");
    assert!(proof.is_complete());
}

#[test]
fn test_premise_display() {
    let proof = proof_with(&["A ∧ B"], None);
    assert_eq!(proof.step(1).unwrap().to_string(), "1. A ∧ B (Premise)");
}

#[test]
fn test_duplicate_premise_rejected() {
    let mut proof = proof_with(&["A ∧ B"], None);
    let err = proof.add_premise(parse("(A & B)").unwrap()).unwrap_err();
    assert_eq!(err.message(), "Premise already exists");
    assert_eq!(proof.steps().len(), 1);
}

#[test]
fn test_missing_step() {
    let mut proof = proof_with(&["A → B", "A"], None);
    let err = proof.apply_rule("MP", &[1, 5], RuleParams::None).unwrap_err();
    assert_eq!(err.message(), "Step 5 not found");
    let err = proof.apply_rule("MP", &[0, 1], RuleParams::None).unwrap_err();
    assert_eq!(err.message(), "Step 0 not found");
}

#[test]
fn test_unknown_rule() {
    let mut proof = proof_with(&["A"], None);
    let err = proof.apply_rule("XYZ", &[1], RuleParams::None).unwrap_err();
    assert_eq!(err.message(), "Unknown rule 'XYZ'");
}

#[test]
fn test_failed_precondition_leaves_state_unchanged() {
    let mut proof = proof_with(&["A → B", "C"], Some("B"));
    let before = proof.proof_data();
    let err = proof.apply_rule("MP", &[1, 2], RuleParams::None).unwrap_err();
    assert!(matches!(err, DeduceError::RuleApplication(_)));
    assert_eq!(
        err.message(),
        "Rule Modus Ponens cannot be applied to selected steps"
    );
    assert_eq!(proof.proof_data(), before);
}

#[test]
fn test_duplicate_result_rejected() {
    let mut proof = proof_with(&["A ∧ B", "A"], None);
    let err = proof
        .apply_rule("CE", &[1], RuleParams::Side(Side::Left))
        .unwrap_err();
    assert_eq!(err.message(), "This formula already exists in the proof");
    assert_eq!(proof.steps().len(), 2);

    proof
        .apply_rule("CE", &[1], RuleParams::Side(Side::Right))
        .unwrap();
    assert_eq!(proof.steps().len(), 3);
}

#[test]
fn test_set_conclusion_recomputes_completion() {
    let mut proof = proof_with(&["A", "B"], None);
    assert!(proof.set_conclusion(parse("B").unwrap()));
    assert!(!proof.set_conclusion(parse("C").unwrap()));
    assert!(!proof.is_complete());
}

#[test]
fn test_clear_is_idempotent() {
    let mut proof = proof_with(&["A → B", "A"], Some("B"));
    proof.apply_rule("MP", &[1, 2], RuleParams::None).unwrap();

    proof.clear();
    assert!(proof.steps().is_empty());
    assert!(proof.premises().is_empty());
    assert!(proof.conclusion().is_none());
    assert!(!proof.is_complete());

    proof.clear();
    assert!(proof.steps().is_empty());

    let index = proof.add_premise(parse("C").unwrap()).unwrap();
    assert_eq!(index, 1);
}

#[test]
fn test_transitive_dependencies() {
    let mut proof = proof_with(&["A → B", "B → C", "A"], Some("C"));
    proof.apply_rule("MP", &[1, 3], RuleParams::None).unwrap();
    proof.apply_rule("MP", &[2, 4], RuleParams::None).unwrap();

    let deps: Vec<usize> = proof.dependencies(5).unwrap().into_iter().collect();
    assert_eq!(deps, vec![1, 2, 3, 4]);
    assert!(proof.dependencies(1).unwrap().is_empty());
    assert!(proof.dependencies(9).is_err());
}

#[test]
fn test_validate_complete_proof() {
    let mut proof = proof_with(&["A → B", "B → C", "A"], Some("C"));
    proof.apply_rule("HS", &[1, 2], RuleParams::None).unwrap();
    proof.apply_rule("MP", &[4, 3], RuleParams::None).unwrap();
    assert!(proof.validate().is_ok());
}

#[test]
fn test_validate_reports_missing_pieces() {
    let proof = proof_with(&["A"], None);
    assert_eq!(proof.validate().unwrap_err().message(), "No conclusion set");

    let proof = proof_with(&[], Some("A"));
    assert_eq!(proof.validate().unwrap_err().message(), "No premises given");

    let proof = proof_with(&["A"], Some("B"));
    assert_eq!(
        proof.validate().unwrap_err().message(),
        "Conclusion B has not been derived"
    );
}

#[test]
fn test_proof_display() {
    let mut proof = proof_with(&["P → Q", "P"], Some("Q"));
    proof.apply_rule("MP", &[1, 2], RuleParams::None).unwrap();
    assert_eq!(
        proof.to_string(),
        "1. P → Q (Premise)\n2. P (Premise)\n3. Q (Modus Ponens [1, 2])\n⊢ Q (proved)"
    );
}

#[test]
fn test_proof_data_serializes() {
    let mut proof = proof_with(&["P → Q", "P"], Some("Q"));
    proof.apply_rule("MP", &[1, 2], RuleParams::None).unwrap();

    let json = serde_json::to_value(proof.proof_data()).unwrap();
    assert_eq!(json["conclusion"], "Q");
    assert_eq!(json["is_complete"], true);
    assert_eq!(json["premises"][0], "P → Q");
    assert_eq!(json["steps"][2]["formula"], "Q");
    assert_eq!(json["steps"][2]["justification"]["rule"], "Modus Ponens");
    assert_eq!(json["steps"][0]["justification"]["type"], "premise");
}
