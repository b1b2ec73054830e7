use assert_cmd::Command;
use predicates::prelude::*;

fn deduce() -> Command {
    Command::cargo_bin("deduce").unwrap()
}

#[test]
fn test_parse_prints_canonical_form() {
    deduce()
        .args(["parse", "(A & B) -> C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Formula: A ∧ B → C"))
        .stdout(predicate::str::contains("Propositions: A, B, C"));
}

#[test]
fn test_parse_error_points_at_character() {
    deduce()
        .args(["parse", "A ∧ $"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character '$' at position 4"));
}

#[test]
fn test_parse_json() {
    deduce()
        .args(["--json", "parse", "~~A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"formula\": \"¬¬A\""))
        .stdout(predicate::str::contains("\"depth\""));
}

#[test]
fn test_eval() {
    deduce()
        .args(["eval", "A -> B", "A=1", "B=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A=T B=F = false"));
}

#[test]
fn test_eval_missing_proposition() {
    deduce()
        .args(["eval", "A ∧ B", "A=true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No truth value provided for proposition B",
        ));
}

#[test]
fn test_table() {
    deduce()
        .args(["table", "A ∨ ¬A", "A ∧ ¬A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A ∨ ¬A is a tautology"))
        .stdout(predicate::str::contains("A ∧ ¬A is a contradiction"));
}

#[test]
fn test_table_json_rows() {
    deduce()
        .args(["--json", "table", "A ∧ B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"headers\""))
        .stdout(predicate::str::contains("\"A ∧ B\""))
        .stdout(predicate::str::contains("\"is_empty\": false"));
}

#[test]
fn test_classify() {
    deduce()
        .args(["classify", "(A -> B) | (B -> A)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is a tautology"));

    deduce()
        .args(["classify", "A -> B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A → B is contingent"));
}

#[test]
fn test_equiv() {
    deduce()
        .args(["equiv", "~(A & B)", "~A | ~B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("¬(A ∧ B) ≡ ¬A ∨ ¬B"));

    deduce()
        .args(["equiv", "A -> B", "B -> A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("are not equivalent"));
}

#[test]
fn test_rules_lists_catalog() {
    deduce()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modus Ponens"))
        .stdout(predicate::str::contains("Constructive Dilemma"))
        .stdout(predicate::str::contains("DML2"));
}
