use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn deduce() -> Command {
    Command::cargo_bin("deduce").unwrap()
}

#[test]
fn test_check_valid_argument() {
    deduce()
        .args(["check", "-p", "A -> B", "-p", "A", "-c", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid: A → B, A ⊢ B"));
}

#[test]
fn test_check_reports_counterexample() {
    deduce()
        .args(["check", "-p", "A -> B", "-p", "B", "-c", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid: A → B, B ⊢ A"))
        .stdout(predicate::str::contains("Counterexample: A=F B=T"));
}

#[test]
fn test_check_warns_about_tautology() {
    deduce()
        .args(["check", "-p", "A", "-c", "B | ~B"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Conclusion is a tautology (always true)",
        ));
}

#[test]
fn test_check_rejects_contradictory_premises() {
    deduce()
        .args(["check", "-p", "A", "-p", "~A", "-c", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Premises are contradictory"));
}

#[test]
fn test_check_requires_conclusion() {
    deduce()
        .args(["check", "-p", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No conclusion given"));
}

#[test]
fn test_prove_chain() {
    deduce()
        .args([
            "prove", "-p", "A -> B", "-p", "B -> C", "-p", "A", "-c", "C",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modus Ponens"))
        .stdout(predicate::str::contains("⊢ C  (proved)"))
        .stdout(predicate::str::contains("2 step(s) added"));
}

#[test]
fn test_prove_budget_exhausted() {
    deduce()
        .args(["prove", "-p", "A", "-c", "B", "--max-steps", "5"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("⊢ B  (not yet derived)"))
        .stderr(predicate::str::contains(
            "Could not complete proof within the step limit (5 steps added)",
        ));
}

#[test]
fn test_prove_json() {
    deduce()
        .args(["--json", "prove", "-p", "P ∨ Q", "-p", "¬P", "-c", "Q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_complete\": true"))
        .stdout(predicate::str::contains("\"closing_rule\": \"Disjunctive Syllogism\""));
}

#[test]
fn test_prove_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("argument.txt");
    fs::write(&path, "# hypothetical syllogism\nP -> Q\nQ -> R\n|- P -> R\n").unwrap();

    deduce()
        .arg("prove")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hypothetical Syllogism"))
        .stdout(predicate::str::contains("⊢ P → R  (proved)"));
}

#[test]
fn test_missing_file() {
    deduce()
        .args(["prove", "--file", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read 'does-not-exist.txt'"));
}

#[test]
fn test_derive_steps() {
    deduce()
        .args([
            "derive", "-p", "P ∧ Q", "-p", "Q → R", "-c", "R", "-s", "CE:1:right", "-s",
            "MP:2,3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conjunction Elimination"))
        .stdout(predicate::str::contains("⊢ R  (proved)"));
}

#[test]
fn test_derive_with_disjunct() {
    deduce()
        .args(["derive", "-p", "P", "-c", "P ∨ Q", "-s", "ADD:1:Q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Addition"))
        .stdout(predicate::str::contains("(proved)"));
}

#[test]
fn test_derive_rejects_inapplicable_rule() {
    deduce()
        .args(["derive", "-p", "P → Q", "-p", "P", "-c", "Q", "-s", "MT:1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Rule Modus Tollens cannot be applied to selected steps",
        ));
}

#[test]
fn test_derive_rejects_bad_parameter() {
    deduce()
        .args(["derive", "-p", "P ∧ Q", "-c", "P", "-s", "CE:1:up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'up' is not a side parameter"));
}
