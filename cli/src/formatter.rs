use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use deduce::{Assignment, Classification, Formula, ProofState, RuleInfo, SearchOutcome, TruthTable};

/// How truth values are written in table cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    /// `T` / `F`
    Letters,
    /// `1` / `0`
    Digits,
}

impl ValueStyle {
    fn cell(&self, value: Option<bool>) -> &'static str {
        match (self, value) {
            (_, None) => "-",
            (ValueStyle::Letters, Some(true)) => "T",
            (ValueStyle::Letters, Some(false)) => "F",
            (ValueStyle::Digits, Some(true)) => "1",
            (ValueStyle::Digits, Some(false)) => "0",
        }
    }
}

pub struct Formatter {
    style: ValueStyle,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(ValueStyle::Letters)
    }
}

impl Formatter {
    pub fn new(style: ValueStyle) -> Self {
        Self { style }
    }

    pub fn format_formula(&self, formula: &Formula) -> String {
        let propositions: Vec<String> = formula
            .atomic_propositions()
            .iter()
            .map(char::to_string)
            .collect();

        let mut output = String::new();
        output.push_str(&format!("Formula: {}\n", formula));
        output.push_str(&format!("Propositions: {}\n", propositions.join(", ")));
        output.push_str(&format!("Depth: {}\n", formula.depth()));
        output
    }

    pub fn format_truth_table(&self, table: &TruthTable) -> String {
        let mut rendered = Table::new();
        rendered.load_preset(UTF8_FULL);
        rendered.set_header(Row::from(
            table
                .headers()
                .iter()
                .map(|header| Cell::new(header).set_alignment(CellAlignment::Center))
                .collect::<Vec<_>>(),
        ));

        for row in table.rows() {
            rendered.add_row(Row::from(
                row.iter()
                    .map(|value| {
                        Cell::new(self.style.cell(*value)).set_alignment(CellAlignment::Center)
                    })
                    .collect::<Vec<_>>(),
            ));
        }

        let mut output = rendered.to_string();
        output.push('\n');
        for (index, formula) in table.formulas().iter().enumerate() {
            if table.is_tautology(index) {
                output.push_str(&format!("{} is a tautology\n", formula));
            } else if table.is_contradiction(index) {
                output.push_str(&format!("{} is a contradiction\n", formula));
            }
        }
        output
    }

    pub fn format_rules(&self, rules: &[RuleInfo]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Rule").set_alignment(CellAlignment::Left),
            Cell::new("Abbr").set_alignment(CellAlignment::Left),
            Cell::new("Inputs").set_alignment(CellAlignment::Center),
            Cell::new("Description").set_alignment(CellAlignment::Left),
        ]));

        for rule in rules {
            table.add_row(Row::from(vec![
                Cell::new(rule.name),
                Cell::new(rule.abbreviation),
                Cell::new(rule.arity).set_alignment(CellAlignment::Center),
                Cell::new(rule.description),
            ]));
        }

        table.to_string()
    }

    pub fn format_proof(&self, proof: &ProofState) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Formula").set_alignment(CellAlignment::Left),
            Cell::new("Justification").set_alignment(CellAlignment::Left),
            Cell::new("From").set_alignment(CellAlignment::Left),
        ]));

        for step in proof.steps() {
            let from: Vec<String> = step.dependencies.iter().map(|d| d.to_string()).collect();
            table.add_row(Row::from(vec![
                Cell::new(step.index).set_alignment(CellAlignment::Right),
                Cell::new(step.formula.to_string()),
                Cell::new(step.justification.to_string()),
                Cell::new(from.join(", ")),
            ]));
        }

        let mut output = table.to_string();
        output.push('\n');
        match proof.conclusion() {
            Some(goal) if proof.is_complete() => {
                output.push_str(&format!("⊢ {}  (proved)\n", goal))
            }
            Some(goal) => output.push_str(&format!("⊢ {}  (not yet derived)\n", goal)),
            None => output.push_str("No conclusion set\n"),
        }
        output
    }

    pub fn format_search_outcome(&self, outcome: &SearchOutcome) -> String {
        format!("{} ({} step(s) added)\n", outcome.message, outcome.steps_added)
    }

    pub fn format_classification(&self, formula: &Formula, classification: Classification) -> String {
        format!("{} is {}\n", formula, article(classification))
    }

    pub fn format_equivalence(&self, first: &Formula, second: &Formula, equivalent: bool) -> String {
        if equivalent {
            format!("{} ≡ {}\n", first, second)
        } else {
            format!("{} and {} are not equivalent\n", first, second)
        }
    }

    pub fn format_argument(
        &self,
        premises: &[Formula],
        conclusion: &Formula,
        counterexample: Option<&Assignment>,
    ) -> String {
        let premises: Vec<String> = premises.iter().map(|p| p.to_string()).collect();
        let argument = format!("{} ⊢ {}", premises.join(", "), conclusion);
        match counterexample {
            None => format!("Valid: {}\n", argument),
            Some(assignment) => {
                format!("Invalid: {}\nCounterexample: {}\n", argument, self.format_assignment(assignment))
            }
        }
    }

    pub fn format_assignment(&self, assignment: &Assignment) -> String {
        let pairs: Vec<String> = assignment
            .iter()
            .map(|(letter, value)| format!("{}={}", letter, self.style.cell(Some(*value))))
            .collect();
        pairs.join(" ")
    }
}

fn article(classification: Classification) -> String {
    match classification {
        Classification::Contingent => "contingent".to_string(),
        other => format!("a {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deduce::{evaluator::assignment, parse, Engine, RuleParams};

    #[test]
    fn test_truth_table_cells() {
        let table = Engine::new().truth_table(&["A ∧ B"]).unwrap();
        let output = Formatter::default().format_truth_table(&table);
        assert!(output.contains("A ∧ B"));
        assert!(output.contains("T"));
        assert!(output.contains("F"));
        assert!(!output.contains("tautology"));
    }

    #[test]
    fn test_digit_style() {
        let table = Engine::new().truth_table(&["A ∨ ¬A"]).unwrap();
        let output = Formatter::new(ValueStyle::Digits).format_truth_table(&table);
        assert!(output.contains('1'));
        assert!(output.contains("A ∨ ¬A is a tautology"));
    }

    #[test]
    fn test_proof_listing() {
        let engine = Engine::new();
        let mut proof = engine.proof_for(&["P → Q", "P"], "Q").unwrap();
        proof.apply_rule("MP", &[1, 2], RuleParams::None).unwrap();

        let output = Formatter::default().format_proof(&proof);
        assert!(output.contains("Modus Ponens"));
        assert!(output.contains("1, 2"));
        assert!(output.contains("⊢ Q  (proved)"));
    }

    #[test]
    fn test_classification_wording() {
        let formatter = Formatter::default();
        let formula = parse("A ∨ ¬A").unwrap();
        assert_eq!(
            formatter.format_classification(&formula, Classification::Tautology),
            "A ∨ ¬A is a tautology\n"
        );
        assert_eq!(
            formatter.format_classification(&formula, Classification::Contingent),
            "A ∨ ¬A is contingent\n"
        );
    }

    #[test]
    fn test_counterexample() {
        let formatter = Formatter::default();
        let premises = vec![parse("A → B").unwrap(), parse("B").unwrap()];
        let conclusion = parse("A").unwrap();
        let counterexample = assignment([('A', false), ('B', true)]);

        assert_eq!(
            formatter.format_argument(&premises, &conclusion, Some(&counterexample)),
            "Invalid: A → B, B ⊢ A\nCounterexample: A=F B=T\n"
        );
        assert_eq!(
            formatter.format_argument(&premises, &conclusion, None),
            "Valid: A → B, B ⊢ A\n"
        );
    }
}
