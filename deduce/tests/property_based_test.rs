use deduce::enumeration::Assignments;
use deduce::{parse, Connective, Formula, Node, ResourceLimits, RuleCatalog, RuleParams};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop::sample::select(vec!['A', 'B', 'C', 'D']).prop_map(Node::proposition);
    leaf.prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Node::not),
            (
                prop::sample::select(Connective::ALL.to_vec()),
                inner.clone(),
                inner
            )
                .prop_map(|(op, left, right)| Node::binary(op, left, right)),
        ]
    })
}

fn formula_strategy() -> impl Strategy<Value = Formula> {
    node_strategy().prop_map(Formula::from_node)
}

/// Apply every parameter setting of `abbreviation` to `inputs`, requiring at
/// least one to succeed, and check each result holds wherever the inputs do
fn check_sound(abbreviation: &str, inputs: &[Node]) -> Result<(), TestCaseError> {
    let catalog = RuleCatalog::standard();
    let limits = ResourceLimits::default();
    let rule = catalog.get(abbreviation).unwrap();
    let formulas: Vec<Formula> = inputs.iter().cloned().map(Formula::from_node).collect();
    let refs: Vec<&Formula> = formulas.iter().collect();

    let mut fired = false;
    for params in rule.parameter.search_settings() {
        let Ok(derived) = rule.apply(&refs, &params) else { continue };
        fired = true;

        let assignments = Assignments::over(refs.iter().copied().chain([&derived]), &limits).unwrap();
        for assignment in assignments {
            let premises_hold = refs.iter().all(|input| input.evaluate(&assignment).unwrap());
            if premises_hold {
                prop_assert!(
                    derived.evaluate(&assignment).unwrap(),
                    "{} derived {} from {:?}",
                    rule,
                    derived,
                    refs.iter().map(|f| f.to_string()).collect::<Vec<_>>()
                );
            }
        }
    }
    prop_assert!(fired, "{} did not apply to {:?}", rule, inputs);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_print_then_parse_round_trips(formula in formula_strategy()) {
        let printed = formula.to_string();
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(&reparsed, &formula);
        prop_assert_eq!(reparsed.to_string(), printed);
    }

    #[test]
    fn prop_parser_never_panics(text in "[A-E ()&|~^>-]{0,40}") {
        let _ = parse(&text);
    }

    #[test]
    fn prop_rules_are_sound(
        first in formula_strategy(),
        second in formula_strategy(),
        third in formula_strategy(),
    ) {
        let catalog = RuleCatalog::standard();
        let limits = ResourceLimits::default();

        for rule in catalog.iter() {
            let inputs: Vec<&Formula> = [&first, &second, &third][..rule.arity].to_vec();
            for params in rule.parameter.search_settings() {
                let Ok(derived) = rule.apply(&inputs, &params) else { continue };

                let assignments = Assignments::over(
                    inputs.iter().copied().chain([&derived]),
                    &limits,
                ).unwrap();
                for assignment in assignments {
                    let premises_hold = inputs
                        .iter()
                        .all(|input| input.evaluate(&assignment).unwrap());
                    if premises_hold {
                        prop_assert!(
                            derived.evaluate(&assignment).unwrap(),
                            "{} derived {} from {:?}",
                            rule,
                            derived,
                            inputs.iter().map(|f| f.to_string()).collect::<Vec<_>>()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn prop_matching_rules_are_sound(
        p in node_strategy(),
        q in node_strategy(),
        r in node_strategy(),
        s in node_strategy(),
    ) {
        let not = |n: &Node| Node::not(n.clone());
        let implies = |a: &Node, b: &Node| Node::implies(a.clone(), b.clone());
        let or = |a: &Node, b: &Node| Node::or(a.clone(), b.clone());
        let and = |a: &Node, b: &Node| Node::and(a.clone(), b.clone());

        check_sound("MP", &[implies(&p, &q), p.clone()])?;
        check_sound("MP", &[p.clone(), implies(&p, &q)])?;
        check_sound("MT", &[implies(&p, &q), not(&q)])?;
        check_sound("HS", &[implies(&p, &q), implies(&q, &r)])?;
        check_sound("DS", &[or(&p, &q), not(&p)])?;
        check_sound("DS", &[not(&q), or(&p, &q)])?;
        check_sound("BI", &[implies(&p, &q), implies(&q, &p)])?;
        check_sound("RES", &[or(&p, &q), or(&not(&p), &r)])?;
        check_sound("RES", &[or(&q, &not(&p)), or(&r, &p)])?;
        check_sound("CD", &[implies(&p, &q), implies(&r, &s), or(&p, &r)])?;
        check_sound("CD", &[or(&r, &p), implies(&p, &q), implies(&r, &s)])?;

        check_sound("CE", &[and(&p, &q)])?;
        check_sound("BE", &[Node::iff(p.clone(), q.clone())])?;
        check_sound("DN", &[not(&not(&p))])?;
        check_sound("DML1", &[not(&and(&p, &q))])?;
        check_sound("DML1", &[or(&not(&p), &not(&q))])?;
        check_sound("DML2", &[not(&or(&p, &q))])?;
        check_sound("DML2", &[and(&not(&p), &not(&q))])?;
        check_sound("TRANS", &[implies(&not(&q), &not(&p))])?;
        check_sound("IMPL", &[or(&not(&p), &q)])?;
        check_sound("EXP", &[implies(&p, &implies(&q, &r))])?;
        check_sound("EXP", &[implies(&and(&p, &q), &r)])?;
        check_sound("ABS", &[implies(&p, &and(&p, &q))])?;
    }

    #[test]
    fn prop_addition_is_sound(first in formula_strategy(), disjunct in formula_strategy()) {
        let catalog = RuleCatalog::standard();
        let rule = catalog.get("ADD").unwrap();
        let derived = rule.apply(&[&first], &RuleParams::Disjunct(disjunct.clone())).unwrap();
        prop_assert_eq!(derived.root(), &Node::or(first.root().clone(), disjunct.root().clone()));
    }

    #[test]
    fn prop_double_negation_round_trip(formula in formula_strategy()) {
        let catalog = RuleCatalog::standard();
        let rule = catalog.get("DN").unwrap();
        let introduced = rule
            .apply(&[&formula], &RuleParams::Mode(deduce::NegationMode::Introduce))
            .unwrap();
        let eliminated = rule.apply(&[&introduced], &RuleParams::None).unwrap();
        prop_assert_eq!(eliminated, formula);
    }
}
