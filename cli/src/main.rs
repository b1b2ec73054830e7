mod error_formatter;
mod formatter;
mod server;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use deduce::{Assignment, DeduceError, Engine, Formula, ResourceLimits, RuleParams};
use formatter::{Formatter, ValueStyle};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "deduce")]
#[command(about = "Propositional logic: truth tables, validity checks and natural deduction proofs.")]
#[command(
    long_about = "deduce parses propositional formulas, builds truth tables, classifies formulas and arguments,\nand constructs natural deduction proofs by hand or by automatic forward search.\nFormulas use capital letters for propositions and ¬ ∧ ∨ → ↔ ⊕ ↑ ↓ (or ~ & | -> <-> ^) as connectives."
)]
#[command(version)]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Show truth values as 1/0 instead of T/F
    #[arg(long, global = true)]
    digits: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a formula and print its canonical form
    Parse {
        /// Formula to parse, e.g. "(A -> B) & ~C"
        formula: String,
    },
    /// Evaluate a formula under an assignment
    ///
    /// Every proposition in the formula must be given a value.
    Eval {
        formula: String,
        /// Truth values (format: A=true, B=0, C=F)
        assignments: Vec<String>,
    },
    /// Print the truth table of one or more formulas
    Table {
        #[arg(required = true)]
        formulas: Vec<String>,
    },
    /// Classify a formula as tautology, contradiction or contingent
    Classify { formula: String },
    /// Check whether two formulas are logically equivalent
    Equiv { first: String, second: String },
    /// Check whether premises entail a conclusion
    ///
    /// Prints a counterexample when the argument is invalid.
    Check {
        #[command(flatten)]
        argument: ArgumentArgs,
    },
    /// List the inference rules
    Rules,
    /// Search for a proof of the conclusion from the premises
    Prove {
        #[command(flatten)]
        argument: ArgumentArgs,
        /// Maximum number of steps the search may add
        #[arg(short = 'm', long)]
        max_steps: Option<usize>,
    },
    /// Build a proof by applying rules in order
    ///
    /// Steps are written RULE:I,J[:PARAM], e.g. MP:1,2 or CE:3:right or ADD:1:Q.
    Derive {
        #[command(flatten)]
        argument: ArgumentArgs,
        /// Rule applications (format: RULE:I,J[:PARAM])
        #[arg(short = 's', long = "step")]
        steps: Vec<String>,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// API: GET /health, POST /parse, /table, /classify and /prove.
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

#[derive(clap::Args)]
struct ArgumentArgs {
    /// Premise formula (repeatable)
    #[arg(short = 'p', long = "premise")]
    premises: Vec<String>,
    /// Conclusion formula
    #[arg(short = 'c', long)]
    conclusion: Option<String>,
    /// Read the argument from a file: one premise per line, the conclusion
    /// on a line starting with ⊢ or |-, and # for comments
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let style = if cli.digits {
        ValueStyle::Digits
    } else {
        ValueStyle::Letters
    };
    let output = Output {
        json: cli.json,
        formatter: Formatter::new(style),
    };

    let result = match &cli.command {
        Commands::Parse { formula } => parse_command(&output, formula),
        Commands::Eval {
            formula,
            assignments,
        } => eval_command(&output, formula, assignments),
        Commands::Table { formulas } => table_command(&output, formulas),
        Commands::Classify { formula } => classify_command(&output, formula),
        Commands::Equiv { first, second } => equiv_command(&output, first, second),
        Commands::Check { argument } => check_command(&output, argument),
        Commands::Rules => rules_command(&output),
        Commands::Prove {
            argument,
            max_steps,
        } => prove_command(&output, argument, *max_steps),
        Commands::Derive { argument, steps } => derive_command(&output, argument, steps),
        Commands::Server { host, port } => server_command(host, *port),
    };

    if let Err(e) = result {
        if let Some(deduce_err) = e.downcast_ref::<DeduceError>() {
            eprintln!("{}", error_formatter::format_error(deduce_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

struct Output {
    json: bool,
    formatter: Formatter,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&Formatter) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", text(&self.formatter));
        }
        Ok(())
    }
}

fn parse_command(output: &Output, text: &str) -> Result<()> {
    let formula = Engine::new().parse(text)?;
    let report = serde_json::json!({
        "formula": formula,
        "propositions": formula.atomic_propositions(),
        "depth": formula.depth(),
    });
    output.emit(&report, |f| f.format_formula(&formula))
}

fn eval_command(output: &Output, text: &str, pairs: &[String]) -> Result<()> {
    let formula = Engine::new().parse(text)?;
    let assignment = parse_assignment(pairs)?;
    let value = formula.evaluate(&assignment)?;
    let report = serde_json::json!({ "formula": formula, "value": value });
    output.emit(&report, |f| {
        format!("{} = {}\n", f.format_assignment(&assignment), value)
    })
}

fn table_command(output: &Output, texts: &[String]) -> Result<()> {
    let table = Engine::new().truth_table(texts)?;
    output.emit(&table.data(), |f| f.format_truth_table(&table))
}

fn classify_command(output: &Output, text: &str) -> Result<()> {
    let engine = Engine::new();
    let formula = engine.parse(text)?;
    let classification = engine.validator().classify(&formula)?;
    let report = serde_json::json!({ "formula": formula, "classification": classification });
    output.emit(&report, |f| f.format_classification(&formula, classification))
}

fn equiv_command(output: &Output, first: &str, second: &str) -> Result<()> {
    let engine = Engine::new();
    let first = engine.parse(first)?;
    let second = engine.parse(second)?;
    let equivalent = engine.validator().check_equivalence(&first, &second)?;
    let report = serde_json::json!({ "first": first, "second": second, "equivalent": equivalent });
    output.emit(&report, |f| f.format_equivalence(&first, &second, equivalent))
}

fn check_command(output: &Output, args: &ArgumentArgs) -> Result<()> {
    let engine = Engine::new();
    let (premises, conclusion) = load_argument(&engine, args)?;
    let validator = engine.validator();

    let warning = validator.validate_premises_and_conclusion(&premises, &conclusion)?;
    let counterexample = validator.find_counterexample(&premises, &conclusion)?;

    let report = serde_json::json!({
        "premises": premises,
        "conclusion": conclusion,
        "valid": counterexample.is_none(),
        "counterexample": counterexample,
        "warning": warning,
    });
    output.emit(&report, |f| {
        let mut text = f.format_argument(&premises, &conclusion, counterexample.as_ref());
        if let Some(warning) = &warning {
            text.push_str(&format!("Warning: {}\n", warning));
        }
        text
    })
}

fn rules_command(output: &Output) -> Result<()> {
    let rules = Engine::new().rules();
    output.emit(&rules, |f| f.format_rules(&rules))
}

fn prove_command(output: &Output, args: &ArgumentArgs, max_steps: Option<usize>) -> Result<()> {
    let mut limits = ResourceLimits::default();
    if let Some(max_steps) = max_steps {
        limits = limits.with_search_steps(max_steps);
    }
    let engine = Engine::with_limits(limits);
    let (premises, conclusion) = load_argument(&engine, args)?;

    let mut proof = engine.new_proof();
    for premise in premises {
        proof.add_premise(premise)?;
    }
    proof.set_conclusion(conclusion);

    let outcome = proof.auto_prove_default();
    if output.json {
        let report = match &outcome {
            Ok(outcome) => serde_json::json!({ "proof": proof.proof_data(), "outcome": outcome }),
            Err(e) => serde_json::json!({ "proof": proof.proof_data(), "error": e.message() }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output.formatter.format_proof(&proof));
        if let Ok(outcome) = &outcome {
            print!("{}", output.formatter.format_search_outcome(outcome));
        }
    }
    outcome?;
    Ok(())
}

fn derive_command(output: &Output, args: &ArgumentArgs, steps: &[String]) -> Result<()> {
    let engine = Engine::new();
    let (premises, conclusion) = load_argument(&engine, args)?;

    let mut proof = engine.new_proof();
    for premise in premises {
        proof.add_premise(premise)?;
    }
    proof.set_conclusion(conclusion);

    for step in steps {
        let (rule, positions, params) = parse_step(&engine, step)?;
        proof.apply_rule(&rule, &positions, params)?;
    }

    output.emit(&proof.proof_data(), |f| f.format_proof(&proof))?;
    if proof.is_complete() {
        proof.validate()?;
    }
    Ok(())
}

fn server_command(host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(server::http::start_server(Engine::new(), host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

/// Read premises and conclusion from flags, a file, or both
fn load_argument(engine: &Engine, args: &ArgumentArgs) -> Result<(Vec<Formula>, Formula)> {
    let mut premise_texts = Vec::new();
    let mut conclusion_text = None;

    if let Some(path) = &args.file {
        let (premises, conclusion) = read_argument_file(path)?;
        premise_texts.extend(premises);
        conclusion_text = conclusion;
    }
    premise_texts.extend(args.premises.iter().cloned());
    if let Some(conclusion) = &args.conclusion {
        conclusion_text = Some(conclusion.clone());
    }

    let conclusion_text =
        conclusion_text.ok_or_else(|| anyhow!("No conclusion given (use -c or a ⊢ line)"))?;
    let premises = engine.parse_all(&premise_texts)?;
    let conclusion = engine.parse(&conclusion_text)?;
    Ok((premises, conclusion))
}

fn read_argument_file(path: &Path) -> Result<(Vec<String>, Option<String>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    Ok(parse_argument_text(&content))
}

fn parse_argument_text(content: &str) -> (Vec<String>, Option<String>) {
    let mut premises = Vec::new();
    let mut conclusion = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix('⊢').or_else(|| line.strip_prefix("|-")) {
            conclusion = Some(rest.trim().to_string());
        } else {
            premises.push(line.to_string());
        }
    }

    (premises, conclusion)
}

/// Parse `A=true` style pairs into an assignment
fn parse_assignment(pairs: &[String]) -> Result<Assignment> {
    let mut assignment = Assignment::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid assignment '{}' (expected NAME=VALUE)", pair))?;
        let mut letters = name.trim().chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => c,
            _ => bail!("'{}' is not a proposition (use a single capital letter)", name.trim()),
        };
        let value = match value.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" => true,
            "false" | "f" | "0" => false,
            other => bail!("Invalid truth value '{}' for {}", other, letter),
        };
        assignment.insert(letter, value);
    }
    Ok(assignment)
}

/// Parse `RULE:I,J[:PARAM]` into a rule name, step indices and parameter
fn parse_step(engine: &Engine, text: &str) -> Result<(String, Vec<usize>, RuleParams)> {
    let mut parts = text.splitn(3, ':');
    let name = parts.next().unwrap_or_default().trim();
    let indices = parts
        .next()
        .ok_or_else(|| anyhow!("Invalid step '{}' (expected RULE:I,J[:PARAM])", text))?;

    let positions = indices
        .split(',')
        .map(|index| {
            index
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow!("Invalid step number '{}' in '{}'", index.trim(), text))
        })
        .collect::<Result<Vec<_>>>()?;

    let params = match parts.next() {
        Some(param) => {
            let rule = engine
                .rule_catalog()
                .get(name)
                .ok_or_else(|| DeduceError::rule(format!("Unknown rule '{}'", name)))?;
            rule.parameter.parse_params(param, engine.limits())?
        }
        None => RuleParams::None,
    };

    Ok((name.to_string(), positions, params))
}
