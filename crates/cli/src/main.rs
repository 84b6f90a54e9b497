//! tastebench CLI - evaluation suite for ingredient-substitution and
//! cooking-QA models
//!
//! Three subcommands, one per evaluation pipeline: `substitutes`, `qa`,
//! and `agreement`. Each run loads its JSON artifacts, computes its
//! metrics, prints a report, and exits.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tastebench_core::config::{ApproachConfig, Config};
use tastebench_core::{Error as CoreError, SentinelPolicy};
use tastebench_eval::SubstituteEvaluator;
use tracing::info;

#[derive(Parser)]
#[command(name = "tastebench")]
#[command(about = "Evaluation suite for ingredient-substitution and cooking-QA models")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print reports as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score predicted substitute pairs against the ground truth
    Substitutes {
        /// Evaluate only the named approach
        #[arg(long)]
        approach: Option<String>,

        /// Print the pairs missing from either side
        #[arg(long)]
        diff: bool,
    },
    /// Compare predicted answers against the QA reference for exact matches
    Qa {
        /// Override the configured sentinel bucketing policy
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },
    /// Score inter-annotator agreement over the human judgment files
    Agreement,
}

/// CLI-side mirror of [`SentinelPolicy`] so clap can enumerate the values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Sentinel matches stay in the exact-match bucket
    Count,
    /// Sentinel matches are moved to the mismatch bucket
    Exclude,
}

impl From<PolicyArg> for SentinelPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Count => SentinelPolicy::Count,
            PolicyArg::Exclude => SentinelPolicy::Exclude,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate()?;

    match cli.command {
        Commands::Substitutes { approach, diff } => {
            run_substitutes(&config, approach.as_deref(), diff, cli.json)
        }
        Commands::Qa { policy } => run_qa(&config, policy.map(Into::into), cli.json),
        Commands::Agreement => run_agreement(&config, cli.json),
    }
}

/// Initialize logging system
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("tastebench={level}"))
        .with_writer(std::io::stderr)
        .init();
}

fn print_section(title: &str) {
    println!("\n{:=<70}", "");
    println!("{title}");
    println!("{:=<70}", "");
}

fn run_substitutes(
    config: &Config,
    only_approach: Option<&str>,
    diff: bool,
    json: bool,
) -> Result<()> {
    let settings = &config.substitutes;

    let approaches: Vec<&ApproachConfig> = match only_approach {
        Some(name) => {
            let approach = settings
                .approaches
                .iter()
                .find(|a| a.name == name)
                .ok_or_else(|| {
                    let known: Vec<&str> =
                        settings.approaches.iter().map(|a| a.name.as_str()).collect();
                    anyhow!("Unknown approach '{name}'; configured approaches: {known:?}")
                })?;
            vec![approach]
        }
        None => settings.approaches.iter().collect(),
    };

    let evaluator = SubstituteEvaluator::from_config(settings)?;
    let show_differences = diff || settings.show_differences;

    for approach in approaches {
        info!("Evaluating approach '{}'", approach.name);
        let predicted = tastebench_datasets::load_pair_set(&approach.predictions)
            .map_err(CoreError::from)
            .with_context(|| format!("Failed to load predictions for '{}'", approach.name))?;

        let report = evaluator.evaluate(&approach.name, &predicted)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            continue;
        }

        print_section(&format!("Results for {}", approach.name));
        report.print();

        if show_differences {
            let scored = evaluator.scored_predictions(&predicted);
            let differences =
                tastebench_metrics::set_differences(evaluator.ground_truth(), &scored);
            tastebench_eval::print_differences(
                &differences,
                evaluator.ground_truth().len(),
                scored.len(),
            );
        }
    }

    Ok(())
}

fn run_qa(config: &Config, policy_override: Option<SentinelPolicy>, json: bool) -> Result<()> {
    let settings = &config.qa;
    let policy = policy_override.unwrap_or(settings.sentinel_policy);

    let cases = tastebench_datasets::load_qa_cases(&settings.dataset)
        .map_err(CoreError::from)
        .context("Failed to load the QA reference dataset")?;
    let predictions = tastebench_datasets::load_answer_predictions(&settings.predictions)
        .map_err(CoreError::from)
        .context("Failed to load the QA predictions")?;
    info!(
        "Comparing {} predictions against {} cases under the '{policy}' policy",
        predictions.len(),
        cases.len()
    );

    let report = tastebench_eval::compare_answers(&cases, &predictions, policy, settings.sample_count);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_section("QA Exact-Match Results");
        report.print();
    }
    Ok(())
}

fn run_agreement(config: &Config, json: bool) -> Result<()> {
    let report = tastebench_eval::score_agreement(&config.agreement)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_section("Human-Evaluation Agreement");
        report.print();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_all_subcommands() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["tastebench", "--json", "qa", "--policy", "exclude"]);
        assert!(cli.json);
        match cli.command {
            Commands::Qa { policy } => assert_eq!(policy, Some(PolicyArg::Exclude)),
            _ => panic!("expected the qa subcommand"),
        }

        let cli = Cli::parse_from(["tastebench", "substitutes", "--approach", "FoodBERT-Text"]);
        match cli.command {
            Commands::Substitutes { approach, diff } => {
                assert_eq!(approach.as_deref(), Some("FoodBERT-Text"));
                assert!(!diff);
            }
            _ => panic!("expected the substitutes subcommand"),
        }
    }

    #[test]
    fn test_policy_arg_conversion() {
        assert_eq!(SentinelPolicy::from(PolicyArg::Count), SentinelPolicy::Count);
        assert_eq!(
            SentinelPolicy::from(PolicyArg::Exclude),
            SentinelPolicy::Exclude
        );
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        let missing = std::path::Path::new("/tmp/tastebench_missing_config_83125.toml");
        assert!(Config::load(Some(missing)).is_err());
    }

    #[test]
    fn test_explicit_config_path_loads() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        std::fs::write(file.path(), "[qa]\nsentinel_policy = \"exclude\"\n").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.qa.sentinel_policy, SentinelPolicy::Exclude);
    }
}
