//! seeksim CLI: simulate and compare disk head-scheduling policies.

use clap::{Args, Parser, Subcommand};
use seeksim_core::config::SimConfig;
use seeksim_core::report::RunReport;
use seeksim_core::types::{BoundsMode, Cylinder, Policy};
use seeksim_exec::{Comparison, JobOutcome, Ranking, Simulator};
use seeksim_planner::{
    parse_head, parse_queue, parse_yaml_scenario, plan_scenario, read_scenario, ParsedScenario,
    ScenarioConfig, Workload,
};
use seeksim_sched::StepTrace;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_QUEUE: &str = "98,183,37,122,14,124,65,67";

#[derive(Parser)]
#[command(name = "seeksim")]
#[command(about = "Disk head-scheduling simulator (FCFS, SSTF, SCAN, CSCAN, LOOK, CLOOK)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct InputArgs {
    /// Request queue, e.g. "98,183,37"
    #[arg(short, long, default_value = DEFAULT_QUEUE, allow_hyphen_values = true)]
    requests: String,

    /// Initial head position
    #[arg(long, default_value = "53", allow_hyphen_values = true)]
    head: String,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Flags that win over both the environment and a scenario's `config:` block.
#[derive(Args, Debug, Clone, Default)]
struct ConfigArgs {
    /// Number of cylinders on the disk (overrides config)
    #[arg(long)]
    cylinders: Option<Cylinder>,

    /// Out-of-range handling: reject, clamp or permit (overrides config)
    #[arg(long)]
    bounds: Option<String>,

    /// Request queue separator (overrides config)
    #[arg(long)]
    delimiter: Option<String>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
struct OutputArgs {
    /// Print the step-by-step seek calculation
    #[arg(long)]
    explain: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one policy
    Run {
        /// Scheduling policy
        #[arg(short, long, default_value = "FCFS")]
        policy: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare two policies on the same queue (or rank all of them)
    Compare {
        /// First policy
        #[arg(long, default_value = "FCFS")]
        left: String,

        /// Second policy
        #[arg(long, default_value = "SSTF")]
        right: String,

        /// Rank every policy instead of comparing two
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Execute every job in a scenario YAML file
    Scenario {
        /// Path to the scenario YAML file
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate a scenario YAML file (syntax and policy names)
    Validate {
        /// Path to the scenario YAML file
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            policy,
            input,
            output,
        } => run_single(&policy, &input, output),
        Commands::Compare {
            left,
            right,
            all,
            input,
            output,
        } => run_compare(&left, &right, all, &input, output),
        Commands::Scenario {
            file,
            config,
            output,
        } => run_scenario(&file, &config, output),
        Commands::Validate { file } => validate_scenario(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn apply_scenario_config(cfg: &mut SimConfig, doc: &ScenarioConfig) {
    if let Some(count) = doc.cylinder_count {
        cfg.cylinder_count = count;
    }
    if let Some(bounds) = doc.bounds {
        cfg.bounds = bounds;
    }
    if let Some(delimiter) = &doc.delimiter {
        cfg.delimiter = delimiter.clone();
    }
}

fn apply_cli_overrides(
    cfg: &mut SimConfig,
    flags: &ConfigArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(count) = flags.cylinders {
        cfg.cylinder_count = count;
    }
    if let Some(bounds) = &flags.bounds {
        cfg.bounds = bounds.parse::<BoundsMode>()?;
    }
    if let Some(delimiter) = &flags.delimiter {
        cfg.delimiter = delimiter.clone();
    }
    Ok(())
}

/// Build the simulator and workload for the `run`/`compare` commands.
fn prepare(input: &InputArgs) -> Result<(Simulator, Workload), Box<dyn std::error::Error>> {
    let mut config = SimConfig::from_env();
    apply_cli_overrides(&mut config, &input.config)?;
    let head = parse_head(&input.head)?;
    let requests = parse_queue(&input.requests, &config.delimiter)?;
    let sim = Simulator::new(config)?;
    Ok((sim, Workload::new(head, requests)))
}

fn run_single(
    policy: &str,
    input: &InputArgs,
    output: OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let policy: Policy = policy.parse()?;
    let (sim, workload) = prepare(input)?;
    let report = sim.simulate(policy, &workload)?;
    emit(&JobOutcome::Single(report), output)
}

fn run_compare(
    left: &str,
    right: &str,
    all: bool,
    input: &InputArgs,
    output: OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (sim, workload) = prepare(input)?;
    let outcome = if all {
        JobOutcome::Ranking(seeksim_exec::rank(&sim, &workload)?)
    } else {
        let left: Policy = left.parse()?;
        let right: Policy = right.parse()?;
        JobOutcome::Comparison(seeksim_exec::compare(&sim, left, right, &workload)?)
    };
    emit(&outcome, output)
}

/// Layer env defaults, the scenario's `config:` block and CLI flags, then
/// plan the jobs with the resulting delimiter.
fn load_scenario(
    yaml_src: &str,
    mut config: SimConfig,
    flags: &ConfigArgs,
) -> Result<(SimConfig, ParsedScenario), Box<dyn std::error::Error>> {
    let doc = read_scenario(yaml_src)?;
    if let Some(scenario_cfg) = &doc.config {
        apply_scenario_config(&mut config, scenario_cfg);
    }
    apply_cli_overrides(&mut config, flags)?;
    let parsed = plan_scenario(doc, &config.delimiter)?;
    Ok((config, parsed))
}

fn run_scenario(
    path: &PathBuf,
    flags: &ConfigArgs,
    output: OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(path)?;
    let (config, parsed) = load_scenario(&yaml_content, SimConfig::from_env(), flags)?;
    tracing::info!(
        jobs = parsed.jobs.len(),
        cylinders = config.cylinder_count,
        "running scenario"
    );

    let sim = Simulator::new(config)?;
    let outcomes = sim.run_all(&parsed.jobs)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }
    for (i, outcome) in outcomes.iter().enumerate() {
        println!("Job {}", i + 1);
        println!("======");
        print_outcome(outcome, output.explain);
        println!();
    }
    Ok(())
}

fn validate_scenario(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(path)?;
    let parsed = parse_yaml_scenario(&yaml_content, &SimConfig::from_env().delimiter)?;
    println!("✓ {} job(s) OK", parsed.jobs.len());
    Ok(())
}

fn emit(outcome: &JobOutcome, output: OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        print_outcome(outcome, output.explain);
    }
    Ok(())
}

fn print_outcome(outcome: &JobOutcome, explain: bool) {
    match outcome {
        JobOutcome::Single(report) => print_report(report, explain),
        JobOutcome::Comparison(c) => print_comparison(c, explain),
        JobOutcome::Ranking(r) => print_ranking(r),
    }
}

fn format_sequence(sequence: &[Cylinder]) -> String {
    sequence
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn print_report(report: &RunReport, explain: bool) {
    println!("{} Disk Scheduling Result", report.policy);
    println!(
        "  Head: {}  Cylinders: {}  Requests: {}",
        report.head,
        report.cylinder_count,
        report.requests.len()
    );
    println!("  Sequence: {}", format_sequence(&report.sequence));
    println!("  Total Seek Time: {}", report.total_seek);
    println!("  Digest: {}", report.digest.short());
    if explain {
        let trace = StepTrace {
            steps: report.steps.clone(),
            total: report.total_seek,
        };
        println!();
        println!("{}", trace);
    }
}

fn print_comparison(c: &Comparison, explain: bool) {
    print_report(&c.left, explain);
    println!();
    print_report(&c.right, explain);
    println!();
    match c.winner() {
        Some(p) => println!("Winner: {} by {} cylinders", p, c.difference()),
        None => println!("Tie: both policies travel {} cylinders", c.left.total_seek),
    }
}

fn print_ranking(r: &Ranking) {
    println!("Policy Ranking (lowest total seek first)");
    println!("========================================");
    for (i, e) in r.entries.iter().enumerate() {
        println!("  {}. {:<5} {:>6}", i + 1, e.policy.to_string(), e.total_seek);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_config_overrides_env_defaults() {
        let mut config = SimConfig::default();
        let scenario = ScenarioConfig {
            cylinder_count: Some(5000),
            bounds: Some(BoundsMode::Clamp),
            ..Default::default()
        };
        apply_scenario_config(&mut config, &scenario);
        assert_eq!(config.cylinder_count, 5000);
        assert_eq!(config.bounds, BoundsMode::Clamp);
        assert_eq!(config.delimiter, ",");
    }

    #[test]
    fn cli_overrides_higher_priority_than_config() {
        let mut config = SimConfig::default();
        apply_scenario_config(
            &mut config,
            &ScenarioConfig {
                cylinder_count: Some(5000),
                ..Default::default()
            },
        );
        let flags = ConfigArgs {
            cylinders: Some(300),
            bounds: Some("permit".into()),
            ..Default::default()
        };
        apply_cli_overrides(&mut config, &flags).unwrap();
        assert_eq!(config.cylinder_count, 300);
        assert_eq!(config.bounds, BoundsMode::Permit);
    }

    #[test]
    fn bad_bounds_flag_is_an_error() {
        let mut config = SimConfig::default();
        let flags = ConfigArgs {
            bounds: Some("wrap".into()),
            ..Default::default()
        };
        assert!(apply_cli_overrides(&mut config, &flags).is_err());
    }

    fn env_config(delimiter: &str) -> SimConfig {
        let delimiter = delimiter.to_string();
        SimConfig::from_lookup(move |k: &str| {
            (k == "SEEKSIM_DELIMITER").then(|| delimiter.clone())
        })
    }

    const SEMICOLON_SCENARIO: &str = r#"
jobs:
  - op: simulate
    policy: FCFS
    head: 0
    requests: "5;7"
"#;

    #[test]
    fn env_delimiter_splits_scenario_string_queue() {
        let (config, parsed) =
            load_scenario(SEMICOLON_SCENARIO, env_config(";"), &ConfigArgs::default()).unwrap();
        assert_eq!(config.delimiter, ";");
        assert_eq!(parsed.jobs[0].workload().requests, vec![5, 7]);
    }

    #[test]
    fn scenario_flags_override_scenario_config() {
        let yaml = r#"
config:
  cylinder_count: 5000
  bounds: reject
  delimiter: ","
jobs:
  - op: rank
    head: 0
    requests: "5;7"
"#;
        let flags = ConfigArgs {
            cylinders: Some(300),
            bounds: Some("clamp".into()),
            delimiter: Some(";".into()),
        };
        let (config, parsed) = load_scenario(yaml, SimConfig::default(), &flags).unwrap();
        assert_eq!(config.cylinder_count, 300);
        assert_eq!(config.bounds, BoundsMode::Clamp);
        assert_eq!(parsed.jobs[0].workload().requests, vec![5, 7]);
    }

    #[test]
    fn scenario_command_accepts_override_flags() {
        let cli = Cli::try_parse_from([
            "seeksim",
            "scenario",
            "--file",
            "s.yaml",
            "--bounds",
            "permit",
            "--delimiter",
            ";",
        ])
        .unwrap();
        match cli.command {
            Commands::Scenario { config, .. } => {
                assert_eq!(config.bounds.as_deref(), Some("permit"));
                assert_eq!(config.delimiter.as_deref(), Some(";"));
                assert_eq!(config.cylinders, None);
            }
            _ => panic!("expected scenario"),
        }
    }

    #[test]
    fn negative_head_reaches_the_parser() {
        let cli = Cli::try_parse_from(["seeksim", "run", "--head", "-5"]).unwrap();
        match cli.command {
            Commands::Run { input, .. } => {
                assert_eq!(input.head, "-5");
                let err = parse_head(&input.head).unwrap_err();
                assert!(matches!(
                    err,
                    seeksim_core::error::Error::InvalidInput { ref token, .. } if token == "-5"
                ));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn sequence_formatting() {
        assert_eq!(format_sequence(&[53, 65, 67]), "53 -> 65 -> 67");
        assert_eq!(format_sequence(&[53]), "53");
    }

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["seeksim", "run", "--policy", "scan"]).unwrap();
        match cli.command {
            Commands::Run { policy, input, .. } => {
                assert_eq!(policy, "scan");
                assert_eq!(input.requests, DEFAULT_QUEUE);
                assert_eq!(input.head, "53");
            }
            _ => panic!("expected run"),
        }
    }
}
