use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use teamplan::dispatching::{rules, RuleEngine};
use teamplan::io::{self, writer};
use teamplan::scheduler::{MatchPolicy, ScheduleKpi, Simulation};
use teamplan::validation::validate_input;

/// Mentorship-aware project staffing.
#[derive(Debug, Parser)]
#[command(name = "teamplan", version, about)]
struct Cli {
    /// Input problem file.
    input: PathBuf,

    /// Write the submission format here instead of printing a report.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start-order rule.
    #[arg(long, value_enum, default_value = "ebb")]
    rule: Rule,

    /// Maximum level shortfall bridgeable by mentorship (0 disables it).
    #[arg(long, default_value_t = 1)]
    mentor_gap: u32,

    /// Enable debug logging of the simulation loop.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Rule {
    /// Earliest best-before first (the baseline).
    Ebb,
    /// Shortest duration first.
    Spt,
    /// Longest duration first.
    Lpt,
    /// Highest base score first.
    Score,
    /// Best score per contributor-day first.
    ScorePerDay,
    /// Fewest roles first.
    FewestRoles,
    /// Least slack first.
    Slack,
}

impl Rule {
    fn engine(self) -> RuleEngine {
        let engine = RuleEngine::new();
        match self {
            Rule::Ebb => engine.with_rule(rules::EarliestBestBefore),
            Rule::Spt => engine.with_rule(rules::ShortestDuration),
            Rule::Lpt => engine.with_rule(rules::LongestDuration),
            Rule::Score => engine.with_rule(rules::HighestScore),
            Rule::ScorePerDay => engine.with_rule(rules::ScorePerDay),
            Rule::FewestRoles => engine.with_rule(rules::FewestRoles),
            Rule::Slack => engine.with_rule(rules::LeastSlack),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let problem = io::parse_file(&cli.input)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    // Validation findings are advisory; the simulation handles unfillable
    // projects by never starting them.
    if let Err(findings) = validate_input(&problem.contributors, &problem.projects) {
        for finding in &findings {
            warn!(kind = ?finding.kind, "{}", finding.message);
        }
    }

    let simulation = Simulation::new()
        .with_rule_engine(cli.rule.engine())
        .with_policy(MatchPolicy::with_mentor_gap(cli.mentor_gap));
    let schedule = simulation.run(&problem.contributors, &problem.projects);
    let kpi = ScheduleKpi::calculate(&schedule, &problem.projects);

    match cli.output {
        Some(path) => {
            fs::write(&path, writer::submission(&schedule))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} projects planned, total score {}",
                kpi.completed, kpi.total_score
            );
        }
        None => print!("{}", writer::report(&schedule, &kpi)),
    }

    Ok(())
}
