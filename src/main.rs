//! NeoPawn - command-line entry point
//!
//! Runs a single walker simulation and reports the steps taken.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use neopawn::core::config::{SimulationConfig, TrapAccounting};
use neopawn::core::error::Result;
use neopawn::simulation::{run, RunOutcome, UNFINISHED_NOTICE};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Random-walk pawn simulation
#[derive(Parser, Debug)]
#[command(name = "neopawn")]
#[command(about = "Count the steps a jumping walker needs to eat every piece on an NxN lattice")]
struct Args {
    /// Lattice side length N
    n: Option<usize>,

    /// Number of pieces M (at most N*N)
    m: Option<usize>,

    /// Step budget before the run is abandoned
    max_steps: Option<u32>,

    /// TOML config file; positional arguments and flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// How trapped steps count toward the reported total (ignore or accumulate)
    #[arg(long)]
    trap_accounting: Option<TrapAccounting>,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log every step
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match execute(&args) {
        Ok(outcome) if outcome.completed => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<RunOutcome> {
    let config = build_config(args)?;
    let outcome = run(config)?;
    report(&outcome, args.format)?;
    Ok(outcome)
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(n) = args.n {
        config.lattice_size = n;
    }
    if let Some(m) = args.m {
        config.piece_count = m;
    }
    if let Some(max_steps) = args.max_steps {
        config.max_steps = max_steps;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(accounting) = args.trap_accounting {
        config.trap_accounting = accounting;
    }

    config.validate()?;
    Ok(config)
}

fn report(outcome: &RunOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if outcome.failed() {
                println!("{}", UNFINISHED_NOTICE);
            }
            println!("{}", outcome.summary());
            if let Some(seed) = outcome.seed {
                println!("Seed: {}", seed);
            }
        }
        OutputFormat::Json => println!("{}", outcome.to_json()?),
    }
    Ok(())
}
