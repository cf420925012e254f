//! cafe — command-line front end for the barista scheduling engine.
//!
//! ```text
//! cafe simulate --test 2            # one deterministic test run
//! cafe simulate --all --out ./out   # tests 1..=10, CSV per run
//! cafe dataset --out ./out          # generated inputs of tests 1..=10
//! cafe live --seconds 20            # drive the wall-clock scheduler
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG` to change the level.

mod config;
mod live;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use cafe_core::CafeConfig;
use cafe_output::{export_dataset, export_run};
use cafe_sim::{SimulationService, TestRun};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Test numbers covered by `--all` and the dataset export.
const REFERENCE_TESTS: std::ops::RangeInclusive<u32> = 1..=10;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Priority-based barista scheduler and SLA simulator.
#[derive(Parser, Debug)]
#[command(name = "cafe", version, about)]
struct Cli {
    /// Path to a TOML config file with `[live]` and `[sim]` tables.
    #[arg(long, global = true, env = "CAFE_CONFIG")]
    config: Option<PathBuf>,

    /// Number of baristas (overrides the config file).
    #[arg(long, global = true, env = "CAFE_WORKERS")]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay synthetic workloads through the event simulator.
    Simulate(SimulateArgs),
    /// Export the generated input stream of every reference test.
    Dataset {
        /// Directory for `simulation_dataset_inputs.csv`.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Run the wall-clock scheduler against a burst of orders.
    Live(live::LiveArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Test numbers to run.
    #[arg(long = "test", short = 't', conflicts_with = "all")]
    tests: Vec<u32>,

    /// Run tests 1 through 10.
    #[arg(long)]
    all: bool,

    /// Write `simulation_results_test{n}.csv` files into this directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the run history as JSON instead of a text report.
    #[arg(long)]
    json: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = config::load(cli.config.as_deref())?;
    if let Some(workers) = cli.workers {
        config.live.worker_count = workers;
        config.sim.worker_count = workers;
        config.validate()?;
    }

    match cli.command {
        Command::Simulate(args) => simulate(&config, args),
        Command::Dataset { out } => dataset(&config, out),
        Command::Live(args) => live::run(&config, args),
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn simulate(config: &CafeConfig, args: SimulateArgs) -> Result<()> {
    let tests: Vec<u32> = if args.all {
        REFERENCE_TESTS.collect()
    } else if args.tests.is_empty() {
        bail!("pass --test <N> (repeatable) or --all");
    } else {
        args.tests
    };

    let mut service = SimulationService::new(config.sim.clone())?;
    service.run_batch(&tests)?;

    if let Some(dir) = &args.out {
        std::fs::create_dir_all(dir)?;
        for run in service.history() {
            export_run(dir, run)?;
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(service.history())?);
    } else {
        for run in service.history() {
            print_report(run);
        }
    }
    Ok(())
}

fn dataset(config: &CafeConfig, out: PathBuf) -> Result<()> {
    let service = SimulationService::new(config.sim.clone())?;
    let streams = REFERENCE_TESTS
        .map(|n| service.workload(n).map(|orders| (n, orders)))
        .collect::<Result<Vec<_>, _>>()?;

    std::fs::create_dir_all(&out)?;
    let path = export_dataset(&out, streams.iter().map(|(n, orders)| (*n, orders.as_slice())))?;
    info!(path = %path.display(), tests = streams.len(), "dataset written");
    Ok(())
}

fn print_report(run: &TestRun) {
    println!();
    println!("============ SIMULATION REPORT (Test #{}) ============", run.test_number());
    println!("Profile:                {}", run.profile_name());
    println!("Total Orders Processed: {}", run.total_orders());
    println!("Average Wait:           {:.2} min", run.avg_wait_minutes());
    println!("Max Wait:               {:.2} min", run.max_wait_minutes());
    println!("SLA Violations (>10m):  {}", run.sla_violations());
    println!("--- Barista Load ---");
    for (i, count) in run.worker_counts().iter().enumerate() {
        println!("Barista {:<14}: {count}", i + 1);
    }
    println!("--- Drink Breakdown ---");
    for (drink, count) in run.drink_breakdown() {
        println!("{:<15}: {count}", drink.as_str());
    }
}
