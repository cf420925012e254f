//! `cafe live` — a short wall-clock session against the live scheduler.
//!
//! Orders are taken from the reference workload of test 1 and submitted a
//! few hundred milliseconds apart while the tick thread runs.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use cafe_core::{CafeConfig, Order, Timestamp};
use cafe_live::{LiveRunner, LiveScheduler, LiveStats, Worker};
use cafe_sim::SimulationService;

#[derive(Args, Debug)]
pub struct LiveArgs {
    /// Number of orders to submit.
    #[arg(long, default_value_t = 12)]
    orders: usize,

    /// Stop after this many seconds even if orders remain.
    #[arg(long, default_value_t = 60)]
    seconds: u64,

    /// Milliseconds between submissions.
    #[arg(long, default_value_t = 250)]
    gap_ms: u64,

    /// Real seconds per minute of prep time (overrides the config file).
    #[arg(long)]
    prep_secs_per_minute: Option<u64>,

    /// Print the final state as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary {
    stats:     LiveStats,
    ticks:     u64,
    workers:   Vec<Worker>,
    waiting:   Vec<Order>,
    completed: Vec<Order>,
}

pub fn run(config: &CafeConfig, args: LiveArgs) -> Result<()> {
    let mut live = config.live.clone();
    if let Some(secs) = args.prep_secs_per_minute {
        live.prep_secs_per_minute = secs;
    }

    let workload = SimulationService::new(config.sim.clone())?.workload(1)?;
    let scheduler = Arc::new(LiveScheduler::new(live)?);
    let runner = LiveRunner::spawn(Arc::clone(&scheduler))?;
    let deadline = Instant::now() + Duration::from_secs(args.seconds);

    for template in workload.iter().take(args.orders) {
        let drinks: Vec<&str> = template.drinks().iter().map(|d| d.as_str()).collect();
        scheduler.submit(template.customer_name(), drinks.as_slice(), template.is_loyal())?;
        thread::sleep(Duration::from_millis(args.gap_ms));
    }

    let submitted = args.orders.min(workload.len());
    let poll = scheduler.config().tick_period();
    while Instant::now() < deadline {
        let stats = scheduler.stats(Timestamp::now());
        info!(
            served = stats.orders_served,
            waiting = stats.waiting,
            processing = stats.processing,
            "live status"
        );
        if stats.orders_served >= submitted {
            break;
        }
        thread::sleep(poll);
    }

    let ticks = runner.stop();
    let summary = Summary {
        stats:     scheduler.stats(Timestamp::now()),
        ticks,
        workers:   scheduler.workers(),
        waiting:   scheduler.queue(),
        completed: scheduler.completed(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    let stats = &summary.stats;
    println!();
    println!("============ LIVE SESSION ({} ticks) ============", summary.ticks);
    println!("Orders Served:         {}", stats.orders_served);
    println!("Still Waiting:         {}", stats.waiting);
    println!("In Progress:           {}", stats.processing);
    println!("Average Wait:          {:.2} min", stats.avg_wait_minutes);
    println!("Max Wait:              {:.2} min", stats.max_wait_minutes);
    println!("SLA Violations (>10m): {}", stats.sla_violations);
    println!("--- Baristas ---");
    for worker in &summary.workers {
        match worker.current_order() {
            Some(order) => println!("{:<10} busy with {} ({})", worker.label(), order.id(), order.customer_name()),
            None => println!("{:<10} idle", worker.label()),
        }
    }
    println!("--- Queue ---");
    for order in &summary.waiting {
        println!(
            "{:<6} {:<16} score {:>6.1}  {}",
            order.id().to_string(),
            order.customer_name(),
            order.priority_score(),
            order.priority_reason().label()
        );
    }
}
