use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use boarding_sim::feed;
use boarding_sim::report;
use boarding_sim::simulation::{SimConfig, SimOutcome, Simulation, MAX_TICKS, VEHICLE_CAPACITY};

#[derive(Parser)]
#[command(name = "boarding_sim")]
#[command(about = "Passenger boarding simulation for three shared-vehicle routes")]
struct Cli {
    /// Feed file with one `arrival,route,duration` record per line.
    /// A generated feed is used when omitted.
    feed: Option<PathBuf>,

    /// Passengers per vehicle
    #[arg(long, default_value_t = VEHICLE_CAPACITY)]
    capacity: u32,

    /// Stop after this many ticks even if work remains
    #[arg(long, default_value_t = MAX_TICKS)]
    max_ticks: u32,

    /// Seed for the generated feed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Number of passengers in the generated feed
    #[arg(long, default_value = "20")]
    passengers: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = SimConfig::new(cli.capacity, cli.max_ticks);
    config.validate()?;

    let passengers = match &cli.feed {
        Some(path) => feed::read_feed(path)?,
        None => {
            // Spread arrivals so roughly one passenger arrives per tick
            let span = cli.passengers.max(1) as u32;
            feed::generate_feed(cli.seed, cli.passengers, span)
        }
    };

    println!("{}", report::header());
    let mut simulation = Simulation::new(passengers, config);
    let outcome = simulation.run_with(|snapshot| println!("{}", report::format_row(snapshot)));

    match outcome {
        SimOutcome::Completed { .. } => println!("\n{}", report::format_outcome(&outcome)),
        SimOutcome::SafetyBound { .. } => eprintln!("{}", report::format_outcome(&outcome)),
    }

    Ok(())
}
