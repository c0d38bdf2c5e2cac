//! Museum admissions simulator - plays one admission day
//!
//! Loads a TOML venue definition, admits the configured patron roster in
//! order, draws the ticket lottery for each paid exhibit, and prints a
//! JSON day summary to stdout.
//!
//! Module structure:
//! - `domain/` - Core business types (Exhibit, Patron, handles)
//! - `services/` - Business logic (Museum engine, reporting)
//! - `infra/` - Infrastructure (Config)

use clap::Parser;
use museum_admissions::domain::{Exhibit, ExhibitId, Patron};
use museum_admissions::infra::Config;
use museum_admissions::services::{DaySummary, Museum};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Museum admissions simulator
#[derive(Parser, Debug)]
#[command(name = "museum-sim", version, about)]
struct Args {
    /// Path to TOML venue configuration file
    #[arg(short, long, default_value = "config/dev.toml")]
    config: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with configurable level via RUST_LOG env var
    // Default: INFO, use RUST_LOG=debug for per-exhibit decline visibility
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!("museum-sim starting");

    let args = Args::parse();
    let config = Config::load_from_path(&args.config);

    info!(
        config_file = %config.config_file(),
        museum = %config.museum_name(),
        exhibits = %config.exhibits().len(),
        patrons = %config.patrons().len(),
        lottery_seed = ?config.lottery_seed(),
        "config_loaded"
    );

    let mut museum = Museum::new(config.museum_name());
    for entry in config.exhibits() {
        museum.add_exhibit(Exhibit::new(&entry.name, entry.cost));
    }

    for entry in config.patrons() {
        let mut patron = Patron::new(&entry.name, entry.spending_money);
        for interest in &entry.interests {
            patron.add_interest(interest);
        }
        museum.admit(patron);
    }

    // Seeded draws reproduce a day exactly; otherwise use the thread RNG
    let mut rng: Box<dyn RngCore> = match config.lottery_seed() {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    for (idx, exhibit) in museum.exhibits().iter().enumerate() {
        if exhibit.is_free() {
            continue;
        }
        match museum.draw_lottery_winner(ExhibitId(idx), rng.as_mut()) {
            Some(winner) => {
                info!(exhibit = %exhibit.name(), winner = %winner, "lottery_winner")
            }
            None => info!(exhibit = %exhibit.name(), "lottery_no_contestants"),
        }
    }

    info!(
        revenue = %museum.revenue(),
        patrons = %museum.patrons().len(),
        "day_complete"
    );

    let summary = DaySummary::build(&museum);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
