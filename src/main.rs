use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ride_fare::{Fleet, Session};

#[derive(Parser)]
#[command(name = "ride-fare")]
#[command(about = "Smart Ride Booking - fare calculator for car, bike and bus rides")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON fleet file replacing the built-in vehicles
    #[arg(long, env = "RIDE_FARE_FLEET")]
    fleet: Option<PathBuf>,

    /// Write the ride history as CSV when the session ends
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the session on stdout
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let fleet = match &cli.fleet {
        Some(path) => Fleet::from_file(path)?,
        None => Fleet::default(),
    };

    let stdin = io::stdin();
    let ledger = Session::new(&fleet, stdin.lock(), io::stdout()).run()?;

    if let Some(path) = &cli.export {
        ledger.export_csv(path)?;
        println!("Ride history written to {}", path.display());
    }

    Ok(())
}
