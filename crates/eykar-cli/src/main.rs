//! eykar CLI
//!
//! Inspect spawn-spiral locations and their 256-bit storage words.
//!
//! Usage:
//!   eykar locate <index>
//!   eykar index <x> <y>
//!   eykar encode <x> <y>
//!   eykar decode <word>
//!   eykar split <word>
//!   eykar merge <high> <low>
//!   eykar distance <x1> <y1> <x2> <y2>
//!   eykar register <name>...
//!
//! Environment:
//!   EYKAR_PITCH  Spacing between spiral rings (default: 3)
//!   RUST_LOG     Log filter (default: eykar=info)

mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine-readable with --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eykar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = commands::Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let output = commands::run(&cli)?;
    println!("{output}");

    Ok(())
}
