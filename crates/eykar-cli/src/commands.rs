//! Subcommands and their output.

use std::error::Error;
use std::fmt::Write as _;

use clap::{Parser, Subcommand};
use eykar_coords::{
    codec, coord_to_spiral, spiral_to_coord, Coordinate, HalfWord, LocationWord, Pitch,
    SpiralIndex,
};
use eykar_ledger::{Ledger, LedgerConfig, Registration, DEFAULT_PITCH};
use serde::Serialize;
use tracing::info;

/// Inspect Eykar spawn-spiral locations and storage words.
#[derive(Debug, Parser)]
#[command(name = "eykar", version)]
pub struct Cli {
    /// Spacing between spiral rings
    #[arg(long, global = true, env = "EYKAR_PITCH", default_value_t = DEFAULT_PITCH)]
    pub pitch: u128,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Location of a registration index on the spiral
    Locate { index: u128 },

    /// Registration index of a spiral location
    Index {
        #[arg(allow_negative_numbers = true)]
        x: i128,
        #[arg(allow_negative_numbers = true)]
        y: i128,
    },

    /// Encode a coordinate into a storage word
    Encode {
        #[arg(allow_negative_numbers = true)]
        x: i128,
        #[arg(allow_negative_numbers = true)]
        y: i128,
    },

    /// Decode a storage word into a coordinate
    Decode { word: LocationWord },

    /// Cut a storage word into its raw halves
    Split { word: LocationWord },

    /// Join two raw halves into a storage word
    Merge { high: HalfWord, low: HalfWord },

    /// Floor Euclidean distance between two coordinates
    Distance {
        #[arg(allow_negative_numbers = true)]
        x1: i128,
        #[arg(allow_negative_numbers = true)]
        y1: i128,
        #[arg(allow_negative_numbers = true)]
        x2: i128,
        #[arg(allow_negative_numbers = true)]
        y2: i128,
    },

    /// Register participants in order on a fresh ledger
    Register {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct Placement {
    index: SpiralIndex,
    ring: u128,
    coordinate: Coordinate,
    word: LocationWord,
}

#[derive(Debug, Serialize)]
struct Encoded {
    coordinate: Coordinate,
    word: LocationWord,
}

#[derive(Debug, Serialize)]
struct Halves {
    high: String,
    low: String,
}

#[derive(Debug, Serialize)]
struct Measured {
    from: Coordinate,
    to: Coordinate,
    distance: u128,
}

/// Run a parsed command and render its output.
pub fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let pitch = Pitch::new(cli.pitch)?;

    match &cli.command {
        Command::Locate { index } => {
            let index = SpiralIndex::new(*index);
            render(cli.json, &placement(index, pitch)?, |p| {
                format!(
                    "index {} ring {} at {}\n{}",
                    p.index.value(),
                    p.ring,
                    p.coordinate,
                    p.word
                )
            })
        }
        Command::Index { x, y } => {
            let index = coord_to_spiral(Coordinate::new(*x, *y), pitch)?;
            render(cli.json, &placement(index, pitch)?, |p| {
                format!("{} is index {} (ring {})", p.coordinate, p.index.value(), p.ring)
            })
        }
        Command::Encode { x, y } => {
            let coordinate = Coordinate::new(*x, *y);
            let encoded = Encoded {
                coordinate,
                word: codec::encode(coordinate),
            };
            render(cli.json, &encoded, |e| e.word.to_string())
        }
        Command::Decode { word } => {
            let encoded = Encoded {
                coordinate: codec::decode(*word),
                word: *word,
            };
            render(cli.json, &encoded, |e| e.coordinate.to_string())
        }
        Command::Split { word } => {
            let (high, low) = codec::split(*word);
            let halves = Halves {
                high: high.to_hex(),
                low: low.to_hex(),
            };
            render(cli.json, &halves, |h| format!("{}\n{}", h.high, h.low))
        }
        Command::Merge { high, low } => {
            let word = codec::merge(*high, *low);
            render(cli.json, &word, |w| w.to_string())
        }
        Command::Distance { x1, y1, x2, y2 } => {
            let from = Coordinate::new(*x1, *y1);
            let to = Coordinate::new(*x2, *y2);
            let measured = Measured {
                from,
                to,
                distance: from.distance_to(&to)?,
            };
            render(cli.json, &measured, |m| m.distance.to_string())
        }
        Command::Register { names } => {
            let mut ledger = Ledger::new(LedgerConfig::default().with_pitch(cli.pitch))?;
            for name in names {
                ledger.register(name.as_str())?;
            }
            info!(count = ledger.len(), "registration batch complete");

            let registrations: Vec<&Registration> = ledger.iter().collect();
            render(cli.json, &registrations, |regs| {
                regs.iter().fold(String::new(), |mut out, r| {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    let _ = write!(
                        out,
                        "{}\t{}\t{}\t{}",
                        r.index.value(),
                        r.name,
                        r.coordinate(),
                        r.location
                    );
                    out
                })
            })
        }
    }
}

fn placement(index: SpiralIndex, pitch: Pitch) -> eykar_coords::Result<Placement> {
    let coordinate = spiral_to_coord(index, pitch)?;
    Ok(Placement {
        index,
        ring: index.ring(),
        coordinate,
        word: codec::encode(coordinate),
    })
}

fn render<T, F>(json: bool, value: &T, text: F) -> Result<String, Box<dyn Error>>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}
