use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod commands;
mod summary;

use commands::PlacementArg;

/// Largest `--count` accepted by `batch`.
const MAX_BATCH: i64 = 100_000;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Regular polygon construction, batch reports and congruence checks")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the canonical unit polygon with its centroid and area
    Canonical {
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=12))]
        vertices: u8,
    },
    /// Read up to COUNT polygons and print listing, centroids and areas
    Batch {
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=12))]
        vertices: u8,
        /// Polygons to read; slots are allocated up front, so at most 100000
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_BATCH))]
        count: u32,
        /// Whitespace-separated coordinates; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Also write a JSON summary here
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Compare two generated polygons, each given as "x y angle side"
    Equal {
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=12))]
        vertices: u8,
        #[arg(long)]
        a: PlacementArg,
        #[arg(long)]
        b: PlacementArg,
    },
}

/// Monomorphize `$f::<V>` for the vertex counts the CLI accepts.
macro_rules! with_arity {
    ($n:expr, $f:ident($($arg:expr),* $(,)?)) => {
        match $n {
            3 => commands::$f::<3>($($arg),*),
            4 => commands::$f::<4>($($arg),*),
            5 => commands::$f::<5>($($arg),*),
            6 => commands::$f::<6>($($arg),*),
            7 => commands::$f::<7>($($arg),*),
            8 => commands::$f::<8>($($arg),*),
            9 => commands::$f::<9>($($arg),*),
            10 => commands::$f::<10>($($arg),*),
            11 => commands::$f::<11>($($arg),*),
            12 => commands::$f::<12>($($arg),*),
            n => bail!("unsupported vertex count {n} (expected 3..=12)"),
        }
    };
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cmd.action {
        Action::Canonical { vertices } => with_arity!(vertices, canonical(&mut out)),
        Action::Batch {
            vertices,
            count,
            input,
            json,
        } => {
            tracing::info!(vertices, count, input = ?input, json = ?json, "batch");
            with_arity!(
                vertices,
                batch(&mut out, count as usize, input.as_deref(), json.as_deref())
            )
        }
        Action::Equal { vertices, a, b } => with_arity!(vertices, equal(&mut out, a, b)),
    }
}
