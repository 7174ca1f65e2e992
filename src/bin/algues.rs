//! Runs the algae growth simulation and writes the report file of the
//! original exercise: the initial colony, then the colony after the
//! requested number of growth passes.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use cursor_list::algae;

#[derive(Parser)]
#[command(name = "algues")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "One-dimensional algae growth over a circular cursor list", long_about = None)]
struct Args {
    /// Number of growth passes to run
    #[arg(short = 'n', long, default_value_t = 20)]
    iterations: u32,

    /// Report file to write
    #[arg(short, long, default_value = "algues_out.txt")]
    output: PathBuf,
}

fn main() -> io::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut colony = algae::colony();
    let mut out = File::create(&args.output)?;

    writeln!(out, "la liste initiale")?;
    write!(out, "{}", colony)?;
    writeln!(out)?;

    for pass in 1..=args.iterations {
        algae::grow(&mut colony);
        info!(pass, cells = colony.len(), "growth pass complete");
    }

    writeln!(out, "la liste résultat de {} itérations", args.iterations)?;
    write!(out, "{}", colony)?;

    info!(output = %args.output.display(), "report written");
    Ok(())
}
