// main.rs - Smallest periodic strip with an oscillator
// Widens an N-row torus one column at a time until some seed oscillates

use anyhow::{Context, Result, bail};
use clap::Parser;
use periodic_conway::{Grid, evolve_until_cycle_with, find_oscillator};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "riddler",
    version,
    about = "Find the narrowest periodic Life grid with an oscillator"
)]
struct Cli {
    /// Number of rows in the torus.
    #[arg(short, long, default_value_t = 3)]
    rows: usize,

    /// Give up after this many columns.
    #[arg(short, long, default_value_t = 8)]
    max_cols: usize,

    /// Report the period without drawing the cycle.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    periodic_conway::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.rows == 0 {
        bail!("--rows must be positive");
    }

    for cols in 1..=cli.max_cols {
        let mut grid = Grid::new(cli.rows, cols)
            .with_context(|| format!("build {}x{} grid", cli.rows, cols))?;
        println!("Does the {} x {} periodic grid have any oscillators?", cli.rows, cols);

        let Some(oscillator) = find_oscillator(&mut grid)
            .with_context(|| format!("search {}x{} grid", cli.rows, cols))?
        else {
            println!("No.\n");
            continue;
        };
        info!(cols, seed = oscillator.seed, period = oscillator.period, "search finished");
        println!("Yes: for example, this oscillator of period {}.", oscillator.period);
        if !cli.quiet {
            // The grid was left inside the cycle; one more walk shows every phase.
            evolve_until_cycle_with(&mut grid, |g| println!("{}\n", g))?;
        }
        return Ok(());
    }

    bail!("no oscillator on {}-row grids up to {} columns", cli.rows, cli.max_cols)
}
