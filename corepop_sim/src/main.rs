//! corepop Simulator CLI
//!
//! Runs the population simulation and writes the final report.

use clap::Parser;
use corepop_core::{SimConfig, Simulation};
use corepop_sim::{
    write_csv_file, RunError, RunLoop, SimExport, TextReport, CHECKPOINT_INTERVAL_DAYS,
    DEFAULT_CSV_PATH, REFERENCE_YEARS,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Dungeon core population simulator
#[derive(Parser, Debug)]
#[command(name = "corepop-sim")]
#[command(about = "Simulate a cohort of dungeon cores climbing levels", long_about = None)]
struct Args {
    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Simulated years to run
    #[arg(short, long, default_value_t = REFERENCE_YEARS)]
    years: u64,

    /// Simulated days to run (overrides --years)
    #[arg(short, long)]
    days: Option<u64>,

    /// Levels seeded with Ancients at start
    #[arg(short, long, default_value = "100")]
    levels: usize,

    /// Days between progress checkpoints (0 = none)
    #[arg(long, default_value_t = CHECKPOINT_INTERVAL_DAYS)]
    checkpoint_days: u64,

    /// Per-level CSV output path
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    csv: String,

    /// Skip the CSV export
    #[arg(long)]
    no_csv: bool,

    /// Export the full summary as JSON to this path
    #[arg(long)]
    export: Option<String>,

    /// Don't print the text report
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("corepop simulator v{}", env!("CARGO_PKG_VERSION"));
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if let Err(e) = run(&args) {
        error!("✗ {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    // Determine seed
    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    } else {
        args.seed
    };

    let config = SimConfig::default()
        .with_seed(seed)
        .with_initial_levels(args.levels);
    let mut sim = Simulation::new(config)?;

    let run_loop = match args.days {
        Some(days) => RunLoop::new(days),
        None => RunLoop::years(args.years)?,
    };
    let result = run_loop
        .with_checkpoint_interval(args.checkpoint_days)
        .run(&mut sim);

    let summary = sim.summary();

    if !args.quiet {
        println!("{}", TextReport(&summary));
    }

    if !args.no_csv {
        write_csv_file(&summary, &args.csv)?;
        info!("Wrote {} level rows to {}", summary.levels.len(), args.csv);
    }

    if let Some(path) = &args.export {
        SimExport::new(seed, result.days, result.wall_time.as_secs_f64(), summary)
            .write_to_file(path)?;
        info!("Exported summary to {}", path);
    }

    info!("✅ Done (seed={}, days={})", seed, result.days);
    Ok(())
}
