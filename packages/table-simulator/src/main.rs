//! Table simulator CLI - plays whole Doppelkopf tables in memory.
//!
//! Each closed table is written as one JSON record; a summary of team wins,
//! card points and announcements is printed at the end.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use metrics::{build_table_record, Summary};
use output::OutputWriter;
use simulator::Simulator;
use tracing::{info, warn};
use types::{OutputFormat, StrategyKind};

#[derive(Parser)]
#[command(name = "table-simulator")]
#[command(about = "In-memory Doppelkopf table simulator")]
struct Args {
    /// Number of tables to simulate
    #[arg(short, long, default_value = "1", env = "DOKO_SIM_TABLES")]
    tables: u32,

    /// Rounds per table
    #[arg(short, long, default_value = "4", env = "DOKO_SIM_ROUNDS")]
    rounds: u16,

    /// Strategy for every seat
    #[arg(long, value_enum, default_value = "first-legal", env = "DOKO_SIM_STRATEGY")]
    strategy: StrategyKind,

    /// Base seed; a random one is drawn (and logged) when omitted
    #[arg(long, env = "DOKO_SIM_SEED")]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results", env = "DOKO_SIM_OUTPUT_DIR")]
    output_dir: String,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Gzip the output file
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless asked.
    let default_filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.rounds == 0 {
        return Err("--rounds must be at least 1".into());
    }

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let strategy_name = args.strategy.registry_name();
    info!(
        tables = args.tables,
        rounds = args.rounds,
        strategy = strategy_name,
        base_seed,
        "Starting table simulator"
    );

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let simulator = Simulator::new(base_seed, args.rounds, args.strategy);

    let start = Instant::now();
    let mut summary = Summary::default();
    let mut errors = 0u32;

    for table_no in 1..=args.tables {
        let table_start = Instant::now();
        match simulator.simulate_table(table_no) {
            Ok(result) => {
                let duration_ms = table_start.elapsed().as_secs_f64() * 1000.0;
                let record = build_table_record(result, strategy_name, duration_ms);
                summary.record(&record);
                if let Err(e) = output_writer.write_table(&record) {
                    warn!(table_no, error = %e, "Failed to write table record");
                }
                if args.verbose {
                    info!(table_no, duration_ms, "Table closed");
                }
            }
            Err(e) => {
                errors += 1;
                warn!(table_no, error = %e, "Table failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let path = output_writer.output_path().to_path_buf();
    output_writer.finish()?;

    if args.show_output {
        info!("Results written to: {}", path.display());
        print_summary(&summary, errors, elapsed, args.tables, base_seed);
    }

    Ok(())
}

fn print_summary(
    summary: &Summary,
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
    base_seed: u64,
) {
    println!("\n=== Simulation Summary ===");
    println!("Base seed: {}", base_seed);
    println!("Tables completed: {}/{}", summary.tables, total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if summary.tables > 0 {
        println!("Average time per table: {:?}", elapsed / summary.tables);
    }

    if summary.rounds == 0 {
        return;
    }

    let pct = |n: u32| f64::from(n) / f64::from(summary.rounds) * 100.0;
    println!("\n=== Results ({} rounds) ===", summary.rounds);
    println!("Re wins: {} ({:.1}%)", summary.re_wins, pct(summary.re_wins));
    println!(
        "Kontra wins: {} ({:.1}%)",
        summary.kontra_wins,
        pct(summary.kontra_wins)
    );
    if summary.undecided > 0 {
        println!("No winner: {}", summary.undecided);
    }
    println!(
        "Average card points: re={:.1}, kontra={:.1}",
        summary.avg_re_card_points(),
        summary.avg_kontra_card_points()
    );

    println!("\n=== Modes ===");
    for (mode, count) in &summary.modes {
        println!("{}: {}", mode, count);
    }

    println!("\n=== Announcements ===");
    if summary.announcements.is_empty() {
        println!("none");
    }
    for (kind, count) in &summary.announcements {
        println!("{}: {}", kind, count);
    }
}
