//! Rally simulator CLI - plays seeded random badminton matches through the
//! scoring engine and records per-match metrics.

mod metrics;
mod output;
mod simulator;
mod types;

use clap::Parser;
use metrics::build_match_metrics;
use output::OutputWriter;
use simulator::{Competitor, MatchResult, Simulator, SimulatorConfig};
use std::time::Instant;
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "rally-simulator")]
#[command(about = "Fast in-memory badminton match simulator")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Base seed (match N uses seed + N - 1); random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that competitor A wins a rally
    #[arg(long, default_value = "0.5")]
    a_strength: f64,

    /// Probability of a mis-tap before each rally that is immediately undone
    #[arg(long, default_value = "0.0")]
    undo_rate: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the detail output file
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SimulatorConfig {
        a_strength: args.a_strength,
        undo_rate: args.undo_rate,
    };
    config.validate()?;

    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(
        matches = args.matches,
        base_seed,
        a_strength = config.a_strength,
        undo_rate = config.undo_rate,
        "Starting rally simulator"
    );

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for match_id in 1..=args.matches {
        let match_start = Instant::now();
        let seed = base_seed.wrapping_add(u64::from(match_id - 1));

        match Simulator::new(seed, config).and_then(Simulator::simulate_match) {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(
                    match_id,
                    seed,
                    &config,
                    args.matches,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_id, e);
                }
                if args.verbose {
                    info!(
                        match_id,
                        winner = ?result.winner,
                        games_a = result.games_a,
                        games_b = result.games_b,
                        "Match completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_id, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.matches);
    }

    Ok(())
}

fn print_summary(results: &[MatchResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );

    let n = results.len() as f64;
    let wins_a = results
        .iter()
        .filter(|r| r.winner == Competitor::A)
        .count();
    let three_games = results.iter().filter(|r| r.games.len() == 3).count();
    let total_games: usize = results.iter().map(|r| r.games.len()).sum();
    let total_rallies: u64 = results.iter().map(|r| u64::from(r.total_rallies)).sum();
    let longest = results
        .iter()
        .flat_map(|r| r.games.iter())
        .map(|g| g.rallies)
        .max()
        .unwrap_or(0);

    println!("\n=== Results ===");
    println!(
        "Competitor A: wins={} ({:.1}%)",
        wins_a,
        wins_a as f64 / n * 100.0
    );
    println!(
        "Competitor B: wins={} ({:.1}%)",
        results.len() - wins_a,
        (results.len() - wins_a) as f64 / n * 100.0
    );
    println!(
        "Three-game matches: {} ({:.1}%)",
        three_games,
        three_games as f64 / n * 100.0
    );
    println!(
        "Average rallies per game: {:.1}",
        total_rallies as f64 / total_games as f64
    );
    println!("Longest game: {} rallies", longest);
}
