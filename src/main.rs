//! rps-arena terminal host
//!
//! Runs a match on a fixed cadence and prints each round as a text frame,
//! or as one JSON report per line with `--json`.

use std::ops::ControlFlow;

use clap::Parser;
use rps_arena::display::render_round;
use rps_arena::{Cadence, Choice, Match, MatchConfig, Side};
use tracing::{error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Rock-paper-scissors, AI vs AI
#[derive(Parser, Debug)]
#[command(name = "rps-arena")]
#[command(about = "Watch two random agents play rock-paper-scissors", long_about = None)]
struct Args {
    /// RNG seed (0 = random from time)
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Rounds to play (0 = until interrupted)
    #[arg(short, long, default_value = "0")]
    rounds: u64,

    /// Delay between rounds in milliseconds
    #[arg(short, long, default_value = "1000")]
    delay_ms: u64,

    /// Name of the first agent
    #[arg(long, default_value = "AI 1")]
    name_a: String,

    /// Name of the second agent
    #[arg(long, default_value = "AI 2")]
    name_b: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// One JSON report per round instead of text frames
    #[arg(long)]
    json: bool,
}

/// `RUST_LOG` when set and valid, else `info` (or `debug` with `--verbose`).
fn log_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

fn main() {
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides --verbose
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(args.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    } else {
        args.seed
    };

    let config = MatchConfig::new()
        .with_names(args.name_a, args.name_b)
        .with_seed(seed)
        .with_delay_ms(args.delay_ms);

    let mut game = match Match::new(config) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if !args.json {
        info!("Welcome to RPS AI vs AI! (seed={})", seed);
    }

    let names = game.config().names.clone();
    let limit = (args.rounds > 0).then_some(args.rounds);
    let mut cadence = Cadence::from_config(game.config());

    let played = cadence.run(&mut game, limit, |report| {
        if args.json {
            match serde_json::to_string(report) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    error!("Failed to encode round {}: {}", report.round, e);
                    return ControlFlow::Break(());
                }
            }
        } else {
            println!("{}\n", render_round(&names, report));
        }
        ControlFlow::Continue(())
    });

    let stats = game.stats();
    info!(
        "{} rounds: {} {} wins, {} {} wins, {} ties",
        played,
        names[Side::A],
        stats.wins[Side::A],
        names[Side::B],
        stats.wins[Side::B],
        stats.ties
    );
    for side in Side::BOTH {
        let freqs: Vec<String> = Choice::ALL
            .iter()
            .map(|&choice| format!("{} {:.1}%", choice, stats.frequency(side, choice) * 100.0))
            .collect();
        info!("{} drew: {}", names[side], freqs.join(", "));
    }
}
