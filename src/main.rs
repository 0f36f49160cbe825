use anyhow::Result;
use clap::{Parser, Subcommand};
use scout_engine::EngineConfig;
use tracing_subscriber::EnvFilter;

// Module declarations
mod commands;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Command-line front end for the scout chess engine
#[derive(Parser, Debug)]
#[command(name = "scoutbot", author, version, about, long_about = None)]
struct Args {
    /// log2 of the transposition table slot count
    #[arg(long, global = true, default_value_t = scout_engine::constants::DEFAULT_TT_SLOTS_LOG2)]
    tt_log2: u32,

    /// Deepest iteration the engine may start
    #[arg(long, global = true, default_value_t = scout_engine::constants::MAX_DEPTH)]
    max_depth: i32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a move for a position under a time budget
    Think {
        /// Position to search
        #[arg(long, default_value = START_FEN)]
        fen: String,

        /// Time left on the side to move's clock
        #[arg(long)]
        remaining_ms: u64,

        /// Time the side to move started the game with (defaults to remaining)
        #[arg(long)]
        initial_ms: Option<u64>,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search a position to a fixed depth without a time limit
    Bench {
        #[arg(long, default_value = START_FEN)]
        fen: String,

        #[arg(long, default_value_t = 6)]
        depth: i32,
    },

    /// Let the engine play against itself
    Selfplay {
        #[arg(long, default_value = START_FEN)]
        fen: String,

        /// Number of plies to play
        #[arg(long, default_value_t = 40)]
        plies: usize,

        /// Starting clock for each side
        #[arg(long, default_value_t = 60_000)]
        ms_per_side: u64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig {
        tt_slots_log2: args.tt_log2,
        max_depth: args.max_depth,
        ..EngineConfig::default()
    };

    match args.command {
        Command::Think {
            fen,
            remaining_ms,
            initial_ms,
            json,
        } => commands::think(config, &fen, remaining_ms, initial_ms, json),
        Command::Bench { fen, depth } => commands::bench(config, &fen, depth),
        Command::Selfplay {
            fen,
            plies,
            ms_per_side,
        } => commands::selfplay(config, &fen, plies, ms_per_side),
    }
}
