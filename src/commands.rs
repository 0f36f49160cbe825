//! Subcommand implementations

use anyhow::{Context, Result};
use scout_engine::{mate_in, ChessPosition, Engine, EngineConfig, GameClock, Position, SearchReport};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Search report in the form printed by `think --json`
#[derive(Debug, Serialize)]
struct ThinkOutput {
    fen: String,
    best_move: String,
    score: i32,
    mate_in: Option<i32>,
    depth: i32,
    nodes: u64,
    elapsed_ms: u64,
    time_limit_ms: Option<u64>,
    hashfull: usize,
}

impl ThinkOutput {
    fn new<M>(fen: String, report: &SearchReport<M>, best_move: String) -> Self {
        Self {
            fen,
            best_move,
            score: report.score,
            mate_in: mate_in(report.score),
            depth: report.depth,
            nodes: report.nodes,
            elapsed_ms: report.elapsed_ms,
            time_limit_ms: report.time_limit_ms,
            hashfull: report.hashfull,
        }
    }
}

fn describe_score(score: i32) -> String {
    match mate_in(score) {
        Some(moves) => format!("mate {moves}"),
        None => format!("cp {score}"),
    }
}

pub fn think(
    config: EngineConfig,
    fen: &str,
    remaining_ms: u64,
    initial_ms: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut pos = ChessPosition::from_fen(fen).context("reading --fen")?;
    let mut engine = Engine::new(config).context("creating engine")?;
    let clock = GameClock::new(
        Duration::from_millis(initial_ms.unwrap_or(remaining_ms)),
        Duration::from_millis(remaining_ms),
    );

    let report = engine.think(&mut pos, &clock).context("searching position")?;
    let best_move = ChessPosition::move_to_uci(report.best_move);
    let output = ThinkOutput::new(pos.fen(), &report, best_move);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "bestmove {} ({}, depth {}, {} nodes, {} ms)",
            output.best_move,
            describe_score(output.score),
            output.depth,
            output.nodes,
            output.elapsed_ms
        );
    }
    Ok(())
}

pub fn bench(config: EngineConfig, fen: &str, depth: i32) -> Result<()> {
    let mut pos = ChessPosition::from_fen(fen).context("reading --fen")?;
    let mut engine = Engine::new(config).context("creating engine")?;

    let report = engine
        .search_depth(&mut pos, depth)
        .context("searching position")?;
    let nps = report.nodes * 1_000 / (report.elapsed_ms + 1);
    println!(
        "depth {} {} bestmove {} nodes {} time {} ms nps {}",
        report.depth,
        describe_score(report.score),
        ChessPosition::move_to_uci(report.best_move),
        report.nodes,
        report.elapsed_ms,
        nps
    );
    Ok(())
}

pub fn selfplay(config: EngineConfig, fen: &str, plies: usize, ms_per_side: u64) -> Result<()> {
    let mut pos = ChessPosition::from_fen(fen).context("reading --fen")?;
    // One engine per side so each keeps its own tables for the whole game.
    let mut engines = [
        Engine::new(config.clone()).context("creating engine")?,
        Engine::new(config).context("creating engine")?,
    ];
    let initial = Duration::from_millis(ms_per_side);
    let mut remaining = [initial, initial];

    for ply in 0..plies {
        if pos.is_game_over() {
            info!(ply, "game over");
            break;
        }
        if ply > 0 && pos.is_repetition() {
            info!(ply, "draw by repetition");
            break;
        }

        let side = pos.side_to_move().index();
        let clock = GameClock::new(initial, remaining[side]);
        let report = engines[side]
            .think(&mut pos, &clock)
            .with_context(|| format!("searching ply {ply}"))?;
        remaining[side] = clock.remaining_after_move();

        let uci = ChessPosition::move_to_uci(report.best_move);
        println!(
            "{:>3}. {:<6} {:>10} depth {:>2} {:>5} ms left",
            ply + 1,
            uci,
            describe_score(report.score),
            report.depth,
            remaining[side].as_millis()
        );
        pos.make_move(report.best_move);

        if remaining[side].is_zero() {
            info!(ply, "flag fell");
            break;
        }
    }

    println!("{}", pos.fen());
    Ok(())
}
