//! Integration tests for the search engine
//!
//! Drives `Engine` end to end over real chess positions: agreement with plain
//! negamax, time management under a deterministic clock, and the tactical
//! behaviour a host relies on.

mod common;

use common::*;
use scout_engine::constants::MATE;
use scout_engine::{
    is_mate_score, mate_in, ChessPosition, EngineConfig, EngineError, Evaluator, GameClock,
    Position,
};
use std::time::Duration;

#[test]
fn test_exhaustive_search_matches_negamax() {
    //! With every selective feature off, alpha-beta with transposition cutoffs
    //! and move ordering must return exactly the full-width negamax value.

    let evaluator = Evaluator::new();
    for fen in FIXTURES {
        for depth in 1..=3 {
            let mut pos = position(fen);
            let expected = negamax(&mut pos, &evaluator, 0, depth);

            let mut engine = engine(EngineConfig::exhaustive());
            let report = engine.search_depth(&mut pos, depth).unwrap();
            assert_eq!(report.score, expected, "{fen} at depth {depth}");
        }
    }
}

#[test]
fn test_exhaustive_best_move_achieves_score() {
    let evaluator = Evaluator::new();
    for fen in [ITALIAN, ROOK_ENDGAME, TACTICAL] {
        let mut pos = position(fen);
        let mut engine = engine(EngineConfig::exhaustive());
        let report = engine.search_depth(&mut pos, 3).unwrap();

        pos.make_move(report.best_move);
        let reply = negamax(&mut pos, &evaluator, 1, 2);
        pos.undo_move();
        assert_eq!(-reply, report.score, "{fen}");
    }
}

#[test]
fn test_depth_is_monotone_in_budget() {
    //! The step clock makes the search deterministic, so a larger budget
    //! repeats the smaller run and then keeps going.

    let mut last = 0;
    for limit in [20, 200, 2_000] {
        let clock = StepClock::new(u64::MAX / 4, limit * 14, 1);
        let mut engine = engine(EngineConfig {
            max_depth: 8,
            ..EngineConfig::default()
        });
        let mut pos = position(ITALIAN);
        let report = engine.think(&mut pos, &clock).unwrap();
        assert_eq!(report.time_limit_ms, Some(limit));
        assert!(
            report.depth >= last,
            "limit {limit}: depth {} fell below {last}",
            report.depth
        );
        last = report.depth;
    }
    assert!(last >= 3, "largest budget should get past the first iterations");
}

#[test]
fn test_minuscule_budget_returns_legal_move() {
    let clock = GameClock::new(Duration::from_secs(60), Duration::ZERO);
    let mut engine = engine(EngineConfig::default());
    for fen in FIXTURES {
        let mut pos = position(fen);
        let report = engine.think(&mut pos, &clock).unwrap();
        assert!(
            pos.legal_moves().contains(&report.best_move),
            "{fen}: {:?} is not legal",
            report.best_move
        );
        assert_eq!(report.time_limit_ms, Some(0));
    }
}

#[test]
fn test_single_legal_move_is_played() {
    // Kxb2 is the only move.
    let mut pos = position("k7/8/8/8/8/8/1r6/K7 w - - 0 1");
    assert_eq!(pos.legal_moves().len(), 1);

    for remaining in [0, 60_000] {
        let clock = StepClock::new(60_000, remaining, 1);
        let mut engine = engine(EngineConfig::default());
        let report = engine.think(&mut pos, &clock).unwrap();
        assert_eq!(ChessPosition::move_to_uci(report.best_move), "a1b2");
    }
}

#[test]
fn test_no_legal_moves_is_an_error() {
    let clock = StepClock::new(60_000, 60_000, 1);
    let mut engine = engine(EngineConfig::default());

    // Stalemate.
    let mut stalemate = position("7k/8/8/8/8/8/5q2/7K w - - 0 1");
    assert_eq!(
        engine.think(&mut stalemate, &clock).unwrap_err(),
        EngineError::NoLegalMoves
    );

    // Fool's mate.
    let mut mated = position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(
        engine.search_depth(&mut mated, 2).unwrap_err(),
        EngineError::NoLegalMoves
    );
}

#[test]
fn test_finds_back_rank_mate() {
    let clock = StepClock::new(u64::MAX / 4, 14 * 5_000, 1);
    let mut engine = engine(EngineConfig {
        max_depth: 6,
        ..EngineConfig::default()
    });
    let mut pos = position("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let report = engine.think(&mut pos, &clock).unwrap();

    assert_eq!(ChessPosition::move_to_uci(report.best_move), "a1a8");
    assert_eq!(report.score, MATE - 1);
    assert_eq!(mate_in(report.score), Some(1));
}

#[test]
fn test_finds_mate_in_two() {
    //! Qd8+ Bxd8 Re8#. Whatever the engine plays, the defender must then be
    //! getting mated.

    let clock = StepClock::new(u64::MAX / 4, 14 * 20_000, 1);
    let mut engine = engine(EngineConfig {
        max_depth: 6,
        ..EngineConfig::default()
    });
    let mut pos = position("r1b2k1r/ppp1bppp/8/1B1Q4/5q2/2P5/PPP2PPP/R3R1K1 w - - 1 1");
    let report = engine.think(&mut pos, &clock).unwrap();
    assert!(is_mate_score(report.score), "score {}", report.score);
    assert!(report.score > 0);
    assert!(mate_in(report.score).is_some_and(|moves| moves <= 2));

    pos.make_move(report.best_move);
    let mut defender = common::engine(EngineConfig::default());
    let reply = defender.search_depth(&mut pos, 4).unwrap();
    assert!(
        reply.score <= -(MATE - 4),
        "defender should see the mate, got {}",
        reply.score
    );
}

#[test]
fn test_opening_move_does_not_hang_material() {
    let clock = StepClock::new(u64::MAX / 4, 14 * 3_000, 1);
    let mut engine = engine(EngineConfig {
        max_depth: 8,
        ..EngineConfig::default()
    });
    let mut pos = position(START);
    let report = engine.think(&mut pos, &clock).unwrap();

    pos.make_move(report.best_move);
    let mut opponent = common::engine(EngineConfig::default());
    let reply = opponent.search_depth(&mut pos, 1).unwrap();
    assert!(
        reply.score < 100,
        "{:?} lets the opponent gain {}",
        report.best_move,
        reply.score
    );
}

#[test]
fn test_think_restores_position() {
    let clock = StepClock::new(u64::MAX / 4, 14 * 1_000, 1);
    let mut engine = engine(EngineConfig::default());
    for fen in FIXTURES {
        let mut pos = position(fen);
        let hash = pos.hash();
        engine.think(&mut pos, &clock).unwrap();
        assert_eq!(pos.fen(), position(fen).fen());
        assert_eq!(pos.hash(), hash);
        assert_eq!(pos.ply_count(), 0);
    }
}

#[test]
fn test_new_game_forgets_learned_state() {
    //! After `new_game` an engine behaves exactly like a fresh one.

    let mut pos = position(KIWIPETE);

    let mut fresh = engine(EngineConfig::default());
    let baseline = fresh.search_depth(&mut pos, 4).unwrap();

    let mut reused = engine(EngineConfig::default());
    reused.search_depth(&mut position(TACTICAL), 4).unwrap();
    reused.new_game();
    let after_reset = reused.search_depth(&mut pos, 4).unwrap();

    assert_eq!(after_reset.nodes, baseline.nodes);
    assert_eq!(after_reset.score, baseline.score);
    assert_eq!(after_reset.best_move, baseline.best_move);
}

#[test]
fn test_transposition_table_fills_during_search() {
    let mut engine = engine(EngineConfig::default());
    let report = engine.search_depth(&mut position(KIWIPETE), 4).unwrap();
    assert!(report.hashfull > 0);
    assert!(report.nodes > 0);
    assert_eq!(engine.nodes(), report.nodes);
}

#[test]
fn test_self_play_keeps_moves_legal() {
    let mut white = engine(EngineConfig::default());
    let mut black = engine(EngineConfig::default());
    let mut pos = position(ITALIAN);

    for ply in 0..8 {
        if pos.is_game_over() {
            break;
        }
        let clock = StepClock::new(u64::MAX / 4, 14 * 300, 1);
        let side = if ply % 2 == 0 { &mut white } else { &mut black };
        let report = side.think(&mut pos, &clock).unwrap();
        assert!(pos.legal_moves().contains(&report.best_move));
        pos.make_move(report.best_move);
    }
    assert_eq!(pos.ply_count(), 8);
}
