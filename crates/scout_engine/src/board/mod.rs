//! Chess position provider backed by `shakmaty`
//!
//! [`ChessPosition`] wraps a [`shakmaty::Chess`] value and implements the
//! engine's [`Position`](crate::position::Position) trait on top of it. Every
//! position reached during the game and the current search line is kept on an
//! undo stack together with its Zobrist key, which also serves repetition
//! detection.

use crate::error::{EngineError, EngineResult};
use crate::position::Position;
use crate::types::{MoveTraits, PieceKind, Side};
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::Zobrist64;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, FromSetup, Move, Piece, Position as _, Role};

/// A chess game in progress: current position plus everything needed to take
/// moves back.
#[derive(Debug, Clone)]
pub struct ChessPosition {
    chess: Chess,
    hash: u64,
    /// Earlier positions with their keys, oldest first.
    history: Vec<(Chess, u64)>,
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::from_chess(Chess::default())
    }
}

impl ChessPosition {
    /// Wraps a shakmaty position with an empty history.
    pub fn from_chess(chess: Chess) -> Self {
        let hash = zobrist(&chess);
        Self {
            chess,
            hash,
            history: Vec::new(),
        }
    }

    /// Parses a FEN string.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidFen`] if the text is not FEN,
    /// [`EngineError::IllegalPosition`] if it describes an impossible position.
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let parsed = fen.trim().parse::<Fen>().map_err(|e| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;
        let chess: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| EngineError::IllegalPosition {
                reason: e.to_string(),
            })?;
        Ok(Self::from_chess(chess))
    }

    /// FEN of the current position.
    pub fn fen(&self) -> String {
        Fen::from_position(&self.chess, EnPassantMode::Legal).to_string()
    }

    /// Number of plies that can be taken back.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Parses a UCI move, checks it against the current position and plays it.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidMove`] for malformed notation,
    /// [`EngineError::IllegalMove`] if the move is not legal here.
    pub fn play_uci(&mut self, uci: &str) -> EngineResult<Move> {
        let parsed: UciMove = uci.trim().parse().map_err(|_| EngineError::InvalidMove {
            uci: uci.to_string(),
        })?;
        let mv = parsed
            .to_move(&self.chess)
            .map_err(|_| EngineError::IllegalMove {
                uci: uci.to_string(),
            })?;
        self.make_move(mv);
        Ok(mv)
    }

    /// UCI notation of a move.
    pub fn move_to_uci(mv: Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    /// Legal moves of the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.chess.legal_moves().into_iter().collect()
    }

    /// Whether the side to move is mated or stalemated.
    pub fn is_game_over(&self) -> bool {
        self.chess.is_game_over()
    }

    /// The same position with the board flipped, colours swapped and the
    /// other side to move. History is not carried over.
    ///
    /// # Errors
    ///
    /// [`EngineError::IllegalPosition`] if the mirrored setup is rejected.
    pub fn mirrored(&self) -> EngineResult<Self> {
        let setup = self.chess.to_setup(EnPassantMode::Legal).into_mirrored();
        let chess = Chess::from_setup(setup, CastlingMode::Standard).map_err(|e| {
            EngineError::IllegalPosition {
                reason: e.to_string(),
            }
        })?;
        Ok(Self::from_chess(chess))
    }

    fn push(&mut self, next: Chess) {
        let previous = std::mem::replace(&mut self.chess, next);
        self.history.push((previous, self.hash));
        self.hash = zobrist(&self.chess);
    }

    fn pop(&mut self) {
        if let Some((chess, hash)) = self.history.pop() {
            self.chess = chess;
            self.hash = hash;
        }
    }
}

fn zobrist(chess: &Chess) -> u64 {
    chess.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
}

fn color_of(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

fn role_of(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

impl Position for ChessPosition {
    type Move = Move;

    #[inline]
    fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn side_to_move(&self) -> Side {
        match self.chess.turn() {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }

    fn generate_moves(&self, noisy_only: bool, out: &mut Vec<Move>) {
        let moves = if noisy_only {
            self.chess.capture_moves()
        } else {
            self.chess.legal_moves()
        };
        out.extend(moves);
    }

    fn make_move(&mut self, mv: Move) {
        let mut next = self.chess.clone();
        next.play_unchecked(mv);
        self.push(next);
    }

    fn undo_move(&mut self) {
        self.pop();
    }

    fn make_null_move(&mut self) -> bool {
        if self.is_in_check() {
            return false;
        }
        match self.chess.clone().swap_turn() {
            Ok(next) => {
                self.push(next);
                true
            }
            Err(_) => false,
        }
    }

    fn undo_null_move(&mut self) {
        self.pop();
    }

    #[inline]
    fn is_in_check(&self) -> bool {
        self.chess.is_check()
    }

    fn is_repetition(&self) -> bool {
        // Only positions since the last capture or pawn move can recur, and
        // only every second ply has the same side to move.
        let reversible = self.chess.halfmoves() as usize;
        self.history
            .iter()
            .rev()
            .take(reversible)
            .skip(1)
            .step_by(2)
            .any(|&(_, hash)| hash == self.hash)
    }

    #[inline]
    fn pieces(&self, side: Side, kind: PieceKind) -> u64 {
        let piece = Piece {
            color: color_of(side),
            role: role_of(kind),
        };
        self.chess.board().by_piece(piece).0
    }

    fn move_traits(&self, mv: Move) -> MoveTraits {
        MoveTraits {
            piece: kind_of(mv.role()),
            target: mv.to().to_u32() as u8,
            captured: mv.capture().map(kind_of),
            promotion: mv.promotion().map(kind_of),
        }
    }

    #[inline]
    fn move_key(mv: Move) -> u16 {
        let from = mv.from().map_or(0, |sq| sq.to_u32() as u16);
        let to = mv.to().to_u32() as u16;
        let promotion = mv.promotion().map_or(0, |role| role as u16);
        from | to << 6 | promotion << 12
    }
}
