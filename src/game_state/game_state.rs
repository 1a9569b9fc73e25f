//! Core mutable board state.
//!
//! `GameState` is the central model for the engine: the 64-square board, the
//! side to move, and the undo stack used by make/unmake style workflows. It
//! is the single point of mutation: engines never touch the board directly,
//! they speculate through `apply_move` / `undo_last_move`.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_BOARD;
use crate::game_state::chess_types::{
    piece_color_from_code, strip_mark, Color, Move, PieceCode, NO_PIECE,
};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_generator::legal_destinations;

/// Board, side to move, and undo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: [PieceCode; 64],
    pub turn: Color,
    pub undo_stack: Vec<UndoState>,
}

/// Plain structured form of a game, suitable for storage and reload by an
/// external persistence collaborator. The core does not care what medium or
/// format the collaborator uses, only that these field shapes survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Vec<PieceCode>,
    pub turn: Color,
    pub moves: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Fresh game: standard starting position, light to move, empty history.
    #[inline]
    pub fn new_game() -> Self {
        GameState {
            board: STARTING_BOARD,
            turn: Color::Light,
            undo_stack: Vec::new(),
        }
    }

    /// Empty board with light to move. Used to build test positions.
    #[inline]
    pub fn new_empty() -> Self {
        GameState {
            board: [NO_PIECE; 64],
            turn: Color::Light,
            undo_stack: Vec::new(),
        }
    }

    /// Rebuild a game from its saved form. Rejects any board sequence that
    /// does not contain exactly 64 squares.
    pub fn from_saved(saved: SavedGame) -> ChessResult<Self> {
        let length = saved.board.len();
        let board: [PieceCode; 64] = saved
            .board
            .try_into()
            .map_err(|_| ChessError::MalformedBoard { length })?;

        Ok(GameState {
            board,
            turn: saved.turn,
            undo_stack: saved.moves,
        })
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            board: self.board.to_vec(),
            turn: self.turn,
            moves: self.undo_stack.clone(),
        }
    }

    /// Apply a move for the side to move.
    ///
    /// Fails with `IllegalTurn` when the origin square does not hold a piece
    /// of the side to move, and with `IllegalDestination` when the target is
    /// not among the origin piece's legal destinations. A rejected move
    /// leaves the state untouched. On success the undo stack records the
    /// pre-move encodings of both squares and the turn flips.
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<()> {
        let moving = self.board[mv.from as usize];
        if piece_color_from_code(moving) != Some(self.turn) {
            return Err(ChessError::IllegalTurn {
                square: mv.from,
                turn: self.turn,
            });
        }

        let destinations = legal_destinations(&self.board, mv.from);
        if !destinations.contains(&mv.to) {
            return Err(ChessError::IllegalDestination {
                from: mv.from,
                to: mv.to,
            });
        }

        self.undo_stack.push(UndoState {
            mv,
            from_was: moving,
            to_was: self.board[mv.to as usize],
        });
        // Display marks must never survive a move.
        self.board[mv.to as usize] = strip_mark(moving);
        self.board[mv.from as usize] = NO_PIECE;
        self.turn = self.turn.opposite();

        Ok(())
    }

    /// Revert the most recent move, restoring both squares to their recorded
    /// pre-move encodings (a captured piece reappears). No-op when the
    /// history is empty; otherwise returns the undone move.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let last = self.undo_stack.pop()?;

        self.board[last.mv.from as usize] = last.from_was;
        self.board[last.mv.to as usize] = last.to_was;
        self.turn = self.turn.opposite();

        Some(last.mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{encode_piece, PieceKind};

    #[test]
    fn e2_e4_is_legal_from_the_start() {
        let mut game = GameState::new_game();
        let mv = Move::from_algebraic("e2", "e4").expect("e2e4 should parse");

        game.apply_move(mv).expect("e2e4 should be legal");

        assert_eq!(game.board[12], NO_PIECE);
        assert_eq!(
            game.board[28],
            encode_piece(Color::Light, PieceKind::Pawn)
        );
        assert_eq!(game.turn, Color::Dark);
        assert_eq!(game.undo_stack.len(), 1);
    }

    #[test]
    fn moving_out_of_turn_is_rejected_and_changes_nothing() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = Move::from_algebraic("e7", "e5").expect("e7e5 should parse");

        let err = game.apply_move(mv).expect_err("dark may not move first");

        assert!(matches!(err, ChessError::IllegalTurn { square: 52, .. }));
        assert_eq!(game, before);
    }

    #[test]
    fn moving_from_an_empty_square_is_an_illegal_turn() {
        let mut game = GameState::new_game();
        let err = game
            .apply_move(Move::new(28, 36))
            .expect_err("e4 is empty at the start");

        assert!(matches!(err, ChessError::IllegalTurn { .. }));
    }

    #[test]
    fn illegal_destination_is_rejected_and_changes_nothing() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = Move::from_algebraic("e2", "e5").expect("e2e5 should parse");

        let err = game.apply_move(mv).expect_err("pawns cannot triple-step");

        assert!(matches!(err, ChessError::IllegalDestination { from: 12, to: 36 }));
        assert_eq!(game, before);
    }

    #[test]
    fn undo_reverses_a_move_exactly() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = Move::from_algebraic("b1", "c3").expect("b1c3 should parse");

        game.apply_move(mv).expect("b1c3 should be legal");
        let undone = game.undo_last_move();

        assert_eq!(undone, Some(mv));
        assert_eq!(game, before);
    }

    #[test]
    fn undo_reverses_a_capture_exactly() {
        let mut game = GameState::new_empty();
        game.board[27] = encode_piece(Color::Light, PieceKind::Rook);
        game.board[35] = encode_piece(Color::Dark, PieceKind::Queen);
        let before = game.clone();

        game.apply_move(Move::new(27, 35)).expect("rook takes queen");
        assert_eq!(
            game.board[35],
            encode_piece(Color::Light, PieceKind::Rook)
        );

        game.undo_last_move();
        assert_eq!(game, before);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut game = GameState::new_game();
        let before = game.clone();

        assert_eq!(game.undo_last_move(), None);
        assert_eq!(game, before);
    }

    #[test]
    fn saved_form_round_trips() {
        let mut game = GameState::new_game();
        game.apply_move(Move::from_algebraic("g1", "f3").expect("g1f3 should parse"))
            .expect("g1f3 should be legal");

        let reloaded = GameState::from_saved(game.to_saved()).expect("saved game should load");
        assert_eq!(reloaded, game);
    }

    #[test]
    fn saved_form_survives_json() {
        let mut game = GameState::new_empty();
        game.board[27] = encode_piece(Color::Light, PieceKind::Rook);
        game.board[35] = encode_piece(Color::Dark, PieceKind::Queen);
        game.apply_move(Move::new(27, 35)).expect("rook takes queen");

        let json = serde_json::to_string(&game.to_saved()).expect("saved game should serialize");
        let saved: SavedGame = serde_json::from_str(&json).expect("saved game should deserialize");

        let reloaded = GameState::from_saved(saved).expect("saved game should load");
        assert_eq!(reloaded, game);
        assert_eq!(reloaded.undo_stack.len(), 1);
    }

    #[test]
    fn short_board_is_rejected_as_malformed() {
        let mut saved = GameState::new_game().to_saved();
        saved.board.truncate(63);

        let err = GameState::from_saved(saved).expect_err("63 squares must be rejected");
        assert_eq!(err, ChessError::MalformedBoard { length: 63 });
    }
}
