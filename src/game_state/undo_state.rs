use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Move, PieceCode};

/// Single undo record for `apply_move` / `undo_last_move`.
///
/// Stores the pre-move encodings of both squares; restoring them reverses the
/// move exactly, including any capture (the captured piece reappears from
/// `to_was`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoState {
    pub mv: Move,
    pub from_was: PieceCode,
    pub to_was: PieceCode,
}
