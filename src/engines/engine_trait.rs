//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be selected at runtime behind a single trait interface.

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Per-search depth override; engines fall back to their configured
    /// default when absent.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub best_move: Move,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// Choose a move for the side to move.
    ///
    /// The engine may speculate on `game_state` through apply/undo, but must
    /// return it bit-identical to how it was received. Zero legal moves is
    /// surfaced as `ChessError::NoMovesAvailable`, never a default move.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
