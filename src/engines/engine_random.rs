//! Random-move engine.
//!
//! Selects uniformly from the legal moves and is primarily used for
//! diagnostics, integration testing, and low-strength gameplay.

use rand::RngExt;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_all_moves;

#[derive(Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        _params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let moves = generate_all_moves(game_state);
        if moves.is_empty() {
            return Err(ChessError::NoMovesAvailable(game_state.turn));
        }

        let mut rng = rand::rng();
        let best_move = moves[rng.random_range(0..moves.len())];

        Ok(EngineOutput {
            best_move,
            info_lines: vec![format!("info string random legal_moves {}", moves.len())],
        })
    }
}
