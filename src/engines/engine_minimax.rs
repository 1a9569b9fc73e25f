//! Fixed-depth minimax engine without pruning.
//!
//! Shares the alpha-beta engine's leaf evaluation and recursion shape but
//! visits every child of every node. Kept as a weaker difficulty level and
//! as the reference the pruned search is checked against: for any position
//! and depth the two produce identical root scores, pruning only trims
//! compute.

use rand::RngExt;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::search::board_scoring::{material_differential, Score, MAX_SCORE, MIN_SCORE};

pub const DEFAULT_MINIMAX_DEPTH: u8 = 3;

pub struct MinimaxEngine {
    default_depth: u8,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        MinimaxEngine {
            default_depth: default_depth.max(1),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMAX_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Quince Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid Depth value '{value}'"))?;
            self.default_depth = parsed.max(1);
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let bot_color = game_state.turn;

        let moves = generate_all_moves(game_state);
        if moves.is_empty() {
            return Err(ChessError::NoMovesAvailable(bot_color));
        }

        let mut scores = Vec::with_capacity(moves.len());
        for &mv in &moves {
            scores.push(minimax_root_score(game_state, mv, depth, bot_color)?);
        }

        let best_score = scores.iter().copied().fold(MIN_SCORE, Score::max);
        let best_moves: Vec<Move> = moves
            .iter()
            .zip(&scores)
            .filter(|(_, &score)| score == best_score)
            .map(|(&mv, _)| mv)
            .collect();

        let mut rng = rand::rng();
        let best_move = best_moves[rng.random_range(0..best_moves.len())];

        Ok(EngineOutput {
            best_move,
            info_lines: vec![
                format!("info string minimax legal_moves {}", moves.len()),
                format!("info string minimax depth {depth}"),
                format!("info string minimax best_score {best_score}"),
            ],
        })
    }
}

/// Full-width root score of `mv`: apply, explore, and undo on every path.
pub fn minimax_root_score(
    game_state: &mut GameState,
    mv: Move,
    depth: u8,
    bot_color: Color,
) -> ChessResult<Score> {
    game_state.apply_move(mv)?;
    let outcome = explore_replies(game_state, depth.max(1) - 1, bot_color);
    game_state.undo_last_move();
    outcome
}

fn explore_replies(game_state: &mut GameState, remaining: u8, bot_color: Color) -> ChessResult<Score> {
    let score = material_differential(&game_state.board, bot_color);
    if remaining == 0 {
        return Ok(score);
    }

    let replies = generate_all_moves(game_state);
    if replies.is_empty() {
        return Ok(score);
    }

    let maximizing = game_state.turn == bot_color;
    let mut value = if maximizing { MIN_SCORE } else { MAX_SCORE };

    for mv in replies {
        game_state.apply_move(mv)?;
        let child = explore_replies(game_state, remaining - 1, bot_color);
        game_state.undo_last_move();
        let child = child?;

        if maximizing {
            if child > value {
                value = child;
            }
        } else if child < value {
            value = child;
        }
    }

    Ok(value)
}
