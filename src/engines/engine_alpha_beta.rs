//! Fixed-depth minimax engine with alpha-beta pruning.
//!
//! Scores every root move by speculatively applying it and exploring replies
//! depth-first, evaluating leaves as the material differential from the
//! bot's own color. Nodes where the bot is to move maximize, opponent nodes
//! minimize, and a branch is abandoned as soon as the maximizer's assured
//! score meets the minimizer's. Every speculative application is undone on
//! every exit path, so the caller's state is bit-identical after a search.
//!
//! Among root moves sharing the best score the engine picks uniformly at
//! random, so repeated games do not replay the same line.

use rand::RngExt;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::search::board_scoring::{material_differential, Score, MAX_SCORE, MIN_SCORE};

pub const DEFAULT_ALPHA_BETA_DEPTH: u8 = 5;

pub struct AlphaBetaEngine {
    default_depth: u8,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u8) -> Self {
        AlphaBetaEngine {
            default_depth: default_depth.max(1),
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA_BETA_DEPTH)
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Quince AlphaBeta"
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
            scores.push(score_move(
                game_state, mv, depth, MIN_SCORE, MAX_SCORE, bot_color,
            )?);
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
                format!("info string alpha_beta legal_moves {}", moves.len()),
                format!("info string alpha_beta depth {depth}"),
                format!("info string alpha_beta best_score {best_score}"),
                format!("info string alpha_beta candidates {}", best_moves.len()),
            ],
        })
    }
}

/// Apply `mv`, score the resulting subtree, and undo before returning. The
/// undo runs even when the subtree exploration fails.
fn score_move(
    game_state: &mut GameState,
    mv: Move,
    depth: u8,
    alpha: Score,
    beta: Score,
    bot_color: Color,
) -> ChessResult<Score> {
    game_state.apply_move(mv)?;
    let outcome = explore_replies(game_state, depth - 1, alpha, beta, bot_color);
    game_state.undo_last_move();
    outcome
}

/// Score the position just produced by an applied move. Depth exhaustion and
/// a silent side (no replies) both evaluate in place; otherwise recurse over
/// the replies, maximizing when the bot is to move and minimizing when the
/// opponent is.
fn explore_replies(
    game_state: &mut GameState,
    remaining: u8,
    mut alpha: Score,
    mut beta: Score,
    bot_color: Color,
) -> ChessResult<Score> {
    let score = material_differential(&game_state.board, bot_color);
    if remaining == 0 {
        return Ok(score);
    }

    let replies = generate_all_moves(game_state);
    if replies.is_empty() {
        return Ok(score);
    }

    if game_state.turn == bot_color {
        let mut value = MIN_SCORE;
        for mv in replies {
            let child = score_move(game_state, mv, remaining, alpha, beta, bot_color)?;
            if child > value {
                value = child;
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(value)
    } else {
        let mut value = MAX_SCORE;
        for mv in replies {
            let child = score_move(game_state, mv, remaining, alpha, beta, bot_color)?;
            if child < value {
                value = child;
            }
            if value < beta {
                beta = value;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(value)
    }
}

/// Root score of `mv` with a fresh full window, exposed for comparing the
/// pruned and unpruned searches.
pub fn alpha_beta_root_score(
    game_state: &mut GameState,
    mv: Move,
    depth: u8,
    bot_color: Color,
) -> ChessResult<Score> {
    score_move(game_state, mv, depth.max(1), MIN_SCORE, MAX_SCORE, bot_color)
}
