//! Errors used throughout the chess engine.
//!
//! One canonical error type is returned by game logic, move generation,
//! coordinate parsing, and the engines, so callers can propagate with `?`
//! and match a single enum. Variants carry enough context to produce a
//! precise diagnostic.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A move was attempted from a square not holding a piece of the side to
    /// move (including an empty square). This aborts the move attempt.
    IllegalTurn { square: Square, turn: Color },

    /// The requested destination is not among the origin piece's legal
    /// destinations. The state is left unchanged.
    IllegalDestination { from: Square, to: Square },

    /// The side to move has zero legal moves anywhere on the board, so an
    /// engine has nothing to choose from.
    NoMovesAvailable(Color),

    /// A saved board sequence did not contain exactly 64 squares.
    MalformedBoard { length: usize },

    /// A string could not be interpreted as an algebraic square name.
    InvalidAlgebraic(String),

    /// A square index outside `0..=63`.
    InvalidSquare(Square),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalTurn { square, turn } => {
                write!(f, "square {square} does not hold a {turn:?} piece to move")
            }
            ChessError::IllegalDestination { from, to } => {
                write!(f, "square {to} is not a legal destination from square {from}")
            }
            ChessError::NoMovesAvailable(color) => {
                write!(f, "{color:?} has no legal moves available")
            }
            ChessError::MalformedBoard { length } => {
                write!(f, "board must contain exactly 64 squares, got {length}")
            }
            ChessError::InvalidAlgebraic(input) => {
                write!(f, "invalid algebraic square: {input}")
            }
            ChessError::InvalidSquare(square) => {
                write!(f, "square index out of bounds: {square}")
            }
        }
    }
}

impl Error for ChessError {}
