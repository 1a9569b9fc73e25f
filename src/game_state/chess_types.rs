//! Core board representation types.
//!
//! A square holds a single packed `PieceCode`: a piece-kind field, a color
//! field, and a transient display-mark bit, combined by bitwise OR. Masking a
//! field back out always recovers exactly what was packed in.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_errors::ChessResult;
use crate::utils::algebraic::algebraic_to_square;

/// Board square index (`0..=63`), row-major from a1.
pub type Square = u8;

/// Packed per-square encoding: kind, color, and mark fields.
pub type PieceCode = u8;

/// The empty square: all fields zero.
pub const NO_PIECE: PieceCode = 0;

pub const KIND_MASK: PieceCode = 0b0000_0111;
pub const COLOR_MASK: PieceCode = 0b0001_1000;
pub const MARK_MASK: PieceCode = 0b0010_0000;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn code(self) -> PieceCode {
        match self {
            Color::Light => 0b1_0000,
            Color::Dark => 0b0_1000,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color lives in a separate field of the packed code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> PieceCode {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

#[inline]
pub const fn encode_piece(color: Color, kind: PieceKind) -> PieceCode {
    color.code() | kind.code()
}

#[inline]
pub const fn piece_kind_from_code(code: PieceCode) -> Option<PieceKind> {
    match code & KIND_MASK {
        1 => Some(PieceKind::Pawn),
        2 => Some(PieceKind::Knight),
        3 => Some(PieceKind::Bishop),
        4 => Some(PieceKind::Rook),
        5 => Some(PieceKind::Queen),
        6 => Some(PieceKind::King),
        _ => None,
    }
}

#[inline]
pub const fn piece_color_from_code(code: PieceCode) -> Option<Color> {
    match code & COLOR_MASK {
        0b1_0000 => Some(Color::Light),
        0b0_1000 => Some(Color::Dark),
        _ => None,
    }
}

/// Set the transient display-mark bit. Marks are presentation state only and
/// never appear on a `GameState` board.
#[inline]
pub const fn mark_code(code: PieceCode) -> PieceCode {
    code | MARK_MASK
}

#[inline]
pub const fn strip_mark(code: PieceCode) -> PieceCode {
    code & !MARK_MASK
}

#[inline]
pub const fn is_marked(code: PieceCode) -> bool {
    code & MARK_MASK != 0
}

/// An ordered (from, to) square pair. A move is only meaningful against the
/// `GameState` it was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Build a move from two algebraic square names (for example "e2", "e4").
    pub fn from_algebraic(from: &str, to: &str) -> ChessResult<Self> {
        Ok(Move {
            from: algebraic_to_square(from)?,
            to: algebraic_to_square(to)?,
        })
    }
}
