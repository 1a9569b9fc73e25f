//! Material scoring.
//!
//! Centralizes the fixed piece point values and the signed material
//! differential used as the leaf evaluation in search. The king is counted
//! as ordinary capturable material, since no check detection exists in
//! these rules, so it carries a large-but-finite value rather than a
//! sentinel.

use crate::game_state::chess_types::{
    piece_color_from_code, piece_kind_from_code, Color, PieceCode, PieceKind,
};

/// Numeric representation of an evaluation score.
pub type Score = i32;

/// Sentinel bounds for the alpha-beta window; they dominate any reachable
/// material differential.
pub const MIN_SCORE: Score = -1_000_000;
pub const MAX_SCORE: Score = 1_000_000;

/// Fixed material value for a piece kind.
#[inline]
pub const fn piece_points(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 4,
        PieceKind::Rook => 5,
        PieceKind::Queen => 6,
        PieceKind::King => 10,
    }
}

/// Total point value of `color`'s pieces on the board.
pub fn count_points(board: &[PieceCode; 64], color: Color) -> Score {
    let mut total = 0;

    for &code in board.iter() {
        if piece_color_from_code(code) != Some(color) {
            continue;
        }
        if let Some(kind) = piece_kind_from_code(code) {
            total += piece_points(kind);
        }
    }

    total
}

/// Material differential read from `perspective`'s side: that side's points
/// minus the opponent's, regardless of whose turn it is.
pub fn material_differential(board: &[PieceCode; 64], perspective: Color) -> Score {
    count_points(board, perspective) - count_points(board, perspective.opposite())
}
