//! Canonical chess-rule constants.
//!
//! This module stores the standard starting position used to initialize a
//! fresh game: light pieces on ranks 1-2, dark pieces on ranks 7-8.

use crate::game_state::chess_types::{encode_piece, Color, PieceCode, PieceKind, NO_PIECE};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard starting board, a1 first.
pub const STARTING_BOARD: [PieceCode; 64] = generate_starting_board();

const fn generate_starting_board() -> [PieceCode; 64] {
    let mut board = [NO_PIECE; 64];
    let mut file = 0usize;

    while file < 8 {
        board[file] = encode_piece(Color::Light, BACK_RANK[file]);
        board[8 + file] = encode_piece(Color::Light, PieceKind::Pawn);
        board[48 + file] = encode_piece(Color::Dark, PieceKind::Pawn);
        board[56 + file] = encode_piece(Color::Dark, BACK_RANK[file]);
        file += 1;
    }

    board
}
