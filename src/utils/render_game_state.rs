//! Presentation-only board views.
//!
//! Builds display-friendly grids from a board and a set of highlighted
//! squares, for the UI layers that sit outside this crate, plus a Unicode
//! renderer for tests and terminal diagnostics. Nothing here carries rules
//! logic, and the input board is never mutated; marks are applied to a
//! local copy only.

use crate::game_state::chess_types::{
    is_marked, mark_code, piece_color_from_code, piece_kind_from_code, Color, PieceCode,
    PieceKind, Square,
};

/// Short display notation for one packed piece code: color letter, piece
/// letter, and a trailing `X` when the square is highlighted. The empty
/// square renders as an empty string.
pub fn piece_notation(code: PieceCode) -> String {
    let mut out = String::new();

    if let Some(color) = piece_color_from_code(code) {
        out.push(match color {
            Color::Light => 'w',
            Color::Dark => 'b',
        });
    }
    if let Some(kind) = piece_kind_from_code(code) {
        out.push(match kind {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        });
    }
    if is_marked(code) {
        out.push('X');
    }

    out
}

/// Display grid of notation cells, rank 8 first (the order a board is drawn
/// top to bottom), with `marks` squares highlighted.
pub fn notation_grid(board: &[PieceCode; 64], marks: &[Square]) -> Vec<Vec<String>> {
    let mut marked = *board;
    for &sq in marks {
        marked[sq as usize] = mark_code(marked[sq as usize]);
    }

    let mut rows = Vec::with_capacity(8);
    for rank in (0..8).rev() {
        let mut row = Vec::with_capacity(8);
        for file in 0..8 {
            row.push(piece_notation(marked[rank * 8 + file]));
        }
        rows.push(row);
    }

    rows
}

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &[PieceCode; 64]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            match piece_to_unicode(board[rank * 8 + file]) {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(code: PieceCode) -> Option<char> {
    let color = piece_color_from_code(code)?;
    let kind = piece_kind_from_code(code)?;

    Some(match (color, kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    })
}

#[cfg(test)]
mod tests {
    use super::{notation_grid, piece_notation, render_board};
    use crate::game_state::chess_types::{encode_piece, mark_code, Color, PieceKind};
    use crate::game_state::game_state::GameState;

    #[test]
    fn notation_covers_color_kind_and_mark() {
        let code = encode_piece(Color::Light, PieceKind::Knight);
        assert_eq!(piece_notation(code), "wN");
        assert_eq!(piece_notation(mark_code(code)), "wNX");
        assert_eq!(piece_notation(0), "");
    }

    #[test]
    fn grid_rows_start_from_rank_eight() {
        let game = GameState::new_game();
        let grid = notation_grid(&game.board, &[]);

        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0][4], "bK", "rank 8 comes first");
        assert_eq!(grid[7][4], "wK", "rank 1 comes last");
        assert_eq!(grid[3][0], "", "middle ranks are empty");
    }

    #[test]
    fn grid_marks_do_not_touch_the_input_board() {
        let game = GameState::new_game();
        let board_before = game.board;

        let grid = notation_grid(&game.board, &[16, 18]);

        assert_eq!(grid[5][0], "X", "an empty marked square shows the mark");
        assert_eq!(grid[5][2], "X");
        assert_eq!(game.board, board_before);
    }

    #[test]
    fn unicode_render_has_ten_lines() {
        let game = GameState::new_game();
        let rendered = render_board(&game.board);

        assert_eq!(rendered.lines().count(), 10);
        assert!(rendered.contains('♔'));
        assert!(rendered.contains('♟'));
    }
}
