//! Legal move generation.
//!
//! Resolves the piece on a square and walks its movement geometry against
//! the board: sliding rays stop at the first occupied square (appended only
//! as a capture), stepping pieces filter their candidate squares by occupant
//! color, and pawns split push (empty only) from capture (enemy only)
//! squares. Output order is deterministic for a given board.

use crate::game_state::chess_types::{
    piece_color_from_code, piece_kind_from_code, Color, Move, PieceCode, PieceKind, Square,
    NO_PIECE,
};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_rays;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::{pawn_captures, pawn_push};
use crate::moves::queen_moves::queen_rays;
use crate::moves::rook_moves::rook_rays;

/// Every square the piece on `square` may move to. An empty (or unreadable)
/// square yields no destinations. No side effects.
pub fn legal_destinations(board: &[PieceCode; 64], square: Square) -> Vec<Square> {
    let code = board[square as usize];
    let (Some(kind), Some(color)) = (piece_kind_from_code(code), piece_color_from_code(code))
    else {
        return Vec::new();
    };

    match kind {
        PieceKind::Rook => destinations_along_rays(board, color, rook_rays(square)),
        PieceKind::Bishop => destinations_along_rays(board, color, bishop_rays(square)),
        PieceKind::Queen => destinations_along_rays(board, color, queen_rays(square)),
        PieceKind::King => step_destinations(board, color, king_targets(square)),
        PieceKind::Knight => step_destinations(board, color, knight_targets(square)),
        PieceKind::Pawn => pawn_destinations(board, color, square),
    }
}

/// Every legal move for the side to move, in ascending origin-square order.
pub fn generate_all_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in 0..64u8 {
        if piece_color_from_code(game_state.board[from as usize]) != Some(game_state.turn) {
            continue;
        }
        for to in legal_destinations(&game_state.board, from) {
            moves.push(Move::new(from, to));
        }
    }

    moves
}

/// Walk each ray nearest-first: empty squares are destinations, the first
/// occupied square ends the ray and is a destination only when it holds an
/// opposing piece.
fn destinations_along_rays(
    board: &[PieceCode; 64],
    color: Color,
    rays: Vec<Vec<Square>>,
) -> Vec<Square> {
    let mut destinations = Vec::new();

    for ray in rays {
        for sq in ray {
            let occupant = board[sq as usize];
            if occupant == NO_PIECE {
                destinations.push(sq);
                continue;
            }
            if piece_color_from_code(occupant) != Some(color) {
                destinations.push(sq);
            }
            break;
        }
    }

    destinations
}

fn step_destinations(board: &[PieceCode; 64], color: Color, targets: &[Square]) -> Vec<Square> {
    targets
        .iter()
        .copied()
        .filter(|&sq| piece_color_from_code(board[sq as usize]) != Some(color))
        .collect()
}

fn pawn_destinations(board: &[PieceCode; 64], color: Color, square: Square) -> Vec<Square> {
    let mut destinations = Vec::new();

    if let Some(push) = pawn_push(color, square) {
        if board[push as usize] == NO_PIECE {
            destinations.push(push);
        }
    }

    for &capture in pawn_captures(color, square) {
        let occupant = board[capture as usize];
        if occupant != NO_PIECE && piece_color_from_code(occupant) != Some(color) {
            destinations.push(capture);
        }
    }

    destinations
}

#[cfg(test)]
mod tests {
    use super::{generate_all_moves, legal_destinations};
    use crate::game_state::chess_types::{encode_piece, Color, PieceKind};
    use crate::game_state::game_state::GameState;

    #[test]
    fn empty_square_has_no_destinations() {
        let game = GameState::new_game();
        assert!(legal_destinations(&game.board, 28).is_empty());
    }

    #[test]
    fn knight_on_b1_reaches_a3_and_c3_at_the_start() {
        let game = GameState::new_game();
        let mut destinations = legal_destinations(&game.board, 1);
        destinations.sort_unstable();
        assert_eq!(destinations, vec![16, 18]);
    }

    #[test]
    fn rook_ray_stops_before_a_friendly_piece() {
        let mut game = GameState::new_empty();
        game.board[0] = encode_piece(Color::Light, PieceKind::Rook);
        game.board[24] = encode_piece(Color::Light, PieceKind::Pawn);

        let destinations = legal_destinations(&game.board, 0);

        assert!(destinations.contains(&8));
        assert!(destinations.contains(&16));
        assert!(!destinations.contains(&24), "own piece is not a capture");
        assert!(!destinations.contains(&32), "ray must stop at the blocker");
    }

    #[test]
    fn rook_ray_includes_an_enemy_blocker_and_stops() {
        let mut game = GameState::new_empty();
        game.board[0] = encode_piece(Color::Light, PieceKind::Rook);
        game.board[24] = encode_piece(Color::Dark, PieceKind::Pawn);

        let destinations = legal_destinations(&game.board, 0);

        assert!(destinations.contains(&24), "enemy blocker is a capture");
        assert!(!destinations.contains(&32), "ray must stop at the capture");
    }

    #[test]
    fn bishop_is_blocked_in_the_starting_position() {
        let game = GameState::new_game();
        assert!(legal_destinations(&game.board, 2).is_empty());
    }

    #[test]
    fn pawn_push_is_blocked_by_any_piece() {
        let mut game = GameState::new_empty();
        game.board[12] = encode_piece(Color::Light, PieceKind::Pawn);
        game.board[20] = encode_piece(Color::Dark, PieceKind::Rook);

        assert!(legal_destinations(&game.board, 12).is_empty());
    }

    #[test]
    fn pawn_captures_only_enemy_occupants() {
        let mut game = GameState::new_empty();
        game.board[12] = encode_piece(Color::Light, PieceKind::Pawn);
        game.board[19] = encode_piece(Color::Dark, PieceKind::Knight);
        game.board[21] = encode_piece(Color::Light, PieceKind::Knight);

        let mut destinations = legal_destinations(&game.board, 12);
        destinations.sort_unstable();

        assert_eq!(destinations, vec![19, 20]);
    }

    #[test]
    fn pawn_on_farthest_rank_has_no_destinations() {
        let mut game = GameState::new_empty();
        game.board[60] = encode_piece(Color::Light, PieceKind::Pawn);
        game.board[3] = encode_piece(Color::Dark, PieceKind::Pawn);

        // Surround both pawns so emptiness is not the reason.
        game.board[51] = encode_piece(Color::Dark, PieceKind::Rook);
        game.board[53] = encode_piece(Color::Dark, PieceKind::Rook);
        game.board[10] = encode_piece(Color::Light, PieceKind::Rook);
        game.board[12] = encode_piece(Color::Light, PieceKind::Rook);

        assert!(legal_destinations(&game.board, 60).is_empty());
        assert!(legal_destinations(&game.board, 3).is_empty());
    }

    #[test]
    fn knight_destinations_never_wrap_files() {
        let mut game = GameState::new_empty();
        for sq in [24u8, 31, 0, 63, 39, 32] {
            game.board[sq as usize] = encode_piece(Color::Light, PieceKind::Knight);
        }

        for sq in [24u8, 31, 0, 63, 39, 32] {
            for to in legal_destinations(&game.board, sq) {
                let file_gap = (to as i32 % 8 - sq as i32 % 8).abs();
                assert!(file_gap <= 2, "square {sq} -> {to} crosses the board edge");
            }
        }
    }

    #[test]
    fn starting_position_has_twelve_moves() {
        let game = GameState::new_game();
        // No double pawn push in these rules: 8 single pushes + 4 knight moves.
        assert_eq!(generate_all_moves(&game).len(), 12);
    }

    #[test]
    fn all_moves_belong_to_the_side_to_move() {
        let game = GameState::new_game();
        for mv in generate_all_moves(&game) {
            assert!(mv.from < 16, "light pieces start on ranks 1-2");
        }
    }
}
