use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_rays;
use crate::moves::rook_moves::rook_rays;

/// Queen rays from `square`: the rook rays followed by the bishop rays.
pub fn queen_rays(square: Square) -> Vec<Vec<Square>> {
    let mut rays = rook_rays(square);
    rays.extend(bishop_rays(square));
    rays
}
