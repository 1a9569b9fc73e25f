use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::trace_ray;

/// Bishop rays from `square`: one sequence per diagonal (up-left, up-right,
/// down-right, down-left), nearest square first, stopping at the board edge.
/// Rays that would be empty are omitted.
pub fn bishop_rays(square: Square) -> Vec<Vec<Square>> {
    let mut rays = Vec::with_capacity(4);

    for (file_step, rank_step) in [(-1, 1), (1, 1), (1, -1), (-1, -1)] {
        let ray = trace_ray(square, file_step, rank_step);
        if !ray.is_empty() {
            rays.push(ray);
        }
    }

    rays
}
