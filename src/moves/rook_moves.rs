use crate::game_state::chess_types::Square;

/// Rook rays from `square`: one sequence per direction (left, right, up,
/// down), nearest square first, stopping at the board edge. Rays that would
/// be empty are omitted.
pub fn rook_rays(square: Square) -> Vec<Vec<Square>> {
    let mut rays = Vec::with_capacity(4);

    for (file_step, rank_step) in [(-1, 0), (1, 0), (0, 1), (0, -1)] {
        let ray = trace_ray(square, file_step, rank_step);
        if !ray.is_empty() {
            rays.push(ray);
        }
    }

    rays
}

/// Walk from `square` in (file_step, rank_step) increments until the board
/// edge, collecting squares nearest-first.
pub(crate) fn trace_ray(square: Square, file_step: i32, rank_step: i32) -> Vec<Square> {
    let mut file = (square as i32 % 8) + file_step;
    let mut rank = (square as i32 / 8) + rank_step;
    let mut ray = Vec::new();

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        ray.push((rank * 8 + file) as Square);
        file += file_step;
        rank += rank_step;
    }

    ray
}
