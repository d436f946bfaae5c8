// Move candidate generation
//
// Ranks the four moves by squared distance from the cell they lead to
// to a target cell. Single step and greedy: no path search.

use crate::types::{Coord, Direction};

/// A move paired with the squared distance it leaves us from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCandidate {
    pub direction: Direction,
    pub distance: i64,
}

/// Returns all four moves sorted by ascending distance to `target`.
/// Ties keep the order LEFT, RIGHT, UP, DOWN.
pub fn generate_candidates(head: Coord, target: Coord) -> [MoveCandidate; 4] {
    let mut candidates = Direction::all().map(|direction| MoveCandidate {
        direction,
        distance: direction.apply(&head).distance_squared(&target),
    });

    // slice::sort_by_key is stable, which is what keeps the tie order
    candidates.sort_by_key(|c| c.distance);
    candidates
}
