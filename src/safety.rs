// Lethality checks for a single destination cell
//
// Conservative model: every segment of every snake blocks, including our
// own head even though it is vacated this turn, and tails are not assumed
// to move.

use serde::Serialize;

use crate::types::{Board, Coord};

/// Why a cell would kill a snake that moved into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hazard {
    OutOfBounds,
    Occupied {
        snake_id: String,
        snake_name: String,
        segment: Coord,
    },
}

impl std::fmt::Display for Hazard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hazard::OutOfBounds => write!(f, "out of bounds"),
            Hazard::Occupied {
                snake_name,
                segment,
                ..
            } => write!(f, "collides with {} at {}", snake_name, segment),
        }
    }
}

/// Checks if a coordinate is out of bounds
pub fn is_out_of_bounds(coord: &Coord, board_width: i32, board_height: i32) -> bool {
    coord.x < 0 || coord.y < 0 || coord.x > board_width - 1 || coord.y > board_height - 1
}

/// Returns the first rule that makes `coord` lethal, bounds first
pub fn find_hazard(board: &Board, coord: &Coord) -> Option<Hazard> {
    if is_out_of_bounds(coord, board.width, board.height) {
        return Some(Hazard::OutOfBounds);
    }

    board.snakes.iter().find_map(|snake| {
        snake
            .coords
            .iter()
            .find(|segment| *segment == coord)
            .map(|segment| Hazard::Occupied {
                snake_id: snake.id.clone(),
                snake_name: snake.name.clone(),
                segment: *segment,
            })
    })
}

/// True if moving into `coord` ends the game for the mover
pub fn is_lethal(board: &Board, coord: &Coord) -> bool {
    find_hazard(board, coord).is_some()
}
