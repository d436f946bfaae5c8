// Battlesnake API Types
// Legacy (2017) protocol: coordinates are [x, y] arrays, the origin is the
// top-left corner and `you` is the id of our snake.

use serde::{Deserialize, Serialize};

/// Board state including dimensions, food and the snakes still alive
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub snakes: Vec<Battlesnake>,
    #[serde(default)]
    pub food: Vec<Coord>,
}

impl Board {
    /// Looks up a snake by id
    pub fn snake(&self, id: &str) -> Option<&Battlesnake> {
        self.snakes.iter().find(|s| s.id == id)
    }

    /// Cell in the middle of the board
    pub fn center(&self) -> Coord {
        Coord::new(self.width / 2, self.height / 2)
    }
}

/// Snake representation; coords[0] is the head, the tail comes last
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Battlesnake {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub coords: Vec<Coord>,
    #[serde(default)]
    pub health_points: i32,
    #[serde(default)]
    pub taunt: Option<String>,
}

impl Battlesnake {
    pub fn head(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    pub fn length(&self) -> usize {
        self.coords.len()
    }
}

/// 2D coordinate on the board, `[x, y]` on the wire
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Squared Euclidean distance, avoids floating point
    /// Computed in i64 so boards wider than 32768 cells cannot overflow
    pub fn distance_squared(&self, other: &Coord) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }
}

impl From<[i32; 2]> for Coord {
    fn from([x, y]: [i32; 2]) -> Self {
        Coord { x, y }
    }
}

impl From<Coord> for [i32; 2] {
    fn from(coord: Coord) -> Self {
        [coord.x, coord.y]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents the four possible movement directions for a Battlesnake
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all directions in tie-break order
    pub fn all() -> [Direction; 4] {
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
    }

    /// Converts direction to string representation for API response
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Unit offset of this direction; y grows downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, coord: &Coord) -> Coord {
        let (dx, dy) = self.delta();
        Coord {
            x: coord.x + dx,
            y: coord.y + dy,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }
}

/// Head artwork accepted by the game server
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum HeadType {
    Bendr,
    Dead,
    Fang,
    Pixel,
    Regular,
    Safe,
    SandWorm,
    Shades,
    Smile,
    Tongue,
}

/// Tail artwork accepted by the game server
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TailType {
    BlockBum,
    Curled,
    FatRattle,
    Freckled,
    Pixel,
    Regular,
    RoundBum,
    SkinnyTail,
    SmallRattle,
}

/// Body of POST /start
#[derive(Deserialize, Serialize, Debug)]
pub struct StartRequest {
    pub game_id: String,
    pub width: i32,
    pub height: i32,
}

/// Reply to POST /start, also served on GET /
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StartResponse {
    pub name: String,
    pub color: String,
    pub head_url: String,
    pub head_type: HeadType,
    pub tail_type: TailType,
    pub taunt: String,
}

/// Body of POST /move
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MoveRequest {
    pub game_id: String,
    #[serde(default)]
    pub turn: i32,
    #[serde(flatten)]
    pub board: Board,
    #[serde(default)]
    pub dead_snakes: Vec<Battlesnake>,
    pub you: String,
}

/// Reply to POST /move
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub direction: Direction,
    pub taunt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_up_decreases_y() {
        let origin = Coord::new(3, 3);
        assert_eq!(Direction::Up.apply(&origin), Coord::new(3, 2));
        assert_eq!(Direction::Down.apply(&origin), Coord::new(3, 4));
        assert_eq!(Direction::Left.apply(&origin), Coord::new(2, 3));
        assert_eq!(Direction::Right.apply(&origin), Coord::new(4, 3));
    }

    #[test]
    fn test_distance_squared_on_huge_board() {
        let corner = Coord::new(0, 0);
        let far = Coord::new(39_999, 39_999);
        assert_eq!(corner.distance_squared(&far), 2 * 39_999_i64 * 39_999);
        assert_eq!(far.distance_squared(&corner), corner.distance_squared(&far));
    }

    #[test]
    fn test_move_request_parses_legacy_payload() {
        let payload = json!({
            "game_id": "abc",
            "turn": 4,
            "width": 20,
            "height": 15,
            "snakes": [{
                "id": "me",
                "name": "radiant6",
                "coords": [[1, 2], [1, 3]],
                "health_points": 97,
                "taunt": "hi"
            }],
            "food": [[7, 8]],
            "dead_snakes": [],
            "you": "me"
        });

        let request: MoveRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.board.width, 20);
        assert_eq!(request.board.height, 15);
        assert_eq!(request.board.food, vec![Coord::new(7, 8)]);
        let me = request.board.snake(&request.you).unwrap();
        assert_eq!(me.head(), Some(Coord::new(1, 2)));
        assert_eq!(me.length(), 2);
    }

    #[test]
    fn test_move_response_wire_format() {
        let response = MoveResponse {
            direction: Direction::Left,
            taunt: "I'm hungry".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "move": "left", "taunt": "I'm hungry" })
        );
    }

    #[test]
    fn test_appearance_enums_use_kebab_case() {
        assert_eq!(serde_json::to_value(HeadType::SandWorm).unwrap(), json!("sand-worm"));
        assert_eq!(serde_json::to_value(TailType::SmallRattle).unwrap(), json!("small-rattle"));
    }

    #[test]
    fn test_direction_from_str_is_case_insensitive() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
        assert!("sideways".parse::<Direction>().is_err());
    }
}
