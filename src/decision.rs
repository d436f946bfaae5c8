// Per-turn decision orchestration
//
// Picks the closest-to-target move that is not immediately lethal, after
// deciding whether the target is the first food item or the predicted next
// head of a shorter opponent ("attack mode").

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::candidates::generate_candidates;
use crate::safety::{find_hazard, Hazard};
use crate::types::{Battlesnake, Board, Coord, Direction};

/// Input problems that make a decision impossible
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("snake '{0}' not found in board state")]
    SnakeNotFound(String),
    #[error("snake '{0}' has no body segments")]
    EmptySnake(String),
}

/// Tunables for the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionPolicy {
    /// Hunt shorter opponents instead of food
    pub attack_mode: bool,
    /// Move returned when all four candidates are lethal
    pub fallback: Direction,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        DecisionPolicy {
            attack_mode: true,
            fallback: Direction::Down,
        }
    }
}

/// A candidate that was skipped because it is lethal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub direction: Direction,
    pub hazard: Hazard,
}

/// Result of scanning the ranked candidates for one snake and one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeMove {
    pub direction: Direction,
    /// Candidates skipped before `direction` was found, in rank order
    pub rejected: Vec<Rejection>,
    /// All four candidates were lethal and `direction` is the fallback
    pub trapped: bool,
}

/// Where we expect an opponent to move this turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpponentPrediction {
    pub snake_id: String,
    pub length: usize,
    pub predicted_move: Direction,
    pub predicted_head: Coord,
}

/// Outcome of a decision plus the trace that led to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub chosen: Direction,
    /// Target the chosen move was ranked against
    pub target: Coord,
    /// First food item, or the board centre when there is none
    pub food_target: Coord,
    /// Move we would have made without attack mode
    pub food_move: Direction,
    pub opponents: Vec<OpponentPrediction>,
    /// Opponent being hunted, if attack mode fired
    pub attack: Option<OpponentPrediction>,
    pub rejected: Vec<Rejection>,
    pub trapped: bool,
}

impl Decision {
    pub fn attack_mode(&self) -> bool {
        self.attack.is_some()
    }
}

/// Best non-lethal move for a snake whose head is at `head`, toward `target`
pub fn choose_safe_move(
    board: &Board,
    head: Coord,
    target: Coord,
    fallback: Direction,
) -> SafeMove {
    let mut rejected = Vec::new();

    for candidate in generate_candidates(head, target).iter() {
        let next = candidate.direction.apply(&head);
        match find_hazard(board, &next) {
            None => {
                return SafeMove {
                    direction: candidate.direction,
                    rejected,
                    trapped: false,
                }
            }
            Some(hazard) => rejected.push(Rejection {
                direction: candidate.direction,
                hazard,
            }),
        }
    }

    SafeMove {
        direction: fallback,
        rejected,
        trapped: true,
    }
}

/// Target used when hunting for food: the first food item only
pub fn food_target(board: &Board) -> Coord {
    board.food.first().copied().unwrap_or_else(|| board.center())
}

/// Simulates every other snake greedily chasing `target`
pub fn predict_opponents(
    board: &Board,
    our_id: &str,
    target: Coord,
    fallback: Direction,
) -> Vec<OpponentPrediction> {
    board
        .snakes
        .iter()
        .filter(|snake| snake.id != our_id)
        .filter_map(|snake| {
            let head = snake.head()?;
            let predicted = choose_safe_move(board, head, target, fallback);
            Some(OpponentPrediction {
                snake_id: snake.id.clone(),
                length: snake.length(),
                predicted_move: predicted.direction,
                predicted_head: predicted.direction.apply(&head),
            })
        })
        .collect()
}

/// Picks the opponent to hunt: strictly shorter than us, closest predicted
/// head, earliest in the snapshot on ties
pub fn select_attack_target<'a>(
    our_head: Coord,
    our_length: usize,
    opponents: &'a [OpponentPrediction],
) -> Option<&'a OpponentPrediction> {
    opponents
        .iter()
        .filter(|opponent| our_length > opponent.length)
        .min_by_key(|opponent| our_head.distance_squared(&opponent.predicted_head))
}

/// Computes our move for this turn with the default policy
pub fn decide_move(board: &Board, our_id: &str) -> Result<Decision, DecisionError> {
    decide_move_with(board, our_id, &DecisionPolicy::default())
}

/// Computes our move for this turn
pub fn decide_move_with(
    board: &Board,
    our_id: &str,
    policy: &DecisionPolicy,
) -> Result<Decision, DecisionError> {
    let you: &Battlesnake = board
        .snake(our_id)
        .ok_or_else(|| DecisionError::SnakeNotFound(our_id.to_string()))?;
    let head = you
        .head()
        .ok_or_else(|| DecisionError::EmptySnake(our_id.to_string()))?;

    let food_target = food_target(board);
    let food_choice = choose_safe_move(board, head, food_target, policy.fallback);
    let opponents = predict_opponents(board, our_id, food_target, policy.fallback);

    let attack = if policy.attack_mode {
        select_attack_target(head, you.length(), &opponents).cloned()
    } else {
        None
    };

    let (target, choice) = match &attack {
        Some(prey) => {
            info!(
                "Attack mode! Hunting {} (length {} vs our {}), predicted at {}",
                prey.snake_id,
                prey.length,
                you.length(),
                prey.predicted_head
            );
            let target = prey.predicted_head;
            (target, choose_safe_move(board, head, target, policy.fallback))
        }
        None => (food_target, food_choice.clone()),
    };

    for rejection in &choice.rejected {
        debug!(
            "Rejected {} from {}: {}",
            rejection.direction.as_str(),
            head,
            rejection.hazard
        );
    }
    if choice.trapped {
        debug!(
            "All moves from {} are lethal, falling back to {}",
            head,
            policy.fallback.as_str()
        );
    }

    Ok(Decision {
        chosen: choice.direction,
        target,
        food_target,
        food_move: food_choice.direction,
        opponents,
        attack,
        rejected: choice.rejected,
        trapped: choice.trapped,
    })
}
