//! Decision function behaviour
//!
//! Whole-turn scenarios for decide_move: food seeking, the DOWN fallback,
//! attack mode activation and the multi-opponent policy.

use radiant_snake::candidates::generate_candidates;
use radiant_snake::decision::{decide_move, DecisionError};
use radiant_snake::safety::is_lethal;
use radiant_snake::types::{Battlesnake, Board, Coord, Direction};

fn snake(id: &str, coords: &[(i32, i32)]) -> Battlesnake {
    Battlesnake {
        id: id.to_string(),
        name: format!("{} snake", id),
        coords: coords.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        health_points: 100,
        taunt: None,
    }
}

fn board(snakes: Vec<Battlesnake>, food: &[(i32, i32)]) -> Board {
    Board {
        width: 10,
        height: 10,
        snakes,
        food: food.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
    }
}

/// Ours [(5,5),(5,6),(5,7)], opponent [(2,2),(2,3)], food (5,0)
#[test]
fn test_longer_snake_hunts_predicted_head() {
    let board = board(
        vec![
            snake("me", &[(5, 5), (5, 6), (5, 7)]),
            snake("them", &[(2, 2), (2, 3)]),
        ],
        &[(5, 0)],
    );

    let decision = decide_move(&board, "me").unwrap();

    // Opponent ranks RIGHT 8, UP 10, DOWN 18, LEFT 20 toward the food
    let prey = decision.attack.as_ref().expect("attack mode should fire");
    assert_eq!(prey.snake_id, "them");
    assert_eq!(prey.predicted_move, Direction::Right);
    assert_eq!(prey.predicted_head, Coord::new(3, 2));

    // From (5,5) toward (3,2): UP 8, LEFT 10, RIGHT 18, DOWN 20
    assert_eq!(decision.target, Coord::new(3, 2));
    assert_eq!(decision.chosen, Direction::Up);
    assert_ne!(decision.chosen, Direction::Right);
}

#[test]
fn test_attack_mode_redirects_away_from_food() {
    let snakes = |their_len: i32| {
        let their_body: Vec<(i32, i32)> = (0..their_len).map(|i| (1, 5 + i)).collect();
        vec![
            snake("me", &[(5, 5), (5, 6), (5, 7)]),
            snake("them", &their_body),
        ]
    };

    // Shorter opponent: hunted at (1,4), we go LEFT instead of UP to the food
    let shorter = decide_move(&board(snakes(2), &[(5, 0)]), "me").unwrap();
    assert!(shorter.attack_mode());
    assert_eq!(shorter.target, Coord::new(1, 4));
    assert_eq!(shorter.food_move, Direction::Up);
    assert_eq!(shorter.chosen, Direction::Left);

    // Equal length: no attack, straight for the food
    let equal = decide_move(&board(snakes(3), &[(5, 0)]), "me").unwrap();
    assert!(!equal.attack_mode());
    assert_eq!(equal.target, Coord::new(5, 0));
    assert_eq!(equal.chosen, Direction::Up);

    // Longer opponent: no attack either
    let longer = decide_move(&board(snakes(4), &[(5, 0)]), "me").unwrap();
    assert!(!longer.attack_mode());
    assert_eq!(longer.chosen, Direction::Up);
}

#[test]
fn test_attack_move_is_best_safe_candidate_toward_prey() {
    let board = board(
        vec![
            snake("me", &[(5, 5), (5, 6), (5, 7), (6, 7)]),
            snake("them", &[(1, 5), (1, 6)]),
            // blocks LEFT, the best candidate toward (1,4)
            snake("rock", &[(4, 5), (4, 6), (4, 7), (3, 7), (3, 8)]),
        ],
        &[(5, 0)],
    );

    let decision = decide_move(&board, "me").unwrap();
    let prey = decision.attack.as_ref().unwrap();
    assert_eq!(prey.snake_id, "them");

    let expected = generate_candidates(Coord::new(5, 5), prey.predicted_head)
        .iter()
        .map(|c| c.direction)
        .find(|d| !is_lethal(&board, &d.apply(&Coord::new(5, 5))))
        .unwrap();
    assert_eq!(decision.chosen, expected);
    assert_eq!(decision.chosen, Direction::Up);
    assert_eq!(decision.rejected.len(), 1);
    assert_eq!(decision.rejected[0].direction, Direction::Left);
}

#[test]
fn test_all_moves_lethal_returns_down() {
    // Head in the top-left corner, own body covers right and down
    let board = board(
        vec![
            snake("me", &[(0, 0), (1, 0), (1, 1), (0, 1)]),
            snake("them", &[(8, 8), (8, 9)]),
        ],
        &[(5, 5)],
    );

    let decision = decide_move(&board, "me").unwrap();
    assert!(decision.trapped);
    assert_eq!(decision.chosen, Direction::Down);
    assert_eq!(decision.rejected.len(), 4);
}

#[test]
fn test_trapped_at_bottom_wall_still_returns_down() {
    // DOWN is out of bounds here, the fallback is taken anyway
    let board = board(
        vec![
            snake("me", &[(5, 9), (5, 8), (4, 8), (4, 9), (3, 9)]),
            snake("them", &[(6, 9), (6, 8), (6, 7)]),
        ],
        &[(0, 0)],
    );

    let decision = decide_move(&board, "me").unwrap();
    assert!(decision.trapped);
    assert_eq!(decision.chosen, Direction::Down);
}

#[test]
fn test_single_snake_board_seeks_food() {
    let board = board(vec![snake("me", &[(5, 5), (6, 5)])], &[(0, 5)]);

    let decision = decide_move(&board, "me").unwrap();
    assert!(decision.opponents.is_empty());
    assert!(!decision.attack_mode());
    assert_eq!(decision.chosen, Direction::Left);
}

#[test]
fn test_no_food_targets_board_center() {
    let board = board(vec![snake("me", &[(0, 0), (0, 1)])], &[]);

    let decision = decide_move(&board, "me").unwrap();
    assert_eq!(decision.food_target, Coord::new(5, 5));
    // dx = dy = 5: RIGHT wins the tie with DOWN, DOWN is our own body anyway
    assert_eq!(decision.chosen, Direction::Right);
}

#[test]
fn test_only_first_food_item_is_considered() {
    let board = board(
        vec![snake("me", &[(5, 5), (5, 6)])],
        &[(9, 5), (4, 5)],
    );

    let decision = decide_move(&board, "me").unwrap();
    assert_eq!(decision.food_target, Coord::new(9, 5));
    assert_eq!(decision.chosen, Direction::Right);
}

#[test]
fn test_multiple_opponents_hunt_closest_shorter_one() {
    let board = board(
        vec![
            snake("big", &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4), (9, 5)]),
            snake("me", &[(5, 5), (5, 6), (5, 7), (5, 8)]),
            snake("far", &[(0, 9), (1, 9)]),
            snake("near", &[(3, 5), (3, 6)]),
        ],
        &[(0, 0)],
    );

    let decision = decide_move(&board, "me").unwrap();
    assert_eq!(decision.opponents.len(), 3);

    let prey = decision.attack.as_ref().unwrap();
    assert_eq!(prey.snake_id, "near");
    assert_eq!(decision.target, prey.predicted_head);
}

#[test]
fn test_snake_order_does_not_change_prey() {
    let me = snake("me", &[(5, 5), (5, 6), (5, 7), (5, 8)]);
    let far = snake("far", &[(0, 9), (1, 9)]);
    let near = snake("near", &[(3, 5), (3, 6)]);

    let forward = board(vec![me.clone(), far.clone(), near.clone()], &[(0, 0)]);
    let reversed = board(vec![near, far, me], &[(0, 0)]);

    let a = decide_move(&forward, "me").unwrap();
    let b = decide_move(&reversed, "me").unwrap();
    assert_eq!(a.attack.unwrap().snake_id, "near");
    assert_eq!(b.attack.unwrap().snake_id, "near");
    assert_eq!(a.chosen, b.chosen);
}

#[test]
fn test_trapped_opponent_is_hunted_off_board() {
    // Opponent in the bottom-left corner: LEFT and DOWN leave the board,
    // RIGHT is its own body and UP is ours, so it is predicted to fall back DOWN
    let board = board(
        vec![
            snake("me", &[(2, 8), (1, 8), (0, 8)]),
            snake("them", &[(0, 9), (1, 9)]),
        ],
        &[(9, 0)],
    );

    let decision = decide_move(&board, "me").unwrap();

    let prey = decision.attack.as_ref().expect("attack mode should fire");
    assert_eq!(prey.snake_id, "them");
    assert_eq!(prey.predicted_move, Direction::Down);
    assert_eq!(prey.predicted_head, Coord::new(0, 10));
    assert!(is_lethal(&board, &prey.predicted_head));

    // Toward (0,10): LEFT 5 is our own body, DOWN 5 is free
    assert_eq!(decision.target, Coord::new(0, 10));
    assert_eq!(decision.food_move, Direction::Up);
    assert_eq!(decision.chosen, Direction::Down);
    assert_eq!(decision.rejected.len(), 1);
    assert_eq!(decision.rejected[0].direction, Direction::Left);
}

#[test]
fn test_huge_board_does_not_overflow() {
    let board = Board {
        width: 40_000,
        height: 40_000,
        snakes: vec![snake("me", &[(0, 0), (0, 1)])],
        food: vec![Coord::new(39_999, 39_999)],
    };

    let decision = decide_move(&board, "me").unwrap();
    assert_eq!(decision.food_target, Coord::new(39_999, 39_999));
    // RIGHT and DOWN tie; RIGHT comes first and (1,0) is free
    assert_eq!(decision.chosen, Direction::Right);
    assert!(!decision.trapped);
}

#[test]
fn test_decision_is_idempotent() {
    let board = board(
        vec![
            snake("me", &[(5, 5), (5, 6), (5, 7)]),
            snake("them", &[(2, 2), (2, 3)]),
        ],
        &[(5, 0)],
    );

    let first = decide_move(&board, "me").unwrap();
    let second = decide_move(&board, "me").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_decisions_are_reentrant_across_threads() {
    let board = board(
        vec![
            snake("me", &[(5, 5), (5, 6), (5, 7)]),
            snake("them", &[(2, 2), (2, 3)]),
        ],
        &[(5, 0)],
    );
    let expected = decide_move(&board, "me").unwrap().chosen;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let board = board.clone();
            std::thread::spawn(move || decide_move(&board, "me").unwrap().chosen)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_unknown_snake_is_reported() {
    let board = board(vec![snake("me", &[(5, 5)])], &[(0, 0)]);
    assert_eq!(
        decide_move(&board, "ghost"),
        Err(DecisionError::SnakeNotFound("ghost".to_string()))
    );
}
