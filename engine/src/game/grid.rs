//! Stateless grid rules shared by the state machine and anything that wants to
//! look ahead (autopilots, renderers).

use crate::SessionRng;
use super::types::{Board, Direction, Point};

pub fn next_position(pos: Point, direction: Direction) -> Point {
    let (dx, dy) = direction.delta();
    Point::new(pos.x + dx, pos.y + dy)
}

/// Inside the board and not on any of `snake`'s cells, the tail included.
pub fn is_valid_move<'a>(pos: Point, snake: impl IntoIterator<Item = &'a Point>, board: &Board) -> bool {
    board.contains(pos) && !snake.into_iter().any(|segment| *segment == pos)
}

pub fn detect_collision<'a>(pos: Point, snake: impl IntoIterator<Item = &'a Point>, board: &Board) -> bool {
    !is_valid_move(pos, snake, board)
}

/// Uniform draw over the board that skips `excluded` cells, giving up after
/// `max_attempts` draws. When every attempt hits an excluded cell the last
/// candidate is returned anyway, so on a nearly full board the result may be
/// occupied. Callers accept that instead of spinning.
pub fn random_empty_position<'a, I>(
    board: &Board,
    excluded: I,
    max_attempts: usize,
    rng: &mut SessionRng,
) -> Point
where
    I: IntoIterator<Item = &'a Point>,
    I::IntoIter: Clone,
{
    let excluded = excluded.into_iter();
    let mut candidate = Point::new(0, 0);

    for _ in 0..max_attempts.max(1) {
        candidate = Point::new(
            rng.random_range(0..board.width),
            rng.random_range(0..board.height),
        );
        if !excluded.clone().any(|p| *p == candidate) {
            return candidate;
        }
    }

    candidate
}

pub fn is_opposite_direction(a: Direction, b: Direction) -> bool {
    a.is_opposite(&b)
}
