use snake_engine::game::grid::{is_valid_move, next_position};
use snake_engine::{Direction, GameState, Point};

/// Greedy stand-in for a player: steps toward the food along Manhattan distance,
/// never reverses, never picks a fatal cell when a safe one exists.
pub struct Autopilot;

impl Autopilot {
    pub fn choose_direction(state: &GameState) -> Option<Direction> {
        let head = state.snake.head()?;

        let safe_moves: Vec<(Direction, Point)> = Direction::ALL
            .into_iter()
            .filter(|dir| state.snake.len() == 1 || !dir.is_opposite(&state.direction))
            .map(|dir| (dir, next_position(head, dir)))
            .filter(|(_, pos)| is_valid_move(*pos, &state.snake, &state.board))
            .collect();

        let best = safe_moves
            .iter()
            .min_by_key(|(_, pos)| Self::manhattan_distance(*pos, state.food))
            .map(|(dir, _)| *dir);

        Some(best.unwrap_or(state.direction))
    }

    fn manhattan_distance(a: Point, b: Point) -> i32 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::{GameSettings, Snake, SnakeGame};

    fn create_state(segments: &[(i32, i32)], food: (i32, i32), direction: Direction) -> GameState {
        let mut state = SnakeGame::new(GameSettings::default(), 1).state().clone();
        state.snake = Snake::from_segments(segments.iter().map(|&(x, y)| Point::new(x, y)));
        state.food = Point::new(food.0, food.1);
        state.direction = direction;
        state.next_direction = direction;
        state
    }

    #[test]
    fn test_heads_toward_food() {
        let state = create_state(&[(10, 10)], (10, 3), Direction::Right);
        assert_eq!(Autopilot::choose_direction(&state), Some(Direction::Up));
    }

    #[test]
    fn test_never_reverses_long_snake() {
        let state = create_state(&[(10, 10), (11, 10)], (2, 10), Direction::Left);
        assert_eq!(Autopilot::choose_direction(&state), Some(Direction::Left));

        let state = create_state(&[(10, 10), (9, 10)], (2, 10), Direction::Right);
        let choice = Autopilot::choose_direction(&state);
        assert_ne!(choice, Some(Direction::Left));
    }

    #[test]
    fn test_avoids_wall_when_food_is_behind_it() {
        let state = create_state(&[(19, 5), (18, 5)], (19, 0), Direction::Right);
        assert_eq!(Autopilot::choose_direction(&state), Some(Direction::Up));
    }

    #[test]
    fn test_keeps_direction_when_trapped() {
        let state = create_state(
            &[(0, 0), (1, 0), (1, 1), (0, 1), (0, 2)],
            (10, 10),
            Direction::Left,
        );
        assert_eq!(Autopilot::choose_direction(&state), Some(Direction::Left));
    }

    #[test]
    fn test_empty_snake_has_no_choice() {
        let state = create_state(&[], (10, 10), Direction::Left);
        assert_eq!(Autopilot::choose_direction(&state), None);
    }
}
