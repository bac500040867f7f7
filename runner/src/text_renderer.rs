use snake_engine::{log, GameState, Point, Renderer};

/// Prints the board whenever a new tick has been applied. Frames without a tick are skipped.
pub struct TextRenderer {
    enabled: bool,
    last_drawn_moves: Option<u32>,
}

impl TextRenderer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last_drawn_moves: None,
        }
    }

    pub fn draw_board(state: &GameState) -> String {
        let width = state.board.width.max(0) as usize;
        let border = format!("+{}+", "-".repeat(width));
        let mut out = String::with_capacity((width + 3) * (state.board.height.max(0) as usize + 3));

        out.push_str(&format!(
            "score {}  high {}  level {}  {:?}\n",
            state.score, state.high_score, state.level, state.status
        ));
        out.push_str(&border);
        out.push('\n');
        for y in 0..state.board.height {
            out.push('|');
            for x in 0..state.board.width {
                out.push(Self::cell_glyph(state, Point::new(x, y)));
            }
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }

    fn cell_glyph(state: &GameState, pos: Point) -> char {
        if state.snake.head() == Some(pos) {
            '@'
        } else if state.snake.contains(pos) {
            'o'
        } else if state.food == pos {
            '*'
        } else {
            '.'
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, state: &GameState) {
        if !self.enabled || self.last_drawn_moves == Some(state.moves) {
            return;
        }
        self.last_drawn_moves = Some(state.moves);
        println!("{}", Self::draw_board(state));
    }

    fn start_game(&mut self) {
        self.last_drawn_moves = None;
        log!("Game running. Keys: w/a/s/d or arrows to turn, p to pause, r to reset, q to quit");
    }

    fn pause_game(&mut self) {
        log!("Paused. Press p to resume");
    }

    fn end_game(&mut self) {
        log!("Game over. Press r to reset or q to quit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::{GameSettings, Snake, SnakeGame};

    #[test]
    fn test_draw_board_marks_head_body_and_food() {
        let settings = GameSettings {
            board_width: 5,
            board_height: 5,
            ..GameSettings::default()
        };
        let mut state = SnakeGame::new(settings, 3).state().clone();
        state.snake = Snake::from_segments([Point::new(1, 0), Point::new(0, 0)]);
        state.food = Point::new(4, 4);

        let drawing = TextRenderer::draw_board(&state);
        let rows: Vec<&str> = drawing.lines().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[1], "+-----+");
        assert_eq!(rows[2], "|o@...|");
        assert_eq!(rows[6], "|....*|");
        assert!(rows[0].starts_with("score 0"));
    }
}
