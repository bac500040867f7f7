use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use crate::config::Validate;
use crate::{log, SessionRng};
use super::grid::{detect_collision, is_opposite_direction, next_position, random_empty_position};
use super::report::GameReport;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Board, DeathReason, Direction, GameStatus, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub status: GameStatus,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub snake: Snake,
    pub food: Point,
    /// Direction applied by the last step.
    pub direction: Direction,
    /// Most recent accepted request, adopted at the start of the next step.
    pub next_direction: Direction,
    pub board: Board,
    pub moves: u32,
    pub food_consumed: u32,
    pub death_reason: Option<DeathReason>,
}

impl GameState {
    /// Idle state with a one-cell snake in the middle of the board heading right.
    pub fn initial(board: Board, high_score: u32, food_attempts: usize, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(board.center());
        let food = random_empty_position(&board, &snake, food_attempts, rng);

        Self {
            status: GameStatus::Idle,
            score: 0,
            high_score,
            level: 1,
            snake,
            food,
            direction: Direction::Right,
            next_direction: Direction::Right,
            board,
            moves: 0,
            food_consumed: 0,
            death_reason: None,
        }
    }

    pub fn check_invariants(&self) -> Result<(), String> {
        if self.snake.is_empty() {
            return Err("snake has no segments".to_string());
        }

        let mut seen = HashSet::with_capacity(self.snake.len());
        for segment in &self.snake {
            if !seen.insert(*segment) {
                return Err(format!("segment ({}, {}) appears twice", segment.x, segment.y));
            }
            if self.status != GameStatus::GameOver && !self.board.contains(*segment) {
                return Err(format!("segment ({}, {}) is off the board", segment.x, segment.y));
            }
        }

        if self.status != GameStatus::GameOver && self.snake.contains(self.food) {
            return Err(format!("food ({}, {}) lies on the snake", self.food.x, self.food.y));
        }

        if self.snake.len() > 1 && self.direction.is_opposite(&self.next_direction) {
            return Err("pending direction reverses the current one".to_string());
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    NotPlaying,
    Moved,
    AteFood,
    GameOver(DeathReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    EmptySnake,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::EmptySnake => write!(f, "cannot advance a snake with no segments"),
        }
    }
}

impl std::error::Error for StepError {}

/// Sole owner of the authoritative [`GameState`]. Everything else reads it through [`SnakeGame::state`].
pub struct SnakeGame {
    settings: GameSettings,
    state: GameState,
    rng: SessionRng,
}

impl SnakeGame {
    /// `settings` must already have passed [`Validate::validate`]; an empty board cannot seed food.
    pub fn new(settings: GameSettings, seed: u64) -> Self {
        debug_assert!(
            settings.validate().is_ok(),
            "SnakeGame::new called with invalid settings: {:?}",
            settings.validate()
        );
        let mut rng = SessionRng::new(seed);
        let state = GameState::initial(
            settings.board(),
            0,
            settings.food_placement_attempts as usize,
            &mut rng,
        );
        Self { settings, state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn tick_interval(&self) -> Duration {
        self.settings.tick_interval_for_level(self.state.level)
    }

    /// Returns whether the status changed.
    pub fn start(&mut self) -> bool {
        match self.state.status {
            GameStatus::Idle | GameStatus::Paused => {
                self.state.status = GameStatus::Playing;
                true
            }
            GameStatus::Playing | GameStatus::GameOver => false,
        }
    }

    /// Returns whether the status changed.
    pub fn pause(&mut self) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }
        self.state.status = GameStatus::Paused;
        true
    }

    /// Back to a fresh idle board. Only the high score survives.
    pub fn reset(&mut self) {
        let high_score = self.state.high_score;
        self.state = GameState::initial(
            self.settings.board(),
            high_score,
            self.settings.food_placement_attempts as usize,
            &mut self.rng,
        );
    }

    /// Replaces the state wholesale. The state is taken as given; a corrupted one
    /// surfaces later as a [`StepError`].
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
    }

    /// Last accepted request wins. Reversals are ignored once the snake is longer than one cell.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.state.snake.len() > 1 && is_opposite_direction(self.state.direction, direction) {
            return false;
        }
        self.state.next_direction = direction;
        true
    }

    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        if self.state.status != GameStatus::Playing {
            return Ok(StepOutcome::NotPlaying);
        }

        let head = self.state.snake.head().ok_or(StepError::EmptySnake)?;
        let state = &mut self.state;

        state.direction = state.next_direction;
        let new_head = next_position(head, state.direction);

        if detect_collision(new_head, &state.snake, &state.board) {
            let reason = if state.board.contains(new_head) {
                DeathReason::SelfCollision
            } else {
                DeathReason::WallCollision
            };
            state.status = GameStatus::GameOver;
            state.death_reason = Some(reason);
            state.high_score = state.high_score.max(state.score);
            log!(
                "Game over ({:?}) at ({}, {}). Score: {}, high score: {}",
                reason,
                new_head.x,
                new_head.y,
                state.score,
                state.high_score
            );
            return Ok(StepOutcome::GameOver(reason));
        }

        let food_eaten = new_head == state.food;
        state.snake.push_head(new_head);
        state.moves += 1;

        if !food_eaten {
            state.snake.drop_tail();
            return Ok(StepOutcome::Moved);
        }

        state.score = state.score.saturating_add(self.settings.food_reward);
        state.food_consumed += 1;
        state.food = random_empty_position(
            &state.board,
            &state.snake,
            self.settings.food_placement_attempts as usize,
            &mut self.rng,
        );
        log!(
            "Ate food at ({}, {}). Score: {}, next food at ({}, {})",
            new_head.x,
            new_head.y,
            state.score,
            state.food.x,
            state.food.y
        );

        let level = self.settings.level_for_score(state.score);
        if level > state.level {
            state.level = level;
            log!(
                "Level {} reached, tick interval now {} ms",
                level,
                self.settings.tick_interval_for_level(level).as_millis()
            );
        }

        Ok(StepOutcome::AteFood)
    }

    pub fn report(&self, play_time: Duration) -> GameReport {
        GameReport {
            score: self.state.score,
            high_score: self.state.high_score,
            level: self.state.level,
            game_mode: self.settings.game_mode.clone(),
            difficulty: self.settings.difficulty,
            duration_ms: play_time.as_millis() as u64,
            moves: self.state.moves,
            food_consumed: self.state.food_consumed,
        }
    }
}
