mod game_state;
pub mod grid;
mod report;
mod settings;
mod snake;
mod types;

pub use game_state::{GameState, SnakeGame, StepError, StepOutcome};
pub use report::GameReport;
pub use settings::{Difficulty, GameSettings, MAX_FOOD_REWARD};
pub use snake::Snake;
pub use types::{Board, DeathReason, Direction, GameStatus, Point};
