pub mod config;
pub mod game;
pub mod input;
pub mod logger;
pub mod render;
pub mod scheduler;
mod session_rng;

pub use game::{
    Board, DeathReason, Difficulty, Direction, GameReport, GameSettings, GameState, GameStatus,
    Point, Snake, SnakeGame, StepError, StepOutcome,
};
pub use input::InputCommand;
pub use render::{notify_transition, Renderer};
pub use scheduler::{Clock, FrameOutcome, FrameRequester, LoopScheduler};
pub use session_rng::SessionRng;
