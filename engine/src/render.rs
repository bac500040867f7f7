use crate::game::{GameState, GameStatus};

/// Paints a read-only view of the game once per frame, whether or not a tick ran.
pub trait Renderer {
    fn render(&mut self, state: &GameState);

    fn start_game(&mut self) {}

    fn pause_game(&mut self) {}

    fn end_game(&mut self) {}
}

/// Calls the renderer hook matching a status change. Returns to idle have no hook.
pub fn notify_transition(renderer: &mut impl Renderer, from: GameStatus, to: GameStatus) {
    if from == to {
        return;
    }
    match to {
        GameStatus::Playing => renderer.start_game(),
        GameStatus::Paused => renderer.pause_game(),
        GameStatus::GameOver => renderer.end_game(),
        GameStatus::Idle => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct HookLog {
        calls: Vec<&'static str>,
    }

    impl Renderer for HookLog {
        fn render(&mut self, _state: &GameState) {
            self.calls.push("render");
        }

        fn start_game(&mut self) {
            self.calls.push("start");
        }

        fn pause_game(&mut self) {
            self.calls.push("pause");
        }

        fn end_game(&mut self) {
            self.calls.push("end");
        }
    }

    #[test]
    fn test_transitions_map_to_hooks() {
        let mut hooks = HookLog::default();
        notify_transition(&mut hooks, GameStatus::Idle, GameStatus::Playing);
        notify_transition(&mut hooks, GameStatus::Playing, GameStatus::Paused);
        notify_transition(&mut hooks, GameStatus::Paused, GameStatus::Playing);
        notify_transition(&mut hooks, GameStatus::Playing, GameStatus::GameOver);
        notify_transition(&mut hooks, GameStatus::GameOver, GameStatus::Idle);
        assert_eq!(hooks.calls, vec!["start", "pause", "start", "end"]);
    }

    #[test]
    fn test_unchanged_status_fires_nothing() {
        let mut hooks = HookLog::default();
        notify_transition(&mut hooks, GameStatus::Playing, GameStatus::Playing);
        assert!(hooks.calls.is_empty());
    }
}
