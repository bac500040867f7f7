use crate::game::Direction;

/// Everything a key press can mean to the game. Only `Turn` reaches the state machine's
/// direction slot; the rest are lifecycle requests for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    TogglePause,
    Reset,
    Quit,
}

impl InputCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        let command = match key.trim().to_ascii_lowercase().as_str() {
            "up" | "arrowup" | "w" => InputCommand::Turn(Direction::Up),
            "down" | "arrowdown" | "s" => InputCommand::Turn(Direction::Down),
            "left" | "arrowleft" | "a" => InputCommand::Turn(Direction::Left),
            "right" | "arrowright" | "d" => InputCommand::Turn(Direction::Right),
            "p" | "space" => InputCommand::TogglePause,
            "r" => InputCommand::Reset,
            "q" | "escape" | "esc" => InputCommand::Quit,
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_keys_map_to_turns() {
        assert_eq!(InputCommand::from_key("ArrowUp"), Some(InputCommand::Turn(Direction::Up)));
        assert_eq!(InputCommand::from_key("s"), Some(InputCommand::Turn(Direction::Down)));
        assert_eq!(InputCommand::from_key(" LEFT \n"), Some(InputCommand::Turn(Direction::Left)));
        assert_eq!(InputCommand::from_key("d"), Some(InputCommand::Turn(Direction::Right)));
    }

    #[test]
    fn test_lifecycle_keys() {
        assert_eq!(InputCommand::from_key("p"), Some(InputCommand::TogglePause));
        assert_eq!(InputCommand::from_key("r"), Some(InputCommand::Reset));
        assert_eq!(InputCommand::from_key("Escape"), Some(InputCommand::Quit));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(InputCommand::from_key("x"), None);
        assert_eq!(InputCommand::from_key("upward"), None);
    }
}
