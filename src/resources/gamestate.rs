//! Which screen the shell is showing.
//!
//! The shell starts on the menu. The `NewGame` subscriber installed by
//! [`Game`](crate::game::Game) switches it to the game screen once the map
//! has loaded.

/// Discrete screens the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Menu,
    Playing,
}

/// Authoritative current screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Menu`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Menu,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
    pub fn is_playing(&self) -> bool {
        self.current == GameStates::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_menu() {
        let state = GameState::new();
        assert_eq!(state.get(), GameStates::Menu);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_set() {
        let mut state = GameState::default();
        state.set(GameStates::Playing);
        assert!(state.is_playing());
    }
}
