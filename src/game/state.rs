//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game has been started yet.
    NotStarted,
    /// A hand is dealt and waiting for selection, play or discard.
    Playing,
    /// The level's required score was reached; waiting for the next level.
    LevelCleared,
    /// The last level was cleared.
    Won,
    /// A level ran out of hands.
    Lost,
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
