use crate::error::ActionError;
use crate::result::PlayOutcome;

use super::{Game, GameState};

impl Game {
    /// Decides the outcome of a played hand from the updated level counters.
    pub(super) fn resolve_outcome(&self, level_score: u32, hands_played: u8) -> PlayOutcome {
        if level_score >= self.required_score() {
            if self.level < self.options.max_levels {
                PlayOutcome::LevelCleared
            } else {
                PlayOutcome::Won
            }
        } else if hands_played >= self.options.hands_per_level {
            PlayOutcome::Lost
        } else {
            PlayOutcome::Continue
        }
    }

    /// Advances to the next level after the current one was cleared.
    ///
    /// Deals a fresh hand and resets the level score, hands played and discards.
    /// The game total carries over.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in level-cleared state or the hand
    /// cannot be dealt.
    pub fn next_level(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::LevelCleared {
            return Err(ActionError::InvalidState);
        }

        self.hand = self.deal_fresh_hand()?;
        self.level += 1;
        self.level_score = 0;
        self.hands_played = 0;
        self.discards_used = 0;
        self.state = GameState::Playing;

        tracing::debug!(
            level = self.level,
            required_score = self.required_score(),
            "level started"
        );

        Ok(())
    }
}
