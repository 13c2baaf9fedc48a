use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{PlayOutcome, PlayResult};
use crate::score::evaluate;

use super::{Game, GameState};

impl Game {
    /// Toggles the selection of the card at `index`.
    ///
    /// Returns whether the card is now selected. Call [`Game::score`] afterwards
    /// to get the updated score.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state, there is no card at
    /// `index`, or the card would exceed the selection limit.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ActionError> {
        self.ensure_playing()?;
        self.hand.toggle(index, self.options.max_selected)
    }

    /// Deselects every card in the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state.
    pub fn clear_selection(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        self.hand.clear_selection();
        Ok(())
    }

    /// Plays the selected cards.
    ///
    /// The score of the selection is added to the level and game totals. If the
    /// level's required score is reached the level is cleared, or the game is won
    /// on the last level. Otherwise the game is lost once the level runs out of
    /// hands; if it does not, the played cards are replaced with new ones and the
    /// discard counter is reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state, no cards are
    /// selected, or replacement cards cannot be dealt.
    pub fn play_hand(&mut self) -> Result<PlayResult, ActionError> {
        self.ensure_playing()?;

        let played = self.hand.selected_cards();
        if played.is_empty() {
            return Err(ActionError::NothingSelected);
        }

        let evaluation = evaluate(&played);
        let level_score = self.level_score + evaluation.score;
        let total_score = self.total_score + evaluation.score;
        let hands_played = self.hands_played + 1;
        let outcome = self.resolve_outcome(level_score, hands_played);

        // Deal before committing so a failed deal leaves the game unchanged
        if outcome == PlayOutcome::Continue {
            let replacements = self.deal_replacements(played.len())?;
            self.hand.replace_selected(replacements);
            self.discards_used = 0;
        }

        self.level_score = level_score;
        self.total_score = total_score;
        self.hands_played = hands_played;
        self.state = match outcome {
            PlayOutcome::Continue => GameState::Playing,
            PlayOutcome::LevelCleared => GameState::LevelCleared,
            PlayOutcome::Won => GameState::Won,
            PlayOutcome::Lost => GameState::Lost,
        };

        tracing::debug!(
            category = evaluation.category.name(),
            score = evaluation.score,
            level_score,
            hands_played,
            ?outcome,
            "hand played"
        );

        Ok(PlayResult {
            played,
            evaluation,
            level_score,
            total_score,
            required_score: self.required_score(),
            hands_played,
            outcome,
        })
    }

    /// Discards the selected cards and replaces them with new ones.
    ///
    /// Returns the discarded cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state, no discards are
    /// left, no cards are selected, too many cards are selected, or replacement
    /// cards cannot be dealt.
    pub fn discard(&mut self) -> Result<Vec<Card>, ActionError> {
        self.ensure_playing()?;

        if self.discards_used >= self.options.max_discards {
            return Err(ActionError::NoDiscardsLeft);
        }

        let count = self.hand.selected_count();
        if count == 0 {
            return Err(ActionError::NothingSelected);
        }
        if count > self.options.max_discard_selection {
            return Err(ActionError::TooManyToDiscard);
        }

        let replacements = self.deal_replacements(count)?;
        let discarded = self.hand.replace_selected(replacements);
        self.discards_used += 1;

        tracing::debug!(
            count,
            discards_left = self.discards_left(),
            "cards discarded"
        );

        Ok(discarded)
    }
}
