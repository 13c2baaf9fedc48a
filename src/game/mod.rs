//! Game session and level progression.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::{create_deck, deal_hand};
use crate::error::{ActionError, DealError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::score::{Evaluation, evaluate, score};

mod actions;
mod level;
pub mod state;

pub use state::GameState;

/// A single-player game session.
///
/// The game owns the hand and the level counters. Every new card comes from a
/// freshly created deck that excludes the cards still held. Use
/// [`GameOptions`] to configure hand size, discard limits and level targets.
#[derive(Debug, Clone)]
pub struct Game {
    /// The player's hand.
    hand: Hand,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Current level, starting at 1.
    level: u8,
    /// Score accumulated on the current level.
    level_score: u32,
    /// Score accumulated over all levels.
    total_score: u32,
    /// Hands played on the current level.
    hands_played: u8,
    /// Discards used since the last played hand.
    discards_used: u8,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use handrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            hand: Hand::new(),
            options,
            state: GameState::NotStarted,
            level: 0,
            level_score: 0,
            total_score: 0,
            hands_played: 0,
            discards_used: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Deals a full hand from a fresh deck.
    fn deal_fresh_hand(&mut self) -> Result<Hand, DealError> {
        let cards = deal_hand(&create_deck(), self.options.hand_size, &mut self.rng)?;
        Ok(Hand::from_cards(&cards))
    }

    /// Deals `count` cards from a fresh deck that excludes the held cards.
    fn deal_replacements(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        let held = self.hand.held_cards();
        let mut deck = create_deck();
        deck.retain(|card| !held.contains(card));
        deal_hand(&deck, count, &mut self.rng)
    }

    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.state != GameState::Playing {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Starts a new game at level 1, abandoning any game in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hand size is larger than the deck.
    pub fn start(&mut self) -> Result<(), ActionError> {
        self.hand = self.deal_fresh_hand()?;
        self.state = GameState::Playing;
        self.level = 1;
        self.level_score = 0;
        self.total_score = 0;
        self.hands_played = 0;
        self.discards_used = 0;

        tracing::debug!(
            required_score = self.required_score(),
            hand_size = self.hand.len(),
            "game started"
        );

        Ok(())
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Replaces the hand of a game in progress, e.g. to restore a saved round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state, the hand holds the
    /// same card twice, or more than `max_selected` cards are selected.
    pub fn set_hand(&mut self, hand: Hand) -> Result<(), ActionError> {
        self.ensure_playing()?;

        let cards = hand.cards();
        let duplicate = cards
            .iter()
            .enumerate()
            .any(|(index, c)| cards[index + 1..].iter().any(|other| other.card == c.card));
        if duplicate {
            return Err(ActionError::DuplicateCard);
        }
        if hand.selected_count() > self.options.max_selected {
            return Err(ActionError::SelectionFull);
        }

        self.hand = hand;
        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current level (0 before the game starts).
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Returns the score accumulated on the current level.
    #[must_use]
    pub const fn level_score(&self) -> u32 {
        self.level_score
    }

    /// Returns the score accumulated over all levels.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Returns the score needed to clear the current level.
    #[must_use]
    pub fn required_score(&self) -> u32 {
        self.options.required_score(self.level)
    }

    /// Returns the number of hands played on the current level.
    #[must_use]
    pub const fn hands_played(&self) -> u8 {
        self.hands_played
    }

    /// Returns the number of hands left on the current level.
    #[must_use]
    pub const fn hands_left(&self) -> u8 {
        self.options.hands_per_level.saturating_sub(self.hands_played)
    }

    /// Returns the number of discards used since the last played hand.
    #[must_use]
    pub const fn discards_used(&self) -> u8 {
        self.discards_used
    }

    /// Returns the number of discards left before the next played hand.
    #[must_use]
    pub const fn discards_left(&self) -> u8 {
        self.options.max_discards.saturating_sub(self.discards_used)
    }

    /// Returns the score of the currently selected cards.
    #[must_use]
    pub fn score(&self) -> u32 {
        score(&self.hand)
    }

    /// Returns the full evaluation of the currently selected cards.
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.hand.selected_cards())
    }
}
