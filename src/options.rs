//! Game configuration options.

use crate::deck::DEFAULT_HAND_SIZE;

/// Configuration options for a game session.
///
/// These only shape the session rules; the scoring tables are fixed.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_max_levels(3)
///     .with_hands_per_level(5)
///     .with_base_required_score(200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt into the hand.
    pub hand_size: usize,
    /// Maximum number of cards selected at once.
    pub max_selected: usize,
    /// Discards allowed between two played hands.
    pub max_discards: u8,
    /// Maximum number of cards in a single discard.
    pub max_discard_selection: usize,
    /// Hands that may be played before a level is lost.
    pub hands_per_level: u8,
    /// Number of levels to clear to win.
    pub max_levels: u8,
    /// Score required to clear the first level.
    pub base_required_score: u32,
    /// Increase of the required score per level.
    pub required_score_step: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            max_selected: 5,
            max_discards: 3,
            max_discard_selection: 4,
            hands_per_level: 4,
            max_levels: 5,
            base_required_score: 300,
            required_score_step: 450,
        }
    }
}

impl GameOptions {
    /// Returns the score required to clear `level` (1-based).
    ///
    /// Saturates at `u32::MAX` rather than overflowing.
    ///
    /// # Example
    ///
    /// ```
    /// use handrs::GameOptions;
    ///
    /// let options = GameOptions::default();
    /// assert_eq!(options.required_score(1), 300);
    /// assert_eq!(options.required_score(3), 1200);
    /// ```
    #[must_use]
    pub fn required_score(&self, level: u8) -> u32 {
        let step = u32::from(level.saturating_sub(1)).saturating_mul(self.required_score_step);
        self.base_required_score.saturating_add(step)
    }

    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use handrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(6);
    /// assert_eq!(options.hand_size, 6);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the maximum number of selected cards.
    #[must_use]
    pub const fn with_max_selected(mut self, max_selected: usize) -> Self {
        self.max_selected = max_selected;
        self
    }

    /// Sets the number of discards allowed between played hands.
    ///
    /// # Example
    ///
    /// ```
    /// use handrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_discards(1);
    /// assert_eq!(options.max_discards, 1);
    /// ```
    #[must_use]
    pub const fn with_max_discards(mut self, max_discards: u8) -> Self {
        self.max_discards = max_discards;
        self
    }

    /// Sets the maximum number of cards in a single discard.
    #[must_use]
    pub const fn with_max_discard_selection(mut self, max: usize) -> Self {
        self.max_discard_selection = max;
        self
    }

    /// Sets the number of hands per level.
    #[must_use]
    pub const fn with_hands_per_level(mut self, hands: u8) -> Self {
        self.hands_per_level = hands;
        self
    }

    /// Sets the number of levels.
    #[must_use]
    pub const fn with_max_levels(mut self, levels: u8) -> Self {
        self.max_levels = levels;
        self
    }

    /// Sets the score required to clear the first level.
    #[must_use]
    pub const fn with_base_required_score(mut self, score: u32) -> Self {
        self.base_required_score = score;
        self
    }

    /// Sets the per-level increase of the required score.
    ///
    /// # Example
    ///
    /// ```
    /// use handrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_required_score_step(100);
    /// assert_eq!(options.required_score(2), 400);
    /// ```
    #[must_use]
    pub const fn with_required_score_step(mut self, step: u32) -> Self {
        self.required_score_step = step;
        self
    }
}
