//! Result types for played hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::score::Evaluation;

/// What happened to the session after a hand was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Required score not reached yet; the played cards were replaced.
    Continue,
    /// Required score reached; the next level can be started.
    LevelCleared,
    /// Required score reached on the last level.
    Won,
    /// Hands for this level ran out before the required score was reached.
    Lost,
}

/// Result of playing a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    /// The cards that were played.
    pub played: Vec<Card>,
    /// Classification and score of the played cards.
    pub evaluation: Evaluation,
    /// Score accumulated on the current level, including this hand.
    pub level_score: u32,
    /// Score accumulated over the whole game, including this hand.
    pub total_score: u32,
    /// Score needed to clear the current level.
    pub required_score: u32,
    /// Hands played on the current level, including this one.
    pub hands_played: u8,
    /// The resulting outcome.
    pub outcome: PlayOutcome,
}
