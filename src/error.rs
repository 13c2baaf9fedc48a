//! Error types for card parsing, dealing and game actions.

use thiserror::Error;

/// Errors that can occur when building a card from text or numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank symbol is not one of `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("unknown rank symbol")]
    UnknownRank,
    /// Suit name is not a suit of this deck.
    #[error("unknown suit name")]
    UnknownSuit,
    /// Card token is not of the form `<Suit>_<rank>`.
    #[error("malformed card token")]
    MalformedToken,
    /// Numeric value does not map to a rank.
    #[error("no rank has value {0}")]
    InvalidValue(u8),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for the requested hand size.
    #[error("not enough cards in the deck: requested {requested}, available {available}")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },
}

/// Errors that can occur during game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No card at the given hand position.
    #[error("card not found")]
    CardNotFound,
    /// The maximum number of cards is already selected.
    #[error("selection is full")]
    SelectionFull,
    /// No cards are selected.
    #[error("no cards selected")]
    NothingSelected,
    /// Too many cards selected to discard.
    #[error("too many cards selected to discard")]
    TooManyToDiscard,
    /// The same card appears twice in a hand.
    #[error("duplicate card in hand")]
    DuplicateCard,
    /// No discards left this hand.
    #[error("no discards left")]
    NoDiscardsLeft,
    /// Dealing replacement cards failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
}
