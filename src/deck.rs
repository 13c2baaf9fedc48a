//! Deck construction and random dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::DealError;

/// Number of cards dealt for a fresh hand.
pub const DEFAULT_HAND_SIZE: usize = 8;

/// Creates a full, unshuffled deck.
///
/// Cards come in suit order, each suit running from two to ace.
///
/// ```
/// use handrs::{DECK_SIZE, create_deck};
///
/// let deck = create_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].to_string(), "Hearts_2");
/// assert_eq!(deck[DECK_SIZE - 1].to_string(), "Spades_A");
/// ```
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Deals `hand_size` distinct cards from `deck`, uniformly at random and without
/// replacement.
///
/// The deck itself is left untouched; the returned cards are in random order.
///
/// # Errors
///
/// Returns [`DealError::NotEnoughCards`] if `hand_size` exceeds the deck size.
/// A short deal is never returned.
pub fn deal_hand<R: Rng + ?Sized>(
    deck: &[Card],
    hand_size: usize,
    rng: &mut R,
) -> Result<Vec<Card>, DealError> {
    if hand_size > deck.len() {
        return Err(DealError::NotEnoughCards {
            requested: hand_size,
            available: deck.len(),
        });
    }

    let mut cards = deck.to_vec();
    let (dealt, _) = cards.partial_shuffle(rng, hand_size);
    let hand = dealt.to_vec();

    tracing::trace!(hand_size, deck_size = deck.len(), "dealt hand");

    Ok(hand)
}

/// Deals a hand using a fresh random source seeded with `seed`.
///
/// The same seed and deck always produce the same hand.
///
/// # Errors
///
/// Returns [`DealError::NotEnoughCards`] if `hand_size` exceeds the deck size.
///
/// ```
/// use handrs::{DEFAULT_HAND_SIZE, create_deck, deal_hand_seeded};
///
/// let deck = create_deck();
/// let first = deal_hand_seeded(&deck, DEFAULT_HAND_SIZE, 7).unwrap();
/// let second = deal_hand_seeded(&deck, DEFAULT_HAND_SIZE, 7).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn deal_hand_seeded(
    deck: &[Card],
    hand_size: usize,
    seed: u64,
) -> Result<Vec<Card>, DealError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal_hand(deck, hand_size, &mut rng)
}
