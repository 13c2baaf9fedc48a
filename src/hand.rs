//! The player's hand and its selection state.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;

/// A card in the hand together with its selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandCard {
    /// The card.
    pub card: Card,
    /// Whether the card is selected for play or discard.
    pub selected: bool,
}

impl HandCard {
    /// Creates an unselected hand card.
    #[must_use]
    pub const fn new(card: Card) -> Self {
        Self {
            card,
            selected: false,
        }
    }

    /// Creates a selected hand card.
    #[must_use]
    pub const fn selected(card: Card) -> Self {
        Self {
            card,
            selected: true,
        }
    }
}

/// A player's hand.
///
/// Card order is only meaningful for display; scoring looks at the selected
/// cards alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<HandCard>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand of unselected cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.iter().copied().map(HandCard::new).collect(),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HandCard> {
        self.cards.get(index)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Flips the selection flag of the card at `index`.
    ///
    /// Returns the new flag. Deselecting always succeeds; selecting fails once
    /// `max_selected` cards are already selected.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no card at `index` or the selection is full.
    pub fn toggle(&mut self, index: usize, max_selected: usize) -> Result<bool, ActionError> {
        let selected_count = self.selected_count();
        let hand_card = self
            .cards
            .get_mut(index)
            .ok_or(ActionError::CardNotFound)?;

        if !hand_card.selected && selected_count >= max_selected {
            return Err(ActionError::SelectionFull);
        }

        hand_card.selected = !hand_card.selected;
        Ok(hand_card.selected)
    }

    /// Returns the number of selected cards.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.cards.iter().filter(|c| c.selected).count()
    }

    /// Returns the selected cards, in hand order.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.card)
            .collect()
    }

    /// Returns the cards that are not selected, in hand order.
    #[must_use]
    pub fn held_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| !c.selected)
            .map(|c| c.card)
            .collect()
    }

    /// Deselects every card.
    pub fn clear_selection(&mut self) {
        for hand_card in &mut self.cards {
            hand_card.selected = false;
        }
    }

    /// Replaces selected cards, in hand order, with `replacements`.
    ///
    /// Replaced slots become unselected. Selected cards beyond the number of
    /// replacements are left in place. Returns the cards taken out of the hand.
    pub fn replace_selected<I>(&mut self, replacements: I) -> Vec<Card>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut replacements = replacements.into_iter();
        let mut removed = Vec::new();

        for hand_card in self.cards.iter_mut().filter(|c| c.selected) {
            let Some(card) = replacements.next() else {
                break;
            };
            removed.push(hand_card.card);
            *hand_card = HandCard::new(card);
        }

        removed
    }
}

impl FromIterator<HandCard> for Hand {
    fn from_iter<T: IntoIterator<Item = HandCard>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
