//! Hand classification and scoring.
//!
//! The selected cards of a hand are classified into a [`Category`] by checking
//! each category in priority order, most valuable first. The first match wins,
//! so a hand shaped like a full house is never reported as three of a kind.
//! The score is `(base + sum of card values) * multiplier`.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::hand::Hand;

/// Minimum number of selected cards before any category can match.
pub(crate) const MIN_SCORING_CARDS: usize = 2;

/// Number of cards a flush needs.
pub(crate) const FLUSH_SIZE: usize = 5;

/// Poker-hand category of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two pairs of different ranks.
    TwoPair,
    /// Two cards of one rank.
    Pair,
    /// Nothing matched.
    None,
}

/// Categories in the order they are checked.
pub const CATEGORY_ORDER: [Category; 5] = [
    Category::Flush,
    Category::FullHouse,
    Category::ThreeOfAKind,
    Category::TwoPair,
    Category::Pair,
];

impl Category {
    /// Returns the base score added to the card values.
    #[must_use]
    pub const fn base_score(self) -> u32 {
        match self {
            Self::Flush | Self::FullHouse => 15,
            Self::ThreeOfAKind => 10,
            Self::TwoPair => 5,
            Self::Pair => 3,
            Self::None => 0,
        }
    }

    /// Returns the multiplier applied to the base score plus card values.
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Flush => 4,
            Self::FullHouse | Self::ThreeOfAKind => 3,
            Self::TwoPair | Self::Pair => 2,
            Self::None => 0,
        }
    }

    /// Returns a display name for the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::Pair => "Pair",
            Self::None => "None",
        }
    }

    /// Checks the category against the selection.
    ///
    /// Returns the cards whose values count toward the score, or `None` if the
    /// selection is not of this category.
    fn scoring_cards(self, cards: &[Card], groups: &RankGroups) -> Option<Vec<Card>> {
        let matched = match self {
            Self::Flush => {
                cards.len() == FLUSH_SIZE && cards.iter().all(|c| c.suit == cards[0].suit)
            }
            Self::FullHouse => {
                groups.len() == 2 && groups.any_of_size(3) && groups.any_of_size(2)
            }
            Self::ThreeOfAKind => groups.any_of_size(3),
            Self::TwoPair => groups.count_of_size(2) == 2,
            Self::Pair => {
                let rank = groups.first_of_size(2)?;
                return Some(cards.iter().copied().filter(|c| c.rank == rank).collect());
            }
            Self::None => false,
        };

        matched.then(|| cards.to_vec())
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank counts of a selection, in the order each rank first appears.
struct RankGroups(Vec<(Rank, usize)>);

impl RankGroups {
    fn new(cards: &[Card]) -> Self {
        let mut groups: Vec<(Rank, usize)> = Vec::new();
        for card in cards {
            match groups.iter_mut().find(|(rank, _)| *rank == card.rank) {
                Some((_, count)) => *count += 1,
                None => groups.push((card.rank, 1)),
            }
        }
        Self(groups)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn any_of_size(&self, size: usize) -> bool {
        self.0.iter().any(|&(_, count)| count == size)
    }

    fn count_of_size(&self, size: usize) -> usize {
        self.0.iter().filter(|&&(_, count)| count == size).count()
    }

    fn first_of_size(&self, size: usize) -> Option<Rank> {
        self.0
            .iter()
            .find(|&&(_, count)| count == size)
            .map(|&(rank, _)| rank)
    }
}

/// Detailed result of scoring a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The matched category.
    pub category: Category,
    /// The cards whose values were summed.
    pub scoring_cards: Vec<Card>,
    /// Sum of the scoring cards' values.
    pub value_sum: u32,
    /// Final score.
    pub score: u32,
}

impl Evaluation {
    const fn none() -> Self {
        Self {
            category: Category::None,
            scoring_cards: Vec::new(),
            value_sum: 0,
            score: 0,
        }
    }
}

/// Classifies and scores a set of already selected cards.
///
/// ```
/// use handrs::{Card, Category, Rank, Suit, evaluate};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Three),
///     Card::new(Suit::Spades, Rank::Three),
/// ];
/// let evaluation = evaluate(&cards);
/// assert_eq!(evaluation.category, Category::Pair);
/// assert_eq!(evaluation.score, 18);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> Evaluation {
    if cards.len() < MIN_SCORING_CARDS {
        return Evaluation::none();
    }

    let groups = RankGroups::new(cards);

    let evaluation = CATEGORY_ORDER
        .into_iter()
        .find_map(|category| {
            category
                .scoring_cards(cards, &groups)
                .map(|scoring| (category, scoring))
        })
        .map_or_else(Evaluation::none, |(category, scoring_cards)| {
            let value_sum: u32 = scoring_cards.iter().map(|c| u32::from(c.value())).sum();
            let score = (category.base_score() + value_sum) * category.multiplier();
            Evaluation {
                category,
                scoring_cards,
                value_sum,
                score,
            }
        });

    tracing::trace!(
        cards = cards.len(),
        category = evaluation.category.name(),
        score = evaluation.score,
        "evaluated selection"
    );

    evaluation
}

/// Scores a set of already selected cards.
#[must_use]
pub fn score_cards(cards: &[Card]) -> u32 {
    evaluate(cards).score
}

/// Scores the selected cards of a hand.
///
/// Fewer than two selected cards always score zero.
///
/// ```
/// use handrs::{Card, Hand, HandCard, Rank, Suit, score};
///
/// let hand: Hand = [
///     HandCard::selected(Card::new(Suit::Hearts, Rank::Two)),
///     HandCard::selected(Card::new(Suit::Hearts, Rank::Five)),
///     HandCard::selected(Card::new(Suit::Hearts, Rank::Nine)),
///     HandCard::selected(Card::new(Suit::Hearts, Rank::Jack)),
///     HandCard::selected(Card::new(Suit::Hearts, Rank::King)),
///     HandCard::new(Card::new(Suit::Spades, Rank::Ace)),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(score(&hand), 220);
/// ```
#[must_use]
pub fn score(hand: &Hand) -> u32 {
    score_cards(&hand.selected_cards())
}
