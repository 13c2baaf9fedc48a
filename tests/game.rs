//! Game session integration tests.

use std::collections::HashSet;

use handrs::{
    ActionError, Card, Category, DEFAULT_HAND_SIZE, DECK_SIZE, DealError, Game, GameOptions,
    GameState, Hand, HandCard, PlayOutcome, Rank, Suit, score_cards,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const FIXED_HAND: [Card; 8] = [
    card(Suit::Hearts, Rank::Three),
    card(Suit::Spades, Rank::Three),
    card(Suit::Hearts, Rank::Five),
    card(Suit::Spades, Rank::Seven),
    card(Suit::Hearts, Rank::Nine),
    card(Suit::Spades, Rank::Jack),
    card(Suit::Hearts, Rank::Queen),
    card(Suit::Spades, Rank::King),
];

fn started_game(options: GameOptions, seed: u64) -> Game {
    let mut game = Game::new(options, seed);
    game.start().unwrap();
    game
}

fn set_hand(game: &mut Game, cards: &[Card]) {
    game.set_hand(Hand::from_cards(cards)).unwrap();
}

fn hand_cards(game: &Game) -> Vec<Card> {
    game.hand().cards().iter().map(|c| c.card).collect()
}

fn assert_distinct(cards: &[Card]) {
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), cards.len());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_size(6)
        .with_max_selected(3)
        .with_max_discards(1)
        .with_max_discard_selection(2)
        .with_hands_per_level(2)
        .with_max_levels(2)
        .with_base_required_score(100)
        .with_required_score_step(50);

    assert_eq!(options.hand_size, 6);
    assert_eq!(options.max_selected, 3);
    assert_eq!(options.max_discards, 1);
    assert_eq!(options.max_discard_selection, 2);
    assert_eq!(options.hands_per_level, 2);
    assert_eq!(options.max_levels, 2);
    assert_eq!(options.required_score(1), 100);
    assert_eq!(options.required_score(3), 200);
}

#[test]
fn actions_before_start_are_rejected() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.toggle(0).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.play_hand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.discard().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.next_level().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.score(), 0);
}

#[test]
fn start_deals_a_fresh_hand() {
    let game = started_game(GameOptions::default(), 5);

    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.level(), 1);
    assert_eq!(game.required_score(), 300);
    assert_eq!(game.hands_left(), 4);
    assert_eq!(game.discards_left(), 3);
    assert_eq!(game.hand().len(), DEFAULT_HAND_SIZE);
    assert_eq!(game.hand().selected_count(), 0);
    assert_distinct(&hand_cards(&game));
}

#[test]
fn same_seed_deals_same_hand() {
    let first = started_game(GameOptions::default(), 77);
    let second = started_game(GameOptions::default(), 77);
    assert_eq!(first.hand(), second.hand());
}

#[test]
fn start_fails_when_hand_exceeds_deck() {
    let mut game = Game::new(GameOptions::default().with_hand_size(DECK_SIZE + 4), 1);
    assert_eq!(
        game.start().unwrap_err(),
        ActionError::Deal(DealError::NotEnoughCards {
            requested: DECK_SIZE + 4,
            available: DECK_SIZE,
        })
    );
    assert_eq!(game.state(), GameState::NotStarted);
}

#[test]
fn selection_is_capped() {
    let mut game = started_game(GameOptions::default(), 2);

    for index in 0..5 {
        assert!(game.toggle(index).unwrap());
    }
    assert_eq!(game.toggle(5).unwrap_err(), ActionError::SelectionFull);

    assert!(!game.toggle(0).unwrap());
    assert!(game.toggle(5).unwrap());
    assert_eq!(game.hand().selected_count(), 5);

    assert_eq!(
        game.toggle(DEFAULT_HAND_SIZE).unwrap_err(),
        ActionError::CardNotFound
    );
}

#[test]
fn score_follows_selection() {
    let mut game = started_game(GameOptions::default(), 3);
    set_hand(&mut game, &FIXED_HAND);

    game.toggle(0).unwrap();
    assert_eq!(game.score(), 0);

    game.toggle(1).unwrap();
    assert_eq!(game.score(), 18);
    assert_eq!(game.evaluate().category, Category::Pair);

    game.toggle(4).unwrap();
    assert_eq!(game.score(), 18);
    assert_eq!(game.score(), score_cards(&game.hand().selected_cards()));

    game.toggle(0).unwrap();
    assert_eq!(game.score(), 0);
}

#[test]
fn play_requires_selection() {
    let mut game = started_game(GameOptions::default(), 4);
    assert_eq!(game.play_hand().unwrap_err(), ActionError::NothingSelected);
}

#[test]
fn play_replaces_played_cards_and_resets_discards() {
    let mut game = started_game(GameOptions::default(), 8);
    set_hand(&mut game, &FIXED_HAND);

    game.toggle(7).unwrap();
    game.discard().unwrap();
    assert_eq!(game.discards_used(), 1);
    let before = hand_cards(&game);

    game.toggle(0).unwrap();
    game.toggle(1).unwrap();
    let result = game.play_hand().unwrap();

    assert_eq!(result.outcome, PlayOutcome::Continue);
    assert_eq!(result.played, FIXED_HAND[..2].to_vec());
    assert_eq!(result.evaluation.score, 18);
    assert_eq!(result.level_score, 18);
    assert_eq!(result.total_score, 18);
    assert_eq!(result.required_score, 300);
    assert_eq!(result.hands_played, 1);

    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.level_score(), 18);
    assert_eq!(game.hands_left(), 3);
    assert_eq!(game.discards_used(), 0);

    let after = hand_cards(&game);
    assert_eq!(after.len(), DEFAULT_HAND_SIZE);
    assert_eq!(after[2..], before[2..]);
    assert_eq!(game.hand().selected_count(), 0);
    assert_distinct(&after);
}

#[test]
fn discard_limits() {
    let mut game = started_game(GameOptions::default(), 9);
    set_hand(&mut game, &FIXED_HAND);

    assert_eq!(game.discard().unwrap_err(), ActionError::NothingSelected);

    for index in 0..5 {
        game.toggle(index).unwrap();
    }
    assert_eq!(game.discard().unwrap_err(), ActionError::TooManyToDiscard);

    game.toggle(4).unwrap();
    let discarded = game.discard().unwrap();
    assert_eq!(discarded, FIXED_HAND[..4].to_vec());
    assert_eq!(game.hand().len(), DEFAULT_HAND_SIZE);
    assert_eq!(game.hand().selected_count(), 0);
    assert_eq!(&hand_cards(&game)[4..], &FIXED_HAND[4..]);
    assert_distinct(&hand_cards(&game));
    assert_eq!(game.discards_left(), 2);

    for _ in 0..2 {
        game.toggle(0).unwrap();
        game.discard().unwrap();
    }
    assert_eq!(game.discards_left(), 0);

    game.toggle(0).unwrap();
    assert_eq!(game.discard().unwrap_err(), ActionError::NoDiscardsLeft);
    assert_eq!(game.hands_played(), 0);
}

#[test]
fn running_out_of_hands_loses() {
    let options = GameOptions::default().with_base_required_score(10_000);
    let mut game = started_game(options, 10);

    for hand in 1..=4 {
        game.toggle(0).unwrap();
        let result = game.play_hand().unwrap();
        let expected = if hand < 4 {
            PlayOutcome::Continue
        } else {
            PlayOutcome::Lost
        };
        assert_eq!(result.outcome, expected);
    }

    assert_eq!(game.state(), GameState::Lost);
    assert!(game.state().is_over());
    assert_eq!(game.hands_left(), 0);
    assert_eq!(game.toggle(0).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.play_hand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn reaching_required_score_clears_level() {
    let options = GameOptions::default()
        .with_base_required_score(10)
        .with_required_score_step(100);
    let mut game = started_game(options, 11);
    set_hand(&mut game, &FIXED_HAND);

    game.toggle(0).unwrap();
    game.toggle(1).unwrap();
    let result = game.play_hand().unwrap();
    assert_eq!(result.outcome, PlayOutcome::LevelCleared);
    assert_eq!(game.state(), GameState::LevelCleared);
    assert_eq!(game.play_hand().unwrap_err(), ActionError::InvalidState);

    game.next_level().unwrap();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.level(), 2);
    assert_eq!(game.required_score(), 110);
    assert_eq!(game.level_score(), 0);
    assert_eq!(game.total_score(), 18);
    assert_eq!(game.hands_played(), 0);
    assert_eq!(game.discards_used(), 0);
    assert_eq!(game.hand().len(), DEFAULT_HAND_SIZE);
    assert_eq!(game.next_level().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn clearing_last_level_wins() {
    let options = GameOptions::default()
        .with_max_levels(1)
        .with_base_required_score(18);
    let mut game = started_game(options, 12);
    set_hand(&mut game, &FIXED_HAND);

    game.toggle(0).unwrap();
    game.toggle(1).unwrap();
    let result = game.play_hand().unwrap();
    assert_eq!(result.outcome, PlayOutcome::Won);
    assert_eq!(game.state(), GameState::Won);
    assert!(game.state().is_over());
    assert_eq!(game.next_level().unwrap_err(), ActionError::InvalidState);

    game.start().unwrap();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.total_score(), 0);
    assert_eq!(game.level(), 1);
}

#[test]
fn required_score_saturates() {
    let options = GameOptions::default().with_required_score_step(u32::MAX);
    assert_eq!(options.required_score(1), 300);
    assert_eq!(options.required_score(2), u32::MAX);

    let options = GameOptions::default().with_base_required_score(u32::MAX);
    assert_eq!(options.required_score(5), u32::MAX);

    let mut game = started_game(
        GameOptions::default()
            .with_base_required_score(u32::MAX - 1)
            .with_required_score_step(u32::MAX),
        13,
    );
    set_hand(&mut game, &FIXED_HAND);
    game.toggle(0).unwrap();
    game.toggle(1).unwrap();
    let result = game.play_hand().unwrap();
    assert_eq!(result.required_score, u32::MAX - 1);
    assert_eq!(result.outcome, PlayOutcome::Continue);
}

#[test]
fn clear_selection_deselects_all() {
    let mut game = started_game(GameOptions::default(), 14);
    set_hand(&mut game, &FIXED_HAND);

    game.toggle(2).unwrap();
    game.toggle(5).unwrap();
    assert!(game.hand().get(2).unwrap().selected);
    assert_eq!(game.hand().get(5).unwrap().card, FIXED_HAND[5]);

    game.clear_selection().unwrap();
    assert_eq!(game.hand().selected_count(), 0);
    assert!(!game.hand().get(2).unwrap().selected);
    assert!(game.hand().get(DEFAULT_HAND_SIZE).is_none());
    assert_eq!(hand_cards(&game), FIXED_HAND.to_vec());
    assert_eq!(game.score(), 0);
}

#[test]
fn clear_selection_needs_a_game_in_progress() {
    let mut game = Game::new(GameOptions::default(), 15);
    assert_eq!(game.clear_selection().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn set_hand_keeps_hand_invariants() {
    let mut game = Game::new(GameOptions::default(), 16);
    assert_eq!(
        game.set_hand(Hand::from_cards(&FIXED_HAND)).unwrap_err(),
        ActionError::InvalidState
    );

    game.start().unwrap();
    let before = game.hand().clone();

    let mut duplicated = FIXED_HAND;
    duplicated[7] = duplicated[0];
    assert_eq!(
        game.set_hand(Hand::from_cards(&duplicated)).unwrap_err(),
        ActionError::DuplicateCard
    );

    let oversized: Hand = FIXED_HAND.iter().copied().map(HandCard::selected).collect();
    assert_eq!(game.set_hand(oversized).unwrap_err(), ActionError::SelectionFull);
    assert_eq!(game.hand(), &before);

    game.set_hand(Hand::from_cards(&FIXED_HAND)).unwrap();
    assert_eq!(hand_cards(&game), FIXED_HAND.to_vec());
}
