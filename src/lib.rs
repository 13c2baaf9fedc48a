//! A poker-hand scoring engine and headless card game session with optional
//! `no_std` support.
//!
//! The core is [`score`]: it classifies the selected cards of a [`Hand`] into a
//! [`Category`] and turns it into an integer score. [`create_deck`] and
//! [`deal_hand`] produce the hands it scores, and [`Game`] drives levels,
//! played hands and discards on top of both.
//!
//! # Example
//!
//! ```
//! use handrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start().unwrap();
//! game.toggle(0).unwrap();
//! game.toggle(1).unwrap();
//! let _ = game.score();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::{DEFAULT_HAND_SIZE, create_deck, deal_hand, deal_hand_seeded};
pub use error::{ActionError, CardError, DealError};
pub use game::{Game, GameState};
pub use hand::{Hand, HandCard};
pub use options::GameOptions;
pub use result::{PlayOutcome, PlayResult};
pub use score::{CATEGORY_ORDER, Category, Evaluation, evaluate, score, score_cards};
