//! blackjack-rs: Blackjack rules core
//!
//! Goals:
//! - Exact hand scoring with soft/hard ace handling
//! - Face-down cards never leak into a total until revealed
//! - Seat bookkeeping (hands, bets, credits) with no I/O and no hidden state
//!
//! Dealing, shuffling, round orchestration and settlement are left to the
//! caller; this crate only consumes `Card`s and exposes `Hand`/`Player` state.
//!
//! ## Quick start: score a hand
//! ```
//! use blackjack_rs::cards::{Card, Rank, Suit};
//! use blackjack_rs::hand::Hand;
//! use blackjack_rs::render;
//!
//! let mut hand = Hand::new(10.0);
//! hand.hit(Card::new(Rank::Ace, Suit::Spades));
//! hand.hit(Card::new(Rank::King, Suit::Hearts));
//!
//! assert_eq!(hand.calculate(), (21, true));
//! assert!(hand.is_blackjack());
//! assert_eq!(render::hand(&hand), "Ace of Spades, King of Hearts. 21 (Soft)");
//! ```
//!
//! ## Logging
//! Mutations emit `tracing` events. Enable the `logging` feature and call
//! [`logging::init`] to print them:
//! ```sh
//! RUST_LOG=blackjack_rs=debug cargo test --features logging
//! ```

pub mod cards;
pub mod hand;
#[cfg(feature = "logging")]
pub mod logging;
pub mod player;
pub mod render;
pub mod source;

/// Best possible total; a two-card hand reaching it is a blackjack.
pub const BLACKJACK: u32 = 21;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
