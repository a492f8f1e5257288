//! Text rendering for cards, hands and seats.
//!
//! Kept apart from the domain types so scoring code carries no formatting.
//! The hand format is stable and byte-exact: cards joined by `", "`, then
//! `". "`, the value, and ` (Soft)` when an ace is counting 11.

use crate::cards::Card;
use crate::hand::Hand;
use crate::player::Player;

/// Placeholder shown for a face-down card.
pub const HIDDEN: &str = "Hidden";

/// ```
/// use blackjack_rs::cards::{Card, Rank, Suit};
///
/// assert_eq!(blackjack_rs::render::card(&Card::new(Rank::Queen, Suit::Hearts)), "Queen of Hearts");
/// assert_eq!(blackjack_rs::render::card(&Card::face_down(Rank::Queen, Suit::Hearts)), "Hidden");
/// ```
pub fn card(card: &Card) -> String {
    if card.is_face_up() {
        format!("{} of {}", card.rank(), card.suit())
    } else {
        HIDDEN.to_string()
    }
}

pub fn hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(card).collect();
    let (value, soft) = hand.calculate();
    let mut out = format!("{}. {}", cards.join(", "), value);
    if soft {
        out.push_str(" (Soft)");
    }
    out
}

pub fn player(player: &Player) -> &str {
    player.name()
}
