use crate::hand::Hand;
use tracing::debug;

/// Credits every non-dealer seat starts with.
pub const STARTING_CREDITS: f64 = 100.0;

pub const DEALER_NAME: &str = "Dealer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Role {
    Player,
    /// Never bets; credits stay at zero.
    Dealer,
}

/// A seat at the table and the hands it is playing this round.
///
/// Hands are kept in the order bets were placed, so a hand's index is
/// stable for the round (split hands included). Placing a bet never
/// touches `credits`; settlement happens outside this crate through
/// [`Player::adjust_credits`].
///
/// ```
/// use blackjack_rs::player::{Player, STARTING_CREDITS};
///
/// let mut p = Player::new("Ana");
/// p.place_bet(10.0);
/// assert_eq!(p.hands().len(), 1);
/// assert_eq!(p.credits(), STARTING_CREDITS);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) role: Role,
    pub(crate) hands: Vec<Hand>,
    pub(crate) credits: f64,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Player,
            hands: Vec::new(),
            credits: STARTING_CREDITS,
        }
    }

    pub fn dealer() -> Self {
        Self {
            name: DEALER_NAME.to_string(),
            role: Role::Dealer,
            hands: Vec::new(),
            credits: 0.0,
        }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the hands in bet order
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns the current credit balance. May be negative; nothing here
    /// enforces a floor.
    pub fn credits(&self) -> f64 {
        self.credits
    }

    /// Apply a settlement result (winnings positive, losses negative).
    pub fn adjust_credits(&mut self, delta: f64) {
        self.credits += delta;
        debug!(player = %self.name, delta, credits = self.credits, "credits adjusted");
    }

    /// Sum of the bets on every hand this round.
    pub fn total_bet(&self) -> f64 {
        self.hands.iter().map(Hand::bet).sum()
    }

    /// Drop every hand from the previous round.
    pub fn reset_hands(&mut self) {
        debug!(player = %self.name, discarded = self.hands.len(), "hands reset");
        self.hands = Vec::new();
    }

    /// Open a new empty hand carrying `amount`. Credits are not deducted.
    pub fn place_bet(&mut self, amount: f64) {
        self.hands.push(Hand::new(amount));
        debug!(player = %self.name, bet = amount, hands = self.hands.len(), "bet placed");
    }
}
