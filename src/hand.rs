use crate::cards::Card;
use crate::source::CardSource;
use crate::BLACKJACK;
use tracing::{debug, trace};

/// One betting position: the cards dealt to it, the stake riding on it and
/// whether play on it has finished.
///
/// Scoring borrows the hand immutably and recomputes from scratch on every
/// call, so revealing a face-down card is reflected by the next query.
///
/// ```
/// use blackjack_rs::cards::{Card, Rank, Suit};
/// use blackjack_rs::hand::Hand;
///
/// let mut hand = Hand::new(5.0);
/// hand.add_card(Card::new(Rank::Ace, Suit::Clubs));
/// hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
/// assert_eq!(hand.value(), 12);
/// assert!(hand.is_soft());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hand {
    cards: Vec<Card>,
    bet: f64,
    locked: bool,
}

impl Hand {
    /// An empty, unlocked hand carrying `bet`.
    pub fn new(bet: f64) -> Self {
        Self { cards: Vec::new(), bet, locked: false }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn bet(&self) -> f64 {
        self.bet
    }

    /// True once the hand has stood; callers must not hit a locked hand.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Score the face-up cards, returning `(total, soft)`.
    ///
    /// Single left-to-right pass. An ace counts 11 unless that would pass
    /// 21. After each card, a total over 21 with a soft ace in play demotes
    /// that ace to 1. The correction runs once per card, never across
    /// earlier aces, which is what makes two aces score a soft 12.
    /// Face-down cards are skipped and do not touch the soft flag.
    pub fn calculate(&self) -> (u32, bool) {
        let mut total = 0;
        let mut soft = false;

        for card in self.cards.iter().filter(|c| c.is_face_up()) {
            let rank = card.rank();
            if rank.is_ace() {
                if total + rank.points() > BLACKJACK {
                    total += 1;
                } else {
                    total += rank.points();
                    soft = true;
                }
            } else {
                total += rank.points();
            }

            if total > BLACKJACK && soft {
                total -= 10;
                soft = false;
            }
        }

        (total, soft)
    }

    pub fn value(&self) -> u32 {
        self.calculate().0
    }

    pub fn is_soft(&self) -> bool {
        self.calculate().1
    }

    /// Exactly two cards totalling 21. A face-down card contributes
    /// nothing, so a hand with its hole card hidden never qualifies.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Two cards of the same rank. Ten and King do not pair.
    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank() == b.rank())
    }

    /// Append a card. Does not check the lock; that is the caller's job.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append a card and hand it back for display. Same precondition as
    /// [`Hand::add_card`].
    pub fn hit(&mut self, card: Card) -> Card {
        self.cards.push(card);
        trace!(card = ?card, cards = self.cards.len(), "hit");
        card
    }

    /// Draw from `source` and hit with it. `None` leaves the hand untouched.
    pub fn hit_from<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Option<Card> {
        let card = source.next_card()?;
        Some(self.hit(card))
    }

    /// Lock the hand. Calling it again is a no-op.
    pub fn stand(&mut self) {
        if !self.locked {
            debug!(value = self.value(), bet = self.bet, "stand");
        }
        self.locked = true;
    }

    /// Turn every face-down card up, e.g. the dealer's hole card.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
        debug!(value = self.value(), soft = self.is_soft(), "hand revealed");
    }
}
