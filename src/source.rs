// Inbound boundary. Whatever deals the cards (a shoe, a replay log, a test
// fixture) implements `CardSource` so hands can draw without knowing how
// cards are produced. Shuffling is the dealer's business, not ours.

use crate::cards::Card;

pub trait CardSource {
    /// Next card to deal, or `None` when the source is exhausted.
    fn next_card(&mut self) -> Option<Card>;
}

impl<I> CardSource for I
where
    I: Iterator<Item = Card>,
{
    fn next_card(&mut self) -> Option<Card> {
        self.next()
    }
}
