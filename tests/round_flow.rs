use blackjack_rs::cards::{parse_cards, Card};
use blackjack_rs::hand::Hand;
use blackjack_rs::player::Player;
use blackjack_rs::render;

fn shoe(cards: &str) -> std::vec::IntoIter<Card> {
    parse_cards(cards).unwrap().into_iter()
}

#[test]
fn dealer_hole_card_stays_hidden_until_revealed() {
    let mut player = Player::new("Ana");
    let mut dealer = Player::dealer();
    // player, dealer up, player, dealer hole
    let mut shoe = shoe("9c Ah 8d ?Kc");

    player.reset_hands();
    dealer.reset_hands();
    player.place_bet(10.0);
    dealer.place_bet(0.0);

    player.hand_mut(0).unwrap().hit_from(&mut shoe).unwrap();
    dealer.hand_mut(0).unwrap().hit_from(&mut shoe).unwrap();
    player.hand_mut(0).unwrap().hit_from(&mut shoe).unwrap();
    dealer.hand_mut(0).unwrap().hit_from(&mut shoe).unwrap();

    let up = &dealer.hands()[0];
    assert_eq!(up.calculate(), (11, true));
    assert!(!up.is_blackjack());
    assert_eq!(render::hand(up), "Ace of Hearts, Hidden. 11 (Soft)");

    player.hand_mut(0).unwrap().stand();
    assert_eq!(player.hands()[0].value(), 17);

    let dealer_hand = dealer.hand_mut(0).unwrap();
    dealer_hand.reveal_all();
    assert!(dealer_hand.is_blackjack());
    assert_eq!(render::hand(dealer_hand), "Ace of Hearts, King of Clubs. 21 (Soft)");

    // settlement is the caller's: the player loses the stake
    let stake = player.total_bet();
    player.adjust_credits(-stake);
    assert_eq!(player.credits(), 90.0);
    assert_eq!(dealer.credits(), 0.0);
}

#[test]
fn split_hands_keep_bet_order() {
    let mut player = Player::new("Ana");
    player.place_bet(10.0);
    let mut shoe = shoe("8h 8s 3c Td");
    {
        let h = player.hand_mut(0).unwrap();
        h.hit_from(&mut shoe);
        h.hit_from(&mut shoe);
        assert!(h.can_split());
    }

    // orchestrator performs the split: move the second card to a new hand
    let moved = {
        let first = player.hand(0).unwrap();
        first.cards()[1]
    };
    let mut rebuilt = Hand::new(10.0);
    rebuilt.add_card(player.hand(0).unwrap().cards()[0]);
    player.hands_mut()[0] = rebuilt;
    player.place_bet(10.0);
    player.hand_mut(1).unwrap().add_card(moved);

    player.hand_mut(0).unwrap().hit_from(&mut shoe);
    player.hand_mut(1).unwrap().hit_from(&mut shoe);

    assert_eq!(player.hands().len(), 2);
    assert_eq!(player.hands()[0].value(), 11);
    assert_eq!(player.hands()[1].value(), 18);
    assert_eq!(player.total_bet(), 20.0);
}

#[test]
fn busting_hand_is_reported_to_caller() {
    let mut player = Player::new("Bo");
    player.place_bet(5.0);
    let h = player.hand_mut(0).unwrap();
    for c in parse_cards("Kh 6d 9s").unwrap() {
        h.hit(c);
    }
    assert_eq!(h.value(), 25);
    assert!(h.is_bust());
    assert_eq!(render::hand(h), "King of Hearts, Six of Diamonds, Nine of Spades. 25");
    assert_eq!(render::player(&player), "Bo");
}

#[test]
fn new_round_discards_previous_hands() {
    let mut player = Player::new("Cy");
    player.place_bet(5.0);
    player.place_bet(5.0);
    player.hand_mut(1).unwrap().stand();

    player.reset_hands();
    player.place_bet(10.0);

    assert_eq!(player.hands().len(), 1);
    let h = &player.hands()[0];
    assert_eq!(h.bet(), 10.0);
    assert!(h.is_empty());
    assert!(!h.is_locked());
}
