use std::collections::HashSet;

use landlord_engine::action::Action;
use landlord_engine::cards::{Card, Rank, Suit};
use landlord_engine::deck::{
    determine_landlord, hand_strength, Deck, DECK_SIZE, HAND_SIZE, KITTY_SIZE,
};

fn strength(s: &str) -> u32 {
    hand_strength(&s.parse::<Action>().unwrap().counts())
}

#[test]
fn deal_splits_deck_into_hands_and_kitty() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let deal = deck.deal().expect("deal ok");
    for hand in &deal.hands {
        assert_eq!(hand.len(), HAND_SIZE);
    }
    assert_eq!(deal.kitty.len(), KITTY_SIZE);

    let all: HashSet<Card> = deal
        .hands
        .iter()
        .flatten()
        .chain(deal.kitty.iter())
        .copied()
        .collect();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn deal_is_round_robin() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    let cards = deck.cards().to_vec();
    let deal = deck.deal().expect("deal ok");
    assert_eq!(deal.hands[0][0], cards[0]);
    assert_eq!(deal.hands[1][0], cards[1]);
    assert_eq!(deal.hands[2][0], cards[2]);
    assert_eq!(deal.hands[0][1], cards[3]);
    assert_eq!(deal.kitty, cards[51..].to_vec());
}

#[test]
fn same_seed_same_deal() {
    let mut a = Deck::new_with_seed(7);
    let mut b = Deck::new_with_seed(7);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.deal().unwrap(), b.deal().unwrap());

    let mut c = Deck::new_with_seed(8);
    c.shuffle();
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn successive_shuffles_differ() {
    let mut deck = Deck::new_with_seed(11);
    deck.shuffle();
    let first = deck.cards().to_vec();
    deck.shuffle();
    assert_ne!(first, deck.cards().to_vec());
    assert_eq!(deck.cards().len(), DECK_SIZE);
}

#[test]
fn strength_scores_high_cards_and_groups() {
    assert_eq!(strength("R"), 50);
    assert_eq!(strength("BR"), 95);
    assert_eq!(strength("22"), 50);
    assert_eq!(strength("333"), 28);
    assert_eq!(strength("3333"), 44);
    assert_eq!(strength("AKQJT"), 35);
    assert_eq!(strength(""), 0);
}

#[test]
fn strongest_hand_becomes_landlord() {
    let weak = vec![Card::new(Rank::Three, Suit::Spades)];
    let strong = vec![Card::joker(Rank::RedJoker)];
    assert_eq!(determine_landlord(&[weak.clone(), strong.clone(), weak.clone()]), 1);
    assert_eq!(determine_landlord(&[weak.clone(), weak.clone(), strong]), 2);
}

#[test]
fn landlord_ties_go_to_lowest_seat() {
    let a = vec![Card::new(Rank::Ace, Suit::Spades)];
    let b = vec![Card::new(Rank::Ace, Suit::Hearts)];
    assert_eq!(determine_landlord(&[a.clone(), b, a]), 0);
}
