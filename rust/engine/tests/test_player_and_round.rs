use landlord_engine::action::Action;
use landlord_engine::cards::{Card, Rank, Suit};
use landlord_engine::errors::GameError;
use landlord_engine::game::{is_game_over, payoff, winner};
use landlord_engine::player::{Player, Role};
use landlord_engine::round::Round;
use landlord_engine::rules::TrickContext;

fn sample_player() -> Player {
    let mut p = Player::new(1);
    p.set_hand(vec![
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::Five, Suit::Hearts),
        Card::joker(Rank::BlackJoker),
        Card::new(Rank::Five, Suit::Spades),
        Card::new(Rank::Nine, Suit::Diamonds),
    ]);
    p
}

#[test]
fn hand_is_kept_sorted() {
    let mut p = sample_player();
    assert_eq!(p.hand_string(), "559KB");
    assert_eq!(p.hand()[0], Card::new(Rank::Five, Suit::Spades));
    p.add_cards(&[Card::new(Rank::Three, Suit::Clubs)]);
    assert_eq!(p.hand_string(), "3559KB");
    assert_eq!(p.counts().get(Rank::Five), 2);
}

#[test]
fn roles() {
    let mut p = Player::new(0);
    assert_eq!(p.role(), Role::Peasant);
    p.set_role(Role::Landlord);
    assert_eq!(p.role(), Role::Landlord);
    assert_eq!(p.role().to_string(), "landlord");
    assert_eq!(serde_json::to_string(&Role::Peasant).unwrap(), "\"peasant\"");
}

#[test]
fn remove_action_takes_matching_cards() {
    let mut p = sample_player();
    let removed = p.remove_action(&"55".parse().unwrap()).expect("has pair");
    assert_eq!(removed.len(), 2);
    assert!(removed.iter().all(|c| c.rank == Rank::Five));
    assert_eq!(p.hand_string(), "9KB");

    assert!(p.remove_action(&Action::Pass).unwrap().is_empty());
    assert_eq!(p.hand().len(), 3);
}

#[test]
fn remove_action_is_all_or_nothing() {
    let mut p = sample_player();
    let err = p.remove_action(&"555".parse().unwrap()).unwrap_err();
    assert_eq!(err, GameError::CardNotInHand(Rank::Five));
    assert_eq!(p.hand_string(), "559KB");

    let err = p.cards_for_action(&"9R".parse().unwrap()).unwrap_err();
    assert_eq!(err, GameError::CardNotInHand(Rank::RedJoker));
}

#[test]
fn round_records_trace_and_played_cards() {
    let mut round = Round::new();
    assert!(round.last_valid_play().is_none());

    let cards = [
        Card::new(Rank::Eight, Suit::Spades),
        Card::new(Rank::Eight, Suit::Hearts),
    ];
    round.record_action(2, "88".parse().unwrap(), &cards);
    round.record_action(0, Action::Pass, &[]);
    assert_eq!(round.consecutive_passes(), 1);
    assert_eq!(round.trace().len(), 2);
    assert_eq!(round.played_cards(), &cards);
    assert_eq!(round.played_ranks(), vec![Rank::Eight, Rank::Eight]);

    let last = round.last_valid_play().expect("a play was made");
    assert_eq!(last.player_id, 2);
    assert_eq!(last.action.to_string(), "88");

    round.record_action(1, "9".parse().unwrap(), &[Card::new(Rank::Nine, Suit::Clubs)]);
    assert_eq!(round.consecutive_passes(), 0);
    assert_eq!(round.last_valid_play().map(|l| l.player_id), Some(1));
    assert_eq!(round.played_ranks(), vec![Rank::Eight, Rank::Eight, Rank::Nine]);
}

#[test]
fn turn_order_wraps() {
    let round = Round::new();
    assert_eq!(round.next_player(0), 1);
    assert_eq!(round.next_player(1), 2);
    assert_eq!(round.next_player(2), 0);
}

#[test]
fn deal_ends_when_a_hand_empties() {
    let mut players = [Player::new(0), Player::new(1), Player::new(2)];
    for p in players.iter_mut() {
        p.set_hand(vec![Card::new(Rank::Four, Suit::Spades)]);
    }
    assert!(!is_game_over(&players));
    assert_eq!(winner(&players), None);

    players[2]
        .remove_action(&"4".parse().unwrap())
        .expect("holds a four");
    assert!(is_game_over(&players));
    assert_eq!(winner(&players), Some(2));
}

#[test]
fn payoff_per_side() {
    assert_eq!(payoff(0, 0), [1, 0, 0]);
    assert_eq!(payoff(1, 0), [0, 1, 1]);
    assert_eq!(payoff(2, 1), [1, 0, 1]);
}
