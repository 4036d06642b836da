use landlord_engine::action::{Action, PASS};
use landlord_engine::cards::Rank;
use landlord_engine::errors::GameError;
use landlord_engine::pattern::Pattern;

#[test]
fn parse_sorts_into_canonical_form() {
    let a: Action = "K3T3".parse().unwrap();
    assert_eq!(a.to_string(), "33TK");
    assert_eq!(a.ranks(), &[Rank::Three, Rank::Three, Rank::Ten, Rank::King]);
    assert_eq!(a.len(), 4);
    assert_eq!(a, "3TK3".parse::<Action>().unwrap());
}

#[test]
fn pass_token() {
    let a: Action = PASS.parse().unwrap();
    assert!(a.is_pass());
    assert!(a.is_empty());
    assert_eq!(a.to_string(), "pass");
    assert_eq!(a.pattern(), Pattern::Invalid);
}

#[test]
fn rejects_unknown_symbols() {
    assert_eq!(
        "33X".parse::<Action>().unwrap_err(),
        GameError::InvalidRank('X')
    );
    assert!("Pass".parse::<Action>().is_err());
}

#[test]
fn builders_agree() {
    let cores = [Rank::Three, Rank::Four];
    assert_eq!(Action::repeated(&cores, 3).to_string(), "333444");
    assert_eq!(Action::play([Rank::Two, Rank::Ace]).to_string(), "A2");
    let a: Action = "5559".parse().unwrap();
    assert_eq!(Action::from_counts(&a.counts()), a);
}

#[test]
fn serializes_as_canonical_string() {
    let a: Action = "BR".parse().unwrap();
    assert_eq!(serde_json::to_string(&a).unwrap(), "\"BR\"");
    assert_eq!(serde_json::to_string(&Action::Pass).unwrap(), "\"pass\"");
    let back: Action = serde_json::from_str("\"9555\"").unwrap();
    assert_eq!(back.to_string(), "5559");
    assert!(serde_json::from_str::<Action>("\"55Z\"").is_err());
}

#[test]
fn plays_are_canonical_however_built() {
    let built = Action::play([Rank::Five, Rank::Three, Rank::Five]);
    assert_eq!(built, "355".parse::<Action>().unwrap());
    match &built {
        Action::Play(ranks) => {
            assert_eq!(ranks.as_slice(), &[Rank::Three, Rank::Five, Rank::Five])
        }
        Action::Pass => panic!("expected a play"),
    }
}
