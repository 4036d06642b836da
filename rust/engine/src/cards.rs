use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// One of the four suits. Suits only tell physical cards apart; they never
/// take part in legality or comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (♠)
    Spades,
    /// Hearts (♥)
    Hearts,
    /// Clubs (♣)
    Clubs,
    /// Diamonds (♦)
    Diamonds,
}

/// The fifteen ranks in playing strength order, from Three up to the red joker.
///
/// The discriminant is the rank value used for every comparison, so the
/// derived `Ord` agrees with the game's order. Ranks Three through Ace form
/// the straight range; Two and both jokers never take part in straights,
/// pair chains or airplane cores.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Three = 0,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    BlackJoker,
    RedJoker,
}

impl Rank {
    pub const COUNT: usize = 15;

    pub const ORDERED: [Rank; Rank::COUNT] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::BlackJoker,
        Rank::RedJoker,
    ];

    /// The thirteen ranks that come in four suits.
    pub const SUITED: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(value: u8) -> Option<Rank> {
        if (value as usize) < Rank::COUNT {
            Some(Rank::ORDERED[value as usize])
        } else {
            None
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::BlackJoker => 'B',
            Rank::RedJoker => 'R',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Rank, GameError> {
        Rank::ORDERED
            .iter()
            .copied()
            .find(|r| r.symbol() == symbol)
            .ok_or(GameError::InvalidRank(symbol))
    }

    /// The next lower rank, or `None` below Three.
    pub const fn before(self) -> Option<Rank> {
        match self.value() {
            0 => None,
            v => Rank::from_value(v - 1),
        }
    }

    /// The next higher rank, or `None` above the red joker.
    pub const fn after(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    pub const fn in_straight_range(self) -> bool {
        self.value() <= Rank::Ace.value()
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Rank {
    type Error = GameError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Rank::from_symbol(symbol)
    }
}

/// A physical card. Jokers have no suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Playing rank; the only field the rules look at
    pub rank: Rank,
    /// Suit for suited ranks, `None` for jokers
    pub suit: Option<Suit>,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card {
            rank,
            suit: Some(suit),
        }
    }

    pub const fn joker(rank: Rank) -> Self {
        Card { rank, suit: None }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(Suit::Spades) => write!(f, "{}s", self.rank),
            Some(Suit::Hearts) => write!(f, "{}h", self.rank),
            Some(Suit::Clubs) => write!(f, "{}c", self.rank),
            Some(Suit::Diamonds) => write!(f, "{}d", self.rank),
            None => write!(f, "{}", self.rank),
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(54);
    for &s in &all_suits() {
        for &r in &Rank::SUITED {
            v.push(Card::new(r, s));
        }
    }
    v.push(Card::joker(Rank::BlackJoker));
    v.push(Card::joker(Rank::RedJoker));
    v
}

/// Sorts cards by rank, then suit, the order a hand is displayed in.
pub fn sort_cards(cards: &mut [Card]) {
    cards.sort_unstable_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)));
}
