use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, Rank};
use crate::counts::RankCounts;
use crate::errors::GameError;

pub const PLAYERS: usize = 3;
pub const HAND_SIZE: usize = 17;
pub const KITTY_SIZE: usize = 3;
pub const DECK_SIZE: usize = PLAYERS * HAND_SIZE + KITTY_SIZE;

/// Result of a deal: three hands plus the face-up cards reserved for the
/// landlord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Vec<Card>; PLAYERS],
    pub kitty: Vec<Card>,
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals round-robin: card `i` goes to player `i % 3` for the first 51
    /// cards, the last three form the kitty.
    pub fn deal(&self) -> Result<Deal, GameError> {
        if self.cards.len() != DECK_SIZE {
            return Err(GameError::DeckExhausted {
                expected: DECK_SIZE,
                found: self.cards.len(),
            });
        }
        let mut hands: [Vec<Card>; PLAYERS] = Default::default();
        for (i, &card) in self.cards[..PLAYERS * HAND_SIZE].iter().enumerate() {
            hands[i % PLAYERS].push(card);
        }
        let kitty = self.cards[PLAYERS * HAND_SIZE..].to_vec();
        Ok(Deal { hands, kitty })
    }
}

/// Rough hand strength used to pick the landlord: high ranks and jokers
/// score per card, pairs/trios/fours score a bonus per rank.
pub fn hand_strength(counts: &RankCounts) -> u32 {
    let mut score = 0u32;
    for (rank, count) in counts.iter() {
        let per_card = match rank {
            Rank::RedJoker => 50,
            Rank::BlackJoker => 45,
            Rank::Two => 20,
            Rank::Ace => 12,
            Rank::King => 8,
            Rank::Queen => 6,
            Rank::Jack => 5,
            Rank::Ten => 4,
            _ => 1,
        };
        score += per_card * count as u32;
        score += match count {
            2 => 10,
            3 => 25,
            4 => 40,
            _ => 0,
        };
    }
    score
}

/// Index of the strongest hand; ties keep the lowest index.
pub fn determine_landlord(hands: &[Vec<Card>]) -> usize {
    let mut best = 0;
    let mut best_score = None;
    for (i, hand) in hands.iter().enumerate() {
        let score = hand_strength(&RankCounts::from_cards(hand));
        if best_score.map_or(true, |b| score > b) {
            best = i;
            best_score = Some(score);
        }
    }
    best
}
