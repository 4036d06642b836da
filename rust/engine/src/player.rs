use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::cards::{sort_cards, Card};
use crate::counts::RankCounts;
use crate::errors::GameError;

/// Side a player is on for the deal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Plays alone and receives the kitty
    Landlord,
    /// One of the two players allied against the landlord
    #[default]
    Peasant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Landlord => f.write_str("landlord"),
            Role::Peasant => f.write_str("peasant"),
        }
    }
}

/// A seat at the table and the cards it holds.
/// The hand is kept sorted by rank, then suit.
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat index (0, 1 or 2)
    id: usize,
    /// Cards currently held
    hand: Vec<Card>,
    /// Landlord or peasant
    role: Role,
}

impl Player {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            hand: Vec::new(),
            role: Role::Peasant,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn set_hand(&mut self, cards: Vec<Card>) {
        self.hand = cards;
        sort_cards(&mut self.hand);
    }

    pub fn add_cards(&mut self, cards: &[Card]) {
        self.hand.extend_from_slice(cards);
        sort_cards(&mut self.hand);
    }

    pub fn counts(&self) -> RankCounts {
        RankCounts::from_cards(&self.hand)
    }

    /// Compact rank string of the hand, e.g. `"33579TTKB"`.
    pub fn hand_string(&self) -> String {
        self.hand.iter().map(|c| c.rank.symbol()).collect()
    }

    /// Picks concrete cards realizing `action`. A pass picks nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CardNotInHand`] with the first rank the hand
    /// cannot supply often enough.
    pub fn cards_for_action(&self, action: &Action) -> Result<Vec<Card>, GameError> {
        let mut available = self.hand.clone();
        let mut picked = Vec::with_capacity(action.len());
        for &rank in action.ranks() {
            let idx = available
                .iter()
                .position(|c| c.rank == rank)
                .ok_or(GameError::CardNotInHand(rank))?;
            picked.push(available.remove(idx));
        }
        Ok(picked)
    }

    /// Removes the cards of `action` from the hand and returns them. Nothing
    /// is removed when the hand cannot realize the whole action.
    pub fn remove_action(&mut self, action: &Action) -> Result<Vec<Card>, GameError> {
        let picked = self.cards_for_action(action)?;
        for card in &picked {
            if let Some(idx) = self.hand.iter().position(|c| c == card) {
                self.hand.remove(idx);
            }
        }
        Ok(picked)
    }
}
