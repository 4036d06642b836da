use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::cards::{Card, Rank};
use crate::deck::PLAYERS;
use crate::rules::{LastPlay, TrickContext};

/// One turn in the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub player_id: usize,
    pub action: Action,
}

/// Turn bookkeeping for a deal: who played what, in order.
///
/// The trick never needs an explicit reset: once both other players pass,
/// the last player to play sees their own play as the last valid one and
/// leads again.
#[derive(Debug, Clone, Default)]
pub struct Round {
    trace: Vec<TraceEntry>,
    played: Vec<Card>,
    last_non_pass_player: Option<usize>,
    consecutive_passes: u32,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn. `cards` are the physical cards behind a play and are
    /// ignored for a pass.
    pub fn record_action(&mut self, player_id: usize, action: Action, cards: &[Card]) {
        if action.is_pass() {
            self.consecutive_passes += 1;
        } else {
            self.played.extend_from_slice(cards);
            self.consecutive_passes = 0;
            self.last_non_pass_player = Some(player_id);
        }
        self.trace.push(TraceEntry { player_id, action });
    }

    pub fn next_player(&self, current: usize) -> usize {
        (current + 1) % PLAYERS
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn played_cards(&self) -> &[Card] {
        &self.played
    }

    /// Ranks of every card played so far, ascending.
    pub fn played_ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.played.iter().map(|c| c.rank).collect();
        ranks.sort_unstable();
        ranks
    }
}

impl TrickContext for Round {
    fn last_valid_play(&self) -> Option<LastPlay> {
        let player_id = self.last_non_pass_player?;
        self.trace
            .iter()
            .rev()
            .find(|e| e.player_id == player_id && !e.action.is_pass())
            .map(|e| LastPlay {
                player_id,
                action: e.action.clone(),
            })
    }
}
