use thiserror::Error;

use crate::cards::Rank;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid rank symbol: {0:?}")]
    InvalidRank(char),
    #[error("Card not in hand: {0}")]
    CardNotInHand(Rank),
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Illegal action {action} for player {player}")]
    IllegalAction { player: usize, action: String },
    #[error("Invalid player id: {0}")]
    InvalidPlayer(usize),
    #[error("Deck exhausted: expected {expected} cards, found {found}")]
    DeckExhausted { expected: usize, found: usize },
    #[error("No deal in progress")]
    NoDealInProgress,
    #[error("Game already over")]
    GameOver,
}
