use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::cards::{sort_cards, Card};
use crate::config::EngineConfig;
use crate::deck::{determine_landlord, Deck, PLAYERS};
use crate::errors::GameError;
use crate::game::{is_game_over, payoff, winner};
use crate::player::{Player, Role};
use crate::round::{Round, TraceEntry};
use crate::rules::{legal_actions, validate_action};

/// Shuffle seed used when the configuration leaves it unset.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// What a strategy sees when asked for a move.
#[derive(Debug, Clone)]
pub struct TurnState<'a> {
    pub player_id: usize,
    pub landlord_id: usize,
    pub hand: &'a [Card],
    /// Compact rank string of both opponents' cards combined, ascending
    pub others_hand: String,
    /// Ordered legal moves; the choice should be one of these
    pub legal_actions: &'a [Action],
    pub trace: &'a [TraceEntry],
    /// Every card played so far in the deal
    pub played_cards: &'a [Card],
    pub kitty: &'a [Card],
}

/// Decision step plugged into the turn loop.
pub trait Strategy {
    fn select_action(&mut self, state: &TurnState<'_>) -> Action;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player_id: usize,
    pub action: Action,
    /// The strategy's choice was illegal and the first legal move was used
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Option<usize>,
    pub landlord_id: usize,
    /// `None` when the turn cap stopped the deal before anyone went out
    pub payoff: Option<[u32; PLAYERS]>,
    pub turns: u32,
    pub trace: Vec<TraceEntry>,
}

/// Drives one deal for three players: shuffle, deal, landlord selection and
/// the turn loop.
///
/// # Examples
///
/// ```
/// use landlord_engine::engine::Engine;
///
/// let mut engine = Engine::with_seed(7);
/// let landlord = engine.setup().expect("deal");
///
/// // The landlord leads with the kitty in hand
/// assert_eq!(engine.current_player(), landlord);
/// assert_eq!(engine.players()[landlord].hand().len(), 20);
/// assert!(!engine.legal_actions().is_empty());
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    seed: u64,
    deck: Deck,
    players: [Player; PLAYERS],
    round: Round,
    kitty: Vec<Card>,
    initial_hands: [String; PLAYERS],
    landlord_id: Option<usize>,
    current: usize,
    turns: u32,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        Self {
            config,
            seed,
            deck: Deck::new_with_seed(seed),
            players: [Player::new(0), Player::new(1), Player::new(2)],
            round: Round::new(),
            kitty: Vec::new(),
            initial_hands: Default::default(),
            landlord_id: None,
            current: 0,
            turns: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    /// Seed the deck was built with, including the default fallback.
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn players(&self) -> &[Player; PLAYERS] {
        &self.players
    }
    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn kitty(&self) -> &[Card] {
        &self.kitty
    }
    pub fn landlord_id(&self) -> Option<usize> {
        self.landlord_id
    }
    pub fn current_player(&self) -> usize {
        self.current
    }
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Hands as dealt, after the landlord took the kitty.
    pub fn initial_hands(&self) -> &[String; PLAYERS] {
        &self.initial_hands
    }

    /// Shuffles, deals, hands the kitty to the strongest hand and makes it
    /// the first to act. Returns the landlord's id.
    pub fn setup(&mut self) -> Result<usize, GameError> {
        self.deck.shuffle();
        let deal = self.deck.deal()?;
        let landlord = determine_landlord(&deal.hands);

        for (player, hand) in self.players.iter_mut().zip(deal.hands) {
            player.set_hand(hand);
            player.set_role(Role::Peasant);
        }
        self.players[landlord].add_cards(&deal.kitty);
        self.players[landlord].set_role(Role::Landlord);

        self.initial_hands = [0, 1, 2].map(|i| self.players[i].hand_string());
        self.kitty = deal.kitty;
        self.round = Round::new();
        self.landlord_id = Some(landlord);
        self.current = landlord;
        self.turns = 0;

        info!(landlord, seed = self.seed, "deal ready");
        Ok(landlord)
    }

    /// Legal moves for the player to act.
    pub fn legal_actions(&self) -> Vec<Action> {
        legal_actions(self.players[self.current].hand(), &self.round, self.current)
    }

    /// Asks `strategy` for the current player's move and applies it. An
    /// illegal choice is replaced by the first legal move.
    pub fn play_turn(&mut self, strategy: &mut dyn Strategy) -> Result<TurnOutcome, GameError> {
        let landlord_id = self.landlord_id.ok_or(GameError::NoDealInProgress)?;
        if is_game_over(&self.players) {
            return Err(GameError::GameOver);
        }

        let player_id = self.current;
        let legal = self.legal_actions();
        let state = TurnState {
            player_id,
            landlord_id,
            hand: self.players[player_id].hand(),
            others_hand: self.others_hand(player_id),
            legal_actions: &legal,
            trace: self.round.trace(),
            played_cards: self.round.played_cards(),
            kitty: &self.kitty,
        };
        let chosen = strategy.select_action(&state);

        let (action, fallback) = if legal.contains(&chosen) {
            (chosen, false)
        } else {
            let first = legal.first().cloned().unwrap_or(Action::Pass);
            warn!(player_id, chosen = %chosen, fallback = %first, "illegal action replaced");
            (first, true)
        };

        self.apply(player_id, action.clone())?;
        Ok(TurnOutcome {
            player_id,
            action,
            fallback,
        })
    }

    /// Applies `action` for `player_id` after checking turn order and
    /// legality.
    pub fn play_action(&mut self, player_id: usize, action: &Action) -> Result<(), GameError> {
        self.landlord_id.ok_or(GameError::NoDealInProgress)?;
        if player_id >= PLAYERS {
            return Err(GameError::InvalidPlayer(player_id));
        }
        if is_game_over(&self.players) {
            return Err(GameError::GameOver);
        }
        if player_id != self.current {
            return Err(GameError::NotPlayersTurn {
                expected: self.current,
                actual: player_id,
            });
        }
        let action = validate_action(self.players[player_id].hand(), &self.round, player_id, action)?;
        self.apply(player_id, action)
    }

    /// Cards held by everyone but `player_id`, as one sorted rank string.
    fn others_hand(&self, player_id: usize) -> String {
        let mut cards: Vec<Card> = self
            .players
            .iter()
            .filter(|p| p.id() != player_id)
            .flat_map(|p| p.hand().iter().copied())
            .collect();
        sort_cards(&mut cards);
        cards.iter().map(|c| c.rank.symbol()).collect()
    }

    fn apply(&mut self, player_id: usize, action: Action) -> Result<(), GameError> {
        let cards = self.players[player_id].remove_action(&action)?;
        debug!(player_id, action = %action, remaining = self.players[player_id].hand().len(), "turn applied");
        self.round.record_action(player_id, action, &cards);
        self.turns += 1;
        if !is_game_over(&self.players) {
            self.current = self.round.next_player(player_id);
        }
        Ok(())
    }

    /// Plays turns until someone goes out or the turn cap is hit.
    /// `strategies[i]` decides for player `i`.
    pub fn run(
        &mut self,
        strategies: &mut [&mut dyn Strategy; PLAYERS],
    ) -> Result<GameOutcome, GameError> {
        let landlord_id = self.landlord_id.ok_or(GameError::NoDealInProgress)?;
        while !is_game_over(&self.players) {
            if self.turns >= self.config.max_turns {
                warn!(turns = self.turns, "turn cap reached, stopping deal");
                break;
            }
            let current = self.current;
            self.play_turn(&mut *strategies[current])?;
        }

        let winner = winner(&self.players);
        let payoff = winner.map(|w| payoff(w, landlord_id));
        info!(?winner, landlord_id, turns = self.turns, "deal finished");
        Ok(GameOutcome {
            winner,
            landlord_id,
            payoff,
            turns: self.turns,
            trace: self.round.trace().to_vec(),
        })
    }
}
