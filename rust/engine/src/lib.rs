//! # landlord-engine: Rules and Move Engine for Three-Player Landlord
//!
//! A deterministic rules engine for the three-player shedding game
//! (Dou Dizhu). It classifies any play into one of the fixed combination
//! types and enumerates every legal move for a hand, given the last play
//! of the trick.
//!
//! ## Core Modules
//!
//! - [`cards`] - Rank order (3 through A, 2, black and red joker), suits, cards
//! - [`counts`] - Rank multisets and index-based combination selection
//! - [`action`] - Canonical actions and their compact string form
//! - [`pattern`] - Pattern classification and comparison
//! - [`runs`] - Straights, pair chains, airplanes, attachments, bombs
//! - [`ordering`] - Deduplication and presentation order of actions
//! - [`rules`] - Legal move generation for leading and following
//!
//! ## Game Collaborators
//!
//! - [`deck`] - Seeded shuffle, dealing and landlord selection
//! - [`player`] - Player hands and roles
//! - [`round`] - Turn trace and the last valid play
//! - [`game`] - End of deal and payoff
//! - [`engine`] - Turn loop driving pluggable strategies
//! - [`logger`] - Game records as JSON lines
//! - [`config`] - Engine settings from TOML and the environment
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use landlord_engine::action::Action;
//! use landlord_engine::pattern::{classify, Pattern};
//! use landlord_engine::cards::Rank;
//!
//! let action: Action = "9555".parse().unwrap();
//! assert_eq!(action.to_string(), "5559");
//! assert_eq!(classify(&action), Pattern::TrioSingle { rank: Rank::Five });
//!
//! let rocket: Action = "BR".parse().unwrap();
//! assert!(classify(&rocket).is_rocket());
//! ```
//!
//! ## Legal Moves
//!
//! ```rust
//! use landlord_engine::cards::{Card, Rank, Suit};
//! use landlord_engine::rules::{legal_actions, LastPlay};
//!
//! let hand = vec![
//!     Card::new(Rank::Seven, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Clubs),
//! ];
//!
//! // Following a pair of eights played by player 1
//! let last = Some(LastPlay { player_id: 1, action: "88".parse().unwrap() });
//! let moves: Vec<String> = legal_actions(&hand, &last, 0)
//!     .iter()
//!     .map(|a| a.to_string())
//!     .collect();
//! assert_eq!(moves, vec!["pass", "KK"]);
//! ```

pub mod action;
pub mod cards;
pub mod config;
pub mod counts;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod ordering;
pub mod pattern;
pub mod player;
pub mod round;
pub mod rules;
pub mod runs;
