use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::counts::RankCounts;
use crate::errors::GameError;
use crate::pattern::{classify, Pattern};

/// Literal token for declining to play.
pub const PASS: &str = "pass";

/// A move: either a pass or a multiset of ranks taken from a hand.
///
/// `Play` always holds its ranks in canonical order (ascending by rank
/// value), so two actions compare equal exactly when their multisets do.
/// Build plays through [`Action::play`] or [`Action::from_counts`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Action {
    Pass,
    Play(Ranks),
}

/// Ranks of a play, sorted ascending. Only [`Action`]'s constructors can
/// build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ranks(Vec<Rank>);

impl Ranks {
    pub fn as_slice(&self) -> &[Rank] {
        &self.0
    }
}

impl Action {
    pub fn play<I: IntoIterator<Item = Rank>>(ranks: I) -> Self {
        let mut ranks: Vec<Rank> = ranks.into_iter().collect();
        ranks.sort_unstable();
        Action::Play(Ranks(ranks))
    }

    pub fn from_counts(counts: &RankCounts) -> Self {
        Action::Play(Ranks(counts.to_ranks()))
    }

    /// `n` copies of each rank in `ranks`, e.g. the trios of an airplane core.
    pub fn repeated(ranks: &[Rank], n: u8) -> Self {
        Action::from_counts(&RankCounts::repeated(ranks, n))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }

    pub fn ranks(&self) -> &[Rank] {
        match self {
            Action::Pass => &[],
            Action::Play(ranks) => ranks.as_slice(),
        }
    }

    /// Number of cards played; a pass plays none.
    pub fn len(&self) -> usize {
        self.ranks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks().is_empty()
    }

    pub fn counts(&self) -> RankCounts {
        RankCounts::from_ranks(self.ranks().iter().copied())
    }

    pub fn pattern(&self) -> Pattern {
        classify(self)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pass => f.write_str(PASS),
            Action::Play(ranks) => {
                for r in ranks.as_slice() {
                    write!(f, "{}", r)?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Action {
    type Err = GameError;

    /// Parses a compact rank string in any order, or the `pass` token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == PASS {
            return Ok(Action::Pass);
        }
        let ranks = s
            .chars()
            .map(Rank::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Action::play(ranks))
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

impl TryFrom<String> for Action {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
