use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::cards::Rank;
use crate::counts::RankCounts;
use crate::runs::{airplane_cores, is_valid_attachment, Attachment};

/// `main_value` of a rocket; above every bomb.
pub const ROCKET_VALUE: i32 = 999;
/// `main_value` of an invalid action; below every real rank.
pub const INVALID_VALUE: i32 = -1;

/// Shape of a pattern without its comparison data.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Invalid,
    Solo,
    Pair,
    Trio,
    TrioSingle,
    TrioPair,
    Straight,
    PairChain,
    Airplane,
    AirplaneSingle,
    AirplanePair,
    FourTwoSingle,
    FourTwoPair,
    Bomb,
    Rocket,
}

impl PatternKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Invalid => "invalid",
            PatternKind::Solo => "solo",
            PatternKind::Pair => "pair",
            PatternKind::Trio => "trio",
            PatternKind::TrioSingle => "trio_single",
            PatternKind::TrioPair => "trio_pair",
            PatternKind::Straight => "straight",
            PatternKind::PairChain => "pair_chain",
            PatternKind::Airplane => "airplane",
            PatternKind::AirplaneSingle => "airplane_single",
            PatternKind::AirplanePair => "airplane_pair",
            PatternKind::FourTwoSingle => "four_two_single",
            PatternKind::FourTwoPair => "four_two_pair",
            PatternKind::Bomb => "bomb",
            PatternKind::Rocket => "rocket",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of an action.
///
/// Each variant carries only what matters for comparing it: the principal
/// rank (`rank` for fixed-size shapes, `high` for the top of a run) and,
/// for run shapes, the number of repeated units.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Pattern {
    Invalid,
    Solo { rank: Rank },
    Pair { rank: Rank },
    Trio { rank: Rank },
    TrioSingle { rank: Rank },
    TrioPair { rank: Rank },
    Straight { high: Rank, length: usize },
    PairChain { high: Rank, pair_len: usize },
    Airplane { high: Rank, trio_len: usize },
    AirplaneSingle { high: Rank, trio_len: usize },
    AirplanePair { high: Rank, trio_len: usize },
    FourTwoSingle { rank: Rank },
    FourTwoPair { rank: Rank },
    Bomb { rank: Rank },
    Rocket,
}

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Invalid => PatternKind::Invalid,
            Pattern::Solo { .. } => PatternKind::Solo,
            Pattern::Pair { .. } => PatternKind::Pair,
            Pattern::Trio { .. } => PatternKind::Trio,
            Pattern::TrioSingle { .. } => PatternKind::TrioSingle,
            Pattern::TrioPair { .. } => PatternKind::TrioPair,
            Pattern::Straight { .. } => PatternKind::Straight,
            Pattern::PairChain { .. } => PatternKind::PairChain,
            Pattern::Airplane { .. } => PatternKind::Airplane,
            Pattern::AirplaneSingle { .. } => PatternKind::AirplaneSingle,
            Pattern::AirplanePair { .. } => PatternKind::AirplanePair,
            Pattern::FourTwoSingle { .. } => PatternKind::FourTwoSingle,
            Pattern::FourTwoPair { .. } => PatternKind::FourTwoPair,
            Pattern::Bomb { .. } => PatternKind::Bomb,
            Pattern::Rocket => PatternKind::Rocket,
        }
    }

    /// Comparison key: the principal rank's value, [`ROCKET_VALUE`] for a
    /// rocket and [`INVALID_VALUE`] for anything unrecognised.
    pub fn main_value(&self) -> i32 {
        match self {
            Pattern::Invalid => INVALID_VALUE,
            Pattern::Rocket => ROCKET_VALUE,
            Pattern::Solo { rank }
            | Pattern::Pair { rank }
            | Pattern::Trio { rank }
            | Pattern::TrioSingle { rank }
            | Pattern::TrioPair { rank }
            | Pattern::FourTwoSingle { rank }
            | Pattern::FourTwoPair { rank }
            | Pattern::Bomb { rank } => rank.value() as i32,
            Pattern::Straight { high, .. }
            | Pattern::PairChain { high, .. }
            | Pattern::Airplane { high, .. }
            | Pattern::AirplaneSingle { high, .. }
            | Pattern::AirplanePair { high, .. } => high.value() as i32,
        }
    }

    /// Unit count that must match for two patterns of one kind to be
    /// comparable: trio kinds have a single core, runs report their length
    /// in units. `None` for kinds compared on `main_value` alone.
    pub fn structural_size(&self) -> Option<usize> {
        match self {
            Pattern::Trio { .. } | Pattern::TrioSingle { .. } | Pattern::TrioPair { .. } => Some(1),
            Pattern::Straight { length, .. } => Some(*length),
            Pattern::PairChain { pair_len, .. } => Some(*pair_len),
            Pattern::Airplane { trio_len, .. }
            | Pattern::AirplaneSingle { trio_len, .. }
            | Pattern::AirplanePair { trio_len, .. } => Some(*trio_len),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Pattern::Invalid)
    }

    pub fn is_bomb(&self) -> bool {
        matches!(self, Pattern::Bomb { .. })
    }

    pub fn is_rocket(&self) -> bool {
        matches!(self, Pattern::Rocket)
    }

    /// Same kind and same unit count.
    pub fn same_shape(&self, other: &Pattern) -> bool {
        self.kind() == other.kind() && self.structural_size() == other.structural_size()
    }

    /// Whether playing `self` is allowed on top of `prior`.
    pub fn beats(&self, prior: &Pattern) -> bool {
        if !self.is_valid() || prior.is_rocket() {
            return false;
        }
        if !prior.is_valid() || self.is_rocket() {
            return true;
        }
        match (self.is_bomb(), prior.is_bomb()) {
            (true, false) => true,
            (false, true) => false,
            _ => self.same_shape(prior) && self.main_value() > prior.main_value(),
        }
    }
}

/// Classifies an action. Passes and empty plays are [`Pattern::Invalid`].
pub fn classify(action: &Action) -> Pattern {
    if action.is_pass() {
        return Pattern::Invalid;
    }
    classify_counts(&action.counts())
}

/// Classifies a rank multiset. Shapes are tried from the cheapest checks to
/// the airplane-with-attachment search; the first match wins.
pub fn classify_counts(cnt: &RankCounts) -> Pattern {
    let len = cnt.total();
    if len == 0 {
        return Pattern::Invalid;
    }

    if len == 2 && cnt.get(Rank::BlackJoker) == 1 && cnt.get(Rank::RedJoker) == 1 {
        return Pattern::Rocket;
    }

    if len == 4 {
        if let Some(rank) = cnt.rank_with_count(4) {
            return Pattern::Bomb { rank };
        }
    }

    if len == 1 {
        if let Some(rank) = cnt.rank_with_count(1) {
            return Pattern::Solo { rank };
        }
    }

    if len == 2 && cnt.distinct() == 1 {
        if let Some(rank) = cnt.rank_with_count(2).filter(|r| !r.is_joker()) {
            return Pattern::Pair { rank };
        }
    }

    if len == 3 && cnt.distinct() == 1 {
        if let Some(rank) = cnt.rank_with_count(3).filter(|r| !r.is_joker()) {
            return Pattern::Trio { rank };
        }
    }

    if len == 4 && cnt.distinct() == 2 {
        if let (Some(rank), Some(_)) = (cnt.rank_with_count(3), cnt.rank_with_count(1)) {
            if !rank.is_joker() {
                return Pattern::TrioSingle { rank };
            }
        }
    }

    if len == 5 && cnt.distinct() == 2 {
        if let (Some(rank), Some(pair)) = (cnt.rank_with_count(3), cnt.rank_with_count(2)) {
            if !rank.is_joker() && !pair.is_joker() {
                return Pattern::TrioPair { rank };
            }
        }
    }

    if len == 6 {
        if let Some(rank) = cnt.rank_with_count(4) {
            let rest = cnt.subtract(&RankCounts::repeated(&[rank], 4));
            if rest.total() == 2 && !rest.has_rocket() {
                return Pattern::FourTwoSingle { rank };
            }
        }
    }

    if len == 8 {
        if let Some(rank) = cnt.rank_with_count(4) {
            let rest = cnt.subtract(&RankCounts::repeated(&[rank], 4));
            if rest.distinct() == 2 && rest.all_counts_equal(2) {
                return Pattern::FourTwoPair { rank };
            }
        }
    }

    if len >= 5 && cnt.all_counts_equal(1) {
        if let Some(high) = consecutive_top(cnt) {
            return Pattern::Straight { high, length: len };
        }
    }

    if len >= 6 && len % 2 == 0 && cnt.all_counts_equal(2) {
        if let Some(high) = consecutive_top(cnt) {
            return Pattern::PairChain {
                high,
                pair_len: len / 2,
            };
        }
    }

    if len >= 6 && len % 3 == 0 && cnt.all_counts_equal(3) {
        if let Some(high) = consecutive_top(cnt) {
            return Pattern::Airplane {
                high,
                trio_len: len / 3,
            };
        }
    }

    classify_airplane_with_attachment(cnt).unwrap_or(Pattern::Invalid)
}

/// Highest rank when the present ranks are consecutive and all inside the
/// straight range.
fn consecutive_top(cnt: &RankCounts) -> Option<Rank> {
    let ranks = cnt.ranks();
    let in_range = ranks.iter().all(|r| r.in_straight_range());
    let consecutive = ranks
        .windows(2)
        .all(|w| w[1].value() == w[0].value() + 1);
    if in_range && consecutive {
        ranks.last().copied()
    } else {
        None
    }
}

/// Looks for a trio core whose leftover is exactly one single per trio
/// (4k cards) or one pair per trio (5k cards). Longer cores are tried first.
fn classify_airplane_with_attachment(cnt: &RankCounts) -> Option<Pattern> {
    let len = cnt.total();
    let mut cores = airplane_cores(cnt);
    cores.sort_by(|a, b| b.len().cmp(&a.len()).then(b.cmp(a)));

    for core in cores {
        let k = core.len();
        let rest = cnt.subtract(&RankCounts::repeated(&core, 3));
        let high = core[k - 1];

        if len == 4 * k
            && rest.total() == k
            && is_valid_attachment(&core, &rest, Attachment::Single)
        {
            return Some(Pattern::AirplaneSingle { high, trio_len: k });
        }

        if len == 5 * k
            && rest.total() == 2 * k
            && rest.all_counts_equal(2)
            && is_valid_attachment(&core, &rest, Attachment::Pair)
        {
            return Some(Pattern::AirplanePair { high, trio_len: k });
        }
    }
    None
}
