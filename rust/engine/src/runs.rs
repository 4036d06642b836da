//! Candidate enumeration over a hand's rank counts.
//!
//! Every `find_*` function returns the actions of one shape that the counts
//! can realize, in a deterministic order but possibly with duplicates; the
//! callers in [`crate::rules`] run the result through
//! [`crate::ordering::sort_unique`].

use crate::action::Action;
use crate::cards::Rank;
use crate::counts::{combinations_by_index, RankCounts};

pub const MIN_STRAIGHT_LEN: usize = 5;
pub const MIN_PAIR_CHAIN_LEN: usize = 3;
pub const MIN_AIRPLANE_LEN: usize = 2;

/// How the cards hanging off an airplane core are grouped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Attachment {
    Single,
    Pair,
}

/// All contiguous windows of at least `min_len` ranks inside the maximal
/// runs of straight-range ranks held at least `min_count` times.
///
/// Windows are emitted per block, shortest first, then left to right.
pub fn consecutive_windows(counts: &RankCounts, min_count: u8, min_len: usize) -> Vec<Vec<Rank>> {
    let elig: Vec<Rank> = counts
        .iter()
        .filter(|&(r, c)| c >= min_count && r.in_straight_range())
        .map(|(r, _)| r)
        .collect();

    let mut windows = Vec::new();
    let mut i = 0;
    while i < elig.len() {
        let mut j = i;
        while j + 1 < elig.len() && elig[j + 1].value() == elig[j].value() + 1 {
            j += 1;
        }
        let block = &elig[i..=j];
        for len in min_len..=block.len() {
            for window in block.windows(len) {
                windows.push(window.to_vec());
            }
        }
        i = j + 1;
    }
    windows
}

/// Candidate airplane cores: runs of two or more trios.
pub fn airplane_cores(counts: &RankCounts) -> Vec<Vec<Rank>> {
    consecutive_windows(counts, 3, MIN_AIRPLANE_LEN)
}

/// Checks the cards attached to an airplane core.
///
/// Rejects single attachments holding both jokers, any rank reaching four
/// cards once core and attachment are combined, and an attachment that
/// puts three cards on the rank just below or above the core (that play is
/// a longer airplane, not this one).
pub fn is_valid_attachment(core: &[Rank], attach: &RankCounts, kind: Attachment) -> bool {
    if kind == Attachment::Single && attach.has_rocket() {
        return false;
    }

    let total = RankCounts::repeated(core, 3).merge(attach);
    if total.has_count(4) {
        return false;
    }

    let (Some(&low), Some(&high)) = (core.first(), core.last()) else {
        return false;
    };
    let extends = |edge: Option<Rank>| {
        edge.is_some_and(|r| r.in_straight_range() && total.get(r) >= 3)
    };
    !(extends(low.before()) || extends(high.after()))
}

pub fn find_solos(counts: &RankCounts) -> Vec<Action> {
    counts.ranks().into_iter().map(|r| Action::play([r])).collect()
}

pub fn find_pairs(counts: &RankCounts) -> Vec<Action> {
    counts
        .iter()
        .filter(|&(r, c)| c >= 2 && !r.is_joker())
        .map(|(r, _)| Action::play([r, r]))
        .collect()
}

pub fn find_trios(counts: &RankCounts) -> Vec<Action> {
    counts
        .iter()
        .filter(|&(r, c)| c >= 3 && !r.is_joker())
        .map(|(r, _)| Action::play([r, r, r]))
        .collect()
}

pub fn find_trio_with_single(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    for trio in trio_ranks(counts) {
        for (single, _) in counts.iter().filter(|&(r, _)| r != trio) {
            out.push(Action::play([trio, trio, trio, single]));
        }
    }
    out
}

pub fn find_trio_with_pair(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    for trio in trio_ranks(counts) {
        for (pair, _) in counts
            .iter()
            .filter(|&(r, c)| r != trio && c >= 2 && !r.is_joker())
        {
            out.push(Action::play([trio, trio, trio, pair, pair]));
        }
    }
    out
}

pub fn find_straights(counts: &RankCounts) -> Vec<Action> {
    consecutive_windows(counts, 1, MIN_STRAIGHT_LEN)
        .iter()
        .map(|w| Action::repeated(w, 1))
        .collect()
}

pub fn find_pair_chains(counts: &RankCounts) -> Vec<Action> {
    consecutive_windows(counts, 2, MIN_PAIR_CHAIN_LEN)
        .iter()
        .map(|w| Action::repeated(w, 2))
        .collect()
}

pub fn find_airplanes(counts: &RankCounts) -> Vec<Action> {
    airplane_cores(counts)
        .iter()
        .map(|core| Action::repeated(core, 3))
        .collect()
}

/// Airplanes carrying one single or one pair per trio.
///
/// This is the expensive enumeration: for a core of `k` trios it walks all
/// `C(instances, k)` picks of the remaining cards.
pub fn find_airplanes_with_attachments(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    for core in airplane_cores(counts) {
        let k = core.len();
        let core_use = RankCounts::repeated(&core, 3);
        let rest = counts.subtract(&core_use);

        let singles = rest.single_instances();
        if singles.len() >= k {
            for pick in combinations_by_index(&singles, k) {
                let attach = RankCounts::from_ranks(pick.iter().map(|&i| singles[i]));
                if is_valid_attachment(&core, &attach, Attachment::Single) {
                    out.push(Action::from_counts(&core_use.merge(&attach)));
                }
            }
        }

        let pairs = rest.pair_instances();
        if pairs.len() >= k {
            for pick in combinations_by_index(&pairs, k) {
                let mut attach = RankCounts::new();
                for &i in &pick {
                    attach.add(pairs[i], 2);
                }
                if is_valid_attachment(&core, &attach, Attachment::Pair) {
                    out.push(Action::from_counts(&core_use.merge(&attach)));
                }
            }
        }
    }
    out
}

/// Four of a kind with two singles (never both jokers) or with two pairs of
/// different ranks.
pub fn find_four_with_two(counts: &RankCounts) -> Vec<Action> {
    let mut out = Vec::new();
    for (four, _) in counts.iter().filter(|&(_, c)| c >= 4) {
        let core_use = RankCounts::repeated(&[four], 4);
        let rest = counts.subtract(&core_use);

        let singles = rest.single_instances();
        for pick in combinations_by_index(&singles, 2) {
            let (a, b) = (singles[pick[0]], singles[pick[1]]);
            if (a, b) == (Rank::BlackJoker, Rank::RedJoker) {
                continue;
            }
            out.push(Action::play([four, four, four, four, a, b]));
        }

        let pairs = rest.pair_instances();
        for pick in combinations_by_index(&pairs, 2) {
            let (a, b) = (pairs[pick[0]], pairs[pick[1]]);
            if a == b {
                continue;
            }
            out.push(Action::play([four, four, four, four, a, a, b, b]));
        }
    }
    out
}

pub fn find_bombs(counts: &RankCounts) -> Vec<Action> {
    counts
        .iter()
        .filter(|&(r, c)| c >= 4 && !r.is_joker())
        .map(|(r, _)| Action::play([r, r, r, r]))
        .collect()
}

/// Bombs whose rank value is strictly above `last_bomb_value`.
pub fn filter_higher_bombs(counts: &RankCounts, last_bomb_value: i32) -> Vec<Action> {
    find_bombs(counts)
        .into_iter()
        .filter(|b| b.ranks().first().is_some_and(|r| r.value() as i32 > last_bomb_value))
        .collect()
}

pub fn rocket() -> Action {
    Action::play([Rank::BlackJoker, Rank::RedJoker])
}

fn trio_ranks(counts: &RankCounts) -> Vec<Rank> {
    counts
        .iter()
        .filter(|&(r, c)| c >= 3 && !r.is_joker())
        .map(|(r, _)| r)
        .collect()
}
