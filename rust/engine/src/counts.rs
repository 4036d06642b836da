use itertools::Itertools;

use crate::cards::{Card, Rank};

/// Multiplicity of every rank in a hand or action, indexed by rank value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RankCounts {
    counts: [u8; Rank::COUNT],
}

impl RankCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Self::from_ranks(cards.iter().map(|c| c.rank))
    }

    pub fn from_ranks<I: IntoIterator<Item = Rank>>(ranks: I) -> Self {
        let mut counts = Self::new();
        for r in ranks {
            counts.add(r, 1);
        }
        counts
    }

    /// `n` copies of every rank in `ranks`.
    pub fn repeated(ranks: &[Rank], n: u8) -> Self {
        let mut counts = Self::new();
        for &r in ranks {
            counts.add(r, n);
        }
        counts
    }

    pub fn get(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    pub fn add(&mut self, rank: Rank, n: u8) {
        let slot = &mut self.counts[rank.value() as usize];
        *slot = slot.saturating_add(n);
    }

    /// Removes up to `n` copies of `rank`, clamping at zero.
    pub fn remove(&mut self, rank: Rank, n: u8) {
        let slot = &mut self.counts[rank.value() as usize];
        *slot = slot.saturating_sub(n);
    }

    /// `self - other` per rank. Callers guarantee `self` dominates `other`;
    /// an over-subtraction clamps to zero instead of failing.
    pub fn subtract(&self, other: &RankCounts) -> RankCounts {
        let mut out = *self;
        for (r, c) in other.iter() {
            out.remove(r, c);
        }
        out
    }

    pub fn merge(&self, other: &RankCounts) -> RankCounts {
        let mut out = *self;
        for (r, c) in other.iter() {
            out.add(r, c);
        }
        out
    }

    /// Whether every rank of `other` is available here at least as often.
    pub fn contains(&self, other: &RankCounts) -> bool {
        other.iter().all(|(r, c)| self.get(r) >= c)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Number of ranks present at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Present ranks with their multiplicity, ascending by rank.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ORDERED
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
            .filter(|&(_, c)| c > 0)
    }

    /// Present ranks ascending.
    pub fn ranks(&self) -> Vec<Rank> {
        self.iter().map(|(r, _)| r).collect()
    }

    /// Lowest rank whose multiplicity is exactly `n`.
    pub fn rank_with_count(&self, n: u8) -> Option<Rank> {
        self.iter().find(|&(_, c)| c == n).map(|(r, _)| r)
    }

    pub fn has_count(&self, n: u8) -> bool {
        self.rank_with_count(n).is_some()
    }

    /// True when at least one rank is present and every present rank has
    /// multiplicity `n`.
    pub fn all_counts_equal(&self, n: u8) -> bool {
        !self.is_empty() && self.iter().all(|(_, c)| c == n)
    }

    pub fn has_rocket(&self) -> bool {
        self.get(Rank::BlackJoker) >= 1 && self.get(Rank::RedJoker) >= 1
    }

    /// Canonical expansion: every rank repeated by its multiplicity, ascending.
    pub fn to_ranks(&self) -> Vec<Rank> {
        let mut out = Vec::with_capacity(self.total());
        for (r, c) in self.iter() {
            out.extend(std::iter::repeat(r).take(c as usize));
        }
        out
    }

    /// One entry per available card, ascending by rank.
    pub fn single_instances(&self) -> Vec<Rank> {
        self.to_ranks()
    }

    /// One entry per available pair (`count / 2` per rank). Jokers never
    /// pair up.
    pub fn pair_instances(&self) -> Vec<Rank> {
        let mut out = Vec::new();
        for (r, c) in self.iter().filter(|(r, _)| !r.is_joker()) {
            out.extend(std::iter::repeat(r).take((c / 2) as usize));
        }
        out
    }
}

/// Every size-`k` subset of the positions of `items`, in lexicographic index
/// order. Selecting by position lets a rank listed twice be chosen twice
/// without treating equal values as interchangeable.
pub fn combinations_by_index<T>(items: &[T], k: usize) -> impl Iterator<Item = Vec<usize>> {
    (0..items.len()).combinations(k)
}
