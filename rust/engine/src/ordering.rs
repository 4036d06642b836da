use std::cmp::Ordering;
use std::collections::HashSet;

use crate::action::Action;
use crate::pattern::{classify, Pattern};

/// Deduplicates actions and sorts them into presentation order: pass first,
/// then by card count, then by pattern value, then rank by rank.
pub fn sort_unique<I: IntoIterator<Item = Action>>(actions: I) -> Vec<Action> {
    let mut seen = HashSet::new();
    let mut keyed: Vec<(Pattern, Action)> = actions
        .into_iter()
        .filter(|a| seen.insert(a.clone()))
        .map(|a| (classify(&a), a))
        .collect();
    keyed.sort_by(|(pa, a), (pb, b)| compare_classified(a, pa, b, pb));
    keyed.into_iter().map(|(_, a)| a).collect()
}

/// Total order between two actions. Classifies both sides; prefer
/// [`sort_unique`] for whole lists.
pub fn compare_actions(a: &Action, b: &Action) -> Ordering {
    compare_classified(a, &classify(a), b, &classify(b))
}

fn compare_classified(a: &Action, pa: &Pattern, b: &Action, pb: &Pattern) -> Ordering {
    match (a.is_pass(), b.is_pass()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    a.len().cmp(&b.len()).then_with(|| {
        if pa.is_valid() && pb.is_valid() {
            pa.main_value()
                .cmp(&pb.main_value())
                .then_with(|| lex_rank_cmp(a, b))
        } else {
            lex_rank_cmp(a, b)
        }
    })
}

/// Position-by-position comparison on rank value; a strict prefix sorts first.
pub fn lex_rank_cmp(a: &Action, b: &Action) -> Ordering {
    a.ranks().cmp(b.ranks())
}
