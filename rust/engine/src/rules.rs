use tracing::debug;

use crate::action::Action;
use crate::cards::Card;
use crate::counts::RankCounts;
use crate::errors::GameError;
use crate::ordering::sort_unique;
use crate::pattern::{classify, Pattern, PatternKind};
use crate::runs::{
    filter_higher_bombs, find_airplanes, find_airplanes_with_attachments, find_bombs,
    find_four_with_two, find_pair_chains, find_pairs, find_solos, find_straights,
    find_trio_with_pair, find_trio_with_single, find_trios, rocket,
};

/// The most recent non-pass play of the current trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastPlay {
    pub player_id: usize,
    pub action: Action,
}

/// Read-only view of the trick state the generator needs.
pub trait TrickContext {
    fn last_valid_play(&self) -> Option<LastPlay>;
}

impl TrickContext for Option<LastPlay> {
    fn last_valid_play(&self) -> Option<LastPlay> {
        self.clone()
    }
}

/// Every action the counts can produce, deduplicated and ordered. Never
/// contains a pass.
pub fn all_patterns(counts: &RankCounts) -> Vec<Action> {
    let mut result = Vec::new();
    result.extend(find_solos(counts));
    result.extend(find_pairs(counts));
    result.extend(find_trios(counts));
    result.extend(find_trio_with_single(counts));
    result.extend(find_trio_with_pair(counts));
    result.extend(find_straights(counts));
    result.extend(find_pair_chains(counts));
    result.extend(find_airplanes(counts));
    result.extend(find_airplanes_with_attachments(counts));
    result.extend(find_four_with_two(counts));
    result.extend(find_bombs(counts));
    if counts.has_rocket() {
        result.push(rocket());
    }
    sort_unique(result)
}

/// Actions of the same kind and unit count as `last` with a strictly higher
/// `main_value`. Bombs, rockets and invalid plays have no same-shape
/// answer here; bomb overrides are added by [`legal_actions`].
pub fn same_pattern_stronger(counts: &RankCounts, last: &Pattern) -> Vec<Action> {
    let candidates = match last.kind() {
        PatternKind::Solo => find_solos(counts),
        PatternKind::Pair => find_pairs(counts),
        PatternKind::Trio => find_trios(counts),
        PatternKind::TrioSingle => find_trio_with_single(counts),
        PatternKind::TrioPair => find_trio_with_pair(counts),
        PatternKind::Straight => find_straights(counts),
        PatternKind::PairChain => find_pair_chains(counts),
        PatternKind::Airplane => find_airplanes(counts),
        PatternKind::AirplaneSingle | PatternKind::AirplanePair => {
            find_airplanes_with_attachments(counts)
        }
        PatternKind::FourTwoSingle | PatternKind::FourTwoPair => find_four_with_two(counts),
        PatternKind::Bomb | PatternKind::Rocket | PatternKind::Invalid => Vec::new(),
    };
    sort_unique(candidates.into_iter().filter(|a| {
        let p = classify(a);
        p.same_shape(last) && p.main_value() > last.main_value()
    }))
}

/// Legal moves for `player_id` holding `hand` in the given trick.
///
/// Leading (no prior play, or the prior play is the player's own) offers
/// every producible pattern and never a pass. Following always offers a
/// pass, plus same-shape stronger plays, bombs (only higher ones over a
/// bomb) and the rocket. Nothing answers a rocket. The result is never
/// empty: an empty hand on lead yields a lone pass.
pub fn legal_actions<C: TrickContext + ?Sized>(
    hand: &[Card],
    context: &C,
    player_id: usize,
) -> Vec<Action> {
    let counts = RankCounts::from_cards(hand);

    let last = match context.last_valid_play() {
        Some(last) if last.player_id != player_id => last,
        _ => {
            let actions = all_patterns(&counts);
            debug!(player_id, count = actions.len(), "lead actions generated");
            if actions.is_empty() {
                return vec![Action::Pass];
            }
            return actions;
        }
    };

    let last_pattern = classify(&last.action);
    let mut actions = vec![Action::Pass];
    match last_pattern {
        Pattern::Invalid => actions.extend(all_patterns(&counts)),
        Pattern::Rocket => {}
        Pattern::Bomb { rank } => {
            actions.extend(filter_higher_bombs(&counts, rank.value() as i32));
        }
        _ => {
            actions.extend(same_pattern_stronger(&counts, &last_pattern));
            actions.extend(find_bombs(&counts));
        }
    }
    if !last_pattern.is_rocket() && counts.has_rocket() {
        actions.push(rocket());
    }

    let actions = sort_unique(actions);
    debug!(
        player_id,
        last = %last.action,
        kind = %last_pattern.kind(),
        count = actions.len(),
        "follow actions generated"
    );
    actions
}

/// Confirms that `action` is one of the legal moves and returns it.
///
/// # Errors
///
/// Returns [`GameError::IllegalAction`] when the action is not in the
/// legal set for this hand and trick.
pub fn validate_action<C: TrickContext + ?Sized>(
    hand: &[Card],
    context: &C,
    player_id: usize,
    action: &Action,
) -> Result<Action, GameError> {
    if legal_actions(hand, context, player_id).contains(action) {
        Ok(action.clone())
    } else {
        Err(GameError::IllegalAction {
            player: player_id,
            action: action.to_string(),
        })
    }
}
