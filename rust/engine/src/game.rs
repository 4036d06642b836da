use crate::deck::PLAYERS;
use crate::player::Player;

/// The deal ends as soon as any player empties their hand.
pub fn is_game_over(players: &[Player]) -> bool {
    players.iter().any(Player::is_empty)
}

/// First player with an empty hand, if any.
pub fn winner(players: &[Player]) -> Option<usize> {
    players.iter().find(|p| p.is_empty()).map(Player::id)
}

/// Win/lose payoff per seat: a winning landlord scores alone, otherwise both
/// peasants score.
pub fn payoff(winner_id: usize, landlord_id: usize) -> [u32; PLAYERS] {
    let mut payoff = [0; PLAYERS];
    if winner_id == landlord_id {
        payoff[landlord_id] = 1;
    } else {
        for (id, p) in payoff.iter_mut().enumerate() {
            if id != landlord_id {
                *p = 1;
            }
        }
    }
    payoff
}
