/// Round adjudication for a MatchSession.
/// Pure scoring rules: who is closer to the target, and what each side is told.

use crate::server::matchmaking::types::ParticipantId;

/// Result of comparing both guesses of a round against its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// Both guesses were equally far from the target.
    Tie { target: i64 },
    /// One participant was strictly closer.
    Decided {
        winner: ParticipantId,
        loser: ParticipantId,
        target: i64,
    },
}

/// Absolute distance between a guess and the target.
pub fn distance(guess: i64, target: i64) -> u64 {
    guess.abs_diff(target)
}

/// Decide a round from both participants' guesses.
pub fn resolve_round(
    target: i64,
    first: (&ParticipantId, i64),
    second: (&ParticipantId, i64),
) -> RoundResult {
    let first_distance = distance(first.1, target);
    let second_distance = distance(second.1, target);

    if first_distance == second_distance {
        return RoundResult::Tie { target };
    }
    let (winner, loser) = if first_distance < second_distance {
        (first.0, second.0)
    } else {
        (second.0, first.0)
    };
    RoundResult::Decided {
        winner: winner.clone(),
        loser: loser.clone(),
        target,
    }
}

pub fn win_message(target: i64) -> String {
    format!("You won! The number was {}.", target)
}

pub fn loss_message(target: i64) -> String {
    format!("You lost. The number was {}.", target)
}

pub fn tie_message(target: i64) -> String {
    format!("It's a tie. The number was {}.", target)
}
