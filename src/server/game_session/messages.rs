use actix::prelude::*;
use serde::Serialize;

use crate::server::matchmaking::types::{MatchId, ParticipantId};

/// Why a match refused to seat a participant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("match already has two participants")]
    MatchFull,
    #[error("participant {0} is already seated in this match")]
    AlreadyMember(ParticipantId),
}

/// Result of a guess submission, from either the match or the participant side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess was stored for the current round.
    Accepted,
    /// The match does not have two participants yet.
    MatchNotReady,
    /// The submitting participant is not seated in this match.
    NotAMember,
    /// The participant has not been paired into any match.
    NotInMatch,
    /// The participant's match could not be reached.
    MatchUnavailable,
}

impl GuessOutcome {
    pub fn is_accepted(self) -> bool {
        self == GuessOutcome::Accepted
    }
}

/// Seat a participant in the match.
#[derive(Message)]
#[rtype(result = "Result<(), MatchError>")]
pub struct AddPlayer {
    pub participant_id: ParticipantId,
}

/// Record a participant's guess for the current round.
#[derive(Message)]
#[rtype(result = "GuessOutcome")]
pub struct Guess {
    pub participant_id: ParticipantId,
    pub number: i64,
}

/// Read-only view of a match.
#[derive(Message)]
#[rtype(result = "MatchSnapshot")]
pub struct GetSnapshot;

#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub match_id: MatchId,
    pub participants: Vec<ParticipantId>,
    /// Participants who have already guessed this round.
    pub guessed: Vec<ParticipantId>,
    pub rounds_played: u64,
    // Hidden from clients; the round would be trivial otherwise.
    #[serde(skip_serializing)]
    pub target: i64,
}
