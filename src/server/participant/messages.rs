use actix::prelude::*;
use serde::Serialize;

use crate::server::game_session::messages::GuessOutcome;
use crate::server::matchmaking::types::{MatchId, ParticipantId};

/// Point the participant at its current match (overwrites any previous one).
#[derive(Message)]
#[rtype(result = "()")]
pub struct SetMatch(pub MatchId);

/// Submit a guess to the participant's current match.
#[derive(Message)]
#[rtype(result = "GuessOutcome")]
pub struct SubmitGuess {
    pub number: i64,
}

/// Sent by a match when this participant wins a round.
#[derive(Message)]
#[rtype(result = "()")]
pub struct IncrementScore;

#[derive(Message)]
#[rtype(result = "u64")]
pub struct GetScore;

#[derive(Message)]
#[rtype(result = "Option<MatchId>")]
pub struct GetMatch;

/// Replace the pending notification. The slot holds one message; the previous one is dropped.
#[derive(Message)]
#[rtype(result = "()")]
pub struct PushNotification(pub String);

/// Take the pending notification, leaving the slot empty.
#[derive(Message)]
#[rtype(result = "Option<String>")]
pub struct PollNotification;

#[derive(Message)]
#[rtype(result = "ParticipantStatus")]
pub struct GetStatus;

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantStatus {
    pub participant_id: ParticipantId,
    pub score: u64,
    pub match_id: Option<MatchId>,
    pub last_guess: Option<i64>,
    pub has_notification: bool,
}
