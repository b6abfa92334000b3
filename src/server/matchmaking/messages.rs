use actix::prelude::*;
use serde::Serialize;

use super::types::{MatchId, ParticipantId};

/// Message: participant joins the wait list.
#[derive(Message)]
#[rtype(result = "JoinOutcome")]
pub struct Join {
    pub participant_id: ParticipantId,
}

/// Message: participant leaves the wait list. Leaving when absent is a no-op.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Leave {
    pub participant_id: ParticipantId,
}

#[derive(Message)]
#[rtype(result = "QueueStatus")]
pub struct GetQueueStatus;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JoinOutcome {
    /// Waiting for an opponent; `position` is 1-based.
    Queued { position: usize },
    /// Paired on this call.
    Paired {
        match_id: MatchId,
        opponent: ParticipantId,
    },
    /// Already waiting; the queue was left untouched.
    AlreadyQueued { position: usize },
    /// Already paired earlier; not queued again.
    AlreadyMatched { match_id: MatchId },
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QueueStatus {
    pub waiting: usize,
    pub matches_made: u64,
}
