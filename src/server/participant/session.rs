/// Participant session actor.
///
/// One actor per participant id. Keeps the participant's score, a single-slot
/// notification mailbox and the id of the match it plays in. Guesses are forwarded to
/// that match; the authoritative guess lives there.
use actix::prelude::*;
use log::{debug, warn};

use super::messages::{
    GetMatch, GetScore, GetStatus, IncrementScore, ParticipantStatus, PollNotification,
    PushNotification, SetMatch, SubmitGuess,
};
use crate::server::directory::Directory;
use crate::server::game_session::messages::{Guess, GuessOutcome};
use crate::server::matchmaking::types::{MatchId, ParticipantId};

pub struct ParticipantSession {
    pub participant_id: ParticipantId,
    current_match: Option<MatchId>,
    last_guess: Option<i64>,
    score: u64,
    pending_notification: Option<String>,
    directory: Directory,
}

impl ParticipantSession {
    pub fn new(participant_id: ParticipantId, directory: Directory) -> Self {
        Self {
            participant_id,
            current_match: None,
            last_guess: None,
            score: 0,
            pending_notification: None,
            directory,
        }
    }

    fn status(&self) -> ParticipantStatus {
        ParticipantStatus {
            participant_id: self.participant_id.clone(),
            score: self.score,
            match_id: self.current_match.clone(),
            last_guess: self.last_guess,
            has_notification: self.pending_notification.is_some(),
        }
    }
}

impl Actor for ParticipantSession {
    type Context = Context<Self>;
}

impl Handler<SetMatch> for ParticipantSession {
    type Result = ();

    fn handle(&mut self, msg: SetMatch, _ctx: &mut Self::Context) {
        debug!("[Participant] {} now plays in match {}", self.participant_id, msg.0);
        self.current_match = Some(msg.0);
    }
}

impl Handler<SubmitGuess> for ParticipantSession {
    type Result = AtomicResponse<Self, GuessOutcome>;

    /// Forwards the guess to the current match and waits for its verdict.
    ///
    /// The wait is atomic for this participant only: its mailbox is paused until the match
    /// answers, while the match keeps serving everyone else.
    fn handle(&mut self, msg: SubmitGuess, _ctx: &mut Self::Context) -> Self::Result {
        let number = msg.number;
        let Some(match_id) = self.current_match.clone() else {
            debug!("[Participant] {} guessed before being paired", self.participant_id);
            return AtomicResponse::new(Box::pin(fut::ready(GuessOutcome::NotInMatch)));
        };
        let Some(match_addr) = self.directory.match_session(&match_id) else {
            warn!("[Participant] {} references unknown match {}", self.participant_id, match_id);
            return AtomicResponse::new(Box::pin(fut::ready(GuessOutcome::MatchUnavailable)));
        };

        let request = match_addr.send(Guess {
            participant_id: self.participant_id.clone(),
            number,
        });
        AtomicResponse::new(Box::pin(request.into_actor(self).map(
            move |res, act, _ctx| match res {
                Ok(outcome) => {
                    if outcome.is_accepted() {
                        act.last_guess = Some(number);
                    }
                    outcome
                }
                Err(e) => {
                    warn!("[Participant] {} could not reach match {}: {}", act.participant_id, match_id, e);
                    GuessOutcome::MatchUnavailable
                }
            },
        )))
    }
}

impl Handler<IncrementScore> for ParticipantSession {
    type Result = ();

    fn handle(&mut self, _msg: IncrementScore, _ctx: &mut Self::Context) {
        self.score = self.score.saturating_add(1);
    }
}

impl Handler<GetScore> for ParticipantSession {
    type Result = u64;

    fn handle(&mut self, _msg: GetScore, _ctx: &mut Self::Context) -> u64 {
        self.score
    }
}

impl Handler<GetMatch> for ParticipantSession {
    type Result = Option<MatchId>;

    fn handle(&mut self, _msg: GetMatch, _ctx: &mut Self::Context) -> Self::Result {
        self.current_match.clone()
    }
}

impl Handler<PushNotification> for ParticipantSession {
    type Result = ();

    fn handle(&mut self, msg: PushNotification, _ctx: &mut Self::Context) {
        if let Some(dropped) = self.pending_notification.replace(msg.0) {
            debug!("[Participant] {} never polled {:?}; overwritten", self.participant_id, dropped);
        }
    }
}

impl Handler<PollNotification> for ParticipantSession {
    type Result = Option<String>;

    fn handle(&mut self, _msg: PollNotification, _ctx: &mut Self::Context) -> Self::Result {
        self.pending_notification.take()
    }
}

impl Handler<GetStatus> for ParticipantSession {
    type Result = MessageResult<GetStatus>;

    fn handle(&mut self, _msg: GetStatus, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.status())
    }
}
