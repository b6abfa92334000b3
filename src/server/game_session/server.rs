/// Match session actor.
///
/// Seats exactly two participants, collects one guess from each per round and resolves
/// the round once both are in. Participants are referenced by id only; notifications and
/// score changes go through the directory.

use actix::prelude::*;
use std::collections::HashMap;
use actix::MessageResult;
use log::{debug, info};

use crate::config::game::PLAYERS_PER_MATCH;
use crate::server::directory::Directory;
use crate::server::matchmaking::types::{MatchId, ParticipantId};
use crate::server::game_session::messages::{
    AddPlayer, GetSnapshot, Guess, GuessOutcome, MatchError, MatchSnapshot,
};
use crate::server::game_session::round_resolution::{
    resolve_round, win_message, loss_message, tie_message, RoundResult,
};
use crate::server::game_session::target::TargetSource;
use crate::server::participant::messages::{IncrementScore, PushNotification, SetMatch};

pub struct MatchSession {
    pub match_id: MatchId,
    participants: Vec<ParticipantId>,
    guesses: HashMap<ParticipantId, Option<i64>>,
    target: i64,
    rounds_played: u64,
    targets: Box<dyn TargetSource>,
    directory: Directory,
}

impl Actor for MatchSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        debug!("[Match] Session {} started with {:?}", self.match_id, self.participants);
    }
}

impl MatchSession {
    /// Create an empty match and draw the first target.
    pub fn new(match_id: MatchId, directory: Directory, mut targets: Box<dyn TargetSource>) -> Self {
        let target = targets.next_target();
        Self {
            match_id,
            participants: Vec::with_capacity(PLAYERS_PER_MATCH),
            guesses: HashMap::new(),
            target,
            rounds_played: 0,
            targets,
            directory,
        }
    }

    /// Seat a participant and point its session at this match.
    pub fn add_player(&mut self, participant_id: ParticipantId) -> Result<(), MatchError> {
        self.seat(participant_id.clone())?;
        self.directory
            .participant(&participant_id)
            .do_send(SetMatch(self.match_id.clone()));
        Ok(())
    }

    /// Seat a participant without touching its session. Pair with [`Self::announce`].
    pub fn seat(&mut self, participant_id: ParticipantId) -> Result<(), MatchError> {
        if self.participants.contains(&participant_id) {
            return Err(MatchError::AlreadyMember(participant_id));
        }
        if self.participants.len() >= PLAYERS_PER_MATCH {
            return Err(MatchError::MatchFull);
        }
        self.guesses.insert(participant_id.clone(), None);
        debug!("[Match] {} seated in {}", participant_id, self.match_id);
        self.participants.push(participant_id);
        Ok(())
    }

    /// Point every seated participant's session at this match.
    pub fn announce(&self) {
        for participant_id in &self.participants {
            self.directory
                .participant(participant_id)
                .do_send(SetMatch(self.match_id.clone()));
        }
    }

    /// Store a guess for the current round, then try to resolve it.
    pub fn submit_guess(&mut self, participant_id: &ParticipantId, number: i64) -> GuessOutcome {
        if self.participants.len() < PLAYERS_PER_MATCH {
            return GuessOutcome::MatchNotReady;
        }
        let Some(slot) = self.guesses.get_mut(participant_id) else {
            return GuessOutcome::NotAMember;
        };
        *slot = Some(number);
        self.evaluate();
        GuessOutcome::Accepted
    }

    /// Resolve the round if both guesses are present. No-op otherwise.
    pub fn evaluate(&mut self) -> Option<RoundResult> {
        let [first, second] = self.participants.as_slice() else {
            return None;
        };
        let (Some(first_guess), Some(second_guess)) = (self.guess_of(first), self.guess_of(second)) else {
            return None;
        };
        let result = resolve_round(self.target, (first, first_guess), (second, second_guess));

        match &result {
            RoundResult::Tie { target } => {
                info!("[Match] {} round {} tied on target {}", self.match_id, self.rounds_played + 1, target);
                for participant_id in &self.participants {
                    self.notify(participant_id, tie_message(*target));
                }
            }
            RoundResult::Decided { winner, loser, target } => {
                info!("[Match] {} round {} won by {} (target {})", self.match_id, self.rounds_played + 1, winner, target);
                self.directory.participant(winner).do_send(IncrementScore);
                self.notify(winner, win_message(*target));
                self.notify(loser, loss_message(*target));
            }
        }
        self.start_next_round();
        Some(result)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            match_id: self.match_id.clone(),
            participants: self.participants.clone(),
            guessed: self
                .participants
                .iter()
                .filter(|id| self.guess_of(id).is_some())
                .cloned()
                .collect(),
            rounds_played: self.rounds_played,
            target: self.target,
        }
    }

    fn guess_of(&self, participant_id: &ParticipantId) -> Option<i64> {
        self.guesses.get(participant_id).copied().flatten()
    }

    fn notify(&self, participant_id: &ParticipantId, message: String) {
        self.directory
            .participant(participant_id)
            .do_send(PushNotification(message));
    }

    fn start_next_round(&mut self) {
        for slot in self.guesses.values_mut() {
            *slot = None;
        }
        self.target = self.targets.next_target();
        self.rounds_played += 1;
    }
}

impl Handler<AddPlayer> for MatchSession {
    type Result = Result<(), MatchError>;

    fn handle(&mut self, msg: AddPlayer, _: &mut Context<Self>) -> Self::Result {
        self.add_player(msg.participant_id)
    }
}

impl Handler<Guess> for MatchSession {
    type Result = MessageResult<Guess>;

    fn handle(&mut self, msg: Guess, _: &mut Context<Self>) -> Self::Result {
        let outcome = self.submit_guess(&msg.participant_id, msg.number);
        debug!("[Match] {} guess from {}: {:?}", self.match_id, msg.participant_id, outcome);
        MessageResult(outcome)
    }
}

impl Handler<GetSnapshot> for MatchSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.snapshot())
    }
}
