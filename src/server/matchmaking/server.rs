/// Queue coordinator actor.
///
/// Singleton holding the FIFO wait list. Every join is handled to completion before the
/// next one starts, so the two oldest waiting participants are paired exactly once and a
/// new match session is opened for them.

use actix::prelude::*;
use std::collections::{HashMap, VecDeque};
use log::{info, debug, error};

use super::messages::{GetQueueStatus, Join, JoinOutcome, Leave, QueueStatus};
use super::types::{MatchId, ParticipantId};
use crate::config::game::PLAYERS_PER_MATCH;
use crate::server::directory::Directory;
use crate::server::game_session::messages::MatchError;
use crate::server::game_session::server::MatchSession;
use crate::server::game_session::target::{TargetSource, UniformTargets};

/// Builds the target source for each new match.
pub type TargetFactory = Box<dyn FnMut() -> Box<dyn TargetSource>>;

pub struct QueueCoordinator {
    /// Participants waiting for an opponent, oldest first.
    waiting: VecDeque<ParticipantId>,
    /// Every participant this coordinator has paired, with its match.
    assignments: HashMap<ParticipantId, MatchId>,
    matches_made: u64,
    directory: Directory,
    targets: TargetFactory,
}

impl QueueCoordinator {
    /// Create a coordinator whose matches draw targets from the OS-seeded RNG.
    pub fn new(directory: Directory) -> Self {
        Self::with_targets(
            directory,
            Box::new(|| -> Box<dyn TargetSource> { Box::new(UniformTargets::from_os_rng()) }),
        )
    }

    /// Create a coordinator with reproducible targets. Match `n` (0-based) draws from
    /// `seed + n`, so matches still differ from one another.
    pub fn seeded(directory: Directory, seed: u64) -> Self {
        let mut next_seed = seed;
        Self::with_targets(
            directory,
            Box::new(move || -> Box<dyn TargetSource> {
                let targets = UniformTargets::seeded(next_seed);
                next_seed = next_seed.wrapping_add(1);
                Box::new(targets)
            }),
        )
    }

    pub fn with_targets(directory: Directory, targets: TargetFactory) -> Self {
        Self {
            waiting: VecDeque::new(),
            assignments: HashMap::new(),
            matches_made: 0,
            directory,
            targets,
        }
    }

    fn join(&mut self, participant_id: ParticipantId) -> JoinOutcome {
        if let Some(match_id) = self.assignments.get(&participant_id) {
            debug!("[Queue] {} already plays in {}", participant_id, match_id);
            return JoinOutcome::AlreadyMatched { match_id: match_id.clone() };
        }
        if let Some(index) = self.waiting.iter().position(|id| id == &participant_id) {
            return JoinOutcome::AlreadyQueued { position: index + 1 };
        }

        self.waiting.push_back(participant_id.clone());
        debug!("[Queue] {} joined ({} waiting)", participant_id, self.waiting.len());

        if self.waiting.len() < PLAYERS_PER_MATCH {
            return JoinOutcome::Queued { position: self.waiting.len() };
        }
        let first = self.waiting[0].clone();
        let second = self.waiting[1].clone();

        match self.open_match(&first, &second) {
            Ok(match_id) => {
                self.waiting.drain(..PLAYERS_PER_MATCH);
                let opponent = if first == participant_id { second } else { first };
                JoinOutcome::Paired { match_id, opponent }
            }
            Err(e) => {
                error!("[Queue] Failed to open match for {} and {}: {}", first, second, e);
                JoinOutcome::Queued { position: self.waiting.len() }
            }
        }
    }

    /// Open a match for the two oldest waiters. The wait list is left to the caller.
    fn open_match(&mut self, first: &ParticipantId, second: &ParticipantId) -> Result<MatchId, MatchError> {
        let match_id = MatchId::issue();
        let mut session = MatchSession::new(match_id.clone(), self.directory.clone(), (self.targets)());
        session.seat(first.clone())?;
        session.seat(second.clone())?;

        // Registered before any participant learns the match id, so a lookup by that id
        // always resolves.
        let ctx = Context::<MatchSession>::new();
        self.directory.register_match(match_id.clone(), ctx.address());
        session.announce();
        ctx.run(session);

        self.assignments.insert(first.clone(), match_id.clone());
        self.assignments.insert(second.clone(), match_id.clone());
        self.matches_made += 1;
        info!(
            "[Queue] Match {} created for {} and {} ({} matches open)",
            match_id, first, second, self.directory.match_count()
        );
        Ok(match_id)
    }

    fn leave(&mut self, participant_id: &ParticipantId) {
        let before = self.waiting.len();
        self.waiting.retain(|id| id != participant_id);
        if self.waiting.len() != before {
            debug!("[Queue] {} left the queue", participant_id);
        }
    }

    fn status(&self) -> QueueStatus {
        QueueStatus {
            waiting: self.waiting.len(),
            matches_made: self.matches_made,
        }
    }
}

impl Actor for QueueCoordinator {
    type Context = Context<Self>;
}

impl Handler<Join> for QueueCoordinator {
    type Result = MessageResult<Join>;

    fn handle(&mut self, msg: Join, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.join(msg.participant_id))
    }
}

impl Handler<Leave> for QueueCoordinator {
    type Result = ();

    fn handle(&mut self, msg: Leave, _ctx: &mut Self::Context) -> Self::Result {
        self.leave(&msg.participant_id);
    }
}

impl Handler<GetQueueStatus> for QueueCoordinator {
    type Result = MessageResult<GetQueueStatus>;

    fn handle(&mut self, _msg: GetQueueStatus, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.status())
    }
}
