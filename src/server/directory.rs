// src/server/directory.rs

//! In-memory directory of live session actors.
//!
//! Sessions refer to each other by id only and resolve addresses here, so no session
//! ever owns another. Participant sessions are spawned on first lookup. A shard lock is
//! held for the map access alone, never across a message send or an await. Nothing is
//! ever evicted: entries live as long as the process.

use actix::prelude::*;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;

use crate::server::game_session::server::MatchSession;
use crate::server::matchmaking::types::{MatchId, ParticipantId};
use crate::server::participant::session::ParticipantSession;

/// Cheap to clone; every clone shares the same entries.
#[derive(Clone, Default)]
pub struct Directory {
    participants: Arc<DashMap<ParticipantId, Addr<ParticipantSession>>>,
    matches: Arc<DashMap<MatchId, Addr<MatchSession>>>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the participant's session, spawning it if this id was never seen.
    pub fn participant(&self, participant_id: &ParticipantId) -> Addr<ParticipantSession> {
        self.participants
            .entry(participant_id.clone())
            .or_insert_with(|| {
                debug!("[Directory] Spawning session for participant {}", participant_id);
                ParticipantSession::new(participant_id.clone(), self.clone()).start()
            })
            .value()
            .clone()
    }

    pub fn register_match(&self, match_id: MatchId, addr: Addr<MatchSession>) {
        debug!("[Directory] Registering match {}", match_id);
        self.matches.insert(match_id, addr);
    }

    pub fn match_session(&self, match_id: &MatchId) -> Option<Addr<MatchSession>> {
        self.matches.get(match_id).map(|entry| entry.value().clone())
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::participant::messages::{GetScore, IncrementScore};

    #[actix::test]
    async fn test_participant_lookup_reuses_session() {
        let directory = Directory::new();
        let alice = ParticipantId::from("alice");

        directory.participant(&alice).send(IncrementScore).await.unwrap();
        let score = directory.participant(&alice).send(GetScore).await.unwrap();
        assert_eq!(score, 1);
    }

    #[actix::test]
    async fn test_clones_share_entries() {
        let directory = Directory::new();
        let other = directory.clone();
        let alice = ParticipantId::from("alice");

        directory.participant(&alice).send(IncrementScore).await.unwrap();
        assert_eq!(other.participant(&alice).send(GetScore).await.unwrap(), 1);
    }

    #[actix::test]
    async fn test_repeated_lookups_return_same_address() {
        let directory = Directory::new();
        let other = directory.clone();
        let alice = ParticipantId::from("alice");

        let first = directory.participant(&alice);
        assert!(first == other.participant(&alice));
        assert!(first != directory.participant(&ParticipantId::from("bob")));
    }

    #[actix::test]
    async fn test_unknown_match_is_absent() {
        let directory = Directory::new();
        assert!(directory.match_session(&MatchId::from("nope")).is_none());
        assert_eq!(directory.match_count(), 0);
    }
}
