// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the queue coordinator's address and the session directory.
//! Used to share state between HTTP handlers and the actor system.

use actix::Addr;
use crate::server::directory::Directory;
use crate::server::matchmaking::server::QueueCoordinator;

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    /// Address of the queue coordinator actor (wait list and pairing).
    pub coordinator: Addr<QueueCoordinator>,
    /// Lookup of participant and match session actors.
    pub directory: Directory,
}

impl AppState {
    /// Create a new AppState with the given coordinator and directory.
    pub fn new(coordinator: Addr<QueueCoordinator>, directory: Directory) -> Self {
        AppState {
            coordinator,
            directory,
        }
    }
}
