// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state and the session directory
//! - HTTP routing
//! - Queue coordination (wait list, pairing)
//! - Match sessions (rounds, targets, adjudication)
//! - Participant sessions (score, mailbox)

pub mod state;
pub mod router;
pub mod directory;
pub mod matchmaking;
pub mod game_session;
pub mod participant;
pub mod error;
