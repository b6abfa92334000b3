/// Matchmaking module: wait list and pairing of participants into matches.

pub mod server;
pub mod messages;
pub mod types;
pub mod endpoints;
