/// Participant module: per-participant session state (score, mailbox, match reference).

pub mod session;
pub mod messages;
pub mod endpoints;
