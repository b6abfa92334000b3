pub mod server;
pub mod messages;
pub mod round_resolution;
pub mod target;
pub mod endpoints;
