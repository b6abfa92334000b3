/// HTTP server configuration.
///
/// Defaults for the bind address. Both can be overridden at startup through
/// `GUESS_MATCH_HOST` and `GUESS_MATCH_PORT`.
use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when `GUESS_MATCH_PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 8080;

pub const HOST_ENV: &str = "GUESS_MATCH_HOST";
pub const PORT_ENV: &str = "GUESS_MATCH_PORT";

/// Resolve the bind address from the environment, falling back to the defaults.
pub fn bind_address() -> (String, u16) {
    let host = std::env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = match std::env::var(PORT_ENV) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("[Config] Ignoring invalid {}={:?}, using {}", PORT_ENV, raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };
    (host, port)
}
