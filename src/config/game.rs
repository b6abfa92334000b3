/// Game configuration constants.
/// 
/// This module defines the gameplay parameters of a guessing round.
pub const TARGET_MIN: i64 = 0; // Smallest target a round can draw (inclusive).

/// Largest target a round can draw (inclusive).
pub const TARGET_MAX: i64 = 100;

/// Number of participants in every match.
pub const PLAYERS_PER_MATCH: usize = 2;

/// Environment variable holding an optional RNG seed for reproducible targets.
pub const SEED_ENV: &str = "GUESS_MATCH_SEED";

/// Seed for target draws, if one is configured and parses as `u64`.
pub fn seed_from_env() -> Option<u64> {
    std::env::var(SEED_ENV).ok()?.parse().ok()
}
