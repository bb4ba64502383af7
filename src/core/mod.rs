//! Core engine types: players and deterministic RNG.

pub mod player;
pub mod rng;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
