//! Board geometry: theater kinds, positions, and per-player stacks.
//!
//! ## Key Types
//!
//! - `TheaterKind`: Air/Land/Sea affinity
//! - `TheaterPosition`: slot in the three-theater row, with adjacency
//! - `TheaterStack`: a player's ordered pile within one theater
//! - `Theater`: kind + position + one stack per player

pub mod position;
pub mod theater;

pub use position::{TheaterKind, TheaterPosition, THEATER_COUNT};
pub use theater::{Theater, TheaterStack};
