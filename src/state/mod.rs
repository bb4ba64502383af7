//! Game state: the draw pile, battle state, and match state.
//!
//! ## Key Types
//!
//! - `DrawPile`: ordered pile, top drawn, destroyed cards to the bottom
//! - `BattleState`: one battle's complete state and all mutation
//!   primitives
//! - `MatchState`: scores, board rotation, and first-player alternation
//!   across battles

pub mod battle;
pub mod deck;
pub mod game;

pub use battle::{ActiveEffect, BattlePhase, BattleState, PermissionFlags, PlayerState};
pub use deck::DrawPile;
pub use game::{GamePhase, MatchState, DEFAULT_WINNING_SCORE};
