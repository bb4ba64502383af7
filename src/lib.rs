//! # air-land-sea
//!
//! Rules engine for a two-player card battle game fought across three
//! theaters. Eighteen cards, one per (theater, strength) pair, are
//! dealt, deployed faceup or facedown into per-player stacks, and scored
//! per theater at battle end.
//!
//! ## Design Principles
//!
//! 1. **Library boundary only**: no I/O, no protocol, no presentation.
//!    The orchestration layer supplies decisions and a seed; the engine
//!    answers queries and applies mutations.
//!
//! 2. **Uniform effect protocol**: every effect answers
//!    possibility/choices/execution. Continuous effects answer trivially
//!    and are queried by the strength calculator and deployment validator
//!    instead of being executed.
//!
//! 3. **Stable card handles**: exactly one instance exists per card, so
//!    `CardId` doubles as the arena index. Strength overrides and stack
//!    entries key on it, never on addresses.
//!
//! 4. **Deterministic**: the only randomness is the draw-pile shuffle,
//!    behind a caller-seeded RNG. Same seed, same battle.
//!
//! ## Modules
//!
//! - `core`: player IDs, per-player storage, seeded RNG
//! - `board`: theater kinds, positions, adjacency, stacks
//! - `cards`: definitions, instances, the 18-card catalog
//! - `effects`: the 13 tactical effects and their resolution protocol
//! - `state`: draw pile, battle state and mutation primitives, match state
//! - `rules`: deployment legality, strength calculation, scoring

pub mod board;
pub mod cards;
pub mod core;
pub mod effects;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId, PlayerMap, PLAYER_COUNT};

pub use crate::board::{Theater, TheaterKind, TheaterPosition, TheaterStack, THEATER_COUNT};

pub use crate::cards::{
    Catalog, CardDefinition, CardId, CardInstance, Orientation, Zone, CARD_COUNT,
};

pub use crate::effects::{
    resolve_instant, Ability, Choice, ContinuousEffect, DecisionSource, EffectContext,
    FirstChoice, InstantEffect, Outcome, Timing,
};

pub use crate::state::{
    ActiveEffect, BattlePhase, BattleState, DrawPile, GamePhase, MatchState, PermissionFlags,
    PlayerState, DEFAULT_WINNING_SCORE,
};

pub use crate::rules::{
    all_strengths, apply_post_play_triggers, battle_winner, blockade_destroys, can_deploy_faceup,
    containment_destroys, theater_strength, theater_winner, victory_points, BattleEndReason,
    PlayerPosition, StrengthTable,
};
