//! Game rules: deployment legality, strength calculation, and scoring.
//!
//! These modules never mutate state on their own (except
//! `apply_post_play_triggers`, which destroys through a battle-state
//! primitive). They read the set of active continuous effects and derive
//! legality, totals, and winners from it.

pub mod deployment;
pub mod scoring;
pub mod strength;

pub use deployment::{
    apply_post_play_triggers, blockade_destroys, can_deploy_faceup, containment_destroys,
};
pub use scoring::{battle_winner, theater_winner, victory_points, BattleEndReason, PlayerPosition};
pub use strength::{all_strengths, theater_strength, StrengthTable};
