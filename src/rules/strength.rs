//! Effective strength calculation with continuous-modifier application.
//!
//! Modifiers apply in a fixed order so simultaneous effects cannot be
//! ambiguous:
//!
//! 1. Cover Fire: cards covered by an active, controlled Cover Fire in
//!    this theater are forced to 4
//! 2. Escalation: the controller's facedown cards here are forced to 4
//! 3. per-card values are summed
//! 4. Support: +3 per active, controlled Support in an adjacent theater
//!
//! Forcing (steps 1-2) overwrites the base value and never stacks with
//! itself; Support bonuses (step 4) are cumulative.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{TheaterPosition, THEATER_COUNT};
use crate::cards::CardId;
use crate::core::{PlayerId, PLAYER_COUNT};
use crate::effects::ContinuousEffect;
use crate::state::BattleState;

/// Compute a player's total effective strength in one theater.
///
/// An empty stack scores 0, before any Support bonus.
#[must_use]
pub fn theater_strength(state: &BattleState, position: TheaterPosition, player: PlayerId) -> u32 {
    let stack = state.theater_at(position).stack(player);
    if stack.is_empty() {
        return 0;
    }

    // Per-card values, keyed by the stable card handle.
    let mut values: FxHashMap<CardId, u32> = stack
        .cards()
        .iter()
        .map(|&card| (card, state.card(card).base_strength(state.definition(card))))
        .collect();

    let active = state.active_continuous_effects();

    for effect in &active {
        if effect.effect != ContinuousEffect::CoverFire || effect.controller != player {
            continue;
        }
        if state.card(effect.card).theater != Some(position) {
            continue;
        }
        for &covered in stack.cards_covered_by(effect.card) {
            values.insert(covered, 4);
        }
    }

    for effect in &active {
        if effect.effect != ContinuousEffect::Escalation || effect.controller != player {
            continue;
        }
        for &card in stack.cards() {
            if state.card(card).is_facedown() {
                values.insert(card, 4);
            }
        }
    }

    let mut total: u32 = values.values().sum();

    for effect in &active {
        if effect.effect != ContinuousEffect::Support || effect.controller != player {
            continue;
        }
        if let Some(support_position) = state.card(effect.card).theater {
            if support_position.is_adjacent_to(position) {
                total += 3;
            }
        }
    }

    total
}

/// Per-theater, per-player strength totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthTable {
    totals: [[u32; PLAYER_COUNT]; THEATER_COUNT],
}

impl StrengthTable {
    /// Get a player's total in a theater.
    #[must_use]
    pub fn get(&self, position: TheaterPosition, player: PlayerId) -> u32 {
        self.totals[position.index()][player.index()]
    }
}

/// Compute the full strength table, used at battle end to pick each
/// theater's winner.
#[must_use]
pub fn all_strengths(state: &BattleState) -> StrengthTable {
    let mut table = StrengthTable::default();
    for position in TheaterPosition::all() {
        for player in PlayerId::both() {
            table.totals[position.index()][player.index()] =
                theater_strength(state, position, player);
        }
    }
    table
}
