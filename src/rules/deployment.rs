//! Deployment legality and post-play destruction triggers.
//!
//! A faceup card must go to its matching theater unless a permission flag
//! or an active Aerodrome says otherwise. Facedown deployment is always
//! legal. Immediately after a placement, Containment and Blockade are
//! checked independently; either can destroy the placed card.

use crate::board::TheaterPosition;
use crate::cards::CardId;
use crate::core::PlayerId;
use crate::effects::ContinuousEffect;
use crate::state::BattleState;

/// Check whether a faceup deployment of `card` to the theater at
/// `position` is legal for `player`.
///
/// Legal when any of:
/// - the theater's kind matches the card's affinity
/// - the player holds the one-shot any-theater permission
/// - the player controls an active Aerodrome and the card's printed
///   strength is at most 3
#[must_use]
pub fn can_deploy_faceup(
    state: &BattleState,
    card: CardId,
    position: TheaterPosition,
    player: PlayerId,
) -> bool {
    let definition = state.definition(card);

    if definition.theater == state.theater_at(position).kind {
        return true;
    }

    if state.any_theater_deploy(player) {
        return true;
    }

    definition.strength <= 3
        && state.active_continuous_effects().iter().any(|active| {
            active.effect == ContinuousEffect::Aerodrome && active.controller == player
        })
}

/// Check whether Containment destroys a just-placed card.
///
/// Fires when the placed card is facedown and an opponent-controlled
/// Containment is active anywhere.
#[must_use]
pub fn containment_destroys(state: &BattleState, played: CardId, player: PlayerId) -> bool {
    if !state.card(played).is_facedown() {
        return false;
    }

    state.active_continuous_effects().iter().any(|active| {
        active.effect == ContinuousEffect::Containment && active.controller != player
    })
}

/// Check whether Blockade destroys a card placed into the theater at
/// `position`.
///
/// `cards_before_play` is the theater's total card count (both players)
/// before the placement. Fires when an active Blockade, either player's,
/// sits in an adjacent theater and the target already held 3+ cards.
#[must_use]
pub fn blockade_destroys(
    state: &BattleState,
    position: TheaterPosition,
    cards_before_play: usize,
) -> bool {
    if cards_before_play < 3 {
        return false;
    }

    state.active_continuous_effects().iter().any(|active| {
        active.effect == ContinuousEffect::Blockade
            && state
                .card(active.card)
                .theater
                .is_some_and(|blockade_position| blockade_position.is_adjacent_to(position))
    })
}

/// Evaluate both post-play triggers for a just-placed card and destroy it
/// if either fires.
///
/// Returns `true` if the card was destroyed.
pub fn apply_post_play_triggers(
    state: &mut BattleState,
    played: CardId,
    position: TheaterPosition,
    player: PlayerId,
    cards_before_play: usize,
) -> bool {
    if containment_destroys(state, played, player)
        || blockade_destroys(state, position, cards_before_play)
    {
        state.destroy_card(played);
        true
    } else {
        false
    }
}
