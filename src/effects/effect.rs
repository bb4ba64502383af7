//! Effect vocabulary: timings, the 13 tactical effects, and choice values.
//!
//! A card's ability is a single sum type with three cases: no ability,
//! an instant effect, or a continuous effect. Instant effects resolve once
//! when their card becomes active; continuous effects are never executed;
//! their presence is queried by the strength calculator and the deployment
//! validator.

use serde::{Deserialize, Serialize};

use crate::board::TheaterPosition;
use crate::cards::CardId;

/// When an effect applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timing {
    /// Resolved exactly once, immediately upon the card becoming active.
    Instant,
    /// No discrete activation; queried whenever strength or legality is
    /// computed.
    Continuous,
}

/// An effect resolved once on activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstantEffect {
    /// Grant the controller a one-shot permission to deploy the next card
    /// faceup to any theater.
    AirDrop,
    /// Flip any card in a theater adjacent to this card's theater.
    Maneuver,
    /// Flip any card in any theater.
    Ambush,
    /// Draw the top card of the pile and place it facedown in a chosen
    /// adjacent theater, or decline.
    Reinforce,
    /// Flip one of the opponent's battlefield cards, then one of your own.
    /// Mandatory; impossible if either side has no battlefield cards.
    Disrupt,
    /// Move one of your battlefield cards to a different theater.
    Transport,
    /// Return one of your facedown battlefield cards to hand, or decline.
    /// Returning a card grants an extra turn.
    Redeploy,
}

impl InstantEffect {
    /// Whether the effect may be declined by its controller.
    ///
    /// Declinable effects still enumerate concrete choices; the ones that
    /// carry an explicit [`Choice::Decline`] entry (Reinforce, Redeploy)
    /// can be resolved to a no-op.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        match self {
            InstantEffect::AirDrop | InstantEffect::Disrupt => false,
            InstantEffect::Maneuver
            | InstantEffect::Ambush
            | InstantEffect::Reinforce
            | InstantEffect::Transport
            | InstantEffect::Redeploy => true,
        }
    }
}

/// An effect whose presence modifies strength or deployment legality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContinuousEffect {
    /// +3 to the controller's total in each theater adjacent to this
    /// card's theater.
    Support,
    /// Cards covered by this card have effective strength 4.
    CoverFire,
    /// The controller's facedown cards have effective strength 4.
    Escalation,
    /// The controller may deploy strength ≤ 3 cards faceup to
    /// non-matching theaters.
    Aerodrome,
    /// Opponents' facedown deployments are destroyed immediately after
    /// placement.
    Containment,
    /// A card placed in an adjacent theater that already held 3+ cards is
    /// destroyed.
    Blockade,
}

/// A card's ability: none, instant, or continuous.
///
/// Strength-6 cards carry `Ability::None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// No ability.
    #[default]
    None,
    /// An instant effect, resolved once on activation.
    Instant(InstantEffect),
    /// A continuous effect, queried on demand.
    Continuous(ContinuousEffect),
}

impl Ability {
    /// The ability's timing, if it has one.
    #[must_use]
    pub const fn timing(self) -> Option<Timing> {
        match self {
            Ability::None => None,
            Ability::Instant(_) => Some(Timing::Instant),
            Ability::Continuous(_) => Some(Timing::Continuous),
        }
    }

    /// The instant effect, if this is one.
    #[must_use]
    pub const fn as_instant(self) -> Option<InstantEffect> {
        match self {
            Ability::Instant(effect) => Some(effect),
            _ => None,
        }
    }

    /// The continuous effect, if this is one.
    #[must_use]
    pub const fn as_continuous(self) -> Option<ContinuousEffect> {
        match self {
            Ability::Continuous(effect) => Some(effect),
            _ => None,
        }
    }
}

/// A legal way to resolve an instant effect.
///
/// `choices` enumerates these; `execute` consumes exactly one of them.
/// Effects with no decision to make produce the single [`Choice::Resolve`]
/// sentinel. Declinable effects include an explicit [`Choice::Decline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Resolve an effect that has no decision to make.
    Resolve,
    /// Decline an optional effect; execution is a no-op.
    Decline,
    /// Flip the given card (Maneuver, Ambush).
    Flip(CardId),
    /// Place the drawn card facedown in the given theater (Reinforce).
    Reinforce(TheaterPosition),
    /// Flip the opponent's card, then your own (Disrupt).
    Disrupt {
        /// The opponent's battlefield card to flip first.
        opponent_card: CardId,
        /// Your own battlefield card to flip second.
        own_card: CardId,
    },
    /// Move your card to the given theater (Transport).
    Transport {
        /// The battlefield card to move.
        card: CardId,
        /// The destination theater.
        destination: TheaterPosition,
    },
    /// Return the given facedown card to hand (Redeploy).
    Return(CardId),
}
