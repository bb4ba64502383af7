//! Card instances - runtime card state.
//!
//! `CardInstance` tracks the mutable state of one card during a battle:
//! orientation, zone, owner, and theater. Exactly 18 instances exist per
//! battle, one per definition, stored in the battle's card arena and
//! addressed by `CardId`.
//!
//! Invariants maintained by the battle state's mutation primitives:
//! - zone is `Battlefield` if and only if `theater` is present
//! - zone is `DrawPile` implies `owner` and `theater` are absent
//!
//! "Destruction" is a state transition back to the draw pile, never
//! deallocation.

use serde::{Deserialize, Serialize};

use crate::board::TheaterPosition;
use crate::core::PlayerId;

use super::definition::{CardDefinition, CardId};

/// Which way a card faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    FaceUp,
    FaceDown,
}

impl Orientation {
    /// The opposite orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::FaceUp => Orientation::FaceDown,
            Orientation::FaceDown => Orientation::FaceUp,
        }
    }
}

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand,
    Battlefield,
    DrawPile,
}

/// A card in a battle.
///
/// Strength of a facedown card is 2 regardless of its printed value;
/// continuous modifiers (Support, Cover Fire, Escalation) are layered on
/// top by the strength calculator and never stored here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// The definition this instance wraps.
    pub card: CardId,

    /// Current orientation.
    pub orientation: Orientation,

    /// Current zone.
    pub zone: Zone,

    /// Owning player. Absent while the card sits in the draw pile.
    pub owner: Option<PlayerId>,

    /// Theater the card occupies. Present iff the card is on the
    /// battlefield.
    pub theater: Option<TheaterPosition>,
}

impl CardInstance {
    /// Create a fresh instance: facedown, in the draw pile, unowned.
    #[must_use]
    pub fn new(card: CardId) -> Self {
        Self {
            card,
            orientation: Orientation::FaceDown,
            zone: Zone::DrawPile,
            owner: None,
            theater: None,
        }
    }

    /// Check if the card is faceup.
    #[must_use]
    pub fn is_faceup(&self) -> bool {
        self.orientation == Orientation::FaceUp
    }

    /// Check if the card is facedown.
    #[must_use]
    pub fn is_facedown(&self) -> bool {
        self.orientation == Orientation::FaceDown
    }

    /// Check if the card is on the battlefield.
    #[must_use]
    pub fn is_on_battlefield(&self) -> bool {
        self.zone == Zone::Battlefield
    }

    /// Base effective strength: 2 if facedown, else the printed strength.
    ///
    /// # Panics
    ///
    /// Panics (in debug builds) if `definition` is not this card's
    /// definition.
    #[must_use]
    pub fn base_strength(&self, definition: &CardDefinition) -> u32 {
        debug_assert_eq!(definition.id, self.card);
        if self.is_facedown() {
            2
        } else {
            u32::from(definition.strength)
        }
    }

    /// Flip the card over.
    pub fn flip(&mut self) {
        self.orientation = self.orientation.flipped();
    }
}
