//! Catalog of the 18 card definitions.
//!
//! The game has a fixed card set: one card per (theater, strength) pair,
//! 3 theaters × strengths 1-6. Strength-6 cards carry no ability.

use serde::{Deserialize, Serialize};

use crate::board::TheaterKind;
use crate::effects::{ContinuousEffect, InstantEffect};

use super::definition::{CardDefinition, CardId, CARD_COUNT};

/// The complete set of card definitions for a game.
///
/// ## Example
///
/// ```
/// use air_land_sea::cards::{Catalog, CardId};
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.len(), 18);
/// assert_eq!(catalog.get(CardId::new(0)).name, "Support");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
}

impl Catalog {
    /// Build a catalog from exactly 18 definitions.
    ///
    /// # Panics
    ///
    /// Panics if there are not exactly 18 cards, if any ID is duplicated
    /// or out of place, or if any (theater, strength) pair repeats.
    #[must_use]
    pub fn new(mut cards: Vec<CardDefinition>) -> Self {
        assert_eq!(cards.len(), CARD_COUNT, "catalog must hold exactly 18 cards");

        cards.sort_by_key(|card| card.id);
        for (index, card) in cards.iter().enumerate() {
            assert_eq!(card.id.index(), index, "card ids must cover 0-17 exactly once");
        }

        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                assert!(
                    a.theater != b.theater || a.strength != b.strength,
                    "duplicate (theater, strength) pair: {} {}",
                    a.theater,
                    a.strength
                );
            }
        }

        Self { cards }
    }

    /// The standard printed card set.
    #[must_use]
    pub fn standard() -> Self {
        use ContinuousEffect::{Aerodrome, Blockade, Containment, CoverFire, Escalation, Support};
        use InstantEffect::{AirDrop, Ambush, Disrupt, Maneuver, Redeploy, Reinforce, Transport};
        use TheaterKind::{Air, Land, Sea};

        let card = |id: u8, name: &str, theater, strength| {
            CardDefinition::new(CardId::new(id), name, theater, strength)
        };

        Self::new(vec![
            card(0, "Support", Air, 1).with_continuous(Support),
            card(1, "Air Drop", Air, 2).with_instant(AirDrop),
            card(2, "Maneuver", Air, 3).with_instant(Maneuver),
            card(3, "Aerodrome", Air, 4).with_continuous(Aerodrome),
            card(4, "Containment", Air, 5).with_continuous(Containment),
            card(5, "Heavy Bombers", Air, 6),
            card(6, "Reinforce", Land, 1).with_instant(Reinforce),
            card(7, "Ambush", Land, 2).with_instant(Ambush),
            card(8, "Maneuver", Land, 3).with_instant(Maneuver),
            card(9, "Cover Fire", Land, 4).with_continuous(CoverFire),
            card(10, "Disrupt", Land, 5).with_instant(Disrupt),
            card(11, "Heavy Tanks", Land, 6),
            card(12, "Transport", Sea, 1).with_instant(Transport),
            card(13, "Escalation", Sea, 2).with_continuous(Escalation),
            card(14, "Maneuver", Sea, 3).with_instant(Maneuver),
            card(15, "Redeploy", Sea, 4).with_instant(Redeploy),
            card(16, "Blockade", Sea, 5).with_continuous(Blockade),
            card(17, "Super Battleship", Sea, 6),
        ])
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> &CardDefinition {
        &self.cards[id.index()]
    }

    /// Number of definitions (always 18).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Find the card with the given theater and strength.
    #[must_use]
    pub fn find(&self, theater: TheaterKind, strength: u8) -> &CardDefinition {
        self.cards
            .iter()
            .find(|card| card.theater == theater && card.strength == strength)
            .expect("every (theater, strength) pair exists in a valid catalog")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
