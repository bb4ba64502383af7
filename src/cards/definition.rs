//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of one of the 18 battle
//! cards: its theater affinity, printed strength, and ability. Runtime
//! state (orientation, zone, owner, theater) lives in `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::board::TheaterKind;
use crate::effects::{Ability, ContinuousEffect, InstantEffect};

/// Number of distinct cards in the game: 3 theaters × strengths 1–6.
pub const CARD_COUNT: usize = 18;

/// Unique identifier for a card definition.
///
/// Because exactly one instance of each card exists in a battle, the ID
/// also serves as the stable handle for that card's instance in the
/// battle's card arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(u8);

impl CardId {
    /// Create a new card ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in `0..18`.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < CARD_COUNT, "card id must be 0-17, got {id}");
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the ID as an arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 18 card IDs in order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..CARD_COUNT as u8).map(CardId)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// One of exactly 18, immutable once constructed.
///
/// ## Example
///
/// ```
/// use air_land_sea::board::TheaterKind;
/// use air_land_sea::cards::{CardDefinition, CardId};
/// use air_land_sea::effects::{Ability, ContinuousEffect};
///
/// let support = CardDefinition::new(CardId::new(0), "Support", TheaterKind::Air, 1)
///     .with_continuous(ContinuousEffect::Support);
///
/// assert_eq!(support.strength, 1);
/// assert_eq!(support.ability, Ability::Continuous(ContinuousEffect::Support));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// The theater this card matches.
    pub theater: TheaterKind,

    /// Printed strength, 1-6.
    pub strength: u8,

    /// The card's ability, if any.
    pub ability: Ability,
}

impl CardDefinition {
    /// Create a new card definition with no ability.
    ///
    /// # Panics
    ///
    /// Panics if `strength` is not in `1..=6`.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, theater: TheaterKind, strength: u8) -> Self {
        assert!(
            (1..=6).contains(&strength),
            "printed strength must be 1-6, got {strength}"
        );
        Self {
            id,
            name: name.into(),
            theater,
            strength,
            ability: Ability::None,
        }
    }

    /// Attach an instant effect (builder pattern).
    #[must_use]
    pub fn with_instant(mut self, effect: InstantEffect) -> Self {
        self.ability = Ability::Instant(effect);
        self
    }

    /// Attach a continuous effect (builder pattern).
    #[must_use]
    pub fn with_continuous(mut self, effect: ContinuousEffect) -> Self {
        self.ability = Ability::Continuous(effect);
        self
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.theater, self.strength, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(17);
        assert_eq!(id.raw(), 17);
        assert_eq!(id.index(), 17);
        assert_eq!(format!("{id}"), "Card(17)");
    }

    #[test]
    #[should_panic(expected = "card id must be 0-17")]
    fn test_out_of_range_id_panics() {
        let _ = CardId::new(18);
    }

    #[test]
    fn test_all_ids() {
        let ids: Vec<_> = CardId::all().collect();
        assert_eq!(ids.len(), CARD_COUNT);
        assert_eq!(ids[0], CardId::new(0));
        assert_eq!(ids[17], CardId::new(17));
    }

    #[test]
    fn test_definition_builder() {
        let card = CardDefinition::new(CardId::new(7), "Ambush", TheaterKind::Land, 2)
            .with_instant(InstantEffect::Ambush);

        assert_eq!(card.name, "Ambush");
        assert_eq!(card.theater, TheaterKind::Land);
        assert_eq!(card.strength, 2);
        assert_eq!(card.ability, Ability::Instant(InstantEffect::Ambush));
    }

    #[test]
    fn test_no_ability_default() {
        let card = CardDefinition::new(CardId::new(5), "Heavy Bombers", TheaterKind::Air, 6);
        assert_eq!(card.ability, Ability::None);
    }

    #[test]
    #[should_panic(expected = "printed strength must be 1-6")]
    fn test_zero_strength_panics() {
        let _ = CardDefinition::new(CardId::new(0), "Bad", TheaterKind::Air, 0);
    }

    #[test]
    #[should_panic(expected = "printed strength must be 1-6")]
    fn test_excess_strength_panics() {
        let _ = CardDefinition::new(CardId::new(0), "Bad", TheaterKind::Air, 7);
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::new(CardId::new(16), "Blockade", TheaterKind::Sea, 5)
            .with_continuous(ContinuousEffect::Blockade);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
