//! Theaters and per-player card stacks.
//!
//! Each theater holds one ordered stack per player. The last card placed
//! is *uncovered*; every card beneath it is *covered*. Coverage is derived
//! from position in the stack, never stored as a flag.
//!
//! Stacks are purely structural: they hold card IDs and know nothing about
//! orientation, strength, or effects.

use serde::{Deserialize, Serialize};

use crate::board::position::{TheaterKind, TheaterPosition};
use crate::cards::CardId;
use crate::core::{PlayerId, PlayerMap};

/// A player's ordered pile of cards within one theater.
///
/// Index 0 is the bottom of the stack; the last element is the uncovered
/// (topmost) card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheaterStack {
    cards: Vec<CardId>,
}

impl TheaterStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in the stack, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of cards in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The uncovered (topmost) card, if any.
    #[must_use]
    pub fn uncovered_card(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// All covered cards, bottom to top (everything except the topmost).
    #[must_use]
    pub fn covered_cards(&self) -> &[CardId] {
        if self.cards.len() > 1 {
            &self.cards[..self.cards.len() - 1]
        } else {
            &[]
        }
    }

    /// Place a card on top of the stack.
    pub fn place_on_top(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Remove a card from the stack by identity.
    ///
    /// Returns `true` if the card was present. Removing an absent card is
    /// a no-op, not an error.
    pub fn remove(&mut self, card: CardId) -> bool {
        if let Some(idx) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(idx);
            true
        } else {
            false
        }
    }

    /// Check whether a card is the uncovered (topmost) card.
    #[must_use]
    pub fn is_uncovered(&self, card: CardId) -> bool {
        self.cards.last() == Some(&card)
    }

    /// Check whether a card is in the stack but not on top.
    #[must_use]
    pub fn is_covered(&self, card: CardId) -> bool {
        self.cards.contains(&card) && !self.is_uncovered(card)
    }

    /// Cards strictly below the given card, bottom to top.
    ///
    /// Empty if the card is not in the stack.
    #[must_use]
    pub fn cards_covered_by(&self, card: CardId) -> &[CardId] {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => &self.cards[..idx],
            None => &[],
        }
    }
}

/// One theater on the battlefield: a kind, a row position, and a stack for
/// each player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theater {
    /// The theater's kind (Air/Land/Sea).
    pub kind: TheaterKind,

    /// The theater's position in the row.
    pub position: TheaterPosition,

    stacks: PlayerMap<TheaterStack>,
}

impl Theater {
    /// Create an empty theater.
    #[must_use]
    pub fn new(kind: TheaterKind, position: TheaterPosition) -> Self {
        Self {
            kind,
            position,
            stacks: PlayerMap::with_default(),
        }
    }

    /// A player's stack in this theater.
    #[must_use]
    pub fn stack(&self, player: PlayerId) -> &TheaterStack {
        &self.stacks[player]
    }

    /// Mutable access to a player's stack.
    pub fn stack_mut(&mut self, player: PlayerId) -> &mut TheaterStack {
        &mut self.stacks[player]
    }

    /// Total number of cards in the theater, both players combined.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stacks.values().map(TheaterStack::len).sum()
    }

    /// All cards in the theater, player 0's stack bottom-to-top followed by
    /// player 1's.
    pub fn all_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.stacks.values().flat_map(|stack| stack.cards().iter().copied())
    }
}

impl std::fmt::Display for Theater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u8) -> CardId {
        CardId::new(id)
    }

    #[test]
    fn test_place_and_uncovered() {
        let mut stack = TheaterStack::new();
        assert!(stack.uncovered_card().is_none());

        stack.place_on_top(card(0));
        assert_eq!(stack.uncovered_card(), Some(card(0)));

        stack.place_on_top(card(1));
        assert_eq!(stack.uncovered_card(), Some(card(1)));
        assert!(stack.is_covered(card(0)));
        assert!(stack.is_uncovered(card(1)));
    }

    #[test]
    fn test_removing_top_uncovers_next() {
        let mut stack = TheaterStack::new();
        stack.place_on_top(card(0));
        stack.place_on_top(card(1));
        stack.place_on_top(card(2));

        assert!(stack.remove(card(2)));
        assert_eq!(stack.uncovered_card(), Some(card(1)));
        assert!(stack.is_uncovered(card(1)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut stack = TheaterStack::new();
        stack.place_on_top(card(0));

        assert!(!stack.remove(card(5)));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_covered_cards() {
        let mut stack = TheaterStack::new();
        assert!(stack.covered_cards().is_empty());

        stack.place_on_top(card(0));
        assert!(stack.covered_cards().is_empty());

        stack.place_on_top(card(1));
        stack.place_on_top(card(2));
        assert_eq!(stack.covered_cards(), &[card(0), card(1)]);
    }

    #[test]
    fn test_cards_covered_by() {
        let mut stack = TheaterStack::new();
        stack.place_on_top(card(0));
        stack.place_on_top(card(1));
        stack.place_on_top(card(2));

        assert_eq!(stack.cards_covered_by(card(2)), &[card(0), card(1)]);
        assert_eq!(stack.cards_covered_by(card(1)), &[card(0)]);
        assert!(stack.cards_covered_by(card(0)).is_empty());
        assert!(stack.cards_covered_by(card(9)).is_empty());
    }

    #[test]
    fn test_theater_stacks_are_independent() {
        let mut theater = Theater::new(TheaterKind::Air, TheaterPosition::new(0));
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        theater.stack_mut(p0).place_on_top(card(0));
        theater.stack_mut(p1).place_on_top(card(6));
        theater.stack_mut(p1).place_on_top(card(7));

        assert_eq!(theater.stack(p0).len(), 1);
        assert_eq!(theater.stack(p1).len(), 2);
        assert_eq!(theater.total_cards(), 3);
    }

    #[test]
    fn test_all_cards_order() {
        let mut theater = Theater::new(TheaterKind::Sea, TheaterPosition::new(2));
        theater.stack_mut(PlayerId::new(0)).place_on_top(card(12));
        theater.stack_mut(PlayerId::new(1)).place_on_top(card(13));
        theater.stack_mut(PlayerId::new(0)).place_on_top(card(14));

        let cards: Vec<_> = theater.all_cards().collect();
        assert_eq!(cards, vec![card(12), card(14), card(13)]);
    }

    #[test]
    fn test_theater_serialization() {
        let mut theater = Theater::new(TheaterKind::Land, TheaterPosition::new(1));
        theater.stack_mut(PlayerId::new(0)).place_on_top(card(6));

        let json = serde_json::to_string(&theater).unwrap();
        let deserialized: Theater = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.kind, TheaterKind::Land);
        assert_eq!(deserialized.stack(PlayerId::new(0)).cards(), &[card(6)]);
    }
}
