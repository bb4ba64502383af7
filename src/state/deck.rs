//! The draw pile.
//!
//! An ordered pile of card IDs. The last element is the top; destroyed
//! cards go to the bottom. Drawing from an empty pile yields `None`,
//! never an error.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::GameRng;

/// The shared pile cards are drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vec<CardId>,
}

impl DrawPile {
    /// Create a pile from the given cards, bottom to top.
    #[must_use]
    pub fn new(cards: Vec<CardId>) -> Self {
        Self { cards }
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Cards in the pile, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Look at the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Remove and return the top card, or `None` if the pile is empty.
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Place a card under the pile.
    pub fn place_on_bottom(&mut self, card: CardId) {
        self.cards.insert(0, card);
    }

    /// Remove a card from the pile by identity.
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

    /// Shuffle the pile with a seeded RNG.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }
}
