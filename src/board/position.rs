//! Board geometry: theater kinds and row positions.
//!
//! The battlefield is a row of three theaters. A theater's *kind*
//! (Air/Land/Sea) determines which cards match it; its *position* (0, 1, 2)
//! determines adjacency. The two are independent because the boards rotate
//! between battles.

use serde::{Deserialize, Serialize};

/// Number of theaters on the battlefield.
pub const THEATER_COUNT: usize = 3;

/// The kind of a theater.
///
/// Each card has an affinity for exactly one kind; faceup deployments must
/// match it unless a permission or continuous effect says otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TheaterKind {
    Air,
    Land,
    Sea,
}

impl TheaterKind {
    /// All theater kinds, in the standard board order.
    #[must_use]
    pub const fn all() -> [TheaterKind; THEATER_COUNT] {
        [TheaterKind::Air, TheaterKind::Land, TheaterKind::Sea]
    }
}

impl std::fmt::Display for TheaterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TheaterKind::Air => "AIR",
            TheaterKind::Land => "LAND",
            TheaterKind::Sea => "SEA",
        };
        write!(f, "{name}")
    }
}

/// Position of a theater in the row (0, 1, or 2).
///
/// Adjacency: the middle position (1) is adjacent to both outer positions;
/// the outer positions (0 and 2) are not adjacent to each other.
///
/// ```
/// use air_land_sea::board::TheaterPosition;
///
/// let left = TheaterPosition::new(0);
/// let middle = TheaterPosition::new(1);
/// let right = TheaterPosition::new(2);
///
/// assert!(left.is_adjacent_to(middle));
/// assert!(middle.is_adjacent_to(right));
/// assert!(!left.is_adjacent_to(right));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TheaterPosition(u8);

impl TheaterPosition {
    /// Create a new theater position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0, 1, or 2.
    #[must_use]
    pub fn new(index: usize) -> Self {
        assert!(index < THEATER_COUNT, "theater position must be 0, 1, or 2, got {index}");
        Self(index as u8)
    }

    /// Get the raw position index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether two positions are adjacent (indices differ by one).
    #[must_use]
    pub const fn is_adjacent_to(self, other: TheaterPosition) -> bool {
        self.0.abs_diff(other.0) == 1
    }

    /// All positions, left to right.
    #[must_use]
    pub const fn all() -> [TheaterPosition; THEATER_COUNT] {
        [TheaterPosition(0), TheaterPosition(1), TheaterPosition(2)]
    }

    /// Positions adjacent to this one, left to right.
    pub fn adjacent(self) -> impl Iterator<Item = TheaterPosition> {
        Self::all()
            .into_iter()
            .filter(move |other| self.is_adjacent_to(*other))
    }
}

impl std::fmt::Display for TheaterPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pos {}", self.0)
    }
}
