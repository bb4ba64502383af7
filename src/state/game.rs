//! Match-level state spanning a series of battles.
//!
//! A match is a sequence of battles played to a winning score. Between
//! battles the theater boards rotate one position and the players swap
//! who goes first. The match layer holds no battle internals; it seeds
//! each `BattleState` and folds the battle's outcome into the running
//! scores.

use serde::{Deserialize, Serialize};

use crate::board::{TheaterKind, THEATER_COUNT};
use crate::core::{GameRng, PlayerId, PlayerMap};

use super::battle::BattleState;

/// Default score needed to win a match.
pub const DEFAULT_WINNING_SCORE: u32 = 12;

/// Phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between battles.
    Setup,
    /// A battle is being played.
    BattleInProgress,
    /// A battle finished and is being scored.
    BattleScoring,
    /// A player reached the winning score.
    GameOver,
}

/// State of a match: running scores, board rotation, and first-player
/// alternation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Score needed to win.
    pub winning_score: u32,

    /// Number of battles started so far.
    pub battle_number: u32,

    /// Current match phase.
    pub phase: GamePhase,

    /// The player who goes first in the next battle.
    pub first_player: PlayerId,

    theater_order: [TheaterKind; THEATER_COUNT],
    scores: PlayerMap<u32>,
}

impl MatchState {
    /// Create a new match with the standard winning score.
    #[must_use]
    pub fn new(first_player: PlayerId) -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            battle_number: 0,
            phase: GamePhase::Setup,
            first_player,
            theater_order: TheaterKind::all(),
            scores: PlayerMap::with_value(0),
        }
    }

    /// Override the winning score (builder pattern).
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// The current left-to-right board order.
    #[must_use]
    pub fn theater_order(&self) -> [TheaterKind; THEATER_COUNT] {
        self.theater_order
    }

    /// A player's running score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Shift the theater boards one position: the leftmost board moves to
    /// the right end.
    pub fn rotate_theater_order(&mut self) {
        self.theater_order.rotate_left(1);
    }

    /// Exchange who goes first.
    pub fn swap_first_player(&mut self) {
        self.first_player = self.first_player.opponent();
    }

    /// Start the next battle: deal with the supplied RNG and mark the
    /// match in progress.
    #[must_use]
    pub fn start_battle(&mut self, hand_size: usize, rng: &mut GameRng) -> BattleState {
        self.battle_number += 1;
        self.phase = GamePhase::BattleInProgress;
        BattleState::new(self.theater_order, self.first_player, hand_size, rng)
    }

    /// Fold a finished battle into the match: credit the winner, then
    /// rotate the boards and swap the first player for the next battle.
    pub fn record_battle(&mut self, winner: PlayerId, victory_points: u32) {
        self.scores[winner] += victory_points;

        if self.is_over() {
            self.phase = GamePhase::GameOver;
        } else {
            self.phase = GamePhase::Setup;
            self.rotate_theater_order();
            self.swap_first_player();
        }
    }

    /// Check whether a player has reached the winning score.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.scores.values().any(|&score| score >= self.winning_score)
    }

    /// The match winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.scores
            .iter()
            .find(|(_, &score)| score >= self.winning_score)
            .map(|(player, _)| player)
    }
}
