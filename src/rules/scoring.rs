//! Battle scoring: theater winners and victory points.
//!
//! The first player wins ties and empty theaters. A battle is worth 6
//! victory points when the loser played out their hand; a withdrawal is
//! worth less the earlier it happens, on a schedule that depends on which
//! seat withdrew.

use serde::{Deserialize, Serialize};

use crate::board::TheaterPosition;
use crate::core::PlayerId;
use crate::rules::strength::theater_strength;
use crate::state::BattleState;

/// Seat within a battle. The first player wins ties and empty theaters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPosition {
    First,
    Second,
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEndReason {
    /// Both players played out their hands.
    AllCardsPlayed,
    /// A player withdrew voluntarily.
    Withdrawal,
}

/// Victory points the winner earns for a battle.
///
/// `cards_remaining_in_hand` is the withdrawing player's hand size at the
/// moment of withdrawal; it is ignored when the battle was played out.
/// Beginner mode flattens every battle to 1 point.
///
/// # Panics
///
/// Panics if the reason is `Withdrawal` and `withdrawing_position` is
/// `None`.
#[must_use]
pub fn victory_points(
    reason: BattleEndReason,
    withdrawing_position: Option<PlayerPosition>,
    cards_remaining_in_hand: usize,
    beginner_mode: bool,
) -> u32 {
    if beginner_mode {
        return 1;
    }

    if reason == BattleEndReason::AllCardsPlayed {
        return 6;
    }

    let position = withdrawing_position.expect("withdrawal scoring needs the withdrawing seat");
    let n = cards_remaining_in_hand;

    match position {
        PlayerPosition::First => match n {
            4.. => 2,
            2..=3 => 3,
            1 => 4,
            0 => 6,
        },
        PlayerPosition::Second => match n {
            5.. => 2,
            3..=4 => 3,
            2 => 4,
            _ => 6,
        },
    }
}

/// The winner of one theater: the higher total strength, with ties and
/// empty theaters going to the first player.
#[must_use]
pub fn theater_winner(state: &BattleState, position: TheaterPosition) -> PlayerId {
    let first = state.first_player;
    let second = first.opponent();

    if theater_strength(state, position, first) >= theater_strength(state, position, second) {
        first
    } else {
        second
    }
}

/// The winner of the battle: whoever holds the majority of the three
/// theaters.
#[must_use]
pub fn battle_winner(state: &BattleState) -> PlayerId {
    let first = state.first_player;
    let theaters_won = TheaterPosition::all()
        .into_iter()
        .filter(|&position| theater_winner(state, position) == first)
        .count();

    if theaters_won >= 2 {
        first
    } else {
        first.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TheaterKind;
    use crate::cards::{CardId, Orientation};
    use crate::core::GameRng;

    #[test]
    fn test_played_out_battle_is_worth_six() {
        assert_eq!(victory_points(BattleEndReason::AllCardsPlayed, None, 0, false), 6);
    }

    #[test]
    fn test_beginner_mode_flattens_to_one() {
        assert_eq!(victory_points(BattleEndReason::AllCardsPlayed, None, 0, true), 1);
        assert_eq!(
            victory_points(BattleEndReason::Withdrawal, Some(PlayerPosition::First), 4, true),
            1
        );
    }

    #[test]
    fn test_first_player_withdrawal_schedule() {
        let vp = |n| victory_points(BattleEndReason::Withdrawal, Some(PlayerPosition::First), n, false);

        assert_eq!(vp(6), 2);
        assert_eq!(vp(4), 2);
        assert_eq!(vp(3), 3);
        assert_eq!(vp(2), 3);
        assert_eq!(vp(1), 4);
        assert_eq!(vp(0), 6);
    }

    #[test]
    fn test_second_player_withdrawal_schedule() {
        let vp = |n| victory_points(BattleEndReason::Withdrawal, Some(PlayerPosition::Second), n, false);

        assert_eq!(vp(6), 2);
        assert_eq!(vp(5), 2);
        assert_eq!(vp(4), 3);
        assert_eq!(vp(3), 3);
        assert_eq!(vp(2), 4);
        assert_eq!(vp(1), 6);
        assert_eq!(vp(0), 6);
    }

    #[test]
    #[should_panic(expected = "withdrawing seat")]
    fn test_withdrawal_without_seat_panics() {
        let _ = victory_points(BattleEndReason::Withdrawal, None, 3, false);
    }

    fn bare_battle(first_player: PlayerId) -> BattleState {
        let mut rng = GameRng::new(0);
        BattleState::new(TheaterKind::all(), first_player, 0, &mut rng)
    }

    #[test]
    fn test_empty_theater_goes_to_first_player() {
        let state = bare_battle(PlayerId::new(1));
        assert_eq!(theater_winner(&state, TheaterPosition::new(0)), PlayerId::new(1));
    }

    #[test]
    fn test_tie_goes_to_first_player() {
        let mut state = bare_battle(PlayerId::new(0));
        // Both players facedown in the middle theater: 2 vs 2.
        state.play_card_to_theater(
            CardId::new(5),
            PlayerId::new(0),
            TheaterPosition::new(1),
            Orientation::FaceDown,
        );
        state.play_card_to_theater(
            CardId::new(11),
            PlayerId::new(1),
            TheaterPosition::new(1),
            Orientation::FaceDown,
        );

        assert_eq!(theater_winner(&state, TheaterPosition::new(1)), PlayerId::new(0));
    }

    #[test]
    fn test_higher_strength_beats_first_player_advantage() {
        let mut state = bare_battle(PlayerId::new(0));
        state.play_card_to_theater(
            CardId::new(11),
            PlayerId::new(1),
            TheaterPosition::new(1),
            Orientation::FaceUp,
        );

        assert_eq!(theater_winner(&state, TheaterPosition::new(1)), PlayerId::new(1));
    }

    #[test]
    fn test_battle_winner_takes_theater_majority() {
        let mut state = bare_battle(PlayerId::new(0));
        // Second player wins two theaters outright.
        state.play_card_to_theater(
            CardId::new(5),
            PlayerId::new(1),
            TheaterPosition::new(0),
            Orientation::FaceUp,
        );
        state.play_card_to_theater(
            CardId::new(11),
            PlayerId::new(1),
            TheaterPosition::new(1),
            Orientation::FaceUp,
        );

        assert_eq!(battle_winner(&state), PlayerId::new(1));

        // With no cards at all, every theater defaults to the first player.
        let empty = bare_battle(PlayerId::new(0));
        assert_eq!(battle_winner(&empty), PlayerId::new(0));
    }
}
