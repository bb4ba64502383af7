//! Battle state: theaters, hands, the draw pile, and every mutation
//! primitive.
//!
//! `BattleState` owns the card arena (exactly 18 `CardInstance`s, indexed
//! by `CardId`) and all structural mutation. Effects and validators go
//! through the primitives here; nothing else moves cards between zones.
//!
//! The conservation invariant (draw pile + hands + battlefield stacks
//! hold each of the 18 cards exactly once) must hold after every
//! primitive. `invariant_violations` checks it for tests.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Theater, TheaterKind, TheaterPosition, THEATER_COUNT};
use crate::cards::{Catalog, CardDefinition, CardId, CardInstance, Orientation, Zone, CARD_COUNT};
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::effects::{Ability, ContinuousEffect};

use super::deck::DrawPile;

/// Phase of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Cards are being dealt.
    Dealing,
    /// A player is taking a turn.
    PlayerTurn,
    /// An instant effect is awaiting its decision.
    AbilityResolution,
    /// The battle is over and ready to score.
    BattleEnd,
}

/// One-shot deployment permissions a player can hold.
///
/// A closed, known set, modeled as a fixed record instead of a map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlags {
    /// The player's next faceup deployment may ignore theater matching.
    pub any_theater_deploy: bool,
}

/// Per-player state within a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards held in hand, in the order received.
    pub hand: Vec<CardId>,

    /// Victory points accumulated so far.
    pub victory_points: u32,

    /// Whether the player has withdrawn from the battle.
    pub has_withdrawn: bool,

    /// One-shot deployment permissions.
    pub flags: PermissionFlags,
}

/// An active continuous effect: a faceup battlefield card paired with its
/// controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveEffect {
    /// The card carrying the effect.
    pub card: CardId,
    /// The effect itself.
    pub effect: ContinuousEffect,
    /// The player controlling the card.
    pub controller: PlayerId,
}

/// Complete state of one battle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleState {
    catalog: Catalog,
    cards: Vec<CardInstance>,
    theaters: [Theater; THEATER_COUNT],
    players: PlayerMap<PlayerState>,
    draw_pile: DrawPile,

    /// The first player (wins ties and empty theaters).
    pub first_player: PlayerId,

    /// The player whose turn it is.
    pub active_player: PlayerId,

    /// Turn number, starting at 1.
    pub turn_number: u32,

    /// Current battle phase.
    pub phase: BattlePhase,

    extra_turns: SmallVec<[PlayerId; 2]>,
}

impl BattleState {
    /// Set up a battle: build the arena, shuffle the pile with the given
    /// RNG, and deal `hand_size` cards to each player, alternating from
    /// the first player.
    ///
    /// # Panics
    ///
    /// Panics if `hand_size * 2` exceeds the 18-card set.
    #[must_use]
    pub fn new(
        theater_order: [TheaterKind; THEATER_COUNT],
        first_player: PlayerId,
        hand_size: usize,
        rng: &mut GameRng,
    ) -> Self {
        assert!(hand_size * 2 <= CARD_COUNT, "cannot deal {hand_size} cards each");

        let positions = TheaterPosition::all();
        let theaters = [
            Theater::new(theater_order[0], positions[0]),
            Theater::new(theater_order[1], positions[1]),
            Theater::new(theater_order[2], positions[2]),
        ];

        let mut draw_pile = DrawPile::new(CardId::all().collect());
        draw_pile.shuffle(rng);

        let mut state = Self {
            catalog: Catalog::standard(),
            cards: CardId::all().map(CardInstance::new).collect(),
            theaters,
            players: PlayerMap::with_default(),
            draw_pile,
            first_player,
            active_player: first_player,
            turn_number: 1,
            phase: BattlePhase::Dealing,
            extra_turns: SmallVec::new(),
        };

        for _ in 0..hand_size {
            for player in [first_player, first_player.opponent()] {
                if let Some(card) = state.draw_pile.draw() {
                    state.add_to_hand(card, player);
                }
            }
        }

        state.phase = BattlePhase::PlayerTurn;
        state
    }

    // === Queries ===

    /// The card catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A card's runtime state.
    #[must_use]
    pub fn card(&self, card: CardId) -> &CardInstance {
        &self.cards[card.index()]
    }

    /// A card's definition.
    #[must_use]
    pub fn definition(&self, card: CardId) -> &CardDefinition {
        self.catalog.get(card)
    }

    /// All three theaters, left to right.
    #[must_use]
    pub fn theaters(&self) -> &[Theater; THEATER_COUNT] {
        &self.theaters
    }

    /// The theater at a position.
    #[must_use]
    pub fn theater_at(&self, position: TheaterPosition) -> &Theater {
        &self.theaters[position.index()]
    }

    /// The theater of a kind.
    #[must_use]
    pub fn theater_of_kind(&self, kind: TheaterKind) -> &Theater {
        self.theaters
            .iter()
            .find(|theater| theater.kind == kind)
            .expect("each kind appears exactly once")
    }

    /// Theaters adjacent to a position, left to right.
    pub fn adjacent_theaters(&self, position: TheaterPosition) -> impl Iterator<Item = &Theater> {
        self.theaters
            .iter()
            .filter(move |theater| theater.position.is_adjacent_to(position))
    }

    /// The draw pile.
    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    /// A player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Mutable access to a player's state.
    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[CardId] {
        &self.players[player].hand
    }

    /// All of a player's battlefield cards, theaters left to right, each
    /// stack bottom to top.
    #[must_use]
    pub fn battlefield_cards(&self, player: PlayerId) -> Vec<CardId> {
        self.theaters
            .iter()
            .flat_map(|theater| theater.stack(player).cards().iter().copied())
            .collect()
    }

    /// All active continuous effects: faceup battlefield cards with
    /// continuous abilities, paired with their controllers.
    #[must_use]
    pub fn active_continuous_effects(&self) -> Vec<ActiveEffect> {
        let mut active = Vec::new();
        for theater in &self.theaters {
            for controller in PlayerId::both() {
                for &card in theater.stack(controller).cards() {
                    if !self.card(card).is_faceup() {
                        continue;
                    }
                    if let Ability::Continuous(effect) = self.definition(card).ability {
                        active.push(ActiveEffect { card, effect, controller });
                    }
                }
            }
        }
        active
    }

    /// Pending extra turns, in grant order.
    #[must_use]
    pub fn extra_turns(&self) -> &[PlayerId] {
        &self.extra_turns
    }

    // === Mutation primitives ===

    /// Toggle a card's orientation.
    pub fn flip_card(&mut self, card: CardId) {
        self.cards[card.index()].flip();
    }

    /// Draw the top card of the pile, or `None` if it is empty.
    ///
    /// The drawn card belongs to no zone until placed; callers follow up
    /// with `play_card_to_theater` or `return_card_to_hand`.
    pub fn draw_from_pile(&mut self) -> Option<CardId> {
        self.draw_pile.draw()
    }

    /// Place a card on the battlefield.
    ///
    /// Sets orientation, zone, owner, and theater, and puts the card on
    /// top of the player's stack there. A card played from a hand is
    /// removed from it; a card already on the battlefield is removed from
    /// its old stack first.
    pub fn play_card_to_theater(
        &mut self,
        card: CardId,
        player: PlayerId,
        position: TheaterPosition,
        orientation: Orientation,
    ) {
        self.detach(card);

        let instance = &mut self.cards[card.index()];
        instance.orientation = orientation;
        instance.zone = Zone::Battlefield;
        instance.owner = Some(player);
        instance.theater = Some(position);

        self.theaters[position.index()].stack_mut(player).place_on_top(card);
    }

    /// Move a battlefield card to another theater, same owner, on top of
    /// that theater's stack.
    ///
    /// No-op if the card is not on the battlefield or already occupies
    /// the destination theater.
    pub fn move_card(&mut self, card: CardId, player: PlayerId, destination: TheaterPosition) {
        let instance = &self.cards[card.index()];
        if instance.zone != Zone::Battlefield || instance.theater == Some(destination) {
            return;
        }

        self.detach(card);

        let instance = &mut self.cards[card.index()];
        instance.owner = Some(player);
        instance.theater = Some(destination);
        self.theaters[destination.index()].stack_mut(player).place_on_top(card);
    }

    /// Destroy a battlefield card: remove it from its stack and place it
    /// facedown at the bottom of the draw pile, owner and theater cleared.
    /// No-op if the card is not on the battlefield.
    pub fn destroy_card(&mut self, card: CardId) {
        if self.cards[card.index()].zone != Zone::Battlefield {
            return;
        }

        self.detach(card);

        let instance = &mut self.cards[card.index()];
        instance.orientation = Orientation::FaceDown;
        instance.zone = Zone::DrawPile;
        instance.owner = None;
        instance.theater = None;

        self.draw_pile.place_on_bottom(card);
    }

    /// Return a card to a player's hand, facedown. A battlefield card is
    /// removed from its stack first.
    pub fn return_card_to_hand(&mut self, card: CardId, player: PlayerId) {
        self.detach(card);
        self.add_to_hand(card, player);
    }

    /// Queue an extra turn for a player.
    pub fn grant_extra_turn(&mut self, player: PlayerId) {
        self.extra_turns.push(player);
    }

    /// Take the next queued extra turn, if any.
    pub fn take_extra_turn(&mut self) -> Option<PlayerId> {
        if self.extra_turns.is_empty() {
            None
        } else {
            Some(self.extra_turns.remove(0))
        }
    }

    /// Grant the one-shot any-theater deployment permission.
    pub fn grant_any_theater_deploy(&mut self, player: PlayerId) {
        self.players[player].flags.any_theater_deploy = true;
    }

    /// Check the any-theater deployment permission.
    #[must_use]
    pub fn any_theater_deploy(&self, player: PlayerId) -> bool {
        self.players[player].flags.any_theater_deploy
    }

    /// Clear the any-theater deployment permission after use.
    pub fn clear_any_theater_deploy(&mut self, player: PlayerId) {
        self.players[player].flags.any_theater_deploy = false;
    }

    // === Invariant checking ===

    /// Check the card-conservation invariant and zone/field consistency.
    ///
    /// Returns a list of violations, empty if all invariants hold. These
    /// are bug detectors: they should never fire after any sequence of
    /// mutation primitives.
    #[must_use]
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let mut seen = [0u32; CARD_COUNT];

        for &card in self.draw_pile.cards() {
            seen[card.index()] += 1;
            let instance = self.card(card);
            if instance.zone != Zone::DrawPile {
                violations.push(format!("{card} is in the pile but zone is {:?}", instance.zone));
            }
            if instance.owner.is_some() || instance.theater.is_some() {
                violations.push(format!("{card} is in the pile but keeps owner/theater"));
            }
        }

        for (player, state) in self.players.iter() {
            for &card in &state.hand {
                seen[card.index()] += 1;
                let instance = self.card(card);
                if instance.zone != Zone::Hand || instance.owner != Some(player) {
                    violations.push(format!("{card} in {player}'s hand has stale zone/owner"));
                }
            }
        }

        for theater in &self.theaters {
            for player in PlayerId::both() {
                for &card in theater.stack(player).cards() {
                    seen[card.index()] += 1;
                    let instance = self.card(card);
                    if instance.zone != Zone::Battlefield
                        || instance.owner != Some(player)
                        || instance.theater != Some(theater.position)
                    {
                        violations.push(format!(
                            "{card} in {theater} stack of {player} has stale zone/owner/theater"
                        ));
                    }
                }
            }
        }

        for card in CardId::all() {
            let count = seen[card.index()];
            if count != 1 {
                violations.push(format!("{card} appears {count} times across all zones"));
            }
        }

        violations
    }

    // === Internal helpers ===

    /// Remove a card from whatever container currently holds it (hand,
    /// battlefield stack, or draw pile), so a placement never duplicates
    /// it.
    fn detach(&mut self, card: CardId) {
        let instance = &self.cards[card.index()];
        match instance.zone {
            Zone::Hand => {
                if let Some(owner) = instance.owner {
                    self.players[owner].hand.retain(|&c| c != card);
                }
            }
            Zone::Battlefield => {
                if let (Some(owner), Some(theater)) = (instance.owner, instance.theater) {
                    self.theaters[theater.index()].stack_mut(owner).remove(card);
                }
            }
            Zone::DrawPile => {
                self.draw_pile.remove(card);
            }
        }
    }

    /// Append a card to a player's hand, facedown, owner set.
    fn add_to_hand(&mut self, card: CardId, player: PlayerId) {
        let instance = &mut self.cards[card.index()];
        instance.orientation = Orientation::FaceDown;
        instance.zone = Zone::Hand;
        instance.owner = Some(player);
        instance.theater = None;
        self.players[player].hand.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> BattleState {
        let mut rng = GameRng::new(42);
        BattleState::new(TheaterKind::all(), PlayerId::new(0), 6, &mut rng)
    }

    #[test]
    fn test_setup_deals_and_conserves() {
        let state = setup();

        assert_eq!(state.hand(PlayerId::new(0)).len(), 6);
        assert_eq!(state.hand(PlayerId::new(1)).len(), 6);
        assert_eq!(state.draw_pile().len(), 6);
        assert_eq!(state.phase, BattlePhase::PlayerTurn);
        assert_eq!(state.active_player, PlayerId::new(0));
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn test_setup_is_seed_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);
        let a = BattleState::new(TheaterKind::all(), PlayerId::new(0), 6, &mut rng1);
        let b = BattleState::new(TheaterKind::all(), PlayerId::new(0), 6, &mut rng2);

        assert_eq!(a.hand(PlayerId::new(0)), b.hand(PlayerId::new(0)));
        assert_eq!(a.draw_pile(), b.draw_pile());
    }

    #[test]
    fn test_play_from_hand() {
        let mut state = setup();
        let player = PlayerId::new(0);
        let card = state.hand(player)[0];
        let position = TheaterPosition::new(1);

        state.play_card_to_theater(card, player, position, Orientation::FaceUp);

        let instance = state.card(card);
        assert_eq!(instance.zone, Zone::Battlefield);
        assert_eq!(instance.owner, Some(player));
        assert_eq!(instance.theater, Some(position));
        assert!(instance.is_faceup());
        assert!(!state.hand(player).contains(&card));
        assert!(state.theater_at(position).stack(player).is_uncovered(card));
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn test_flip_card() {
        let mut state = setup();
        let player = PlayerId::new(0);
        let card = state.hand(player)[0];
        state.play_card_to_theater(card, player, TheaterPosition::new(0), Orientation::FaceDown);

        state.flip_card(card);
        assert!(state.card(card).is_faceup());

        state.flip_card(card);
        assert!(state.card(card).is_facedown());
    }

    #[test]
    fn test_destroy_card_goes_to_pile_bottom() {
        let mut state = setup();
        let player = PlayerId::new(0);
        let card = state.hand(player)[0];
        state.play_card_to_theater(card, player, TheaterPosition::new(2), Orientation::FaceUp);

        state.destroy_card(card);

        let instance = state.card(card);
        assert_eq!(instance.zone, Zone::DrawPile);
        assert!(instance.is_facedown());
        assert!(instance.owner.is_none());
        assert!(instance.theater.is_none());
        assert_eq!(state.draw_pile().cards()[0], card);
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn test_destroy_non_battlefield_is_noop() {
        let mut state = setup();
        let player = PlayerId::new(1);
        let card = state.hand(player)[0];
        let pile_before = state.draw_pile().clone();

        state.destroy_card(card);

        assert_eq!(state.card(card).zone, Zone::Hand);
        assert_eq!(state.draw_pile(), &pile_before);
    }

    #[test]
    fn test_move_card() {
        let mut state = setup();
        let player = PlayerId::new(0);
        let card = state.hand(player)[0];
        state.play_card_to_theater(card, player, TheaterPosition::new(0), Orientation::FaceDown);

        state.move_card(card, player, TheaterPosition::new(2));

        assert_eq!(state.card(card).theater, Some(TheaterPosition::new(2)));
        assert!(state.theater_at(TheaterPosition::new(0)).stack(player).is_empty());
        assert!(state
            .theater_at(TheaterPosition::new(2))
            .stack(player)
            .is_uncovered(card));
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn test_move_to_same_theater_is_noop() {
        let mut state = setup();
        let player = PlayerId::new(0);
        let first = state.hand(player)[0];
        let second = state.hand(player)[1];
        let position = TheaterPosition::new(1);
        state.play_card_to_theater(first, player, position, Orientation::FaceDown);
        state.play_card_to_theater(second, player, position, Orientation::FaceDown);

        // `first` is covered; a same-theater move must not lift it to the top.
        state.move_card(first, player, position);

        assert!(state.theater_at(position).stack(player).is_covered(first));
        assert!(state.theater_at(position).stack(player).is_uncovered(second));
    }

    #[test]
    fn test_return_card_to_hand() {
        let mut state = setup();
        let player = PlayerId::new(0);
        let card = state.hand(player)[0];
        state.play_card_to_theater(card, player, TheaterPosition::new(1), Orientation::FaceUp);

        state.return_card_to_hand(card, player);

        let instance = state.card(card);
        assert_eq!(instance.zone, Zone::Hand);
        assert!(instance.is_facedown());
        assert!(state.hand(player).contains(&card));
        assert!(state.theater_at(TheaterPosition::new(1)).stack(player).is_empty());
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn test_extra_turn_queue() {
        let mut state = setup();
        let player = PlayerId::new(1);

        assert!(state.take_extra_turn().is_none());

        state.grant_extra_turn(player);
        state.grant_extra_turn(player.opponent());

        assert_eq!(state.extra_turns(), &[player, player.opponent()]);
        assert_eq!(state.take_extra_turn(), Some(player));
        assert_eq!(state.take_extra_turn(), Some(player.opponent()));
        assert!(state.take_extra_turn().is_none());
    }

    #[test]
    fn test_permission_flags() {
        let mut state = setup();
        let player = PlayerId::new(0);

        assert!(!state.any_theater_deploy(player));

        state.grant_any_theater_deploy(player);
        assert!(state.any_theater_deploy(player));
        assert!(!state.any_theater_deploy(player.opponent()));

        state.clear_any_theater_deploy(player);
        assert!(!state.any_theater_deploy(player));
    }

    #[test]
    fn test_active_continuous_effects() {
        let mut state = setup();
        let player = PlayerId::new(0);

        // Support (card 0) facedown: not active.
        state.play_card_to_theater(
            CardId::new(0),
            player,
            TheaterPosition::new(0),
            Orientation::FaceDown,
        );
        assert!(state.active_continuous_effects().is_empty());

        state.flip_card(CardId::new(0));
        let active = state.active_continuous_effects();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].effect, ContinuousEffect::Support);
        assert_eq!(active[0].controller, player);

        // An instant-effect card does not show up.
        state.play_card_to_theater(
            CardId::new(7),
            player,
            TheaterPosition::new(1),
            Orientation::FaceUp,
        );
        assert_eq!(state.active_continuous_effects().len(), 1);
    }

    #[test]
    fn test_theater_of_kind() {
        let state = setup();
        assert_eq!(state.theater_of_kind(TheaterKind::Air).position, TheaterPosition::new(0));
        assert_eq!(state.theater_of_kind(TheaterKind::Sea).position, TheaterPosition::new(2));
    }

    #[test]
    fn test_serialization_round_trip() {
        let state = setup();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BattleState = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.hand(PlayerId::new(0)), state.hand(PlayerId::new(0)));
        assert_eq!(deserialized.draw_pile(), state.draw_pile());
        assert!(deserialized.invariant_violations().is_empty());
    }
}
