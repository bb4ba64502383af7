//! Effect resolution: the uniform possibility/choices/execute protocol.
//!
//! Every instant effect answers three questions against the current
//! battle state:
//!
//! 1. `is_possible`: does it have at least one legal application?
//! 2. `choices`: what are the legal ways to resolve it? Idempotent and
//!    side-effect free; control returns to an external decision-maker
//!    between this call and the next.
//! 3. `execute`: apply one chosen resolution, mutating the state.
//!
//! Continuous effects answer trivially (possible, no choices, no-op
//! execution); their presence is queried by the strength calculator and
//! the deployment validator instead.
//!
//! A mandatory effect that is impossible is silently skipped; that is a
//! rule, not an error. Executing a choice that is not in the current
//! enumeration is a caller bug and panics.

use crate::cards::{CardId, Orientation};
use crate::core::PlayerId;
use crate::state::BattleState;

use super::effect::{Ability, Choice, InstantEffect};

/// Data an effect resolves against: its source card, the acting player,
/// and the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectContext {
    /// The card whose effect is resolving.
    pub source: CardId,
    /// The player controlling the effect.
    pub player: PlayerId,
    /// The other player.
    pub opponent: PlayerId,
}

impl EffectContext {
    /// Create a context for a source card and its controller.
    #[must_use]
    pub fn new(source: CardId, player: PlayerId) -> Self {
        Self {
            source,
            player,
            opponent: player.opponent(),
        }
    }
}

impl InstantEffect {
    /// Check whether the effect has at least one legal application.
    #[must_use]
    pub fn is_possible(self, state: &BattleState, ctx: &EffectContext) -> bool {
        match self {
            InstantEffect::AirDrop => true,
            InstantEffect::Reinforce => {
                !state.draw_pile().is_empty() && state.card(ctx.source).theater.is_some()
            }
            InstantEffect::Disrupt => {
                !state.battlefield_cards(ctx.opponent).is_empty()
                    && !state.battlefield_cards(ctx.player).is_empty()
            }
            InstantEffect::Redeploy => state
                .battlefield_cards(ctx.player)
                .iter()
                .any(|&card| state.card(card).is_facedown()),
            InstantEffect::Maneuver | InstantEffect::Ambush | InstantEffect::Transport => {
                !self.choices(state, ctx).is_empty()
            }
        }
    }

    /// Enumerate the legal ways to resolve the effect, in a stable order.
    ///
    /// Empty means the effect cannot resolve. Effects with no decision
    /// return the single [`Choice::Resolve`] sentinel; declinable effects
    /// (Reinforce, Redeploy) lead with [`Choice::Decline`].
    #[must_use]
    pub fn choices(self, state: &BattleState, ctx: &EffectContext) -> Vec<Choice> {
        match self {
            InstantEffect::AirDrop => vec![Choice::Resolve],

            InstantEffect::Maneuver => {
                let Some(source_position) = state.card(ctx.source).theater else {
                    return Vec::new();
                };
                state
                    .adjacent_theaters(source_position)
                    .flat_map(|theater| theater.all_cards())
                    .map(Choice::Flip)
                    .collect()
            }

            InstantEffect::Ambush => state
                .theaters()
                .iter()
                .flat_map(|theater| theater.all_cards())
                .map(Choice::Flip)
                .collect(),

            InstantEffect::Reinforce => {
                if !self.is_possible(state, ctx) {
                    return Vec::new();
                }
                let Some(source_position) = state.card(ctx.source).theater else {
                    return Vec::new();
                };
                std::iter::once(Choice::Decline)
                    .chain(source_position.adjacent().map(Choice::Reinforce))
                    .collect()
            }

            InstantEffect::Disrupt => {
                if !self.is_possible(state, ctx) {
                    return Vec::new();
                }
                let opponent_cards = state.battlefield_cards(ctx.opponent);
                let own_cards = state.battlefield_cards(ctx.player);
                opponent_cards
                    .iter()
                    .flat_map(|&opponent_card| {
                        own_cards.iter().map(move |&own_card| Choice::Disrupt {
                            opponent_card,
                            own_card,
                        })
                    })
                    .collect()
            }

            InstantEffect::Transport => {
                let own_cards = state.battlefield_cards(ctx.player);
                let mut choices = Vec::new();
                for &card in &own_cards {
                    for theater in state.theaters() {
                        if state.card(card).theater != Some(theater.position) {
                            choices.push(Choice::Transport {
                                card,
                                destination: theater.position,
                            });
                        }
                    }
                }
                choices
            }

            InstantEffect::Redeploy => {
                let facedown: Vec<_> = state
                    .battlefield_cards(ctx.player)
                    .into_iter()
                    .filter(|&card| state.card(card).is_facedown())
                    .collect();
                if facedown.is_empty() {
                    return Vec::new();
                }
                std::iter::once(Choice::Decline)
                    .chain(facedown.into_iter().map(Choice::Return))
                    .collect()
            }
        }
    }

    /// Apply one chosen resolution, mutating the battle state.
    ///
    /// # Panics
    ///
    /// Panics if `choice` is not a member of the current [`choices`]
    /// enumeration for the same context, a protocol violation by the
    /// caller.
    ///
    /// [`choices`]: InstantEffect::choices
    pub fn execute(self, state: &mut BattleState, ctx: &EffectContext, choice: &Choice) {
        assert!(
            self.choices(state, ctx).contains(choice),
            "{choice:?} is not a legal choice for {self:?}"
        );

        match (self, choice) {
            (InstantEffect::AirDrop, Choice::Resolve) => {
                state.grant_any_theater_deploy(ctx.player);
            }

            (InstantEffect::Maneuver | InstantEffect::Ambush, Choice::Flip(card)) => {
                state.flip_card(*card);
            }

            (InstantEffect::Reinforce, Choice::Decline)
            | (InstantEffect::Redeploy, Choice::Decline) => {}

            (InstantEffect::Reinforce, Choice::Reinforce(position)) => {
                if let Some(card) = state.draw_from_pile() {
                    state.play_card_to_theater(card, ctx.player, *position, Orientation::FaceDown);
                }
            }

            (InstantEffect::Disrupt, Choice::Disrupt { opponent_card, own_card }) => {
                state.flip_card(*opponent_card);
                state.flip_card(*own_card);
            }

            (InstantEffect::Transport, Choice::Transport { card, destination }) => {
                state.move_card(*card, ctx.player, *destination);
            }

            (InstantEffect::Redeploy, Choice::Return(card)) => {
                state.return_card_to_hand(*card, ctx.player);
                state.grant_extra_turn(ctx.player);
            }

            _ => unreachable!("choice was validated against the enumeration"),
        }
    }
}

impl Ability {
    /// Check whether the ability has at least one legal application.
    ///
    /// Continuous effects are always "possible"; they apply by presence.
    /// `Ability::None` never is.
    #[must_use]
    pub fn is_possible(self, state: &BattleState, ctx: &EffectContext) -> bool {
        match self {
            Ability::None => false,
            Ability::Instant(effect) => effect.is_possible(state, ctx),
            Ability::Continuous(_) => true,
        }
    }

    /// Enumerate legal resolutions. Continuous effects and `None` return
    /// an empty set; they are never executed.
    #[must_use]
    pub fn choices(self, state: &BattleState, ctx: &EffectContext) -> Vec<Choice> {
        match self {
            Ability::Instant(effect) => effect.choices(state, ctx),
            Ability::None | Ability::Continuous(_) => Vec::new(),
        }
    }

    /// Execute a chosen resolution. No-op for continuous effects and
    /// `None`.
    pub fn execute(self, state: &mut BattleState, ctx: &EffectContext, choice: &Choice) {
        if let Ability::Instant(effect) = self {
            effect.execute(state, ctx, choice);
        }
    }
}

/// An external decision-maker: given a non-empty choice set, picks one
/// member. The engine never invents decisions.
pub trait DecisionSource {
    /// Pick one of the given choices. The returned value must be a member
    /// of `choices`.
    fn choose(&mut self, state: &BattleState, ctx: &EffectContext, choices: &[Choice]) -> Choice;
}

/// Trivial decision source that always takes the first enumerated choice.
///
/// For declinable effects the first choice is `Decline`, so this source
/// never changes the board through them. Mostly useful in tests and
/// benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoice;

impl DecisionSource for FirstChoice {
    fn choose(&mut self, _state: &BattleState, _ctx: &EffectContext, choices: &[Choice]) -> Choice {
        choices[0]
    }
}

/// How an instant resolution ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The effect executed with the given choice.
    Resolved(Choice),
    /// The effect was skipped: not an instant, impossible, or no legal
    /// choices. A silent no-op by rule.
    Skipped,
}

/// Drive one instant resolution: possibility → choices → external
/// decision → execution.
///
/// Returns [`Outcome::Skipped`] without consulting the decision source if
/// the source card has no instant effect or the effect is impossible.
pub fn resolve_instant(
    state: &mut BattleState,
    source: CardId,
    player: PlayerId,
    decider: &mut dyn DecisionSource,
) -> Outcome {
    let Some(effect) = state.definition(source).ability.as_instant() else {
        return Outcome::Skipped;
    };

    let ctx = EffectContext::new(source, player);
    if !effect.is_possible(state, &ctx) {
        return Outcome::Skipped;
    }

    let choices = effect.choices(state, &ctx);
    if choices.is_empty() {
        return Outcome::Skipped;
    }

    let choice = decider.choose(state, &ctx, &choices);
    effect.execute(state, &ctx, &choice);
    Outcome::Resolved(choice)
}
