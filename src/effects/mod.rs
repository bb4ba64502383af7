//! Effect system: the 13 tactical effects and their resolution protocol.
//!
//! ## Key Types
//!
//! - `Ability`: a card's ability: none, instant, or continuous
//! - `InstantEffect` / `ContinuousEffect`: the effect vocabulary
//! - `Choice`: one legal way to resolve an instant effect
//! - `EffectContext`: source card + acting player + opponent
//! - `DecisionSource`: external decision-maker picking among choices
//!
//! Instant effects resolve through possibility → choices → decision →
//! execution (`resolve_instant`). Continuous effects are never executed;
//! the `rules` module queries their presence.

pub mod effect;
pub mod resolver;

pub use effect::{Ability, Choice, ContinuousEffect, InstantEffect, Timing};
pub use resolver::{resolve_instant, DecisionSource, EffectContext, FirstChoice, Outcome};
