//! Benchmarks for the hot query paths: strength calculation and choice
//! enumeration over a populated board.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use air_land_sea::{
    all_strengths, BattleState, EffectContext, GameRng, InstantEffect, Orientation, PlayerId,
    TheaterKind, TheaterPosition,
};

/// A mid-battle board: every card dealt out and placed across the
/// theaters, alternating owners and orientations.
fn populated_battle() -> BattleState {
    let mut rng = GameRng::new(42);
    let mut state = BattleState::new(TheaterKind::all(), PlayerId::new(0), 0, &mut rng);

    let mut index = 0usize;
    while let Some(card) = state.draw_from_pile() {
        let player = PlayerId::new((index % 2) as u8);
        let position = TheaterPosition::new(index % 3);
        let orientation = if index % 4 == 0 { Orientation::FaceDown } else { Orientation::FaceUp };
        state.play_card_to_theater(card, player, position, orientation);
        index += 1;
    }

    state
}

fn bench_all_strengths(c: &mut Criterion) {
    let state = populated_battle();

    c.bench_function("all_strengths_full_board", |b| {
        b.iter(|| all_strengths(black_box(&state)));
    });
}

fn bench_choice_enumeration(c: &mut Criterion) {
    let state = populated_battle();
    let player = PlayerId::new(0);
    let source = state.battlefield_cards(player)[0];
    let ctx = EffectContext::new(source, player);

    c.bench_function("ambush_choices_full_board", |b| {
        b.iter(|| InstantEffect::Ambush.choices(black_box(&state), black_box(&ctx)));
    });

    c.bench_function("disrupt_choices_full_board", |b| {
        b.iter(|| InstantEffect::Disrupt.choices(black_box(&state), black_box(&ctx)));
    });
}

fn bench_battle_setup(c: &mut Criterion) {
    c.bench_function("battle_setup_and_deal", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(black_box(42));
            BattleState::new(TheaterKind::all(), PlayerId::new(0), 6, &mut rng)
        });
    });
}

criterion_group!(
    benches,
    bench_all_strengths,
    bench_choice_enumeration,
    bench_battle_setup
);
criterion_main!(benches);
