#[macro_use]
extern crate criterion;
extern crate holdem_odds;

use holdem_odds::core::{Deck, FlatDeck};
use rand::rng;

fn deal_all_flat_deck(c: &mut criterion::Criterion) {
    let mut rng = rng();
    let mut flat_deck: FlatDeck = Deck::default().into();

    c.bench_function("deal all from FlatDeck", |b| {
        b.iter(|| {
            flat_deck.shuffle(&mut rng);
            while !flat_deck.is_empty() {
                let _card = flat_deck.deal().unwrap();
            }
        });
    });
}

fn deal_random_and_reset(c: &mut criterion::Criterion) {
    let mut rng = rng();
    let base: FlatDeck = Deck::default().into();
    let mut deck = base.clone();
    let mut cards = Vec::with_capacity(20);

    c.bench_function("deal 20 random then reset", |b| {
        b.iter(|| {
            deck.reset_from(&base);
            cards.clear();
            deck.deal_random_into(20, &mut rng, &mut cards).unwrap();
        });
    });
}

criterion_group!(benches, deal_all_flat_deck, deal_random_and_reset);
criterion_main!(benches);
