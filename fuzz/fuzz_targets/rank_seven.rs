#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate holdem_odds;

use std::cmp::Ordering;

use holdem_odds::core::{Card, CardBitSet, CardIter, OddsError, Rankable, compare, rank_five};

fn all_distinct(cards: &[Card]) -> bool {
    let mut seen = CardBitSet::new();
    cards.iter().all(|c| seen.insert(*c))
}

fuzz_target!(|input: ([Card; 7], [Card; 7])| {
    let (a, b) = input;
    if !all_distinct(&a) {
        assert!(matches!(a.rank(), Err(OddsError::DuplicateCard(_))));
        return;
    }

    let rank_a = a.rank().unwrap();
    let best_five = CardIter::<5>::new(&a).map(|h| rank_five(&h)).max().unwrap();
    assert_eq!(best_five, rank_a);

    // Card order never changes the rank.
    let mut reversed = a;
    reversed.reverse();
    assert_eq!(rank_a, reversed.rank().unwrap());

    if all_distinct(&b) {
        let rank_b = b.rank().unwrap();
        assert_eq!(compare(&rank_a, &rank_b), compare(&rank_b, &rank_a).reverse());
        if compare(&rank_a, &rank_b) == Ordering::Equal {
            assert_eq!(rank_a, rank_b);
        }
    }
});
