use super::Card;

/// Iterator over every `N` card combination of a slice of cards.
///
/// Combinations come out in lexicographic order of their positions
/// in the slice. Nothing is allocated while iterating.
///
/// ```
/// use holdem_odds::core::{CardIter, Hand};
///
/// let hand = Hand::new_from_str("AdKdQdJdTd9d8d").unwrap();
/// // 7 choose 5
/// assert_eq!(21, CardIter::<5>::new(&hand[..]).count());
/// ```
#[derive(Debug, Clone)]
pub struct CardIter<'a, const N: usize> {
    // All the possible cards that can be used
    possible_cards: &'a [Card],
    // Set of current offsets being used to create card sets.
    idx: [usize; N],
    started: bool,
    done: bool,
}

impl<'a, const N: usize> CardIter<'a, N> {
    pub fn new(possible_cards: &'a [Card]) -> Self {
        Self {
            possible_cards,
            idx: std::array::from_fn(|i| i),
            started: false,
            done: N == 0 || N > possible_cards.len(),
        }
    }

    fn current(&self) -> [Card; N] {
        std::array::from_fn(|i| self.possible_cards[self.idx[i]])
    }
}

impl<const N: usize> Iterator for CardIter<'_, N> {
    type Item = [Card; N];

    fn next(&mut self) -> Option<[Card; N]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        let len = self.possible_cards.len();
        // Find the right most offset that can still move forward
        // while leaving room for every offset after it.
        let mut level = N;
        loop {
            if level == 0 {
                self.done = true;
                return None;
            }
            level -= 1;
            if self.idx[level] < len - N + level {
                break;
            }
        }

        self.idx[level] += 1;
        for next in level + 1..N {
            self.idx[next] = self.idx[next - 1] + 1;
        }
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, FlatDeck, Hand};

    #[test]
    fn test_iter_one() {
        let h = Hand::new_from_str("2s").unwrap();
        for cards in CardIter::<1>::new(&h[..]) {
            assert_eq!(h[0], cards[0]);
        }
        assert_eq!(1, CardIter::<1>::new(&h[..]).count());
    }

    #[test]
    fn test_iter_two() {
        let h = Hand::new_from_str("2s3s4s").unwrap();

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::<2>::new(&h[..]).count());

        // Make sure that everything has two cards and they are different.
        for cards in CardIter::<2>::new(&h[..]) {
            assert!(cards[0] != cards[1]);
        }
    }

    #[test]
    fn test_iter_too_few() {
        let h = Hand::new_from_str("2s3s4s").unwrap();
        assert_eq!(0, CardIter::<5>::new(&h[..]).count());
    }

    #[test]
    fn test_iter_six_and_seven() {
        let six = Hand::new_from_str("2s3s4s5s6s7s").unwrap();
        assert_eq!(6, CardIter::<5>::new(&six[..]).count());

        let seven = Hand::new_from_str("2s3s4s5s6s7s8s").unwrap();
        let all: Vec<[Card; 5]> = CardIter::<5>::new(&seven[..]).collect();
        assert_eq!(21, all.len());
        // Each combination is unique.
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_iter_deck() {
        let d: FlatDeck = Deck::default().into();
        assert_eq!(2_598_960, CardIter::<5>::new(&d[..]).count());
    }
}
