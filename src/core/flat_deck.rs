use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, Deck, OddsError};

/// `FlatDeck` is a deck of cards that allows easy
/// indexing into the cards and uniform random draws.
/// It does not provide fast contains methods.
///
/// The storage never grows past 52 cards so after the first
/// deal of a simulation no more allocation happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl FlatDeck {
    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card to the end of the deck.
    /// This does not check if the card is already in the deck.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Randomly shuffle the flat deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Deal the last card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal one card chosen uniformly from the cards still in the deck.
    ///
    /// The chosen card is swapped with the last card and then popped, so
    /// every draw is constant time and nothing is shifted.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use holdem_odds::core::{Deck, FlatDeck};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut deck: FlatDeck = Deck::default().into();
    /// let card = deck.deal_random(&mut rng).unwrap();
    ///
    /// assert_eq!(51, deck.len());
    /// assert!(!deck[..].contains(&card));
    /// ```
    pub fn deal_random<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(idx))
    }

    /// Deal `n` random cards, appending them to `out`.
    ///
    /// Nothing is dealt if there aren't `n` cards left.
    pub fn deal_random_into<R: Rng>(
        &mut self,
        n: usize,
        rng: &mut R,
        out: &mut Vec<Card>,
    ) -> Result<(), OddsError> {
        if self.cards.len() < n {
            return Err(OddsError::DeckExhaustion {
                needed: n,
                remaining: self.cards.len(),
            });
        }
        for _ in 0..n {
            let idx = rng.random_range(0..self.cards.len());
            out.push(self.cards.swap_remove(idx));
        }
        Ok(())
    }

    /// Make this deck hold exactly the cards of `other`, in the same order,
    /// reusing the existing storage.
    pub fn reset_from(&mut self, other: &FlatDeck) {
        self.cards.clear();
        self.cards.extend_from_slice(&other.cards);
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

/// Allow creating a flat deck from a Deck
impl From<Deck> for FlatDeck {
    /// Flatten this deck, consuming it to produce a `FlatDeck` that's
    /// easier to get random access to. Cards come out in deck order so
    /// the same input cards always result in the same starting flat deck.
    fn from(value: Deck) -> Self {
        let mut cards = Vec::with_capacity(52);
        cards.extend(value);
        Self { cards }
    }
}
