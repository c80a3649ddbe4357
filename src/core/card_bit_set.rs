use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use super::Card;

/// A set of cards stored as bits of a 64 bit integer.
///
/// Bit `n` is set when the card with dense index `n` is present, so
/// iteration always yields cards in rank-major, suit-minor order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use holdem_odds::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// Insert a card. Returns true if the card was not already present.
    ///
    /// ```
    /// use holdem_odds::core::{Card, CardBitSet, Suit, Value};
    /// let mut cards = CardBitSet::new();
    ///
    /// assert!(cards.insert(Card::new(Value::Six, Suit::Club)));
    /// assert!(!cards.insert(Card::new(Value::Six, Suit::Club)));
    /// assert_eq!(1, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1 << u8::from(card);
        let fresh = self.cards & bit == 0;
        self.cards |= bit;
        fresh
    }

    /// Remove a card. Returns true if the card was present.
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1 << u8::from(card);
        let present = self.cards & bit != 0;
        self.cards &= !bit;
        present
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn clear(&mut self) {
        self.cards = 0;
    }
}

impl Default for CardBitSet {
    /// Create a new bitset with all the cards in it
    /// ```
    /// use holdem_odds::core::CardBitSet;
    ///
    /// let cards = CardBitSet::default();
    ///
    /// assert_eq!(52, cards.count());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl BitOr for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign<Card> for CardBitSet {
    fn bitor_assign(&mut self, rhs: Card) {
        self.cards |= 1 << u8::from(rhs);
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            // Only the first 52 bits are cards
            cards: !self.cards & FIFTY_TWO_ONES,
        }
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardBitSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// The iterator for the CardBitSet
/// It iterates over the cards in the bitset, lowest index first.
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from(card as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}
