use std::ops::{Index, RangeFull};
use std::str::FromStr;

use super::{Card, CardBitSet, OddsError, Suit, Value};

/// Struct to hold cards.
///
/// This doesn't have the ability to easily check if a card is
/// in the hand. So do that before adding/removing a card. The
/// order cards were added in is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// ```
    /// use holdem_odds::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(7),
        }
    }

    /// Create a hand with the given cards. Duplicates are not checked.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// From a str create a new hand.
    ///
    /// Cards are written as value then suit. They can be packed
    /// together or separated by whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AdKd").unwrap();
    /// assert_eq!(2, hand.len());
    ///
    /// let board = Hand::new_from_str("Qh Jh Th").unwrap();
    /// assert_eq!(3, board.len());
    /// ```
    ///
    /// Anything that can't be parsed will return an error.
    ///
    /// ```
    /// use holdem_odds::core::Hand;
    ///
    /// assert!(Hand::new_from_str("AdKx").is_err());
    /// assert!(Hand::new_from_str("AdAd").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, OddsError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut cards: Vec<Card> = Vec::with_capacity(7);
        let mut seen = CardBitSet::new();

        // Keep looping until we run out of value chars
        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(OddsError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(OddsError::TooFewChars)
                .map(Suit::from_char)?
                .ok_or(OddsError::UnexpectedSuitChar)?;

            let c = Card::new(v, s);
            if !seen.insert(c) {
                return Err(OddsError::DuplicateCard(c));
            }
            cards.push(c);
        }

        Ok(Self { cards })
    }

    /// Add a card to the end of the hand. This does not check for
    /// duplicates.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Add a card if it's not already in the hand.
    /// Returns true if the card was added.
    pub fn insert(&mut self, c: Card) -> bool {
        if self.cards.contains(&c) {
            false
        } else {
            self.cards.push(c);
            true
        }
    }

    /// Is this card in the hand? This is a linear scan.
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Shorten the hand, keeping the first `len` cards.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// How many cards are in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The cards in the order they were added.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Hand {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::new_from_str(s)
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Index<RangeFull> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl From<Hand> for Vec<Card> {
    fn from(value: Hand) -> Self {
        value.cards
    }
}

impl std::fmt::Display for Hand {
    /// Cards separated by a space, "Ah Kh"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
