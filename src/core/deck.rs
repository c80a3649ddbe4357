use super::{Card, CardBitSet, CardBitSetIter, FlatDeck, OddsError};

/// Deck struct that can tell quickly if a card is in the deck
///
/// Cards are kept in a bitset so iteration is always in the same
/// rank-major, suit-minor order no matter how the deck was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(CardBitSet);

impl Deck {
    /// Create a new empty deck.
    ///
    /// ```
    /// use holdem_odds::core::Deck;
    ///
    /// assert!(Deck::new().is_empty());
    /// ```
    pub fn new() -> Self {
        Self(CardBitSet::new())
    }

    /// The 52 card universe without any of the `used` cards.
    ///
    /// Fails if a card shows up twice in `used`, since that means two
    /// places in the same deal claimed the same card.
    ///
    /// ```
    /// use holdem_odds::core::{Card, Deck};
    ///
    /// let used = [Card::try_from("Ah").unwrap(), Card::try_from("Kd").unwrap()];
    /// let deck = Deck::without(&used).unwrap();
    /// assert_eq!(50, deck.len());
    /// assert!(!deck.contains(&used[0]));
    /// ```
    pub fn without(used: &[Card]) -> Result<Self, OddsError> {
        let mut seen = CardBitSet::new();
        for card in used {
            if !seen.insert(*card) {
                return Err(OddsError::DuplicateCard(*card));
            }
        }
        Ok(Self(!seen))
    }

    /// Same as `Deck::without` but flattened so it can be sampled from.
    pub fn remaining(used: &[Card]) -> Result<FlatDeck, OddsError> {
        Ok(Self::without(used)?.into())
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.0.remove(*c)
    }

    /// Add a card back into the deck. Returns false if it was already there.
    pub fn insert(&mut self, c: Card) -> bool {
        self.0.insert(c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.0.count()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use holdem_odds::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        Self(CardBitSet::default())
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = CardBitSetIter;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> CardBitSetIter {
        self.0.into_iter()
    }
}

impl From<CardBitSet> for Deck {
    fn from(value: CardBitSet) -> Self {
        Self(value)
    }
}
