use std::fmt;
use std::str::FromStr;

use super::OddsError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    /// Anything larger than 12 wraps around.
    ///
    /// ```
    /// use holdem_odds::core::Value;
    ///
    /// assert_eq!(Value::Two, Value::from_u8(0));
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v % 13)]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Only upper case is accepted for face cards.
    ///
    /// ```
    /// use holdem_odds::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Translate a suit from a u8. Anything larger than 3 wraps around.
    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s % 4)]
    }

    /// Given a character that represents a suit try and parse that char.
    ///
    /// ```
    /// use holdem_odds::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('h'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    /// This Suit to a character.
    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards order by value first and then by suit. That
/// is the same order as their dense `u8` index.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Dense index of the card, rank-major and suit-minor. 2s is 0 and Ad is 51.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * 4 + card.suit as u8
    }
}

impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl TryFrom<&str> for Card {
    type Error = OddsError;

    /// Parse the two character encoding of a card. For example "Ah" or "Td"
    ///
    /// ```
    /// use holdem_odds::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_from("Ah").unwrap();
    /// assert_eq!(Card::new(Value::Ace, Suit::Heart), card);
    /// ```
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let value = chars
            .next()
            .ok_or(OddsError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(OddsError::UnexpectedValueChar)?;
        let suit = chars
            .next()
            .ok_or(OddsError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(OddsError::UnexpectedSuitChar)?;

        if chars.next().is_some() {
            return Err(OddsError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}

impl FromStr for Card {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::try_from(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Card::try_from(s.as_ref()).map_err(serde::de::Error::custom)
    }
}
