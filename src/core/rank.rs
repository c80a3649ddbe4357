use std::cmp::Ordering;
use std::fmt;

use super::{Card, CardBitSet, CardIter, Hand, OddsError, Value};

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
///
/// The u32 keys are built so that comparing them is the same
/// as comparing the ranks that decide the hand, highest first:
///
/// - A set of distinct values is a bitset (bit = `Value as u32`). Two
///   bitsets with the same number of bits compare like their values
///   sorted high to low.
/// - Grouped hands put the group bits above the kickers, `major << 13 | minor`.
/// - Straights store the index of the straight, the wheel being 0.
///
/// That means the derived `Ord` is the total order of poker hands and
/// equality is a split pot.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

/// Just the category of a hand, without anything to break ties.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

impl Rank {
    /// Which of the nine categories this rank is in.
    ///
    /// ```
    /// use holdem_odds::core::{HandCategory, Hand, Rankable};
    ///
    /// let hand = Hand::new_from_str("Ah2c3d4h5s").unwrap();
    /// assert_eq!(HandCategory::Straight, hand.rank().unwrap().category());
    /// ```
    pub fn category(&self) -> HandCategory {
        match self {
            Rank::HighCard(_) => HandCategory::HighCard,
            Rank::OnePair(_) => HandCategory::OnePair,
            Rank::TwoPair(_) => HandCategory::TwoPair,
            Rank::ThreeOfAKind(_) => HandCategory::ThreeOfAKind,
            Rank::Straight(_) => HandCategory::Straight,
            Rank::Flush(_) => HandCategory::Flush,
            Rank::FullHouse(_) => HandCategory::FullHouse,
            Rank::FourOfAKind(_) => HandCategory::FourOfAKind,
            Rank::StraightFlush(_) => HandCategory::StraightFlush,
        }
    }

    /// The value the straight or straight flush is "high" at.
    /// None for every other kind of hand.
    pub fn straight_high(&self) -> Option<Value> {
        match self {
            // The wheel is 0 and plays as five high.
            Rank::Straight(idx) | Rank::StraightFlush(idx) => {
                Some(Value::from_u8(*idx as u8 + Value::Five as u8))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.straight_high() {
            Some(high) => write!(f, "{}, {} high", self.category(), high.to_char()),
            None => write!(f, "{}", self.category()),
        }
    }
}

/// Total order of two hand ranks.
///
/// `Ordering::Equal` means the hands split the pot, not just that they
/// share a category.
///
/// ```
/// use std::cmp::Ordering;
/// use holdem_odds::core::{compare, Hand, Rankable};
///
/// let wheel = Hand::new_from_str("Ah2c3d4h5s").unwrap().rank().unwrap();
/// let six_high = Hand::new_from_str("6h5h4h3h2c").unwrap().rank().unwrap();
/// assert_eq!(Ordering::Less, compare(&wheel, &six_high));
/// ```
pub fn compare(a: &Rank, b: &Rank) -> Ordering {
    a.cmp(b)
}

const fn straight_mask(low: u32) -> u32 {
    0b11111 << low
}

const WHEEL: u32 = 1 << (Value::Ace as u32)
    | 1 << (Value::Two as u32)
    | 1 << (Value::Three as u32)
    | 1 << (Value::Four as u32)
    | 1 << (Value::Five as u32);

/// Every straight, lowest first.
pub const STRAIGHTS: [u32; 10] = [
    // Wheel.
    WHEEL,
    // "Normal" straights starting at two to six.
    straight_mask(Value::Two as u32),
    straight_mask(Value::Three as u32),
    straight_mask(Value::Four as u32),
    straight_mask(Value::Five as u32),
    straight_mask(Value::Six as u32),
    straight_mask(Value::Seven as u32),
    straight_mask(Value::Eight as u32),
    straight_mask(Value::Nine as u32),
    // Royal straight
    straight_mask(Value::Ten as u32),
];

fn rank_straight(value_set: u32) -> Option<u32> {
    STRAIGHTS
        .iter()
        .position(|s| *s == value_set)
        .map(|idx| idx as u32)
}

/// Bitset of the values that show up exactly `n` times.
fn values_with_count(counts: &[u8; 13], n: u8) -> u32 {
    counts
        .iter()
        .enumerate()
        .filter(|&(_, c)| *c == n)
        .fold(0, |set, (v, _)| set | 1 << v)
}

/// Rank exactly five cards.
///
/// The cards must be distinct. Use `Rankable::rank` when that isn't
/// already known.
pub fn rank_five(cards: &[Card; 5]) -> Rank {
    // use for bitset
    let mut suit_set: u32 = 0;
    // Use for bitset
    let mut value_set: u32 = 0;
    let mut value_to_count = [0u8; 13];

    for c in cards {
        let v = c.value as usize;
        suit_set |= 1 << (c.suit as u32);
        value_set |= 1 << v;
        value_to_count[v] += 1;
    }

    // The major deciding factor for hand rank
    // is the number of unique card values.
    match value_set.count_ones() {
        5 => {
            // If there are five different cards it can be a straight
            // a straight flush, a flush, or just a high card.
            let is_flush = suit_set.count_ones() == 1;
            match (rank_straight(value_set), is_flush) {
                (Some(idx), true) => Rank::StraightFlush(idx),
                (Some(idx), false) => Rank::Straight(idx),
                (None, true) => Rank::Flush(value_set),
                (None, false) => Rank::HighCard(value_set),
            }
        }
        4 => {
            let major_rank = values_with_count(&value_to_count, 2);
            let minor_rank = value_set ^ major_rank;
            Rank::OnePair(major_rank << 13 | minor_rank)
        }
        3 => {
            // this can be three of a kind or two pair.
            let three_value = values_with_count(&value_to_count, 3);
            if three_value != 0 {
                Rank::ThreeOfAKind(three_value << 13 | (value_set ^ three_value))
            } else {
                let major_rank = values_with_count(&value_to_count, 2);
                Rank::TwoPair(major_rank << 13 | (value_set ^ major_rank))
            }
        }
        _ => {
            // Two unique values. Full house, or four of a kind.
            let three_value = values_with_count(&value_to_count, 3);
            if three_value != 0 {
                Rank::FullHouse(three_value << 13 | (value_set ^ three_value))
            } else {
                let four_value = values_with_count(&value_to_count, 4);
                Rank::FourOfAKind(four_value << 13 | (value_set ^ four_value))
            }
        }
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// The cards to be ranked.
    fn cards(&self) -> &[Card];

    /// Rank the best five card hand that can be made from these cards.
    ///
    /// Five cards are ranked as is. With six or seven cards every five
    /// card subset is ranked and the best one is returned. It doesn't do
    /// any caching so it's left up to the user to understand that
    /// duplicate work will be done if this is called more than once.
    ///
    /// ```
    /// use holdem_odds::core::{Hand, Rank, Rankable};
    ///
    /// let hand = Hand::new_from_str("AhKhQhJhTh2c3d").unwrap();
    /// assert!(matches!(hand.rank().unwrap(), Rank::StraightFlush(9)));
    /// ```
    fn rank(&self) -> Result<Rank, OddsError> {
        let cards = self.cards();
        if !(5..=7).contains(&cards.len()) {
            return Err(OddsError::InvalidHandSize(cards.len()));
        }

        let mut seen = CardBitSet::new();
        for c in cards {
            if !seen.insert(*c) {
                return Err(OddsError::DuplicateCard(*c));
            }
        }

        CardIter::<5>::new(cards)
            .map(|five| rank_five(&five))
            .max()
            .ok_or(OddsError::InvalidHandSize(cards.len()))
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl<const N: usize> Rankable for [Card; N] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Hand {
    fn cards(&self) -> &[Card] {
        &self[..]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Deck, FlatDeck, Suit};

    fn rank_str(s: &str) -> Rank {
        Hand::new_from_str(s).unwrap().rank().unwrap()
    }

    fn bits(values: &[Value]) -> u32 {
        values.iter().fold(0, |set, v| set | 1 << (*v as u32))
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::HighCard(0) < Rank::StraightFlush(0));
        assert!(Rank::HighCard(0) < Rank::FourOfAKind(0));
        assert!(Rank::HighCard(0) < Rank::ThreeOfAKind(0));
        assert!(Rank::HighCard(u32::MAX) < Rank::OnePair(0));
    }

    #[test]
    fn test_cmp_high() {
        assert!(Rank::HighCard(0) < Rank::HighCard(100));
    }

    #[test]
    fn test_high_card_hand() {
        let rank = bits(&[
            Value::Ace,
            Value::Eight,
            Value::Nine,
            Value::Ten,
            Value::Five,
        ]);
        assert_eq!(Rank::HighCard(rank), rank_str("Ad8h9cTc5c"));
    }

    #[test]
    fn test_flush() {
        let rank = bits(&[
            Value::Ace,
            Value::Eight,
            Value::Nine,
            Value::Ten,
            Value::Five,
        ]);
        assert_eq!(Rank::Flush(rank), rank_str("Ad8d9dTd5d"));
    }

    #[test]
    fn test_full_house() {
        let rank = bits(&[Value::Nine]) << 13 | bits(&[Value::Ace]);
        assert_eq!(Rank::FullHouse(rank), rank_str("AdAc9d9c9s"));
    }

    #[test]
    fn test_two_pair() {
        let rank = bits(&[Value::Ace, Value::Nine]) << 13 | bits(&[Value::Ten]);
        assert_eq!(Rank::TwoPair(rank), rank_str("AdAc9d9cTs"));
    }

    #[test]
    fn test_one_pair() {
        let rank =
            bits(&[Value::Ace]) << 13 | bits(&[Value::Nine, Value::Eight, Value::Ten]);
        assert_eq!(Rank::OnePair(rank), rank_str("AdAc9d8cTs"));
    }

    #[test]
    fn test_four_of_a_kind() {
        let rank = bits(&[Value::Ace]) << 13 | bits(&[Value::Ten]);
        assert_eq!(Rank::FourOfAKind(rank), rank_str("AdAcAsAhTs"));
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = bits(&[Value::Two]) << 13 | bits(&[Value::Five, Value::Six]);
        assert_eq!(Rank::ThreeOfAKind(rank), rank_str("2c2s2h5s6d"));
    }

    #[test]
    fn test_wheel() {
        let wheel = rank_str("Ah2c3d4h5s");
        assert_eq!(Rank::Straight(0), wheel);
        assert_eq!(Some(Value::Five), wheel.straight_high());
        assert_eq!("Straight, 5 high", wheel.to_string());
    }

    #[test]
    fn test_straight() {
        assert_eq!(Rank::Straight(1), rank_str("2c3s4h5s6d"));
        assert_eq!(Some(Value::Ace), rank_str("TcJsQhKsAd").straight_high());
    }

    #[test]
    fn test_wheel_ordering() {
        let wheel = rank_str("Ah2c3d4h5s");
        // Below a six high straight
        assert!(wheel < rank_str("6h5h4h3h2c"));
        assert!(wheel < rank_str("6h5c4d3s2c"));
        // Still a straight, so above any set
        assert!(wheel > rank_str("AcAdAs2h3c"));
        assert!(wheel > rank_str("KhKdQcQs9s"));
        // And below a flush, full house, quads and straight flushes.
        assert!(wheel < rank_str("2h4h6h8hTh"));
        assert!(wheel < rank_str("2h2d2c3s3h"));
        assert!(wheel < rank_str("2h2d2c2s3h"));
        assert!(wheel < rank_str("Ac2c3c4c5c"));
        // Not an ace high straight
        assert!(wheel < rank_str("AhKcQdJsTs"));
    }

    #[test]
    fn test_steel_wheel() {
        let steel = rank_str("Ac2c3c4c5c");
        assert_eq!(Rank::StraightFlush(0), steel);
        assert!(steel > rank_str("AhAdAcAsKh"));
        assert!(steel < rank_str("6c2c3c4c5c"));
    }

    #[test]
    fn test_royal_flush_beats_everything_else() {
        let royal = rank_str("AhKhQhJhTh");
        assert_eq!(Rank::StraightFlush(9), royal);
        for other in [
            "AsAcAdAhKs",
            "AsAcAdKdKs",
            "AsKsQsJs9s",
            "AsKdQcJhTs",
            "KsKdKcKh2s",
        ] {
            assert!(royal > rank_str(other));
        }
    }

    #[test]
    fn test_kickers_break_ties() {
        // Pair of aces, king kicker beats queen kicker.
        assert!(rank_str("AhAdKc7s2d") > rank_str("AcAsQh7d2c"));
        // Same pair, same kickers is a split.
        assert_eq!(rank_str("AhAdKc7s2d"), rank_str("AcAsKh7d2c"));
        // Last kicker decides.
        assert!(rank_str("AhAdKc7s3d") > rank_str("AcAsKh7d2c"));
        // Two pair, the higher pair matters first.
        assert!(rank_str("AhAd2c2s3d") > rank_str("KhKdQcQs3c"));
        // Then the lower pair.
        assert!(rank_str("AhAd3c3s2d") > rank_str("AcAs2h2dKc"));
        // Then the kicker.
        assert!(rank_str("AhAd3c3sKd") > rank_str("AcAs3h3dQc"));
        // Full house is trips first.
        assert!(rank_str("3h3d3cAsAd") > rank_str("2h2d2cAcAh"));
        assert!(rank_str("3h3d3cAsAd") > rank_str("3h3d3sKsKd"));
        // Flushes compare high card down.
        assert!(rank_str("Ah9h7h5h3h") > rank_str("Ad9d7d5d2d"));
        assert_eq!(rank_str("Ah9h7h5h3h"), rank_str("Ad9d7d5d3d"));
        // High card compares every card.
        assert!(rank_str("AhKd7h5h3c") > rank_str("AdQd7d5d3h"));
    }

    #[test]
    fn test_seven_cards_best_five() {
        // Flush beats the straight that is also there.
        assert_eq!(
            HandCategory::Flush,
            rank_str("9h8h7h6h2h5cTc").category()
        );
        // Two sets make a full house, aces full of kings.
        assert_eq!(
            Rank::FullHouse(bits(&[Value::Ace]) << 13 | bits(&[Value::King])),
            rank_str("AhAdAcKhKdKc2s")
        );
        // Three pair only plays two of them plus the best kicker.
        assert_eq!(rank_str("AhAdKhKdQc"), rank_str("AhAdKhKdQhQd2s"));
        // Quads take the highest kicker.
        assert_eq!(
            Rank::FourOfAKind(bits(&[Value::Ace]) << 13 | bits(&[Value::King])),
            rank_str("AhAdAcAs2c3cKd")
        );
        // Seven in a row plays the top five.
        assert_eq!(rank_str("4c5d6h7s8c"), rank_str("2c3d4h5s6c7d8h"));
        // The six high straight is picked over the wheel.
        assert_eq!(Rank::Straight(1), rank_str("Ah2c3d4h5s6cKd"));
        // Six suited cards use the top five.
        assert_eq!(rank_str("KhJh9h7h5h"), rank_str("KhJh9h7h5h3h2c"));
        // Straight flush inside a bigger flush.
        assert_eq!(Rank::StraightFlush(4), rank_str("5h6h7h8h9hAh2h"));
    }

    #[test]
    fn test_six_cards() {
        assert_eq!(
            Rank::ThreeOfAKind(bits(&[Value::Queen]) << 13 | bits(&[Value::Ace, Value::Nine])),
            rank_str("QhQdQc9s2cAd")
        );
    }

    #[test]
    fn test_board_plays_is_a_tie() {
        // Both players play the board straight.
        let board = "9c8d7h6s5c";
        let one = rank_str(&format!("{board}2h2d"));
        let two = rank_str(&format!("{board}3h2c"));
        assert_eq!(Ordering::Equal, compare(&one, &two));
    }

    #[test]
    fn test_invalid_sizes() {
        let four = Hand::new_from_str("AhKhQhJh").unwrap();
        assert_eq!(Err(OddsError::InvalidHandSize(4)), four.rank());
        let eight = Hand::new_from_str("AhKhQhJhTh9h8h7h").unwrap();
        assert_eq!(Err(OddsError::InvalidHandSize(8)), eight.rank());
    }

    #[test]
    fn test_duplicate_cards() {
        let ah = Card::new(Value::Ace, Suit::Heart);
        let cards = vec![ah, ah, Card::from(0), Card::from(1), Card::from(2)];
        assert_eq!(Err(OddsError::DuplicateCard(ah)), cards.rank());
    }

    #[test]
    fn test_straight_constants() {
        for c in STRAIGHTS.iter() {
            // Make sure that all of the constant hands have exactly 5 ones.
            assert_eq!(5, c.count_ones());
        }
        assert!(STRAIGHTS[1..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_total_order_on_random_hands() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut deck: FlatDeck = Deck::default().into();
        let mut ranks = Vec::with_capacity(200);
        for _ in 0..200 {
            deck.shuffle(&mut rng);
            let seven: [Card; 7] = std::array::from_fn(|i| deck[i]);
            ranks.push(seven.rank().unwrap());
        }

        for a in &ranks {
            assert_eq!(Ordering::Equal, compare(a, a));
            for b in &ranks {
                assert_eq!(compare(a, b), compare(b, a).reverse());
            }
        }
    }

    #[test]
    fn test_all_five_card_hands() {
        let deck: FlatDeck = Deck::default().into();
        let mut counts = [0usize; 9];
        let mut distinct: HashSet<Rank> = HashSet::new();
        for five in CardIter::<5>::new(&deck[..]) {
            let rank = rank_five(&five);
            counts[rank.category() as usize] += 1;
            distinct.insert(rank);
        }

        assert_eq!(
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40],
            counts
        );
        // The well known number of distinct five card hand values.
        assert_eq!(7_462, distinct.len());
    }
}
