use std::ops::{Add, AddAssign};

use crate::core::{Card, Deck, OddsError};

/// The fewest players that can sit at a table, hero included.
pub const MIN_PLAYERS: usize = 2;
/// The most players that can sit at a table, hero included.
pub const MAX_PLAYERS: usize = 9;

/// Everything known about the hand being asked about.
///
/// While cards are being picked there can be fewer than two hole cards.
/// Odds can only be calculated once both are known.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// The hero's private cards.
    pub hole_cards: Vec<Card>,
    /// The shared board. Flop, turn, and river.
    pub community_cards: Vec<Card>,
    /// Players at the table, hero included.
    pub number_of_players: usize,
}

impl GameState {
    pub fn new(
        hole_cards: Vec<Card>,
        community_cards: Vec<Card>,
        number_of_players: usize,
    ) -> Self {
        Self {
            hole_cards,
            community_cards,
            number_of_players,
        }
    }

    /// Number of players the hero is up against.
    pub fn opponents(&self) -> usize {
        self.number_of_players.saturating_sub(1)
    }

    /// Is this a state that odds can be calculated for?
    ///
    /// ```
    /// use holdem_odds::core::{Card, OddsError};
    /// use holdem_odds::holdem::GameState;
    ///
    /// let ah = Card::try_from("Ah").unwrap();
    /// let state = GameState::new(vec![ah], vec![], 2);
    /// assert_eq!(Err(OddsError::InvalidHoleCards(1)), state.validate());
    /// ```
    pub fn validate(&self) -> Result<(), OddsError> {
        if self.hole_cards.len() != 2 {
            return Err(OddsError::InvalidHoleCards(self.hole_cards.len()));
        }
        if self.community_cards.len() > 5 {
            return Err(OddsError::TooManyCommunityCards(
                self.community_cards.len(),
            ));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.number_of_players) {
            return Err(OddsError::InvalidPlayerCount(self.number_of_players));
        }
        let used: Vec<Card> = self
            .hole_cards
            .iter()
            .chain(self.community_cards.iter())
            .copied()
            .collect();
        Deck::without(&used)?;
        Ok(())
    }
}

/// How a single simulated hand ended for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Hero's hand was strictly better than every opponent.
    Win,
    /// Hero shared the best hand with at least one opponent.
    Tie,
    /// Someone had a better hand.
    Loss,
}

/// Running totals of simulated outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeCounts {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    /// Total number of trials recorded.
    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Standard error of the win probability estimate, `sqrt(p(1-p)/n)`.
    pub fn win_standard_error(&self) -> f64 {
        let n = self.trials();
        if n == 0 {
            return 0.0;
        }
        let p = self.wins as f64 / n as f64;
        (p * (1.0 - p) / n as f64).sqrt()
    }

    pub fn odds(&self) -> HandOdds {
        HandOdds::from(*self)
    }
}

impl Add for OutcomeCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

impl AddAssign for OutcomeCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.ties += rhs.ties;
        self.losses += rhs.losses;
    }
}

/// The answer. Probabilities are all in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandOdds {
    pub win_probability: f64,
    pub tie_probability: f64,
}

impl HandOdds {
    /// Whatever isn't a win or a tie.
    pub fn loss_probability(&self) -> f64 {
        (1.0 - self.win_probability - self.tie_probability).max(0.0)
    }
}

impl From<OutcomeCounts> for HandOdds {
    fn from(counts: OutcomeCounts) -> Self {
        let trials = counts.trials();
        if trials == 0 {
            return HandOdds::default();
        }
        Self {
            win_probability: counts.wins as f64 / trials as f64,
            tie_probability: counts.ties as f64 / trials as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::Hand;

    fn state(hole: &str, board: &str, players: usize) -> GameState {
        GameState::new(
            Hand::new_from_str(hole).unwrap().into(),
            Hand::new_from_str(board).unwrap().into(),
            players,
        )
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(Ok(()), state("AhKh", "", 2).validate());
        assert_eq!(Ok(()), state("AhKh", "2c3c4c5c6c", 9).validate());
        assert_eq!(8, state("AhKh", "", 9).opponents());
    }

    #[test]
    fn test_validate_errors() {
        assert_eq!(
            Err(OddsError::InvalidHoleCards(0)),
            state("", "", 2).validate()
        );
        assert_eq!(
            Err(OddsError::InvalidHoleCards(3)),
            state("AhKhQh", "", 2).validate()
        );
        assert_eq!(
            Err(OddsError::TooManyCommunityCards(6)),
            state("AhKh", "2c3c4c5c6c7c", 2).validate()
        );
        assert_eq!(
            Err(OddsError::InvalidPlayerCount(1)),
            state("AhKh", "", 1).validate()
        );
        assert_eq!(
            Err(OddsError::InvalidPlayerCount(10)),
            state("AhKh", "", 10).validate()
        );
        let ah = Card::try_from("Ah").unwrap();
        assert_eq!(
            Err(OddsError::DuplicateCard(ah)),
            state("AhKh", "2cAh", 2).validate()
        );
    }

    #[test]
    fn test_counts_to_odds() {
        let mut counts = OutcomeCounts::default();
        for _ in 0..6 {
            counts.record(Outcome::Win);
        }
        counts.record(Outcome::Tie);
        for _ in 0..3 {
            counts.record(Outcome::Loss);
        }
        assert_eq!(10, counts.trials());

        let odds = counts.odds();
        assert_relative_eq!(0.6, odds.win_probability);
        assert_relative_eq!(0.1, odds.tie_probability);
        assert_relative_eq!(0.3, odds.loss_probability(), epsilon = 1e-12);
        assert_relative_eq!((0.6f64 * 0.4 / 10.0).sqrt(), counts.win_standard_error());
    }

    #[test]
    fn test_counts_add() {
        let a = OutcomeCounts {
            wins: 1,
            ties: 2,
            losses: 3,
        };
        let mut b = a + a;
        assert_eq!(12, b.trials());
        b += a;
        assert_eq!(
            OutcomeCounts {
                wins: 3,
                ties: 6,
                losses: 9
            },
            b
        );
    }

    #[test]
    fn test_empty_counts() {
        let odds = OutcomeCounts::default().odds();
        assert_eq!(HandOdds::default(), odds);
        assert_eq!(1.0, odds.loss_probability());
    }
}
