use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// holdem odds library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OddsError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} was used more than once")]
    DuplicateCard(Card),
    #[error("Exactly two hole cards are required, got {0}")]
    InvalidHoleCards(usize),
    #[error("At most five community cards can be dealt, got {0}")]
    TooManyCommunityCards(usize),
    #[error("At least one opponent is required")]
    NoOpponents,
    #[error("{known} opponent hands were given but there are only {opponents} opponents")]
    TooManyKnownOpponents { known: usize, opponents: usize },
    #[error("Number of players must be between 2 and 9, got {0}")]
    InvalidPlayerCount(usize),
    #[error("At least one trial must be simulated")]
    NoTrials,
    #[error("Only 5 to 7 cards can be ranked, got {0}")]
    InvalidHandSize(usize),
    #[error("Needed {needed} cards but only {remaining} remain in the deck")]
    DeckExhaustion { needed: usize, remaining: usize },
    #[error("Simulation was cancelled")]
    Cancelled,
    #[error("Simulation deadline exceeded")]
    DeadlineExceeded,
}

impl OddsError {
    /// Is this error the result of the caller passing in
    /// a game that can't be simulated?
    ///
    /// ```
    /// use holdem_odds::core::OddsError;
    ///
    /// assert!(OddsError::NoOpponents.is_invalid_input());
    /// assert!(!OddsError::Cancelled.is_invalid_input());
    /// ```
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            OddsError::InvalidHoleCards(_)
                | OddsError::TooManyCommunityCards(_)
                | OddsError::NoOpponents
                | OddsError::InvalidPlayerCount(_)
                | OddsError::NoTrials
                | OddsError::TooManyKnownOpponents { .. }
        )
    }
}
