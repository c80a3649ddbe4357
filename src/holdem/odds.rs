use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{event, trace_span};

use super::{GameState, HandOdds, Outcome, OutcomeCounts};
use crate::core::{Card, Deck, FlatDeck, Hand, OddsError, Rank, Rankable};

/// How many hands are simulated when nothing else is asked for.
pub const DEFAULT_TRIALS: usize = 1_000;

/// Everything about an estimate except the source of randomness.
///
/// This is what a `RngOddsCalculatorBuilder` fills in. It's cheap to
/// clone so it can be shared by many calculators running at once.
#[derive(Debug, Clone)]
pub struct OddsConfig {
    pub hole_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    /// Opponents whose hole cards are already known.
    pub known_opponents: Vec<[Card; 2]>,
    /// Total number of opponents, known or not.
    pub opponents: Option<usize>,
    pub trials: usize,
    /// When this is set to true any running simulation stops.
    pub cancel: Option<Arc<AtomicBool>>,
    /// Any simulation still running at this point stops.
    pub deadline: Option<Instant>,
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            hole_cards: vec![],
            community_cards: vec![],
            known_opponents: vec![],
            opponents: None,
            trials: DEFAULT_TRIALS,
            cancel: None,
            deadline: None,
        }
    }
}

impl OddsConfig {
    /// Total opponents, defaulting to however many hands are known.
    pub fn num_opponents(&self) -> usize {
        self.opponents.unwrap_or(self.known_opponents.len())
    }

    /// Check that a hand could be simulated with this config and return the
    /// deck of cards that are left to deal.
    pub fn remaining_deck(&self) -> Result<FlatDeck, OddsError> {
        if self.hole_cards.len() != 2 {
            return Err(OddsError::InvalidHoleCards(self.hole_cards.len()));
        }
        if self.community_cards.len() > 5 {
            return Err(OddsError::TooManyCommunityCards(
                self.community_cards.len(),
            ));
        }
        let opponents = self.num_opponents();
        if opponents == 0 {
            return Err(OddsError::NoOpponents);
        }
        if self.known_opponents.len() > opponents {
            return Err(OddsError::TooManyKnownOpponents {
                known: self.known_opponents.len(),
                opponents,
            });
        }
        if self.trials == 0 {
            return Err(OddsError::NoTrials);
        }

        let used: Vec<Card> = self
            .hole_cards
            .iter()
            .chain(self.community_cards.iter())
            .chain(self.known_opponents.iter().flatten())
            .copied()
            .collect();
        let deck = Deck::remaining(&used)?;

        let needed = (5 - self.community_cards.len())
            + 2 * (opponents - self.known_opponents.len());
        if needed > deck.len() {
            return Err(OddsError::DeckExhaustion {
                needed,
                remaining: deck.len(),
            });
        }
        Ok(deck)
    }

    pub(crate) fn check_interrupted(&self) -> Result<(), OddsError> {
        if let Some(cancel) = &self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(OddsError::Cancelled);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(OddsError::DeadlineExceeded);
            }
        }
        Ok(())
    }
}

/// # OddsCalculatorBuilder
///
/// `RngOddsCalculatorBuilder` is a builder to configure a monte carlo
/// estimate of how often a hand wins. Hole cards and the number of
/// opponents are required, other fields are optional.
///
/// `OddsCalculatorBuilder` is a type alias
/// for `RngOddsCalculatorBuilder<ThreadRng>` which is the default builder.
///
/// ## Examples
///
/// ```
/// use holdem_odds::core::Hand;
/// use holdem_odds::holdem::OddsCalculatorBuilder;
///
/// let hole = Hand::new_from_str("AdAh").unwrap();
/// let mut calc = OddsCalculatorBuilder::default()
///     .hole_cards(hole.cards())
///     .opponents(3)
///     .build()
///     .unwrap();
/// let odds = calc.estimate().unwrap();
/// assert!(odds.win_probability > 0.3);
/// ```
///
/// However sometimes you want a known but random simulation. In that
/// case you can pass in the rng like this:
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use holdem_odds::core::Hand;
/// use holdem_odds::holdem::OddsCalculatorBuilder;
///
/// let run = |seed| {
///     OddsCalculatorBuilder::default()
///         .hole_cards(Hand::new_from_str("7c2d").unwrap().cards())
///         .opponents(1)
///         .trials(500)
///         .rng(StdRng::seed_from_u64(seed))
///         .build()
///         .unwrap()
///         .estimate()
///         .unwrap()
/// };
/// assert_eq!(run(420), run(420));
/// ```
#[derive(Debug)]
pub struct RngOddsCalculatorBuilder<R: Rng> {
    config: OddsConfig,
    rng: R,
}

/// The rng is ThreadRng.
pub type OddsCalculatorBuilder = RngOddsCalculatorBuilder<ThreadRng>;

impl Default for RngOddsCalculatorBuilder<ThreadRng> {
    fn default() -> Self {
        Self {
            config: OddsConfig::default(),
            rng: rand::rng(),
        }
    }
}

impl<R: Rng> RngOddsCalculatorBuilder<R> {
    /// Set the hero's hole cards. Exactly two are needed to build.
    pub fn hole_cards(mut self, cards: &[Card]) -> Self {
        self.config.hole_cards = cards.to_vec();
        self
    }

    /// Set the known community cards, zero to five of them.
    pub fn community_cards(mut self, cards: &[Card]) -> Self {
        self.config.community_cards = cards.to_vec();
        self
    }

    /// Set how many opponents the hero is facing.
    pub fn opponents(mut self, opponents: usize) -> Self {
        self.config.opponents = Some(opponents);
        self
    }

    /// Add an opponent whose hole cards are known. They count towards
    /// `opponents`.
    pub fn opponent_hole_cards(mut self, cards: [Card; 2]) -> Self {
        self.config.known_opponents.push(cards);
        self
    }

    /// How many hands to simulate. Defaults to `DEFAULT_TRIALS`.
    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    /// Stop simulating as soon as this flag is set.
    pub fn cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.config.cancel = Some(cancel);
        self
    }

    /// Stop simulating once this instant has passed.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.config.deadline = Some(deadline);
        self
    }

    /// Use a different source of randomness.
    pub fn rng<R2: Rng>(self, rng: R2) -> RngOddsCalculatorBuilder<R2> {
        RngOddsCalculatorBuilder {
            config: self.config,
            rng,
        }
    }

    /// The config as it stands.
    pub fn config(&self) -> &OddsConfig {
        &self.config
    }

    /// Validate everything that was set and create the calculator.
    pub fn build(self) -> Result<OddsCalculator<R>, OddsError> {
        OddsCalculator::new(self.config, self.rng)
    }
}

/// Monte carlo win/tie estimator for a single hero hand.
///
/// Each trial starts from the same remaining deck, completes the board,
/// deals every unknown opponent two cards, and compares the best hands.
#[derive(Debug)]
pub struct OddsCalculator<R: Rng> {
    config: OddsConfig,
    rng: R,
    hole: [Card; 2],
    opponents: usize,
    /// Cards that can still be dealt before any trial starts.
    base_deck: FlatDeck,
    /// Per trial copy of `base_deck` that cards are dealt out of.
    deck: FlatDeck,
    board: Vec<Card>,
    opponent_cards: Vec<Card>,
}

impl<R: Rng> OddsCalculator<R> {
    pub fn new(config: OddsConfig, rng: R) -> Result<Self, OddsError> {
        let base_deck = config.remaining_deck()?;
        let hole = [config.hole_cards[0], config.hole_cards[1]];
        let opponents = config.num_opponents();

        Ok(Self {
            deck: base_deck.clone(),
            base_deck,
            board: Vec::with_capacity(5),
            opponent_cards: Vec::with_capacity(2 * opponents),
            hole,
            opponents,
            rng,
            config,
        })
    }

    pub fn config(&self) -> &OddsConfig {
        &self.config
    }

    /// Deal out one hand and see how the hero did.
    pub fn simulate_trial(&mut self) -> Result<Outcome, OddsError> {
        // Every trial starts from the same pool.
        self.deck.reset_from(&self.base_deck);

        self.board.clear();
        self.board.extend_from_slice(&self.config.community_cards);
        let missing = 5 - self.board.len();
        self.deck
            .deal_random_into(missing, &mut self.rng, &mut self.board)?;

        self.opponent_cards.clear();
        for known in &self.config.known_opponents {
            self.opponent_cards.extend_from_slice(known);
        }
        for _ in self.config.known_opponents.len()..self.opponents {
            self.deck
                .deal_random_into(2, &mut self.rng, &mut self.opponent_cards)?;
        }

        let hero = seven_cards(self.hole, &self.board).rank()?;
        let mut best_opponent: Option<Rank> = None;
        for pair in self.opponent_cards.chunks_exact(2) {
            let rank = seven_cards([pair[0], pair[1]], &self.board).rank()?;
            best_opponent = best_opponent.max(Some(rank));
        }

        Ok(match best_opponent {
            Some(best) => classify(hero, best),
            None => Outcome::Win,
        })
    }

    /// Simulate `trials` hands and count the outcomes.
    ///
    /// Cancellation and the deadline are checked before every trial. If
    /// either trips then no counts are returned at all.
    pub fn run(&mut self, trials: usize) -> Result<OutcomeCounts, OddsError> {
        let _span = trace_span!("run", trials, opponents = self.opponents).entered();
        let mut counts = OutcomeCounts::default();
        for _ in 0..trials {
            if let Err(e) = self.config.check_interrupted() {
                event!(
                    tracing::Level::WARN,
                    completed = counts.trials(),
                    trials,
                    error = %e,
                    "Stopping simulation early"
                );
                return Err(e);
            }
            counts.record(self.simulate_trial()?);
        }
        Ok(counts)
    }

    /// Run the configured number of trials and turn them into odds.
    pub fn estimate(&mut self) -> Result<HandOdds, OddsError> {
        let counts = self.run(self.config.trials)?;
        let odds = counts.odds();
        event!(
            tracing::Level::DEBUG,
            hole = %Hand::new_with_cards(self.hole.to_vec()),
            board = %Hand::new_with_cards(self.config.community_cards.clone()),
            opponents = self.opponents,
            wins = counts.wins,
            ties = counts.ties,
            losses = counts.losses,
            "Estimated odds"
        );
        Ok(odds)
    }
}

/// Hero's hand against the best opponent hand.
pub fn classify(hero: Rank, best_opponent: Rank) -> Outcome {
    match hero.cmp(&best_opponent) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Equal => Outcome::Tie,
        std::cmp::Ordering::Less => Outcome::Loss,
    }
}

fn seven_cards(hole: [Card; 2], board: &[Card]) -> [Card; 7] {
    let mut cards = [hole[0]; 7];
    cards[1] = hole[1];
    cards[2..].copy_from_slice(board);
    cards
}

/// Estimate the hero's odds using the thread local rng.
///
/// ```
/// use holdem_odds::core::Hand;
/// use holdem_odds::holdem::estimate;
///
/// let hole = Hand::new_from_str("AhKh").unwrap();
/// let board = Hand::new_from_str("QhJhTh").unwrap();
/// let odds = estimate(hole.cards(), board.cards(), 1, 100).unwrap();
/// assert_eq!(1.0, odds.win_probability);
/// ```
pub fn estimate(
    hole: &[Card],
    community: &[Card],
    opponents: usize,
    trials: usize,
) -> Result<HandOdds, OddsError> {
    estimate_with_rng(hole, community, opponents, trials, rand::rng())
}

/// Estimate the hero's odds with a caller supplied rng.
pub fn estimate_with_rng<R: Rng>(
    hole: &[Card],
    community: &[Card],
    opponents: usize,
    trials: usize,
    rng: R,
) -> Result<HandOdds, OddsError> {
    OddsCalculatorBuilder::default()
        .hole_cards(hole)
        .community_cards(community)
        .opponents(opponents)
        .trials(trials)
        .rng(rng)
        .build()?
        .estimate()
}

/// Odds for a game with `DEFAULT_TRIALS` simulated hands.
///
/// The game has to have exactly two hole cards and two to nine players.
pub fn calculate_odds(game_state: &GameState) -> Result<HandOdds, OddsError> {
    game_state.validate()?;
    estimate(
        &game_state.hole_cards,
        &game_state.community_cards,
        game_state.opponents(),
        DEFAULT_TRIALS,
    )
}
