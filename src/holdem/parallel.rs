//! Run an estimate across every core with rayon.
//!
//! Trials are split into fixed size batches. Each batch gets its own
//! `StdRng` seeded from the caller's seed and the batch index, so the
//! answer for a seed is the same no matter how many threads run it or
//! in what order the batches finish.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{event, trace_span};

use super::{HandOdds, OddsCalculator, OddsConfig, OutcomeCounts, RngOddsCalculatorBuilder};
use crate::core::{Card, OddsError};

/// Trials per batch.
pub const BATCH_SIZE: usize = 1_000;

fn batch_seed(seed: u64, batch: u64) -> u64 {
    seed ^ batch.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Run all of the configured trials in parallel and sum up the outcomes.
pub fn run_parallel(config: &OddsConfig, seed: u64) -> Result<OutcomeCounts, OddsError> {
    // Fail once on bad input rather than once per batch.
    config.remaining_deck()?;

    let trials = config.trials;
    let batches = trials.div_ceil(BATCH_SIZE);
    let _span = trace_span!("run_parallel", trials, batches, seed).entered();

    let counts = (0..batches)
        .into_par_iter()
        .map(|batch| {
            let size = BATCH_SIZE.min(trials - batch * BATCH_SIZE);
            let rng = StdRng::seed_from_u64(batch_seed(seed, batch as u64));
            OddsCalculator::new(config.clone(), rng)?.run(size)
        })
        .try_reduce(OutcomeCounts::default, |a, b| Ok(a + b))?;

    event!(
        tracing::Level::DEBUG,
        wins = counts.wins,
        ties = counts.ties,
        losses = counts.losses,
        "Parallel estimate finished"
    );
    Ok(counts)
}

impl<R: Rng> RngOddsCalculatorBuilder<R> {
    /// Estimate using every core. The builder's rng is not used, the
    /// seed decides everything.
    ///
    /// ```
    /// use holdem_odds::core::Hand;
    /// use holdem_odds::holdem::OddsCalculatorBuilder;
    ///
    /// let odds = OddsCalculatorBuilder::default()
    ///     .hole_cards(Hand::new_from_str("QsQh").unwrap().cards())
    ///     .opponents(2)
    ///     .trials(4_000)
    ///     .estimate_parallel(42)
    ///     .unwrap();
    /// assert!(odds.win_probability > 0.5);
    /// ```
    pub fn estimate_parallel(self, seed: u64) -> Result<HandOdds, OddsError> {
        run_parallel(self.config(), seed).map(HandOdds::from)
    }
}

/// Parallel version of `estimate` that is reproducible from `seed`.
pub fn estimate_parallel(
    hole: &[Card],
    community: &[Card],
    opponents: usize,
    trials: usize,
    seed: u64,
) -> Result<HandOdds, OddsError> {
    let config = OddsConfig {
        hole_cards: hole.to_vec(),
        community_cards: community.to_vec(),
        opponents: Some(opponents),
        trials,
        ..OddsConfig::default()
    };
    run_parallel(&config, seed).map(HandOdds::from)
}
