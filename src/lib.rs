//! Holdem Odds is a library for estimating how often a Texas Hold'em
//! hand wins or ties.
//!
//! It is split the same way a hand is played:
//!
//! - `core` has cards, decks and the five to seven card hand ranking. Nothing
//!   in there knows about hold'em.
//! - `holdem` has the game description and the monte carlo equity simulation.
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use holdem_odds::core::Hand;
//! use holdem_odds::holdem::OddsCalculatorBuilder;
//!
//! let hole = Hand::new_from_str("AhKh").unwrap();
//! let board = Hand::new_from_str("QhJhTh").unwrap();
//!
//! let odds = OddsCalculatorBuilder::default()
//!     .hole_cards(hole.cards())
//!     .community_cards(board.cards())
//!     .opponents(1)
//!     .trials(100)
//!     .rng(StdRng::seed_from_u64(420))
//!     .build()
//!     .unwrap()
//!     .estimate()
//!     .unwrap();
//!
//! // Nothing beats a royal flush.
//! assert_eq!(1.0, odds.win_probability);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
